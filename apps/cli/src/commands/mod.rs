//! Subcommand implementations.

pub mod parse;
pub mod quiz;

pub use parse::run_parse;
pub use quiz::run_quiz;
