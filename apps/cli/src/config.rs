//! Runtime configuration resolved from CLI flags and `QUIZ_*` variables.

use quiz_core::ParserConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;

pub fn parser_config(cli: &Cli) -> ParserConfig {
    ParserConfig::from_strings(&cli.question_prefix, &cli.option_prefixes, &cli.answer_prefix)
}

/// Shuffle source; seeded runs always produce the same question order.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
