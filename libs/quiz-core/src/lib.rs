//! Core quiz library shared by the quiz applications.
//!
//! Provides:
//! - Plain-text parser for multiple-choice question files
//! - Answer matching for option selections
//! - Quiz session bookkeeping (score, attempted, incorrect)
//! - Shared types (Question, AnswerKey, ParserConfig)

pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod types;

pub use error::{ParseError, Result};
pub use matching::{
    answer_letters, compare_selection, option_letter, selection_letters, MatchResult,
    LETTERED_OPTIONS,
};
pub use parser::{load_questions, load_questions_with_rng, parse, parse_in_order, scan_answer_key};
pub use session::{Outcome, QuizSession, SessionSummary};
pub use types::{
    AnswerKey, ParserConfig, Question, DEFAULT_ANSWER_PREFIX, DEFAULT_OPTION_PREFIXES,
    DEFAULT_QUESTION_PREFIX,
};
