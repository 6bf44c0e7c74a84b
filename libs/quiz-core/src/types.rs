//! Core types for the quiz parser.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiple-choice question parsed from a question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question body, multi-line bodies joined with single spaces.
    pub text: String,
    /// Option lines in file order, each keeping its label (e.g. "A. Paris").
    pub options: Vec<String>,
    /// Correct letter(s), e.g. "B" or "A,C". Empty if never resolved.
    pub answer: String,
}

impl Question {
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }
}

/// Answers declared as `N. X` lines, keyed by 1-based question position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    entries: BTreeMap<usize, String>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A later entry for the same position replaces the earlier one.
    pub fn insert(&mut self, position: usize, answer: String) {
        self.entries.insert(position, answer);
    }

    /// Look up the answer for a 1-based position.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(&position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const DEFAULT_QUESTION_PREFIX: &str = "NO.";
pub const DEFAULT_OPTION_PREFIXES: &str = "A., B., C., D.";
pub const DEFAULT_ANSWER_PREFIX: &str = "Answer:";

/// Line prefixes that drive question classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub question_prefix: String,
    pub option_prefixes: Vec<String>,
    pub answer_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::from_strings(
            DEFAULT_QUESTION_PREFIX,
            DEFAULT_OPTION_PREFIXES,
            DEFAULT_ANSWER_PREFIX,
        )
    }
}

impl ParserConfig {
    /// Build a config from raw user input.
    ///
    /// Every value is trimmed; `option_prefixes` is a comma-separated list
    /// and blank entries are dropped.
    pub fn from_strings(question_prefix: &str, option_prefixes: &str, answer_prefix: &str) -> Self {
        Self {
            question_prefix: question_prefix.trim().to_string(),
            option_prefixes: option_prefixes
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
            answer_prefix: answer_prefix.trim().to_string(),
        }
    }

    /// Reject prefixes that would match every line.
    pub fn validate(&self) -> Result<()> {
        if self.question_prefix.is_empty() {
            return Err(ParseError::InvalidConfig("question prefix is empty".to_string()));
        }
        if self.answer_prefix.is_empty() {
            return Err(ParseError::InvalidConfig("answer prefix is empty".to_string()));
        }
        if self.option_prefixes.iter().any(String::is_empty) {
            return Err(ParseError::InvalidConfig("option prefix is empty".to_string()));
        }
        Ok(())
    }

    pub(crate) fn is_option(&self, line: &str) -> bool {
        self.option_prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }
}
