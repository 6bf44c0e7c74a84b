//! Quiz session bookkeeping.
//!
//! A session walks a loaded question list front to back. Each submit scores
//! the current question and advances; the session is finished once every
//! question has been submitted.

use crate::matching::compare_selection;
use crate::types::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of submitting a selection for the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub is_correct: bool,
    /// Correct letters as written in the question file.
    pub expected: String,
    /// Selected letters, sorted.
    pub selected: String,
}

/// Final results of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub total: usize,
    pub attempted: u32,
    pub incorrect: u32,
    /// Score as a percentage of all questions.
    pub percentage: f64,
    pub elapsed_seconds: i64,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    attempted: u32,
    incorrect: u32,
    incorrect_questions: Vec<String>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self::started_at(questions, Utc::now())
    }

    pub fn started_at(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            attempted: 0,
            incorrect: 0,
            incorrect_questions: Vec::new(),
            started_at,
        }
    }

    /// Question awaiting an answer, or `None` once finished.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Texts of questions answered incorrectly, in answer order.
    pub fn incorrect_questions(&self) -> &[String] {
        &self.incorrect_questions
    }

    /// Questions not yet shown, excluding the current one.
    pub fn questions_left(&self) -> usize {
        self.questions.len().saturating_sub(self.current_index + 1)
    }

    /// Fraction of questions attempted, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        f64::from(self.attempted) / self.questions.len() as f64
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Score the current question against the selected option indices and
    /// advance. Returns `None` when the session is already finished.
    pub fn submit(&mut self, selected: &[usize]) -> Option<Outcome> {
        let question = self.questions.get(self.current_index)?;
        let result = compare_selection(selected, question.answer.trim());

        self.attempted += 1;
        if result.is_correct {
            self.score += 1;
        } else {
            self.incorrect += 1;
            self.incorrect_questions.push(question.text.clone());
        }

        let outcome = Outcome {
            is_correct: result.is_correct,
            expected: question.answer.trim().to_string(),
            selected: result.selected,
        };

        tracing::debug!(
            index = self.current_index,
            correct = outcome.is_correct,
            "submitted answer"
        );
        self.current_index += 1;
        Some(outcome)
    }

    /// Incorrect answers as a percentage of attempted questions.
    pub fn percentage_incorrect(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        f64::from(self.incorrect) / f64::from(self.attempted) * 100.0
    }

    pub fn summary(&self, now: DateTime<Utc>) -> SessionSummary {
        let total = self.questions.len();
        let percentage = if total > 0 {
            f64::from(self.score) / total as f64 * 100.0
        } else {
            0.0
        };

        SessionSummary {
            score: self.score,
            total,
            attempted: self.attempted,
            incorrect: self.incorrect,
            percentage,
            elapsed_seconds: (now - self.started_at).num_seconds(),
        }
    }
}
