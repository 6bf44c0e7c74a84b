//! Plain-text parser for multiple-choice question files.
//!
//! # Format
//! ```text
//! NO.1 Which city is the capital of France?
//! A. Berlin
//! B. Paris
//! C. Rome
//! Answer: B
//!
//! NO.2 Pick all primes
//! A. 2
//! B. 4
//! C. 3
//!
//! 2. A,C
//! ```
//!
//! A question ends at an answer line, a blank line, the next question line or
//! the end of the file. Questions without an inline answer take theirs from
//! the `N. X` answer-key lines, which may appear anywhere in the file.

use crate::error::{ParseError, Result};
use crate::types::{AnswerKey, ParserConfig, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static ANSWER_KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn answer_key_regex() -> &'static Regex {
    ANSWER_KEY_PATTERN
        .get_or_init(|| Regex::new(r"^\d+\.\s*[A-Z]").expect("static regex must compile"))
}

/// Read a question file and return its questions in random order.
pub fn load_questions(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Vec<Question>> {
    load_questions_with_rng(path, config, &mut rand::thread_rng())
}

/// Read a question file and shuffle its questions with the given generator.
pub fn load_questions_with_rng<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    config: &ParserConfig,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse(&content, config, rng)?;
    tracing::info!(
        path = %path.display(),
        questions = questions.len(),
        "loaded question file"
    );
    Ok(questions)
}

/// Parse question file content and shuffle the result.
pub fn parse<R: Rng + ?Sized>(
    content: &str,
    config: &ParserConfig,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let mut questions = parse_in_order(content, config)?;
    questions.shuffle(rng);
    Ok(questions)
}

/// Parse question file content, keeping the questions in file order.
pub fn parse_in_order(content: &str, config: &ParserConfig) -> Result<Vec<Question>> {
    config.validate()?;

    let answer_key = scan_answer_key(content);
    tracing::debug!(entries = answer_key.len(), "scanned answer key");

    let mut parser = Parser::new(config, &answer_key);
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1);
    }
    let mut questions = parser.finish();

    // An explicit but empty answer line ("Answer:") still falls back to the key.
    for (idx, question) in questions.iter_mut().enumerate() {
        if question.answer.is_empty() {
            if let Some(answer) = answer_key.get(idx + 1) {
                question.answer = answer.to_string();
            }
        }
    }

    if questions.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(questions)
}

/// Collect every `N. X` line of the content into an answer key.
pub fn scan_answer_key(content: &str) -> AnswerKey {
    let mut key = AnswerKey::new();

    for line in content.lines().map(str::trim) {
        if !answer_key_regex().is_match(line) {
            continue;
        }
        let Some((number, answer)) = line.split_once('.') else {
            continue;
        };
        match number.trim().parse::<usize>() {
            Ok(position) => key.insert(position, answer.trim().to_string()),
            Err(_) => tracing::debug!(number, "answer key number out of range"),
        }
    }

    key
}

struct QuestionBuilder {
    fragments: Vec<String>,
    options: Vec<String>,
    answer: Option<String>,
    start_line: usize,
}

impl QuestionBuilder {
    fn new(first_fragment: &str, start_line: usize) -> Self {
        Self {
            fragments: vec![first_fragment.to_string()],
            options: Vec::new(),
            answer: None,
            start_line,
        }
    }

    fn build(self, answer_key: &AnswerKey, position: usize) -> Question {
        let text = self
            .fragments
            .iter()
            .filter(|f| !f.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        let answer = match self.answer {
            Some(answer) => answer,
            None => answer_key.get(position).unwrap_or_default().to_string(),
        };

        tracing::debug!(
            line = self.start_line,
            position,
            options = self.options.len(),
            answered = !answer.is_empty(),
            "finalized question"
        );

        Question {
            text,
            options: self.options,
            answer,
        }
    }
}

enum State {
    NoQuestionOpen,
    QuestionOpen(QuestionBuilder),
}

struct Parser<'a> {
    config: &'a ParserConfig,
    answer_key: &'a AnswerKey,
    state: State,
    questions: Vec<Question>,
}

impl<'a> Parser<'a> {
    fn new(config: &'a ParserConfig, answer_key: &'a AnswerKey) -> Self {
        Self {
            config,
            answer_key,
            state: State::NoQuestionOpen,
            questions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match Self::parse_line(line, self.config) {
            LineType::Question(rest) => self.handle_question(rest, line_num),
            LineType::Answer(answer) => self.handle_answer(answer),
            LineType::MalformedAnswer(text) => {
                if self.open_builder().is_some() {
                    tracing::warn!(line = line_num, "answer line without \": \" separator, kept as text");
                }
                self.handle_text(text);
            }
            LineType::Option(option) => self.handle_option(option),
            LineType::Blank => self.close(),
            LineType::Text(text) => self.handle_text(text),
        }
    }

    /// Classify a line. Precedence: question > answer > option > blank > text.
    fn parse_line<'l>(line: &'l str, config: &ParserConfig) -> LineType<'l> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(config.question_prefix.as_str()) {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix(config.answer_prefix.as_str()) {
            match trimmed.split_once(": ") {
                Some((_, answer)) => LineType::Answer(answer.trim()),
                // A bare prefix is an explicit empty answer.
                None if rest.trim().is_empty() => LineType::Answer(""),
                None => LineType::MalformedAnswer(trimmed),
            }
        } else if config.is_option(trimmed) {
            LineType::Option(trimmed)
        } else if trimmed.is_empty() {
            LineType::Blank
        } else {
            LineType::Text(trimmed)
        }
    }

    fn handle_question(&mut self, rest: &str, line_num: usize) {
        self.close();
        self.state = State::QuestionOpen(QuestionBuilder::new(rest, line_num));
    }

    fn handle_answer(&mut self, answer: &str) {
        if let Some(builder) = self.open_builder() {
            builder.answer = Some(answer.to_string());
        }
        self.close();
    }

    fn handle_option(&mut self, option: &str) {
        if let Some(builder) = self.open_builder() {
            builder.options.push(option.to_string());
        }
    }

    fn handle_text(&mut self, text: &str) {
        if let Some(builder) = self.open_builder() {
            builder.fragments.push(text.to_string());
        }
    }

    fn open_builder(&mut self) -> Option<&mut QuestionBuilder> {
        match &mut self.state {
            State::QuestionOpen(builder) => Some(builder),
            State::NoQuestionOpen => None,
        }
    }

    /// Finalize the open question, if any.
    fn close(&mut self) {
        if let State::QuestionOpen(builder) = std::mem::replace(&mut self.state, State::NoQuestionOpen) {
            let position = self.questions.len() + 1;
            self.questions.push(builder.build(self.answer_key, position));
        }
    }

    fn finish(mut self) -> Vec<Question> {
        self.close();
        self.questions
    }
}

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    MalformedAnswer(&'a str),
    Option(&'a str),
    Blank,
    Text(&'a str),
}
