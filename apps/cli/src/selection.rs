//! Parsing of the answer line typed at the quiz prompt.
//!
//! Accepted forms: letters (`A C`, `ac`, `A,C`), 1-based numbers (`1 3`),
//! an empty line for no selection, or `q` / `quit` to stop early.

use std::collections::BTreeSet;

use quiz_core::LETTERED_OPTIONS;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Selected option indices, sorted and deduplicated.
    Options(Vec<usize>),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("\"{0}\" is not an option letter or number")]
    InvalidToken(String),

    #[error("there is no option {label} (this question has {count} selectable options)")]
    OutOfRange { label: String, count: usize },
}

pub fn parse_selection(input: &str, option_count: usize) -> Result<Selection, SelectionError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Selection::Quit);
    }

    // Only options that have a letter can be scored.
    let selectable = option_count.min(LETTERED_OPTIONS);

    let mut selected = BTreeSet::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        if token.chars().all(|c| c.is_ascii_digit()) {
            let index = token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|&i| i < selectable)
                .ok_or_else(|| SelectionError::OutOfRange {
                    label: token.to_string(),
                    count: selectable,
                })?;
            selected.insert(index);
        } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
            for letter in token.chars().map(|c| c.to_ascii_uppercase()) {
                let index = usize::from(letter as u8 - b'A');
                if index >= selectable {
                    return Err(SelectionError::OutOfRange {
                        label: letter.to_string(),
                        count: selectable,
                    });
                }
                selected.insert(index);
            }
        } else {
            return Err(SelectionError::InvalidToken(token.to_string()));
        }
    }

    Ok(Selection::Options(selected.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_in_any_form() {
        let expected = Selection::Options(vec![0, 2]);
        assert_eq!(parse_selection("A C", 4), Ok(expected.clone()));
        assert_eq!(parse_selection("ac", 4), Ok(expected.clone()));
        assert_eq!(parse_selection(" C,a ", 4), Ok(expected));
    }

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(parse_selection("1, 3", 3), Ok(Selection::Options(vec![0, 2])));
        assert_eq!(parse_selection("2 2", 3), Ok(Selection::Options(vec![1])));
    }

    #[test]
    fn empty_line_selects_nothing() {
        assert_eq!(parse_selection("", 4), Ok(Selection::Options(vec![])));
        assert_eq!(parse_selection("   ", 0), Ok(Selection::Options(vec![])));
    }

    #[test]
    fn quit() {
        assert_eq!(parse_selection("q", 4), Ok(Selection::Quit));
        assert_eq!(parse_selection(" QUIT ", 4), Ok(Selection::Quit));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            parse_selection("E", 4),
            Err(SelectionError::OutOfRange { label: "E".to_string(), count: 4 })
        );
        assert_eq!(
            parse_selection("0", 4),
            Err(SelectionError::OutOfRange { label: "0".to_string(), count: 4 })
        );
        assert!(parse_selection("99999999999999999999999", 4).is_err());
    }

    #[test]
    fn options_past_z_are_not_selectable() {
        assert_eq!(
            parse_selection("27", 30),
            Err(SelectionError::OutOfRange { label: "27".to_string(), count: 26 })
        );
        assert_eq!(parse_selection("26 z", 30), Ok(Selection::Options(vec![25])));
    }

    #[test]
    fn invalid_token() {
        assert_eq!(
            parse_selection("A2", 4),
            Err(SelectionError::InvalidToken("A2".to_string()))
        );
        assert!(parse_selection("ä", 4).is_err());
    }
}
