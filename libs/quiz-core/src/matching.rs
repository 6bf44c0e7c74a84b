//! Answer matching for option selections.
//!
//! Answers are written as letters ("B", "AC", "A,C", "A, C"). Selections are
//! option indices, mapped to letters in display order (0 -> 'A').

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of comparing a selection to the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the selected letters equal the answer letters.
    pub is_correct: bool,
    /// Selected letters, sorted (for display).
    pub selected: String,
    /// Answer letters, sorted (for display).
    pub expected: String,
}

/// Options 'A' through 'Z'; later options cannot be named by a letter.
pub const LETTERED_OPTIONS: usize = 26;

/// Letter shown for the option at `index`, or `None` past 'Z'.
pub fn option_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < LETTERED_OPTIONS)
        .map(|i| char::from(b'A' + i))
}

/// Letters named by an answer string; separators and spacing are ignored.
pub fn answer_letters(answer: &str) -> BTreeSet<char> {
    answer
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Letters for a set of selected option indices. Indices past 'Z' are skipped.
pub fn selection_letters(selected: &[usize]) -> BTreeSet<char> {
    selected.iter().filter_map(|&i| option_letter(i)).collect()
}

/// Compare selected option indices to the correct answer, ignoring order.
///
/// An index without a letter can never be part of a correct answer.
pub fn compare_selection(selected: &[usize], answer: &str) -> MatchResult {
    let all_lettered = selected.iter().all(|&i| option_letter(i).is_some());
    let selected = selection_letters(selected);
    let expected = answer_letters(answer);

    MatchResult {
        is_correct: all_lettered && selected == expected,
        selected: selected.into_iter().collect(),
        expected: expected.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_letter() {
        assert_eq!(option_letter(0), Some('A'));
        assert_eq!(option_letter(3), Some('D'));
        assert_eq!(option_letter(25), Some('Z'));
        assert_eq!(option_letter(26), None);
        assert_eq!(option_letter(usize::MAX), None);
    }

    #[test]
    fn test_answer_letters_ignores_separators() {
        let expected: BTreeSet<char> = ['A', 'C'].into_iter().collect();
        assert_eq!(answer_letters("A,C"), expected);
        assert_eq!(answer_letters("C, A"), expected);
        assert_eq!(answer_letters("ac"), expected);
        assert!(answer_letters("").is_empty());
    }

    #[test]
    fn test_compare_single() {
        let result = compare_selection(&[1], "B");
        assert!(result.is_correct);
        assert_eq!(result.selected, "B");

        let result = compare_selection(&[0], "B");
        assert!(!result.is_correct);
        assert_eq!(result.expected, "B");
    }

    #[test]
    fn test_compare_multi_select_any_order() {
        assert!(compare_selection(&[2, 0], "A,C").is_correct);
        assert!(compare_selection(&[0, 2], "CA").is_correct);
        assert!(!compare_selection(&[0], "A,C").is_correct);
        assert!(!compare_selection(&[0, 1, 2], "A,C").is_correct);
    }

    #[test]
    fn test_compare_unlettered_index_is_incorrect() {
        assert!(!compare_selection(&[26], "").is_correct);
        assert!(!compare_selection(&[0, 30], "A").is_correct);
    }

    #[test]
    fn test_compare_unresolved_answer() {
        assert!(compare_selection(&[], "").is_correct);
        assert!(!compare_selection(&[0], "").is_correct);
    }
}
