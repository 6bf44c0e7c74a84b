//! Interactive quiz session over a line-oriented terminal.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use quiz_core::matching::option_letter;
use quiz_core::{load_questions_with_rng, ParserConfig, Question, QuizSession, SessionSummary};
use rand::Rng;

use crate::selection::{parse_selection, Selection};

const PROMPT: &str = "Your answer (letters, empty for none, q to quit): ";

/// Load a question file and run a quiz on `input`/`output`.
pub fn run_quiz<R, In, Out>(
    path: &Path,
    config: &ParserConfig,
    rng: &mut R,
    mut input: In,
    mut output: Out,
) -> anyhow::Result<SessionSummary>
where
    R: Rng + ?Sized,
    In: BufRead,
    Out: Write,
{
    let questions = load_questions_with_rng(path, config, rng)
        .with_context(|| format!("failed to load questions from {}", path.display()))?;

    let mut session = QuizSession::new(questions);
    writeln!(output, "Loaded {} questions.", session.total())?;

    while let Some(question) = session.current() {
        write_question(&mut output, &session, question)?;

        let option_count = question.options.len();
        let Some(selected) = read_selection(&mut input, &mut output, option_count)? else {
            tracing::info!(answered = session.attempted(), "quiz stopped early");
            break;
        };

        let Some(outcome) = session.submit(&selected) else {
            break;
        };
        if outcome.is_correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(
                output,
                "Incorrect! The correct answer(s) is/are: {}.",
                display_answer(&outcome.expected)
            )?;
        }
        writeln!(
            output,
            "Score: {} | Total Attempted: {} | Total Incorrect: {} | Percentage Incorrect: {:.2}%",
            session.score(),
            session.attempted(),
            session.incorrect(),
            session.percentage_incorrect()
        )?;
    }

    let summary = session.summary(Utc::now());
    write_summary(&mut output, &summary, session.incorrect_questions())?;
    Ok(summary)
}

fn write_question(output: &mut impl Write, session: &QuizSession, question: &Question) -> anyhow::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Question {} of {} | Questions Left: {} | Progress: {:.0}%",
        session.current_index() + 1,
        session.total(),
        session.questions_left(),
        session.progress() * 100.0
    )?;
    writeln!(output, "{}", question.text)?;
    for (index, option) in question.options.iter().enumerate() {
        match option_letter(index) {
            Some(letter) => writeln!(output, "  [{letter}] {option}")?,
            None => writeln!(output, "  [-] {option}")?,
        }
    }
    Ok(())
}

/// Prompt until the input is a valid selection. `None` means quit or end of input.
fn read_selection(
    input: &mut impl BufRead,
    output: &mut impl Write,
    option_count: usize,
) -> anyhow::Result<Option<Vec<usize>>> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read answer")? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        match parse_selection(&line, option_count) {
            Ok(Selection::Options(selected)) => return Ok(Some(selected)),
            Ok(Selection::Quit) => return Ok(None),
            Err(error) => {
                tracing::warn!(input = line.trim(), "rejected answer input");
                writeln!(output, "{error}")?;
            }
        }
    }
}

fn display_answer(expected: &str) -> &str {
    if expected.is_empty() {
        "(none given in file)"
    } else {
        expected
    }
}

fn write_summary(
    output: &mut impl Write,
    summary: &SessionSummary,
    missed: &[String],
) -> anyhow::Result<()> {
    writeln!(output)?;
    writeln!(output, "Quiz Finished!")?;
    writeln!(output, "Score: {}/{}", summary.score, summary.total)?;
    writeln!(output, "Percentage: {:.2}%", summary.percentage)?;
    writeln!(
        output,
        "Time: {}:{:02}",
        summary.elapsed_seconds / 60,
        summary.elapsed_seconds % 60
    )?;
    if !missed.is_empty() {
        writeln!(output, "Missed questions:")?;
        for text in missed {
            writeln!(output, "  - {text}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run(content: &str, answers: &str) -> (SessionSummary, String) {
        let file = fixture(content);
        let mut output = Vec::new();
        let summary = run_quiz(
            file.path(),
            &ParserConfig::default(),
            &mut StdRng::seed_from_u64(1),
            Cursor::new(answers.as_bytes()),
            &mut output,
        )
        .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scores_correct_and_incorrect_answers() {
        let content = "NO.1 First\nA. yes\nB. no\nAnswer: A\n\nNO.2 Second\nA. yes\nB. no\nAnswer: A\n";
        let (summary, output) = run(content, "a\nB\n");

        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.incorrect, 1);
        assert!(output.contains("Correct!"));
        assert!(output.contains("Incorrect! The correct answer(s) is/are: A."));
        assert!(output.contains("Percentage Incorrect: 50.00%"));
        assert!(output.contains("Score: 1/2"));
        assert!(output.contains("Missed questions:\n"));
        assert_eq!(output.matches("\n  - ").count(), 1);
    }

    #[test]
    fn all_correct_lists_no_missed_questions() {
        let content = "NO.1 Only\nA. x\nAnswer: A\n";
        let (_, output) = run(content, "A\n");
        assert!(!output.contains("Missed questions:"));
    }

    #[test]
    fn options_past_z_are_shown_but_not_selectable() {
        let options = (1..=27).map(|n| format!("opt{n}")).collect::<Vec<_>>().join("\n");
        let content = format!("NO.1 Many options\n{options}\n");
        let config = ParserConfig::from_strings("NO.", "opt", "Answer:");
        let file = fixture(&content);
        let mut output = Vec::new();
        let summary = run_quiz(
            file.path(),
            &config,
            &mut StdRng::seed_from_u64(1),
            Cursor::new(&b"27\n\n"[..]),
            &mut output,
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("[Z] opt26"));
        assert!(output.contains("[-] opt27"));
        assert!(output.contains("there is no option 27"));
        assert_eq!(summary.attempted, 1);
        assert_eq!(summary.score, 1);
    }

    #[test]
    fn multi_select_answer() {
        let content = "NO.1 Pick all primes\nA. 2\nB. 4\nC. 3\nAnswer: A,C\n";
        let (summary, output) = run(content, "C A\n");

        assert_eq!(summary.score, 1);
        assert!(output.contains("[A] A. 2"));
        assert!(output.contains("[C] C. 3"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let content = "NO.1 Only\nA. x\nB. y\nAnswer: B\n";
        let (summary, output) = run(content, "Z\nb\n");

        assert_eq!(summary.score, 1);
        assert_eq!(summary.attempted, 1);
        assert!(output.contains("there is no option Z"));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[test]
    fn quit_stops_early() {
        let content = "NO.1 a\nA. x\nAnswer: A\n\nNO.2 b\nA. x\nAnswer: A\n";
        let (summary, output) = run(content, "q\n");

        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.total, 2);
        assert!(output.contains("Quiz Finished!"));
    }

    #[test]
    fn end_of_input_stops_early() {
        let content = "NO.1 a\nA. x\nAnswer: A\n";
        let (summary, _) = run(content, "");
        assert_eq!(summary.attempted, 0);
    }

    #[test]
    fn file_without_questions_fails() {
        let file = fixture("nothing here\n");
        let result = run_quiz(
            file.path(),
            &ParserConfig::default(),
            &mut StdRng::seed_from_u64(1),
            Cursor::new(&b""[..]),
            Vec::new(),
        );

        let error = result.unwrap_err();
        assert!(error.to_string().starts_with("failed to load questions from"));
        assert!(matches!(
            error.downcast_ref::<quiz_core::ParseError>(),
            Some(quiz_core::ParseError::EmptyResult)
        ));
    }
}
