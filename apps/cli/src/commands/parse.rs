//! Dump the questions parsed from a file.

use std::fs;
use std::io::Write;

use anyhow::Context;
use quiz_core::{parse, parse_in_order, ParserConfig, Question};
use rand::Rng;

use crate::cli::ParseArgs;

pub fn run_parse<R: Rng + ?Sized>(
    args: &ParseArgs,
    config: &ParserConfig,
    rng: &mut R,
    output: &mut impl Write,
) -> anyhow::Result<Vec<Question>> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let questions = if args.ordered {
        parse_in_order(&content, config)
    } else {
        parse(&content, config, rng)
    }
    .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let unanswered = questions.iter().filter(|q| !q.has_answer()).count();
    if unanswered > 0 {
        tracing::warn!(unanswered, "questions without a resolved answer");
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *output, &questions)?;
        writeln!(output)?;
    } else {
        for (idx, question) in questions.iter().enumerate() {
            writeln!(output, "{}. {}", idx + 1, question.text)?;
            for option in &question.options {
                writeln!(output, "   {option}")?;
            }
            if question.has_answer() {
                writeln!(output, "   Answer: {}", question.answer)?;
            } else {
                writeln!(output, "   Answer: (none)")?;
            }
            writeln!(output)?;
        }
    }

    Ok(questions)
}
