//! Command-line arguments for the quiz runner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use quiz_core::{DEFAULT_ANSWER_PREFIX, DEFAULT_OPTION_PREFIXES, DEFAULT_QUESTION_PREFIX};

#[derive(Debug, Parser)]
#[command(
    name = "quiz",
    version,
    about = "Multiple-choice quizzes from plain-text question files",
    long_about = "Load a plain-text question file and take it as a quiz.\n\n\
                  Questions start with the question prefix, options with one of the\n\
                  option prefixes. Answers come from an answer line or from a numbered\n\
                  answer key (\"1. B\") anywhere in the file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Prefix marking the first line of a question.
    #[arg(
        long,
        env = "QUIZ_QUESTION_PREFIX",
        default_value = DEFAULT_QUESTION_PREFIX,
        global = true
    )]
    pub question_prefix: String,

    /// Comma-separated prefixes marking option lines.
    #[arg(
        long,
        env = "QUIZ_OPTION_PREFIXES",
        default_value = DEFAULT_OPTION_PREFIXES,
        global = true
    )]
    pub option_prefixes: String,

    /// Prefix marking an inline answer line.
    #[arg(
        long,
        env = "QUIZ_ANSWER_PREFIX",
        default_value = DEFAULT_ANSWER_PREFIX,
        global = true
    )]
    pub answer_prefix: String,

    /// Seed for the question shuffle (random when omitted).
    #[arg(long, env = "QUIZ_SEED", global = true)]
    pub seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take a quiz in the terminal.
    Run(RunArgs),

    /// Print the questions parsed from a file.
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Question file to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Question file to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Keep file order instead of shuffling.
    #[arg(long)]
    pub ordered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quiz",
            "parse",
            "questions.txt",
            "--json",
            "--question-prefix",
            "Q:",
            "--seed",
            "9",
        ])
        .unwrap();

        assert_eq!(cli.question_prefix, "Q:");
        assert_eq!(cli.seed, Some(9));
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.file, PathBuf::from("questions.txt"));
                assert!(args.json);
                assert!(!args.ordered);
            }
            Command::Run(_) => panic!("expected parse command"),
        }
    }

    #[test]
    fn run_requires_file() {
        assert!(Cli::try_parse_from(["quiz", "run"]).is_err());
    }
}
