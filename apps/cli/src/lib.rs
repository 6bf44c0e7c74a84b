pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod selection;

use std::io;

use clap::Parser;

use crate::cli::{Cli, Command};

pub fn run() -> anyhow::Result<()> {
    // .env has to be loaded before clap reads the QUIZ_* variables.
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let parser_config = config::parser_config(&cli);
    let mut rng = config::rng(cli.seed);
    tracing::debug!(?parser_config, seed = ?cli.seed, "resolved configuration");

    let stdout = io::stdout();
    match &cli.command {
        Command::Run(args) => {
            let stdin = io::stdin();
            commands::quiz::run_quiz(&args.file, &parser_config, &mut rng, stdin.lock(), stdout.lock())?;
        }
        Command::Parse(args) => {
            commands::parse::run_parse(args, &parser_config, &mut rng, &mut stdout.lock())?;
        }
    }

    Ok(())
}
