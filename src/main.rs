use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sci_calc::cli::{Cli, Commands};
use sci_calc::config::Config;
use sci_calc::input::tokenize;
use sci_calc::session::Session;
use sci_calc::ui::{help_text, render_screen, run_repl};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            info!("Starting interactive calculator");
            let mut session = Session::new();
            run_repl(&mut session, &config, io::stdin().lock(), io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Keys { sequence } => {
            let keys = tokenize(&sequence.join(" "))?;
            let mut session = Session::new();
            let screen = session.press_all(keys);
            if screen.is_error {
                eprintln!("{}", screen.history);
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", render_screen(&screen, config.show_history));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Keypad => {
            print!("{}", help_text());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
