//! Command-line interface definitions and parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive prompt (default)
    Repl,
    /// Press a sequence of keys and print the final display
    Keys {
        /// Key labels, e.g. "12+3=" or "9 sqrt"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        sequence: Vec<String>,
    },
    /// Print the keypad layout and key aliases
    Keypad,
    /// Print the effective configuration
    Config,
}
