use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI definition for the forlang tool.
#[derive(Parser)]
#[command(name = "forlang")]
#[command(about = "forlang loop recognizer CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported subcommands for the forlang CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Classify tokens and validate the for statement shape
    Check {
        /// Path to the input file or a directory containing input.txt
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Classify and report tokens without validating
    Tokens {
        /// Path to the input file or a directory containing input.txt
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Entrypoint for CLI logic.
/// Returns exit code (0 for success, nonzero for error).
pub fn run_cli(cli: Cli) -> i32 {
    use crate::checker::{check_project, CheckOptions};

    match cli.command {
        None => {
            println!("forlang - for loop recognizer");
            println!("Type `forlang --help` for usage");
            0
        }
        Some(Commands::Check { path }) => {
            let opts = CheckOptions {
                input_path: path,
                tokens_only: false,
            };

            match check_project(opts) {
                Ok(result) => {
                    if result.success {
                        0
                    } else {
                        1
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
        Some(Commands::Tokens { path }) => {
            let opts = CheckOptions {
                input_path: path,
                tokens_only: true,
            };

            match check_project(opts) {
                Ok(_) => 0,
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
    }
}
