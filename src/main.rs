use clap::Parser;
use forlang::cli::{run_cli, Cli};
use std::process::exit;

fn main() {
    let cli = Cli::parse();
    exit(run_cli(cli));
}
