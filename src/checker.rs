// The check pipeline for forlang input files: load the source, tokenize and
// classify every line, report each token, then validate the token stream
// against the for statement shape.

use crate::diagnostics::{print_accepted, print_mismatch, print_token_report};
use crate::lexar::lexer::lex;
use crate::lexar::rules::RuleTable;
use crate::parser::Parser;
use std::fs;
use std::path::PathBuf;

/// Options for controlling a check run. Set by the CLI.
pub struct CheckOptions {
    /// Path to the input file, or a directory containing input.txt
    pub input_path: PathBuf,
    /// Classify and report tokens only; skip shape validation
    pub tokens_only: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            tokens_only: false,
        }
    }
}

/// Result of a check run, including success and counts.
pub struct CheckResult {
    pub success: bool,
    /// Number of classified tokens
    pub token_count: usize,
    /// Number of accepted statements (0 in tokens-only mode or on mismatch)
    pub statement_count: usize,
}

/// The main entry point for checking an input file.
/// This function orchestrates the whole pipeline:
/// 1. Resolves and loads the input (a directory falls back to `input.txt`)
/// 2. Tokenizes every line and classifies each lexeme
/// 3. Prints the enumerated token report
/// 4. Validates the for statement shape, unless tokens-only was requested
/// Returns a CheckResult, or an error when the input cannot be read.
pub fn check_project(opts: CheckOptions) -> Result<CheckResult, String> {
    // === 1. Find and load the input ===
    let input_path = if opts.input_path.is_file() {
        opts.input_path.clone()
    } else {
        let input_file = opts.input_path.join("input.txt");
        if !input_file.exists() {
            return Err(format!(
                "Error: input.txt not found in {}",
                opts.input_path.display()
            ));
        }
        input_file
    };

    let input = fs::read_to_string(&input_path)
        .map_err(|e| format!("Failed to read {}: {}", input_path.display(), e))?;

    // === 2. Tokenize and classify ===
    // The rule table is built once per run and only ever read after that.
    let table = RuleTable::new();
    let tokens = lex(&input, &table);

    // === 3. Token report ===
    print_token_report(&tokens);

    if opts.tokens_only {
        return Ok(CheckResult {
            success: true,
            token_count: tokens.len(),
            statement_count: 0,
        });
    }

    // === 4. Shape validation ===
    let mut parser = Parser::new(&tokens);
    match parser.parse_program() {
        Ok(statements) => {
            print_accepted(&statements);
            Ok(CheckResult {
                success: true,
                token_count: tokens.len(),
                statement_count: statements.len(),
            })
        }
        Err(e) => {
            print_mismatch(&e, &input, &input_path.display().to_string());
            Ok(CheckResult {
                success: false,
                token_count: tokens.len(),
                statement_count: 0,
            })
        }
    }
}
