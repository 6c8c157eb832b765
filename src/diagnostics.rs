/// Reporting for classified tokens and validation outcomes.
/// Pure presentation: render functions build text, print wrappers write it
/// out; no decisions are made here.
use crate::lexar::token::Token;
use crate::parser::ast::ForLoop;
use crate::parser::ParseError;

/// Color helpers for terminal output (ANSI escape codes).
fn color_bold_red(s: &str) -> String {
    format!("\x1b[1;31m{}\x1b[0m", s)
}
fn color_bold_green(s: &str) -> String {
    format!("\x1b[1;32m{}\x1b[0m", s)
}
fn color_bold_cyan(s: &str) -> String {
    format!("\x1b[1;36m{}\x1b[0m", s)
}
fn color_dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}
fn color_gray(s: &str) -> String {
    format!("\x1b[90m{}\x1b[0m", s)
}

/// Renders the enumerated token report, one `<index>: <lexeme> is <kind>`
/// line per token. Indices are 1-based. Unknown tokens are listed like any
/// other kind; nothing is dropped.
pub fn render_token_report(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, tok)| format!("{}: {} is {:?}", i + 1, tok.value, tok.kind))
        .collect()
}

/// Prints the token report followed by the classification summary line.
pub fn print_token_report(tokens: &[Token]) {
    for line in render_token_report(tokens) {
        println!("{}", line);
    }
    println!("Parse complete. Tokens found: {}", tokens.len());
}

/// Prints the acceptance summary for a validated program.
pub fn print_accepted(statements: &[ForLoop]) {
    println!("✓ Accepted: {} statement(s)", statements.len());
}

/// Prints a mismatch with colorized expected/found detail and, when the
/// position is known, a caret-annotated source snippet.
pub fn print_mismatch(err: &ParseError, source: &str, filename: &str) {
    match err {
        ParseError::Mismatch {
            slot,
            expected,
            found,
            line,
            col,
        } => {
            let loc = format!("{}:{}:{}", filename, line, col);
            eprintln!("{} {}", color_bold_red("mismatch"), color_dim(&loc));
            eprintln!(
                "in {:?}: expected {}, got {}",
                slot,
                color_bold_green(expected),
                color_bold_red(found)
            );
            render_source_snippet(source, *line, *col);
            eprintln!();
        }
        ParseError::EndOfInput { slot, expected } => {
            eprintln!("{} {}", color_bold_red("mismatch"), color_dim(filename));
            eprintln!(
                "in {:?}: expected {}, input ended",
                slot,
                color_bold_green(expected)
            );
            eprintln!();
        }
    }
}

/// Renders a source code snippet with a highlighted caret at the mismatch
/// location. 1-based line/column expected.
fn render_source_snippet(source: &str, line: usize, col: usize) {
    if line == 0 {
        return;
    }
    if let Some(src_line) = source.lines().nth(line - 1) {
        // Single-line snippet with a gutter and a caret underneath
        let gutter = format!("{:>4} {} ", line, color_gray("|"));
        let idx = if col > 0 { col - 1 } else { 0 };
        // Highlight the character under the caret
        let mut highlighted = String::new();
        for (i, ch) in src_line.chars().enumerate() {
            if i == idx {
                highlighted.push_str(&color_bold_cyan(&ch.to_string()));
            } else {
                highlighted.push(ch);
            }
        }
        eprintln!("{}{}", gutter, highlighted);
        let mut spaces = String::new();
        // account for gutter width plus a space
        let gutter_width = 4 + 1 + 1;
        for _ in 0..gutter_width {
            spaces.push(' ');
        }
        for _ in 0..(idx + 1) {
            spaces.push(' ');
        }
        eprintln!("{}{}", spaces, color_bold_red("^"));
    }
}
