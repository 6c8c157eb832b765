use crate::lexar::rules::RuleTable;
use crate::lexar::token::Token;

/// Splits one line into (column, lexeme) pairs. Columns are 1-based.
///
/// Lexemes are separated by whitespace. The delimiter `;` may arrive fused
/// to the lexeme before it (`x:=5;`), so a fragment containing `;` that is
/// not exactly `;` is split again: every non-empty piece is emitted, with an
/// explicit `;` lexeme re-emitted after each piece that a delimiter trailed
/// in the original fragment.
///
/// Only whitespace and `;` trigger splitting. Other punctuation has to be
/// whitespace-delimited to be recognized on its own; a fused form like `(i`
/// stays a single lexeme.
pub fn split_line(line: &str) -> Vec<(usize, &str)> {
    let mut lexemes = Vec::new();

    let mut start: Option<usize> = None; // byte offset of the open fragment
    let mut start_col = 0;
    let mut col = 0;
    for (idx, ch) in line.char_indices() {
        col += 1;
        if ch.is_ascii_whitespace() {
            if let Some(s) = start.take() {
                split_fragment(&line[s..idx], start_col, &mut lexemes);
            }
        } else if start.is_none() {
            start = Some(idx);
            start_col = col;
        }
    }
    if let Some(s) = start {
        split_fragment(&line[s..], start_col, &mut lexemes);
    }

    lexemes
}

/// Re-splits a whitespace-delimited fragment on fused delimiters.
fn split_fragment<'a>(fragment: &'a str, col: usize, out: &mut Vec<(usize, &'a str)>) {
    if fragment == ";" || !fragment.contains(';') {
        out.push((col, fragment));
        return;
    }

    let pieces: Vec<&str> = fragment.split(';').collect();
    let mut offset = 0; // byte offset into the fragment
    for (i, piece) in pieces.iter().enumerate() {
        if !piece.is_empty() {
            out.push((col + fragment[..offset].chars().count(), piece));
            // Every piece except the last had a `;` right behind it.
            if i + 1 < pieces.len() {
                let delim_at = offset + piece.len();
                out.push((
                    col + fragment[..delim_at].chars().count(),
                    &fragment[delim_at..delim_at + 1],
                ));
            }
        }
        offset += piece.len() + 1;
    }
}

/// Tokenizes a whole input: each line is split into lexemes and every lexeme
/// is classified against the rule table. Lines are 1-based. Blank lines
/// contribute nothing.
pub fn lex<'a>(input: &'a str, table: &RuleTable) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token> = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        for (col, lexeme) in split_line(line) {
            tokens.push(Token {
                kind: table.classify(lexeme),
                value: lexeme,
                line: line_idx + 1,
                col,
            });
        }
    }

    tokens
}
