use crate::lexar::token::{Token, TokenKind};
use crate::parser::ast::ForLoop;
use std::fmt;

/// A named required position in the fixed `for` statement shape.
/// Every accepted statement fills all slots in this order; none may be
/// skipped. Mismatches are reported against the slot that failed to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrammarSlot {
    ForKeyword,
    OpenParen,
    Initializer,
    FirstDelimiter,
    Condition,
    SecondDelimiter,
    Increment,
    CloseParen,
    DoKeyword,
    OpenBrace,
    Body,
    CloseBrace,
}

/// Structural validation failure. Carries the slot that could not be
/// filled, the kind(s) it needed, and the token actually found.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Mismatch {
        slot: GrammarSlot,
        expected: String,
        found: String,
        line: usize,
        col: usize,
    },
    EndOfInput {
        slot: GrammarSlot,
        expected: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Mismatch {
                slot,
                expected,
                found,
                line,
                col,
            } => write!(
                f,
                "mismatch at {}:{} in {:?}: expected {}, got {}",
                line, col, slot, expected, found
            ),
            ParseError::EndOfInput { slot, expected } => {
                write!(f, "input ended in {:?}: expected {}", slot, expected)
            }
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser { tokens, current: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.current)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |tok| tok.kind == kind)
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token<'a>> {
        let tok = self.tokens.get(self.current);
        if tok.is_some() {
            self.current += 1;
        }
        tok
    }

    /// Consumes the next token if it has the required kind, or halts with a
    /// mismatch naming the slot that failed.
    pub(crate) fn expect(&mut self, kind: TokenKind, slot: GrammarSlot) -> ParseResult<&'a Token<'a>> {
        match self.advance() {
            Some(tok) if tok.kind == kind => Ok(tok),
            Some(tok) => Err(ParseError::Mismatch {
                slot,
                expected: format!("{:?}", kind),
                found: format!("{:?} (\"{}\")", tok.kind, tok.value),
                line: tok.line,
                col: tok.col,
            }),
            None => Err(ParseError::EndOfInput {
                slot,
                expected: format!("{:?}", kind),
            }),
        }
    }

    /// Parses every statement in the stream. Statements may be separated by
    /// a single delimiter. There is no recovery: a mismatch anywhere voids
    /// the whole run, with nothing partially accepted.
    pub fn parse_program(&mut self) -> ParseResult<Vec<ForLoop<'a>>> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_for_stmt()?);
            if self.peek_is(TokenKind::Delimiter) {
                self.advance();
            }
        }
        Ok(statements)
    }
}
