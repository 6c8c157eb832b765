use crate::lexar::token::{Token, TokenKind};
use crate::parser::ast::{AddOp, ArithExpr, Assignment, CompareOp, Condition, ForLoop, Operand};
use crate::parser::{GrammarSlot, ParseError, ParseResult, Parser};

const OPERAND_KINDS: &str = "Identifier, DecimalLiteral or HexLiteral";
const COMPARE_KINDS: &str = "LessThan, GreaterThan or Equals";

impl<'a> Parser<'a> {
    /// Syntax: `for ( init ; cond ; incr ) do { body }`
    ///
    /// The slot sequence is fixed and linear. Each slot either consumes the
    /// tokens it requires and advances, or the parse halts at that slot; no
    /// backtracking.
    pub fn parse_for_stmt(&mut self) -> ParseResult<ForLoop<'a>> {
        self.expect(TokenKind::ForKeyword, GrammarSlot::ForKeyword)?;
        self.expect(TokenKind::OpenParen, GrammarSlot::OpenParen)?;

        let initializer = self.parse_assignment(GrammarSlot::Initializer)?;
        self.expect(TokenKind::Delimiter, GrammarSlot::FirstDelimiter)?;

        let condition = self.parse_condition()?;
        self.expect(TokenKind::Delimiter, GrammarSlot::SecondDelimiter)?;

        let increment = self.parse_assignment(GrammarSlot::Increment)?;
        self.expect(TokenKind::CloseParen, GrammarSlot::CloseParen)?;

        self.expect(TokenKind::DoKeyword, GrammarSlot::DoKeyword)?;
        self.expect(TokenKind::OpenBrace, GrammarSlot::OpenBrace)?;
        let body = self.parse_body();
        self.expect(TokenKind::CloseBrace, GrammarSlot::CloseBrace)?;

        Ok(ForLoop {
            initializer,
            condition,
            increment,
            body,
        })
    }

    /// Syntax: `target := operand ((+ | -) operand)*`
    /// Fills the initializer and increment slots; `slot` names which.
    fn parse_assignment(&mut self, slot: GrammarSlot) -> ParseResult<Assignment> {
        let target = self.expect(TokenKind::Identifier, slot)?.value.to_string();
        self.expect(TokenKind::Assign, slot)?;
        let value = self.parse_arith_expr(slot)?;

        Ok(Assignment { target, value })
    }

    /// Syntax: `operand (< | > | =) operand`
    fn parse_condition(&mut self) -> ParseResult<Condition> {
        let lhs = self.parse_operand(GrammarSlot::Condition)?;

        let op = match self.advance() {
            Some(tok) => match tok.kind {
                TokenKind::LessThan => CompareOp::LessThan,
                TokenKind::GreaterThan => CompareOp::GreaterThan,
                TokenKind::Equals => CompareOp::Equals,
                _ => {
                    return Err(ParseError::Mismatch {
                        slot: GrammarSlot::Condition,
                        expected: COMPARE_KINDS.to_string(),
                        found: format!("{:?} (\"{}\")", tok.kind, tok.value),
                        line: tok.line,
                        col: tok.col,
                    })
                }
            },
            None => {
                return Err(ParseError::EndOfInput {
                    slot: GrammarSlot::Condition,
                    expected: COMPARE_KINDS.to_string(),
                })
            }
        };

        let rhs = self.parse_operand(GrammarSlot::Condition)?;

        Ok(Condition { lhs, op, rhs })
    }

    /// One operand, optionally extended by additive steps (`i + 1`).
    fn parse_arith_expr(&mut self, slot: GrammarSlot) -> ParseResult<ArithExpr> {
        let first = self.parse_operand(slot)?;

        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(tok) if tok.kind == TokenKind::Plus => AddOp::Plus,
                Some(tok) if tok.kind == TokenKind::Minus => AddOp::Minus,
                _ => break,
            };
            self.advance();
            rest.push((op, self.parse_operand(slot)?));
        }

        Ok(ArithExpr { first, rest })
    }

    /// An identifier or a numeric literal.
    fn parse_operand(&mut self, slot: GrammarSlot) -> ParseResult<Operand> {
        match self.advance() {
            Some(tok) => match tok.kind {
                TokenKind::Identifier => Ok(Operand::Identifier(tok.value.to_string())),
                TokenKind::DecimalLiteral => Ok(Operand::Decimal(tok.value.to_string())),
                TokenKind::HexLiteral => Ok(Operand::Hex(tok.value.to_string())),
                _ => Err(ParseError::Mismatch {
                    slot,
                    expected: OPERAND_KINDS.to_string(),
                    found: format!("{:?} (\"{}\")", tok.kind, tok.value),
                    line: tok.line,
                    col: tok.col,
                }),
            },
            None => Err(ParseError::EndOfInput {
                slot,
                expected: OPERAND_KINDS.to_string(),
            }),
        }
    }

    /// The body run: every token up to, and not including, the next `}`.
    /// Contents are kept verbatim with no checking; nested loops are not
    /// recognized. An empty body is valid.
    fn parse_body(&mut self) -> Vec<Token<'a>> {
        let mut body = Vec::new();
        while let Some(tok) = self.peek() {
            if tok.kind == TokenKind::CloseBrace {
                break;
            }
            body.push(tok.clone());
            self.advance();
        }
        body
    }
}
