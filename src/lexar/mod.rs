pub mod lexer;
pub mod rules;
pub mod token;

pub use lexer::{lex, split_line};
pub use rules::RuleTable;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests;
