#[cfg(test)]
mod lexer_tests {
    use crate::lexar::lexer::{lex, split_line};
    use crate::lexar::rules::RuleTable;
    use crate::lexar::token::TokenKind;

    fn lexemes(line: &str) -> Vec<&str> {
        split_line(line).into_iter().map(|(_, lexeme)| lexeme).collect()
    }

    #[test]
    fn test_basic_tokens() {
        let table = RuleTable::new();
        let tokens = lex("for ( i := 0 ;", &table);
        assert_eq!(tokens[0].kind, TokenKind::ForKeyword);
        assert_eq!(tokens[1].kind, TokenKind::OpenParen);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].value, "i");
        assert_eq!(tokens[3].kind, TokenKind::Assign);
        assert_eq!(tokens[4].kind, TokenKind::DecimalLiteral);
        assert_eq!(tokens[4].value, "0");
        assert_eq!(tokens[5].kind, TokenKind::Delimiter);
    }

    #[test]
    fn test_keywords() {
        let table = RuleTable::new();
        let tokens = lex("for do int double", &table);
        assert_eq!(tokens[0].kind, TokenKind::ForKeyword);
        assert_eq!(tokens[1].kind, TokenKind::DoKeyword);
        assert_eq!(tokens[2].kind, TokenKind::IntType);
        assert_eq!(tokens[3].kind, TokenKind::DoubleType);
    }

    #[test]
    fn test_operators() {
        let table = RuleTable::new();
        let tokens = lex("< > = := + - ( ) { }", &table);
        assert_eq!(tokens[0].kind, TokenKind::LessThan);
        assert_eq!(tokens[1].kind, TokenKind::GreaterThan);
        assert_eq!(tokens[2].kind, TokenKind::Equals);
        assert_eq!(tokens[3].kind, TokenKind::Assign);
        assert_eq!(tokens[4].kind, TokenKind::Plus);
        assert_eq!(tokens[5].kind, TokenKind::Minus);
        assert_eq!(tokens[6].kind, TokenKind::OpenParen);
        assert_eq!(tokens[7].kind, TokenKind::CloseParen);
        assert_eq!(tokens[8].kind, TokenKind::OpenBrace);
        assert_eq!(tokens[9].kind, TokenKind::CloseBrace);
    }

    #[test]
    fn test_literal_priority() {
        let table = RuleTable::new();
        // Plain digit runs satisfy both literal rules; the table order and
        // the letter requirement on the hex rule keep the outcome fixed.
        assert_eq!(table.classify("89"), TokenKind::DecimalLiteral);
        assert_eq!(table.classify("45ac"), TokenKind::HexLiteral);
        assert_eq!(table.classify("0abc"), TokenKind::HexLiteral);
        assert_eq!(table.classify("1.5e-3"), TokenKind::DecimalLiteral);
        // Letter-initial runs are never hex
        assert_eq!(table.classify("ac"), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_shadow_identifiers() {
        let table = RuleTable::new();
        assert_eq!(table.classify("for"), TokenKind::ForKeyword);
        assert_eq!(table.classify("do"), TokenKind::DoKeyword);
        assert_eq!(table.classify("int"), TokenKind::IntType);
        assert_eq!(table.classify("fore"), TokenKind::Identifier);
        assert_eq!(table.classify("ints"), TokenKind::Identifier);
    }

    #[test]
    fn test_classification_totality() {
        let table = RuleTable::new();
        // No rule matches: Unknown, never a failure
        assert_eq!(table.classify("x:=5"), TokenKind::Unknown);
        assert_eq!(table.classify("@"), TokenKind::Unknown);
        assert_eq!(table.classify("(i"), TokenKind::Unknown);
        assert_eq!(table.classify("abc9"), TokenKind::Identifier);
    }

    #[test]
    fn test_split_spaced_line() {
        assert_eq!(lexemes("i := i + 1 ;"), ["i", ":=", "i", "+", "1", ";"]);
    }

    #[test]
    fn test_split_fused_delimiter() {
        // Only the delimiter is split back out of a fused fragment; the
        // rest of the fragment stays in one piece.
        assert_eq!(lexemes("x:=5;"), ["x:=5", ";"]);
        assert_eq!(lexemes("a;b"), ["a", ";", "b"]);
        assert_eq!(lexemes("a;b;"), ["a", ";", "b", ";"]);
        assert_eq!(lexemes(";"), [";"]);
    }

    #[test]
    fn test_blank_line_yields_nothing() {
        let table = RuleTable::new();
        assert!(lexemes("").is_empty());
        assert!(lexemes("   ").is_empty());
        assert!(lex(" \t \n\n   \n", &table).is_empty());
    }

    #[test]
    fn test_positions() {
        let table = RuleTable::new();
        let tokens = lex("for (\ni := 0;", &table);
        assert_eq!((tokens[0].line, tokens[0].col), (1, 1)); // for
        assert_eq!((tokens[1].line, tokens[1].col), (1, 5)); // (
        assert_eq!((tokens[2].line, tokens[2].col), (2, 1)); // i
        assert_eq!((tokens[3].line, tokens[3].col), (2, 3)); // :=
        assert_eq!((tokens[4].line, tokens[4].col), (2, 6)); // 0
        assert_eq!((tokens[5].line, tokens[5].col), (2, 7)); // ;
    }

    #[test]
    fn test_classification_is_idempotent() {
        let table = RuleTable::new();
        let input = "for ( i := 0 ; i < 10 ; i := i + 1 ) do { x := 1 ; }";
        let first: Vec<TokenKind> = lex(input, &table).iter().map(|t| t.kind).collect();
        let second: Vec<TokenKind> = lex(input, &table).iter().map(|t| t.kind).collect();
        assert_eq!(first, second);
    }
}
