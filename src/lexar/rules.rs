use crate::lexar::token::TokenKind;
use regex::Regex;

/// How a rule recognizes a lexeme: an exact spelling or a compiled pattern.
enum Matcher {
    Exact(&'static str),
    Pattern(Regex),
}

/// A single classification rule pairing a matcher with the kind it yields.
pub struct Rule {
    matcher: Matcher,
    kind: TokenKind,
}

impl Rule {
    fn exact(text: &'static str, kind: TokenKind) -> Self {
        Rule {
            matcher: Matcher::Exact(text),
            kind,
        }
    }

    fn pattern(pattern: &str, kind: TokenKind) -> Self {
        Rule {
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            kind,
        }
    }

    fn accepts(&self, lexeme: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(text) => lexeme == *text,
            Matcher::Pattern(re) => re.is_match(lexeme),
        }
    }
}

/// The fixed, ordered classification table.
///
/// Classification is priority ordered, not disjoint: the first rule whose
/// matcher accepts the lexeme decides the kind, so earlier rules shadow
/// later ones wherever their accepted sets overlap. Build one table at
/// startup and share it by reference; it is never mutated afterwards.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        let mut rules: Vec<Rule> = Vec::new();

        // Loop keywords
        rules.push(Rule::exact("for", TokenKind::ForKeyword));
        rules.push(Rule::exact("do", TokenKind::DoKeyword));

        // Comparison operators
        rules.push(Rule::exact("<", TokenKind::LessThan));
        rules.push(Rule::exact(">", TokenKind::GreaterThan));
        rules.push(Rule::exact("=", TokenKind::Equals));

        // Assignment and arithmetic operators
        rules.push(Rule::exact(":=", TokenKind::Assign));
        rules.push(Rule::exact("+", TokenKind::Plus));
        rules.push(Rule::exact("-", TokenKind::Minus));

        // Grouping and delimiter symbols
        rules.push(Rule::exact("(", TokenKind::OpenParen));
        rules.push(Rule::exact(")", TokenKind::CloseParen));
        rules.push(Rule::exact("{", TokenKind::OpenBrace));
        rules.push(Rule::exact("}", TokenKind::CloseBrace));
        rules.push(Rule::exact(";", TokenKind::Delimiter));

        // Type keywords
        rules.push(Rule::exact("int", TokenKind::IntType));
        rules.push(Rule::exact("double", TokenKind::DoubleType));

        // Literals. Hex numbers are a digit-initiated run over 0-9/a-f with
        // no prefix. Both literal alphabets accept plain digit runs, so the
        // hex rule requires at least one a-f character and sits ahead of the
        // decimal rule: `89` is decimal, `45ac` and `0abc` are hex.
        rules.push(Rule::pattern(
            "^[0-9][0-9a-f]*[a-f][0-9a-f]*$",
            TokenKind::HexLiteral,
        ));
        rules.push(Rule::pattern("^[0-9.e-]+$", TokenKind::DecimalLiteral));

        // Identifiers come last so every keyword above shadows them.
        rules.push(Rule::pattern("^[a-zA-Z][a-zA-Z0-9]*$", TokenKind::Identifier));

        RuleTable { rules }
    }

    /// Classifies a single lexeme against the table.
    /// Total: every lexeme gets exactly one kind, `Unknown` when no rule
    /// accepts it.
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        for rule in &self.rules {
            if rule.accepts(lexeme) {
                return rule.kind;
            }
        }
        TokenKind::Unknown
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}
