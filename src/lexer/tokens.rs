use std::fmt::Display;

/// Category of an emitted token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Parenthesis,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "NUMBER"),
            TokenKind::Operator => write!(f, "OPERATOR"),
            TokenKind::Parenthesis => write!(f, "PARENTHESIS"),
        }
    }
}

/// Category of a scanning rule. `Whitespace` is matched and discarded, so it
/// never reaches a [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PatternKind {
    Number,
    Operator,
    Parenthesis,
    Whitespace,
}

impl PatternKind {
    /// The token kind emitted for this rule, or `None` for skipped input.
    pub fn token_kind(self) -> Option<TokenKind> {
        match self {
            PatternKind::Number => Some(TokenKind::Number),
            PatternKind::Operator => Some(TokenKind::Operator),
            PatternKind::Parenthesis => Some(TokenKind::Parenthesis),
            PatternKind::Whitespace => None,
        }
    }
}

impl Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token_kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "WHITESPACE"),
        }
    }
}

/// A classified fragment of input. `value` is the matched text, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(type: '{}', value: '{}')", self.kind, self.value)
    }
}

/// Renders a token list the way the driver prints it.
pub fn display_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("Generated Tokens:");
    for token in tokens {
        out.push('\n');
        out.push_str(&token.to_string());
    }
    out
}
