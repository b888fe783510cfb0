use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::Error, Span, MK_PATTERN, MK_TOKEN};

use super::tokens::{PatternKind, Token};

lazy_static! {
    static ref DEFAULT_LEXER: Lexer = Lexer::new();
}

/// A single scanning rule: a kind and a matcher anchored at the cursor.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    kind: PatternKind,
    regex: Regex,
}

impl RegexPattern {
    pub fn new(kind: PatternKind, regex: Regex) -> Self {
        RegexPattern { kind, regex }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The non-empty prefix of `remaining` this rule recognises, if any.
    fn match_prefix<'src>(&self, remaining: &'src str) -> Option<&'src str> {
        self.regex
            .find(remaining)
            .filter(|found| found.start() == 0 && !found.is_empty())
            .map(|found| found.as_str())
    }
}

/// One rule application, skipped whitespace included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub kind: PatternKind,
    pub text: &'src str,
    pub span: Span,
}

impl Lexeme<'_> {
    pub fn to_token(&self) -> Option<Token> {
        self.kind
            .token_kind()
            .map(|kind| MK_TOKEN!(kind, self.text))
    }
}

/// Scanning state for a single call. `pos` is a byte offset, `char_pos`
/// counts characters consumed so far.
struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    char_pos: usize,
}

impl<'src> Cursor<'src> {
    fn new(source: &'src str) -> Self {
        Cursor {
            source,
            pos: 0,
            char_pos: 0,
        }
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn advance(&mut self, matched: &str) {
        self.pos += matched.len();
        self.char_pos += matched.chars().count();
    }
}

/// The tokenizer. Holds only its ordered rule table, so one instance can be
/// shared freely between calls and threads.
#[derive(Debug, Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl Lexer {
    /// Builds the rule table. First match wins, so order matters: digits
    /// are consumed whole by `Number` before anything else is tried, and a
    /// leading `-` always falls through to `Operator`.
    pub fn new() -> Lexer {
        Lexer {
            patterns: vec![
                MK_PATTERN!(PatternKind::Number, r"[0-9]+(\.[0-9]+)?"),
                MK_PATTERN!(PatternKind::Operator, r"[+\-*/]"),
                MK_PATTERN!(PatternKind::Parenthesis, r"[()]"),
                MK_PATTERN!(PatternKind::Whitespace, r"\s+"),
            ],
        }
    }

    pub fn pattern_kinds(&self) -> Vec<PatternKind> {
        self.patterns.iter().map(RegexPattern::kind).collect()
    }

    /// Splits `source` into lexemes, whitespace included. The lexeme texts
    /// concatenate back to `source`.
    pub fn scan<'src>(&self, source: &'src str) -> Result<Vec<Lexeme<'src>>, Error> {
        let mut cursor = Cursor::new(source);
        let mut lexemes = vec![];

        while let Some(current) = cursor.at() {
            let remaining = cursor.remainder();
            let matched = self.patterns.iter().find_map(|pattern| {
                pattern
                    .match_prefix(remaining)
                    .map(|text| (pattern.kind, text))
            });

            let Some((kind, text)) = matched else {
                return Err(Error::InvalidCharacter {
                    position: cursor.char_pos,
                    character: current,
                });
            };

            trace!(%kind, text, pos = cursor.pos, "matched pattern");
            lexemes.push(Lexeme {
                kind,
                text,
                span: Span {
                    start: cursor.pos,
                    end: cursor.pos + text.len(),
                },
            });
            cursor.advance(text);
        }

        Ok(lexemes)
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        let tokens = self
            .scan(source)?
            .iter()
            .filter_map(Lexeme::to_token)
            .collect::<Vec<_>>();

        debug!(len = source.len(), tokens = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}

/// Tokenizes `source` with the built-in rule table.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    DEFAULT_LEXER.tokenize(source)
}
