#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;

pub use regex;

pub use evaluator::evaluator::{evaluate, BinaryOperator};
pub use lexer::{
    lexer::{tokenize, Lexeme, Lexer},
    tokens::{display_tokens, PatternKind, Token, TokenKind},
};

/// Byte range of a lexeme within its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line holding character `position`.
///
/// Returns the 1-based line number, the line text and the character offset
/// within the line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}


/// Renders `error` for a terminal.
///
/// ```text
/// Error: InvalidCharacter (Unexpected character `&`, ...)
///   |
/// 1 | 3 & 4
///   | --^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = write!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = write!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let Some((line, line_text, line_pos)) = error
        .position()
        .and_then(|position| get_line_at_position(source, position))
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = write!(out, "\n{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = write!(out, "\n{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos - removed_whitespace + 1;
    let _ = write!(out, "\n{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c.is_whitespace() {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
