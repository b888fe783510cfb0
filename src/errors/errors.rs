use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid character at position {position}: {character:?}")]
    InvalidCharacter { position: usize, character: char },
    #[error("insufficient tokens for evaluation")]
    InsufficientTokens,
    #[error("unsupported operator: {text:?}")]
    UnsupportedOperator { text: String },
    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    /// Character index into the tokenized input, for errors that have one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidCharacter { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::InvalidCharacter { .. } => "InvalidCharacter",
            Error::InsufficientTokens => "InsufficientTokens",
            Error::UnsupportedOperator { .. } => "UnsupportedOperator",
            Error::DivisionByZero => "DivisionByZero",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::InvalidCharacter { character, .. } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}`, expected a number, one of `+ - * /` or a parenthesis",
                character
            )),
            Error::InsufficientTokens => ErrorTip::Suggestion(String::from(
                "Expected an operand, an operator and a second operand",
            )),
            Error::UnsupportedOperator { text } => ErrorTip::Suggestion(format!(
                "Unsupported operator `{}`, expected one of `+ - * /`",
                text
            )),
            Error::DivisionByZero => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
