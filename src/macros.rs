//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored rule for the lexer's pattern table

/// Creates a Token instance.
///
/// # Example
///
/// ```
/// use lexcalc::{MK_TOKEN, lexer::tokens::TokenKind};
///
/// let token = MK_TOKEN!(TokenKind::Number, "42");
/// assert_eq!(token.value, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: ::std::string::String::from($value),
        }
    };
}

/// Creates a rule matching `$regex` at the start of the remaining input.
///
/// The pattern is anchored with `^` here, so the table only lists the body.
/// Patterns are literals owned by the crate; an invalid one is a programming
/// error and panics on lexer construction.
///
/// ```ignore
/// MK_PATTERN!(PatternKind::Operator, r"[+\-*/]")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:literal) => {
        $crate::lexer::lexer::RegexPattern::new(
            $kind,
            $crate::regex::Regex::new(concat!("^(?:", $regex, ")"))
                .expect(concat!("invalid built-in pattern: ", $regex)),
        )
    };
}
