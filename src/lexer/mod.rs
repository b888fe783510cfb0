//! Lexical analysis module.
//!
//! Converts a flat character sequence into typed tokens using an ordered
//! table of regex rules:
//!
//! - First-match (not longest-match) rule selection
//! - Whitespace matched and discarded
//! - Character positions reported for unrecognised input

pub mod lexer;
pub mod tokens;
