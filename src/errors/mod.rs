//! Error types for tokenizing and evaluation.
//!
//! Every failure is terminal for the call that raised it; callers decide how
//! to report it. [`crate::display_error`] renders one for a terminal.

pub mod errors;
