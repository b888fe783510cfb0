//! Single binary operation evaluator.
//!
//! Consumes exactly one `operand operator operand` triple from a token
//! sequence. There is no precedence, grouping or multi-term support.

pub mod evaluator;
