use std::fmt::Display;

use tracing::debug;

use crate::{errors::errors::Error, lexer::tokens::Token};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Plus,
    Dash,
    Star,
    Slash,
}

impl BinaryOperator {
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, Error> {
        match self {
            BinaryOperator::Plus => Ok(lhs + rhs),
            BinaryOperator::Dash => Ok(lhs - rhs),
            BinaryOperator::Star => Ok(lhs * rhs),
            BinaryOperator::Slash => {
                if rhs == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl TryFrom<&str> for BinaryOperator {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        match text {
            "+" => Ok(BinaryOperator::Plus),
            "-" => Ok(BinaryOperator::Dash),
            "*" => Ok(BinaryOperator::Star),
            "/" => Ok(BinaryOperator::Slash),
            _ => Err(Error::UnsupportedOperator {
                text: text.to_string(),
            }),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Dash => "-",
            BinaryOperator::Star => "*",
            BinaryOperator::Slash => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Operand text that is not a number reads as NaN.
fn parse_operand(token: &Token) -> f64 {
    token.value.parse::<f64>().unwrap_or(f64::NAN)
}

/// Evaluates `[operand, operator, operand]`.
///
/// Only the first three tokens are read; anything after them is ignored.
/// The operator is chosen by its text alone. Operands are expected to be
/// `Number` tokens; any other text evaluates as NaN rather than failing.
pub fn evaluate(tokens: &[Token]) -> Result<f64, Error> {
    let [lhs, operator, rhs, ..] = tokens else {
        return Err(Error::InsufficientTokens);
    };

    let operator = BinaryOperator::try_from(operator.value.as_str())?;
    let lhs = parse_operand(lhs);
    let rhs = parse_operand(rhs);

    let result = operator.apply(lhs, rhs)?;
    debug!(lhs, %operator, rhs, result, ignored = tokens.len() - 3, "evaluated");
    Ok(result)
}
