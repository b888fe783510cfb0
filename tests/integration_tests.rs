//! Integration tests for the tokenize → evaluate pipeline.
//!
//! These drive the public API end to end, from raw input through
//! tokenization to evaluation of a single binary operation.

use lexcalc::{
    display_error, errors::errors::Error, evaluate, tokenize, Lexer, Token, TokenKind,
};

fn number(value: &str) -> Token {
    Token::new(TokenKind::Number, value)
}

fn operator(value: &str) -> Token {
    Token::new(TokenKind::Operator, value)
}

fn paren(value: &str) -> Token {
    Token::new(TokenKind::Parenthesis, value)
}

#[test]
fn test_tokenize_sample_expression() {
    let tokens = tokenize("3.5 + 5 * (10 - 4.2)").unwrap();

    assert_eq!(
        tokens,
        vec![
            number("3.5"),
            operator("+"),
            number("5"),
            operator("*"),
            paren("("),
            number("10"),
            operator("-"),
            number("4.2"),
            paren(")"),
        ]
    );
}

#[test]
fn test_evaluate_constructed_tokens() {
    let tokens = vec![number("5"), operator("*"), number("2")];

    assert_eq!(evaluate(&tokens), Ok(10.0));
}

#[test]
fn test_evaluate_division_by_zero() {
    let tokens = vec![number("5"), operator("/"), number("0")];

    assert_eq!(evaluate(&tokens), Err(Error::DivisionByZero));
}

#[test]
fn test_tokenize_invalid_character() {
    let err = tokenize("3 & 4").unwrap_err();

    assert_eq!(
        err,
        Error::InvalidCharacter {
            position: 2,
            character: '&'
        }
    );
    assert!(display_error(&err, "3 & 4").ends_with("1 | 3 & 4\n  | --^"));
}

#[test]
fn test_evaluate_insufficient_tokens() {
    let tokens = vec![number("1"), operator("+")];

    assert_eq!(evaluate(&tokens), Err(Error::InsufficientTokens));
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn test_tokenize_then_evaluate() {
    let cases = [
        ("1 + 2", 3.0),
        ("10-4.5", 5.5),
        ("  2.5 *\t4 ", 10.0),
        ("9 / 4", 2.25),
    ];

    for (source, expected) in cases {
        let tokens = tokenize(source).unwrap();
        assert_eq!(evaluate(&tokens), Ok(expected), "evaluating {source:?}");
    }
}

#[test]
fn test_evaluate_reads_only_first_operation() {
    let tokens = tokenize("1 + 2 * 10").unwrap();

    assert_eq!(evaluate(&tokens), Ok(3.0));
}

#[test]
fn test_evaluate_parenthesised_input_fails() {
    // Grouping is not understood: the operator slot holds the number `1`.
    let tokens = tokenize("(1 + 2)").unwrap();

    assert_eq!(
        evaluate(&tokens),
        Err(Error::UnsupportedOperator {
            text: "1".to_string()
        })
    );
}

#[test]
fn test_evaluate_parenthesis_operand_is_nan() {
    let tokens = tokenize("1 + )").unwrap();

    assert!(evaluate(&tokens).unwrap().is_nan());
}

#[test]
fn test_evaluate_negative_operand_fails() {
    // `-3` is two tokens, so the operator slot holds the number `3`.
    let tokens = tokenize("-3 + 1").unwrap();

    assert_eq!(
        evaluate(&tokens),
        Err(Error::UnsupportedOperator {
            text: "3".to_string()
        })
    );
}

#[test]
fn test_lexer_shared_across_threads() {
    let lexer = Lexer::new();
    let lexer = &lexer;
    let inputs = ["1 + 2", "3.5 * (4 - 1)", "10 / 2", "  7\n-\t8"];

    std::thread::scope(|scope| {
        let handles = inputs
            .iter()
            .map(|input| scope.spawn(move || lexer.tokenize(input)))
            .collect::<Vec<_>>();

        for (handle, input) in handles.into_iter().zip(inputs) {
            let tokens = handle.join().unwrap().unwrap();
            assert_eq!(tokens, lexer.tokenize(input).unwrap());
        }
    });
}
