use thiserror::Error;

/// Failures raised while scanning or parsing an expression string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Alphabet character '{0}' appear in operation")]
    AlphabeticCharacter(char),
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Malformed numeric literal '{0}'")]
    InvalidNumber(String),
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Invalid expression")]
    InvalidExpression,
}

/// Failures raised while evaluating an already-built expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown operator: {0}")]
    UnknownOperator(char),
}
