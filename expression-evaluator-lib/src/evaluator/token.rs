use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
#[derive(Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    Operator(char),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Operator(symbol) => write!(f, "{}", symbol),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
