use crate::evaluator::errors::EvaluationError;
use log::debug;

/// The binary operators understood by the compiler.
pub static SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

pub fn is_operator(symbol: char) -> bool {
    SYMBOLS.contains(&symbol)
}

/// Binding strength of an operator symbol. Anything that is not a known
/// operator (including the open-parenthesis marker on the operator stack)
/// gets -1, so it never forces a premature reduction.
pub fn precedence(symbol: char) -> i8 {
    match symbol {
        '+' | '-' => 0,
        '*' | '/' => 1,
        _ => -1,
    }
}

/// Applies the operator to two already-evaluated operands.
///
/// # Errors
///
/// Returns an error when dividing by exactly zero, or when the symbol is
/// not one of `+ - * /`. The latter cannot be produced by the lexer, but
/// an unknown symbol must still fail rather than be silently ignored.
pub fn apply(symbol: char, left: f64, right: f64) -> Result<f64, EvaluationError> {
    match symbol {
        '+' => Ok(left + right),
        '-' => Ok(left - right),
        '*' => Ok(left * right),
        '/' => {
            // Only an exactly-zero denominator counts, not a merely tiny one.
            if right == 0.0 {
                debug!("division by zero: {} / {}", left, right);
                Err(EvaluationError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        unknown => Err(EvaluationError::UnknownOperator(unknown)),
    }
}
