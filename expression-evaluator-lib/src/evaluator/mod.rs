pub mod errors;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::evaluator::errors::ParseError;
use crate::evaluator::parser::expression_tree::format_numeric;
use crate::evaluator::parser::expression_tree::Node;
use anyhow::Result;

/// Parses the given input string into an equivalent expression tree,
/// which is easier to evaluate and render than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_evaluator::parse;
///
/// let tree = parse("(2+3)*4").unwrap();
/// assert_eq!(tree.evaluate().unwrap(), 20.0);
/// ```
pub fn parse(expression: &str) -> Result<Node, ParseError> {
    let tokens = lexer::tokenize(expression)?;
    parser::parse(tokens)
}

/// Parses and evaluates the given expression, returning the result as
/// text: an integer literal when the result has no fractional part,
/// the full decimal value otherwise.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric result of the expression, in text.
///
/// # Examples
///
/// ```
/// use expression_evaluator::evaluate_expression;
///
/// let result = evaluate_expression("2+3*4".to_string()).unwrap();
/// assert_eq!(result, "14");
/// ```
pub fn evaluate_expression(expression: String) -> Result<String> {
    let tree = parse(&expression)?;
    let result = tree.evaluate()?;
    Ok(format_numeric(result))
}

#[cfg(test)]
mod evaluator_tests {
    use super::*;
    use crate::evaluator::errors::EvaluationError;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "10-2-3",
    "(2+3)*4",
    "20/4/5",
    "2*(3+4)-5",
    " 1 + 2 ",
    },
    expected_result = {
    14.0,
    5.0,
    20.0,
    1.0,
    9.0,
    3.0,
    }
    )]
    fn well_formed_expression_evaluates_correctly(expression: &str, expected_result: f64) {
        let tree = parse(expression).unwrap();

        assert_eq!(tree.evaluate().unwrap(), expected_result);
    }

    #[test]
    fn division_by_zero_is_an_evaluation_error() {
        let tree = parse("5/0").unwrap();

        assert_eq!(tree.evaluate(), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn division_by_parenthesized_zero_is_an_evaluation_error() {
        let tree = parse("5/(2-2)").unwrap();

        assert_eq!(tree.evaluate(), Err(EvaluationError::DivisionByZero));
    }

    #[parameterized(
    expression = {
    "(1+2",
    "1+2)",
    }
    )]
    fn mismatched_parentheses_are_a_parse_error(expression: &str) {
        assert_eq!(
            parse(expression).unwrap_err(),
            ParseError::MismatchedParentheses
        );
    }

    #[test]
    fn alphabetic_character_is_a_parse_error() {
        assert_eq!(
            parse("2+a").unwrap_err(),
            ParseError::AlphabeticCharacter('a')
        );
    }

    #[test]
    fn integral_result_formats_without_a_decimal_point() {
        let result = evaluate_expression("3.0+2".to_string()).unwrap();

        assert_eq!(result, "5");
    }

    #[test]
    fn fractional_result_keeps_its_decimals() {
        let result = evaluate_expression("3.5+2".to_string()).unwrap();

        assert_eq!(result, "5.5");
    }

    #[test]
    fn parsed_tree_renders_with_the_root_operator_first() {
        let tree = parse("1+2*3").unwrap();

        let expected = "\
├── +
│   ├── 1
│   └── *
│       ├── 2
│       └── 3";
        assert_eq!(tree.render().unwrap(), expected);
    }
}
