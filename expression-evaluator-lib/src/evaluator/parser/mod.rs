pub mod expression_tree;
mod tree_builder;

use crate::evaluator::errors::ParseError;
use crate::evaluator::parser::expression_tree::Node;
use crate::evaluator::parser::tree_builder::build_expression_tree;
use crate::evaluator::token::Token;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate and render than the original string.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_evaluator::evaluator::parser::parse;
/// use expression_evaluator::evaluator::token::Token;
///
/// let infix_tokens = vec![
///     Token::Literal(2.0),
///     Token::Operator('+'),
///     Token::Literal(3.0),
/// ];
/// let tree = parse(infix_tokens).unwrap();
/// assert_eq!(tree.evaluate().unwrap(), 5.0);
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node, ParseError> {
    build_expression_tree(infix_tokens)
}
