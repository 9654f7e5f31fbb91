use crate::evaluator::errors::ParseError;
use crate::evaluator::operator;
use crate::evaluator::parser::expression_tree::Node;
use crate::evaluator::token::Token;

/// Builds an expression tree from the given infix tokens using two stacks:
/// one for pending operators (and open-parenthesis markers), one for
/// already-built subtrees.
///
/// Operators of greater-or-equal precedence on top of the stack are reduced
/// before a new operator is pushed, which makes same-precedence operators
/// left-associative.
pub fn build_expression_tree(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut operands: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Literal(value) => operands.push(Node::new_number(value)),
            Token::OpenParenthesis => operators.push(token),
            Token::CloseParenthesis => loop {
                match operators.last() {
                    Some(Token::OpenParenthesis) => {
                        operators.pop();
                        break;
                    }
                    Some(_) => reduce_top(&mut operators, &mut operands)?,
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            Token::Operator(symbol) => {
                while stack_top_outranks(&operators, symbol) {
                    reduce_top(&mut operators, &mut operands)?;
                }
                operators.push(Token::Operator(symbol));
            }
        }
    }

    while !operators.is_empty() {
        reduce_top(&mut operators, &mut operands)?;
    }

    if operands.len() != 1 {
        return Err(ParseError::InvalidExpression);
    }
    operands.pop().ok_or(ParseError::InvalidExpression)
}

fn stack_top_outranks(operators: &[Token], incoming: char) -> bool {
    match operators.last() {
        Some(Token::Operator(top)) => operator::precedence(*top) >= operator::precedence(incoming),
        // An open-parenthesis marker never forces a reduction.
        _ => false,
    }
}

/// Pops one operator and its two operands, combines them into an operation
/// node, and pushes that node back as a single operand.
///
/// The right operand is popped first: operands were pushed in left-to-right
/// scan order and the stack is LIFO.
fn reduce_top(operators: &mut Vec<Token>, operands: &mut Vec<Node>) -> Result<(), ParseError> {
    let symbol = match operators.pop() {
        Some(Token::Operator(symbol)) => symbol,
        // A leftover open parenthesis at end of scan means it was never closed.
        Some(Token::OpenParenthesis) => return Err(ParseError::MismatchedParentheses),
        _ => return Err(ParseError::InvalidExpression),
    };
    let right = operands.pop().ok_or(ParseError::InvalidExpression)?;
    let left = operands.pop().ok_or(ParseError::InvalidExpression)?;
    operands.push(Node::new_operation(symbol, left, right));
    Ok(())
}
