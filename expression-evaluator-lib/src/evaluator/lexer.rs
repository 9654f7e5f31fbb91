use crate::evaluator::errors::ParseError;
use crate::evaluator::operator;
use crate::evaluator::token::Token;
use log::debug;

/// Scans the given expression string into a sequence of tokens.
///
/// Whitespace is skipped. A maximal contiguous run of digits and `.`
/// characters forms one numeric literal. Alphabetic characters and any
/// other unrecognized symbols are rejected outright.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in source order.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_alphabetic() {
            return Err(ParseError::AlphabeticCharacter(character));
        }
        if character.is_whitespace() {
            characters.next();
            continue;
        }
        if character.is_ascii_digit() || character == '.' {
            let mut literal = String::new();
            while let Some(&digit_or_dot) = characters.peek() {
                if digit_or_dot.is_ascii_digit() || digit_or_dot == '.' {
                    literal.push(digit_or_dot);
                    characters.next();
                } else {
                    break;
                }
            }
            let value = literal
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(literal.clone()))?;
            tokens.push(Token::Literal(value));
            continue;
        }

        characters.next();
        match character {
            '(' => tokens.push(Token::OpenParenthesis),
            ')' => tokens.push(Token::CloseParenthesis),
            symbol if operator::is_operator(symbol) => tokens.push(Token::Operator(symbol)),
            unexpected => return Err(ParseError::UnexpectedCharacter(unexpected)),
        }
    }

    debug!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}
