use crate::evaluator::errors::EvaluationError;
use crate::evaluator::operator;
use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};
use string_builder::Builder;

/// A node of a binary arithmetic expression tree.
///
/// Leaves hold numeric literals, internal nodes hold a binary operator and
/// exclusively own their two subtrees. Nodes are built once by the parser
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Operation {
        operator: char,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_operation(operator: char, left: Node, right: Node) -> Node {
        Node::Operation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates the tree to its numeric result.
    ///
    /// Evaluation is strictly post-order: both children are evaluated
    /// before their parent combines them.
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero, or on an operator symbol
    /// outside `+ - * /` (unreachable through the parser, but handled).
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Operation {
                operator,
                left,
                right,
            } => {
                let left_value = left.evaluate()?;
                let right_value = right.evaluate()?;
                let result = operator::apply(*operator, left_value, right_value)?;
                debug!("{} {} {} = {}", left_value, operator, right_value, result);
                Ok(result)
            }
        }
    }

    /// Renders the tree as a top-down indented diagram with box-drawing
    /// connectors, one node per line, newline-joined.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_evaluator::parse;
    ///
    /// let tree = parse("1+2*3").unwrap();
    /// let diagram = tree.render().unwrap();
    /// assert!(diagram.starts_with("├── +"));
    /// ```
    pub fn render(&self) -> Result<String> {
        let mut builder = Builder::new(16);
        self.render_into(&mut builder, "", true);
        let text = builder.string().context("Failed to build tree diagram")?;
        Ok(text.trim_end_matches('\n').to_string())
    }

    fn render_into(&self, builder: &mut Builder, prefix: &str, is_left: bool) {
        let connector = if is_left { "├── " } else { "└── " };
        match self {
            Node::Number(value) => {
                builder.append(prefix);
                builder.append(connector);
                builder.append(format_numeric(*value));
                builder.append("\n");
            }
            Node::Operation {
                operator,
                left,
                right,
            } => {
                builder.append(prefix);
                builder.append(connector);
                builder.append(operator.to_string());
                builder.append("\n");

                let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
                left.render_into(builder, &child_prefix, true);
                right.render_into(builder, &child_prefix, false);
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self.render() {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(&text)
    }
}

/// Formats a value as an integer literal when its fractional part is
/// exactly zero, and as the full decimal value otherwise.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_evaluates_to_its_value() {
        let node = Node::new_number(4.5);

        assert_eq!(node.evaluate(), Ok(4.5));
    }

    #[test]
    fn operation_evaluates_children_first() {
        // (1 + 2) * 3
        let sum = Node::new_operation('+', Node::new_number(1.0), Node::new_number(2.0));
        let tree = Node::new_operation('*', sum, Node::new_number(3.0));

        assert_eq!(tree.evaluate(), Ok(9.0));
    }

    #[test]
    fn division_by_zero_leaf_fails() {
        let tree = Node::new_operation('/', Node::new_number(5.0), Node::new_number(0.0));

        assert_eq!(tree.evaluate(), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn zero_numerator_is_not_an_error() {
        let tree = Node::new_operation('/', Node::new_number(0.0), Node::new_number(5.0));

        assert_eq!(tree.evaluate(), Ok(0.0));
    }

    #[test]
    fn unknown_operator_in_tree_fails() {
        let tree = Node::new_operation('%', Node::new_number(5.0), Node::new_number(2.0));

        assert_eq!(tree.evaluate(), Err(EvaluationError::UnknownOperator('%')));
    }

    #[test]
    fn render_of_single_number_is_one_line() {
        let node = Node::new_number(7.0);

        assert_eq!(node.render().unwrap(), "├── 7");
    }

    #[test]
    fn render_indents_children_under_their_parent() {
        // 1 + 2 * 3
        let product = Node::new_operation('*', Node::new_number(2.0), Node::new_number(3.0));
        let tree = Node::new_operation('+', Node::new_number(1.0), product);

        let expected = "\
├── +
│   ├── 1
│   └── *
│       ├── 2
│       └── 3";

        assert_eq!(tree.render().unwrap(), expected);
    }

    #[test]
    fn render_is_idempotent() {
        let tree = Node::new_operation('-', Node::new_number(10.0), Node::new_number(2.5));

        assert_eq!(tree.render().unwrap(), tree.render().unwrap());
    }

    #[test]
    fn display_matches_render() {
        let tree = Node::new_operation('+', Node::new_number(1.0), Node::new_number(2.0));

        assert_eq!(format!("{}", tree), tree.render().unwrap());
    }

    #[test]
    fn whole_values_format_without_a_decimal_point() {
        assert_eq!(format_numeric(5.0), "5");
        assert_eq!(format_numeric(-3.0), "-3");
    }

    #[test]
    fn fractional_values_keep_their_decimals() {
        assert_eq!(format_numeric(5.5), "5.5");
        assert_eq!(format_numeric(0.125), "0.125");
    }
}
