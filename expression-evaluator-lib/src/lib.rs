//! Compiles infix arithmetic expressions into binary expression trees,
//! evaluates them, and renders them as indented diagrams.

pub mod evaluator;

pub use evaluator::{evaluate_expression, parse};
