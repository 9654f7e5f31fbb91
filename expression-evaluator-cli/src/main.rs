use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_evaluator::evaluator::errors::{EvaluationError, ParseError};
use expression_evaluator::evaluator::parser::expression_tree::format_numeric;
use expression_evaluator::parse;
use log::debug;
use std::io;
use std::io::Write;

/// Evaluates the given arithmetic expression and prints its expression tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; read from stdin when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(error) = run(args) {
        if is_input_error(&error) {
            eprintln!("Invalid arithmetic operations: {}!", error);
        } else {
            eprintln!("An unexpected error occurred: {}!", error);
        }
        std::process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };

    let tree = parse(&expression)?;
    debug!("parsed {:?} into:\n{}", expression, tree);
    let result = tree.evaluate()?;

    println!("Result: {}", format_numeric(result));
    println!("{}", tree.render()?);
    Ok(())
}

fn read_expression() -> Result<String> {
    print!("Enter the arithmetic operations: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read expression from stdin")?;
    Ok(line.trim_end().to_string())
}

/// Expected input-validation failures, as opposed to internal bugs.
fn is_input_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<ParseError>().is_some()
        || error.downcast_ref::<EvaluationError>().is_some()
}
