// error.rs

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("readline: {0}")]
    Readline(#[from] ReadlineError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid value {value:?} for {var}")]
    Config { var: &'static str, value: String },
}

/// Failure reported by an [`Evaluator`](crate::evaluator::Evaluator).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unsupported expression: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
