// evaluator.rs

use crate::error::EvalError;

/// Expression evaluation as seen by a workspace.
///
/// `Ok(None)` means the input produced no value (for example a variable was
/// removed) and is shown as "cleared".
pub trait Evaluator {
    fn evaluate(&mut self, input: &str) -> Result<Option<f64>, EvalError>;
}

/// Accepts plain numeric literals only. Stands in for a real expression engine.
#[derive(Debug, Default)]
pub struct LiteralEvaluator;

impl Evaluator for LiteralEvaluator {
    fn evaluate(&mut self, input: &str) -> Result<Option<f64>, EvalError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        input
            .parse::<f64>()
            .map(Some)
            .map_err(|_| EvalError::Unsupported(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_numbers() {
        let mut ev = LiteralEvaluator;
        assert_eq!(ev.evaluate("42"), Ok(Some(42.0)));
        assert_eq!(ev.evaluate("  -1.5 "), Ok(Some(-1.5)));
        assert_eq!(ev.evaluate(""), Ok(None));
    }

    #[test]
    fn test_literal_rejects_expressions() {
        let mut ev = LiteralEvaluator;
        assert_eq!(
            ev.evaluate("1 + 2"),
            Err(EvalError::Unsupported("1 + 2".to_string()))
        );
    }
}
