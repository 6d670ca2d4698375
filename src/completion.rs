// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::builtins::BUILTINS;

/// Line editor helper: completes builtin names in the first word.
#[derive(Debug, Default)]
pub struct CalcHelper;

impl CalcHelper {
    pub fn new() -> Self {
        Self
    }

    fn candidates(prefix: &str) -> Vec<Pair> {
        BUILTINS
            .iter()
            .filter(|b| b.starts_with(prefix))
            .map(|b| Pair {
                display: b.to_string(),
                replacement: format!("{} ", b),
            })
            .collect()
    }
}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        // only the command word is completed
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((0, Self::candidates(prefix)))
    }
}

impl Hinter for CalcHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CalcHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str) -> Vec<String> {
        CalcHelper::candidates(prefix).into_iter().map(|p| p.display).collect()
    }

    #[test]
    fn test_candidates_by_prefix() {
        assert_eq!(names("h"), ["help", "history"]);
        assert_eq!(names("cl"), ["clear"]);
        assert!(names("12").is_empty());
    }
}
