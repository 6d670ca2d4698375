// workspace.rs

use std::fmt;

use tracing::{debug, info};

use crate::evaluator::Evaluator;
use crate::history::CircularHistory;

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Value(f64),
    /// Evaluated without producing a value.
    Cleared,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptLine {
    pub input: String,
    pub outcome: Outcome,
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.input.trim();
        match &self.outcome {
            Outcome::Value(v) => write!(f, "{} = {}", input, format_number(*v)),
            Outcome::Cleared => write!(f, "{} cleared", input),
            Outcome::Failed(msg) => write!(f, "{} = {}", input, msg),
        }
    }
}

/// One interactive calculator session.
///
/// `input_record` keeps every accepted submission in order so it can be
/// replayed, while `entry_history` is the deduplicated recall list.
#[derive(Debug)]
pub struct Workspace {
    name: String,
    input: String,
    input_record: Vec<String>,
    entry_history: CircularHistory,
    transcript: Vec<TranscriptLine>,
    trim_entries: bool,
}

impl Workspace {
    pub fn new(name: impl Into<String>, trim_entries: bool) -> Self {
        Self {
            name: name.into(),
            input: String::new(),
            input_record: Vec::new(),
            entry_history: CircularHistory::new(),
            transcript: Vec::new(),
            trim_entries,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input_record(&self) -> &[String] {
        &self.input_record
    }

    pub fn entry_history(&self) -> &CircularHistory {
        &self.entry_history
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn can_recall(&self) -> bool {
        !self.entry_history.is_empty()
    }

    /// Submit the current input. Blank input is ignored.
    pub fn evaluate_input_and_save<E: Evaluator + ?Sized>(
        &mut self,
        evaluator: &mut E,
    ) -> Option<&TranscriptLine> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.input_record.push(text.clone());
        info!(workspace = %self.name, records = self.input_record.len(), "input submitted");
        Some(self.evaluate(&text, evaluator))
    }

    /// Evaluate `text` and add it to the recall history, whatever the outcome.
    pub fn evaluate<E: Evaluator + ?Sized>(
        &mut self,
        text: &str,
        evaluator: &mut E,
    ) -> &TranscriptLine {
        let outcome = match evaluator.evaluate(text) {
            Ok(Some(v)) => Outcome::Value(v),
            Ok(None) => Outcome::Cleared,
            Err(e) => Outcome::Failed(e.to_string()),
        };
        debug!(?outcome, "evaluated");
        self.transcript.push(TranscriptLine {
            input: text.to_string(),
            outcome,
        });

        let entry = if self.trim_entries { text.trim() } else { text };
        self.entry_history.add_new_entry(entry);

        &self.transcript[self.transcript.len() - 1]
    }

    /// Rebuild state from an ordered log of earlier submissions.
    pub fn replay<E, I, S>(&mut self, inputs: I, evaluator: &mut E)
    where
        E: Evaluator + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for input in inputs {
            let input = input.as_ref();
            self.input_record.push(input.to_string());
            self.evaluate(input, evaluator);
            count += 1;
        }
        info!(workspace = %self.name, count, "replayed inputs");
    }

    /// Recall an older entry into the input. Returns `None` when there is
    /// nothing to recall, leaving the input as it was.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let entry = self.entry_history.previous_entry(&self.input);
        self.apply_recall(entry)
    }

    /// Recall a newer entry into the input. See [`Workspace::recall_previous`].
    pub fn recall_next(&mut self) -> Option<&str> {
        let entry = self.entry_history.next_entry(&self.input);
        self.apply_recall(entry)
    }

    fn apply_recall(&mut self, entry: String) -> Option<&str> {
        if entry.is_empty() {
            return None;
        }
        self.input = entry;
        Some(&self.input)
    }

    /// Drop the input record and transcript. Recall history is kept so earlier
    /// entries can still be brought back.
    pub fn clear_history(&mut self) {
        self.input_record.clear();
        self.transcript.clear();
        info!(workspace = %self.name, "history cleared");
    }
}

/// Format with `,` between thousands groups of the integer part.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::evaluator::LiteralEvaluator;
    use pretty_assertions::assert_eq;

    /// Returns no value for anything starting with "del ".
    struct Scripted;

    impl Evaluator for Scripted {
        fn evaluate(&mut self, input: &str) -> Result<Option<f64>, EvalError> {
            if input.trim_start().starts_with("del ") {
                return Ok(None);
            }
            LiteralEvaluator.evaluate(input)
        }
    }

    fn submit(ws: &mut Workspace, text: &str) {
        ws.set_input(text);
        ws.evaluate_input_and_save(&mut Scripted);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut ws = Workspace::new("main", true);
        ws.set_input("   ");
        assert!(ws.evaluate_input_and_save(&mut Scripted).is_none());
        assert!(ws.input_record().is_empty());
        assert!(!ws.can_recall());
        assert_eq!(ws.input(), "   ");
    }

    #[test]
    fn test_submit_records_and_clears_input() {
        let mut ws = Workspace::new("main", true);
        ws.set_input("12");
        let line = ws.evaluate_input_and_save(&mut Scripted).cloned();
        assert_eq!(
            line,
            Some(TranscriptLine {
                input: "12".to_string(),
                outcome: Outcome::Value(12.0),
            })
        );
        assert_eq!(ws.input(), "");
        assert_eq!(ws.input_record(), ["12"]);
        assert!(ws.can_recall());
    }

    #[test]
    fn test_transcript_outcomes() {
        let mut ws = Workspace::new("main", true);
        submit(&mut ws, "1234567");
        submit(&mut ws, "del x");
        submit(&mut ws, "1 +");
        let shown: Vec<String> = ws.transcript().iter().map(|l| l.to_string()).collect();
        assert_eq!(
            shown,
            [
                "1234567 = 1,234,567",
                "del x cleared",
                "1 + = unsupported expression: 1 +",
            ]
        );
        // failures are still recallable
        assert_eq!(ws.entry_history().entries(), ["1234567", "del x", "1 +"]);
    }

    #[test]
    fn test_record_keeps_duplicates_history_does_not() {
        let mut ws = Workspace::new("main", true);
        for t in ["1", "2", "1"] {
            submit(&mut ws, t);
        }
        assert_eq!(ws.input_record(), ["1", "2", "1"]);
        assert_eq!(ws.entry_history().entries(), ["2", "1"]);
    }

    #[test]
    fn test_trim_policy() {
        let mut trimmed = Workspace::new("a", true);
        submit(&mut trimmed, " 5 ");
        submit(&mut trimmed, "5");
        assert_eq!(trimmed.entry_history().entries(), ["5"]);
        assert_eq!(trimmed.input_record(), [" 5 ", "5"]);

        let mut raw = Workspace::new("b", false);
        submit(&mut raw, " 5 ");
        submit(&mut raw, "5");
        assert_eq!(raw.entry_history().entries(), [" 5 ", "5"]);
    }

    #[test]
    fn test_recall_walks_history() {
        let mut ws = Workspace::new("main", true);
        for t in ["11", "22", "33"] {
            submit(&mut ws, t);
        }
        assert_eq!(ws.recall_previous(), Some("33"));
        assert_eq!(ws.recall_previous(), Some("22"));
        assert_eq!(ws.recall_next(), Some("33"));
        assert_eq!(ws.input(), "33");
    }

    #[test]
    fn test_recall_on_empty_keeps_input() {
        let mut ws = Workspace::new("main", true);
        ws.set_input("draft");
        assert_eq!(ws.recall_previous(), None);
        assert_eq!(ws.recall_next(), None);
        assert_eq!(ws.input(), "draft");
    }

    #[test]
    fn test_replay_rebuilds_recall() {
        let mut ws = Workspace::new("main", true);
        ws.replay(["1", "2", "3", "2"], &mut Scripted);
        assert_eq!(ws.input_record(), ["1", "2", "3", "2"]);
        assert_eq!(ws.transcript().len(), 4);
        assert_eq!(ws.recall_previous(), Some("2"));
        assert_eq!(ws.recall_previous(), Some("3"));
        assert_eq!(ws.recall_previous(), Some("1"));
    }

    #[test]
    fn test_clear_history() {
        let mut ws = Workspace::new("main", true);
        submit(&mut ws, "1");
        submit(&mut ws, "2");
        ws.clear_history();
        assert!(ws.input_record().is_empty());
        assert!(ws.transcript().is_empty());
        assert!(ws.can_recall());
        assert_eq!(ws.recall_previous(), Some("2"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(-1234567.25), "-1,234,567.25");
        assert_eq!(format_number(123456.5), "123,456.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }
}
