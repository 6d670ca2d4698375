// builtins.rs

use std::io::{self, Write};

use itertools::Itertools;
use tracing::debug;

use crate::workspace::Workspace;

pub const BUILTINS: [&str; 5] = ["clear", "exit", "help", "history", "recall"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Run `tokens` as a builtin. Returns `None` when the line is not a builtin
/// and should be evaluated instead.
pub fn run_builtin<W: Write>(
    tokens: &[&str],
    workspace: &mut Workspace,
    out: &mut W,
) -> io::Result<Option<Flow>> {
    let Some(&command) = tokens.first() else {
        return Ok(None);
    };
    if !BUILTINS.contains(&command) {
        return Ok(None);
    }
    debug!(command, "builtin");

    match command {
        "exit" => {
            let code = tokens.get(1).and_then(|s| s.parse::<i32>().ok()).unwrap_or(0);
            return Ok(Some(Flow::Exit(code)));
        }
        "help" => {
            writeln!(out, "builtins: {}", BUILTINS.iter().join(", "))?;
            writeln!(out, "Up/Ctrl-P recalls older entries, Down/Ctrl-N newer ones")?;
        }
        "history" => {
            let record = workspace.input_record();
            let total = record.len();
            let start = match tokens.get(1).and_then(|s| s.parse::<usize>().ok()) {
                Some(n) => total.saturating_sub(n),
                None => 0,
            };
            for (i, input) in record.iter().enumerate().skip(start) {
                writeln!(out, "{:>5}  {}", i + 1, input)?;
            }
        }
        "recall" => {
            let history = workspace.entry_history();
            if !history.is_empty() {
                writeln!(out, "{}", history.iter_recent().join("  "))?;
            }
        }
        "clear" => workspace.clear_history(),
        _ => unreachable!("checked against BUILTINS"),
    }
    Ok(Some(Flow::Continue))
}
