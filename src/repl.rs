// repl.rs

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};
use tracing::{error, info};

use crate::builtins::{run_builtin, Flow};
use crate::completion::CalcHelper;
use crate::config::Config;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::recall;
use crate::util::{ignore_broken_pipe, lock};
use crate::workspace::Workspace;

/// Run the prompt loop until `exit`, Ctrl-C or Ctrl-D. Returns the exit code.
pub fn start_repl<E: Evaluator>(config: &Config, evaluator: &mut E) -> Result<i32> {
    let editor_config = EditorConfig::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<CalcHelper, DefaultHistory> = Editor::with_config(editor_config)?;
    rl.set_helper(Some(CalcHelper::new()));

    let workspace = Arc::new(Mutex::new(Workspace::new("main", config.trim_entries)));
    for (key, handler) in recall::bindings(&workspace) {
        rl.bind_sequence(key, handler);
    }

    let stdout = io::stdout();
    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                info!("input closed");
                return Ok(0);
            }
            Err(err) => {
                error!(%err, "readline failed");
                return Err(err.into());
            }
        };

        let mut ws = lock(&workspace);
        let mut out = stdout.lock();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match run_builtin(&tokens, &mut ws, &mut out) {
            Ok(Some(Flow::Exit(code))) => return Ok(code),
            Ok(Some(Flow::Continue)) => {}
            Ok(None) => {
                ws.set_input(line.as_str());
                if let Some(result) = ws.evaluate_input_and_save(&mut *evaluator) {
                    ignore_broken_pipe(writeln!(out, "{}", result))?;
                }
            }
            Err(e) => ignore_broken_pipe(Err(e))?,
        }
        ignore_broken_pipe(out.flush())?;
    }
}
