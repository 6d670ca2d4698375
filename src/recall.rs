// recall.rs

use std::sync::{Arc, Mutex};

use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, KeyCode, KeyEvent, Modifiers, Movement,
    RepeatCount,
};
use tracing::debug;

use crate::util::lock;
use crate::workspace::Workspace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Older,
    Newer,
}

/// Key handler that swaps the edited line for a recalled history entry.
pub struct RecallHandler {
    workspace: Arc<Mutex<Workspace>>,
    direction: Direction,
}

impl RecallHandler {
    pub fn new(workspace: Arc<Mutex<Workspace>>, direction: Direction) -> Self {
        Self { workspace, direction }
    }

    /// Feed the line being edited to the workspace and recall from there.
    fn recall(&self, line: &str) -> Option<String> {
        let mut ws = lock(&self.workspace);
        ws.set_input(line);
        let entry = match self.direction {
            Direction::Older => ws.recall_previous(),
            Direction::Newer => ws.recall_next(),
        };
        debug!(direction = ?self.direction, found = entry.is_some(), "recall gesture");
        entry.map(str::to_string)
    }

    /// Editor command for a gesture on `line`: replace it, or leave it alone.
    fn command_for(&self, line: &str) -> Cmd {
        match self.recall(line) {
            Some(entry) => Cmd::Replace(Movement::WholeLine, Some(entry)),
            None => Cmd::Noop,
        }
    }
}

impl ConditionalEventHandler for RecallHandler {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, ctx: &EventContext) -> Option<Cmd> {
        Some(self.command_for(ctx.line()))
    }
}

/// Key bindings for both recall directions.
pub fn bindings(workspace: &Arc<Mutex<Workspace>>) -> Vec<(KeyEvent, EventHandler)> {
    let mut out = Vec::new();
    for (direction, keys) in [
        (Direction::Older, [KeyEvent(KeyCode::Up, Modifiers::NONE), KeyEvent::ctrl('P')]),
        (Direction::Newer, [KeyEvent(KeyCode::Down, Modifiers::NONE), KeyEvent::ctrl('N')]),
    ] {
        for key in keys {
            let handler = RecallHandler::new(Arc::clone(workspace), direction);
            out.push((key, EventHandler::Conditional(Box::new(handler))));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::LiteralEvaluator;

    fn shared(inputs: &[&str]) -> Arc<Mutex<Workspace>> {
        let mut ws = Workspace::new("test", true);
        ws.replay(inputs.iter().copied(), &mut LiteralEvaluator);
        Arc::new(Mutex::new(ws))
    }

    #[test]
    fn test_recall_uses_edited_line() {
        let ws = shared(&["1", "2", "3"]);
        let older = RecallHandler::new(Arc::clone(&ws), Direction::Older);
        let newer = RecallHandler::new(Arc::clone(&ws), Direction::Newer);

        assert_eq!(older.recall("").as_deref(), Some("3"));
        assert_eq!(older.recall("3").as_deref(), Some("2"));
        assert_eq!(newer.recall("2").as_deref(), Some("3"));
        assert_eq!(lock(&ws).input(), "3");
    }

    #[test]
    fn test_recall_on_empty_history() {
        let ws = shared(&[]);
        let older = RecallHandler::new(Arc::clone(&ws), Direction::Older);
        assert_eq!(older.recall("typing"), None);
        assert_eq!(lock(&ws).input(), "typing");
    }

    #[test]
    fn test_command_replaces_whole_line() {
        let ws = shared(&["1", "2"]);
        let older = RecallHandler::new(Arc::clone(&ws), Direction::Older);
        assert!(matches!(
            older.command_for(""),
            Cmd::Replace(Movement::WholeLine, Some(ref entry)) if entry == "2"
        ));

        let empty = shared(&[]);
        let newer = RecallHandler::new(empty, Direction::Newer);
        assert!(matches!(newer.command_for("draft"), Cmd::Noop));
    }

    #[test]
    fn test_bindings_cover_both_directions() {
        let ws = shared(&[]);
        let keys: Vec<KeyEvent> = bindings(&ws).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&KeyEvent(KeyCode::Up, Modifiers::NONE)));
        assert!(keys.contains(&KeyEvent::ctrl('N')));
    }
}
