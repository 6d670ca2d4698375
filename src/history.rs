// history.rs

use tracing::debug;

/// Most-recently-used recall history with cyclic navigation.
///
/// Entries are kept oldest first and are unique. The cursor holds the index of
/// the entry last handed out by [`CircularHistory::previous_entry`], so a
/// backward call reads then retreats while a forward call advances then reads.
#[derive(Clone, Debug, Default)]
pub struct CircularHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CircularHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in chronological order, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries newest first, the order a fresh backward recall visits them.
    pub fn iter_recent(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().rev()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Record `entry` as the newest item, moving it there if already present.
    /// Navigation restarts from the newest entry.
    pub fn add_new_entry(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if let Some(pos) = self.entries.iter().position(|e| *e == entry) {
            self.entries.remove(pos);
        }
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
        debug!(len = self.entries.len(), "history entry added");
    }

    /// Step toward older entries. Returns an empty string when there is
    /// nothing to recall.
    pub fn previous_entry(&mut self, current: &str) -> String {
        let Some(mut idx) = self.cursor else {
            return String::new();
        };

        // skip the value the caller is already showing
        if self.entries[idx] == current {
            idx = self.step_back(idx);
        }
        let entry = self.entries[idx].clone();
        self.cursor = Some(self.step_back(idx));

        debug!(index = idx, "recalled previous entry");
        entry
    }

    /// Step toward newer entries. Returns an empty string when there is
    /// nothing to recall.
    pub fn next_entry(&mut self, current: &str) -> String {
        let Some(idx) = self.cursor else {
            return String::new();
        };

        // the cursor trails the next forward value by one
        let mut idx = self.step_forward(idx);
        if self.entries[idx] == current {
            idx = self.step_forward(idx);
        }
        self.cursor = Some(idx);

        debug!(index = idx, "recalled next entry");
        self.entries[idx].clone()
    }

    fn step_back(&self, idx: usize) -> usize {
        if idx == 0 { self.entries.len() - 1 } else { idx - 1 }
    }

    fn step_forward(&self, idx: usize) -> usize {
        if idx + 1 == self.entries.len() { 0 } else { idx + 1 }
    }
}
