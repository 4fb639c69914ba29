use crate::pixel_buffer::Snapshot;

/// Snapshot history for undo/redo/reset.
///
/// Entry 0 is the freshly loaded artwork. `cursor` points at the entry that
/// is currently on screen; `None` means nothing has been pushed yet.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
    /// Bound on `entries.len()`; entry 0 is never evicted
    max_entries: Option<usize>,
}

impl HistoryStore {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `max_entries` snapshots (at least 2).
    pub fn with_max_entries(max_entries: Option<usize>) -> Self {
        Self {
            max_entries: max_entries.map(|n| n.max(2)),
            ..Self::default()
        }
    }

    /// Append a snapshot, discarding any redo tail past the cursor
    pub fn push(&mut self, snapshot: Snapshot) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(snapshot);

        if let Some(max) = self.max_entries {
            if self.entries.len() > max {
                // Evict the oldest edit, not the pristine artwork
                let excess = self.entries.len() - max;
                self.entries.drain(1..1 + excess);
            }
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry. Returns the snapshot that is now current.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Step forward one entry. Returns the snapshot that is now current.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor? + 1;
        let snapshot = self.entries.get(cursor).cloned()?;
        self.cursor = Some(cursor);
        Some(snapshot)
    }

    /// Return to the initial entry and forget every later one.
    pub fn reset(&mut self) -> Option<Snapshot> {
        let initial = self.entries.first().cloned()?;
        self.entries.truncate(1);
        self.cursor = Some(0);
        Some(initial)
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor?)
    }

    /// Returns true if there are entries before the cursor
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Returns true if there are entries after the cursor
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Returns true if reset would change anything
    pub fn can_reset(&self) -> bool {
        self.entries.len() > 1 || self.cursor.is_some_and(|c| c > 0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
