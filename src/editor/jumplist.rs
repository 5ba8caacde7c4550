//! Cursor position history for Ctrl-o / Ctrl-i.

use std::collections::VecDeque;

use super::marks::Position;

/// Bounded history of jump positions with a cursor into it.
///
/// Stepping back and then recording a new jump drops the forward history.
/// Once full, the oldest entry falls off.
#[derive(Debug, Clone)]
pub struct JumpList {
    entries: VecDeque<Position>,
    cursor: usize,
    capacity: usize,
}

impl JumpList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Records `position`, unless the cursor already sits on it.
    pub fn record_jump(&mut self, position: Position) {
        if self.entries.get(self.cursor) == Some(&position) {
            return;
        }

        self.entries.truncate(self.cursor + 1);
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(position);
        self.cursor = self.entries.len() - 1;
    }

    /// Steps to the previous position, if any.
    pub fn back(&mut self) -> Option<Position> {
        self.cursor = self.cursor.checked_sub(1)?;
        self.entries.get(self.cursor).copied()
    }

    /// Steps to the next position, if any.
    pub fn forward(&mut self) -> Option<Position> {
        let next = self.cursor + 1;
        let position = self.entries.get(next).copied()?;
        self.cursor = next;
        Some(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
