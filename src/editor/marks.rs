//! Mark management for bookmarking positions.

use std::collections::HashMap;

use crate::overlay::MarkType;

/// A line in one of the open buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Index of the buffer.
    pub buffer: usize,
    /// 1-based line number.
    pub line: usize,
}

impl Position {
    pub fn new(buffer: usize, line: usize) -> Self {
        Self { buffer, line }
    }
}

/// Returns the scope a mark name belongs to.
///
/// Lowercase letters name buffer marks, uppercase letters global marks; any
/// other character is not a valid mark name.
pub fn mark_type_for(name: char) -> Option<MarkType> {
    if name.is_ascii_lowercase() {
        Some(MarkType::Buffer)
    } else if name.is_ascii_uppercase() {
        Some(MarkType::Global)
    } else {
        None
    }
}

/// Manages buffer marks (a-z) and global marks (A-Z).
///
/// Buffer marks are kept per buffer, so `a` can be set independently in each
/// open buffer. Global marks remember the buffer they were set in.
#[derive(Debug, Clone, Default)]
pub struct MarkSet {
    /// Buffer marks keyed by (buffer, name)
    local: HashMap<(usize, char), usize>,
    /// Global marks keyed by name
    global: HashMap<char, Position>,
}

impl MarkSet {
    /// Creates a new empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a mark at the given position.
    ///
    /// Returns false if `name` is not a valid mark name.
    pub fn set_mark(&mut self, name: char, position: Position) -> bool {
        match mark_type_for(name) {
            Some(MarkType::Buffer) => {
                self.local.insert((position.buffer, name), position.line);
                true
            }
            Some(MarkType::Global) => {
                self.global.insert(name, position);
                true
            }
            None => false,
        }
    }

    /// Gets the position of a mark as seen from `buffer`.
    ///
    /// Returns None if the mark is not set.
    pub fn get_mark(&self, name: char, buffer: usize) -> Option<Position> {
        match mark_type_for(name)? {
            MarkType::Buffer => self
                .local
                .get(&(buffer, name))
                .map(|&line| Position::new(buffer, line)),
            MarkType::Global => self.global.get(&name).copied(),
        }
    }

    /// Removes a mark as seen from `buffer`.
    ///
    /// Returns true if a mark was removed.
    pub fn remove_mark(&mut self, name: char, buffer: usize) -> bool {
        match mark_type_for(name) {
            Some(MarkType::Buffer) => self.local.remove(&(buffer, name)).is_some(),
            Some(MarkType::Global) => self.global.remove(&name).is_some(),
            None => false,
        }
    }

    /// Total number of marks across all buffers.
    pub fn len(&self) -> usize {
        self.local.len() + self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists the marks visible from `buffer`.
    ///
    /// The buffer's own marks come first, then all global marks, each group
    /// sorted by name.
    pub fn list(&self, buffer: usize) -> Vec<(char, MarkType, Position)> {
        let mut local: Vec<_> = self
            .local
            .iter()
            .filter(|((b, _), _)| *b == buffer)
            .map(|(&(b, c), &line)| (c, MarkType::Buffer, Position::new(b, line)))
            .collect();
        local.sort_by_key(|(c, _, _)| *c);

        let mut global: Vec<_> = self
            .global
            .iter()
            .map(|(&c, &pos)| (c, MarkType::Global, pos))
            .collect();
        global.sort_by_key(|(c, _, _)| *c);

        local.extend(global);
        local
    }
}
