//! Editor state management.
//!
//! This module provides the `EditorState` struct that manages all runtime state
//! of the viewer: the open buffers, the cursor, the current input mode, marks,
//! the jump list and the message shown to the user.
//!
//! `EditorState` is the host side of the marks overlay: it implements
//! [`MarkProvider`], handing out mark snapshots and carrying out jumps and
//! deletions requested from the overlay.
//!
//! # Example
//!
//! ```
//! use markquill::editor::buffer::Buffer;
//! use markquill::editor::state::EditorState;
//! use markquill::overlay::MarkProvider;
//!
//! let mut state = EditorState::new(vec![Buffer::from_text("a.txt", "one\ntwo\nthree")]);
//! state.move_cursor_down(2);
//! assert!(state.set_mark_at_cursor('a'));
//!
//! let marks = state.get_all_marks();
//! assert_eq!(marks.len(), 1);
//! assert_eq!(marks[0].line, 3);
//! assert_eq!(marks[0].preview, "three");
//! ```

use super::buffer::Buffer;
use super::jumplist::JumpList;
use super::marks::{MarkSet, Position};
use super::mode::EditorMode;
use crate::overlay::{MarkProvider, MarkRecord, MarkType};

/// Maximum number of entries kept in the jump list.
const JUMPLIST_SIZE: usize = 100;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

pub struct EditorState {
    buffers: Vec<Buffer>,
    current: usize,
    /// 1-based cursor line per buffer
    cursors: Vec<usize>,
    scroll_offset: usize,
    viewport_height: usize,
    mode: EditorMode,
    marks: MarkSet,
    jumplist: JumpList,
    message: Option<Message>,
    show_line_numbers: bool,
}

impl EditorState {
    /// Creates a new state showing the first of `buffers`.
    ///
    /// An empty scratch buffer is created when `buffers` is empty.
    pub fn new(buffers: Vec<Buffer>) -> Self {
        let buffers = if buffers.is_empty() {
            vec![Buffer::from_text("[scratch]", "")]
        } else {
            buffers
        };
        let cursors = vec![1; buffers.len()];
        Self {
            buffers,
            current: 0,
            cursors,
            scroll_offset: 0,
            viewport_height: 0,
            mode: EditorMode::Normal,
            marks: MarkSet::new(),
            jumplist: JumpList::new(JUMPLIST_SIZE),
            message: None,
            show_line_numbers: true,
        }
    }

    /// Returns all open buffers.
    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    /// Returns the buffer being shown.
    pub fn current_buffer(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    /// Returns the index of the buffer being shown.
    pub fn current_buffer_index(&self) -> usize {
        self.current
    }

    /// Returns the 1-based cursor line in the current buffer.
    pub fn cursor_line(&self) -> usize {
        self.cursors[self.current]
    }

    /// Returns the cursor as a position.
    pub fn position(&self) -> Position {
        Position::new(self.current, self.cursor_line())
    }

    /// Returns the current input mode.
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Sets the current input mode.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    /// Returns the marks.
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    fn set_cursor_line(&mut self, line: usize) {
        let last = self.current_buffer().line_count();
        self.cursors[self.current] = line.clamp(1, last);
    }

    /// Moves the cursor down by `count` lines.
    pub fn move_cursor_down(&mut self, count: usize) {
        self.set_cursor_line(self.cursor_line().saturating_add(count));
    }

    /// Moves the cursor up by `count` lines.
    pub fn move_cursor_up(&mut self, count: usize) {
        self.set_cursor_line(self.cursor_line().saturating_sub(count));
    }

    /// Moves the cursor to the first line.
    pub fn jump_to_top(&mut self) {
        self.set_cursor_line(1);
    }

    /// Moves the cursor to the last line.
    pub fn jump_to_bottom(&mut self) {
        self.set_cursor_line(self.current_buffer().line_count());
    }

    /// Moves the cursor down by half the viewport.
    pub fn half_page_down(&mut self) {
        self.move_cursor_down((self.viewport_height / 2).max(1));
    }

    /// Moves the cursor up by half the viewport.
    pub fn half_page_up(&mut self) {
        self.move_cursor_up((self.viewport_height / 2).max(1));
    }

    /// Shows the next buffer, wrapping around.
    pub fn next_buffer(&mut self) {
        self.switch_buffer((self.current + 1) % self.buffers.len());
    }

    /// Shows the previous buffer, wrapping around.
    pub fn previous_buffer(&mut self) {
        let len = self.buffers.len();
        self.switch_buffer((self.current + len - 1) % len);
    }

    fn switch_buffer(&mut self, index: usize) {
        if index != self.current && index < self.buffers.len() {
            self.current = index;
            self.scroll_offset = 0;
        }
    }

    /// Sets mark `name` at the cursor.
    ///
    /// Returns false if `name` is not a valid mark name.
    pub fn set_mark_at_cursor(&mut self, name: char) -> bool {
        let position = self.position();
        if self.marks.set_mark(name, position) {
            self.set_message(format!("Mark '{}' set", name), MessageLevel::Info);
            true
        } else {
            self.set_message(format!("Invalid mark name '{}'", name), MessageLevel::Error);
            false
        }
    }

    /// Jumps to mark `name`, recording the jump.
    ///
    /// Returns false if the mark is not set.
    pub fn jump_to_mark(&mut self, name: char) -> bool {
        match self.marks.get_mark(name, self.current) {
            Some(target) => {
                self.jump_to(target);
                true
            }
            None => {
                self.set_message(format!("Mark '{}' not set", name), MessageLevel::Warning);
                false
            }
        }
    }

    /// Moves to `target`, recording origin and destination in the jump list.
    fn jump_to(&mut self, target: Position) {
        if target.buffer >= self.buffers.len() {
            self.set_message("Mark points to a closed buffer".to_string(), MessageLevel::Error);
            return;
        }
        self.jumplist.record_jump(self.position());
        self.go_to(target);
        self.jumplist.record_jump(self.position());
    }

    fn go_to(&mut self, target: Position) {
        self.switch_buffer(target.buffer);
        self.set_cursor_line(target.line);
    }

    /// Jump backward in the jump list (Ctrl-o).
    pub fn jump_backward(&mut self) {
        if let Some(target) = self.jumplist.back() {
            self.go_to(target);
        }
    }

    /// Jump forward in the jump list (Ctrl-i).
    pub fn jump_forward(&mut self) {
        if let Some(target) = self.jumplist.forward() {
            self.go_to(target);
        }
    }

    /// Returns the first visible line index (0-based).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts scroll so the cursor stays inside a viewport of `viewport_height` rows.
    pub fn adjust_scroll_to_cursor(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        // Store viewport height for half-page motions
        self.viewport_height = viewport_height;

        let cursor_idx = self.cursor_line() - 1;
        if cursor_idx < self.scroll_offset {
            self.scroll_offset = cursor_idx;
        } else if cursor_idx >= self.scroll_offset + viewport_height {
            self.scroll_offset = cursor_idx + 1 - viewport_height;
        }
    }

    fn record_for(&self, name: char, kind: MarkType, pos: Position) -> Option<MarkRecord> {
        let buffer = self.buffers.get(pos.buffer)?;
        let preview = buffer.line(pos.line).unwrap_or_default().trim();
        Some(MarkRecord::new(name, kind, pos.line, buffer.name(), preview))
    }
}

impl MarkProvider for EditorState {
    fn get_all_marks(&self) -> Vec<MarkRecord> {
        self.marks
            .list(self.current)
            .into_iter()
            .filter_map(|(name, kind, pos)| self.record_for(name, kind, pos))
            .collect()
    }

    fn goto_mark(&mut self, mark: &MarkRecord) {
        self.jump_to_mark(mark.mark);
    }

    fn delete_mark(&mut self, mark: &MarkRecord) {
        if self.marks.remove_mark(mark.mark, self.current) {
            self.set_message(format!("Deleted mark '{}'", mark.mark), MessageLevel::Info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_buffers() -> EditorState {
        EditorState::new(vec![
            Buffer::from_text("a.txt", "a1\na2\na3\na4"),
            Buffer::from_text("b.txt", "b1\nb2"),
        ])
    }

    #[test]
    fn test_scratch_buffer_when_empty() {
        let state = EditorState::new(vec![]);
        assert_eq!(state.buffers().len(), 1);
        assert_eq!(state.cursor_line(), 1);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = two_buffers();
        state.move_cursor_down(10);
        assert_eq!(state.cursor_line(), 4);
        state.move_cursor_up(10);
        assert_eq!(state.cursor_line(), 1);
    }

    #[test]
    fn test_buffer_marks_are_per_buffer() {
        let mut state = two_buffers();
        state.move_cursor_down(1);
        state.set_mark_at_cursor('a');
        state.next_buffer();
        assert!(state.get_all_marks().is_empty());
        state.previous_buffer();
        assert_eq!(state.get_all_marks().len(), 1);
    }

    #[test]
    fn test_global_mark_switches_buffer() {
        let mut state = two_buffers();
        state.next_buffer();
        state.move_cursor_down(1);
        state.set_mark_at_cursor('B');
        state.previous_buffer();

        let marks = state.get_all_marks();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].file, "b.txt");

        state.goto_mark(&marks[0]);
        assert_eq!(state.current_buffer_index(), 1);
        assert_eq!(state.cursor_line(), 2);

        state.jump_backward();
        assert_eq!(state.current_buffer_index(), 0);
        assert_eq!(state.cursor_line(), 1);
    }

    #[test]
    fn test_delete_mark_through_provider() {
        let mut state = two_buffers();
        state.set_mark_at_cursor('a');
        state.set_mark_at_cursor('Z');
        let marks = state.get_all_marks();
        assert_eq!(marks.len(), 2);

        state.delete_mark(&marks[1]);
        let remaining = state.get_all_marks();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].mark, 'a');
    }
}
