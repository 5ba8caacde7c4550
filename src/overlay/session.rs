//! State held while the overlay is open.

use super::annotate::{annotate, StyleSpan};
use super::bindings::BindingTable;
use super::layout::{self, LineIndex, RenderedLayout};
use super::{MarkRecord, NavMode};
use crate::config::OverlayConfig;

/// Everything derived from one mark snapshot.
///
/// A session is only ever built whole by [`OverlaySession::build`]; lines,
/// index, spans and bindings can never come from different snapshots.
#[derive(Debug, Clone)]
pub struct OverlaySession {
    mode: NavMode,
    marks: Vec<MarkRecord>,
    layout: RenderedLayout,
    spans: Vec<StyleSpan>,
    bindings: BindingTable,
}

impl OverlaySession {
    /// Builds a session from a fresh mark snapshot.
    pub fn build(marks: Vec<MarkRecord>, config: &OverlayConfig, mode: NavMode) -> Self {
        let layout = layout::build(&marks, config, mode);
        let spans = annotate(&layout, &marks, mode);
        let bindings = BindingTable::for_mode(mode, &config.keymaps, &marks);
        Self {
            mode,
            marks,
            layout,
            spans,
            bindings,
        }
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn marks(&self) -> &[MarkRecord] {
        &self.marks
    }

    pub fn layout(&self) -> &RenderedLayout {
        &self.layout
    }

    pub fn lines(&self) -> &[String] {
        &self.layout.lines
    }

    pub fn index(&self) -> LineIndex {
        self.layout.index
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Returns the mark shown on the 1-based cursor line.
    pub fn mark_at_line(&self, cursor_line: usize) -> Option<&MarkRecord> {
        self.layout
            .index
            .resolve(cursor_line)
            .and_then(|pos| self.marks.get(pos))
    }

    /// Returns the mark with identifier `c`.
    pub fn mark_by_char(&self, c: char) -> Option<&MarkRecord> {
        self.marks.iter().find(|m| m.mark == c)
    }
}
