//! Floating marks overlay.
//!
//! This module renders the list of marks inside a floating window and routes
//! single-key input to the overlay's actions. It is split into:
//!
//! - `layout`: builds the display lines and the line-to-mark index
//! - `annotate`: derives style spans over the built lines
//! - `bindings`: maps keys to tagged overlay actions per navigation mode
//! - `session`: the state held while the overlay is open
//! - `surface`: the windowing contract the host provides
//! - `controller`: the open/closed state machine tying it all together
//!
//! The overlay never owns marks. It asks a [`MarkProvider`] for a fresh
//! snapshot every time it renders and delegates jumps and deletions back to it.

pub mod annotate;
pub mod bindings;
pub mod controller;
pub mod error;
pub mod layout;
pub mod session;
pub mod surface;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use controller::{KeyOutcome, OverlayController};
pub use error::{OverlayError, SurfaceError};

/// Scope of a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkType {
    /// Valid only within one buffer.
    Buffer,
    /// Valid across buffers.
    Global,
}

/// Snapshot of a single mark, taken at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRecord {
    /// Identifying character (`a-z` for buffer marks, `A-Z` for global ones).
    pub mark: char,
    /// Scope of the mark.
    pub kind: MarkType,
    /// 1-based line number the mark points at.
    pub line: usize,
    /// Display name of the file or buffer holding the mark.
    pub file: String,
    /// Content of the marked line.
    pub preview: String,
}

impl MarkRecord {
    /// Creates a new mark record.
    pub fn new(
        mark: char,
        kind: MarkType,
        line: usize,
        file: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            mark,
            kind,
            line,
            file: file.into(),
            preview: preview.into(),
        }
    }
}

/// Interaction mode of the overlay.
///
/// # Example
///
/// ```
/// use markquill::overlay::NavMode;
///
/// assert_eq!(NavMode::Popup.toggled(), NavMode::Direct);
/// assert_eq!(NavMode::Direct.label(), "Direct");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavMode {
    /// Move a selection among the listed marks before acting.
    #[default]
    Popup,
    /// Press a mark's character to jump immediately.
    Direct,
}

impl NavMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            NavMode::Popup => NavMode::Direct,
            NavMode::Direct => NavMode::Popup,
        }
    }

    /// Returns the label shown in the overlay header.
    pub fn label(self) -> &'static str {
        match self {
            NavMode::Popup => "Popup",
            NavMode::Direct => "Direct",
        }
    }
}

impl fmt::Display for NavMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source and sink of marks for the overlay.
///
/// Implemented by the host editor. `get_all_marks` must reflect the current
/// document state every time it is called.
pub trait MarkProvider {
    /// Returns all marks in display order.
    fn get_all_marks(&self) -> Vec<MarkRecord>;

    /// Moves the host cursor to the mark.
    fn goto_mark(&mut self, mark: &MarkRecord);

    /// Removes the mark from the host.
    fn delete_mark(&mut self, mark: &MarkRecord);
}
