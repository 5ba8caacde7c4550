//! Editor mode management.
//!
//! This module provides the `EditorMode` enum that represents the current input
//! mode of the viewer. Following vim conventions, some keys are prefixes that
//! wait for a mark name before acting.
//!
//! # Modes
//!
//! - **Normal**: The default mode for navigation and commands
//! - **SetMark**: After `m`, waiting for the name of the mark to set
//! - **JumpMark**: After `'`, waiting for the name of the mark to jump to
//! - **Marks**: The marks overlay is open and receives all keys
//!
//! # Example
//!
//! ```
//! use markquill::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", EditorMode::Marks), "MARKS");
//! ```

use std::fmt;

/// Represents the current input mode of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Normal mode for navigation.
    #[default]
    Normal,
    /// Waiting for a mark name to set.
    SetMark,
    /// Waiting for a mark name to jump to.
    JumpMark,
    /// The marks overlay is open.
    Marks,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for display in the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::SetMark => write!(f, "MARK"),
            EditorMode::JumpMark => write!(f, "JUMP"),
            EditorMode::Marks => write!(f, "MARKS"),
        }
    }
}
