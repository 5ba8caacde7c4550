//! Editor state and mode management.
//!
//! This module provides the viewer side of markquill: the buffers being shown,
//! cursor movement, marks and the jump list. The editor state is what the marks
//! overlay reads marks from and sends jumps and deletions to.
//!
//! # Modules
//!
//! - `buffer`: Read-only text buffers
//! - `marks`: Buffer and global mark storage
//! - `jumplist`: Cursor position history
//! - `mode`: Input mode enumeration
//! - `state`: Editor state management
//!
//! # Example
//!
//! ```
//! use markquill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod buffer;
pub mod jumplist;
pub mod marks;
pub mod mode;
pub mod state;
