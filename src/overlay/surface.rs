//! Windowing contract between the overlay and its host.

use super::annotate::StyleSpan;
use super::error::SurfaceError;
use crate::config::{BorderKind, TitlePosition};

/// Geometry and decoration of the floating window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    /// Width in columns, excluding the border.
    pub width: u16,
    /// Height in rows, excluding the border.
    pub height: u16,
    /// Border drawn around the window.
    pub border: BorderKind,
    /// Title drawn on the top border.
    pub title: Option<String>,
    /// Placement of the title.
    pub title_position: TitlePosition,
    /// Draw a drop shadow behind the window.
    pub shadow: bool,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warning,
    Error,
}

/// Host windowing primitives used by the overlay.
///
/// A surface holds at most one floating window. Cursor lines are 1-based.
pub trait Surface {
    /// Creates the floating window (and its shadow, if requested).
    fn open_window(&mut self, spec: &WindowSpec) -> Result<(), SurfaceError>;

    /// Applies new geometry to the open window.
    fn reconfigure_window(&mut self, spec: &WindowSpec) -> Result<(), SurfaceError>;

    /// Destroys the window and everything attached to it.
    ///
    /// Returning `Ok` acknowledges that all window resources are released.
    fn close_window(&mut self) -> Result<(), SurfaceError>;

    /// Returns true while a window is open.
    fn is_window_open(&self) -> bool;

    /// Replaces all lines of the window.
    fn set_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError>;

    /// Clears the overlay's style spans and applies `spans`.
    fn set_spans(&mut self, spans: &[StyleSpan]) -> Result<(), SurfaceError>;

    /// Returns the cursor line, or `None` without a window.
    fn cursor_line(&self) -> Option<usize>;

    /// Moves the cursor to `line`.
    fn set_cursor_line(&mut self, line: usize) -> Result<(), SurfaceError>;

    /// Shows a transient, self-dismissing message.
    fn notify(&mut self, text: &str, level: NotifyLevel);
}
