//! In-memory surface the terminal UI draws the marks overlay from.
//!
//! The overlay controller writes window contents here; [`super::marks_overlay`]
//! reads them back on every frame. Nothing in this module touches the terminal,
//! which also makes it usable as the surface in tests.

use std::time::{Duration, Instant};

use crate::overlay::annotate::StyleSpan;
use crate::overlay::surface::{NotifyLevel, Surface, WindowSpec};
use crate::overlay::SurfaceError;

/// How long a notification stays visible.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(3);

/// The floating window and everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingWindow {
    pub spec: WindowSpec,
    pub lines: Vec<String>,
    pub spans: Vec<StyleSpan>,
    /// 1-based cursor line.
    pub cursor_line: usize,
}

impl FloatingWindow {
    /// First line (0-based) to draw so the cursor stays inside `rows` rows.
    pub fn scroll_offset(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        let cursor_idx = self.cursor_line.saturating_sub(1);
        let max_offset = self.lines.len().saturating_sub(rows);
        cursor_idx.saturating_sub(rows - 1).min(max_offset)
    }
}

/// A transient message shown below the buffer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub level: NotifyLevel,
    pub shown_at: Instant,
}

/// Surface backed by plain data, drawn by the terminal UI.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    window: Option<FloatingWindow>,
    notification: Option<Notification>,
    windows_created: usize,
    windows_destroyed: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open window, if any.
    pub fn window(&self) -> Option<&FloatingWindow> {
        self.window.as_ref()
    }

    /// The current notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Drops the notification once it is older than [`NOTIFY_TIMEOUT`].
    pub fn expire_notification(&mut self, now: Instant) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= NOTIFY_TIMEOUT);
        if expired {
            self.notification = None;
        }
    }

    /// Number of windows created over the surface's lifetime.
    pub fn windows_created(&self) -> usize {
        self.windows_created
    }

    /// Number of windows destroyed over the surface's lifetime.
    pub fn windows_destroyed(&self) -> usize {
        self.windows_destroyed
    }

    fn window_mut(&mut self) -> Result<&mut FloatingWindow, SurfaceError> {
        self.window.as_mut().ok_or(SurfaceError::NoWindow)
    }
}

impl Surface for TerminalSurface {
    fn open_window(&mut self, spec: &WindowSpec) -> Result<(), SurfaceError> {
        if self.window.is_some() {
            return Err(SurfaceError::WindowAlreadyOpen);
        }
        self.window = Some(FloatingWindow {
            spec: spec.clone(),
            lines: Vec::new(),
            spans: Vec::new(),
            cursor_line: 1,
        });
        self.windows_created += 1;
        Ok(())
    }

    fn reconfigure_window(&mut self, spec: &WindowSpec) -> Result<(), SurfaceError> {
        self.window_mut()?.spec = spec.clone();
        Ok(())
    }

    fn close_window(&mut self) -> Result<(), SurfaceError> {
        self.window.take().ok_or(SurfaceError::NoWindow)?;
        self.windows_destroyed += 1;
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.window.is_some()
    }

    fn set_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError> {
        let window = self.window_mut()?;
        window.lines = lines.to_vec();
        window.cursor_line = window.cursor_line.clamp(1, window.lines.len().max(1));
        Ok(())
    }

    fn set_spans(&mut self, spans: &[StyleSpan]) -> Result<(), SurfaceError> {
        let window = self.window_mut()?;
        window.spans.clear();
        window.spans.extend_from_slice(spans);
        Ok(())
    }

    fn cursor_line(&self) -> Option<usize> {
        self.window.as_ref().map(|w| w.cursor_line)
    }

    fn set_cursor_line(&mut self, line: usize) -> Result<(), SurfaceError> {
        let window = self.window_mut()?;
        window.cursor_line = line.clamp(1, window.lines.len().max(1));
        Ok(())
    }

    fn notify(&mut self, text: &str, level: NotifyLevel) {
        self.notification = Some(Notification {
            text: text.to_string(),
            level,
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BorderKind, TitlePosition};

    fn spec() -> WindowSpec {
        WindowSpec {
            width: 40,
            height: 10,
            border: BorderKind::Rounded,
            title: None,
            title_position: TitlePosition::Center,
            shadow: false,
        }
    }

    #[test]
    fn test_single_window() {
        let mut surface = TerminalSurface::new();
        surface.open_window(&spec()).unwrap();
        assert_eq!(
            surface.open_window(&spec()),
            Err(SurfaceError::WindowAlreadyOpen)
        );
        surface.close_window().unwrap();
        assert_eq!(surface.close_window(), Err(SurfaceError::NoWindow));
        assert_eq!(surface.windows_created(), 1);
        assert_eq!(surface.windows_destroyed(), 1);
    }

    #[test]
    fn test_cursor_clamped_to_lines() {
        let mut surface = TerminalSurface::new();
        surface.open_window(&spec()).unwrap();
        surface
            .set_lines(&["a".to_string(), "b".to_string()])
            .unwrap();
        surface.set_cursor_line(5).unwrap();
        assert_eq!(surface.cursor_line(), Some(2));
        surface.set_cursor_line(0).unwrap();
        assert_eq!(surface.cursor_line(), Some(1));
    }

    #[test]
    fn test_scroll_offset_follows_cursor() {
        let window = FloatingWindow {
            spec: spec(),
            lines: (0..20).map(|i| i.to_string()).collect(),
            spans: Vec::new(),
            cursor_line: 15,
        };
        assert_eq!(window.scroll_offset(10), 5);
        assert_eq!(window.scroll_offset(20), 0);
    }

    #[test]
    fn test_notification_expires() {
        let mut surface = TerminalSurface::new();
        surface.notify("hello", NotifyLevel::Warning);
        let shown = surface.notification().unwrap().shown_at;
        surface.expire_notification(shown);
        assert!(surface.notification().is_some());
        surface.expire_notification(shown + NOTIFY_TIMEOUT);
        assert!(surface.notification().is_none());
    }
}
