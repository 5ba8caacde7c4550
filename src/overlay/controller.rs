//! Overlay controller.
//!
//! The controller owns the overlay lifecycle:
//!
//! ```text
//!            open()                       close() / navigate / jump
//!  Closed ───────────▶ Open(mode) ───────────────────────────────▶ Closed
//!                       │    ▲
//!       toggle_mode()   │    │  process_pending(): Reopen once the
//!       closes now  ────┘    │  surface acknowledged the close
//!                            │
//!       delete() ────────────┘  process_pending(): RefreshAfterDelete
//! ```
//!
//! Work that has to wait for the host (the rebuild after a delete, the reopen
//! after a mode toggle) is queued and run by [`OverlayController::process_pending`],
//! which the host calls after every input event.

use std::collections::VecDeque;

use termion::event::Key;
use tracing::{debug, info, trace, warn};

use super::bindings::Action;
use super::error::{OverlayError, SurfaceError};
use super::layout::RenderedLayout;
use super::session::OverlaySession;
use super::surface::{NotifyLevel, Surface, WindowSpec};
use super::{MarkProvider, MarkRecord, NavMode};
use crate::config::OverlayConfig;

/// Result of offering a key to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key triggered an overlay action.
    Handled,
    /// The key is not bound, or the overlay is closed.
    Ignored,
}

/// Transition waiting for the host to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Re-read marks after a deletion took effect.
    RefreshAfterDelete,
    /// Open again in the current mode after a toggle closed the window.
    Reopen,
}

/// Drives the marks overlay on top of a [`Surface`].
pub struct OverlayController<S: Surface> {
    surface: S,
    config: OverlayConfig,
    mode: NavMode,
    session: Option<OverlaySession>,
    pending: VecDeque<Deferred>,
}

impl<S: Surface> OverlayController<S> {
    /// Creates a closed controller starting in the configured mode.
    pub fn new(surface: S, config: OverlayConfig) -> Self {
        let mode = config.mode;
        Self {
            surface,
            config,
            mode,
            session: None,
            pending: VecDeque::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Navigation mode used by the next open.
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Current session, while open.
    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    /// Returns true while deferred work is queued.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Opens the overlay, or rebuilds it in place when already open.
    ///
    /// Any queued refresh or reopen is superseded.
    pub fn open(&mut self, provider: &dyn MarkProvider) -> Result<(), OverlayError> {
        self.pending.clear();
        if self.is_open() {
            let marks = provider.get_all_marks();
            return self.rebuild(marks);
        }
        self.open_session(provider)
    }

    /// Closes the overlay and releases its window.
    ///
    /// Closing a closed overlay does nothing. When the surface refuses to
    /// release the window the session is kept, so it still matches the screen.
    pub fn close(&mut self) -> Result<(), OverlayError> {
        let Some(mode) = self.session.as_ref().map(OverlaySession::mode) else {
            return Ok(());
        };

        match self.surface.close_window() {
            Ok(()) | Err(SurfaceError::NoWindow) => {
                self.session = None;
                self.pending.retain(|d| *d == Deferred::Reopen);
                info!(target: "overlay", %mode, "overlay_closed");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Forgets the session after the host closed the window on its own.
    pub fn on_window_closed(&mut self) {
        if self.session.take().is_some() {
            info!(target: "overlay", "overlay_closed_by_host");
        }
        self.pending.clear();
        if self.surface.is_window_open() {
            self.release_window();
        }
    }

    /// Offers a key to the overlay.
    pub fn handle_key(
        &mut self,
        key: Key,
        provider: &mut dyn MarkProvider,
    ) -> Result<KeyOutcome, OverlayError> {
        let action = self
            .session
            .as_ref()
            .and_then(|session| session.bindings().action_for(&key));
        match action {
            Some(action) => {
                self.dispatch(action, provider)?;
                Ok(KeyOutcome::Handled)
            }
            None => Ok(KeyOutcome::Ignored),
        }
    }

    /// Runs an overlay action against the current session.
    pub fn dispatch(
        &mut self,
        action: Action,
        provider: &mut dyn MarkProvider,
    ) -> Result<(), OverlayError> {
        if !self.is_open() {
            debug!(target: "overlay", ?action, "action_on_closed_overlay");
            return Ok(());
        }
        debug!(target: "overlay", ?action, "dispatch");

        match action {
            Action::Navigate => self.navigate(provider),
            Action::Delete => self.delete(provider),
            Action::ToggleMode => self.toggle_mode(),
            Action::DirectJump(c) => self.direct_jump(c, provider),
            Action::Close => self.close(),
            Action::CursorDown | Action::CursorUp | Action::CursorTop | Action::CursorBottom => {
                self.move_cursor(action)
            }
        }
    }

    /// Runs deferred transitions that were waiting for the host.
    pub fn process_pending(&mut self, provider: &dyn MarkProvider) -> Result<(), OverlayError> {
        while let Some(next) = self.pending.pop_front() {
            match next {
                Deferred::RefreshAfterDelete => {
                    if !self.is_open() {
                        continue;
                    }
                    let marks = provider.get_all_marks();
                    if marks.is_empty() {
                        info!(target: "overlay", "last_mark_deleted");
                        self.close()?;
                    } else {
                        self.rebuild(marks)?;
                    }
                }
                Deferred::Reopen => {
                    if self.is_open() {
                        continue;
                    }
                    if self.surface.is_window_open() {
                        // Close not acknowledged yet; try again next time.
                        self.pending.push_front(Deferred::Reopen);
                        break;
                    }
                    self.open_session(provider)?;
                }
            }
        }
        Ok(())
    }

    fn open_session(&mut self, provider: &dyn MarkProvider) -> Result<(), OverlayError> {
        let session = OverlaySession::build(provider.get_all_marks(), &self.config, self.mode);
        let spec = self.window_spec(session.layout());
        self.surface.open_window(&spec)?;

        if let Err(err) = self.present(&session, None) {
            warn!(target: "overlay", %err, "open_failed");
            self.release_window();
            return Err(err);
        }

        info!(
            target: "overlay",
            mode = %session.mode(),
            marks = session.marks().len(),
            "overlay_opened"
        );
        self.session = Some(session);
        Ok(())
    }

    fn rebuild(&mut self, marks: Vec<MarkRecord>) -> Result<(), OverlayError> {
        let previous = self.surface.cursor_line();
        let session = OverlaySession::build(marks, &self.config, self.mode);
        let spec = self.window_spec(session.layout());

        let updated = match self.surface.reconfigure_window(&spec) {
            Ok(()) => self.present(&session, previous),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = updated {
            // The window may hold part of the new snapshot; never leave it
            // next to the old session.
            warn!(target: "overlay", %err, "rebuild_failed");
            self.session = None;
            self.pending.clear();
            self.release_window();
            return Err(err);
        }

        debug!(
            target: "overlay",
            marks = session.marks().len(),
            "overlay_rebuilt"
        );
        self.session = Some(session);
        Ok(())
    }

    /// Pushes a session's lines, spans and cursor to the open window.
    ///
    /// The cursor goes to `cursor` confined to the mark rows, or to the first
    /// mark when there is no previous position.
    fn present(
        &mut self,
        session: &OverlaySession,
        cursor: Option<usize>,
    ) -> Result<(), OverlayError> {
        self.surface.set_lines(session.lines())?;
        self.surface.set_spans(session.spans())?;

        let index = session.index();
        let line = match cursor {
            Some(line) => index.clamp(line),
            None => index.first_line().unwrap_or(1),
        };
        self.surface
            .set_cursor_line(line.clamp(1, session.lines().len().max(1)))?;
        Ok(())
    }

    fn release_window(&mut self) {
        match self.surface.close_window() {
            Ok(()) | Err(SurfaceError::NoWindow) => {}
            Err(err) => warn!(target: "overlay", %err, "close_window_failed"),
        }
    }

    fn window_spec(&self, layout: &RenderedLayout) -> WindowSpec {
        let title = self.config.title.trim();
        WindowSpec {
            width: layout.width,
            height: layout.height,
            border: self.config.border,
            title: (!title.is_empty()).then(|| format!(" {} ", title)),
            title_position: self.config.title_position,
            shadow: self.config.shadow,
        }
    }

    /// Mark shown on the cursor line, resolved through the line index.
    fn mark_under_cursor(&self) -> Option<MarkRecord> {
        let session = self.session.as_ref()?;
        let line = self.surface.cursor_line()?;
        session.mark_at_line(line).cloned()
    }

    fn navigate(&mut self, provider: &mut dyn MarkProvider) -> Result<(), OverlayError> {
        let Some(mark) = self.mark_under_cursor() else {
            trace!(target: "overlay", "navigate_no_mark");
            return Ok(());
        };
        self.close()?;
        provider.goto_mark(&mark);
        Ok(())
    }

    fn delete(&mut self, provider: &mut dyn MarkProvider) -> Result<(), OverlayError> {
        let Some(mark) = self.mark_under_cursor() else {
            trace!(target: "overlay", "delete_no_mark");
            return Ok(());
        };
        provider.delete_mark(&mark);
        info!(target: "overlay", mark = %mark.mark, "mark_deleted");
        if !self.pending.contains(&Deferred::RefreshAfterDelete) {
            self.pending.push_back(Deferred::RefreshAfterDelete);
        }
        Ok(())
    }

    fn toggle_mode(&mut self) -> Result<(), OverlayError> {
        self.close()?;
        self.mode = self.mode.toggled();
        self.pending.push_back(Deferred::Reopen);
        debug!(target: "overlay", mode = %self.mode, "mode_toggled");
        Ok(())
    }

    fn direct_jump(&mut self, c: char, provider: &mut dyn MarkProvider) -> Result<(), OverlayError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        if session.mode() != NavMode::Direct {
            return Ok(());
        }

        match session.mark_by_char(c).cloned() {
            Some(mark) => {
                self.close()?;
                provider.goto_mark(&mark);
            }
            None => {
                trace!(target: "overlay", mark = %c, "direct_jump_miss");
                self.surface
                    .notify(&format!("No mark '{}'", c), NotifyLevel::Warning);
            }
        }
        Ok(())
    }

    fn move_cursor(&mut self, action: Action) -> Result<(), OverlayError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let last = session.lines().len().max(1);
        let current = self.surface.cursor_line().unwrap_or(1);

        let moved = match action {
            Action::CursorDown => (current + 1).min(last),
            Action::CursorUp => current.saturating_sub(1).max(1),
            Action::CursorTop => 1,
            Action::CursorBottom => last,
            _ => current,
        };
        let confined = session.index().clamp(moved);
        self.surface.set_cursor_line(confined)?;
        Ok(())
    }
}
