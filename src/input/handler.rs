//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use crate::overlay::surface::Surface;
use crate::overlay::{KeyOutcome, OverlayController, OverlayError};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::TermRead;
use tracing::{debug, trace, warn};

/// Outcome of waiting for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polled {
    /// A terminal event arrived.
    Event(Event),
    /// Nothing arrived before the timeout.
    Timeout,
    /// The input source is exhausted.
    Closed,
}

/// Handles terminal input events and updates editor state.
///
/// A reader thread parses termion events off the input source and hands them
/// over a channel, so polling can give up after a timeout and the host keeps
/// redrawing (and expiring notifications) while the user is idle. While the
/// marks overlay is open every key goes to the overlay controller instead.
pub struct InputHandler {
    events: Receiver<io::Result<Event>>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self::from_reader(io::stdin())
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self::from_reader(tty_file))
    }

    /// Creates an InputHandler reading events from any byte source.
    ///
    /// # Example
    ///
    /// ```
    /// use markquill::input::handler::{InputHandler, Polled};
    /// use std::time::Duration;
    ///
    /// let mut handler = InputHandler::from_reader(&b"j"[..]);
    /// assert!(matches!(handler.poll_event(Duration::from_secs(1)).unwrap(), Polled::Event(_)));
    /// ```
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for event in reader.events() {
                if tx.send(event).is_err() {
                    break;
                }
            }
            debug!("input source closed");
        });
        Self { events: rx }
    }

    /// Waits up to `timeout` for a terminal event.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input source failed
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Polled> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Ok(Polled::Event(event.context("Failed to read input event")?)),
            Err(RecvTimeoutError::Timeout) => Ok(Polled::Timeout),
            Err(RecvTimeoutError::Disconnected) => Ok(Polled::Closed),
        }
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Runs the overlay's deferred work afterwards and keeps the editor mode in
    /// step with the overlay. Returns true if the application should quit.
    ///
    /// Overlay failures are logged and shown as an error message; they never
    /// end the application.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use markquill::config::OverlayConfig;
    /// use markquill::editor::state::EditorState;
    /// use markquill::input::InputHandler;
    /// use markquill::overlay::OverlayController;
    /// use markquill::ui::surface::TerminalSurface;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new(Vec::new());
    /// let mut overlay = OverlayController::new(TerminalSurface::new(), OverlayConfig::default());
    /// let should_quit = handler
    ///     .handle_event(Event::Key(Key::Char('q')), &mut state, &mut overlay)
    ///     .unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event<S: Surface>(
        &mut self,
        event: Event,
        state: &mut EditorState,
        overlay: &mut OverlayController<S>,
    ) -> Result<bool> {
        let mut quit = false;

        if overlay.is_open() {
            if let Event::Key(key) = event {
                let outcome = overlay.handle_key(key, &mut *state);
                match outcome {
                    Ok(KeyOutcome::Handled) => {}
                    Ok(KeyOutcome::Ignored) => trace!(?key, "key_ignored_by_overlay"),
                    Err(err) => report(state, err),
                }
            }
        } else {
            quit = self.handle_editor_event(event, state, overlay);
        }

        if let Err(err) = overlay.process_pending(&*state) {
            report(state, err);
        }
        sync_mode(state, overlay);

        Ok(quit)
    }

    fn handle_editor_event<S: Surface>(
        &mut self,
        event: Event,
        state: &mut EditorState,
        overlay: &mut OverlayController<S>,
    ) -> bool {
        let input = map_key_event(event.clone(), state.mode());
        if matches!(event, Event::Key(_)) && *state.mode() == EditorMode::Normal {
            state.clear_message();
        }

        match input {
            InputEvent::Quit => return true,
            InputEvent::MoveDown => state.move_cursor_down(1),
            InputEvent::MoveUp => state.move_cursor_up(1),
            InputEvent::JumpToTop => state.jump_to_top(),
            InputEvent::JumpToBottom => state.jump_to_bottom(),
            InputEvent::HalfPageDown => state.half_page_down(),
            InputEvent::HalfPageUp => state.half_page_up(),
            InputEvent::NextBuffer => state.next_buffer(),
            InputEvent::PreviousBuffer => state.previous_buffer(),
            InputEvent::JumpBackward => state.jump_backward(),
            InputEvent::JumpForward => state.jump_forward(),
            InputEvent::MarkSet => state.set_mode(EditorMode::SetMark),
            InputEvent::MarkJump => state.set_mode(EditorMode::JumpMark),
            InputEvent::MarkName(c) => {
                match *state.mode() {
                    EditorMode::SetMark => {
                        state.set_mark_at_cursor(c);
                    }
                    EditorMode::JumpMark => {
                        state.jump_to_mark(c);
                    }
                    _ => {}
                }
                state.set_mode(EditorMode::Normal);
            }
            InputEvent::Cancel => state.set_mode(EditorMode::Normal),
            InputEvent::OpenMarks => {
                if let Err(err) = overlay.open(&*state) {
                    report(state, err);
                }
            }
            InputEvent::Unknown => {
                if let Event::Key(Key::Char(c)) = event {
                    trace!(key = %c, "unmapped_key");
                }
            }
        }
        false
    }
}

fn report(state: &mut EditorState, err: OverlayError) {
    warn!(target: "overlay", error = %err, "overlay_failed");
    state.set_message(format!("Marks overlay: {}", err), MessageLevel::Error);
}

fn sync_mode<S: Surface>(state: &mut EditorState, overlay: &OverlayController<S>) {
    if overlay.is_open() {
        state.set_mode(EditorMode::Marks);
    } else if *state.mode() == EditorMode::Marks {
        state.set_mode(EditorMode::Normal);
    }
}
