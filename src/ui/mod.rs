/// UI module for the markquill terminal interface.
///
/// This module provides the main UI structure for rendering the terminal interface:
/// the buffer view, the status line, the message area and, on top of them, the
/// floating marks overlay.
pub mod buffer_view;
pub mod marks_overlay;
pub mod message_area;
pub mod status_line;
pub mod surface;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::state::EditorState;
use crate::overlay::OverlayController;
use crate::theme::Theme;
use surface::TerminalSurface;

/// Main UI structure that manages the terminal interface rendering.
///
/// # Example
///
/// ```
/// use markquill::ui::UI;
/// use markquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
        overlay: &OverlayController<TerminalSurface>,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Buffer view
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            // Adjust scroll to ensure cursor is visible
            state.adjust_scroll_to_cursor(chunks[0].height as usize);

            buffer_view::render_buffer_view(f, chunks[0], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[1], state, &self.theme.colors);
            message_area::render_message_area(
                f,
                chunks[2],
                state,
                overlay.surface().notification(),
                &self.theme.colors,
            );

            // Marks overlay (rendered on top if open)
            if let Some(window) = overlay.surface().window() {
                marks_overlay::render_marks_overlay(f, window, &self.theme.colors);
            }
        })?;

        Ok(())
    }
}
