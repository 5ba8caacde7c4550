//! Message area rendering for notifications and pending-key prompts.

use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use crate::overlay::surface::NotifyLevel;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::surface::Notification;

/// Renders the message area at the bottom of the screen.
///
/// Displays, in order of precedence:
/// - The pending mark prompt (`m` or `'` waiting for a name)
/// - An overlay notification
/// - The editor message
pub fn render_message_area(
    f: &mut Frame,
    area: Rect,
    state: &EditorState,
    notification: Option<&Notification>,
    colors: &ThemeColors,
) {
    let content = match state.mode() {
        EditorMode::SetMark => Line::from(Span::styled("m", Style::default().fg(colors.info))),
        EditorMode::JumpMark => Line::from(Span::styled("'", Style::default().fg(colors.info))),
        _ => {
            if let Some(n) = notification {
                let color = match n.level {
                    NotifyLevel::Error => colors.error,
                    NotifyLevel::Warning => colors.warning,
                    NotifyLevel::Info => colors.info,
                };
                Line::from(Span::styled(n.text.as_str(), Style::default().fg(color)))
            } else if let Some(message) = state.message() {
                let color = match message.level {
                    MessageLevel::Error => colors.error,
                    MessageLevel::Warning => colors.warning,
                    MessageLevel::Info => colors.info,
                };
                Line::from(Span::styled(message.text.as_str(), Style::default().fg(color)))
            } else {
                Line::from("")
            }
        }
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
