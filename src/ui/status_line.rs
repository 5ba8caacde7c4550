//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, MARK, JUMP, MARKS)
//! - Buffer name and its position among the open buffers
//! - Number of marks visible from this buffer
//! - Cursor position (line/total)
//!
//! Example status line: `NORMAL | notes.txt [1/3] 4 marks              5/20`

use crate::editor::state::EditorState;
use crate::overlay::MarkProvider;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Builds the left and right halves of the status line.
pub fn status_text(state: &EditorState) -> (String, String) {
    let buffer = state.current_buffer();
    let count = state.buffers().len();
    let marks = state.get_all_marks().len();

    let mut left = format!("{} | {}", state.mode(), buffer.name());
    if count > 1 {
        left.push_str(&format!(" [{}/{}]", state.current_buffer_index() + 1, count));
    }
    if marks > 0 {
        let noun = if marks == 1 { "mark" } else { "marks" };
        left.push_str(&format!(" {} {}", marks, noun));
    }

    let right = format!("{}/{}", state.cursor_line(), buffer.line_count());
    (left, right)
}

/// Renders the status line.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let (left, right) = status_text(state);

    let total_width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let padding = if left_len + right_len + 1 < total_width {
        total_width - left_len - right_len
    } else {
        1
    };

    let style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);

    let line = Line::from(vec![
        Span::styled(left, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(padding), style),
        Span::styled(right, style),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);
}
