//! Renders the current buffer with a line number gutter and mark signs.

use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::state::EditorState;
use crate::overlay::MarkType;
use crate::theme::colors::ThemeColors;

/// Renders the visible part of the current buffer into `area`.
///
/// Lines carrying a mark show the mark character in a one-column sign area
/// left of the line numbers. The cursor line is highlighted.
pub fn render_buffer_view(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let buffer = state.current_buffer();
    let current = state.current_buffer_index();
    let cursor = state.cursor_line();
    let width = buffer.line_count().to_string().len();

    let mut signs: HashMap<usize, (char, MarkType)> = HashMap::new();
    for (name, kind, pos) in state.marks().list(current) {
        if pos.buffer == current {
            // Buffer marks sort first, so they keep the sign on shared lines
            signs.entry(pos.line).or_insert((name, kind));
        }
    }

    let lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(state.scroll_offset())
        .take(area.height as usize)
        .map(|(idx, text)| {
            let line_no = idx + 1;
            let mut spans = Vec::new();

            match signs.get(&line_no) {
                Some((name, kind)) => {
                    let color = match kind {
                        MarkType::Buffer => colors.mark_buffer,
                        MarkType::Global => colors.mark_global,
                    };
                    spans.push(Span::styled(name.to_string(), Style::default().fg(color)));
                }
                None => spans.push(Span::raw(" ")),
            }

            if state.show_line_numbers() {
                spans.push(Span::styled(
                    format!("{:>width$} ", line_no, width = width),
                    Style::default().fg(colors.gutter).add_modifier(Modifier::DIM),
                ));
            }

            let text_style = if line_no == cursor {
                Style::default().fg(colors.foreground).bg(colors.cursor)
            } else {
                Style::default().fg(colors.foreground)
            };
            spans.push(Span::styled(text.as_str(), text_style));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}
