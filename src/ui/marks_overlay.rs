//! Draws the floating marks window held by a [`TerminalSurface`].

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::surface::FloatingWindow;
use crate::config::{BorderKind, TitlePosition};
use crate::overlay::annotate::{StyleCategory, StyleSpan};
use crate::theme::colors::ThemeColors;

/// Renders the overlay window centered in the frame, on top of everything else.
pub fn render_marks_overlay(f: &mut Frame, window: &FloatingWindow, colors: &ThemeColors) {
    let bordered = window.spec.border != BorderKind::None;
    let frame = f.area();
    let area = window_rect(window.spec.width, window.spec.height, bordered, frame);
    if area.width == 0 || area.height == 0 {
        return;
    }

    if window.spec.shadow {
        let shadow = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width,
            height: area.height,
        }
        .intersection(frame);
        f.render_widget(Clear, shadow);
        f.render_widget(Block::default().style(Style::default().bg(colors.shadow)), shadow);
    }

    f.render_widget(Clear, area);

    let mut block = Block::default().style(Style::default().bg(colors.overlay_bg));
    if bordered {
        block = block
            .borders(Borders::ALL)
            .border_type(border_type(window.spec.border))
            .border_style(Style::default().fg(colors.overlay_border));
    }
    if let Some(title) = &window.spec.title {
        block = block
            .title(title.as_str())
            .title_alignment(alignment(window.spec.title_position));
    }

    let inner = block.inner(area);
    let rows = inner.height as usize;
    let offset = window.scroll_offset(rows);

    let lines: Vec<Line> = window
        .lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(idx, text)| {
            let selected = idx + 1 == window.cursor_line;
            styled_line(idx, text, &window.spans, selected, colors)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Centers a `width` x `height` content area (plus border) inside `frame`.
pub fn window_rect(width: u16, height: u16, bordered: bool, frame: Rect) -> Rect {
    let pad = if bordered { 2 } else { 0 };
    let w = width.saturating_add(pad).min(frame.width);
    let h = height.saturating_add(pad).min(frame.height);
    Rect {
        x: frame.x + (frame.width - w) / 2,
        y: frame.y + (frame.height - h) / 2,
        width: w,
        height: h,
    }
}

fn border_type(border: BorderKind) -> BorderType {
    match border {
        BorderKind::Plain | BorderKind::None => BorderType::Plain,
        BorderKind::Rounded => BorderType::Rounded,
        BorderKind::Double => BorderType::Double,
        BorderKind::Thick => BorderType::Thick,
    }
}

fn alignment(position: TitlePosition) -> Alignment {
    match position {
        TitlePosition::Left => Alignment::Left,
        TitlePosition::Center => Alignment::Center,
        TitlePosition::Right => Alignment::Right,
    }
}

/// Maps a highlight category onto the theme.
pub fn category_style(category: StyleCategory, colors: &ThemeColors) -> Style {
    let style = Style::default();
    match category {
        StyleCategory::ModeBorderPopup => style.fg(colors.mode_popup).add_modifier(Modifier::BOLD),
        StyleCategory::ModeBorderDirect => {
            style.fg(colors.mode_direct).add_modifier(Modifier::BOLD)
        }
        StyleCategory::Stats => style.fg(colors.stats),
        StyleCategory::Separator => style.fg(colors.separator),
        StyleCategory::ColumnHeader => style
            .fg(colors.column_header)
            .add_modifier(Modifier::BOLD),
        StyleCategory::StatusBarPopup => style.fg(colors.status_popup),
        StyleCategory::StatusBarDirect => style.fg(colors.status_direct),
        StyleCategory::MarkBuffer => style.fg(colors.mark_buffer).add_modifier(Modifier::BOLD),
        StyleCategory::MarkGlobal => style.fg(colors.mark_global).add_modifier(Modifier::BOLD),
        StyleCategory::LineNumber => style.fg(colors.line_number),
        StyleCategory::Filename => style.fg(colors.filename),
        StyleCategory::NoMarks => style.fg(colors.no_marks).add_modifier(Modifier::ITALIC),
    }
}

/// Splits `text` into runs of equal style. Later spans win where spans overlap.
fn styled_line<'a>(
    idx: usize,
    text: &'a str,
    spans: &[StyleSpan],
    selected: bool,
    colors: &ThemeColors,
) -> Line<'a> {
    let base = if selected {
        Style::default()
            .fg(colors.foreground)
            .bg(colors.selection_bg)
    } else {
        Style::default().fg(colors.foreground)
    };

    let chars: Vec<char> = text.chars().collect();
    let mut styles = vec![base; chars.len()];
    for span in spans.iter().filter(|s| s.line == idx) {
        let end = span.col_end.min(chars.len());
        for style in styles.iter_mut().take(end).skip(span.col_start) {
            *style = base.patch(category_style(span.category, colors));
        }
    }

    let mut out = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let style = styles[start];
        let mut end = start + 1;
        while end < chars.len() && styles[end] == style {
            end += 1;
        }
        out.push(Span::styled(chars[start..end].iter().collect::<String>(), style));
        start = end;
    }

    let line = Line::from(out);
    if selected {
        line.style(base)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::surface::WindowSpec;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn window(lines: &[&str], spans: Vec<StyleSpan>) -> FloatingWindow {
        FloatingWindow {
            spec: WindowSpec {
                width: 20,
                height: lines.len() as u16,
                border: BorderKind::Rounded,
                title: Some(" Marks ".to_string()),
                title_position: TitlePosition::Center,
                shadow: true,
            },
            lines: lines.iter().map(|s| s.to_string()).collect(),
            spans,
            cursor_line: 1,
        }
    }

    #[test]
    fn test_window_rect_centered_and_clamped() {
        let frame = Rect::new(0, 0, 80, 24);
        assert_eq!(window_rect(40, 10, true, frame), Rect::new(19, 6, 42, 12));
        assert_eq!(window_rect(100, 50, false, frame), frame);
    }

    #[test]
    fn test_styled_line_splits_runs() {
        let colors = get_builtin_theme("default-dark").unwrap().colors;
        let span = StyleSpan {
            line: 0,
            col_start: 2,
            col_end: 3,
            category: StyleCategory::MarkBuffer,
        };
        let line = styled_line(0, "  a rest", &[span], false, &colors);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "a");
        assert_eq!(line.spans[1].style.fg, Some(colors.mark_buffer));
    }

    #[test]
    fn test_render_draws_lines() {
        let colors = get_builtin_theme("default-dark").unwrap().colors;
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let window = window(&["hello", "world"], Vec::new());

        terminal
            .draw(|f| render_marks_overlay(f, &window, &colors))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("hello"));
        assert!(text.contains("Marks"));
    }
}
