//! Style spans for the marks overlay.
//!
//! [`annotate`] is a pure pass over a [`RenderedLayout`]: it never touches the
//! text and never changes the line count, so the line-to-mark index stays
//! valid after annotation. Lines it cannot classify get no spans.

use std::sync::OnceLock;

use regex::Regex;

use super::layout::{LineRole, RenderedLayout};
use super::{MarkRecord, MarkType, NavMode};

/// Column of the mark character on a mark row.
const MARK_COL: usize = 2;

/// Highlight category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// Mode label while in popup mode.
    ModeBorderPopup,
    /// Mode label while in direct mode.
    ModeBorderDirect,
    /// Mark counts line.
    Stats,
    /// Horizontal rules.
    Separator,
    /// Column titles.
    ColumnHeader,
    /// Key hints while in popup mode.
    StatusBarPopup,
    /// Key hints while in direct mode.
    StatusBarDirect,
    /// Character of a buffer-scoped mark.
    MarkBuffer,
    /// Character of a global mark.
    MarkGlobal,
    /// Runs of ASCII digits on a mark row.
    LineNumber,
    /// Filename on a mark row.
    Filename,
    /// The "no marks" placeholder.
    NoMarks,
}

/// A highlighted range of one rendered line.
///
/// Columns count characters and are half-open: `col_start..col_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSpan {
    /// 0-based line index.
    pub line: usize,
    /// First highlighted column.
    pub col_start: usize,
    /// Column just past the highlight.
    pub col_end: usize,
    /// Highlight category.
    pub category: StyleCategory,
}

impl StyleSpan {
    fn new(line: usize, cols: std::ops::Range<usize>, category: StyleCategory) -> Self {
        Self {
            line,
            col_start: cols.start,
            col_end: cols.end,
            category,
        }
    }
}

fn digit_runs() -> Option<&'static Regex> {
    static DIGITS: OnceLock<Option<Regex>> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").ok()).as_ref()
}

/// Computes the style spans for a rendered layout.
///
/// Spans are returned line by line, left to right. Later spans on the same
/// columns take precedence when drawn.
pub fn annotate(layout: &RenderedLayout, marks: &[MarkRecord], mode: NavMode) -> Vec<StyleSpan> {
    let mut spans = Vec::new();

    for (line_idx, (text, role)) in layout.lines.iter().zip(&layout.roles).enumerate() {
        let len = text.chars().count();
        if len == 0 {
            continue;
        }
        let whole = |category| StyleSpan::new(line_idx, 0..len, category);

        match role {
            LineRole::ModeIndicator => spans.push(whole(match mode {
                NavMode::Popup => StyleCategory::ModeBorderPopup,
                NavMode::Direct => StyleCategory::ModeBorderDirect,
            })),
            LineRole::Stats => spans.push(whole(StyleCategory::Stats)),
            LineRole::Rule => spans.push(whole(StyleCategory::Separator)),
            LineRole::ColumnHeader => spans.push(whole(StyleCategory::ColumnHeader)),
            LineRole::StatusHint => spans.push(whole(match mode {
                NavMode::Popup => StyleCategory::StatusBarPopup,
                NavMode::Direct => StyleCategory::StatusBarDirect,
            })),
            LineRole::NoMarks => spans.push(whole(StyleCategory::NoMarks)),
            LineRole::Mark { position, filename } => {
                if layout.index.resolve(line_idx + 1).is_none() {
                    continue;
                }
                annotate_mark_row(
                    &mut spans,
                    line_idx,
                    text,
                    marks.get(*position),
                    filename.as_ref(),
                );
            }
            LineRole::Spacer => {}
        }
    }

    spans
}

fn annotate_mark_row(
    spans: &mut Vec<StyleSpan>,
    line_idx: usize,
    text: &str,
    mark: Option<&MarkRecord>,
    filename: Option<&std::ops::Range<usize>>,
) {
    let len = text.chars().count();

    if let Some(mark) = mark {
        if text.starts_with("  ") && text.chars().nth(MARK_COL) == Some(mark.mark) {
            let category = match mark.kind {
                MarkType::Global => StyleCategory::MarkGlobal,
                MarkType::Buffer => StyleCategory::MarkBuffer,
            };
            spans.push(StyleSpan::new(line_idx, MARK_COL..MARK_COL + 1, category));
        }
    }

    if let Some(digits) = digit_runs() {
        for found in digits.find_iter(text) {
            let start = text[..found.start()].chars().count();
            let end = start + found.as_str().chars().count();
            spans.push(StyleSpan::new(line_idx, start..end, StyleCategory::LineNumber));
        }
    }

    if let Some(range) = filename {
        let end = range.end.min(len);
        if range.start < end {
            spans.push(StyleSpan::new(
                line_idx,
                range.start..end,
                StyleCategory::Filename,
            ));
        }
    }
}
