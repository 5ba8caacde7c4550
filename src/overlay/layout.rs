//! Layout of the marks overlay.
//!
//! [`build`] turns a mark snapshot into the fixed-layout text shown in the
//! floating window:
//!
//! ```text
//!                      Popup
//!          Buffer 1 │ Global 1 │ Total 2
//! ────────────────────────────────────────
//!   M │ Line │ File
//! ────────────────────────────────────────
//!   a │   10 │ ● main.rs  fn main() {
//!   B │  120 │ ◆ lib.rs  pub mod overlay;
//! ────────────────────────────────────────
//!   <CR> jump  d delete  q close  <Tab> direct
//!
//! ```
//!
//! Alongside the text it returns one [`LineRole`] per line and the
//! [`LineIndex`] locating the mark rows, so later passes never have to
//! re-parse the formatted strings.

use std::ops::Range;

use super::{MarkRecord, MarkType, NavMode};
use crate::config::OverlayConfig;

/// Narrowest canvas the overlay will render.
///
/// Wide enough for the mark/line-number prefix plus a useful part of the
/// filename.
pub const MIN_WIDTH: u16 = 40;

/// Text of the single data line shown when there are no marks.
pub const NO_MARKS_LINE: &str = "    No marks found";

/// Glyph used for full-width rules.
const RULE_CHAR: char = '─';

/// Ellipsis appended to rows cut at the canvas edge.
const ELLIPSIS: char = '…';

/// Indent before the mark character on data rows.
const ROW_INDENT: &str = "  ";

/// Structural role of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Blank padding line.
    Spacer,
    /// Centered navigation mode label.
    ModeIndicator,
    /// Mark counts by type.
    Stats,
    /// Full-width horizontal rule.
    Rule,
    /// Column titles above the mark rows.
    ColumnHeader,
    /// A mark row.
    Mark {
        /// Position of the mark in the snapshot.
        position: usize,
        /// Character columns of the filename, when it is visible.
        filename: Option<Range<usize>>,
    },
    /// Placeholder row shown when there are no marks.
    NoMarks,
    /// Key hints for the current mode.
    StatusHint,
}

/// Location of the mark rows within the rendered lines.
///
/// Lines `marks_start..marks_start + marks_count` (0-based) map in order to
/// the mark snapshot. The "no marks" placeholder is never part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineIndex {
    /// 0-based index of the first mark row.
    pub marks_start: usize,
    /// Number of mark rows.
    pub marks_count: usize,
}

impl LineIndex {
    /// Resolves a 1-based cursor line to a position in the mark snapshot.
    ///
    /// Returns `None` when the line is outside the mark rows.
    ///
    /// # Example
    ///
    /// ```
    /// use markquill::overlay::layout::LineIndex;
    ///
    /// let index = LineIndex { marks_start: 6, marks_count: 2 };
    /// assert_eq!(index.resolve(6), None);
    /// assert_eq!(index.resolve(7), Some(0));
    /// assert_eq!(index.resolve(8), Some(1));
    /// assert_eq!(index.resolve(9), None);
    /// ```
    pub fn resolve(&self, cursor_line: usize) -> Option<usize> {
        let k = cursor_line.checked_sub(self.marks_start)?;
        if (1..=self.marks_count).contains(&k) {
            Some(k - 1)
        } else {
            None
        }
    }

    /// 1-based cursor line of the first mark row.
    pub fn first_line(&self) -> Option<usize> {
        (self.marks_count > 0).then_some(self.marks_start + 1)
    }

    /// 1-based cursor line of the last mark row.
    pub fn last_line(&self) -> Option<usize> {
        (self.marks_count > 0).then_some(self.marks_start + self.marks_count)
    }

    /// Clamps a 1-based cursor line into the mark rows.
    ///
    /// Lines are returned unchanged when there are no mark rows.
    pub fn clamp(&self, cursor_line: usize) -> usize {
        match (self.first_line(), self.last_line()) {
            (Some(first), Some(last)) => cursor_line.clamp(first, last),
            _ => cursor_line,
        }
    }
}

/// Output of one layout pass.
///
/// `lines`, `roles` and `index` are always produced together and replaced
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLayout {
    /// Display lines, 0-indexed.
    pub lines: Vec<String>,
    /// Role of each line, parallel to `lines`.
    pub roles: Vec<LineRole>,
    /// Location of the mark rows.
    pub index: LineIndex,
    /// Canvas width in columns.
    pub width: u16,
    /// Window height in rows.
    pub height: u16,
}

impl RenderedLayout {
    /// Returns the line at `idx` (0-based).
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Returns the mark rows as a slice.
    pub fn mark_rows(&self) -> &[String] {
        let start = self.index.marks_start.min(self.lines.len());
        let end = (start + self.index.marks_count).min(self.lines.len());
        &self.lines[start..end]
    }
}

/// Builds the overlay layout for a mark snapshot.
pub fn build(marks: &[MarkRecord], config: &OverlayConfig, mode: NavMode) -> RenderedLayout {
    let width = config.width.max(MIN_WIDTH);
    let cols = usize::from(width);
    let sep = format!(" {} ", config.separator);

    let mut out = Lines::default();

    // Header block
    let buffer_count = marks.iter().filter(|m| m.kind == MarkType::Buffer).count();
    let global_count = marks.len() - buffer_count;
    out.push(String::new(), LineRole::Spacer);
    out.push(center(mode.label(), cols), LineRole::ModeIndicator);
    let stats = format!(
        "Buffer {}{}Global {}{}Total {}",
        buffer_count,
        sep,
        global_count,
        sep,
        marks.len()
    );
    out.push(center(&stats, cols), LineRole::Stats);
    out.push(rule(cols), LineRole::Rule);

    // Column header block
    out.push(
        fit(&format!("{}M{}Line{}File", ROW_INDENT, sep, sep), cols),
        LineRole::ColumnHeader,
    );
    out.push(rule(cols), LineRole::Rule);

    let marks_start = out.lines.len();

    // Data block
    if marks.is_empty() {
        out.push(NO_MARKS_LINE.to_string(), LineRole::NoMarks);
    } else {
        for (position, mark) in marks.iter().enumerate() {
            let (text, filename) = mark_row(mark, config, &sep, cols);
            out.push(text, LineRole::Mark { position, filename });
        }
    }

    // Status block
    out.push(rule(cols), LineRole::Rule);
    out.push(fit(&status_hint(config, mode), cols), LineRole::StatusHint);
    out.push(String::new(), LineRole::Spacer);

    let Lines { lines, roles } = out;
    let content_height = lines.len();
    let height = content_height.min(usize::from(config.height.max(1)));

    RenderedLayout {
        lines,
        roles,
        index: LineIndex {
            marks_start,
            marks_count: marks.len(),
        },
        width,
        height: u16::try_from(height).unwrap_or(u16::MAX),
    }
}

/// Lines and roles accumulated during a layout pass.
#[derive(Default)]
struct Lines {
    lines: Vec<String>,
    roles: Vec<LineRole>,
}

impl Lines {
    fn push(&mut self, text: String, role: LineRole) {
        self.lines.push(text);
        self.roles.push(role);
    }
}

/// Formats one mark row and returns it with the visible filename columns.
fn mark_row(
    mark: &MarkRecord,
    config: &OverlayConfig,
    sep: &str,
    cols: usize,
) -> (String, Option<Range<usize>>) {
    let icon = match mark.kind {
        MarkType::Buffer => config.icons.buffer.as_str(),
        MarkType::Global => config.icons.global.as_str(),
    };

    let mut row = format!("{}{}{}{:>4}{}", ROW_INDENT, mark.mark, sep, mark.line, sep);
    if !icon.is_empty() {
        row.push_str(icon);
        row.push(' ');
    }
    let file_start = row.chars().count();
    row.push_str(&mark.file);
    let file_end = row.chars().count();

    let preview = mark.preview.trim();
    if !preview.is_empty() {
        row.push_str("  ");
        row.push_str(preview);
    }

    let visible = if row.chars().count() > cols {
        cols.saturating_sub(1)
    } else {
        cols
    };
    let row = fit(&row, cols);
    let end = file_end.min(visible);
    let filename = (file_start < end).then_some(file_start..end);

    (row, filename)
}

/// Builds the key hint line for the mode.
fn status_hint(config: &OverlayConfig, mode: NavMode) -> String {
    let keys = &config.keymaps;
    match mode {
        NavMode::Popup => format!(
            "{}{} jump  {} delete  {} close  {} direct",
            ROW_INDENT,
            first_key(&keys.navigate),
            first_key(&keys.delete),
            first_key(&keys.close),
            first_key(&keys.toggle_mode),
        ),
        NavMode::Direct => format!(
            "{}[mark] jump  {} close  {} popup",
            ROW_INDENT,
            first_key(&keys.close),
            first_key(&keys.toggle_mode),
        ),
    }
}

fn first_key(keys: &[String]) -> &str {
    keys.first().map(String::as_str).unwrap_or("-")
}

fn rule(cols: usize) -> String {
    std::iter::repeat(RULE_CHAR).take(cols).collect()
}

/// Centers `text` in `cols` columns, cutting it when it is too wide.
fn center(text: &str, cols: usize) -> String {
    let len = text.chars().count();
    if len >= cols {
        return fit(text, cols);
    }
    format!("{}{}", " ".repeat((cols - len) / 2), text)
}

/// Cuts `text` to `cols` columns, marking the cut with an ellipsis.
fn fit(text: &str, cols: usize) -> String {
    if text.chars().count() <= cols {
        return text.to_string();
    }
    let mut out: String = text.chars().take(cols.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}
