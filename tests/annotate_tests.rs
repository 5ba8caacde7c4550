use markquill::config::OverlayConfig;
use markquill::overlay::annotate::{annotate, StyleCategory, StyleSpan};
use markquill::overlay::layout::build;
use markquill::overlay::{MarkRecord, MarkType, NavMode};

fn spans_on(spans: &[StyleSpan], line: usize) -> Vec<StyleSpan> {
    spans.iter().copied().filter(|s| s.line == line).collect()
}

fn text_of(line: &str, span: &StyleSpan) -> String {
    line.chars()
        .skip(span.col_start)
        .take(span.col_end - span.col_start)
        .collect()
}

#[test]
fn test_mark_category_follows_type_not_glyph() {
    // A buffer mark named with an uppercase letter still gets the buffer category
    let marks = vec![
        MarkRecord::new('Q', MarkType::Buffer, 1, "a.txt", ""),
        MarkRecord::new('q', MarkType::Global, 2, "b.txt", ""),
    ];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);
    let spans = annotate(&layout, &marks, NavMode::Popup);
    let start = layout.index.marks_start;

    let first = spans_on(&spans, start);
    assert!(first
        .iter()
        .any(|s| s.col_start == 2 && s.col_end == 3 && s.category == StyleCategory::MarkBuffer));

    let second = spans_on(&spans, start + 1);
    assert!(second
        .iter()
        .any(|s| s.col_start == 2 && s.col_end == 3 && s.category == StyleCategory::MarkGlobal));
}

#[test]
fn test_digit_runs_tagged() {
    let marks = vec![MarkRecord::new('a', MarkType::Buffer, 42, "f.txt", "x 7 y 100")];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);
    let spans = annotate(&layout, &marks, NavMode::Popup);
    let line = layout.index.marks_start;
    let text = &layout.lines[line];

    let digits: Vec<String> = spans_on(&spans, line)
        .iter()
        .filter(|s| s.category == StyleCategory::LineNumber)
        .map(|s| text_of(text, s))
        .collect();
    assert_eq!(digits, vec!["42", "7", "100"]);
}

#[test]
fn test_non_ascii_digits_untagged() {
    let marks = vec![MarkRecord::new('a', MarkType::Buffer, 8, "f.txt", "page ٣٤ and 5")];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);
    let spans = annotate(&layout, &marks, NavMode::Popup);
    let line = layout.index.marks_start;
    let text = &layout.lines[line];

    let digits: Vec<String> = spans_on(&spans, line)
        .iter()
        .filter(|s| s.category == StyleCategory::LineNumber)
        .map(|s| text_of(text, s))
        .collect();
    assert_eq!(digits, vec!["8", "5"]);
}

#[test]
fn test_filename_span_skips_icon() {
    let marks = vec![MarkRecord::new('a', MarkType::Buffer, 5, "src/lib.rs", "pub mod x;")];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);
    let spans = annotate(&layout, &marks, NavMode::Popup);
    let line = layout.index.marks_start;

    let filename: Vec<String> = spans_on(&spans, line)
        .iter()
        .filter(|s| s.category == StyleCategory::Filename)
        .map(|s| text_of(&layout.lines[line], s))
        .collect();
    assert_eq!(filename, vec!["src/lib.rs"]);
}

#[test]
fn test_structural_lines_by_mode() {
    let marks = vec![MarkRecord::new('a', MarkType::Buffer, 1, "a.txt", "")];
    let config = OverlayConfig::default();

    let popup = build(&marks, &config, NavMode::Popup);
    let spans = annotate(&popup, &marks, NavMode::Popup);
    assert!(spans_on(&spans, 1)
        .iter()
        .any(|s| s.category == StyleCategory::ModeBorderPopup));
    assert!(spans_on(&spans, 2)
        .iter()
        .any(|s| s.category == StyleCategory::Stats));
    assert!(spans_on(&spans, 3)
        .iter()
        .any(|s| s.category == StyleCategory::Separator));
    assert!(spans_on(&spans, 4)
        .iter()
        .any(|s| s.category == StyleCategory::ColumnHeader));
    let hint = popup.lines.len() - 2;
    assert!(spans_on(&spans, hint)
        .iter()
        .any(|s| s.category == StyleCategory::StatusBarPopup));

    let direct = build(&marks, &config, NavMode::Direct);
    let spans = annotate(&direct, &marks, NavMode::Direct);
    assert!(spans_on(&spans, 1)
        .iter()
        .any(|s| s.category == StyleCategory::ModeBorderDirect));
    let hint = direct.lines.len() - 2;
    assert!(spans_on(&spans, hint)
        .iter()
        .any(|s| s.category == StyleCategory::StatusBarDirect));
}

#[test]
fn test_blank_lines_untagged() {
    let layout = build(&[], &OverlayConfig::default(), NavMode::Popup);
    let spans = annotate(&layout, &[], NavMode::Popup);
    assert!(spans_on(&spans, 0).is_empty());
    assert!(spans_on(&spans, layout.lines.len() - 1).is_empty());

    let sentinel = spans_on(&spans, layout.index.marks_start);
    assert_eq!(sentinel.len(), 1);
    assert_eq!(sentinel[0].category, StyleCategory::NoMarks);
}

#[test]
fn test_annotate_is_idempotent_and_pure() {
    let marks = vec![
        MarkRecord::new('a', MarkType::Buffer, 1, "a.txt", "one"),
        MarkRecord::new('B', MarkType::Global, 22, "b.txt", "two"),
    ];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Direct);
    let before = layout.clone();

    let first = annotate(&layout, &marks, NavMode::Direct);
    let second = annotate(&layout, &marks, NavMode::Direct);

    assert_eq!(first, second);
    assert_eq!(layout, before);
    let start = layout.index.marks_start;
    assert_eq!(layout.index.resolve(start + 1), Some(0));
    assert_eq!(layout.index.resolve(start + 2), Some(1));
}

#[test]
fn test_spans_stay_inside_lines() {
    let marks = vec![MarkRecord::new(
        'a',
        MarkType::Buffer,
        9999,
        "a/really/long/file/name/that/goes/past/the/edge/of/the/window.txt",
        "and a preview too",
    )];
    let config = OverlayConfig {
        width: 40,
        ..OverlayConfig::default()
    };
    let layout = build(&marks, &config, NavMode::Popup);
    for span in annotate(&layout, &marks, NavMode::Popup) {
        let len = layout.lines[span.line].chars().count();
        assert!(span.col_start < span.col_end);
        assert!(span.col_end <= len);
    }
}
