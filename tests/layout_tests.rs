use markquill::config::OverlayConfig;
use markquill::overlay::layout::{build, LineRole, MIN_WIDTH, NO_MARKS_LINE};
use markquill::overlay::{MarkRecord, MarkType, NavMode};

fn buffer_mark(c: char, line: usize) -> MarkRecord {
    MarkRecord::new(c, MarkType::Buffer, line, "notes.txt", "some text")
}

fn global_mark(c: char, line: usize) -> MarkRecord {
    MarkRecord::new(c, MarkType::Global, line, "main.rs", "fn main() {")
}

#[test]
fn test_marks_count_matches_input() {
    let config = OverlayConfig::default();
    for n in 0..12 {
        let marks: Vec<_> = (0..n)
            .map(|i| buffer_mark((b'a' + i as u8) as char, i + 1))
            .collect();
        let layout = build(&marks, &config, NavMode::Popup);
        assert_eq!(layout.index.marks_count, n);
        assert_eq!(layout.lines.len(), layout.roles.len());
        assert_eq!(layout.lines.len(), 6 + n.max(1) + 3);
    }
}

#[test]
fn test_scenario_single_buffer_mark() {
    let marks = vec![MarkRecord::new('a', MarkType::Buffer, 10, "x.lua", "")];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);

    assert_eq!(layout.mark_rows().len(), 1);
    let start = layout.index.marks_start;
    assert_eq!(layout.index.resolve(start + 1), Some(0));
    assert_eq!(layout.index.resolve(start), None);
    assert_eq!(layout.index.resolve(start + 2), None);
    assert_eq!(layout.index.first_line(), Some(start + 1));

    let row = &layout.mark_rows()[0];
    assert!(row.starts_with("  a │   10 │ ● x.lua"), "row: {row:?}");
}

#[test]
fn test_scenario_no_marks() {
    let layout = build(&[], &OverlayConfig::default(), NavMode::Popup);
    let start = layout.index.marks_start;

    assert_eq!(layout.index.marks_count, 0);
    assert_eq!(layout.lines[start], NO_MARKS_LINE);
    assert_eq!(layout.roles[start], LineRole::NoMarks);
    assert!(layout.mark_rows().is_empty());
    for line in 0..=layout.lines.len() + 1 {
        assert_eq!(layout.index.resolve(line), None);
    }
}

#[test]
fn test_empty_nonempty_empty_round_trip() {
    let config = OverlayConfig::default();
    let marks = vec![buffer_mark('a', 1), global_mark('B', 2)];

    let first = build(&[], &config, NavMode::Popup);
    let second = build(&marks, &config, NavMode::Popup);
    let third = build(&[], &config, NavMode::Popup);

    assert_eq!(first.index.marks_count, 0);
    assert_eq!(second.index.marks_count, 2);
    assert_eq!(third.index.marks_count, 0);
    assert_eq!(first, third);
    assert_eq!(
        third
            .roles
            .iter()
            .filter(|r| **r == LineRole::NoMarks)
            .count(),
        1
    );
}

#[test]
fn test_height_capped_by_config() {
    let config = OverlayConfig {
        height: 8,
        ..OverlayConfig::default()
    };
    let marks: Vec<_> = (0..10)
        .map(|i| buffer_mark((b'a' + i as u8) as char, i + 1))
        .collect();
    let layout = build(&marks, &config, NavMode::Popup);
    assert_eq!(layout.height, 8);
    // Content is not cut, only the window
    assert_eq!(layout.index.marks_count, 10);
}

#[test]
fn test_height_fits_content() {
    let layout = build(&[buffer_mark('a', 1)], &OverlayConfig::default(), NavMode::Popup);
    assert_eq!(usize::from(layout.height), layout.lines.len());
}

#[test]
fn test_width_has_minimum() {
    let config = OverlayConfig {
        width: 10,
        ..OverlayConfig::default()
    };
    let layout = build(&[buffer_mark('a', 1)], &config, NavMode::Popup);
    assert_eq!(layout.width, MIN_WIDTH);
    for line in &layout.lines {
        assert!(line.chars().count() <= usize::from(MIN_WIDTH));
    }
}

#[test]
fn test_long_row_keeps_prefix() {
    let config = OverlayConfig {
        width: 40,
        ..OverlayConfig::default()
    };
    let mark = MarkRecord::new(
        'z',
        MarkType::Buffer,
        12345,
        "a/very/long/path/to/some/deeply/nested/file.rs",
        "preview text that is long as well",
    );
    let layout = build(&[mark], &config, NavMode::Popup);
    let row = &layout.mark_rows()[0];

    assert!(row.starts_with("  z │ 12345 │ "));
    assert_eq!(row.chars().count(), 40);
    assert!(row.ends_with('…'));

    let start = layout.index.marks_start;
    match &layout.roles[start] {
        LineRole::Mark { position, filename } => {
            assert_eq!(*position, 0);
            let range = filename.clone().unwrap();
            assert!(range.end <= 39);
        }
        other => panic!("unexpected role {other:?}"),
    }
}

#[test]
fn test_rows_align_columns() {
    let marks = vec![buffer_mark('a', 3), global_mark('B', 1200)];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);
    let rows = layout.mark_rows();
    let sep_cols = |row: &str| -> Vec<usize> {
        row.chars()
            .enumerate()
            .filter(|(_, c)| *c == '│')
            .map(|(i, _)| i)
            .take(2)
            .collect()
    };
    assert_eq!(sep_cols(&rows[0]), sep_cols(&rows[1]));
}

#[test]
fn test_header_and_status_lines() {
    let marks = vec![buffer_mark('a', 1), buffer_mark('b', 2), global_mark('C', 3)];
    let layout = build(&marks, &OverlayConfig::default(), NavMode::Popup);

    assert_eq!(layout.lines[1].trim(), "Popup");
    assert_eq!(layout.lines[2].trim(), "Buffer 2 │ Global 1 │ Total 3");
    assert!(layout.lines[3].chars().all(|c| c == '─'));
    assert_eq!(layout.lines[4], "  M │ Line │ File");

    let hint = &layout.lines[layout.lines.len() - 2];
    assert_eq!(hint, "  <CR> jump  d delete  q close  <Tab> direct");
    assert_eq!(layout.lines.last().map(String::as_str), Some(""));

    let direct = build(&marks, &OverlayConfig::default(), NavMode::Direct);
    assert_eq!(direct.lines[1].trim(), "Direct");
    let hint = &direct.lines[direct.lines.len() - 2];
    assert_eq!(hint, "  [mark] jump  q close  <Tab> popup");
}

#[test]
fn test_custom_separator_and_icons() {
    let mut config = OverlayConfig {
        separator: "|".to_string(),
        ..OverlayConfig::default()
    };
    config.icons.global = "G".to_string();
    let layout = build(&[global_mark('A', 7)], &config, NavMode::Popup);
    assert!(layout.mark_rows()[0].starts_with("  A |    7 | G main.rs  fn main() {"));
}
