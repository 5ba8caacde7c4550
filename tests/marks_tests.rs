use markquill::editor::buffer::Buffer;
use markquill::editor::marks::{mark_type_for, MarkSet, Position};
use markquill::editor::state::EditorState;
use markquill::overlay::{MarkProvider, MarkType};

#[test]
fn test_markset_creation() {
    let marks = MarkSet::new();
    assert!(marks.is_empty());
    assert_eq!(marks.get_mark('a', 0), None);
}

#[test]
fn test_mark_types_by_name() {
    assert_eq!(mark_type_for('a'), Some(MarkType::Buffer));
    assert_eq!(mark_type_for('Z'), Some(MarkType::Global));
    assert_eq!(mark_type_for('1'), None);
    assert_eq!(mark_type_for('\''), None);
}

#[test]
fn test_set_and_get_mark() {
    let mut marks = MarkSet::new();
    assert!(marks.set_mark('a', Position::new(0, 3)));

    assert_eq!(marks.get_mark('a', 0), Some(Position::new(0, 3)));
    assert_eq!(marks.get_mark('b', 0), None);
}

#[test]
fn test_invalid_name_rejected() {
    let mut marks = MarkSet::new();
    assert!(!marks.set_mark('5', Position::new(0, 1)));
    assert!(marks.is_empty());
}

#[test]
fn test_buffer_marks_are_per_buffer() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', Position::new(0, 1));
    marks.set_mark('a', Position::new(1, 9));

    assert_eq!(marks.get_mark('a', 0), Some(Position::new(0, 1)));
    assert_eq!(marks.get_mark('a', 1), Some(Position::new(1, 9)));
    assert_eq!(marks.len(), 2);
}

#[test]
fn test_global_marks_visible_everywhere() {
    let mut marks = MarkSet::new();
    marks.set_mark('A', Position::new(1, 4));

    assert_eq!(marks.get_mark('A', 0), Some(Position::new(1, 4)));
    assert_eq!(marks.get_mark('A', 7), Some(Position::new(1, 4)));
}

#[test]
fn test_overwrite_mark() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', Position::new(0, 1));
    marks.set_mark('a', Position::new(0, 2));

    assert_eq!(marks.get_mark('a', 0), Some(Position::new(0, 2)));
    assert_eq!(marks.len(), 1);
}

#[test]
fn test_list_order() {
    let mut marks = MarkSet::new();
    marks.set_mark('C', Position::new(1, 1));
    marks.set_mark('b', Position::new(0, 2));
    marks.set_mark('A', Position::new(0, 3));
    marks.set_mark('a', Position::new(0, 4));
    marks.set_mark('z', Position::new(1, 5));

    let names: Vec<char> = marks.list(0).into_iter().map(|(c, _, _)| c).collect();
    assert_eq!(names, vec!['a', 'b', 'A', 'C']);
}

#[test]
fn test_remove_mark() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', Position::new(0, 1));
    marks.set_mark('B', Position::new(0, 2));

    assert!(marks.remove_mark('a', 0));
    assert!(!marks.remove_mark('a', 0));
    assert!(marks.remove_mark('B', 3));
    assert!(marks.is_empty());
}

// Editor state as the overlay's mark provider

fn state() -> EditorState {
    EditorState::new(vec![
        Buffer::from_text("one.txt", "alpha\n   beta  \ngamma"),
        Buffer::from_text("two.txt", "delta\nepsilon"),
    ])
}

#[test]
fn test_provider_snapshot() {
    let mut state = state();
    state.move_cursor_down(1);
    state.set_mark_at_cursor('a');
    state.next_buffer();
    state.set_mark_at_cursor('Q');
    state.previous_buffer();

    let marks = state.get_all_marks();
    assert_eq!(marks.len(), 2);

    assert_eq!(marks[0].mark, 'a');
    assert_eq!(marks[0].kind, MarkType::Buffer);
    assert_eq!(marks[0].line, 2);
    assert_eq!(marks[0].file, "one.txt");
    assert_eq!(marks[0].preview, "beta");

    assert_eq!(marks[1].mark, 'Q');
    assert_eq!(marks[1].kind, MarkType::Global);
    assert_eq!(marks[1].file, "two.txt");
    assert_eq!(marks[1].preview, "delta");
}

#[test]
fn test_provider_goto_records_jump() {
    let mut state = state();
    state.next_buffer();
    state.move_cursor_down(1);
    state.set_mark_at_cursor('E');
    state.previous_buffer();

    let mark = state.get_all_marks().remove(0);
    state.goto_mark(&mark);
    assert_eq!(state.current_buffer_index(), 1);
    assert_eq!(state.cursor_line(), 2);

    state.jump_backward();
    assert_eq!(state.current_buffer_index(), 0);
    assert_eq!(state.cursor_line(), 1);
}

#[test]
fn test_provider_delete() {
    let mut state = state();
    state.set_mark_at_cursor('a');
    let mark = state.get_all_marks().remove(0);

    state.delete_mark(&mark);
    assert!(state.get_all_marks().is_empty());
    assert!(state.message().is_some());
}
