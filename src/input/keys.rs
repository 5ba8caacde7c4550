//! Keyboard event mapping and key-spec parsing.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move cursor, set a mark)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the viewer
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Jump to first line (g)
    JumpToTop,
    /// Jump to last line (G)
    JumpToBottom,
    /// Half-page down (Ctrl-d)
    HalfPageDown,
    /// Half-page up (Ctrl-u)
    HalfPageUp,
    /// Switch to the next buffer
    NextBuffer,
    /// Switch to the previous buffer
    PreviousBuffer,
    /// Set mark prefix (m)
    MarkSet,
    /// Jump to mark prefix (')
    MarkJump,
    /// Open the marks overlay
    OpenMarks,
    /// Jump backward in jump list (Ctrl-o)
    JumpBackward,
    /// Jump forward in jump list (Ctrl-i)
    JumpForward,
    /// Mark name typed after a mark prefix
    MarkName(char),
    /// Abandon a pending prefix
    Cancel,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use markquill::editor::mode::EditorMode;
/// use markquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::MoveDown);
///
/// let event = Event::Key(Key::Char('a'));
/// assert_eq!(map_key_event(event, &EditorMode::SetMark), InputEvent::MarkName('a'));
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Ctrl('d') => InputEvent::HalfPageDown,
            Key::Ctrl('u') => InputEvent::HalfPageUp,
            Key::Ctrl('o') => InputEvent::JumpBackward,
            Key::Ctrl('i') => InputEvent::JumpForward,
            Key::Char('\t') => InputEvent::NextBuffer,
            Key::BackTab => InputEvent::PreviousBuffer,
            Key::Char('q') => InputEvent::Quit,
            Key::Char('j') | Key::Down => InputEvent::MoveDown,
            Key::Char('k') | Key::Up => InputEvent::MoveUp,
            Key::Char('g') | Key::Home => InputEvent::JumpToTop,
            Key::Char('G') | Key::End => InputEvent::JumpToBottom,
            Key::PageDown => InputEvent::HalfPageDown,
            Key::PageUp => InputEvent::HalfPageUp,
            Key::Char('m') => InputEvent::MarkSet,
            Key::Char('\'') | Key::Char('`') => InputEvent::MarkJump,
            Key::Char('M') | Key::F(2) => InputEvent::OpenMarks,
            _ => InputEvent::Unknown,
        },
        EditorMode::SetMark | EditorMode::JumpMark => match key {
            Key::Esc => InputEvent::Cancel,
            Key::Char(c) if c.is_ascii_alphabetic() => InputEvent::MarkName(c),
            _ => InputEvent::Cancel,
        },
        // Keys are routed to the overlay controller while it is open.
        EditorMode::Marks => InputEvent::Unknown,
    }
}

/// Parses a key spec from the configuration.
///
/// Accepts a single character or a bracketed name (case-insensitive):
/// `<CR>`/`<Enter>`, `<Esc>`, `<Tab>`, `<S-Tab>`, `<Space>`, `<BS>`, `<Del>`,
/// `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<Home>`, `<End>`, `<PageUp>`,
/// `<PageDown>`, `<F1>`..`<F12>`, `<C-x>` and `<A-x>`.
///
/// # Example
///
/// ```
/// use markquill::input::keys::parse_key_spec;
/// use termion::event::Key;
///
/// assert_eq!(parse_key_spec("d"), Some(Key::Char('d')));
/// assert_eq!(parse_key_spec("<CR>"), Some(Key::Char('\n')));
/// assert_eq!(parse_key_spec("<C-n>"), Some(Key::Ctrl('n')));
/// assert_eq!(parse_key_spec("<what>"), None);
/// ```
pub fn parse_key_spec(spec: &str) -> Option<Key> {
    let mut chars = spec.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key::Char(c));
    }

    let name = spec.strip_prefix('<')?.strip_suffix('>')?;
    let lower = name.to_ascii_lowercase();

    let key = match lower.as_str() {
        "cr" | "enter" | "return" => Key::Char('\n'),
        "esc" => Key::Esc,
        "tab" => Key::Char('\t'),
        "s-tab" => Key::BackTab,
        "space" => Key::Char(' '),
        "bs" | "backspace" => Key::Backspace,
        "del" => Key::Delete,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        _ => return parse_modified(name),
    };
    Some(key)
}

/// Parses `F<n>`, `C-<c>` and `A-<c>` names.
fn parse_modified(name: &str) -> Option<Key> {
    if let Some(n) = name.strip_prefix(|c: char| c == 'F' || c == 'f') {
        return n
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(Key::F);
    }

    let (modifier, rest) = name.split_once('-')?;
    let mut chars = rest.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };
    match modifier.to_ascii_lowercase().as_str() {
        "c" => Some(Key::Ctrl(c.to_ascii_lowercase())),
        "a" | "m" => Some(Key::Alt(c)),
        _ => None,
    }
}
