//! Key bindings of the marks overlay.
//!
//! Keys map to tagged [`Action`]s instead of callbacks. The controller looks
//! up the action and dispatches it against the session that is current at
//! dispatch time, so a table never holds on to stale state.

use std::collections::HashMap;

use termion::event::Key;

use super::{MarkRecord, NavMode};
use crate::config::Keymaps;
use crate::input::keys::parse_key_spec;

/// Logical overlay action a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Jump to the mark under the cursor.
    Navigate,
    /// Delete the mark under the cursor.
    Delete,
    /// Switch between popup and direct mode.
    ToggleMode,
    /// Jump to the mark with this character.
    DirectJump(char),
    /// Close the overlay.
    Close,
    /// Move the cursor one row down.
    CursorDown,
    /// Move the cursor one row up.
    CursorUp,
    /// Move the cursor to the first row.
    CursorTop,
    /// Move the cursor to the last row.
    CursorBottom,
}

impl Action {
    /// Returns true for cursor movements.
    pub fn is_vertical_motion(self) -> bool {
        matches!(
            self,
            Action::CursorDown | Action::CursorUp | Action::CursorTop | Action::CursorBottom
        )
    }
}

/// Keys installed on the overlay for one navigation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTable {
    mode: NavMode,
    keys: HashMap<Key, Action>,
}

impl BindingTable {
    /// Builds the bindings for `mode`.
    ///
    /// Popup mode binds motions plus the navigate, delete, close and
    /// toggle keys. Direct mode binds arrow motions, close and toggle keys,
    /// then one key per mark character; a mark character wins over a control
    /// key bound to the same character. `<Esc>` always closes in direct mode.
    pub fn for_mode(mode: NavMode, keymaps: &Keymaps, marks: &[MarkRecord]) -> Self {
        let mut keys = HashMap::new();

        match mode {
            NavMode::Popup => {
                for (key, action) in [
                    (Key::Char('j'), Action::CursorDown),
                    (Key::Char('k'), Action::CursorUp),
                    (Key::Char('g'), Action::CursorTop),
                    (Key::Char('G'), Action::CursorBottom),
                ] {
                    keys.insert(key, action);
                }
                insert_specs(&mut keys, &keymaps.navigate, Action::Navigate);
                insert_specs(&mut keys, &keymaps.delete, Action::Delete);
            }
            NavMode::Direct => {}
        }

        for (key, action) in [
            (Key::Down, Action::CursorDown),
            (Key::Up, Action::CursorUp),
            (Key::Home, Action::CursorTop),
            (Key::End, Action::CursorBottom),
        ] {
            keys.insert(key, action);
        }
        insert_specs(&mut keys, &keymaps.close, Action::Close);
        insert_specs(&mut keys, &keymaps.toggle_mode, Action::ToggleMode);

        if mode == NavMode::Direct {
            for mark in marks {
                keys.insert(Key::Char(mark.mark), Action::DirectJump(mark.mark));
            }
            keys.insert(Key::Esc, Action::Close);
        }

        Self { mode, keys }
    }

    /// Mode these bindings were built for.
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// Returns the action triggered by `key`.
    ///
    /// In direct mode every unbound printable character is a jump attempt, so
    /// a miss can be reported to the user.
    pub fn action_for(&self, key: &Key) -> Option<Action> {
        if let Some(action) = self.keys.get(key) {
            return Some(*action);
        }
        match (self.mode, key) {
            (NavMode::Direct, Key::Char(c)) if !c.is_control() => Some(Action::DirectJump(*c)),
            _ => None,
        }
    }

    /// Number of explicitly bound keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true when no key is bound.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn insert_specs(keys: &mut HashMap<Key, Action>, specs: &[String], action: Action) {
    for spec in specs {
        match parse_key_spec(spec) {
            Some(key) => {
                keys.insert(key, action);
            }
            None => tracing::warn!(target: "overlay.bindings", spec = %spec, ?action, "unrecognized key"),
        }
    }
}
