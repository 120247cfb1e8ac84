//! Keyboard input handling.
//!
//! Key events arrive as [`KeyMsg`] values. The [`KeyType`] set is limited to
//! the keys the application binds; anything else is reported as plain runes.

use std::fmt;

/// Keyboard key event message.
///
/// Sent to the model's update function when a key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    #[must_use]
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// The keys this runtime distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character input.
    Runes,
    /// Enter.
    Enter,
    /// Space.
    Space,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Ctrl+A.
    CtrlA,
    /// Ctrl+C.
    CtrlC,
    /// Ctrl+E.
    CtrlE,
    /// Ctrl+U.
    CtrlU,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Enter => "enter",
            Self::Space => " ",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::CtrlA => "ctrl+a",
            Self::CtrlC => "ctrl+c",
            Self::CtrlE => "ctrl+e",
            Self::CtrlU => "ctrl+u",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event to a [`KeyMsg`].
///
/// Unbound control chords come through as runes so bindings can still be
/// matched textually.
#[must_use]
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> KeyMsg {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl => {
            let kt = match c.to_ascii_lowercase() {
                'a' => KeyType::CtrlA,
                'c' => KeyType::CtrlC,
                'e' => KeyType::CtrlE,
                'u' => KeyType::CtrlU,
                _ => {
                    return KeyMsg {
                        key_type: KeyType::Runes,
                        runes: vec![c],
                        alt,
                    };
                }
            };
            (kt, Vec::new())
        }
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => (KeyType::Runes, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn key_msg_display() {
        assert_eq!(KeyMsg::from_type(KeyType::Enter).to_string(), "enter");
        assert_eq!(KeyMsg::from_char('x').to_string(), "x");
        assert_eq!(KeyMsg::from_type(KeyType::ShiftTab).to_string(), "shift+tab");

        let mut alt = KeyMsg::from_char('b');
        alt.alt = true;
        assert_eq!(alt.to_string(), "alt+b");
    }

    #[test]
    fn translates_plain_chars() {
        let msg = from_crossterm_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(msg.key_type, KeyType::Runes);
        assert_eq!(msg.runes, vec!['q']);
    }

    #[test]
    fn translates_space_as_key() {
        let msg = from_crossterm_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(msg.key_type, KeyType::Space);
        assert!(msg.runes.is_empty());
    }

    #[test]
    fn translates_ctrl_chords() {
        let msg = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(msg.key_type, KeyType::CtrlC);
    }

    #[test]
    fn unbound_ctrl_chord_falls_back_to_runes() {
        let msg = from_crossterm_key(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(msg.key_type, KeyType::Runes);
        assert_eq!(msg.runes, vec!['z']);
    }

    #[test]
    fn shift_tab_both_encodings() {
        let a = from_crossterm_key(KeyCode::Tab, KeyModifiers::SHIFT);
        let b = from_crossterm_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(a.key_type, KeyType::ShiftTab);
        assert_eq!(b.key_type, KeyType::ShiftTab);
    }
}
