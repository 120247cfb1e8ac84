//! Mouse input handling.
//!
//! Mouse events arrive as [`MouseMsg`] values with 0-indexed cell
//! coordinates. Capture must be enabled with [`crate::Program::with_mouse`].

use std::fmt;

/// Mouse event message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMsg {
    /// Column, 0-indexed.
    pub x: u16,
    /// Row, 0-indexed.
    pub y: u16,
    /// The action that occurred.
    pub action: MouseAction,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseMsg {
    /// Create a left-button press at the given cell.
    #[must_use]
    pub fn click(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
        }
    }

    /// Create a motion event at the given cell.
    #[must_use]
    pub fn motion(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Motion,
            button: MouseButton::None,
        }
    }

    /// Check if this is a wheel event.
    #[must_use]
    pub fn is_wheel(&self) -> bool {
        matches!(self.button, MouseButton::WheelUp | MouseButton::WheelDown)
    }

    /// Check if this is a left-button press.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.action == MouseAction::Press && self.button == MouseButton::Left
    }
}

impl fmt::Display for MouseMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.button == MouseButton::None {
            write!(f, "{}", self.action)
        } else if self.action == MouseAction::Press {
            write!(f, "{}", self.button)
        } else {
            write!(f, "{} {}", self.button, self.action)
        }
    }
}

/// Mouse action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseAction {
    /// Button pressed (wheel ticks report as presses).
    #[default]
    Press,
    /// Button released.
    Release,
    /// Pointer moved.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Motion => "motion",
        };
        write!(f, "{name}")
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (motion only).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm mouse event to a [`MouseMsg`].
#[must_use]
pub fn from_crossterm_mouse(event: crossterm::event::MouseEvent) -> MouseMsg {
    use crossterm::event::{MouseButton as CtButton, MouseEventKind};

    let action = match event.kind {
        MouseEventKind::Down(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => MouseAction::Press,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Motion,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            CtButton::Left => MouseButton::Left,
            CtButton::Middle => MouseButton::Middle,
            CtButton::Right => MouseButton::Right,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        _ => MouseButton::None,
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind};

    #[test]
    fn click_constructor() {
        let m = MouseMsg::click(3, 5);
        assert!(m.is_click());
        assert!(!m.is_wheel());
        assert_eq!((m.x, m.y), (3, 5));
    }

    #[test]
    fn translates_scroll_as_wheel_press() {
        let m = from_crossterm_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(m.button, MouseButton::WheelDown);
        assert_eq!(m.action, MouseAction::Press);
        assert!(m.is_wheel());
    }

    #[test]
    fn translates_moved_as_buttonless_motion() {
        let m = from_crossterm_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 9,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(m.button, MouseButton::None);
        assert_eq!(m.action, MouseAction::Motion);
    }

    #[test]
    fn translates_left_release() {
        let m = from_crossterm_mouse(MouseEvent {
            kind: MouseEventKind::Up(CtButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(m.action, MouseAction::Release);
        assert!(!m.is_click());
    }

    #[test]
    fn display_formats() {
        assert_eq!(MouseMsg::click(0, 0).to_string(), "left");
        assert_eq!(MouseMsg::motion(0, 0).to_string(), "motion");
    }
}
