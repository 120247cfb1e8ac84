//! The form field contract and validation rules.

use teampick_combo::Selection;
use teampick_tui::{Cmd, Message, MouseMsg};

use crate::fields::Pokemon;
use crate::theme::Theme;

/// A focusable form field.
///
/// Fields receive messages only while focused (the app routes them) and
/// surface validation problems as inline strings, never as failures.
pub trait Field {
    /// Handle a message. A returned command is executed by the runtime;
    /// fields use it to ask for focus moves.
    fn update(&mut self, msg: &Message) -> Option<Cmd>;

    /// Handle a mouse event in field-local coordinates.
    fn on_mouse(&mut self, _mouse: &MouseMsg) -> Option<Cmd> {
        None
    }

    /// Render the field.
    fn view(&self, theme: &Theme) -> String;

    /// Give the field input focus.
    fn focus(&mut self);

    /// Remove input focus.
    fn blur(&mut self);

    /// Re-run validation against the current value.
    fn validate(&mut self);

    /// The current validation error, if any.
    fn error(&self) -> Option<&str>;
}

/// Validates a trainer name: required, 2–12 characters, letters only.
#[must_use]
pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This information is required.".to_string());
    }
    let len = value.chars().count();
    if !(2..=12).contains(&len) {
        return Some("Use 2 to 12 letters.".to_string());
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some("Letters only.".to_string());
    }
    None
}

/// Validates the team: exactly four picks.
#[must_use]
pub fn validate_team(selection: &Selection<Pokemon>) -> Option<String> {
    if selection.len() == 4 {
        None
    } else {
        Some("Select exactly 4 Pokemon.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_content() {
        assert!(validate_name("").is_some());
        assert!(validate_name("   ").is_some());
    }

    #[test]
    fn name_length_boundaries() {
        assert!(validate_name("a").is_some());
        assert!(validate_name("ab").is_none());
        assert!(validate_name("abcdefghijkl").is_none());
        assert!(validate_name("abcdefghijklm").is_some());
    }

    #[test]
    fn name_rejects_non_letters() {
        assert!(validate_name("ash1").is_some());
        assert!(validate_name("a b").is_some());
        assert!(validate_name("misty").is_none());
        assert!(validate_name("Misty").is_none());
    }

    #[test]
    fn team_must_have_exactly_four() {
        let mut sel: Selection<Pokemon> = Selection::multi();
        for name in ["a", "b", "c"] {
            sel = sel.toggle(&Pokemon::named(name)).unwrap();
        }
        assert!(validate_team(&sel).is_some());

        sel = sel.toggle(&Pokemon::named("d")).unwrap();
        assert!(validate_team(&sel).is_none());

        sel = sel.toggle(&Pokemon::named("e")).unwrap();
        assert!(validate_team(&sel).is_some());
    }
}
