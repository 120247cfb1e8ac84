//! Keybinding definitions and matching.
//!
//! Bindings pair one or more key names with help text, and can be disabled.
//! Key names are the [`std::fmt::Display`] forms of [`crate::KeyMsg`]
//! (`"enter"`, `"up"`, `"x"`, `" "`, `"shift+tab"`, ...).
//!
//! # Example
//!
//! ```rust
//! use teampick_tui::bind::{Binding, matches};
//!
//! let open = Binding::new().keys(&["enter", " "]).help("enter", "open");
//! assert!(matches("enter", &[&open]));
//! assert!(!matches("esc", &[&open]));
//! ```

use std::fmt;

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., `"↑/↓"`).
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

/// A keybinding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help text for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether the binding is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Check if a key matches any of the given bindings.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key = key.to_string();
    bindings
        .iter()
        .any(|b| b.enabled() && b.keys.iter().any(|k| k == &key))
}

/// Check if a key matches a single binding.
pub fn matches_one<K: fmt::Display>(key: K, binding: &Binding) -> bool {
    matches(key, &[binding])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyMsg, KeyType};

    #[test]
    fn matches_by_name() {
        let up = Binding::new().keys(&["up", "k"]);
        assert!(matches("up", &[&up]));
        assert!(matches("k", &[&up]));
        assert!(!matches("down", &[&up]));
    }

    #[test]
    fn matches_key_msg_display() {
        let toggle = Binding::new().keys(&["enter", " "]);
        assert!(matches_one(KeyMsg::from_type(KeyType::Enter), &toggle));
        assert!(matches_one(KeyMsg::from_type(KeyType::Space), &toggle));
        assert!(!matches_one(KeyMsg::from_char('a'), &toggle));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let mut b = Binding::new().keys(&["q"]);
        b.enable(false);
        assert!(!matches("q", &[&b]));
        b.enable(true);
        assert!(matches("q", &[&b]));
    }

    #[test]
    fn empty_binding_never_matches() {
        let b = Binding::new();
        assert!(!b.enabled());
        assert!(!matches("", &[&b]));
    }

    #[test]
    fn help_roundtrip() {
        let b = Binding::new().keys(&["esc"]).help("esc", "close");
        assert_eq!(b.get_help().key, "esc");
        assert_eq!(b.get_help().desc, "close");
    }
}
