//! The results overlay.
//!
//! A bordered panel listing the fetched team, shown after submission.
//! While open it captures all input: escape, enter, `q`, or any click
//! closes it and nothing reaches the form underneath.

use unicode_width::UnicodeWidthStr;

use teampick_dex::Profile;
use teampick_tui::{KeyMsg, KeyType, Message, MouseAction, MouseMsg, Style};

use crate::theme::Theme;

/// Overlay state: the last submission's results.
#[derive(Debug, Default)]
pub struct TeamOverlay {
    open: bool,
    trainer: String,
    profiles: Vec<Profile>,
    missing: Vec<String>,
}

impl TeamOverlay {
    /// Create a closed overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with a submission's results.
    pub fn open(&mut self, trainer: String, profiles: Vec<Profile>, missing: Vec<String>) {
        self.trainer = trainer;
        self.profiles = profiles;
        self.missing = missing;
        self.open = true;
    }

    /// Close the overlay. The results stay around for re-reading.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the overlay is capturing input.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The fetched profiles of the last submission.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Names whose detail fetch failed.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Handle a message while open. Returns `true` if the message was
    /// consumed (it always is while open).
    pub fn update(&mut self, msg: &Message) -> bool {
        if !self.open {
            return false;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let close = matches!(key.key_type, KeyType::Esc | KeyType::Enter)
                || (key.key_type == KeyType::Runes && key.runes == ['q']);
            if close {
                self.close();
            }
        } else if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            if mouse.action == MouseAction::Press && !mouse.is_wheel() {
                self.close();
            }
        }
        true
    }

    /// Render the panel.
    #[must_use]
    pub fn view(&self, theme: &Theme) -> String {
        // Rows carry their style separately: padding is computed on the
        // plain text, ANSI sequences have no display width.
        let mut rows: Vec<(&Style, String)> = Vec::new();
        rows.push((&theme.overlay_title, format!("{}'s team", self.trainer)));
        rows.push((&theme.overlay_text, String::new()));

        if self.profiles.is_empty() && self.missing.is_empty() {
            rows.push((&theme.overlay_missing, "nothing to show".to_string()));
        }

        for profile in &self.profiles {
            let types = profile.type_names().join("/");
            rows.push((
                &theme.overlay_text,
                format!("#{:03} {:<12} {}", profile.id, profile.name, types),
            ));
            if let Some(url) = profile.sprite() {
                rows.push((&theme.overlay_missing, format!("     {url}")));
            }
        }

        for name in &self.missing {
            rows.push((
                &theme.overlay_missing,
                format!("     {name} (details unavailable)"),
            ));
        }

        rows.push((&theme.overlay_text, String::new()));
        rows.push((&theme.help, "enter/esc: close".to_string()));

        frame(&rows, theme)
    }
}

/// Draw a rounded border around the given rows.
fn frame(rows: &[(&Style, String)], theme: &Theme) -> String {
    let inner = rows.iter().map(|(_, r)| r.width()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&theme.overlay_border.render(&format!("╭{}╮", "─".repeat(inner + 2))));
    for (style, row) in rows {
        out.push('\n');
        let pad = " ".repeat(inner - row.width());
        out.push_str(&theme.overlay_border.render("│"));
        out.push(' ');
        out.push_str(&style.render(row));
        out.push_str(&pad);
        out.push(' ');
        out.push_str(&theme.overlay_border.render("│"));
    }
    out.push('\n');
    out.push_str(&theme.overlay_border.render(&format!("╰{}╯", "─".repeat(inner + 2))));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u32, name: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            height: 0,
            weight: 0,
            sprites: teampick_dex::Sprites::default(),
            type_slots: Vec::new(),
        }
    }

    #[test]
    fn closed_overlay_consumes_nothing() {
        let mut overlay = TeamOverlay::new();
        assert!(!overlay.update(&Message::new(KeyMsg::from_type(KeyType::Enter))));
    }

    #[test]
    fn escape_closes() {
        let mut overlay = TeamOverlay::new();
        overlay.open("Ash Ketchum".to_string(), vec![], vec![]);
        assert!(overlay.update(&Message::new(KeyMsg::from_type(KeyType::Esc))));
        assert!(!overlay.is_open());
    }

    #[test]
    fn q_closes() {
        let mut overlay = TeamOverlay::new();
        overlay.open("Ash".to_string(), vec![], vec![]);
        overlay.update(&Message::new(KeyMsg::from_char('q')));
        assert!(!overlay.is_open());
    }

    #[test]
    fn other_keys_are_consumed_but_keep_it_open() {
        let mut overlay = TeamOverlay::new();
        overlay.open("Ash".to_string(), vec![], vec![]);
        assert!(overlay.update(&Message::new(KeyMsg::from_char('x'))));
        assert!(overlay.is_open());
    }

    #[test]
    fn click_closes() {
        let mut overlay = TeamOverlay::new();
        overlay.open("Ash".to_string(), vec![], vec![]);
        overlay.update(&Message::new(MouseMsg::click(3, 3)));
        assert!(!overlay.is_open());
    }

    #[test]
    fn view_lists_profiles_and_missing() {
        let mut overlay = TeamOverlay::new();
        overlay.open(
            "Ash Ketchum".to_string(),
            vec![profile(25, "pikachu")],
            vec!["missingno".to_string()],
        );

        let view = overlay.view(&Theme::plain());
        assert!(view.contains("Ash Ketchum's team"));
        assert!(view.contains("#025 pikachu"));
        assert!(view.contains("missingno (details unavailable)"));
        assert!(view.starts_with('╭'));
        assert!(view.ends_with('╯'));
    }
}
