//! Style bundle for the form and overlay.

use teampick_tui::{Color, Style};

/// The application's styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Application title line.
    pub title: Style,
    /// Subtitle / tag line.
    pub subtitle: Style,
    /// Field title lines.
    pub label: Style,
    /// Input prompt while the field is focused.
    pub prompt_focused: Style,
    /// Input prompt while the field is blurred.
    pub prompt_blurred: Style,
    /// Typed input text.
    pub input_text: Style,
    /// Placeholder text in empty inputs.
    pub placeholder: Style,
    /// Inline validation errors.
    pub error: Style,
    /// Degraded-state banner (roster unavailable).
    pub warn: Style,
    /// Submit button while focused.
    pub button_focused: Style,
    /// Submit button while blurred.
    pub button_blurred: Style,
    /// Transient status line.
    pub status: Style,
    /// Help footer.
    pub help: Style,
    /// Overlay border.
    pub overlay_border: Style,
    /// Overlay heading.
    pub overlay_title: Style,
    /// Overlay body text.
    pub overlay_text: Style,
    /// Overlay rows for failed fetches.
    pub overlay_missing: Style,
}

impl Theme {
    /// The colored default.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            title: Style::new().bold().foreground(Color(212)),
            subtitle: Style::new().faint(),
            label: Style::new().bold(),
            prompt_focused: Style::new().set_string("> ").foreground(Color(212)),
            prompt_blurred: Style::new().set_string("> ").foreground(Color(8)),
            input_text: Style::new(),
            placeholder: Style::new().faint(),
            error: Style::new().foreground(Color(204)),
            warn: Style::new().foreground(Color(214)),
            button_focused: Style::new().reverse().bold(),
            button_blurred: Style::new().faint(),
            status: Style::new().foreground(Color(214)),
            help: Style::new().faint(),
            overlay_border: Style::new().foreground(Color(212)),
            overlay_title: Style::new().bold().foreground(Color(212)),
            overlay_text: Style::new(),
            overlay_missing: Style::new().faint(),
        }
    }

    /// Glyphs only, no colors.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            subtitle: Style::new(),
            label: Style::new(),
            prompt_focused: Style::new().set_string("> "),
            prompt_blurred: Style::new().set_string("> "),
            input_text: Style::new(),
            placeholder: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            button_focused: Style::new(),
            button_blurred: Style::new(),
            status: Style::new(),
            help: Style::new(),
            overlay_border: Style::new(),
            overlay_title: Style::new(),
            overlay_text: Style::new(),
            overlay_missing: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
