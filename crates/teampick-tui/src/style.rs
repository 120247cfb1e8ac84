//! ANSI style builder for view rendering.
//!
//! A cut-down terminal styling layer: SGR attributes, 256-color
//! foreground/background, glyph strings, padding and width. Styles with no
//! attributes render text unchanged, which keeps view output assertable in
//! tests.
//!
//! # Example
//!
//! ```rust
//! use teampick_tui::{Color, Style};
//!
//! let label = Style::new().bold().foreground(Color(212));
//! let line = label.render("charmander");
//! ```

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

/// A 256-color palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8);

impl From<u8> for Color {
    fn from(idx: u8) -> Self {
        Self(idx)
    }
}

/// A terminal text style.
///
/// Built with chained setters, applied with [`Style::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    faint: bool,
    underline: bool,
    reverse: bool,
    value: String,
    padding_left: u16,
    padding_right: u16,
    width: Option<u16>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed glyph string rendered before any text.
    ///
    /// Used for marker styles (`"> "`, `"[•] "`) that are rendered with
    /// empty or short text.
    #[must_use]
    pub fn set_string(mut self, s: impl Into<String>) -> Self {
        self.value = s.into();
        self
    }

    /// Returns the glyph string, if any.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders text in bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Renders text faint/dim.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Renders text underlined.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Swaps foreground and background.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Pads the rendered content on the left.
    #[must_use]
    pub fn padding_left(mut self, n: u16) -> Self {
        self.padding_left = n;
        self
    }

    /// Pads the rendered content on the right.
    #[must_use]
    pub fn padding_right(mut self, n: u16) -> Self {
        self.padding_right = n;
        self
    }

    /// Pads the rendered content with trailing spaces up to `w` columns.
    #[must_use]
    pub fn width(mut self, w: u16) -> Self {
        self.width = Some(w);
        self
    }

    fn sgr(&self) -> Option<String> {
        let mut codes: Vec<String> = Vec::new();
        if self.bold {
            codes.push("1".into());
        }
        if self.faint {
            codes.push("2".into());
        }
        if self.underline {
            codes.push("4".into());
        }
        if self.reverse {
            codes.push("7".into());
        }
        if let Some(Color(n)) = self.fg {
            codes.push(format!("38;5;{n}"));
        }
        if let Some(Color(n)) = self.bg {
            codes.push(format!("48;5;{n}"));
        }
        if codes.is_empty() {
            None
        } else {
            Some(codes.join(";"))
        }
    }

    /// Applies the style to the given text.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut content = String::new();
        for _ in 0..self.padding_left {
            content.push(' ');
        }
        content.push_str(&self.value);
        content.push_str(text);
        for _ in 0..self.padding_right {
            content.push(' ');
        }

        if let Some(w) = self.width {
            let used = content.width();
            for _ in used..usize::from(w) {
                content.push(' ');
            }
        }

        match self.sgr() {
            Some(codes) => {
                let mut out = String::with_capacity(content.len() + 16);
                let _ = write!(out, "\x1b[{codes}m{content}\x1b[0m");
                out
            }
            None => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_is_passthrough() {
        assert_eq!(Style::new().render("plain"), "plain");
    }

    #[test]
    fn glyph_string_prefixes_text() {
        let marker = Style::new().set_string("> ");
        assert_eq!(marker.render(""), "> ");
        assert_eq!(marker.render("item"), "> item");
    }

    #[test]
    fn bold_wraps_with_sgr() {
        assert_eq!(Style::new().bold().render("x"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn foreground_uses_256_palette() {
        assert_eq!(
            Style::new().foreground(Color(212)).render("x"),
            "\x1b[38;5;212mx\x1b[0m"
        );
    }

    #[test]
    fn attributes_combine_in_one_sequence() {
        let s = Style::new().bold().faint().foreground(Color(8));
        assert_eq!(s.render("x"), "\x1b[1;2;38;5;8mx\x1b[0m");
    }

    #[test]
    fn padding_and_width() {
        let s = Style::new().padding_left(1).width(6);
        assert_eq!(s.render("ab"), " ab   ");
    }

    #[test]
    fn width_accounts_for_display_columns() {
        // '×' is one column; padding fills to the requested width.
        let s = Style::new().width(3);
        assert_eq!(s.render("×"), "×  ");
    }
}
