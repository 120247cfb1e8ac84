//! The combo select control.
//!
//! State owned here is strictly presentation: open/closed, filter text,
//! highlighted index, scroll offset, focus. The selection itself is the
//! caller's; see [`crate::Selection`].
//!
//! Keyboard protocol (while the control has focus):
//!
//! | key | closed | open |
//! |---|---|---|
//! | enter / space | opens | selects the highlighted option and closes |
//! | up / down | opens | moves the highlight, clamped, no wraparound |
//! | esc | nothing | closes, selection and highlight untouched |
//! | printable runes | opens and edits the filter | edits the filter |
//!
//! Mouse protocol (widget-local coordinates, see [`ComboSelect::on_mouse`]):
//! clicking the body line toggles open/closed; clicking a tag's remove
//! glyph removes that value and clicking the clear glyph empties the whole
//! selection — both without touching open/closed state; clicking an option
//! row selects it and closes; moving over an option row highlights it (the
//! same highlight the keyboard moves); wheel ticks move the highlight.

use unicode_width::UnicodeWidthStr;

use teampick_tui::bind::{Binding, matches_one};
use teampick_tui::{BlurMsg, KeyMsg, KeyType, Message, MouseAction, MouseButton, MouseMsg, Style};

use crate::item::ComboItem;
use crate::selection::Selection;

/// Key bindings for the control.
#[derive(Debug, Clone)]
pub struct ComboKeyMap {
    /// Open the dropdown / select the highlighted option.
    pub toggle: Binding,
    /// Move the highlight up.
    pub up: Binding,
    /// Move the highlight down.
    pub down: Binding,
    /// Close the dropdown.
    pub close: Binding,
    /// Clear the filter text.
    pub clear_filter: Binding,
}

impl Default for ComboKeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new().keys(&["enter", " "]).help("enter", "select"),
            up: Binding::new().keys(&["up"]).help("↑", "up"),
            down: Binding::new().keys(&["down"]).help("↓", "down"),
            close: Binding::new().keys(&["esc"]).help("esc", "close"),
            clear_filter: Binding::new().keys(&["ctrl+u"]).help("ctrl+u", "clear filter"),
        }
    }
}

/// Styles for the control.
///
/// Glyph styles carry their text via [`Style::set_string`]; hit-testing
/// measures the same strings, so glyph styles should not add padding.
#[derive(Debug, Clone)]
pub struct ComboStyles {
    /// Body marker while open.
    pub marker_open: Style,
    /// Body marker while closed.
    pub marker_closed: Style,
    /// Placeholder shown when nothing is selected.
    pub placeholder: Style,
    /// A selected value's tag text.
    pub tag: Style,
    /// The per-tag remove glyph.
    pub tag_remove: Style,
    /// The clear-everything glyph.
    pub clear: Style,
    /// Filter line prompt.
    pub filter_prompt: Style,
    /// Filter text.
    pub filter_text: Style,
    /// Highlight cursor in the option list.
    pub cursor: Style,
    /// Cursor column for non-highlighted rows.
    pub no_cursor: Style,
    /// Checkbox prefix for selected options (multi).
    pub selected_prefix: Style,
    /// Checkbox prefix for unselected options (multi).
    pub unselected_prefix: Style,
    /// Option row text.
    pub option: Style,
    /// Highlighted option row text.
    pub highlighted: Style,
    /// Title line.
    pub title: Style,
    /// The empty-list indicator row.
    pub empty: Style,
}

impl ComboStyles {
    /// Glyphs only, no colors. Deterministic output for tests and dumb
    /// terminals.
    #[must_use]
    pub fn base() -> Self {
        Self {
            marker_open: Style::new().set_string("▾ "),
            marker_closed: Style::new().set_string("▸ "),
            placeholder: Style::new(),
            tag: Style::new(),
            tag_remove: Style::new().set_string("×"),
            clear: Style::new().set_string("⊗"),
            filter_prompt: Style::new().set_string("/ "),
            filter_text: Style::new(),
            cursor: Style::new().set_string("> "),
            no_cursor: Style::new().set_string("  "),
            selected_prefix: Style::new().set_string("[•] "),
            unselected_prefix: Style::new().set_string("[ ] "),
            option: Style::new(),
            highlighted: Style::new(),
            title: Style::new(),
            empty: Style::new(),
        }
    }

    /// The colored default.
    #[must_use]
    pub fn colored() -> Self {
        use teampick_tui::Color;

        let mut s = Self::base();
        s.marker_open = s.marker_open.foreground(Color(212));
        s.marker_closed = s.marker_closed.foreground(Color(8));
        s.placeholder = Style::new().faint();
        s.tag = Style::new().foreground(Color(212));
        s.tag_remove = s.tag_remove.foreground(Color(8));
        s.clear = s.clear.foreground(Color(8));
        s.filter_prompt = s.filter_prompt.foreground(Color(8));
        s.cursor = s.cursor.foreground(Color(212));
        s.selected_prefix = s.selected_prefix.foreground(Color(212));
        s.highlighted = Style::new().bold().foreground(Color(212));
        s.title = Style::new().bold();
        s.empty = Style::new().faint();
        s
    }
}

impl Default for ComboStyles {
    fn default() -> Self {
        Self::colored()
    }
}

/// Body-line regions that respond to the mouse, in widget-local columns.
struct Layout {
    body_row: usize,
    first_option_row: Option<usize>,
    option_rows: usize,
    removes: Vec<(usize, usize, String)>,
    clear: Option<(usize, usize)>,
}

enum Piece {
    Marker,
    Placeholder(String),
    Tag(String),
    Remove(String),
    Clear,
    Gap(&'static str),
}

/// A searchable single/multi select dropdown.
///
/// Controlled: the caller passes its [`Selection`] into [`update`],
/// [`on_mouse`] and [`view`]; selection changes come back as return
/// values.
///
/// [`update`]: ComboSelect::update
/// [`on_mouse`]: ComboSelect::on_mouse
/// [`view`]: ComboSelect::view
pub struct ComboSelect<T: ComboItem> {
    options: Vec<T>,
    open: bool,
    filter: String,
    highlight: usize,
    offset: usize,
    focused: bool,
    max_visible: usize,
    title: String,
    placeholder: String,
    keymap: ComboKeyMap,
    styles: ComboStyles,
}

impl<T: ComboItem> Default for ComboSelect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ComboItem> ComboSelect<T> {
    /// Creates an empty control.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            open: false,
            filter: String::new(),
            highlight: 0,
            offset: 0,
            focused: false,
            max_visible: 6,
            title: String::new(),
            placeholder: "nothing selected".to_string(),
            keymap: ComboKeyMap::default(),
            styles: ComboStyles::default(),
        }
    }

    /// Sets the option list.
    #[must_use]
    pub fn options(mut self, options: Vec<T>) -> Self {
        self.options = options;
        self
    }

    /// Sets the title line.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the text shown while nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets how many option rows are visible at once.
    #[must_use]
    pub fn max_visible(mut self, n: usize) -> Self {
        self.max_visible = n.max(1);
        self
    }

    /// Sets the styles.
    #[must_use]
    pub fn styles(mut self, styles: ComboStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings.
    #[must_use]
    pub fn keymap(mut self, keymap: ComboKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the option list, keeping UI state in range.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.clamp_view();
    }

    /// The full option list.
    #[must_use]
    pub fn option_items(&self) -> &[T] {
        &self.options
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the control has input focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The highlighted index into the filtered list.
    #[must_use]
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Gives the control input focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Removes input focus and closes the dropdown.
    ///
    /// The selection is the caller's and is not touched.
    pub fn blur(&mut self) {
        self.focused = false;
        self.open = false;
    }

    /// Returns the control to its initial presentation state: closed,
    /// empty filter, highlight at the top. Focus and the caller's
    /// selection are untouched.
    pub fn reset(&mut self) {
        self.open = false;
        self.filter.clear();
        self.highlight = 0;
        self.offset = 0;
    }

    /// Flips open/closed. Opening resets the highlight to the top.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.open = false;
        } else {
            self.open_list();
        }
    }

    fn open_list(&mut self) {
        self.open = true;
        self.highlight = 0;
        self.offset = 0;
    }

    /// Indices into the option list whose labels contain the filter text,
    /// case-insensitively, in original order.
    fn filtered_indices(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.options.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.label().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    /// The labels currently visible through the filter, in order.
    #[must_use]
    pub fn filtered_labels(&self) -> Vec<&str> {
        self.filtered_indices()
            .into_iter()
            .map(|i| self.options[i].label())
            .collect()
    }

    /// Moves the highlight by `delta`, clamped to the filtered list. No
    /// wraparound.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.filtered_len();
        if len == 0 {
            self.highlight = 0;
            self.offset = 0;
            return;
        }
        let max = len - 1;
        let next = self.highlight.saturating_add_signed(delta).min(max);
        self.highlight = next;
        self.scroll_to_highlight(len);
    }

    fn scroll_to_highlight(&mut self, len: usize) {
        if self.highlight < self.offset {
            self.offset = self.highlight;
        } else if self.highlight >= self.offset + self.max_visible {
            self.offset = self.highlight + 1 - self.max_visible;
        }
        self.offset = self.offset.min(len.saturating_sub(self.max_visible));
    }

    fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.clamp_view();
    }

    fn pop_filter(&mut self) {
        self.filter.pop();
        self.clamp_view();
    }

    fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.clamp_view();
    }

    /// Re-clamps the highlight and scroll window after the filtered list
    /// changed shape.
    fn clamp_view(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            self.highlight = 0;
            self.offset = 0;
            return;
        }
        self.highlight = self.highlight.min(len - 1);
        self.scroll_to_highlight(len);
    }

    /// Toggles the highlighted option into the selection.
    ///
    /// Returns the replacement selection, or `None` when nothing changed
    /// (empty filtered list, or single-mode re-pick of the current value).
    #[must_use]
    pub fn select_highlighted(&self, value: &Selection<T>) -> Option<Selection<T>> {
        let filtered = self.filtered_indices();
        let opt_idx = *filtered.get(self.highlight)?;
        value.toggle(&self.options[opt_idx])
    }

    /// Handles a key or terminal-blur message. Returns the replacement
    /// selection when the input changed it.
    pub fn update(&mut self, value: &Selection<T>, msg: &Message) -> Option<Selection<T>> {
        if msg.is::<BlurMsg>() {
            self.open = false;
            return None;
        }
        if !self.focused {
            return None;
        }
        let key = msg.downcast_ref::<KeyMsg>()?;

        if !self.open {
            if matches_one(key, &self.keymap.toggle)
                || matches_one(key, &self.keymap.up)
                || matches_one(key, &self.keymap.down)
            {
                self.open_list();
            } else if key.key_type == KeyType::Runes {
                self.open_list();
                for &c in &key.runes {
                    self.push_filter(c);
                }
            }
            return None;
        }

        if matches_one(key, &self.keymap.toggle) {
            let next = self.select_highlighted(value);
            self.open = false;
            return next;
        }
        if matches_one(key, &self.keymap.up) {
            self.move_highlight(-1);
        } else if matches_one(key, &self.keymap.down) {
            self.move_highlight(1);
        } else if matches_one(key, &self.keymap.close) {
            self.open = false;
        } else if matches_one(key, &self.keymap.clear_filter) {
            self.set_filter(String::new());
        } else {
            match key.key_type {
                KeyType::Runes => {
                    for &c in &key.runes {
                        self.push_filter(c);
                    }
                }
                KeyType::Backspace => self.pop_filter(),
                _ => {}
            }
        }
        None
    }

    /// Handles a mouse event in widget-local coordinates (the caller
    /// subtracts the widget's origin). Returns the replacement selection
    /// when the event changed it.
    pub fn on_mouse(&mut self, value: &Selection<T>, mouse: &MouseMsg) -> Option<Selection<T>> {
        if mouse.is_wheel() {
            if self.open {
                let delta = if mouse.button == MouseButton::WheelUp { -1 } else { 1 };
                self.move_highlight(delta);
            }
            return None;
        }

        let lay = self.layout(value);
        let (x, y) = (usize::from(mouse.x), usize::from(mouse.y));

        match mouse.action {
            MouseAction::Press if mouse.button == MouseButton::Left => {
                if y == lay.body_row {
                    // Glyph targets come first so their clicks never reach
                    // the body toggle underneath.
                    if let Some((start, end)) = lay.clear
                        && (start..end).contains(&x)
                    {
                        return Some(value.cleared());
                    }
                    if let Some((_, _, label)) = lay
                        .removes
                        .iter()
                        .find(|(start, end, _)| (*start..*end).contains(&x))
                    {
                        return value.without(label);
                    }
                    self.toggle_open();
                    return None;
                }

                let first = lay.first_option_row?;
                if y >= first && y < first + lay.option_rows {
                    let row = self.offset + (y - first);
                    let filtered = self.filtered_indices();
                    let opt_idx = *filtered.get(row)?;
                    self.highlight = row;
                    let next = value.toggle(&self.options[opt_idx]);
                    self.open = false;
                    return next;
                }
                None
            }
            MouseAction::Motion => {
                let first = lay.first_option_row?;
                if y >= first && y < first + lay.option_rows {
                    let row = self.offset + (y - first);
                    if row < self.filtered_len() {
                        self.highlight = row;
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn body_pieces(&self, value: &Selection<T>) -> Vec<Piece> {
        let mut pieces = vec![Piece::Marker];
        if value.is_empty() {
            pieces.push(Piece::Placeholder(self.placeholder.clone()));
            return pieces;
        }
        match value {
            Selection::Single(Some(item)) => {
                pieces.push(Piece::Tag(item.label().to_string()));
                pieces.push(Piece::Gap("  "));
                pieces.push(Piece::Clear);
            }
            Selection::Multi(items) => {
                for item in items {
                    pieces.push(Piece::Tag(item.label().to_string()));
                    pieces.push(Piece::Gap(" "));
                    pieces.push(Piece::Remove(item.label().to_string()));
                    pieces.push(Piece::Gap("  "));
                }
                pieces.push(Piece::Clear);
            }
            Selection::Single(None) => {}
        }
        pieces
    }

    fn piece_text(&self, piece: &Piece) -> String {
        match piece {
            Piece::Marker => {
                if self.open {
                    self.styles.marker_open.value().to_string()
                } else {
                    self.styles.marker_closed.value().to_string()
                }
            }
            Piece::Placeholder(s) | Piece::Tag(s) => s.clone(),
            Piece::Remove(_) => self.styles.tag_remove.value().to_string(),
            Piece::Clear => self.styles.clear.value().to_string(),
            Piece::Gap(s) => (*s).to_string(),
        }
    }

    fn layout(&self, value: &Selection<T>) -> Layout {
        let title_rows = usize::from(!self.title.is_empty());
        let mut removes = Vec::new();
        let mut clear = None;

        let mut col = 0usize;
        for piece in self.body_pieces(value) {
            let w = self.piece_text(&piece).width();
            match piece {
                Piece::Remove(label) => removes.push((col, col + w, label)),
                Piece::Clear => clear = Some((col, col + w)),
                _ => {}
            }
            col += w;
        }

        let (first_option_row, option_rows) = if self.open {
            let visible = self
                .filtered_len()
                .saturating_sub(self.offset)
                .min(self.max_visible);
            (Some(title_rows + 2), visible)
        } else {
            (None, 0)
        };

        Layout {
            body_row: title_rows,
            first_option_row,
            option_rows,
            removes,
            clear,
        }
    }

    /// Renders the control for the given selection.
    #[must_use]
    pub fn view(&self, value: &Selection<T>) -> String {
        let mut out = String::new();

        if !self.title.is_empty() {
            out.push_str(&self.styles.title.render(&self.title));
            out.push('\n');
        }

        for piece in self.body_pieces(value) {
            let rendered = match &piece {
                Piece::Marker => {
                    if self.open {
                        self.styles.marker_open.render("")
                    } else {
                        self.styles.marker_closed.render("")
                    }
                }
                Piece::Placeholder(s) => self.styles.placeholder.render(s),
                Piece::Tag(s) => self.styles.tag.render(s),
                Piece::Remove(_) => self.styles.tag_remove.render(""),
                Piece::Clear => self.styles.clear.render(""),
                Piece::Gap(s) => (*s).to_string(),
            };
            out.push_str(&rendered);
        }

        if !self.open {
            return out;
        }

        out.push('\n');
        out.push_str(&self.styles.filter_prompt.render(""));
        out.push_str(&self.styles.filter_text.render(&self.filter));

        let filtered = self.filtered_indices();
        if filtered.is_empty() {
            out.push('\n');
            let hint = if self.options.is_empty() {
                "(no options)"
            } else {
                "(no matches)"
            };
            out.push_str(&self.styles.empty.render(hint));
            return out;
        }

        for (row, &opt_idx) in filtered
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.max_visible)
        {
            out.push('\n');
            let is_highlight = row == self.highlight;
            if is_highlight {
                out.push_str(&self.styles.cursor.render(""));
            } else {
                out.push_str(&self.styles.no_cursor.render(""));
            }

            let label = self.options[opt_idx].label();
            if matches!(value, Selection::Multi(_)) {
                if value.contains(label) {
                    out.push_str(&self.styles.selected_prefix.render(""));
                } else {
                    out.push_str(&self.styles.unselected_prefix.render(""));
                }
            }

            if is_highlight {
                out.push_str(&self.styles.highlighted.render(label));
            } else {
                out.push_str(&self.styles.option.render(label));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|&s| s.to_string()).collect()
    }

    fn combo(labels: &[&str]) -> ComboSelect<String> {
        let mut c = ComboSelect::new()
            .options(opts(labels))
            .styles(ComboStyles::base());
        c.focus();
        c
    }

    fn key(kt: KeyType) -> Message {
        Message::new(KeyMsg::from_type(kt))
    }

    #[test]
    fn opening_resets_highlight() {
        let mut c = combo(&["a", "b", "c"]);
        let sel = Selection::multi();

        c.update(&sel, &key(KeyType::Enter));
        assert!(c.is_open());
        c.move_highlight(2);
        assert_eq!(c.highlight(), 2);

        c.update(&sel, &key(KeyType::Esc));
        assert!(!c.is_open());
        assert_eq!(c.highlight(), 2);

        c.update(&sel, &key(KeyType::Down));
        assert!(c.is_open());
        assert_eq!(c.highlight(), 0);
    }

    #[test]
    fn highlight_clamps_no_wraparound() {
        let mut c = combo(&["a", "b", "c"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));

        c.update(&sel, &key(KeyType::Up));
        assert_eq!(c.highlight(), 0);

        for _ in 0..10 {
            c.update(&sel, &key(KeyType::Down));
        }
        assert_eq!(c.highlight(), 2);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut c = combo(&["charmander", "squirtle", "charizard"]);
        c.set_filter("CHAR".to_string());
        assert_eq!(c.filtered_labels(), vec!["charmander", "charizard"]);
    }

    #[test]
    fn filter_edit_clamps_highlight() {
        let mut c = combo(&["charmander", "squirtle", "charizard", "pidgey"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));
        c.move_highlight(3);
        assert_eq!(c.highlight(), 3);

        for ch in "char".chars() {
            c.update(&sel, &Message::new(KeyMsg::from_char(ch)));
        }
        assert_eq!(c.filtered_labels().len(), 2);
        assert_eq!(c.highlight(), 1);
    }

    #[test]
    fn typing_while_closed_opens_and_filters() {
        let mut c = combo(&["charmander", "squirtle"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &Message::new(KeyMsg::from_char('s')));
        assert!(c.is_open());
        assert_eq!(c.filter(), "s");
    }

    #[test]
    fn unfocused_control_ignores_keys() {
        let mut c = combo(&["a"]);
        c.blur();
        let sel = Selection::<String>::multi();
        assert!(c.update(&sel, &key(KeyType::Enter)).is_none());
        assert!(!c.is_open());
    }

    #[test]
    fn terminal_blur_closes_dropdown() {
        let mut c = combo(&["a", "b"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));
        assert!(c.is_open());

        assert!(c.update(&sel, &Message::new(BlurMsg)).is_none());
        assert!(!c.is_open());
    }

    #[test]
    fn enter_selects_highlighted_and_closes() {
        let mut c = combo(&["a", "b", "c"]);
        let sel = Selection::<String>::multi();

        c.update(&sel, &key(KeyType::Enter));
        c.update(&sel, &key(KeyType::Down));
        let next = c.update(&sel, &key(KeyType::Enter)).unwrap();
        assert_eq!(next.labels(), vec!["b"]);
        assert!(!c.is_open());
    }

    #[test]
    fn single_mode_repick_emits_nothing() {
        let mut c = combo(&["a", "b"]);
        let sel = Selection::Single(Some("a".to_string()));

        c.update(&sel, &key(KeyType::Enter));
        // Highlight 0 is "a", the current value.
        assert!(c.update(&sel, &key(KeyType::Enter)).is_none());
        assert!(!c.is_open());
    }

    #[test]
    fn selection_survives_filtering_out() {
        let mut c = combo(&["charmander", "squirtle"]);
        let sel = Selection::Multi(vec!["squirtle".to_string()]);
        c.set_filter("char".to_string());
        assert_eq!(c.filtered_labels(), vec!["charmander"]);
        assert!(sel.contains("squirtle"));
        // The body line still shows the tag.
        let view = c.view(&sel);
        assert!(view.contains("squirtle"));
    }

    #[test]
    fn scroll_window_follows_highlight() {
        let mut c = ComboSelect::new()
            .options(opts(&["a", "b", "c", "d", "e", "f", "g", "h"]))
            .styles(ComboStyles::base())
            .max_visible(3);
        c.focus();
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));

        for _ in 0..5 {
            c.update(&sel, &key(KeyType::Down));
        }
        assert_eq!(c.highlight(), 5);
        assert_eq!(c.offset, 3);

        for _ in 0..5 {
            c.update(&sel, &key(KeyType::Up));
        }
        assert_eq!(c.highlight(), 0);
        assert_eq!(c.offset, 0);
    }

    #[test]
    fn empty_options_render_gracefully() {
        let mut c = combo(&[]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));
        let view = c.view(&sel);
        assert!(view.contains("(no options)"));
        assert!(c.update(&sel, &key(KeyType::Enter)).is_none());
    }

    #[test]
    fn clear_glyph_click_clears_without_toggling_open() {
        let mut c = combo(&["alpha", "beta"]);
        let sel = Selection::Multi(vec!["alpha".to_string()]);

        // Body: "▸ " (2) "alpha" (5) " " (1) "×" (1) "  " (2) "⊗"
        let next = c.on_mouse(&sel, &MouseMsg::click(11, 0)).unwrap();
        assert!(next.is_empty());
        assert!(!c.is_open());
    }

    #[test]
    fn body_click_toggles_open() {
        let mut c = combo(&["alpha"]);
        let sel = Selection::<String>::multi();
        assert!(c.on_mouse(&sel, &MouseMsg::click(3, 0)).is_none());
        assert!(c.is_open());
        assert!(c.on_mouse(&sel, &MouseMsg::click(3, 0)).is_none());
        assert!(!c.is_open());
    }

    #[test]
    fn hover_sets_highlight() {
        let mut c = combo(&["a", "b", "c"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));

        // Rows: 0 body, 1 filter, 2.. options.
        c.on_mouse(&sel, &MouseMsg::motion(4, 4));
        assert_eq!(c.highlight(), 2);
    }

    #[test]
    fn option_click_selects_and_closes() {
        let mut c = combo(&["a", "b", "c"]);
        let sel = Selection::<String>::multi();
        c.update(&sel, &key(KeyType::Enter));

        let next = c.on_mouse(&sel, &MouseMsg::click(4, 3)).unwrap();
        assert_eq!(next.labels(), vec!["b"]);
        assert!(!c.is_open());
    }

    #[test]
    fn tag_remove_click_removes_only_that_tag() {
        let mut c = combo(&["alpha", "beta"]);
        let sel = Selection::Multi(vec!["alpha".to_string(), "beta".to_string()]);

        // Body: "▸ alpha ×  beta ×  ⊗" — alpha's × sits at column 8.
        let next = c.on_mouse(&sel, &MouseMsg::click(8, 0)).unwrap();
        assert_eq!(next.labels(), vec!["beta"]);
        assert!(!c.is_open());
    }
}
