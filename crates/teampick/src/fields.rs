//! The concrete form fields: trainer name inputs and the team picker.

use teampick_combo::{ComboItem, ComboSelect, Selection};
use teampick_dex::SpeciesRef;
use teampick_tui::{Cmd, KeyMsg, KeyType, Message, MouseMsg};

use crate::form::{Field, validate_team};
use crate::messages::{NextFieldMsg, PrevFieldMsg};
use crate::theme::Theme;

/// A selectable roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// The Pokemon's name, unique within the roster.
    pub name: String,
}

impl Pokemon {
    /// Build from a bare name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<SpeciesRef> for Pokemon {
    fn from(species: SpeciesRef) -> Self {
        Self { name: species.name }
    }
}

impl ComboItem for Pokemon {
    fn label(&self) -> &str {
        &self.name
    }
}

/// A single-line text input with inline validation.
pub struct NameInput {
    title: String,
    placeholder: String,
    value: String,
    cursor: usize,
    focused: bool,
    error: Option<String>,
    validate: fn(&str) -> Option<String>,
}

impl NameInput {
    /// Create an input with a title, placeholder, and validator.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        placeholder: impl Into<String>,
        validate: fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            focused: false,
            error: None,
            validate,
        }
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clears the value, cursor, and error.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

impl Field for NameInput {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if !self.focused {
            return None;
        }
        let key = msg.downcast_ref::<KeyMsg>()?;

        match key.key_type {
            KeyType::Enter | KeyType::Tab => {
                self.validate();
                if self.error.is_some() {
                    return None;
                }
                return Some(Cmd::new(|| Message::new(NextFieldMsg)));
            }
            KeyType::ShiftTab => {
                return Some(Cmd::new(|| Message::new(PrevFieldMsg)));
            }
            KeyType::Runes => {
                self.error = None;
                for &c in &key.runes {
                    let at = self.byte_index(self.cursor);
                    self.value.insert(at, c);
                    self.cursor += 1;
                }
            }
            KeyType::Backspace => {
                self.error = None;
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyType::Delete => {
                self.error = None;
                if self.cursor < self.char_len() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyType::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyType::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyType::Home | KeyType::CtrlA => self.cursor = 0,
            KeyType::End | KeyType::CtrlE => self.cursor = self.char_len(),
            KeyType::CtrlU => {
                self.error = None;
                self.value.clear();
                self.cursor = 0;
            }
            _ => {}
        }
        None
    }

    fn view(&self, theme: &Theme) -> String {
        let mut out = theme.label.render(&self.title);
        out.push('\n');

        if self.focused {
            out.push_str(&theme.prompt_focused.render(""));
        } else {
            out.push_str(&theme.prompt_blurred.render(""));
        }

        if self.value.is_empty() {
            out.push_str(&theme.placeholder.render(&self.placeholder));
        } else {
            out.push_str(&theme.input_text.render(&self.value));
        }

        if let Some(err) = &self.error {
            out.push('\n');
            out.push_str(&theme.error.render(&format!("* {err}")));
        }
        out
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
        self.validate();
    }

    fn validate(&mut self) {
        self.error = (self.validate)(&self.value);
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// The team picker: a combo select whose selection this field owns.
///
/// The combo itself is controlled — it never stores the selection; this
/// field passes the value in and applies whatever comes back.
pub struct TeamField {
    combo: ComboSelect<Pokemon>,
    selection: Selection<Pokemon>,
    error: Option<String>,
}

impl Default for TeamField {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamField {
    /// Create the field with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            combo: ComboSelect::new()
                .title("Pokemon team (pick exactly 4)")
                .placeholder("no pokemon selected")
                .max_visible(6),
            selection: Selection::multi(),
            error: None,
        }
    }

    /// Replaces the option roster.
    pub fn set_roster(&mut self, roster: Vec<SpeciesRef>) {
        self.combo
            .set_options(roster.into_iter().map(Pokemon::from).collect());
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<Pokemon> {
        &self.selection
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.combo.is_open()
    }

    /// Clears the selection and the combo's presentation state.
    pub fn reset(&mut self) {
        self.selection = self.selection.cleared();
        self.error = None;
        self.combo.reset();
    }
}

impl Field for TeamField {
    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if let Some(next) = self.combo.update(&self.selection, msg) {
            self.selection = next;
            self.error = None;
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        match key.key_type {
            KeyType::Tab => {
                self.validate();
                if self.error.is_some() {
                    return None;
                }
                Some(Cmd::new(|| Message::new(NextFieldMsg)))
            }
            KeyType::ShiftTab => Some(Cmd::new(|| Message::new(PrevFieldMsg))),
            _ => None,
        }
    }

    fn on_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        if let Some(next) = self.combo.on_mouse(&self.selection, mouse) {
            self.selection = next;
            self.error = None;
        }
        None
    }

    fn view(&self, theme: &Theme) -> String {
        let mut out = self.combo.view(&self.selection);
        if let Some(err) = &self.error {
            out.push('\n');
            out.push_str(&theme.error.render(&format!("* {err}")));
        }
        out
    }

    fn focus(&mut self) {
        self.combo.focus();
    }

    fn blur(&mut self) {
        self.combo.blur();
        self.validate();
    }

    fn validate(&mut self) {
        self.error = validate_team(&self.selection);
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
