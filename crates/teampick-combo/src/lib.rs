#![forbid(unsafe_code)]

//! # teampick-combo
//!
//! A combo select control: a dropdown with a searchable option list,
//! keyboard navigation, and (in multi mode) tag-style removal of selected
//! values.
//!
//! The control is *controlled*: the caller owns the current [`Selection`]
//! and passes it into every operation; the control holds only ephemeral UI
//! state (open/closed, filter text, highlighted index). Operations that
//! change the selection return the replacement value instead of mutating
//! anything — the caller decides what to do with it.
//!
//! ## Example
//!
//! ```rust
//! use teampick_combo::{ComboSelect, Selection};
//! use teampick_tui::{KeyMsg, KeyType, Message};
//!
//! let mut combo = ComboSelect::new()
//!     .options(vec!["charmander".to_string(), "squirtle".to_string()])
//!     .placeholder("pick your team");
//! combo.focus();
//!
//! let mut team: Selection<String> = Selection::multi();
//!
//! // Enter opens the dropdown, Enter again selects the highlighted option.
//! for _ in 0..2 {
//!     if let Some(next) = combo.update(&team, &Message::new(KeyMsg::from_type(KeyType::Enter))) {
//!         team = next;
//!     }
//! }
//! assert_eq!(team.labels(), vec!["charmander"]);
//! ```

mod combo;
mod item;
mod selection;

pub use combo::{ComboKeyMap, ComboSelect, ComboStyles};
pub use item::ComboItem;
pub use selection::Selection;
