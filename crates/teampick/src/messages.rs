//! Message taxonomy for the application.

use teampick_dex::{Profile, SpeciesRef};
use teampick_tui::Message;

/// Result of the initial roster fetch.
#[derive(Debug)]
pub enum RosterMsg {
    /// The ordered roster arrived.
    Loaded(Vec<SpeciesRef>),
    /// The fetch failed; the form degrades to an empty option list.
    Failed(String),
}

impl RosterMsg {
    /// Wrap into a runtime message.
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

/// Result of one per-Pokemon detail fetch after submission.
///
/// Fetches run concurrently; these arrive in any order. A failed fetch
/// carries `None` and becomes a missing entry, not an abort.
#[derive(Debug)]
pub struct ProfileMsg {
    /// Which Pokemon this answers for.
    pub name: String,
    /// The profile, or `None` when the fetch failed.
    pub result: Option<Profile>,
}

impl ProfileMsg {
    /// Wrap into a runtime message.
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

/// Move focus to the next form field.
#[derive(Debug, Clone, Copy)]
pub struct NextFieldMsg;

/// Move focus to the previous form field.
#[derive(Debug, Clone, Copy)]
pub struct PrevFieldMsg;
