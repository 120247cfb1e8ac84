//! The application model: routing, submit flow, and layout.
//!
//! One focused field at a time, huh-style: focus moves on Tab/Shift+Tab
//! (fields ask via `NextFieldMsg`/`PrevFieldMsg` commands), moving focus
//! blurs the old field, which also closes the team picker's dropdown.
//!
//! Submission validates every field, then fires one detail-fetch command
//! per selected Pokemon. The commands run concurrently and complete in any
//! order; a failed fetch becomes a missing entry. When the countdown hits
//! zero the overlay opens with whatever arrived and the form resets.

use std::sync::Arc;

use tracing::{error, info, warn};

use teampick_dex::{DexClient, Profile};
use teampick_tui::{BlurMsg, Cmd, KeyMsg, KeyType, Message, Model, MouseMsg, batch};

use crate::fields::{NameInput, TeamField};
use crate::form::{Field, validate_name};
use crate::messages::{NextFieldMsg, PrevFieldMsg, ProfileMsg, RosterMsg};
use crate::overlay::TeamOverlay;
use crate::theme::Theme;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum roster entries to fetch.
    pub limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { limit: 151 }
    }
}

/// A completed submission, kept for the post-exit summary.
#[derive(Debug)]
pub struct Submission {
    /// "First Last".
    pub trainer: String,
    /// Successfully fetched team members, in selection order.
    pub profiles: Vec<Profile>,
    /// Names whose detail fetch failed.
    pub missing: Vec<String>,
}

/// In-flight detail fetches after a submit.
struct FetchState {
    pending: usize,
    order: Vec<String>,
    fetched: Vec<Profile>,
    missing: Vec<String>,
    trainer: String,
}

enum Phase {
    /// Waiting for the roster.
    Loading,
    /// The form is interactive.
    Form,
    /// Submitted; waiting for the per-Pokemon fetch countdown.
    Fetching(FetchState),
}

/// Field focus order.
const FOCUS_FIRST: usize = 0;
const FOCUS_LAST: usize = 1;
const FOCUS_TEAM: usize = 2;
const FOCUS_SUBMIT: usize = 3;

enum BlockId {
    Chrome,
    First,
    Last,
    Team,
    Submit,
}

/// The top-level model.
pub struct App {
    client: Arc<DexClient>,
    config: AppConfig,
    theme: Theme,
    phase: Phase,
    roster_error: Option<String>,
    first: NameInput,
    last: NameInput,
    team: TeamField,
    focus: usize,
    overlay: TeamOverlay,
    submission: Option<Submission>,
}

impl App {
    /// Create the app against the given API client.
    #[must_use]
    pub fn new(config: AppConfig, client: DexClient) -> Self {
        let mut first = NameInput::new("First Name", "First Name", validate_name);
        first.focus();

        Self {
            client: Arc::new(client),
            config,
            theme: Theme::default(),
            phase: Phase::Loading,
            roster_error: None,
            first,
            last: NameInput::new("Last Name", "Last Name", validate_name),
            team: TeamField::new(),
            focus: FOCUS_FIRST,
            overlay: TeamOverlay::new(),
            submission: None,
        }
    }

    /// Overrides the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The last completed submission, if any.
    #[must_use]
    pub fn submitted(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// The results overlay.
    #[must_use]
    pub fn overlay(&self) -> &TeamOverlay {
        &self.overlay
    }

    fn focused_field_mut(&mut self) -> Option<&mut dyn Field> {
        match self.focus {
            FOCUS_FIRST => Some(&mut self.first),
            FOCUS_LAST => Some(&mut self.last),
            FOCUS_TEAM => Some(&mut self.team),
            _ => None,
        }
    }

    fn focus_field(&mut self, idx: usize) {
        if idx == self.focus {
            return;
        }
        if let Some(field) = self.focused_field_mut() {
            field.blur();
        }
        self.focus = idx.min(FOCUS_SUBMIT);
        if let Some(field) = self.focused_field_mut() {
            field.focus();
        }
    }

    fn focus_next(&mut self) {
        self.focus_field((self.focus + 1).min(FOCUS_SUBMIT));
    }

    fn focus_prev(&mut self) {
        self.focus_field(self.focus.saturating_sub(1));
    }

    /// Validate everything and, if clean, fire the concurrent detail
    /// fetches.
    fn submit(&mut self) -> Option<Cmd> {
        if matches!(self.phase, Phase::Fetching(_)) {
            return None;
        }
        self.first.validate();
        self.last.validate();
        self.team.validate();
        if self.first.error().is_some()
            || self.last.error().is_some()
            || self.team.error().is_some()
        {
            return None;
        }

        let trainer = format!("{} {}", self.first.value(), self.last.value());
        let order: Vec<String> = self
            .team
            .selection()
            .labels()
            .into_iter()
            .map(str::to_string)
            .collect();
        info!(%trainer, team = ?order, "submitting");

        let cmds = order
            .iter()
            .map(|name| {
                let client = Arc::clone(&self.client);
                let name = name.clone();
                Some(Cmd::new(move || {
                    match client.profile(&name) {
                        Ok(profile) => ProfileMsg {
                            name,
                            result: Some(profile),
                        },
                        Err(err) => {
                            warn!(%name, %err, "profile fetch failed");
                            ProfileMsg { name, result: None }
                        }
                    }
                    .into_message()
                }))
            })
            .collect();

        self.phase = Phase::Fetching(FetchState {
            pending: order.len(),
            order,
            fetched: Vec::new(),
            missing: Vec::new(),
            trainer,
        });
        batch(cmds)
    }

    fn on_profile(&mut self, msg: ProfileMsg) {
        let Phase::Fetching(state) = &mut self.phase else {
            return;
        };

        match msg.result {
            Some(profile) => state.fetched.push(profile),
            None => state.missing.push(msg.name),
        }
        state.pending = state.pending.saturating_sub(1);
        if state.pending > 0 {
            return;
        }

        if let Phase::Fetching(mut state) = std::mem::replace(&mut self.phase, Phase::Form) {
            // Results arrive in completion order; present them in the
            // order they were picked.
            let order = state.order;
            let position = |name: &str| order.iter().position(|n| n == name);
            state
                .fetched
                .sort_by_key(|p| position(&p.name).unwrap_or(usize::MAX));
            state.missing.sort_by_key(|n| position(n).unwrap_or(usize::MAX));

            self.overlay.open(
                state.trainer.clone(),
                state.fetched.clone(),
                state.missing.clone(),
            );
            self.submission = Some(Submission {
                trainer: state.trainer,
                profiles: state.fetched,
                missing: state.missing,
            });

            // The form comes back blank for the next trainer.
            self.first.reset();
            self.last.reset();
            self.team.reset();
            self.focus_field(FOCUS_FIRST);
        }
    }

    fn on_roster(&mut self, msg: RosterMsg) {
        match msg {
            RosterMsg::Loaded(roster) => {
                info!(count = roster.len(), "roster loaded");
                self.team.set_roster(roster);
            }
            RosterMsg::Failed(err) => {
                error!(%err, "roster fetch failed");
                self.roster_error = Some(err);
                self.team.set_roster(Vec::new());
            }
        }
        self.phase = Phase::Form;
    }

    fn view_blocks(&self) -> Vec<(BlockId, String)> {
        let mut chrome = self.theme.title.render("teampick");
        chrome.push('\n');
        chrome.push_str(
            &self
                .theme
                .subtitle
                .render("register a trainer and pick exactly four pokemon"),
        );
        if self.roster_error.is_some() {
            chrome.push('\n');
            chrome.push_str(
                &self
                    .theme
                    .warn
                    .render("roster unavailable — continuing with an empty list"),
            );
        }

        let submit_focused = self.focus == FOCUS_SUBMIT;
        let button = if submit_focused {
            self.theme.button_focused.render("[ Submit ]")
        } else {
            self.theme.button_blurred.render("[ Submit ]")
        };
        let mut submit = button;
        if let Phase::Fetching(state) = &self.phase {
            submit.push('\n');
            submit.push_str(
                &self
                    .theme
                    .status
                    .render(&format!("fetching team details ({} left)…", state.pending)),
            );
        }
        submit.push('\n');
        submit.push_str(
            &self
                .theme
                .help
                .render("tab: next • enter: select • ctrl+c: quit"),
        );

        vec![
            (BlockId::Chrome, chrome),
            (BlockId::First, self.first.view(&self.theme)),
            (BlockId::Last, self.last.view(&self.theme)),
            (BlockId::Team, self.team.view(&self.theme)),
            (BlockId::Submit, submit),
        ]
    }

    fn route_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        let mut y = usize::from(mouse.y);

        for (id, text) in self.view_blocks() {
            let lines = text.lines().count().max(1);
            if y < lines {
                return match id {
                    BlockId::Chrome => None,
                    BlockId::First => {
                        if mouse.is_click() {
                            self.focus_field(FOCUS_FIRST);
                        }
                        None
                    }
                    BlockId::Last => {
                        if mouse.is_click() {
                            self.focus_field(FOCUS_LAST);
                        }
                        None
                    }
                    BlockId::Team => {
                        if mouse.is_click() {
                            self.focus_field(FOCUS_TEAM);
                        }
                        let local = MouseMsg {
                            y: u16::try_from(y).unwrap_or(u16::MAX),
                            ..*mouse
                        };
                        self.team.on_mouse(&local)
                    }
                    BlockId::Submit => {
                        if mouse.is_click() {
                            self.focus_field(FOCUS_SUBMIT);
                            self.submit()
                        } else {
                            None
                        }
                    }
                };
            }
            // One blank separator line between blocks.
            y = y.checked_sub(lines + 1)?;
        }
        None
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        let client = Arc::clone(&self.client);
        let limit = self.config.limit;
        Some(Cmd::new(move || {
            match client.list(limit) {
                Ok(roster) => RosterMsg::Loaded(roster),
                Err(err) => RosterMsg::Failed(err.to_string()),
            }
            .into_message()
        }))
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if msg.is::<RosterMsg>() {
            if let Some(roster) = msg.downcast::<RosterMsg>() {
                self.on_roster(roster);
            }
            return None;
        }
        if msg.is::<ProfileMsg>() {
            if let Some(profile) = msg.downcast::<ProfileMsg>() {
                self.on_profile(profile);
            }
            return None;
        }

        // The overlay captures all input while open.
        if self.overlay.is_open() {
            self.overlay.update(&msg);
            return None;
        }

        if msg.is::<NextFieldMsg>() {
            self.focus_next();
            return None;
        }
        if msg.is::<PrevFieldMsg>() {
            self.focus_prev();
            return None;
        }

        if msg.is::<BlurMsg>() {
            // Terminal blur closes the team dropdown wherever focus is.
            self.team.update(&msg);
            return None;
        }

        if matches!(self.phase, Phase::Loading) {
            return None;
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.route_mouse(mouse);
        }

        if self.focus == FOCUS_SUBMIT {
            let key = msg.downcast_ref::<KeyMsg>()?;
            return match key.key_type {
                KeyType::Enter | KeyType::Space => self.submit(),
                KeyType::ShiftTab => {
                    self.focus_prev();
                    None
                }
                _ => None,
            };
        }

        self.focused_field_mut()?.update(&msg)
    }

    fn view(&self) -> String {
        if self.overlay.is_open() {
            return self.overlay.view(&self.theme);
        }

        if matches!(self.phase, Phase::Loading) {
            let mut out = self.theme.title.render("teampick");
            out.push_str("\n\n");
            out.push_str(&self.theme.status.render("fetching the roster…"));
            return out;
        }

        self.view_blocks()
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
