#![forbid(unsafe_code)]

//! # teampick
//!
//! A terminal form: register a trainer (first and last name), pick exactly
//! four Pokemon from a remotely fetched roster with a searchable
//! multi-select, and get an overlay of the fetched team details.
//!
//! The binary wires four pieces together:
//! - `teampick-tui`: the Elm-style runtime and event loop
//! - `teampick-combo`: the combo select control the team field embeds
//! - `teampick-dex`: the PokeAPI client
//! - this crate: the form shell, submit flow, overlay, and CLI

pub mod app;
pub mod cli;
pub mod fields;
pub mod form;
pub mod messages;
pub mod overlay;
pub mod theme;

pub use app::{App, AppConfig, Submission};
pub use cli::Cli;
pub use theme::Theme;
