#![forbid(unsafe_code)]

//! # teampick-dex
//!
//! A small PokeAPI client: the roster listing used to populate the team
//! picker, and per-Pokemon profiles fetched after submission.
//!
//! Failures are ordinary values ([`FetchError`]); callers are expected to
//! log and degrade (an empty roster, a missing profile) rather than abort.
//!
//! ## Example
//!
//! ```rust,no_run
//! use teampick_dex::DexClient;
//!
//! let client = DexClient::new("https://pokeapi.co/api/v2")?;
//! let roster = client.list(151)?;
//! let profile = client.profile(&roster[0].name)?;
//! println!("{} is {:?}", profile.name, profile.type_names());
//! # Ok::<(), teampick_dex::FetchError>(())
//! ```

mod client;
mod model;

pub use client::{DexClient, FetchError};
pub use model::{NamedRef, Profile, SpeciesRef, Sprites, TypeSlot};
