//! The blocking HTTP client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::model::{ListResponse, Profile, SpeciesRef};

/// Error fetching from the API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport or decode failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api error ({status}) for {path}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Path of the failed request.
        path: String,
    },
}

/// Fetches rosters and profiles from a PokeAPI-compatible server.
pub struct DexClient {
    http: Client,
    base_url: String,
}

impl DexClient {
    /// Create a client against the given API base URL
    /// (e.g. `https://pokeapi.co/api/v2`).
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the roster listing: an ordered sequence of species, at most
    /// `limit` entries.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, and undecodable
    /// bodies. Callers log and degrade to an empty roster.
    pub fn list(&self, limit: usize) -> Result<Vec<SpeciesRef>, FetchError> {
        let path = format!("/pokemon?limit={limit}");
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching roster");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                path,
            });
        }

        let list: ListResponse = response.json()?;
        Ok(list.results)
    }

    /// Fetch the detail profile for one Pokemon by name.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, and undecodable
    /// bodies. Callers treat a failure as a missing entry.
    pub fn profile(&self, name: &str) -> Result<Profile, FetchError> {
        let path = format!("/pokemon/{}", name.to_lowercase());
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching profile");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                path,
            });
        }

        Ok(response.json()?)
    }
}
