//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal trainer registration: name yourself, pick exactly four Pokemon.
#[derive(Debug, Parser)]
#[command(name = "teampick", version, about)]
pub struct Cli {
    /// API base URL.
    #[arg(long, env = "POKEAPI_URL", default_value = "https://pokeapi.co/api/v2")]
    pub base_url: String,

    /// Maximum roster entries to fetch.
    #[arg(long, default_value_t = 151)]
    pub limit: usize,

    /// Append logs to this file (the terminal itself is busy).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
}
