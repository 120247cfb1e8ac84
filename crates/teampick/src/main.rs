#![forbid(unsafe_code)]

//! # teampick
//!
//! Register a trainer and pick a Pokemon team in the terminal.
//!
//! ```bash
//! teampick                                  # against the live PokeAPI
//! teampick --limit 50                       # shorter roster
//! teampick --log-file /tmp/teampick.log     # with tracing output
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use teampick::{App, AppConfig, Cli};
use teampick_dex::DexClient;
use teampick_tui::Program;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let client = DexClient::new(&cli.base_url)?;
    let app = App::new(AppConfig { limit: cli.limit }, client);

    let final_app = Program::new(app)
        .with_alt_screen()
        .with_mouse()
        .with_report_focus()
        .with_fps(cli.fps)
        .run()?;

    if let Some(submission) = final_app.submitted() {
        println!("{} picked:", submission.trainer);
        for profile in &submission.profiles {
            let types = profile.type_names().join("/");
            println!("  #{:03} {} ({types})", profile.id, profile.name);
        }
        for name in &submission.missing {
            println!("  {name} (details unavailable)");
        }
    }

    Ok(())
}
