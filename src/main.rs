//! coord-step CLI.
//!
//! Berechnet Distanzen, Einzelschritte und vollständige Wege zwischen zwei
//! 2D-Koordinaten und gibt das Ergebnis als JSON aus.

use clap::Parser;
use coord_step::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        let args = Cli::parse();

        // Logger initialisieren
        let level = if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();

        log::debug!("coord-step v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = args.load_options();
        let output = cli::run(&args.command, &options)?;
        println!("{output}");
        Ok(())
    }
}
