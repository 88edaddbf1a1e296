//! Command-Line Interface

use crate::core::{RawCoordinate, StepMethodKind};
use crate::shared::PathOptions;
use crate::{distance, int_step, step, walk};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// coord-step - Distanzen und Zwischenpunkte zwischen 2D-Koordinaten
#[derive(Parser, Debug)]
#[command(name = "coord-step")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options file path (default: coord_step.toml next to the binary)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Start- und Zielkoordinate als rohe Strings
#[derive(Args, Debug)]
pub struct Endpoints {
    /// Start X
    #[arg(allow_negative_numbers = true)]
    pub ax: String,
    /// Start Y
    #[arg(allow_negative_numbers = true)]
    pub ay: String,
    /// Destination X
    #[arg(allow_negative_numbers = true)]
    pub bx: String,
    /// Destination Y
    #[arg(allow_negative_numbers = true)]
    pub by: String,
}

impl Endpoints {
    fn start(&self) -> RawCoordinate {
        (self.ax.as_str(), self.ay.as_str()).into()
    }

    fn destination(&self) -> RawCoordinate {
        (self.bx.as_str(), self.by.as_str()).into()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Euclidean distance between two coordinates
    Distance {
        #[command(flatten)]
        points: Endpoints,
    },

    /// Single step from A towards B
    Step {
        #[command(flatten)]
        points: Endpoints,

        /// Step length (default from options file)
        #[arg(short, long)]
        marks: Option<f64>,
    },

    /// Single integer-rounded step from A towards B
    IntStep {
        #[command(flatten)]
        points: Endpoints,

        /// Step length (default from options file)
        #[arg(short, long)]
        marks: Option<f64>,
    },

    /// All points from A to B inclusive
    Walk {
        #[command(flatten)]
        points: Endpoints,

        /// Step length (default from options file)
        #[arg(short, long)]
        marks: Option<f64>,

        /// Step method: continuous or integer (default from options file)
        #[arg(long)]
        method: Option<StepMethodKind>,
    },

    /// Write the active options (from --config, the file next to the binary, or defaults) to a TOML file
    InitConfig {
        /// Target path of the TOML file
        path: PathBuf,
    },
}

impl Cli {
    /// Lädt die Optionen aus `--config` oder dem Standardpfad.
    pub fn load_options(&self) -> PathOptions {
        let path = self.config.clone().unwrap_or_else(PathOptions::config_path);
        PathOptions::load_from_file(&path)
    }
}

/// Führt ein Kommando aus und liefert die JSON-Ausgabe.
pub fn run(command: &Commands, options: &PathOptions) -> Result<String> {
    let output = match command {
        Commands::Distance { points } => {
            let d = distance(points.start(), points.destination())
                .context("Distanz nicht berechenbar")?;
            serde_json::to_string(&d)?
        }
        Commands::Step { points, marks } => {
            let next = step(
                points.start(),
                points.destination(),
                marks.unwrap_or(options.marks),
            )
            .context("Schritt nicht berechenbar")?;
            serde_json::to_string(&next)?
        }
        Commands::IntStep { points, marks } => {
            let next = int_step(
                points.start(),
                points.destination(),
                marks.unwrap_or(options.marks),
            )
            .context("Ganzzahl-Schritt nicht berechenbar")?;
            serde_json::to_string(&next)?
        }
        Commands::Walk {
            points,
            marks,
            method,
        } => {
            let mut walk_options = options.walk_options();
            if let Some(marks) = marks {
                walk_options.marks = *marks;
            }
            let method = method.unwrap_or(options.method);
            let path = walk(
                points.start(),
                points.destination(),
                method.into(),
                &walk_options,
            )
            .context("Weg nicht berechenbar")?;
            log::info!("Weg mit {} Punkten berechnet ({})", path.len(), method);
            serde_json::to_string(&path)?
        }
        Commands::InitConfig { path } => {
            options.save_to_file(path)?;
            serde_json::to_string(path).context("Pfad nicht als JSON darstellbar")?
        }
    };
    Ok(output)
}
