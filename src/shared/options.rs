//! Zentrale Konfiguration für coord-step.
//!
//! `PathOptions` enthält die Standardwerte für Schritte und Wege: Schrittweite,
//! Schritt-Methode und das Schritt-Limit, entweder abgeleitet aus
//! `step_limit_factor`/`step_limit_slack` oder fest über `max_steps`.
//! Fehlende Felder fallen auf die Core-Defaults zurück.

use crate::core::{StepLimit, StepMethod, StepMethodKind, WalkOptions, DEFAULT_MARKS};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "coord_step.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Standardwerte für Schritte und Wege.
/// Wird als `coord_step.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Schrittweite in Marks
    pub marks: f64,
    /// Schritt-Methode für Wege
    pub method: StepMethodKind,
    /// Multiplikator für das abgeleitete Schritt-Limit
    pub step_limit_factor: usize,
    /// Zuschlag für das abgeleitete Schritt-Limit
    pub step_limit_slack: usize,
    /// Feste Obergrenze; ersetzt das abgeleitete Limit wenn gesetzt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            marks: DEFAULT_MARKS,
            method: StepMethodKind::default(),
            step_limit_factor: StepLimit::DEFAULT_FACTOR,
            step_limit_slack: StepLimit::DEFAULT_SLACK,
            max_steps: None,
        }
    }
}

impl PathOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::debug!("Weg-Optionen aus {} übernommen", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!(
                        "Weg-Optionen in {} unlesbar, nutze Defaults (marks {}): {}",
                        path.display(),
                        DEFAULT_MARKS,
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("Keine Weg-Optionen unter {}, nutze Defaults", path.display());
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("coord-step"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Schritt-Limit aus `max_steps` bzw. Faktor und Zuschlag.
    pub fn step_limit(&self) -> StepLimit {
        match self.max_steps {
            Some(limit) => StepLimit::Fixed(limit),
            None => StepLimit::Derived {
                factor: self.step_limit_factor,
                slack: self.step_limit_slack,
            },
        }
    }

    /// Optionen für [`crate::walk`].
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            marks: self.marks,
            step_limit: self.step_limit(),
        }
    }

    /// Konfigurierte Schritt-Methode.
    pub fn step_method(&self) -> StepMethod<'static> {
        self.method.into()
    }
}
