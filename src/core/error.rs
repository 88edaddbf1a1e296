//! Fehlertypen der Koordinaten-Berechnungen.

use super::coordinate::Coordinate;

/// Fehler beim Normalisieren von Eingaben oder beim Ablaufen eines Weges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Eine Koordinaten-Komponente ließ sich nicht als endliche Zahl lesen.
    /// Enthält den ursprünglichen Roh-Wert.
    #[error("Coordinate values must be convertible to floats, not {0}")]
    InvalidCoordinateValue(String),

    /// Schrittweite ist nicht positiv oder nicht endlich.
    #[error("Mark distance must be a positive finite number, not {0}")]
    InvalidMarks(f64),

    /// Die Schritt-Methode hat das Ziel nicht innerhalb des Limits erreicht.
    #[error("Walk did not reach its destination within {limit} steps (stopped at {last})")]
    StepLimitExceeded {
        /// Maximale Anzahl erlaubter Schritte
        limit: usize,
        /// Zuletzt erreichte Position
        last: Coordinate,
    },
}
