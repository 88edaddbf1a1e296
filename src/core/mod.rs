//! Core-Berechnungen: Normalisierung, Distanz, Einzelschritt und Wege.
//!
//! Alle Funktionen sind rein und arbeiten auf Werten; Normalisierung passiert
//! einmalig an der Grenze (siehe `api`).

pub mod coordinate;
pub mod error;
pub mod geometry;
pub mod walk;

pub use coordinate::{
    normalize, normalize_pair, normalize_value, Coordinate, RawCoordinate, RawValue,
};
pub use error::CoordError;
pub use geometry::{
    distance_between, int_step_towards, step_towards, validate_marks, DEFAULT_MARKS,
};
pub use walk::{expected_steps, walk_path, StepLimit, StepMethod, StepMethodKind, WalkOptions};
