//! Reine Geometrie-Funktionen auf normalisierten Koordinaten.
//!
//! Keine Validierung: Aufrufer normalisieren vorher (siehe `api`).

use super::coordinate::Coordinate;
use super::error::CoordError;
use glam::DVec2;

/// Standard-Schrittweite in Marks.
pub const DEFAULT_MARKS: f64 = 1.0;

/// Euklidische Distanz zwischen zwei Koordinaten.
pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    (dx.powi(2) + dy.powi(2)).sqrt()
}

/// Berechnet den Punkt, der `marks` von `a` entfernt in Richtung `b` liegt.
///
/// Liegt `b` höchstens `marks` entfernt, wird `b` selbst zurückgegeben.
/// Die Richtung kommt aus `atan2`, damit alle Quadranten und
/// senkrechte/waagerechte Linien ohne Division abgedeckt sind.
pub fn step_towards(a: Coordinate, b: Coordinate, marks: f64) -> Coordinate {
    if distance_between(a, b) <= marks {
        return b;
    }
    let angle = (-(a.y - b.y)).atan2(-(a.x - b.x));
    DVec2::new(angle.cos() * marks + a.x, angle.sin() * marks + a.y)
}

/// Wie [`step_towards`], rundet aber beide Komponenten auf ganze Zahlen
/// (bei .5 zur geraden Zahl).
pub fn int_step_towards(a: Coordinate, b: Coordinate, marks: f64) -> Coordinate {
    let step = step_towards(a, b, marks);
    DVec2::new(step.x.round_ties_even(), step.y.round_ties_even())
}

/// Prüft die Schrittweite: nur positive, endliche Werte sind erlaubt.
pub fn validate_marks(marks: f64) -> Result<f64, CoordError> {
    if marks.is_finite() && marks > 0.0 {
        Ok(marks)
    } else {
        Err(CoordError::InvalidMarks(marks))
    }
}
