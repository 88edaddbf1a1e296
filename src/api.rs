//! Öffentliche Einstiegspunkte.
//!
//! Jede Funktion normalisiert beide Koordinaten genau einmal und delegiert
//! dann an die reinen Funktionen aus `core`. Weitere Argumente (`marks`,
//! Schritt-Methode, Limit) werden nicht verändert, nur geprüft.

use crate::core::{
    distance_between, int_step_towards, normalize_pair, step_towards, validate_marks, walk_path,
    CoordError, Coordinate, RawCoordinate, StepMethod, WalkOptions,
};

/// Distanz zwischen zwei Roh-Koordinaten.
///
/// ```
/// assert_eq!(coord_step::distance((0, 0), (3, 4)).unwrap(), 5.0);
/// ```
pub fn distance(
    a: impl Into<RawCoordinate>,
    b: impl Into<RawCoordinate>,
) -> Result<f64, CoordError> {
    let (a, b) = normalize_pair(a, b)?;
    Ok(distance_between(a, b))
}

/// Punkt `marks` von `a` entfernt in Richtung `b` (oder `b`, wenn näher).
pub fn step(
    a: impl Into<RawCoordinate>,
    b: impl Into<RawCoordinate>,
    marks: f64,
) -> Result<Coordinate, CoordError> {
    let (a, b) = normalize_pair(a, b)?;
    let marks = validate_marks(marks)?;
    Ok(step_towards(a, b, marks))
}

/// Wie [`step`], mit auf ganze Zahlen gerundeten Komponenten.
pub fn int_step(
    a: impl Into<RawCoordinate>,
    b: impl Into<RawCoordinate>,
    marks: f64,
) -> Result<Coordinate, CoordError> {
    let (a, b) = normalize_pair(a, b)?;
    let marks = validate_marks(marks)?;
    Ok(int_step_towards(a, b, marks))
}

/// Alle Punkte von `a` bis `b` (inklusive), erzeugt mit `method`.
///
/// ```
/// use coord_step::{walk, StepMethod, WalkOptions};
///
/// let path = walk((0, 0), (2, 10), StepMethod::Integer, &WalkOptions::default()).unwrap();
/// assert_eq!(path.len(), 11);
/// ```
pub fn walk(
    a: impl Into<RawCoordinate>,
    b: impl Into<RawCoordinate>,
    method: StepMethod<'_>,
    options: &WalkOptions,
) -> Result<Vec<Coordinate>, CoordError> {
    let (a, b) = normalize_pair(a, b)?;
    let marks = validate_marks(options.marks)?;
    walk_path(a, b, method, marks, options.step_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    #[test]
    fn test_entry_points_accept_numeric_strings() {
        assert_eq!(distance(("0", "0"), ("3", 4)).unwrap(), 5.0);
        assert_eq!(step((0, 0), ("5", "0"), 3.0).unwrap(), DVec2::new(3.0, 0.0));
        assert_eq!(
            int_step(("0", 0), (5, "5"), 2.0).unwrap(),
            DVec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_single_diagonal_step() {
        let next = step((0, 0), (5, 5), 1.0).unwrap();
        assert_relative_eq!(next.x, 0.7071067811865476, epsilon = 1e-12);
        assert_relative_eq!(next.y, 0.7071067811865476, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_coordinate_aborts_every_entry_point() {
        let expected = CoordError::InvalidCoordinateValue("abc".to_string());
        assert_eq!(distance(("abc", 0), (1, 1)), Err(expected.clone()));
        assert_eq!(step((0, 0), (1, "abc"), 1.0), Err(expected.clone()));
        assert_eq!(int_step(("abc", 0), (1, 1), 1.0), Err(expected.clone()));
        assert_eq!(
            walk(("abc", 0), (1, 1), StepMethod::default(), &WalkOptions::default()),
            Err(expected)
        );
    }

    #[test]
    fn test_non_positive_marks_are_rejected() {
        assert_eq!(step((0, 0), (5, 0), 0.0), Err(CoordError::InvalidMarks(0.0)));
        assert_eq!(
            int_step((0, 0), (5, 0), -1.0),
            Err(CoordError::InvalidMarks(-1.0))
        );
        let result = walk(
            (0, 0),
            (5, 0),
            StepMethod::Continuous,
            &WalkOptions::with_marks(0.0),
        );
        assert_eq!(result, Err(CoordError::InvalidMarks(0.0)));
    }

    #[test]
    fn test_coordinates_are_checked_before_marks() {
        assert!(matches!(
            step(("x", 0), (5, 0), 0.0),
            Err(CoordError::InvalidCoordinateValue(_))
        ));
    }

    #[test]
    fn test_walk_accepts_normalized_coordinates() {
        let a = DVec2::new(0.5, 0.5);
        let path = walk(a, (0.5, 3.5), StepMethod::default(), &WalkOptions::default()).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], a);
        assert_eq!(path[3], DVec2::new(0.5, 3.5));
    }
}
