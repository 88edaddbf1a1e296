//! Integrationstests für Distanz, Schritte und Wege über die öffentliche API:
//! - Normalisierung gemischter Eingaben
//! - Referenz-Wege kontinuierlich und ganzzahlig
//! - Abbruch bei ungültigen Marks und nicht konvergierenden Methoden

use approx::assert_relative_eq;
use coord_step::{distance, int_step, step, walk};
use coord_step::{CoordError, RawCoordinate, StepLimit, StepMethod, WalkOptions};
use glam::DVec2;

/// Pseudo-Zufallskoordinaten für Eigenschaftstests (deterministisch).
fn sample_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 101) as f64 * 0.73 - 30.0;
            let y = ((i * 53) % 89) as f64 * -0.41 + 12.5;
            DVec2::new(x, y)
        })
        .collect()
}

#[test]
fn test_distance_reference_values() {
    assert_eq!(distance((0, 0), (3, 4)).unwrap(), 5.0);
    assert_eq!(distance([0.0, 0.0], [-3.0, -3.0]).unwrap(), 4.242640687119285);
    assert_eq!(distance(("0", "0"), ("0", "-3")).unwrap(), 3.0);
}

#[test]
fn test_distance_symmetry() {
    let points = sample_points(24);
    for a in &points {
        for b in &points {
            assert_eq!(distance(*a, *b).unwrap(), distance(*b, *a).unwrap());
        }
    }
}

#[test]
fn test_step_reference_values() {
    assert_eq!(step((0, 0), (5, 0), 1.0).unwrap(), DVec2::new(1.0, 0.0));
    assert_eq!(step((0, 0), (5, 0), 3.0).unwrap(), DVec2::new(3.0, 0.0));

    let diagonal = step((0, 0), (5, 5), 1.0).unwrap();
    assert_relative_eq!(diagonal.x, 0.7071067811865476, epsilon = 1e-12);
    assert_relative_eq!(diagonal.y, 0.7071067811865476, epsilon = 1e-12);

    assert_eq!(int_step((0, 0), (5, 5), 2.0).unwrap(), DVec2::new(1.0, 1.0));
    assert_eq!(int_step((0, 0), (5, 5), 4.0).unwrap(), DVec2::new(3.0, 3.0));
}

#[test]
fn test_step_snaps_and_keeps_length() {
    let points = sample_points(16);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let d = distance(a, b).unwrap();

        assert_eq!(step(a, b, d + 0.5).unwrap(), b);
        if d > 0.5 {
            let next = step(a, b, 0.5).unwrap();
            assert_relative_eq!(distance(a, next).unwrap(), 0.5, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_walk_default_reference_path() {
    let path = walk((0, 0), (2, 10), StepMethod::default(), &WalkOptions::default()).unwrap();
    assert_eq!(path.len(), 12);
    assert_eq!(path[0], DVec2::new(0.0, 0.0));
    assert_eq!(path[11], DVec2::new(2.0, 10.0));
    assert_relative_eq!(path[1].x, 0.196116135138184, epsilon = 1e-12);
    assert_relative_eq!(path[1].y, 0.9805806756909201, epsilon = 1e-12);
}

#[test]
fn test_walk_integer_reference_path() {
    let path = walk((0, 0), (2, 10), StepMethod::Integer, &WalkOptions::default()).unwrap();
    let expected: Vec<DVec2> = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 5),
        (0, 6),
        (0, 7),
        (1, 8),
        (1, 9),
        (2, 10),
    ]
    .iter()
    .map(|&(x, y)| DVec2::new(f64::from(x), f64::from(y)))
    .collect();
    assert_eq!(path, expected);
}

#[test]
fn test_walk_coverage_property() {
    let points = sample_points(12);
    for marks in [0.3, 1.0, 4.0] {
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let path = walk(a, b, StepMethod::Continuous, &WalkOptions::with_marks(marks))
                .expect("Weg erwartet");
            assert_eq!(path.first(), Some(&a));
            assert_eq!(path.last(), Some(&b));
            for segment in path.windows(2) {
                let length = distance(segment[0], segment[1]).unwrap();
                assert!(length <= marks + 1e-9, "{length} > {marks}");
            }
        }
    }
}

#[test]
fn test_walk_integer_points_are_integral() {
    let path = walk(
        (-4, 7),
        ("9", "-3"),
        StepMethod::Integer,
        &WalkOptions::with_marks(1.5),
    )
    .unwrap();
    assert_eq!(path.last(), Some(&DVec2::new(9.0, -3.0)));
    assert!(path
        .iter()
        .all(|p| p.x == p.x.round() && p.y == p.y.round()));
}

#[test]
fn test_walk_rejects_invalid_input() {
    let invalid = walk(("abc", 0), (1, 1), StepMethod::default(), &WalkOptions::default());
    assert_eq!(
        invalid,
        Err(CoordError::InvalidCoordinateValue("abc".to_string()))
    );

    for marks in [0.0, -1.0, f64::NAN] {
        let result = walk((0, 0), (1, 1), StepMethod::default(), &WalkOptions::with_marks(marks));
        assert!(matches!(result, Err(CoordError::InvalidMarks(_))));
    }
}

#[test]
fn test_walk_stops_non_converging_custom_method() {
    // Läuft am Ziel vorbei statt es zu treffen
    let overshoot = |current: DVec2, destination: DVec2, marks: f64| {
        current + (destination - current).normalize_or_zero() * marks * 1.5
    };
    let options = WalkOptions {
        marks: 1.0,
        step_limit: StepLimit::Fixed(50),
    };
    let result = walk((0, 0), (3, 0.25), StepMethod::Custom(&overshoot), &options);
    assert!(matches!(
        result,
        Err(CoordError::StepLimitExceeded { limit: 50, .. })
    ));
}

#[test]
fn test_raw_coordinate_from_json_input() {
    let a: RawCoordinate = serde_json::from_str(r#"["0", 0]"#).unwrap();
    let b: RawCoordinate = serde_json::from_str("[3.0, \"4\"]").unwrap();
    assert_eq!(distance(a, b).unwrap(), 5.0);
}
