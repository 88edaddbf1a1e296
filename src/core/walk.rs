//! Schrittweises Ablaufen einer geraden Strecke von Start bis Ziel.

use super::coordinate::Coordinate;
use super::error::CoordError;
use super::geometry::{distance_between, int_step_towards, step_towards, DEFAULT_MARKS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximal vorab reservierte Wegpunkte; längere Wege wachsen dynamisch.
const PREALLOCATED_POINTS_MAX: usize = 4096;

/// Berechnet den jeweils nächsten Punkt eines Weges.
///
/// Eine `Custom`-Funktion muss das Ziel irgendwann exakt treffen, sonst
/// bricht der Weg am Schritt-Limit ab.
#[derive(Clone, Copy, Default)]
pub enum StepMethod<'a> {
    /// Kontinuierlicher Schritt ([`step_towards`])
    #[default]
    Continuous,
    /// Auf ganze Zahlen gerundeter Schritt ([`int_step_towards`])
    Integer,
    /// Eigene Schritt-Funktion: `(aktuell, ziel, marks) -> nächster Punkt`
    Custom(&'a dyn Fn(Coordinate, Coordinate, f64) -> Coordinate),
}

impl StepMethod<'_> {
    /// Berechnet den nächsten Punkt von `current` Richtung `destination`.
    pub fn next_point(
        &self,
        current: Coordinate,
        destination: Coordinate,
        marks: f64,
    ) -> Coordinate {
        match self {
            StepMethod::Continuous => step_towards(current, destination, marks),
            StepMethod::Integer => int_step_towards(current, destination, marks),
            StepMethod::Custom(step) => step(current, destination, marks),
        }
    }
}

impl fmt::Debug for StepMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMethod::Continuous => f.write_str("Continuous"),
            StepMethod::Integer => f.write_str("Integer"),
            StepMethod::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Serialisierbare Auswahl der eingebauten Schritt-Methoden (Optionen-Datei, CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMethodKind {
    /// Kontinuierliche Zwischenpunkte
    #[default]
    Continuous,
    /// Ganzzahlige Zwischenpunkte
    Integer,
}

impl From<StepMethodKind> for StepMethod<'static> {
    fn from(kind: StepMethodKind) -> Self {
        match kind {
            StepMethodKind::Continuous => StepMethod::Continuous,
            StepMethodKind::Integer => StepMethod::Integer,
        }
    }
}

impl FromStr for StepMethodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" | "step" => Ok(StepMethodKind::Continuous),
            "integer" | "int" | "int_step" | "int-step" => Ok(StepMethodKind::Integer),
            other => Err(format!(
                "unknown step method '{other}' (expected 'continuous' or 'integer')"
            )),
        }
    }
}

impl fmt::Display for StepMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMethodKind::Continuous => f.write_str("continuous"),
            StepMethodKind::Integer => f.write_str("integer"),
        }
    }
}

/// Obergrenze für die Anzahl der Schritte eines Weges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLimit {
    /// `ceil(distanz / marks) * factor + slack`
    Derived {
        /// Multiplikator auf die erwartete Schrittzahl
        factor: usize,
        /// Zusätzliche Schritte unabhängig von der Distanz
        slack: usize,
    },
    /// Feste Obergrenze
    Fixed(usize),
}

impl StepLimit {
    /// Standard-Multiplikator für `Derived`.
    pub const DEFAULT_FACTOR: usize = 4;
    /// Standard-Zuschlag für `Derived`.
    pub const DEFAULT_SLACK: usize = 16;

    /// Löst das Limit für eine konkrete Strecke auf.
    pub fn resolve(&self, distance: f64, marks: f64) -> usize {
        match *self {
            StepLimit::Derived { factor, slack } => expected_steps(distance, marks)
                .saturating_mul(factor)
                .saturating_add(slack),
            StepLimit::Fixed(limit) => limit,
        }
    }
}

impl Default for StepLimit {
    fn default() -> Self {
        StepLimit::Derived {
            factor: Self::DEFAULT_FACTOR,
            slack: Self::DEFAULT_SLACK,
        }
    }
}

/// Optionen, die unverändert an die Schritt-Methode weitergereicht werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkOptions {
    /// Schrittweite (muss positiv sein)
    pub marks: f64,
    /// Abbruch-Grenze gegen nicht konvergierende Schritt-Methoden
    pub step_limit: StepLimit,
}

impl WalkOptions {
    /// Optionen mit eigener Schrittweite und Standard-Limit.
    pub fn with_marks(marks: f64) -> Self {
        Self {
            marks,
            ..Self::default()
        }
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            marks: DEFAULT_MARKS,
            step_limit: StepLimit::default(),
        }
    }
}

/// Erwartete Schrittzahl einer kontinuierlichen Strecke: `ceil(distanz / marks)`.
pub fn expected_steps(distance: f64, marks: f64) -> usize {
    // `as` sättigt bei sehr großen Werten
    (distance / marks).ceil() as usize
}

/// Läuft von `a` nach `b` und sammelt alle Zwischenpunkte inkl. Start und Ziel.
///
/// Erwartet normalisierte Koordinaten und geprüfte `marks`. Der Weg endet,
/// sobald ein Punkt exakt `b` entspricht.
///
/// Auch eine gültige Strecke kann `StepLimitExceeded` liefern: Sind die
/// Koordinaten so groß, dass `marks` unter der `f64`-Auflösung liegt
/// (z.B. `1e16 + 1.0 == 1e16`), bewegt sich kein Schritt vom Fleck.
pub fn walk_path(
    a: Coordinate,
    b: Coordinate,
    method: StepMethod<'_>,
    marks: f64,
    step_limit: StepLimit,
) -> Result<Vec<Coordinate>, CoordError> {
    let distance = distance_between(a, b);
    let limit = step_limit.resolve(distance, marks);
    log::debug!(
        "Walk {} -> {} (distance {}, marks {}, method {:?}, limit {})",
        a,
        b,
        distance,
        marks,
        method,
        limit
    );

    let capacity = expected_steps(distance, marks)
        .min(limit)
        .min(PREALLOCATED_POINTS_MAX)
        + 1;
    let mut path = Vec::with_capacity(capacity);
    path.push(a);

    let mut current = a;
    let mut steps = 0usize;
    while current != b {
        if steps >= limit {
            log::debug!("Walk stopped at {} after {} steps", current, steps);
            return Err(CoordError::StepLimitExceeded {
                limit,
                last: current,
            });
        }
        current = method.next_point(current, b, marks);
        path.push(current);
        steps += 1;
    }

    log::trace!("Walk finished with {} points", path.len());
    Ok(path)
}
