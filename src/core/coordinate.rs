//! Roh-Koordinaten und ihre Normalisierung auf `f64`-Paare.
//!
//! Eingaben dürfen Ganzzahlen, Gleitkommazahlen oder numerische Strings
//! enthalten. Normalisiert wird immer in einen neuen Wert, die Roh-Koordinate
//! bleibt unverändert.

use super::error::CoordError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalisierte Koordinate: beide Komponenten sind endliche `f64`.
pub type Coordinate = DVec2;

/// Einzelne Komponente einer Roh-Koordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Ganzzahl
    Int(i64),
    /// Gleitkommazahl
    Float(f64),
    /// Text, z.B. `"12"` oder `"2.5"`
    Text(String),
    /// Fehlender Wert (JSON `null`, `None`)
    Null,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Null => f.write_str("null"),
        }
    }
}

macro_rules! raw_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Int(i64::from(value))
                }
            }
        )*
    };
}

raw_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(f64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

/// Roh-Koordinate `(x, y)` vor der Normalisierung.
///
/// Serialisiert als zweielementige Liste, z.B. `[1, "2.5"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinate(pub RawValue, pub RawValue);

impl RawCoordinate {
    /// Normalisiert beide Komponenten. Die erste ungültige Komponente bricht ab.
    pub fn normalize(&self) -> Result<Coordinate, CoordError> {
        let x = normalize_value(&self.0)?;
        let y = normalize_value(&self.1)?;
        Ok(DVec2::new(x, y))
    }
}

impl<X: Into<RawValue>, Y: Into<RawValue>> From<(X, Y)> for RawCoordinate {
    fn from((x, y): (X, Y)) -> Self {
        RawCoordinate(x.into(), y.into())
    }
}

impl<T: Into<RawValue>> From<[T; 2]> for RawCoordinate {
    fn from([x, y]: [T; 2]) -> Self {
        RawCoordinate(x.into(), y.into())
    }
}

impl From<DVec2> for RawCoordinate {
    fn from(value: DVec2) -> Self {
        RawCoordinate(RawValue::Float(value.x), RawValue::Float(value.y))
    }
}

impl From<&RawCoordinate> for RawCoordinate {
    fn from(value: &RawCoordinate) -> Self {
        value.clone()
    }
}

/// Wandelt eine einzelne Komponente in ein endliches `f64` um.
///
/// Strings werden ohne umgebende Leerzeichen geparst. `NaN` und Unendlich
/// gelten als ungültig.
pub fn normalize_value(value: &RawValue) -> Result<f64, CoordError> {
    let parsed = match value {
        RawValue::Int(v) => Some(*v as f64),
        RawValue::Float(v) => Some(*v),
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        RawValue::Null => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(CoordError::InvalidCoordinateValue(value.to_string())),
    }
}

/// Normalisiert eine einzelne Koordinate.
pub fn normalize(raw: impl Into<RawCoordinate>) -> Result<Coordinate, CoordError> {
    raw.into().normalize()
}

/// Normalisiert Start und Ziel, Start zuerst.
pub fn normalize_pair(
    a: impl Into<RawCoordinate>,
    b: impl Into<RawCoordinate>,
) -> Result<(Coordinate, Coordinate), CoordError> {
    let a = normalize(a)?;
    let b = normalize(b)?;
    Ok((a, b))
}
