//! coord-step Library.
//!
//! Distanzen zwischen 2D-Koordinaten und schrittweise Wege entlang gerader
//! Strecken, kontinuierlich oder auf ganze Zahlen gerundet.

pub mod api;
pub mod cli;
pub mod core;
pub mod shared;

pub use api::{distance, int_step, step, walk};
pub use core::{
    normalize, normalize_pair, normalize_value, CoordError, Coordinate, RawCoordinate, RawValue,
    StepLimit, StepMethod, StepMethodKind, WalkOptions, DEFAULT_MARKS,
};
pub use shared::PathOptions;
