//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die serialisierbaren Optionen, die CLI und Library gemeinsam nutzen.

pub mod options;

pub use options::PathOptions;
