//! Sensor package schema
//!
//! A package is the raw unit delivered by the sensor: an activity code and the
//! positional readings for that activity. Packages can be supplied as a JSON
//! array or as NDJSON (one package per line).

mod adapter;
mod package;

pub use adapter::*;
pub use package::*;
