//! Workout Flux - derived fitness metrics from raw workout sensor packages
//!
//! Flux turns a sensor package (an activity code plus positional readings) into a
//! training summary: package dispatch → activity formulas → summary rendering.
//!
//! ## Activities
//!
//! - **Running** (`RUN`): action, duration, weight
//! - **Sports walking** (`WLK`): action, duration, weight, height
//! - **Swimming** (`SWM`): action, duration, weight, pool length, pool count

pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod schema;
pub mod types;
pub mod workouts;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use encoder::{render, SummaryEncoder, SummaryReport};
pub use error::WorkoutError;
pub use pipeline::{process_packages, read_package, training_info, WorkoutProcessor};
pub use schema::{sample_packages, Package, PackageAdapter, SAMPLE_PACKAGES};
pub use types::{ActivityType, TrainingInfo};
pub use workouts::Workout;

/// Flux version embedded in JSON reports
pub const FLUX_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for JSON reports
pub const PRODUCER_NAME: &str = "workout-flux";
