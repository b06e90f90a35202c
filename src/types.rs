//! Core types for Workout Flux
//!
//! This module defines the activity tag, the per-activity constant tables and the
//! summary record produced for every processed workout.

use serde::{Deserialize, Serialize};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Activity identifier used for dispatch and for the summary label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Walking,
    Swimming,
}

/// Formula constants for a single activity type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityConstants {
    /// Length of one step (or stroke) in meters
    pub len_step: f64,
    /// First calorie coefficient
    pub coeff_1: f64,
    /// Second calorie coefficient
    pub coeff_2: f64,
}

const RUNNING_CONSTANTS: ActivityConstants = ActivityConstants {
    len_step: 0.65,
    coeff_1: 18.0,
    coeff_2: 20.0,
};

const WALKING_CONSTANTS: ActivityConstants = ActivityConstants {
    len_step: 0.65,
    coeff_1: 0.035,
    coeff_2: 0.029,
};

const SWIMMING_CONSTANTS: ActivityConstants = ActivityConstants {
    len_step: 1.38,
    coeff_1: 1.1,
    coeff_2: 2.0,
};

impl ActivityType {
    /// All supported activity types, in dispatch-table order
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Swimming,
        ActivityType::Running,
        ActivityType::Walking,
    ];

    /// Look up an activity type by its sensor package code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(ActivityType::Swimming),
            "RUN" => Some(ActivityType::Running),
            "WLK" => Some(ActivityType::Walking),
            _ => None,
        }
    }

    /// Sensor package code
    pub fn code(&self) -> &'static str {
        match self {
            ActivityType::Running => "RUN",
            ActivityType::Walking => "WLK",
            ActivityType::Swimming => "SWM",
        }
    }

    /// Label printed in the training summary
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Walking => "SportsWalking",
            ActivityType::Swimming => "Swimming",
        }
    }

    /// Reading names in the positional order of a package
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ActivityType::Running => &["action", "duration", "weight"],
            ActivityType::Walking => &["action", "duration", "weight", "height"],
            ActivityType::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of readings a package of this type must carry
    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    pub fn constants(&self) -> &'static ActivityConstants {
        match self {
            ActivityType::Running => &RUNNING_CONSTANTS,
            ActivityType::Walking => &WALKING_CONSTANTS,
            ActivityType::Swimming => &SWIMMING_CONSTANTS,
        }
    }
}

/// Summary of a single completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingInfo {
    /// Activity label (e.g. "Running")
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories burned in kcal
    pub calories: f64,
}
