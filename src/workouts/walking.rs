//! Sports walking formulas

use crate::types::{ActivityType, MIN_IN_HOUR};

use super::{floor_div, step_distance, Training, Workout};

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub training: Training,
    /// Height in cm
    pub height: f64,
}

impl SportsWalking {
    pub fn new(training: Training, height: f64) -> Self {
        Self { training, height }
    }
}

impl Workout for SportsWalking {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Walking
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        let c = self.constants();
        let t = &self.training;

        // Recomputes speed from the step distance instead of calling
        // mean_speed(); kept as-is so totals match the published tables.
        let speed = step_distance(t, c) / t.duration;

        (c.coeff_1 * t.weight + floor_div(speed.powi(2), self.height) * c.coeff_2 * t.weight)
            * t.duration
            * MIN_IN_HOUR
    }
}
