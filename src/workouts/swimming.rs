//! Swimming formulas
//!
//! Distance still follows the stroke count (1.38 m per stroke), but speed and
//! therefore calories come from the pool geometry.

use crate::types::{ActivityType, M_IN_KM};

use super::{Training, Workout};

/// Swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub training: Training,
    /// Pool length in meters
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

impl Swimming {
    pub fn new(training: Training, length_pool: f64, count_pool: f64) -> Self {
        Self {
            training,
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.training.duration
    }

    fn spent_calories(&self) -> f64 {
        let c = self.constants();
        (self.mean_speed() + c.coeff_1) * c.coeff_2 * self.training.weight
    }
}
