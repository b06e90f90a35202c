//! Running formulas

use crate::types::{ActivityType, MIN_IN_HOUR, M_IN_KM};

use super::{Training, Workout};

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub training: Training,
}

impl Running {
    pub fn new(training: Training) -> Self {
        Self { training }
    }
}

impl Workout for Running {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        let c = self.constants();
        let t = &self.training;

        (c.coeff_1 * self.mean_speed() - c.coeff_2) * t.weight / M_IN_KM
            * t.duration
            * MIN_IN_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sample() {
        let run = Running::new(Training::new(15000.0, 1.0, 75.0));

        assert!((run.distance() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed() - 9.75).abs() < 1e-9);
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((run.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_speed_scales_with_duration() {
        let one_hour = Running::new(Training::new(10000.0, 1.0, 70.0));
        let two_hours = Running::new(Training::new(10000.0, 2.0, 70.0));

        assert!((one_hour.mean_speed() - 2.0 * two_hours.mean_speed()).abs() < 1e-9);
        assert_eq!(one_hour.distance(), two_hours.distance());
    }
}
