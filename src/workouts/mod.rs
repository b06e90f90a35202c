//! Workout formula set
//!
//! Each supported activity implements [`Workout`]. The shared readings live in
//! [`Training`], which every variant embeds; the per-activity constants come from
//! [`ActivityType::constants`].

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::types::{ActivityConstants, ActivityType, TrainingInfo, M_IN_KM};

/// Readings common to every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Number of actions (steps or strokes)
    pub action: f64,
    /// Duration in hours
    pub duration: f64,
    /// Body weight in kg
    pub weight: f64,
}

impl Training {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Trait implemented by every activity-specific formula set
pub trait Workout {
    /// Tag used for the summary label
    fn activity_type(&self) -> ActivityType;

    /// Common readings
    fn training(&self) -> &Training;

    /// Spent calories in kcal
    fn spent_calories(&self) -> f64;

    fn constants(&self) -> &'static ActivityConstants {
        self.activity_type().constants()
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        step_distance(self.training(), self.constants())
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.training().duration
    }

    /// Build the summary for this workout
    fn show_training_info(&self) -> TrainingInfo {
        TrainingInfo {
            training_type: self.activity_type().label().to_string(),
            duration: self.training().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Step-based distance in km: action count times step length
pub(crate) fn step_distance(training: &Training, constants: &ActivityConstants) -> f64 {
    training.action * constants.len_step / M_IN_KM
}

/// Floor division of floats, matching the `//` operator the calorie tables were
/// calibrated against (fmod-based, with the quotient snapped to the nearest
/// integer when rounding error leaves it just below).
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_floor_div_positive() {
        assert_eq!(floor_div(380.25, 180.0), 2.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(360.0, 180.0), 2.0);
    }

    #[test]
    fn test_floor_div_negative_operands() {
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(-7.0, -2.0), 3.0);
    }

    #[test]
    fn test_floor_div_differs_from_real_division() {
        let real: f64 = 380.25 / 180.0;
        assert!((real - 2.1125).abs() < 1e-12);
        assert_eq!(floor_div(380.25, 180.0), 2.0);
    }

    #[test]
    fn test_distance_is_linear_in_action_count() {
        let workouts: Vec<Box<dyn Workout>> = vec![
            Box::new(Running::new(Training::new(5000.0, 1.5, 70.0))),
            Box::new(SportsWalking::new(Training::new(5000.0, 1.5, 70.0), 175.0)),
        ];
        let doubled: Vec<Box<dyn Workout>> = vec![
            Box::new(Running::new(Training::new(10000.0, 1.5, 70.0))),
            Box::new(SportsWalking::new(Training::new(10000.0, 1.5, 70.0), 175.0)),
        ];

        for (single, double) in workouts.iter().zip(doubled.iter()) {
            assert!((double.distance() - 2.0 * single.distance()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mean_speed_positive() {
        let workouts: Vec<Box<dyn Workout>> = vec![
            Box::new(Running::new(Training::new(1.0, 0.25, 60.0))),
            Box::new(SportsWalking::new(Training::new(1.0, 3.0, 60.0), 160.0)),
            Box::new(Swimming::new(Training::new(1.0, 0.5, 60.0), 25.0, 1.0)),
        ];

        for workout in &workouts {
            assert!(workout.distance() > 0.0);
            assert!(workout.mean_speed() > 0.0);
        }
    }

    #[test]
    fn test_summary_carries_label_and_duration() {
        let workout = Running::new(Training::new(15000.0, 1.0, 75.0));
        let info = workout.show_training_info();

        assert_eq!(info.training_type, "Running");
        assert_eq!(info.duration, 1.0);
        assert_eq!(info.distance, workout.distance());
        assert_eq!(info.speed, workout.mean_speed());
        assert_eq!(info.calories, workout.spent_calories());
    }
}
