//! Package dispatch and batch processing
//!
//! This module provides the public API for Workout Flux. It turns raw sensor
//! packages into workouts and workouts into summaries.

use tracing::{debug, warn};

use crate::error::WorkoutError;
use crate::schema::Package;
use crate::types::{ActivityType, TrainingInfo};
use crate::workouts::{Running, SportsWalking, Swimming, Training, Workout};

/// Build the workout described by a sensor package.
///
/// Readings are assigned positionally: action, duration, weight, then the
/// activity-specific fields (height for walking; pool length and pool count for
/// swimming).
///
/// # Errors
/// - [`WorkoutError::UnknownActivityType`] if `workout_type` is not a known code
/// - [`WorkoutError::ArityMismatch`] if `data` has the wrong number of readings
/// - [`WorkoutError::InvalidReading`] if a reading is not finite, or the walking
///   height is zero
/// - [`WorkoutError::InvalidDuration`] if the duration is not positive
///
/// # Example
/// ```
/// use workout_flux::{read_package, Workout};
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert!((workout.distance() - 9.75).abs() < 1e-9);
/// ```
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, WorkoutError> {
    let activity = ActivityType::from_code(workout_type)
        .ok_or_else(|| WorkoutError::UnknownActivityType(workout_type.to_string()))?;

    validate_readings(activity, data)?;
    debug!(code = workout_type, readings = ?data, "dispatching package");

    let training = Training::new(data[0], data[1], data[2]);
    let workout: Box<dyn Workout> = match activity {
        ActivityType::Running => Box::new(Running::new(training)),
        ActivityType::Walking => Box::new(SportsWalking::new(training, data[3])),
        ActivityType::Swimming => Box::new(Swimming::new(training, data[3], data[4])),
    };

    Ok(workout)
}

fn validate_readings(activity: ActivityType, data: &[f64]) -> Result<(), WorkoutError> {
    if data.len() != activity.arity() {
        return Err(WorkoutError::ArityMismatch {
            workout_type: activity.code().to_string(),
            expected: activity.arity(),
            actual: data.len(),
        });
    }

    for (index, (value, field)) in data.iter().zip(activity.fields()).enumerate() {
        if !value.is_finite() {
            return Err(WorkoutError::InvalidReading {
                workout_type: activity.code().to_string(),
                index,
                reason: format!("{field} is not a finite number"),
            });
        }
    }

    let duration = data[1];
    if duration <= 0.0 {
        return Err(WorkoutError::InvalidDuration(duration));
    }

    // Height is a divisor in the walking calorie formula
    if activity == ActivityType::Walking && data[3] == 0.0 {
        return Err(WorkoutError::InvalidReading {
            workout_type: activity.code().to_string(),
            index: 3,
            reason: "height must be non-zero".to_string(),
        });
    }

    Ok(())
}

/// Read a package and build its summary
pub fn training_info(workout_type: &str, data: &[f64]) -> Result<TrainingInfo, WorkoutError> {
    Ok(read_package(workout_type, data)?.show_training_info())
}

/// Process packages in order, stopping at the first failure
pub fn process_packages(packages: &[Package]) -> Result<Vec<TrainingInfo>, WorkoutError> {
    packages
        .iter()
        .map(|p| training_info(&p.workout_type, &p.data))
        .collect()
}

/// Batch processor with configurable failure handling.
///
/// By default the first failing package aborts the batch. With
/// `continue_on_error` enabled every package is processed and failures are
/// reported alongside the successful summaries.
#[derive(Debug, Clone, Default)]
pub struct WorkoutProcessor {
    continue_on_error: bool,
}

impl WorkoutProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Isolate failures per package instead of aborting the batch
    pub fn continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }

    /// Process packages, returning one result per package in input order.
    ///
    /// When `continue_on_error` is disabled, the first failure is returned as
    /// the error of the whole call.
    pub fn process(
        &self,
        packages: &[Package],
    ) -> Result<Vec<Result<TrainingInfo, WorkoutError>>, WorkoutError> {
        let mut results = Vec::with_capacity(packages.len());

        for (index, package) in packages.iter().enumerate() {
            match training_info(&package.workout_type, &package.data) {
                Ok(info) => results.push(Ok(info)),
                Err(e) if self.continue_on_error => {
                    warn!(index, code = %package.workout_type, error = %e, "skipping package");
                    results.push(Err(e));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::render;
    use crate::schema::sample_packages;
    use pretty_assertions::assert_eq;

    fn dispatch_error(code: &str, data: &[f64]) -> WorkoutError {
        match read_package(code, data) {
            Ok(_) => panic!("{code} package should be rejected"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_sample_dataset_lines() {
        let lines: Vec<String> = process_packages(&sample_packages())
            .unwrap()
            .iter()
            .map(render)
            .collect();

        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    #[test]
    fn test_dispatch_selects_variant() {
        let swim_readings = [720.0, 1.0, 80.0, 25.0, 40.0];
        let swim = read_package("SWM", &swim_readings).unwrap();
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(swim.activity_type(), ActivityType::Swimming);
        assert_eq!(run.activity_type(), ActivityType::Running);
        assert_eq!(walk.activity_type(), ActivityType::Walking);
    }

    #[test]
    fn test_unknown_activity_type() {
        let err = dispatch_error("FLY", &[1.0, 1.0, 1.0]);

        match err {
            WorkoutError::UnknownActivityType(code) => assert_eq!(code, "FLY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let err = dispatch_error("FLY", &[]);
        assert!(matches!(err, WorkoutError::UnknownActivityType(_)));
    }

    #[test]
    fn test_arity_mismatch() {
        let too_few = dispatch_error("SWM", &[720.0, 1.0, 80.0]);
        assert!(matches!(
            too_few,
            WorkoutError::ArityMismatch {
                expected: 5,
                actual: 3,
                ..
            }
        ));

        let too_many = dispatch_error("RUN", &[15000.0, 1.0, 75.0, 180.0]);
        assert!(matches!(
            too_many,
            WorkoutError::ArityMismatch {
                expected: 3,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let zero = dispatch_error("RUN", &[15000.0, 0.0, 75.0]);
        assert!(matches!(zero, WorkoutError::InvalidDuration(d) if d == 0.0));

        let negative = dispatch_error("WLK", &[9000.0, -1.0, 75.0, 180.0]);
        assert!(matches!(negative, WorkoutError::InvalidDuration(_)));
    }

    #[test]
    fn test_non_finite_reading_rejected() {
        let err = dispatch_error("SWM", &[720.0, 1.0, f64::NAN, 25.0, 40.0]);

        match err {
            WorkoutError::InvalidReading { index, reason, .. } => {
                assert_eq!(index, 2);
                assert!(reason.contains("weight"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = dispatch_error("WLK", &[9000.0, 1.0, 75.0, 0.0]);
        assert!(matches!(err, WorkoutError::InvalidReading { index: 3, .. }));
    }

    #[test]
    fn test_process_packages_aborts_on_first_error() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("FLY", vec![1.0, 1.0, 1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];

        let err = process_packages(&packages).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivityType(_)));
    }

    #[test]
    fn test_processor_isolates_failures() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("FLY", vec![1.0, 1.0, 1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];

        let results = WorkoutProcessor::new()
            .continue_on_error(true)
            .process(&packages)
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(WorkoutError::UnknownActivityType(_))
        ));
        assert_eq!(
            results[2].as_ref().unwrap().training_type,
            "SportsWalking"
        );
    }

    #[test]
    fn test_processor_default_aborts() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];

        let err = WorkoutProcessor::new().process(&packages).unwrap_err();
        assert!(matches!(err, WorkoutError::ArityMismatch { .. }));
    }
}
