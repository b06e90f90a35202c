//! Package definition and the built-in sample dataset

use serde::{Deserialize, Serialize};

/// Raw readings for a single workout, as delivered by the sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Activity code ("SWM", "RUN", "WLK")
    #[serde(alias = "code")]
    pub workout_type: String,
    /// Positional readings: action, duration, weight, then activity-specific fields
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Reference packages used by the `demo` command and regression tests
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// The sample dataset as owned packages
pub fn sample_packages() -> Vec<Package> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, data)| Package::new(*code, data.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_package() {
        let json = r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#;
        let package: Package = serde_json::from_str(json).unwrap();

        assert_eq!(package, Package::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_deserialize_code_alias() {
        let json = r#"{"code": "WLK", "data": [9000, 1, 75, 180]}"#;
        let package: Package = serde_json::from_str(json).unwrap();

        assert_eq!(package.workout_type, "WLK");
        assert_eq!(package.data.len(), 4);
    }

    #[test]
    fn test_sample_packages_order() {
        let codes: Vec<String> = sample_packages()
            .into_iter()
            .map(|p| p.workout_type)
            .collect();

        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }
}
