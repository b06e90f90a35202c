//! Parsing and batch validation of packages

use crate::error::WorkoutError;
use crate::pipeline::read_package;
use crate::schema::package::Package;

/// Adapter for reading packages from JSON input
pub struct PackageAdapter;

impl PackageAdapter {
    /// Parse a JSON string containing an array of packages
    pub fn parse_array(json: &str) -> Result<Vec<Package>, WorkoutError> {
        let packages: Vec<Package> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse NDJSON (newline-delimited JSON) containing packages
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<Package>, WorkoutError> {
        let mut packages = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<Package>(trimmed) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    return Err(WorkoutError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(packages)
    }

    /// Validate a batch of packages, returning only the failures
    pub fn validate_packages(packages: &[Package]) -> Vec<ValidationResult> {
        packages
            .iter()
            .enumerate()
            .filter_map(|(idx, package)| {
                read_package(&package.workout_type, &package.data)
                    .err()
                    .map(|error| ValidationResult {
                        index: idx,
                        workout_type: package.workout_type.clone(),
                        error,
                    })
            })
            .collect()
    }
}

/// A package that failed validation
#[derive(Debug)]
pub struct ValidationResult {
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}
