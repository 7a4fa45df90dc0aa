//! Input validation for command-line values
//!
//! All problems are collected and reported together before any pipeline runs.

use crate::error::{ErrorCode, FlightError, Result};
use crate::questions::QuestionSettings;
use std::path::{Path, PathBuf};

/// CLI validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CliValidationError {
    DatasetNotFound(PathBuf),
    DatasetNotFile(PathBuf),
    ThresholdOutOfRange(f64),
    TopZero,
}

impl std::fmt::Display for CliValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetNotFound(p) => write!(f, "Dataset '{}' does not exist", p.display()),
            Self::DatasetNotFile(p) => write!(f, "Dataset '{}' is not a file", p.display()),
            Self::ThresholdOutOfRange(t) => {
                write!(f, "Threshold must be between 0 and 1, got {}", t)
            }
            Self::TopZero => write!(f, "Top count must be greater than 0"),
        }
    }
}

impl std::error::Error for CliValidationError {}

fn check_dataset(path: &Path, errors: &mut Vec<CliValidationError>) {
    if !path.exists() {
        errors.push(CliValidationError::DatasetNotFound(path.to_path_buf()));
    } else if !path.is_file() {
        errors.push(CliValidationError::DatasetNotFile(path.to_path_buf()));
    }
}

fn check_settings(settings: &QuestionSettings, errors: &mut Vec<CliValidationError>) {
    if !(0.0..=1.0).contains(&settings.empty_threshold) {
        errors.push(CliValidationError::ThresholdOutOfRange(
            settings.empty_threshold,
        ));
    }

    if settings.top_n == 0 {
        errors.push(CliValidationError::TopZero);
    }
}

/// Collect every validation problem for a run
pub fn collect_errors(dataset: &Path, settings: &QuestionSettings) -> Vec<CliValidationError> {
    let mut errors = Vec::new();
    check_dataset(dataset, &mut errors);
    check_settings(settings, &mut errors);
    errors
}

/// Validate a run, reporting all problems in one error
pub fn validate_run(dataset: &Path, settings: &QuestionSettings) -> Result<()> {
    let errors = collect_errors(dataset, settings);
    if errors.is_empty() {
        return Ok(());
    }

    let code = if errors
        .iter()
        .all(|e| matches!(e, CliValidationError::DatasetNotFound(_)))
    {
        ErrorCode::VALIDATION_FILE_NOT_FOUND
    } else {
        ErrorCode::VALIDATION_GENERIC
    };

    Err(FlightError::validation_with_code(
        code,
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
        None,
    ))
}
