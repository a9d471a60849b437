//! Configuration validation.

use std::collections::HashSet;
use std::fmt;

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Append everything found by another validation pass.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// All errors on one line, separated by `; `.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the host configuration against the skills the host knows.
    pub fn validate(config: &Config, known_skills: &[&str]) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_enabled(config, known_skills, &mut result);
        Self::validate_custom(config, known_skills, &mut result);

        result
    }

    fn validate_enabled(config: &Config, known_skills: &[&str], result: &mut ValidationResult) {
        if config.skills.enabled.is_empty() {
            result.add_warning(ValidationWarning::new(
                "skills.enabled",
                "No skills enabled, the assistant will have no tools",
            ));
        }

        let mut seen = HashSet::new();
        for id in &config.skills.enabled {
            if !known_skills.contains(&id.as_str()) {
                result.add_error(ValidationError::new(
                    "skills.enabled",
                    format!("Unknown skill '{}'", id),
                ));
            }
            if !seen.insert(id.as_str()) {
                result.add_warning(ValidationWarning::new(
                    "skills.enabled",
                    format!("Skill '{}' is listed more than once", id),
                ));
            }
        }
    }

    fn validate_custom(config: &Config, known_skills: &[&str], result: &mut ValidationResult) {
        for (id, value) in &config.skills.custom {
            let path = format!("skills.custom.{}", id);
            if !known_skills.contains(&id.as_str()) {
                result.add_warning(ValidationWarning::new(
                    path.clone(),
                    format!("Custom properties for unknown skill '{}'", id),
                ));
            } else if !config.is_enabled(id) {
                result.add_warning(ValidationWarning::new(
                    path.clone(),
                    format!("Skill '{}' is configured but not enabled", id),
                ));
            }
            if !value.is_object() {
                result.add_error(ValidationError::new(path, "Custom properties must be a table"));
            }
        }
    }

    /// Warn about keys in a skill's custom property block it does not read.
    pub fn check_unknown_keys(
        path: &str,
        value: &serde_json::Value,
        known_keys: &[&str],
        result: &mut ValidationResult,
    ) {
        let Some(obj) = value.as_object() else {
            return;
        };
        for key in obj.keys() {
            if !known_keys.contains(&key.as_str()) {
                result.add_warning(ValidationWarning::new(
                    format!("{}.{}", path, key),
                    "Unknown property, it will be ignored",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
