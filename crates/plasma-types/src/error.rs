use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Validation failed ({} violation(s)): {}", .violations.len(), .violations.join("; "))]
    Validation { violations: Vec<String> },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid reaction: {0}")]
    InvalidReaction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    /// Single-violation validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SourceError::Validation {
            violations: vec![message.into()],
        }
    }

    /// Violations carried by a `Validation` error, empty for every other kind.
    pub fn violations(&self) -> &[String] {
        match self {
            SourceError::Validation { violations } => violations,
            _ => &[],
        }
    }
}

/// Collects every violated constraint before failing, so callers see the
/// whole list instead of only the first problem.
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` when `ok` is false.
    pub fn require(&mut self, ok: bool, message: impl FnOnce() -> String) {
        if !ok {
            self.violations.push(message());
        }
    }

    /// Record a finite-and-non-negative constraint for a named quantity.
    pub fn require_non_negative(&mut self, name: &str, value: f64) {
        self.require(value.is_finite() && value >= 0.0, || {
            format!("{name} must be finite and >= 0, got {value}")
        });
    }

    /// Record a finite-and-strictly-positive constraint for a named quantity.
    pub fn require_positive(&mut self, name: &str, value: f64) {
        self.require(value.is_finite() && value > 0.0, || {
            format!("{name} must be finite and > 0, got {value}")
        });
    }

    pub fn require_finite(&mut self, name: &str, value: f64) {
        self.require(value.is_finite(), || {
            format!("{name} must be finite, got {value}")
        });
    }

    /// Fold a nested result into this report, keeping its value on success.
    ///
    /// Validation errors contribute all of their violations; any other error
    /// kind contributes its display string.
    pub fn absorb<T>(&mut self, result: SourceResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(SourceError::Validation { violations }) => {
                self.violations.extend(violations);
                None
            }
            Err(other) => {
                self.violations.push(other.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_result(self) -> SourceResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(SourceError::Validation {
                violations: self.violations,
            })
        }
    }
}
