//! Unified error types for the irrigation advisor.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! caller's error handling uniform.  Validation errors carry the rejected
//! value so a front end can echo it back; their `Display` text is the
//! human-readable message shown to the user.

use core::fmt;

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A sensor reading was outside its declared domain.
    Validation(ValidationError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Input outside its declared domain.  No fuzzy computation has run when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Soil moisture outside [0, 100] (or not a number).
    MoistureOutOfRange(f64),
    /// Ambient temperature outside [0, 40] (or not a number).
    TemperatureOutOfRange(f64),
}

impl ValidationError {
    /// The rejected raw value.
    pub fn value(&self) -> f64 {
        match self {
            Self::MoistureOutOfRange(v) | Self::TemperatureOutOfRange(v) => *v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoistureOutOfRange(_) => write!(f, "Soil moisture must be between 0 and 100."),
            Self::TemperatureOutOfRange(_) => write!(f, "Temperature must be between 0 and 40."),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
