//! Error types
//!
//! Runtime simulation never fails; degenerate geometry is reported through
//! contact sentinels. Errors only arise when building bodies or loading settings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A size argument would produce zero, negative or non-finite mass
    #[error("invalid geometry: {field} must be finite and positive (got {value})")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("restitution must lie in [0, 1] (got {0})")]
    InvalidRestitution(f64),

    /// Every `u32` handle has been issued; handles are never reused
    #[error("body handles exhausted")]
    HandlesExhausted,

    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),

    #[error("failed to parse settings: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimError::InvalidGeometry {
            field: "radius",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid geometry: radius must be finite and positive (got -1)"
        );
        assert_eq!(
            SimError::InvalidRestitution(1.5).to_string(),
            "restitution must lie in [0, 1] (got 1.5)"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(SimError::from(err), SimError::Parse(_)));
    }
}
