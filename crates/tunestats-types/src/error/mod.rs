//! Typed error definitions for Tunestats.
//!
//! Errors are kept small and matchable. `ConfigError` is serializable so it
//! can travel in `--json` output alongside the data it failed to produce.

mod config;
mod timestamp;

pub use config::ConfigError;
pub use timestamp::TimestampError;

/// Standard Result type for configuration storage.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = ConfigError::WriteError { message: "disk full".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("WriteError"));
        assert!(json.contains("disk full"));

        let deserialized: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = TimestampError::Invalid {
            input: "yesterday".to_string(),
            message: "input contains invalid characters".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("yesterday"));
    }
}
