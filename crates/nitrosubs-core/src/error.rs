//! Error types for nitrosubs-core
//!
//! Every failure here is recoverable: callers fall back to defaults or to
//! "no session" and keep rendering.

use thiserror::Error;

/// Core error type for shell state decoding
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to parse stored preferences: {message}")]
    InvalidPreferences {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse stored session: {message}")]
    SessionParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown theme: {value} (expected 'light' or 'dark')")]
    UnknownTheme { value: String },
}

impl CoreError {
    /// Storage key or field the error relates to, for log context
    pub fn subject(&self) -> &'static str {
        match self {
            CoreError::InvalidPreferences { .. } => "preferences",
            CoreError::SessionParse { .. } => "session",
            CoreError::UnknownTheme { .. } => "theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_message() {
        let err = CoreError::UnknownTheme {
            value: "sepia".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown theme: sepia (expected 'light' or 'dark')");
        assert_eq!(err.subject(), "theme");
    }

    #[test]
    fn test_parse_errors_keep_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::SessionParse {
            message: "truncated".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.subject(), "session");
    }
}
