//! Session service error types.

use enigma_core::EnigmaError;
use thiserror::Error;

use crate::payload::SessionId;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No machine exists for the session.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// The engine rejected the configuration or input.
    #[error(transparent)]
    Machine(#[from] EnigmaError),

    /// A configuration file could not be read or parsed.
    #[error("config file {path}: {reason}")]
    Config {
        /// Path of the file.
        path: String,
        /// What went wrong.
        reason: String,
    },
}

impl SessionError {
    /// Returns true for the not-found signal (HTTP 404 in a web front end).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        assert!(SessionError::SessionNotFound(SessionId::default()).is_not_found());
        let err = SessionError::from(EnigmaError::InvalidCharacter { character: '1' });
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_display() {
        let err = SessionError::SessionNotFound(SessionId::new("abc"));
        assert_eq!(err.to_string(), "session not found: abc");

        let err = SessionError::from(EnigmaError::UnknownComponentName { name: "IX".to_string() });
        assert_eq!(err.to_string(), "unknown component name: IX");
    }
}
