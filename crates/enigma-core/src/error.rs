//! Engine error types.

use thiserror::Error;

/// Errors from building or driving an [`Enigma`](crate::Enigma).
///
/// All of these are caller-input errors detected synchronously. None of them
/// are transient, so retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The machine configuration is inconsistent (count mismatch, ring
    /// setting out of range, empty rotor sequence).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the inconsistency.
        reason: String,
    },

    /// A rotor or reflector name is not present in the wiring tables.
    #[error("unknown component name: {name}")]
    UnknownComponentName {
        /// The name that failed lookup.
        name: String,
    },

    /// A plug lead specification does not name exactly two distinct letters.
    #[error("invalid plug specification: {spec:?}")]
    InvalidPlugSpec {
        /// The offending specification as supplied.
        spec: String,
    },

    /// A character outside the uppercase A-Z alphabet was passed where a
    /// letter is required.
    #[error("invalid character: {character:?}, must be an uppercase English letter")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
}

impl EnigmaError {
    /// Returns true if this error was raised while building a machine.
    ///
    /// Unknown component names and malformed plug leads are reported with
    /// their own variants but belong to the configuration class.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidConfiguration { .. }
            | Self::UnknownComponentName { .. }
            | Self::InvalidPlugSpec { .. } => true,
            Self::InvalidCharacter { .. } => false,
        }
    }

    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
