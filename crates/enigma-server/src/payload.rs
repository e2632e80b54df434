//! Session request and response payloads.
//!
//! Plain serde values mirroring the session service's request bodies. No
//! transport is attached; a front end (HTTP, CLI, tests) builds a
//! [`SessionRequest`] and hands it to
//! [`SessionManager::handle`](crate::SessionManager::handle).

use std::fmt;

use enigma_core::MachineConfig;
use serde::{Deserialize, Serialize};

/// Key used when a request names no session.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Opaque session key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_ID)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Requests accepted by the session manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionRequest {
    /// Build a machine for a session, replacing any existing one.
    Create {
        /// Target session.
        #[serde(default)]
        session_id: SessionId,
        /// Machine settings; omitted fields take the default configuration.
        #[serde(flatten)]
        config: MachineConfig,
    },

    /// Encode (or decode) a message, creating a default machine if needed.
    Encode {
        /// Target session.
        #[serde(default)]
        session_id: SessionId,
        /// Text to transform.
        #[serde(default)]
        message: String,
    },

    /// Return a session's rotors to their starting positions.
    Reset {
        /// Target session.
        #[serde(default)]
        session_id: SessionId,
    },

    /// Discard a session.
    Delete {
        /// Target session.
        #[serde(default)]
        session_id: SessionId,
    },
}

/// Result of encoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// The message as received.
    pub original: String,
    /// The transformed message.
    pub encoded: String,
    /// Rotor positions after encoding, fastest-first, excluding the
    /// reflector.
    pub rotor_positions: Vec<char>,
}

/// Successful outcomes of [`SessionRequest`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionResponse {
    /// A machine was built.
    Created {
        /// The session that now holds it.
        session_id: SessionId,
    },
    /// A message was transformed.
    Encoded(EncodeResponse),
    /// A machine was reset.
    Reset {
        /// The session that was reset.
        session_id: SessionId,
    },
    /// A session was discarded.
    Deleted {
        /// The session that was removed.
        session_id: SessionId,
    },
}
