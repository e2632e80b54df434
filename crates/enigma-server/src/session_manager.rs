//! Session Manager
//!
//! Keyed store of Enigma machines, one per session.
//!
//! ## Responsibilities
//!
//! - Session Lifecycle: create, look up, reset and discard machines by key
//! - Lazy Default: `encode` on an unknown session builds the default machine
//! - Not Found: every other operation on an unknown session fails
//!
//! ## Design
//!
//! - Explicit value, no global state: independent managers never share
//!   sessions, and tests build their own
//! - `&mut self` access: one caller drives a session at a time; a
//!   multi-threaded owner wraps the manager in a mutex
//! - Environment injected per call for timestamps and id generation

use std::{collections::HashMap, time::Instant};

use enigma_core::{Enigma, MachineConfig};

use crate::{
    env::Environment,
    error::SessionError,
    payload::{EncodeResponse, SessionId, SessionRequest, SessionResponse},
};

/// Bookkeeping kept alongside each machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetadata {
    /// When the machine was built.
    pub created_at: Instant,
    /// When the session last encoded a message.
    pub last_used: Instant,
    /// Messages encoded since creation (resets don't clear this).
    pub messages_encoded: u64,
}

#[derive(Debug)]
struct Session {
    machine: Enigma,
    metadata: SessionMetadata,
}

/// Owns the machines for every live session.
pub struct SessionManager<E>
where
    E: Environment,
{
    sessions: HashMap<SessionId, Session>,
    default_config: MachineConfig,
    _env: std::marker::PhantomData<E>,
}

impl<E> SessionManager<E>
where
    E: Environment,
{
    /// Create an empty manager whose lazy default is
    /// [`MachineConfig::default`].
    pub fn new() -> Self {
        Self::with_default_config(MachineConfig::default())
    }

    /// Create an empty manager with a custom lazy default.
    pub fn with_default_config(default_config: MachineConfig) -> Self {
        Self { sessions: HashMap::new(), default_config, _env: std::marker::PhantomData }
    }

    /// Configuration used when `encode` creates a session implicitly.
    pub fn default_config(&self) -> &MachineConfig {
        &self.default_config
    }

    /// Check if a session exists.
    pub fn has_session(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Metadata for a session, if it exists.
    pub fn metadata(&self, id: &SessionId) -> Option<&SessionMetadata> {
        self.sessions.get(id).map(|s| &s.metadata)
    }

    /// Read-only view of a session's machine.
    pub fn machine(&self, id: &SessionId) -> Option<&Enigma> {
        self.sessions.get(id).map(|s| &s.machine)
    }

    /// Build a machine for `id`, replacing any existing session with that
    /// key.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Machine` if the configuration is invalid. An
    /// existing session is left untouched in that case.
    pub fn create_session(
        &mut self,
        id: SessionId,
        config: &MachineConfig,
        env: &E,
    ) -> Result<(), SessionError> {
        let machine = Enigma::new(config)?;
        let now = env.now();
        let metadata = SessionMetadata { created_at: now, last_used: now, messages_encoded: 0 };

        if self.sessions.insert(id.clone(), Session { machine, metadata }).is_some() {
            tracing::debug!(session = %id, "replaced session");
        } else {
            tracing::debug!(session = %id, "created session");
        }
        Ok(())
    }

    /// Build a machine under a fresh random key and return the key.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Machine` if the configuration is invalid.
    pub fn open_session(
        &mut self,
        config: &MachineConfig,
        env: &E,
    ) -> Result<SessionId, SessionError> {
        let base = format!("{:016x}", env.random_u64());
        let mut id = SessionId::new(base.clone());
        let mut suffix = 1u64;
        while self.has_session(&id) {
            id = SessionId::new(format!("{base}-{suffix}"));
            suffix += 1;
        }
        self.create_session(id.clone(), config, env)?;
        Ok(id)
    }

    /// Encode a message on a session, building the default machine first if
    /// the session doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Machine` only if the lazy default
    /// configuration is itself invalid.
    pub fn encode(
        &mut self,
        id: &SessionId,
        message: &str,
        env: &E,
    ) -> Result<EncodeResponse, SessionError> {
        if !self.has_session(id) {
            let config = self.default_config.clone();
            self.create_session(id.clone(), &config, env)?;
        }

        let session =
            self.sessions.get_mut(id).ok_or_else(|| SessionError::SessionNotFound(id.clone()))?;
        let encoded = session.machine.encode(message);
        session.metadata.last_used = env.now();
        session.metadata.messages_encoded += 1;

        Ok(EncodeResponse {
            original: message.to_string(),
            encoded,
            rotor_positions: session.machine.current_positions(),
        })
    }

    /// Decode a message. Same operation as [`SessionManager::encode`].
    pub fn decode(
        &mut self,
        id: &SessionId,
        message: &str,
        env: &E,
    ) -> Result<EncodeResponse, SessionError> {
        self.encode(id, message, env)
    }

    /// Return a session's rotors to their starting positions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionNotFound` if the session doesn't exist.
    pub fn reset(&mut self, id: &SessionId) -> Result<(), SessionError> {
        let session =
            self.sessions.get_mut(id).ok_or_else(|| SessionError::SessionNotFound(id.clone()))?;
        session.machine.reset();
        Ok(())
    }

    /// Current rotor positions, fastest-first, excluding the reflector.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionNotFound` if the session doesn't exist.
    pub fn positions(&self, id: &SessionId) -> Result<Vec<char>, SessionError> {
        self.machine(id)
            .map(Enigma::current_positions)
            .ok_or_else(|| SessionError::SessionNotFound(id.clone()))
    }

    /// Discard a session and its machine.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionNotFound` if the session doesn't exist.
    pub fn delete_session(&mut self, id: &SessionId) -> Result<(), SessionError> {
        self.sessions.remove(id).ok_or_else(|| SessionError::SessionNotFound(id.clone()))?;
        tracing::debug!(session = %id, "deleted session");
        Ok(())
    }

    /// Dispatch a request to the matching operation.
    pub fn handle(
        &mut self,
        request: SessionRequest,
        env: &E,
    ) -> Result<SessionResponse, SessionError> {
        match request {
            SessionRequest::Create { session_id, config } => {
                self.create_session(session_id.clone(), &config, env)?;
                Ok(SessionResponse::Created { session_id })
            },
            SessionRequest::Encode { session_id, message } => {
                self.encode(&session_id, &message, env).map(SessionResponse::Encoded)
            },
            SessionRequest::Reset { session_id } => {
                self.reset(&session_id)?;
                Ok(SessionResponse::Reset { session_id })
            },
            SessionRequest::Delete { session_id } => {
                self.delete_session(&session_id)?;
                Ok(SessionResponse::Deleted { session_id })
            },
        }
    }
}

impl<E> Default for SessionManager<E>
where
    E: Environment,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for SessionManager<E>
where
    E: Environment,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_count", &self.sessions.len())
            .field("default_config", &self.default_config)
            .finish()
    }
}
