//! Enigma session service.
//!
//! The collaborator around [`enigma_core`]: a keyed store that creates, looks
//! up, resets and discards machines by session id, plus a command-line front
//! end. No HTTP layer is included; any transport maps its requests onto
//! [`SessionRequest`] and [`SessionManager::handle`].
//!
//! ## Architecture
//!
//! ```text
//! enigma-server
//!   ├─ SystemEnv        (production Environment impl)
//!   ├─ SessionManager   (SessionId -> Enigma)
//!   ├─ payload          (request/response values)
//!   └─ cli              (flags, config file, stdin/stdout loop)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod env;
mod error;
pub mod payload;
mod session_manager;
mod system_env;

pub use env::Environment;
pub use error::SessionError;
pub use payload::{DEFAULT_SESSION_ID, EncodeResponse, SessionId, SessionRequest, SessionResponse};
pub use session_manager::{SessionManager, SessionMetadata};
pub use system_env::SystemEnv;
