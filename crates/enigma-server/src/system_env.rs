//! Production Environment implementation using system time and RNG.

use std::time::Instant;

use crate::env::Environment;

/// Production environment using system time and OS randomness.
///
/// - Uses `std::time::Instant::now()` for time
/// - Uses `getrandom` for session id generation
#[derive(Debug, Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).unwrap_or_else(|e| {
            // Zeroed fallback keeps id generation infallible.
            tracing::error!("getrandom failed: {}", e);
            buffer.fill(0);
        });
    }
}
