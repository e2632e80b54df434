//! Enigma cipher engine.
//!
//! A pure, synchronous simulation of the electromechanical rotor machine:
//! plugboard, stepping rotors with ring settings and notches, and a
//! reflector, composed into a reciprocal substitution that changes after
//! every keystroke.
//!
//! # Example
//!
//! ```
//! use enigma_core::{Enigma, MachineConfig};
//!
//! let config = MachineConfig::new(&["I", "II", "III"], "B");
//! let mut machine = Enigma::new(&config)?;
//! assert_eq!(machine.encode("AAAAA"), "BDZGO");
//!
//! machine.reset();
//! assert_eq!(machine.decode("BDZGO"), "AAAAA");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```
//!
//! # Design
//!
//! - Wiring tables are compile-time statics shared by reference
//! - The rotor chain is an index-ordered `Vec`, fastest-first, so neighbour
//!   lookups need no back-references
//! - No I/O and no global mutable state: session handling lives in the
//!   caller

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod chain;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod rotor;
pub mod wiring;

pub use alphabet::{ALPHABET_SIZE, Letter};
pub use chain::{PAWL_COUNT, RotorChain};
pub use config::{DEFAULT_REFLECTOR, DEFAULT_ROTOR_SEQUENCE, MachineConfig};
pub use error::EnigmaError;
pub use machine::Enigma;
pub use plugboard::{PlugLead, Plugboard};
pub use rotor::{MAX_RING_SETTING, MIN_RING_SETTING, Rotor};
pub use wiring::{ReflectorType, RotorType, Wiring};
