//! Machine configuration.
//!
//! Field names follow the session service request body, so a
//! `MachineConfig` deserializes directly from a `create` request.

use serde::{Deserialize, Serialize};

use crate::{
    alphabet::Letter,
    error::EnigmaError,
    plugboard::Plugboard,
    rotor::Rotor,
    wiring::{ReflectorType, RotorType},
};

/// Rotor sequence used when none is given, slowest-first.
pub const DEFAULT_ROTOR_SEQUENCE: [&str; 3] = ["III", "II", "I"];

/// Reflector used when none is given.
pub const DEFAULT_REFLECTOR: &str = "B";

/// Settings needed to assemble an [`Enigma`](crate::Enigma).
///
/// Sequences are ordered slowest-first (left to right as seen through the
/// machine's windows). The engine reverses them internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Rotor type names, slowest-first.
    pub rotor_sequence: Vec<String>,
    /// Reflector type name.
    pub reflector: String,
    /// Ring settings in `1..=26`, one per rotor, slowest-first.
    pub ring_setting: Vec<u8>,
    /// Starting window letters, one per rotor, slowest-first.
    pub initial_positions: String,
    /// Two-letter plug lead specs.
    pub plug_combinations: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotor_sequence: DEFAULT_ROTOR_SEQUENCE.iter().map(ToString::to_string).collect(),
            reflector: DEFAULT_REFLECTOR.to_string(),
            ring_setting: vec![1; DEFAULT_ROTOR_SEQUENCE.len()],
            initial_positions: "A".repeat(DEFAULT_ROTOR_SEQUENCE.len()),
            plug_combinations: Vec::new(),
        }
    }
}

/// Validated components ready to be assembled into a machine.
pub(crate) struct Parts {
    /// Rotors ordered fastest-first.
    pub rotors: Vec<Rotor>,
    pub reflector: Rotor,
    pub plugboard: Plugboard,
}

impl MachineConfig {
    /// Build a configuration with the given rotors and reflector, ring
    /// settings of 1, all windows at `A` and no plugs.
    pub fn new<S: AsRef<str>>(rotor_sequence: &[S], reflector: &str) -> Self {
        Self {
            rotor_sequence: rotor_sequence.iter().map(|s| s.as_ref().to_string()).collect(),
            reflector: reflector.to_string(),
            ring_setting: vec![1; rotor_sequence.len()],
            initial_positions: "A".repeat(rotor_sequence.len()),
            plug_combinations: Vec::new(),
        }
    }

    /// Replace the ring settings.
    #[must_use]
    pub fn with_ring_settings(mut self, ring_setting: &[u8]) -> Self {
        self.ring_setting = ring_setting.to_vec();
        self
    }

    /// Replace the starting window letters.
    #[must_use]
    pub fn with_positions(mut self, initial_positions: &str) -> Self {
        self.initial_positions = initial_positions.to_string();
        self
    }

    /// Replace the plug leads.
    #[must_use]
    pub fn with_plugs<S: AsRef<str>>(mut self, plug_combinations: &[S]) -> Self {
        self.plug_combinations =
            plug_combinations.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Check every setting without keeping the assembled machine.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        self.parts().map(|_| ())
    }

    pub(crate) fn parts(&self) -> Result<Parts, EnigmaError> {
        let count = self.rotor_sequence.len();
        if count == 0 {
            return Err(EnigmaError::invalid_configuration("rotor sequence is empty"));
        }
        if self.ring_setting.len() != count {
            return Err(EnigmaError::invalid_configuration(format!(
                "{} ring settings for {count} rotors",
                self.ring_setting.len()
            )));
        }

        let positions = self
            .initial_positions
            .chars()
            .map(|c| {
                Letter::from_char(c.to_ascii_uppercase()).map_err(|_| {
                    EnigmaError::invalid_configuration(format!(
                        "initial position {c:?} is not a letter"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if positions.len() != count {
            return Err(EnigmaError::invalid_configuration(format!(
                "{} initial positions for {count} rotors",
                positions.len()
            )));
        }

        let rotors = self
            .rotor_sequence
            .iter()
            .zip(&self.ring_setting)
            .zip(positions)
            .rev()
            .map(|((name, &ring), position)| Rotor::new(name.parse::<RotorType>()?, ring, position))
            .collect::<Result<Vec<_>, _>>()?;

        let reflector = Rotor::reflector(self.reflector.parse::<ReflectorType>()?);
        let plugboard = Plugboard::from_specs(&self.plug_combinations)?;

        Ok(Parts { rotors, reflector, plugboard })
    }
}
