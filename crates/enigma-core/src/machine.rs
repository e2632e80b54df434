//! The Enigma engine.
//!
//! Owns one rotor chain and one plugboard. Each keystroke runs:
//!
//! ```text
//! plugboard -> step -> rotors (fast..slow) -> reflector -> rotors (slow..fast) -> plugboard
//! ```
//!
//! The engine is a plain mutable value with no interior mutability. Encoding
//! mutates rotor positions, so concurrent callers must serialize access
//! externally (the borrow checker enforces this for `&mut` callers).

use crate::{
    alphabet::Letter, chain::RotorChain, config::MachineConfig, error::EnigmaError,
    plugboard::Plugboard,
};

/// A configured rotor cipher machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigma {
    chain: RotorChain,
    plugboard: Plugboard,
    config: MachineConfig,
}

impl Enigma {
    /// Assemble a machine from a configuration.
    ///
    /// Overlapping plug leads are accepted (the resulting cipher is no longer
    /// reciprocal) and reported with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error for which [`EnigmaError::is_configuration`] holds if
    /// any setting is unknown, out of range, or inconsistent with the rotor
    /// count.
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let parts = config.parts()?;

        let overlapping = parts.plugboard.overlapping_letters();
        if !overlapping.is_empty() {
            let letters: String = overlapping.iter().map(|l| l.to_char()).collect();
            tracing::warn!(%letters, "plug leads overlap; substitution is not reciprocal");
        }

        tracing::debug!(
            rotors = ?config.rotor_sequence,
            reflector = %config.reflector,
            plugs = parts.plugboard.leads().len(),
            "assembled machine"
        );

        Ok(Self {
            chain: RotorChain::new(parts.rotors, parts.reflector),
            plugboard: parts.plugboard,
            config: config.clone(),
        })
    }

    /// The configuration this machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The rotor chain.
    pub fn chain(&self) -> &RotorChain {
        &self.chain
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Encode one keystroke.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidCharacter` unless `character` is an
    /// uppercase ASCII letter. The rotors don't move on error.
    pub fn encode_character(&mut self, character: char) -> Result<char, EnigmaError> {
        let letter = Letter::from_char(character)?;
        Ok(self.encode_letter(letter).to_char())
    }

    /// Encode one keystroke given as a [`Letter`].
    pub fn encode_letter(&mut self, letter: Letter) -> Letter {
        let plugged = self.plugboard.encode(letter);
        self.chain.step();
        let scrambled = self.chain.substitute(plugged);
        self.plugboard.encode(scrambled)
    }

    /// Encode a message.
    ///
    /// ASCII letters are upper-cased and encoded, advancing the rotors once
    /// each. Every other character is copied unchanged and leaves the rotors
    /// where they are. Output letters are always uppercase.
    pub fn encode(&mut self, message: &str) -> String {
        let encoded: String = message
            .chars()
            .map(|c| match Letter::from_char(c.to_ascii_uppercase()) {
                Ok(letter) => self.encode_letter(letter).to_char(),
                Err(_) => c,
            })
            .collect();

        tracing::trace!(len = message.len(), window = %self.window(), "encoded message");
        encoded
    }

    /// Decode a message. The cipher is reciprocal, so this is [`Enigma::encode`].
    pub fn decode(&mut self, message: &str) -> String {
        self.encode(message)
    }

    /// Return every rotor to its starting position. Ring settings, wiring
    /// and plugs are unchanged.
    pub fn reset(&mut self) {
        self.chain.reset();
        tracing::debug!(window = %self.window(), "machine reset");
    }

    /// Current rotor positions, fastest-first, excluding the reflector.
    pub fn current_positions(&self) -> Vec<char> {
        self.chain.positions().into_iter().map(Letter::to_char).collect()
    }

    /// Current window letters, slowest-first (the order used by
    /// [`MachineConfig::initial_positions`]).
    pub fn window(&self) -> String {
        self.chain.positions().iter().rev().map(|l| l.to_char()).collect()
    }
}
