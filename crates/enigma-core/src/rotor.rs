//! A single wheel: wiring, ring setting, rotation and notch.
//!
//! Reflectors are modelled as rotors with no notch, ring setting 1 and a
//! position pinned to `A`.

use crate::{
    alphabet::{ALPHABET_SIZE, Letter},
    error::EnigmaError,
    wiring::{ReflectorType, RotorType, Wiring},
};

/// Lowest ring setting (Ringstellung), `A`.
pub const MIN_RING_SETTING: u8 = 1;

/// Highest ring setting, `Z`.
pub const MAX_RING_SETTING: u8 = ALPHABET_SIZE;

/// A rotating substitution wheel.
///
/// # Invariants
///
/// - `position` lies in `0..26` (enforced by [`Letter`])
/// - `ring_setting` lies in `1..=26` and never changes after construction
/// - a rotor without a notch never changes position through [`Rotor::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: &'static Wiring,
    ring_setting: u8,
    position: Letter,
    initial_position: Letter,
    reflector: bool,
}

impl Rotor {
    /// Create a rotor of `kind` with a ring setting in `1..=26` and a
    /// starting position.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidConfiguration` if the ring setting is out
    /// of range.
    pub fn new(kind: RotorType, ring_setting: u8, position: Letter) -> Result<Self, EnigmaError> {
        if !(MIN_RING_SETTING..=MAX_RING_SETTING).contains(&ring_setting) {
            return Err(EnigmaError::invalid_configuration(format!(
                "ring setting {ring_setting} for rotor {kind} outside \
                 {MIN_RING_SETTING}..={MAX_RING_SETTING}"
            )));
        }
        Ok(Self {
            wiring: kind.wiring(),
            ring_setting,
            position,
            initial_position: position,
            reflector: false,
        })
    }

    /// Create a fixed reflector.
    pub fn reflector(kind: ReflectorType) -> Self {
        Self {
            wiring: kind.wiring(),
            ring_setting: MIN_RING_SETTING,
            position: Letter::A,
            initial_position: Letter::A,
            reflector: true,
        }
    }

    /// Wiring table name.
    pub fn name(&self) -> &'static str {
        self.wiring.name()
    }

    /// Ring setting in `1..=26`.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Current rotational position.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Position recorded at construction, restored by [`Rotor::reset`].
    pub fn initial_position(&self) -> Letter {
        self.initial_position
    }

    /// Turnover notch, if this wheel has one.
    pub fn notch(&self) -> Option<Letter> {
        self.wiring.notch()
    }

    /// Whether this rotor can ever move.
    pub fn is_stepping(&self) -> bool {
        !self.reflector && self.wiring.notch().is_some()
    }

    /// Whether this is the reflector at the end of the chain.
    pub fn is_reflector(&self) -> bool {
        self.reflector
    }

    /// True when the window shows the notch letter. Never true without a
    /// notch.
    pub fn is_at_notch(&self) -> bool {
        self.wiring.notch() == Some(self.position)
    }

    /// Offset between the wheel's contacts and the fixed entry contacts.
    fn offset(&self) -> u8 {
        Letter::from_index(self.position.index() + ALPHABET_SIZE - (self.ring_setting - 1)).index()
    }

    /// Substitute a signal travelling from the entry side towards the
    /// reflector.
    pub fn forward(&self, input: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.forward(input.shift(offset)).unshift(offset)
    }

    /// Substitute a signal returning from the reflector. Exact inverse of
    /// [`Rotor::forward`] at the same position.
    pub fn backward(&self, input: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.backward(input.shift(offset)).unshift(offset)
    }

    /// Advance one position. No-op for reflectors and notchless wheels.
    pub fn step(&mut self) {
        if self.is_stepping() {
            self.position = self.position.shift(1);
        }
    }

    /// Move to an arbitrary position without touching the recorded initial
    /// position. Ignored for reflectors.
    pub fn set_position(&mut self, position: Letter) {
        if !self.reflector {
            self.position = position;
        }
    }

    /// Return to the position recorded at construction.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }
}
