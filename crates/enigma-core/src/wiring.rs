//! Static rotor and reflector wiring tables.
//!
//! Tables are built at compile time and live for the whole process. Every
//! [`Rotor`](crate::Rotor) holds a `&'static Wiring`, so rotors of the same
//! type share one permutation instead of each carrying a copy.

use std::{fmt, str::FromStr};

use crate::{
    alphabet::{ALPHABET_SIZE, Letter},
    error::EnigmaError,
};

const SIZE: usize = ALPHABET_SIZE as usize;

/// A fixed permutation of the alphabet plus its inverse and optional notch.
#[derive(PartialEq, Eq)]
pub struct Wiring {
    name: &'static str,
    forward: [Letter; SIZE],
    backward: [Letter; SIZE],
    notch: Option<Letter>,
}

impl Wiring {
    /// Build a table from a 26-byte uppercase permutation.
    ///
    /// Evaluated in const context only; a malformed table fails compilation.
    const fn new(name: &'static str, map: &[u8; SIZE], notch: Option<u8>) -> Self {
        let mut forward = [Letter::A; SIZE];
        let mut backward = [Letter::A; SIZE];
        let mut seen = [false; SIZE];
        let mut i = 0;
        while i < SIZE {
            let out = map[i] - b'A';
            assert!(out < ALPHABET_SIZE && !seen[out as usize], "wiring must be a permutation");
            seen[out as usize] = true;
            forward[i] = Letter::from_index(out);
            backward[out as usize] = Letter::from_index(i as u8);
            i += 1;
        }
        let notch = match notch {
            Some(n) => Some(Letter::from_index(n - b'A')),
            None => None,
        };
        Self { name, forward, backward, notch }
    }

    /// Table name, e.g. `"III"` or `"B"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Letter wired to contact `input` on the entry side.
    pub fn forward(&self, input: Letter) -> Letter {
        self.forward[input.index() as usize]
    }

    /// Contact on the entry side wired to `output`.
    pub fn backward(&self, output: Letter) -> Letter {
        self.backward[output.index() as usize]
    }

    /// Turnover notch, present only for rotors I-V.
    pub fn notch(&self) -> Option<Letter> {
        self.notch
    }

    /// The permutation as a 26-character string.
    pub fn mapping(&self) -> String {
        self.forward.iter().map(|l| l.to_char()).collect()
    }
}

impl fmt::Debug for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wiring")
            .field("name", &self.name)
            .field("mapping", &self.mapping())
            .field("notch", &self.notch)
            .finish()
    }
}

static ROTOR_I: Wiring = Wiring::new("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", Some(b'Q'));
static ROTOR_II: Wiring = Wiring::new("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", Some(b'E'));
static ROTOR_III: Wiring = Wiring::new("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", Some(b'V'));
static ROTOR_IV: Wiring = Wiring::new("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", Some(b'J'));
static ROTOR_V: Wiring = Wiring::new("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", Some(b'Z'));
static ROTOR_BETA: Wiring = Wiring::new("Beta", b"LEYJVCNIXWPBQMDRTAKZGFUHOS", None);
static ROTOR_GAMMA: Wiring = Wiring::new("Gamma", b"FSOKANUERHMBTIYCWLQPZXVGJD", None);

static REFLECTOR_A: Wiring = Wiring::new("A", b"EJMZALYXVBWFCRQUONTSPIKHGD", None);
static REFLECTOR_B: Wiring = Wiring::new("B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT", None);
static REFLECTOR_C: Wiring = Wiring::new("C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL", None);

/// Rotating wheel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorType {
    /// Rotor I, notch Q.
    I,
    /// Rotor II, notch E.
    II,
    /// Rotor III, notch V.
    III,
    /// Rotor IV, notch J.
    IV,
    /// Rotor V, notch Z.
    V,
    /// Thin fourth wheel Beta, never steps.
    Beta,
    /// Thin fourth wheel Gamma, never steps.
    Gamma,
}

impl RotorType {
    /// Every rotor type in table order.
    pub const ALL: [Self; 7] =
        [Self::I, Self::II, Self::III, Self::IV, Self::V, Self::Beta, Self::Gamma];

    /// The shared wiring table for this type.
    pub fn wiring(self) -> &'static Wiring {
        match self {
            Self::I => &ROTOR_I,
            Self::II => &ROTOR_II,
            Self::III => &ROTOR_III,
            Self::IV => &ROTOR_IV,
            Self::V => &ROTOR_V,
            Self::Beta => &ROTOR_BETA,
            Self::Gamma => &ROTOR_GAMMA,
        }
    }

    /// Canonical name as used in configurations.
    pub fn name(self) -> &'static str {
        self.wiring().name()
    }
}

impl FromStr for RotorType {
    type Err = EnigmaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EnigmaError::UnknownComponentName { name: name.to_string() })
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reflector (Umkehrwalze) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorType {
    /// Reflector A.
    A,
    /// Reflector B.
    B,
    /// Reflector C.
    C,
}

impl ReflectorType {
    /// Every reflector type in table order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// The shared wiring table for this type.
    pub fn wiring(self) -> &'static Wiring {
        match self {
            Self::A => &REFLECTOR_A,
            Self::B => &REFLECTOR_B,
            Self::C => &REFLECTOR_C,
        }
    }

    /// Canonical name as used in configurations.
    pub fn name(self) -> &'static str {
        self.wiring().name()
    }
}

impl FromStr for ReflectorType {
    type Err = EnigmaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EnigmaError::UnknownComponentName { name: name.to_string() })
    }
}

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
