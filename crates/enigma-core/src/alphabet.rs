//! The 26-letter alphabet and its index arithmetic.
//!
//! Every component works on [`Letter`], an index in `0..26` bijective with
//! `A..=Z`. All offsets wrap modulo [`ALPHABET_SIZE`].

use std::fmt;

use crate::error::EnigmaError;

/// Number of letters on every wheel and plug socket.
pub const ALPHABET_SIZE: u8 = 26;

/// A single uppercase letter, stored as its alphabet index.
///
/// # Invariants
///
/// - The index always lies in `0..ALPHABET_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// `A`, the zero position.
    pub const A: Self = Self(0);

    /// Build a letter from an index, wrapping it into the alphabet.
    pub const fn from_index(index: u8) -> Self {
        Self(index % ALPHABET_SIZE)
    }

    /// Parse a strict uppercase ASCII letter.
    pub fn from_char(character: char) -> Result<Self, EnigmaError> {
        if character.is_ascii_uppercase() {
            Ok(Self(character as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidCharacter { character })
        }
    }

    /// Alphabet index in `0..26`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The uppercase character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Shift forward by `offset` places, wrapping around `Z`.
    #[must_use]
    pub const fn shift(self, offset: u8) -> Self {
        Self((self.0 + offset % ALPHABET_SIZE) % ALPHABET_SIZE)
    }

    /// Shift backward by `offset` places, wrapping around `A`.
    #[must_use]
    pub const fn unshift(self, offset: u8) -> Self {
        Self((self.0 + ALPHABET_SIZE - offset % ALPHABET_SIZE) % ALPHABET_SIZE)
    }

    /// All 26 letters in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE).map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::from_char(character)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
