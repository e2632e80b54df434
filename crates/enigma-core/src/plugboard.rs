//! Plug leads and the plugboard (Steckerbrett).

use std::{fmt, str::FromStr};

use crate::{alphabet::Letter, error::EnigmaError};

/// A cable swapping two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugLead {
    a: Letter,
    b: Letter,
}

impl PlugLead {
    /// Connect two letters.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidPlugSpec` if both ends name the same
    /// letter.
    pub fn new(a: Letter, b: Letter) -> Result<Self, EnigmaError> {
        if a == b {
            return Err(EnigmaError::InvalidPlugSpec { spec: format!("{a}{b}") });
        }
        Ok(Self { a, b })
    }

    /// The two connected letters, in the order given.
    pub fn ends(&self) -> (Letter, Letter) {
        (self.a, self.b)
    }

    /// Whether this lead touches `letter`.
    pub fn connects(&self, letter: Letter) -> bool {
        self.a == letter || self.b == letter
    }

    /// The paired letter, or `letter` itself when this lead doesn't touch it.
    pub fn encode(&self, letter: Letter) -> Letter {
        if letter == self.a {
            self.b
        } else if letter == self.b {
            self.a
        } else {
            letter
        }
    }
}

impl FromStr for PlugLead {
    type Err = EnigmaError;

    /// Parse a two-letter spec such as `"AB"`. Lowercase is accepted.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || EnigmaError::InvalidPlugSpec { spec: spec.to_string() };

        let mut letters = spec.chars().map(|c| Letter::from_char(c.to_ascii_uppercase()));
        match (letters.next(), letters.next(), letters.next()) {
            (Some(Ok(a)), Some(Ok(b)), None) => Self::new(a, b).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PlugLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}

/// An ordered set of plug leads applied before and after the rotor stack.
///
/// Leads are expected to be pairwise disjoint. The board does not enforce
/// this: overlapping leads are applied in insertion order, which yields a
/// well-defined but non-reciprocal substitution. Use
/// [`Plugboard::overlapping_letters`] to detect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    leads: Vec<PlugLead>,
}

impl Plugboard {
    /// Create an empty board (every letter maps to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from two-letter specs.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidPlugSpec` on the first malformed spec.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, EnigmaError> {
        let leads = specs.iter().map(|s| s.as_ref().parse()).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { leads })
    }

    /// Append a lead.
    pub fn add(&mut self, lead: PlugLead) {
        self.leads.push(lead);
    }

    /// Leads in insertion order.
    pub fn leads(&self) -> &[PlugLead] {
        &self.leads
    }

    /// Route `letter` through every lead in insertion order.
    pub fn encode(&self, letter: Letter) -> Letter {
        self.leads.iter().fold(letter, |current, lead| lead.encode(current))
    }

    /// Letters plugged into more than one lead, in alphabet order.
    pub fn overlapping_letters(&self) -> Vec<Letter> {
        Letter::all()
            .filter(|&letter| self.leads.iter().filter(|lead| lead.connects(letter)).count() > 1)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn lead_swaps_both_ways() {
        let lead: PlugLead = "AG".parse().unwrap();
        assert_eq!(lead.encode(letter('A')), letter('G'));
        assert_eq!(lead.encode(letter('G')), letter('A'));
        assert_eq!(lead.encode(letter('D')), letter('D'));
    }

    #[test]
    fn lead_accepts_lowercase() {
        let lead: PlugLead = "dz".parse().unwrap();
        assert_eq!(lead.to_string(), "DZ");
    }

    #[test]
    fn lead_rejects_malformed_specs() {
        for spec in ["", "A", "ABC", "AA", "A1", "A B", "ÄB"] {
            assert!(
                matches!(spec.parse::<PlugLead>(), Err(EnigmaError::InvalidPlugSpec { .. })),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_board_is_identity() {
        let board = Plugboard::new();
        for l in Letter::all() {
            assert_eq!(board.encode(l), l);
        }
    }

    #[test]
    fn board_applies_every_lead() {
        let board = Plugboard::from_specs(&["SZ", "GT", "DV", "KU"]).unwrap();
        assert_eq!(board.encode(letter('K')), letter('U'));
        assert_eq!(board.encode(letter('A')), letter('A'));
        assert_eq!(board.encode(letter('Z')), letter('S'));
        assert!(board.overlapping_letters().is_empty());
    }

    #[test]
    fn board_stops_at_first_bad_spec() {
        let result = Plugboard::from_specs(&["AB", "CDE", "FG"]);
        assert_eq!(result, Err(EnigmaError::InvalidPlugSpec { spec: "CDE".to_string() }));
    }

    #[test]
    fn overlapping_leads_are_order_dependent() {
        let mut board = Plugboard::new();
        board.add("AB".parse().unwrap());
        board.add("BC".parse().unwrap());

        assert_eq!(board.overlapping_letters(), vec![letter('B')]);
        // A -> B -> C, but C -> B only.
        assert_eq!(board.encode(letter('A')), letter('C'));
        assert_eq!(board.encode(letter('C')), letter('B'));
    }
}
