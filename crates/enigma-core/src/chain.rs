//! Ordered rotor stack and the stepping mechanism.
//!
//! The chain is an indexable sequence ordered fastest-first: `rotors[0]` is
//! the entry (rightmost) wheel and `rotors[i + 1]` is the neighbour of
//! `rotors[i]` towards the reflector. The reflector closes the chain.
//!
//! ## Stepping
//!
//! Each keystroke moves a set of pawls before the signal flows. Pawl 0
//! always pushes the fast rotor. Pawl `j` (for `j` in `1..PAWL_COUNT`) rides
//! the rim of `rotors[j - 1]`; when that rotor shows its notch, the pawl
//! drops into it and pushes both `rotors[j - 1]` and `rotors[j]`.
//!
//! All notch checks use the positions from before the keystroke, and each
//! rotor moves at most one place per keystroke. The middle rotor therefore
//! steps twice in three keystrokes whenever it reaches its notch (the
//! double-step): once when carried by the fast rotor, and again because its
//! own notch engages the next pawl.
//!
//! Past the pawls the carry continues as a plain cascade: `rotors[k]` steps
//! when `rotors[k - 1]` stood on its notch and is itself stepping this
//! keystroke. Notchless wheels (Beta, Gamma) stop the cascade.

use crate::{alphabet::Letter, rotor::Rotor};

/// Number of pawls in the stepping mechanism (three on the M3 and M4).
///
/// Rotors beyond the pawls only move when carried by their neighbour.
pub const PAWL_COUNT: usize = 3;

/// Stepping rotors plus the reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorChain {
    rotors: Vec<Rotor>,
    reflector: Rotor,
}

impl RotorChain {
    /// Assemble a chain from rotors ordered fastest-first and a reflector.
    pub fn new(rotors: Vec<Rotor>, reflector: Rotor) -> Self {
        Self { rotors, reflector }
    }

    /// Rotors ordered fastest-first, excluding the reflector.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The reflector at the end of the chain.
    pub fn reflector(&self) -> &Rotor {
        &self.reflector
    }

    /// Fastest (entry) rotor.
    pub fn fast(&self) -> Option<&Rotor> {
        self.rotors.first()
    }

    /// Neighbour of the fast rotor towards the reflector.
    pub fn middle(&self) -> Option<&Rotor> {
        self.rotors.get(1)
    }

    /// Current positions, fastest-first.
    pub fn positions(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Advance the stack by one keystroke.
    ///
    /// A rotor moves at most once per keystroke, so with the fast and middle
    /// rotors both on their notches `AEV` becomes `BFW`, not `BGW`.
    pub fn step(&mut self) {
        let zone = self.rotors.len().min(PAWL_COUNT);
        let mut push = vec![false; self.rotors.len()];

        if zone > 0 {
            push[0] = true;
        }
        for pawl in 1..zone {
            if self.rotors[pawl - 1].is_at_notch() {
                push[pawl - 1] = true;
                push[pawl] = true;
            }
        }
        for k in zone..self.rotors.len() {
            let carrier = &self.rotors[k - 1];
            push[k] = push[k - 1] && carrier.is_stepping() && carrier.is_at_notch();
        }

        for (rotor, pushed) in self.rotors.iter_mut().zip(push) {
            if pushed {
                rotor.step();
            }
        }
    }

    /// Signal path from the entry wheel through every rotor, the reflector,
    /// and back out through the rotors in reverse.
    pub fn substitute(&self, input: Letter) -> Letter {
        let inbound = self.rotors.iter().fold(input, |signal, rotor| rotor.forward(signal));
        let reflected = self.reflector.forward(inbound);
        self.rotors.iter().rev().fold(reflected, |signal, rotor| rotor.backward(signal))
    }

    /// Return every rotor to its initial position.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }
}
