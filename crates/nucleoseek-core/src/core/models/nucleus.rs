use serde::Serialize;
use std::fmt;

/// An immutable nuclear configuration: a proton count and a neutron count.
///
/// A `Nucleus` is a small copyable value. The engine never mutates one in
/// place; every move produces a fresh value that replaces the engine's
/// current state, so any `Nucleus` handed out stays valid forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Nucleus {
    /// The proton count (atomic number Z). Always at least 1.
    pub protons: u32,
    /// The neutron count N. May be zero (bare protium).
    pub neutrons: u32,
}

impl Nucleus {
    /// Creates a nucleus, clamping degenerate inputs instead of rejecting
    /// them: Z is floored at 1. Callers produce coordinates from random
    /// walks, so clamping at construction time is the only validation site.
    pub fn new(protons: u32, neutrons: u32) -> Self {
        Self {
            protons: protons.max(1),
            neutrons,
        }
    }

    /// The mass number A = Z + N.
    pub fn mass_number(&self) -> u32 {
        self.protons + self.neutrons
    }

    /// The exact (Z, N) pair, used as a set key by the solved-set bookkeeping.
    pub fn coordinates(&self) -> (u32, u32) {
        (self.protons, self.neutrons)
    }
}

impl fmt::Display for Nucleus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Z={}, N={})", self.protons, self.neutrons)
    }
}
