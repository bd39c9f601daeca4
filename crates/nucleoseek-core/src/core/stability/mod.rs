//! The stability oracle: the ground truth the judge measures claims against.
//!
//! Two tiers: an exact table of known-stable neutron counts for the lighter
//! elements, and a parametric valley-of-stability curve used wherever the
//! table is absent or deliberately empty. This curve is *not* the same
//! formula as the engine's private belief in [`crate::engine::belief`]; the
//! two must stay separate implementations, because their disagreement is the
//! phenomenon the simulation exists to show.

mod curve;
mod isotopes;
mod oracle;

pub use curve::approximate_stable_n;
pub use oracle::{is_reality_stable, nearest_stable_n, target_neutron_counts};
