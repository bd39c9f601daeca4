//! The judge: measures each engine claim against the catalog and the oracle,
//! and keeps the running record of which elements have been discovered.

use crate::core::catalog;
use crate::core::models::nucleus::Nucleus;
use crate::core::models::verdict::Verdict;
use crate::core::stability;
use std::collections::BTreeSet;
use tracing::info;

/// Evaluates submissions and owns the discovered-element set.
///
/// Evaluation itself is stateless; the only mutation is the monotonically
/// growing set of atomic numbers whose stable form has been reached at least
/// once. Discovery tracks *reality*: an element counts as found whenever a
/// reality-stable, in-catalog configuration comes past, whether or not the
/// engine claimed anything about it.
#[derive(Debug, Default)]
pub struct Judge {
    discovered: BTreeSet<u32>,
}

impl Judge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules on one submission. Always returns a verdict; the only side
    /// effect is inserting the element into the discovered set when the
    /// configuration is reality-stable and in the catalog (idempotent).
    pub fn evaluate(&mut self, nucleus: Nucleus, engine_claimed_stable: bool) -> Verdict {
        let z = nucleus.protons;
        let matched_element = catalog::lookup(z);
        let in_catalog = matched_element.is_some();
        let reality_stable = stability::is_reality_stable(z, nucleus.neutrons);
        let nearest_stable_n = if in_catalog {
            stability::nearest_stable_n(z, nucleus.neutrons)
        } else {
            None
        };
        let is_correct = engine_claimed_stable && reality_stable && in_catalog;

        if reality_stable {
            if let Some(element) = matched_element {
                if self.discovered.insert(z) {
                    info!(
                        symbol = element.symbol,
                        name = element.name,
                        atomic_number = z,
                        "element discovered"
                    );
                }
            }
        }

        Verdict {
            nucleus,
            engine_claimed_stable,
            reality_stable,
            in_catalog,
            matched_element,
            nearest_stable_n,
            is_correct,
        }
    }

    /// The atomic numbers discovered so far, ascending.
    pub fn discovered_z(&self) -> &BTreeSet<u32> {
        &self.discovered
    }

    /// Forgets every discovery. The reset hook for a fresh run.
    pub fn clear_discoveries(&mut self) {
        self.discovered.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_claim_requires_claim_reality_and_catalog() {
        let mut judge = Judge::new();
        let verdict = judge.evaluate(Nucleus::new(6, 6), true);
        assert!(verdict.is_correct);
        assert!(verdict.reality_stable);
        assert!(verdict.in_catalog);
        assert_eq!(verdict.matched_element.unwrap().symbol, "C");
        assert_eq!(verdict.nearest_stable_n, Some(6));
    }

    #[test]
    fn unclaimed_stable_configuration_is_not_correct_but_still_discovered() {
        let mut judge = Judge::new();
        let verdict = judge.evaluate(Nucleus::new(6, 6), false);
        assert!(!verdict.is_correct);
        assert!(judge.discovered_z().contains(&6));
    }

    #[test]
    fn claimed_unstable_configuration_is_not_correct() {
        let mut judge = Judge::new();
        let verdict = judge.evaluate(Nucleus::new(6, 20), true);
        assert!(!verdict.is_correct);
        assert!(verdict.in_catalog);
        assert!(!verdict.reality_stable);
        assert!(judge.discovered_z().is_empty());
    }

    #[test]
    fn out_of_catalog_protons_yield_a_fully_negative_verdict() {
        let mut judge = Judge::new();
        let verdict = judge.evaluate(Nucleus::new(119, 180), true);
        assert!(!verdict.in_catalog);
        assert!(!verdict.reality_stable);
        assert!(!verdict.is_correct);
        assert_eq!(verdict.matched_element, None);
        assert_eq!(verdict.nearest_stable_n, None);
    }

    #[test]
    fn nearest_stable_n_is_reported_even_for_unstable_configurations() {
        let mut judge = Judge::new();
        let verdict = judge.evaluate(Nucleus::new(26, 40), false);
        assert!(!verdict.reality_stable);
        assert_eq!(verdict.nearest_stable_n, Some(32));
    }

    #[test]
    fn evaluation_is_idempotent_up_to_the_discovery_side_effect() {
        let mut judge = Judge::new();
        let first = judge.evaluate(Nucleus::new(8, 8), true);
        let second = judge.evaluate(Nucleus::new(8, 8), true);
        assert_eq!(first, second);
        assert_eq!(judge.discovered_z().len(), 1);
    }

    #[test]
    fn clear_discoveries_resets_the_record() {
        let mut judge = Judge::new();
        judge.evaluate(Nucleus::new(2, 2), false);
        assert!(!judge.discovered_z().is_empty());
        judge.clear_discoveries();
        assert!(judge.discovered_z().is_empty());
    }

    #[test]
    fn discovered_set_stays_within_the_catalog() {
        let mut judge = Judge::new();
        for z in 0..200 {
            judge.evaluate(Nucleus::new(z, z + z / 2), true);
        }
        for &z in judge.discovered_z() {
            assert!(catalog::lookup(z).is_some());
        }
    }
}
