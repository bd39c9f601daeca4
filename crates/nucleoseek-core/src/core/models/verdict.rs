use super::nucleus::Nucleus;
use crate::core::catalog::ElementDef;
use serde::Serialize;

/// The judge's ruling on a single engine submission.
///
/// A verdict is an ephemeral value: it is produced once per evaluation,
/// consumed by whoever drives the tick loop, and only retained in a bounded
/// presentation history. All fields are fixed at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// The nucleus that was submitted.
    pub nucleus: Nucleus,
    /// Whether the engine itself believed this configuration is stable.
    pub engine_claimed_stable: bool,
    /// Whether the oracle considers the configuration stable in reality.
    pub reality_stable: bool,
    /// Whether the proton count corresponds to a known element.
    pub in_catalog: bool,
    /// The catalog entry for the proton count, when one exists.
    pub matched_element: Option<&'static ElementDef>,
    /// The closest known or approximated stable neutron count, when the
    /// proton count is in the catalog.
    pub nearest_stable_n: Option<u32>,
    /// True iff the engine claimed stability *and* reality agrees *and* the
    /// element exists. A correct claim is what earns the engine a solved mark.
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness_field_implies_catalog_and_reality_fields() {
        // The constructor site (Judge::evaluate) upholds this; the type
        // itself just carries the fields, so exercise the invariant shape.
        let verdict = Verdict {
            nucleus: Nucleus::new(6, 6),
            engine_claimed_stable: true,
            reality_stable: true,
            in_catalog: true,
            matched_element: crate::core::catalog::lookup(6),
            nearest_stable_n: Some(6),
            is_correct: true,
        };
        assert!(!verdict.is_correct || (verdict.in_catalog && verdict.reality_stable));
    }
}
