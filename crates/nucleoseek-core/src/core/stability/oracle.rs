use super::{curve, isotopes};
use crate::core::catalog;

/// How far a neutron count may sit from a target and still be ruled stable.
/// A fixed design constant of the oracle, not a tunable tolerance.
const STABILITY_WINDOW: u32 = 1;

/// The stable neutron counts the oracle measures a submission against.
///
/// Returns the explicit isotope list for `z` when one is present and
/// non-empty; otherwise a single-element fallback from the approximate
/// valley curve. Elements with a present-but-empty list (technetium,
/// promethium and friends) deliberately take the fallback path, so even they
/// have one approximate target rather than being permanently unjudgeable.
pub fn target_neutron_counts(z: u32) -> Vec<u32> {
    match isotopes::STABLE_NEUTRON_COUNTS.get(&z) {
        Some(counts) if !counts.is_empty() => counts.to_vec(),
        _ => vec![curve::approximate_stable_n(z)],
    }
}

/// Whether reality considers the configuration (z, n) stable.
///
/// False for any proton count outside the element catalog; otherwise true iff
/// `n` lies within the fixed window of some target neutron count.
pub fn is_reality_stable(z: u32, n: u32) -> bool {
    if catalog::lookup(z).is_none() {
        return false;
    }
    target_neutron_counts(z)
        .iter()
        .any(|&target| n.abs_diff(target) <= STABILITY_WINDOW)
}

/// The single closest stable (or approximated-stable) neutron count to `n`,
/// or `None` when `z` is not a known element.
///
/// The targets are scanned in ascending order and the first minimal
/// difference wins, so the smaller of two equidistant candidates is reported.
pub fn nearest_stable_n(z: u32, n: u32) -> Option<u32> {
    if catalog::lookup(z).is_none() {
        return None;
    }
    let mut best: Option<(u32, u32)> = None;
    for target in target_neutron_counts(z) {
        let diff = n.abs_diff(target);
        if best.is_none_or(|(_, best_diff)| diff < best_diff) {
            best = Some((target, diff));
        }
    }
    best.map(|(target, _)| target)
}
