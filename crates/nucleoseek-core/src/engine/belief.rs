//! The engine's private model of where stable nuclei live.
//!
//! This is the walker's *belief*, not ground truth: a different piecewise
//! ratio curve from the oracle's in [`crate::core::stability`], wrong in
//! different places. The mismatch between the two is what makes the engine's
//! claims sometimes right and sometimes confidently wrong, so these formulas
//! must never be merged with the oracle's.

use super::config::EngineParams;

/// The N/Z ratio the engine believes is stable at proton count `z`.
///
/// 1.0 + 0.01·Z through Z=20, a 1.55 plateau from Z=82, and a straight line
/// between (20, 1.2) and (82, 1.55) in the middle.
pub(super) fn believed_ratio(z: u32) -> f64 {
    let z = z as f64;
    if z <= 20.0 {
        1.0 + 0.01 * z
    } else if z >= 82.0 {
        1.55
    } else {
        1.2 + (z - 20.0) / 62.0 * 0.35
    }
}

/// The neutron count the engine aims for at proton count `z`.
pub(super) fn believed_target_n(z: u32) -> u32 {
    let target = (believed_ratio(z) * z as f64).round();
    if target < 0.0 { 0 } else { target as u32 }
}

/// The engine's own stability rule: does the walker believe (z, n) is stable?
///
/// Uses the *continuous* ratio target (not the rounded one) and a tolerance
/// band that widens with Z, so heavy elements are claimed more generously.
pub(super) fn thinks_stable(z: u32, n: u32, params: &EngineParams) -> bool {
    if z == 0 || n == 0 {
        return false;
    }
    let target = believed_ratio(z) * z as f64;
    let tolerance = params.base_tolerance + params.tolerance_slope * z as f64;
    (n as f64 - target).abs() <= tolerance
}
