/// The oracle's approximate valley-of-stability N/Z ratio for a proton count.
///
/// Piecewise: 1.0 up to Z=20, rising linearly to 1.2 at Z=40, to 1.32 at
/// Z=60, to 1.45 at Z=82, then flat at 1.5 beyond lead. The breakpoints are a
/// deliberate physical heuristic rather than a fit to data; keep them exact.
fn target_ratio(z: u32) -> f64 {
    let z = z as f64;
    if z <= 20.0 {
        1.0
    } else if z <= 40.0 {
        1.0 + (z - 20.0) / 20.0 * 0.2
    } else if z <= 60.0 {
        1.2 + (z - 40.0) / 20.0 * 0.12
    } else if z <= 82.0 {
        1.32 + (z - 60.0) / 22.0 * 0.13
    } else {
        1.5
    }
}

/// Approximates the single most-stable neutron count for proton count `z`.
///
/// Rounds the ratio target to the nearest integer and bumps odd results up by
/// one, reflecting the even-N bias of real nuclides. Always returns a value
/// for z >= 1, so the fallback path can never come up empty.
pub fn approximate_stable_n(z: u32) -> u32 {
    let mut n = (target_ratio(z) * z as f64).round() as u32;
    if n % 2 == 1 {
        n += 1;
    }
    n
}
