//! False-colour tints for luminance and polarization.

use std::f64::consts::PI;

/// Sky-blue weights blended into luminance (deep sky blue scaled per channel).
pub const LUMINANCE_TINT: [f64; 3] = [0.05, 0.53, 0.79];

/// Blue-white weights blended into the degree of polarization.
pub const POLARIZATION_TINT: [f64; 3] = [0.53, 0.81, 1.00];

/// `L + (1 - L) * w` per channel, unclipped.
#[inline]
pub fn tint_luminance(l: f64) -> [f64; 3] {
    LUMINANCE_TINT.map(|w| l + (1.0 - l) * w)
}

/// `DOP * w + (1 - DOP)` per channel, unclipped.
#[inline]
pub fn tint_polarization(dop: f64) -> [f64; 3] {
    POLARIZATION_TINT.map(|w| dop * w + (1.0 - dop))
}

/// Clips every channel to [0, 1]. NaN channels stay NaN.
#[inline]
pub fn clip_unit(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|c| c.clamp(0.0, 1.0))
}

/// Wraps an angle of polarization into [0, pi].
///
/// Uses a Euclidean remainder so negative angles land in range too.
#[inline]
pub fn wrap_aop(aop: f64) -> f64 {
    aop.rem_euclid(PI).clamp(0.0, PI)
}
