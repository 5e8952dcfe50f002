//! Sky optical feature models.
//!
//! A sky model maps viewing directions `(theta, phi)` to luminance, degree of
//! polarization and angle of polarization. The image mappers only depend on
//! the `SkyModel` trait.

mod rayleigh;

pub use rayleigh::RayleighSky;

/// Per-direction optical features, aligned with the queried angle arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyFeatures {
    /// Luminance, nominally in [0, 1].
    pub luminance: Vec<f64>,
    /// Degree of polarization, nominally in [0, 1]; may hold NaN.
    pub dop: Vec<f64>,
    /// Angle of polarization in radians, any real value.
    pub aop: Vec<f64>,
}

impl SkyFeatures {
    /// Allocates zeroed feature arrays for `n` directions.
    pub fn zeros(n: usize) -> Self {
        Self {
            luminance: vec![0.0; n],
            dop: vec![0.0; n],
            aop: vec![0.0; n],
        }
    }

    /// Number of directions, taken from the luminance array.
    pub fn len(&self) -> usize {
        self.luminance.len()
    }

    /// True when no directions were evaluated.
    pub fn is_empty(&self) -> bool {
        self.luminance.is_empty()
    }

    /// Forces every array to hold exactly `n` values.
    ///
    /// Extra values are dropped and missing ones are filled with NaN, so the
    /// values a model did return stay at their grid positions. A mismatch is
    /// logged with `context`, the expected length and the actual lengths.
    ///
    /// # Arguments
    /// * `n` - Number of directions that were queried
    /// * `context` - Label for the warning (e.g. the cube side)
    ///
    /// # Returns
    /// The features with all three arrays of length `n`
    pub fn fit_len(mut self, n: usize, context: &str) -> Self {
        let lens = (self.luminance.len(), self.dop.len(), self.aop.len());
        if lens != (n, n, n) {
            log::warn!(
                "{}: sky model returned {} luminance, {} dop, {} aop values for {} directions; \
                 padding with NaN / truncating",
                context, lens.0, lens.1, lens.2, n
            );
            self.luminance.resize(n, f64::NAN);
            self.dop.resize(n, f64::NAN);
            self.aop.resize(n, f64::NAN);
        }
        self
    }
}

/// A sky that can be sampled at arbitrary directions.
pub trait SkyModel {
    /// Evaluates the sky at every `(theta[i], phi[i])`.
    ///
    /// The returned arrays have the same length as the inputs.
    fn get_features(&self, theta: &[f64], phi: &[f64]) -> SkyFeatures;
}

/// Replaces a NaN degree of polarization with the `-1` sentinel.
///
/// The sentinel is pulled back into range by the clip applied after tinting.
#[inline]
pub fn sanitize_dop(dop: f64) -> f64 {
    if dop.is_nan() {
        -1.0
    } else {
        dop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dop() {
        assert_eq!(sanitize_dop(f64::NAN), -1.0);
        assert_eq!(sanitize_dop(0.25), 0.25);
        assert_eq!(sanitize_dop(-3.0), -3.0);
        assert_eq!(sanitize_dop(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_fit_len_pads_and_truncates() {
        let short = SkyFeatures {
            luminance: vec![1.0, 2.0],
            dop: vec![0.5, 0.5, 0.5, 0.5],
            aop: vec![0.1, 0.2, 0.3],
        };
        let fitted = short.fit_len(3, "test");
        assert_eq!(fitted.luminance[..2], [1.0, 2.0]);
        assert!(fitted.luminance[2].is_nan());
        assert_eq!(fitted.dop, vec![0.5; 3]);
        assert_eq!(fitted.aop, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_fit_len_keeps_matching_features() {
        let f = SkyFeatures::zeros(4);
        assert_eq!(f.clone().fit_len(4, "test"), f);
    }

    #[test]
    fn test_zeros() {
        let f = SkyFeatures::zeros(3);
        assert_eq!(f.len(), 3);
        assert!(!f.is_empty());
        assert_eq!(f.aop, vec![0.0; 3]);
    }
}
