//! Single-scattering Rayleigh sky.

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{SkyFeatures, SkyModel};
use crate::geometry::sph2vec;

/// Analytic Rayleigh sky lit by a single sun.
///
/// Directions below the horizon (`theta > pi/2`) return zero luminance, a NaN
/// degree of polarization and a zero angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayleighSky {
    /// Sun zenith angle in radians.
    pub sun_theta: f64,
    /// Sun azimuth in radians, same convention as `vec2sph`.
    pub sun_phi: f64,
    /// Degree of polarization at 90 degrees from the sun.
    pub dop_max: f64,
}

impl Default for RayleighSky {
    fn default() -> Self {
        Self {
            sun_theta: 30f64.to_radians(),
            sun_phi: 0.0,
            dop_max: 0.75,
        }
    }
}

impl RayleighSky {
    /// Creates a sky with the sun at the given zenith angle and azimuth (radians).
    pub fn new(sun_theta: f64, sun_phi: f64) -> Self {
        Self {
            sun_theta,
            sun_phi,
            ..Default::default()
        }
    }

    /// Creates a sky from angles in degrees.
    pub fn from_degrees(sun_zenith_deg: f64, sun_azimuth_deg: f64) -> Self {
        Self::new(sun_zenith_deg.to_radians(), sun_azimuth_deg.to_radians())
    }

    /// Sets the maximum degree of polarization.
    pub fn with_dop_max(mut self, dop_max: f64) -> Self {
        self.dop_max = dop_max;
        self
    }

    /// Unit vector pointing at the sun.
    pub fn sun_direction(&self) -> DVec3 {
        sph2vec(self.sun_theta, self.sun_phi, 1.0)
    }

    /// Evaluates `(luminance, dop, aop)` for a single direction.
    pub fn sample(&self, theta: f64, phi: f64) -> (f64, f64, f64) {
        if theta > std::f64::consts::FRAC_PI_2 {
            return (0.0, f64::NAN, 0.0);
        }

        let view = sph2vec(theta, phi, 1.0);
        let sun = self.sun_direction();
        let cos_gamma = view.dot(sun).clamp(-1.0, 1.0);
        let cos2 = cos_gamma * cos_gamma;

        let dop = self.dop_max * (1.0 - cos2) / (1.0 + cos2);

        // Rayleigh phase function, brightened towards the horizon.
        let horizon = 0.6 + 0.4 * (1.0 - theta.cos());
        let luminance = (0.5 * (1.0 + cos2) * horizon).clamp(0.0, 1.0);

        // E-vector is perpendicular to the scattering plane; measure it from
        // the local meridian (towards zenith) to east.
        let e = view.cross(sun);
        let aop = if e.length_squared() < 1e-24 {
            0.0
        } else {
            let (st, ct) = theta.sin_cos();
            let (sp, cp) = phi.sin_cos();
            let up = DVec3::new(-ct * sp, -ct * cp, st);
            let east = DVec3::new(cp, -sp, 0.0);
            e.dot(east).atan2(e.dot(up))
        };

        (luminance, dop, aop)
    }
}

impl SkyModel for RayleighSky {
    fn get_features(&self, theta: &[f64], phi: &[f64]) -> SkyFeatures {
        debug_assert_eq!(theta.len(), phi.len());

        let samples: Vec<(f64, f64, f64)> = theta
            .par_iter()
            .zip(phi.par_iter())
            .map(|(&t, &p)| self.sample(t, p))
            .collect();

        let mut features = SkyFeatures::zeros(samples.len());
        for (i, (l, dop, aop)) in samples.into_iter().enumerate() {
            features.luminance[i] = l;
            features.dop[i] = dop;
            features.aop[i] = aop;
        }
        features
    }
}
