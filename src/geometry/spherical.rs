//! Cartesian to spherical conversion.
//!
//! Azimuth is measured as `atan2(x, y)`: the first coordinate is the first
//! argument. The cube face orientations in `cube_box` depend on this order,
//! so `sph2vec` inverts it with `x = sin(theta) sin(phi)` and
//! `y = sin(theta) cos(phi)`.

use glam::DVec3;

/// A single direction in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Elevation from the +z axis, in [0, pi].
    pub theta: f64,
    /// Azimuth, in (-pi, pi].
    pub phi: f64,
    /// Radius after `sanitize_radius`.
    pub rho: f64,
}

/// Parallel arrays of spherical coordinates, aligned by input index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphericalBatch {
    /// Elevation of each vector, in [0, pi].
    pub theta: Vec<f64>,
    /// Azimuth of each vector, in (-pi, pi].
    pub phi: Vec<f64>,
    /// Radius of each vector, with zero replaced by 1.
    pub rho: Vec<f64>,
}

impl SphericalBatch {
    /// Number of converted vectors.
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    /// True when the batch holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// Replaces an exactly zero radius with 1 so normalisation never divides by zero.
///
/// The zero vector then normalises to itself. The angles obtained from it are
/// finite but carry no physical meaning.
#[inline]
pub fn sanitize_radius(rho: f64) -> f64 {
    if rho == 0.0 {
        1.0
    } else {
        rho
    }
}

/// Converts a Cartesian vector to (theta, phi, rho).
///
/// # Example
/// ```
/// use glam::DVec3;
/// use skypol::geometry::vec2sph;
///
/// let s = vec2sph(DVec3::new(0.0, 0.0, 2.0));
/// assert_eq!(s.theta, 0.0);
/// assert_eq!(s.rho, 2.0);
/// ```
pub fn vec2sph(vec: DVec3) -> SphericalCoord {
    let rho = sanitize_radius(vec.length());
    let v = vec / rho;

    SphericalCoord {
        theta: v.z.clamp(-1.0, 1.0).acos(),
        phi: v.x.atan2(v.y),
        rho,
    }
}

/// Converts a batch of vectors to spherical coordinates.
///
/// # Arguments
/// * `vecs` - Cartesian vectors; zero vectors are allowed
///
/// # Returns
/// Three parallel arrays `(theta, phi, rho)` aligned with `vecs`
pub fn vec2sph_batch(vecs: &[DVec3]) -> SphericalBatch {
    let mut batch = SphericalBatch {
        theta: Vec::with_capacity(vecs.len()),
        phi: Vec::with_capacity(vecs.len()),
        rho: Vec::with_capacity(vecs.len()),
    };

    for &vec in vecs {
        let s = vec2sph(vec);
        batch.theta.push(s.theta);
        batch.phi.push(s.phi);
        batch.rho.push(s.rho);
    }

    batch
}

/// Reconstructs the Cartesian vector for `vec2sph`'s angle convention.
pub fn sph2vec(theta: f64, phi: f64, rho: f64) -> DVec3 {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    DVec3::new(st * sp, st * cp, ct) * rho
}
