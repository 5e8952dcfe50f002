//! Direction fields for the six faces of the sky cube.
//!
//! Each face is sampled on a half-open `[-1, 1)` grid with the third axis
//! fixed to the face plane. The per-face signs and axis orders make the edges
//! of neighbouring faces line up when the cube is unwrapped; changing any of
//! them flips or seams the rendered faces.

use glam::DVec3;

use super::face::CubeSide;
use super::spherical::vec2sph_batch;
use crate::config::GridConfig;

/// `n` evenly spaced samples from `start` towards `stop`, excluding `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = (stop - start) / n as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Builds a row-major grid: `outer` indexes rows, `inner` indexes columns.
fn mesh(inner: &[f64], outer: &[f64], point: impl Fn(f64, f64) -> DVec3) -> Vec<DVec3> {
    let mut out = Vec::with_capacity(inner.len() * outer.len());
    for &b in outer {
        for &a in inner {
            out.push(point(a, b));
        }
    }
    out
}

/// Generates the direction vectors spanning `side`.
///
/// Side faces and `Unknown` produce `width * height` vectors; caps produce
/// `width * width`.
///
/// # Arguments
/// * `side` - Face of the unit cube to sample
/// * `config` - Grid dimensions
///
/// # Returns
/// Unnormalised vectors in row-major order, outer loop over the second axis
pub fn face_directions(side: CubeSide, config: &GridConfig) -> Vec<DVec3> {
    let (w, h) = (config.width, config.height);

    match side {
        CubeSide::Left => mesh(&linspace(1.0, -1.0, w), &linspace(1.0, -1.0, h), |y, z| {
            DVec3::new(-1.0, y, z)
        }),
        CubeSide::Front => mesh(&linspace(-1.0, 1.0, w), &linspace(1.0, -1.0, h), |x, z| {
            DVec3::new(x, -1.0, z)
        }),
        CubeSide::Right => mesh(&linspace(-1.0, 1.0, w), &linspace(1.0, -1.0, h), |y, z| {
            DVec3::new(1.0, y, z)
        }),
        CubeSide::Back => mesh(&linspace(1.0, -1.0, w), &linspace(1.0, -1.0, h), |x, z| {
            DVec3::new(x, 1.0, z)
        }),
        CubeSide::Top => mesh(&linspace(-1.0, 1.0, w), &linspace(1.0, -1.0, w), |x, y| {
            DVec3::new(x, y, 1.0)
        }),
        CubeSide::Bottom => mesh(&linspace(-1.0, 1.0, w), &linspace(-1.0, 1.0, w), |x, y| {
            DVec3::new(x, y, -1.0)
        }),
        CubeSide::Unknown => vec![DVec3::ZERO; w * h],
    }
}

/// Returns `(theta, phi)` for every cell of `side`, in row-major order.
///
/// # Arguments
/// * `side` - Face of the unit cube to sample
/// * `config` - Grid dimensions
///
/// # Returns
/// Elevation and azimuth arrays, both of length `side.pixel_count(config)`
pub fn cubebox_angles(side: CubeSide, config: &GridConfig) -> (Vec<f64>, Vec<f64>) {
    let dirs = face_directions(side, config);
    log::debug!("cube side {}: {} directions", side, dirs.len());

    let batch = vec2sph_batch(&dirs);
    (batch.theta, batch.phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_linspace_excludes_endpoint() {
        assert_eq!(linspace(-1.0, 1.0, 4), vec![-1.0, -0.5, 0.0, 0.5]);
        assert_eq!(linspace(1.0, -1.0, 2), vec![1.0, 0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_face_sizes() {
        let config = GridConfig::new(5, 3);
        for side in CubeSide::all() {
            let expected = if side.is_cap() { 25 } else { 15 };
            assert_eq!(face_directions(side, &config).len(), expected, "{}", side);
        }
        assert_eq!(face_directions(CubeSide::Unknown, &config).len(), 15);
    }

    #[test]
    fn test_fixed_planes() {
        let config = GridConfig::square(4);
        let fixed = [
            (CubeSide::Left, DVec3::new(-1.0, 0.0, 0.0)),
            (CubeSide::Front, DVec3::new(0.0, -1.0, 0.0)),
            (CubeSide::Right, DVec3::new(1.0, 0.0, 0.0)),
            (CubeSide::Back, DVec3::new(0.0, 1.0, 0.0)),
            (CubeSide::Top, DVec3::new(0.0, 0.0, 1.0)),
            (CubeSide::Bottom, DVec3::new(0.0, 0.0, -1.0)),
        ];
        for (side, normal) in fixed {
            for d in face_directions(side, &config) {
                assert_eq!(d.dot(normal), 1.0, "{} direction {:?} off its plane", side, d);
                assert!(d.abs().max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn test_front_grid_layout() {
        let config = GridConfig::new(4, 2);
        let dirs = face_directions(CubeSide::Front, &config);
        // first row sits at z = 1 and sweeps x from -1
        assert_eq!(dirs[0], DVec3::new(-1.0, -1.0, 1.0));
        assert_eq!(dirs[1], DVec3::new(-0.5, -1.0, 1.0));
        assert_eq!(dirs[3], DVec3::new(0.5, -1.0, 1.0));
        // second row
        assert_eq!(dirs[4], DVec3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn test_left_and_back_sweep_backwards() {
        let config = GridConfig::square(2);
        let left = face_directions(CubeSide::Left, &config);
        assert_eq!(left[0], DVec3::new(-1.0, 1.0, 1.0));
        assert_eq!(left[1], DVec3::new(-1.0, 0.0, 1.0));
        let back = face_directions(CubeSide::Back, &config);
        assert_eq!(back[0], DVec3::new(1.0, 1.0, 1.0));
        assert_eq!(back[3], DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_caps_use_width() {
        let config = GridConfig::new(2, 7);
        let top = face_directions(CubeSide::Top, &config);
        assert_eq!(top, vec![
            DVec3::new(-1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
            DVec3::new(-1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]);
        let bottom = face_directions(CubeSide::Bottom, &config);
        assert_eq!(bottom[2], DVec3::new(-1.0, 0.0, -1.0));
    }

    #[test]
    fn test_unknown_side_is_degenerate_but_finite() {
        let config = GridConfig::square(2);
        let (theta, phi) = cubebox_angles(CubeSide::from_name("diagonal"), &config);
        assert_eq!(theta.len(), 4);
        assert_eq!(phi.len(), 4);
        for (t, p) in theta.iter().zip(&phi) {
            assert!(t.is_finite() && p.is_finite());
            assert!((t - PI / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_face_centres_point_outward() {
        let config = GridConfig::square(2);
        // cell (1, 1) of a 2x2 face is the face centre
        let (theta, phi) = cubebox_angles(CubeSide::Front, &config);
        assert!((theta[3] - PI / 2.0).abs() < 1e-12);
        assert!((phi[3].abs() - PI).abs() < 1e-12);

        let (theta, _) = cubebox_angles(CubeSide::Top, &config);
        assert_eq!(theta[3], 0.0);
        let (theta, _) = cubebox_angles(CubeSide::Bottom, &config);
        assert!((theta[3] - PI).abs() < 1e-12);
    }
}
