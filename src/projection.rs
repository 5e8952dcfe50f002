//! Pixel to spherical mappings for the skydome.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::ProjectionKind;

/// Maps image pixels to viewing directions.
pub trait PixelProjection {
    /// Returns `(theta, phi)` for the centre of pixel `(x, y)`.
    fn pixel_to_sphere(&self, x: usize, y: usize, height: usize, width: usize) -> (f64, f64);

    /// Converts a list of `(x, y)` pixels to parallel `(theta, phi)` arrays.
    fn pix2sph(&self, pixels: &[(usize, usize)], height: usize, width: usize) -> (Vec<f64>, Vec<f64>) {
        pixels
            .iter()
            .map(|&(x, y)| self.pixel_to_sphere(x, y, height, width))
            .unzip()
    }
}

/// Columns span azimuth `(-pi, pi)`, rows span elevation `(0, pi)` from the zenith down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl PixelProjection for Equirectangular {
    fn pixel_to_sphere(&self, x: usize, y: usize, height: usize, width: usize) -> (f64, f64) {
        let fy = (y as f64 + 0.5) / height as f64;
        let fx = (x as f64 + 0.5) / width as f64;
        (fy * PI, fx * TAU - PI)
    }
}

/// Equidistant fisheye centred on the zenith.
///
/// The inscribed circle reaches the horizon; the corners look below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fisheye;

impl PixelProjection for Fisheye {
    fn pixel_to_sphere(&self, x: usize, y: usize, height: usize, width: usize) -> (f64, f64) {
        let u = 2.0 * (x as f64 + 0.5) / width as f64 - 1.0;
        let v = 2.0 * (y as f64 + 0.5) / height as f64 - 1.0;
        (u.hypot(v) * FRAC_PI_2, u.atan2(v))
    }
}

impl PixelProjection for ProjectionKind {
    fn pixel_to_sphere(&self, x: usize, y: usize, height: usize, width: usize) -> (f64, f64) {
        match self {
            ProjectionKind::Equirectangular => Equirectangular.pixel_to_sphere(x, y, height, width),
            ProjectionKind::Fisheye => Fisheye.pixel_to_sphere(x, y, height, width),
        }
    }
}
