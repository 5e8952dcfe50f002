//! Whole-sky feature images.

use rayon::prelude::*;

use super::colorize::{tint_luminance, tint_polarization, wrap_aop};
use super::{FeatureImages, ImageArray};
use crate::config::GridConfig;
use crate::projection::PixelProjection;
use crate::sky::SkyModel;

/// Renders luminance, polarization and angle images over the whole sky.
///
/// Pixels are enumerated with `y` as the outer loop. Luminance and DOP are
/// clipped to [0, 1] before tinting (NaN is not substituted here) and the
/// tinted values are written at `[x][y]` of a `(width, height)` image. The
/// angle array is reshaped to `(width, height)` straight from the enumeration
/// order.
///
/// # Arguments
/// * `sky` - Sky model queried at every pixel direction
/// * `projection` - Maps pixel coordinates to `(theta, phi)`
/// * `config` - Image width and height
///
/// # Returns
/// Feature images of shape `(width, height)`
pub fn skydome<S, P>(sky: &S, projection: &P, config: &GridConfig) -> FeatureImages
where
    S: SkyModel + ?Sized,
    P: PixelProjection + ?Sized,
{
    let (w, h) = (config.width, config.height);
    let pixels: Vec<(usize, usize)> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .collect();
    log::debug!("skydome: {} pixels ({}x{})", pixels.len(), w, h);

    let (theta, phi) = projection.pix2sph(&pixels, h, w);
    let features = sky.get_features(&theta, &phi).fit_len(pixels.len(), "skydome");

    let tinted: Vec<([f64; 3], [f64; 3])> = features
        .luminance
        .par_iter()
        .zip(features.dop.par_iter())
        .map(|(&l, &d)| {
            (
                tint_luminance(l.clamp(0.0, 1.0)),
                tint_polarization(d.clamp(0.0, 1.0)),
            )
        })
        .collect();

    let mut luminance: ImageArray<[f64; 3]> = ImageArray::zeros(w, h);
    let mut polarization: ImageArray<[f64; 3]> = ImageArray::zeros(w, h);
    for (&(x, y), (l, d)) in pixels.iter().zip(tinted) {
        luminance.set(x, y, l);
        polarization.set(x, y, d);
    }

    let angle: Vec<f64> = features.aop.par_iter().map(|&a| wrap_aop(a)).collect();
    let angle = ImageArray::from_flat_filled(w, h, angle, f64::NAN);

    FeatureImages {
        luminance,
        polarization,
        angle,
    }
}

/// Renders the skydome with the projection selected in `config`.
pub fn skydome_with<S: SkyModel + ?Sized>(sky: &S, config: &GridConfig) -> FeatureImages {
    skydome(sky, &config.projection, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectionKind;
    use crate::projection::{Equirectangular, Fisheye};
    use crate::render::POLARIZATION_TINT;
    use crate::sky::{RayleighSky, SkyFeatures};
    use std::f64::consts::PI;

    /// Encodes the query index into the features so placement can be checked.
    struct IndexSky;

    impl SkyModel for IndexSky {
        fn get_features(&self, theta: &[f64], _phi: &[f64]) -> SkyFeatures {
            let n = theta.len();
            SkyFeatures {
                luminance: (0..n).map(|i| i as f64 / n as f64).collect(),
                dop: (0..n).map(|i| if i % 2 == 0 { f64::NAN } else { -4.0 }).collect(),
                aop: (0..n).map(|i| -(i as f64) * 1.3).collect(),
            }
        }
    }

    /// Returns one feature too few, with constant values.
    struct TruncatedSky;

    impl SkyModel for TruncatedSky {
        fn get_features(&self, theta: &[f64], _phi: &[f64]) -> SkyFeatures {
            let n = theta.len().saturating_sub(1);
            SkyFeatures {
                luminance: vec![1.0; n],
                dop: vec![1.0; n],
                aop: vec![1.0; n],
            }
        }
    }

    #[test]
    fn test_short_sky_fills_missing_pixel_with_nan() {
        let config = GridConfig::new(3, 2);
        let images = skydome(&TruncatedSky, &Equirectangular, &config);
        assert_eq!(images.shape(), (3, 2));

        // enumeration index 5 is pixel (2, 1), the one the sky did not return
        for y in 0..2 {
            for x in 0..3 {
                let lum = images.luminance.get(x, y);
                if (x, y) == (2, 1) {
                    assert!(lum.iter().all(|c| c.is_nan()));
                } else {
                    assert_eq!(*lum, [1.0, 1.0, 1.0], "pixel ({}, {})", x, y);
                    assert_eq!(*images.polarization.get(x, y), POLARIZATION_TINT);
                }
            }
        }
        assert!((images.angle.as_slice()[0] - 1.0).abs() < 1e-12);
        assert!(images.angle.as_slice()[5].is_nan());
    }

    #[test]
    fn test_shapes() {
        let config = GridConfig::new(6, 4);
        let images = skydome(&RayleighSky::default(), &Equirectangular, &config);
        assert_eq!(images.luminance.shape(), (6, 4));
        assert_eq!(images.polarization.shape(), (6, 4));
        assert_eq!(images.angle.shape(), (6, 4));
    }

    #[test]
    fn test_scatter_places_pixels_at_x_y() {
        let config = GridConfig::new(3, 2);
        let images = skydome(&IndexSky, &Equirectangular, &config);
        let n = 6.0;
        for y in 0..2 {
            for x in 0..3 {
                let k = y * 3 + x;
                let expected = tint_luminance(k as f64 / n);
                assert_eq!(*images.luminance.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_angle_range_with_negative_aop() {
        let config = GridConfig::new(5, 7);
        let images = skydome(&IndexSky, &Fisheye, &config);
        for &a in images.angle.iter() {
            assert!((0.0..=PI).contains(&a), "{} out of range", a);
        }
        // reshape keeps enumeration order
        assert!((images.angle.as_slice()[1] - (PI - 1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_dop_clipped_without_substitution() {
        let config = GridConfig::new(2, 2);
        let images = skydome(&IndexSky, &Equirectangular, &config);
        // k = 1 is pixel (1, 0) with DOP -4 clipped to 0
        assert_eq!(*images.polarization.get(1, 0), [1.0, 1.0, 1.0]);
        // k = 0 is NaN and stays NaN through the clip
        assert!(images.polarization.get(0, 0).iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_rayleigh_fisheye_bounded() {
        let config = GridConfig::square(16).with_projection(ProjectionKind::Fisheye);
        let images = skydome_with(&RayleighSky::default(), &config);
        for px in images.luminance.iter() {
            assert!(px.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
