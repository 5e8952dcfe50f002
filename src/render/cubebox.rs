//! Cube-face feature images.

use rayon::prelude::*;

use super::colorize::{clip_unit, tint_luminance, tint_polarization, wrap_aop};
use super::FeatureImages;
use crate::config::GridConfig;
use crate::geometry::{cubebox_angles, CubeSide, ParseCubeSideError};
use crate::sky::{sanitize_dop, SkyModel};

/// Renders luminance, polarization and angle images for one cube face.
///
/// Images have the face's `grid_shape`. A NaN degree of polarization is
/// replaced by `-1` before tinting and ends up white after the clip. If the
/// sky returns the wrong number of values, missing pixels are NaN.
///
/// # Arguments
/// * `sky` - Sky model queried at the face's directions
/// * `side` - Face to render; `Unknown` samples the zero direction everywhere
/// * `config` - Grid dimensions
///
/// # Returns
/// Tinted luminance and polarization images plus the angle in [0, pi]
pub fn cubebox<S: SkyModel + ?Sized>(sky: &S, side: CubeSide, config: &GridConfig) -> FeatureImages {
    let (theta, phi) = cubebox_angles(side, config);
    let (rows, cols) = side.grid_shape(config);
    let features = sky
        .get_features(&theta, &phi)
        .fit_len(rows * cols, &format!("cube side {}", side));

    let nan_count = features.dop.iter().filter(|d| d.is_nan()).count();
    if nan_count > 0 {
        log::debug!("cube side {}: {} NaN DOP values replaced with -1", side, nan_count);
    }

    let luminance: Vec<[f64; 3]> = features
        .luminance
        .par_iter()
        .map(|&l| clip_unit(tint_luminance(l)))
        .collect();
    let polarization: Vec<[f64; 3]> = features
        .dop
        .par_iter()
        .map(|&d| clip_unit(tint_polarization(sanitize_dop(d))))
        .collect();
    let angle: Vec<f64> = features.aop.par_iter().map(|&a| wrap_aop(a)).collect();

    FeatureImages::from_flat(rows, cols, luminance, polarization, angle)
}

/// Like [`cubebox`], but takes a face name. Unrecognised names render the
/// degenerate `Unknown` face.
pub fn cubebox_named<S: SkyModel + ?Sized>(sky: &S, name: &str, config: &GridConfig) -> FeatureImages {
    let side = CubeSide::from_name(name);
    if side == CubeSide::Unknown {
        log::warn!("unknown cube side '{}', rendering an all-zero direction field", name);
    }
    cubebox(sky, side, config)
}

/// Like [`cubebox_named`], but rejects unrecognised names.
pub fn cubebox_strict<S: SkyModel + ?Sized>(
    sky: &S,
    name: &str,
    config: &GridConfig,
) -> Result<FeatureImages, ParseCubeSideError> {
    let side: CubeSide = name.parse()?;
    Ok(cubebox(sky, side, config))
}

/// Renders the six real faces in [`CubeSide::all`] order.
///
/// # Returns
/// One `(side, images)` pair per face
pub fn cubebox_all<S: SkyModel + ?Sized>(sky: &S, config: &GridConfig) -> Vec<(CubeSide, FeatureImages)> {
    CubeSide::all()
        .into_iter()
        .map(|side| (side, cubebox(sky, side, config)))
        .collect()
}
