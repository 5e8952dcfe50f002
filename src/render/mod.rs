//! Feature-to-image mappers.
//!
//! Turns sky features into three false-coloured images: a sky-blue tinted
//! luminance image, a blue-white tinted polarization image and an angle of
//! polarization image wrapped to [0, pi].

mod array;
mod colorize;
mod cubebox;
mod skydome;

pub use array::ImageArray;
pub use colorize::{clip_unit, tint_luminance, tint_polarization, wrap_aop, LUMINANCE_TINT, POLARIZATION_TINT};
pub use cubebox::{cubebox, cubebox_all, cubebox_named, cubebox_strict};
pub use skydome::{skydome, skydome_with};

/// The three images produced for a cube face or the skydome.
#[derive(Debug, Clone)]
pub struct FeatureImages {
    /// Tinted luminance, channels in [0, 1].
    pub luminance: ImageArray<[f64; 3]>,
    /// Tinted degree of polarization, channels in [0, 1].
    pub polarization: ImageArray<[f64; 3]>,
    /// Angle of polarization in [0, pi].
    pub angle: ImageArray<f64>,
}

impl FeatureImages {
    /// Builds the three images from flat row-major buffers.
    ///
    /// Buffers are expected to hold `rows * cols` values; any shortfall is
    /// padded with NaN rather than zeros.
    pub(crate) fn from_flat(
        rows: usize,
        cols: usize,
        luminance: Vec<[f64; 3]>,
        polarization: Vec<[f64; 3]>,
        angle: Vec<f64>,
    ) -> Self {
        Self {
            luminance: ImageArray::from_flat_filled(rows, cols, luminance, [f64::NAN; 3]),
            polarization: ImageArray::from_flat_filled(rows, cols, polarization, [f64::NAN; 3]),
            angle: ImageArray::from_flat_filled(rows, cols, angle, f64::NAN),
        }
    }

    /// Shape `(rows, cols)` shared by the three images.
    pub fn shape(&self) -> (usize, usize) {
        self.luminance.shape()
    }
}
