//! Synthetic sky polarization rendering.
//!
//! This crate samples a sky model for luminance, degree of polarization and
//! angle of polarization, and renders the features onto the six faces of a
//! sky cube or onto a whole-sky pixel grid.

pub mod config;
pub mod geometry;
pub mod sky;
pub mod projection;
pub mod render;
pub mod export;

pub use config::{GridConfig, ProjectionKind};
pub use geometry::{cubebox_angles, vec2sph, vec2sph_batch, CubeSide, ParseCubeSideError, SphericalCoord};
pub use sky::{RayleighSky, SkyFeatures, SkyModel};
pub use projection::{Equirectangular, Fisheye, PixelProjection};
pub use render::{cubebox, cubebox_all, cubebox_named, cubebox_strict, skydome, skydome_with, FeatureImages, ImageArray};
