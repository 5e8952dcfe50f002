//! Sky-cube geometry.
//!
//! Provides the Cartesian to spherical converter and the per-face direction
//! fields used to sample the sky on the six faces of a unit cube.

mod face;
mod spherical;
mod cube_box;

pub use face::{CubeSide, ParseCubeSideError};
pub use spherical::{sanitize_radius, sph2vec, vec2sph, vec2sph_batch, SphericalBatch, SphericalCoord};
pub use cube_box::{cubebox_angles, face_directions, linspace};
