//! Grid resolution and projection settings shared by the image mappers.

use serde::{Deserialize, Serialize};

/// Pixel-to-sphere mapping used by the skydome mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Longitude/colatitude grid covering the whole sphere.
    #[default]
    Equirectangular,
    /// Equidistant fisheye centred on the zenith.
    Fisheye,
}

/// Resolution of the images produced by the cube and skydome mappers.
///
/// Side cube faces are `width x height`; top and bottom faces are
/// `width x width`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width (W) in pixels.
    pub width: usize,
    /// Height (H) in pixels.
    pub height: usize,
    /// Projection used by the skydome mapper.
    #[serde(default)]
    pub projection: ProjectionKind,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            projection: ProjectionKind::Equirectangular,
        }
    }
}

impl GridConfig {
    /// Creates a configuration with the given width and height.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Creates a square configuration.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Returns a copy using `projection` for the skydome.
    pub fn with_projection(mut self, projection: ProjectionKind) -> Self {
        self.projection = projection;
        self
    }

    /// Number of pixels in a `width x height` grid.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square_equirect() {
        let config = GridConfig::default();
        assert_eq!(config.width, config.height);
        assert_eq!(config.projection, ProjectionKind::Equirectangular);
    }

    #[test]
    fn test_builders() {
        let config = GridConfig::new(8, 4).with_projection(ProjectionKind::Fisheye);
        assert_eq!(config.pixel_count(), 32);
        assert_eq!(config.projection, ProjectionKind::Fisheye);
        assert_eq!(GridConfig::square(5).pixel_count(), 25);
    }
}
