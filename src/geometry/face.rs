//! Cube face identification and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GridConfig;

/// Error returned by strict face-name parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCubeSideError {
    /// The name is not one of the six real faces.
    #[error("unknown cube side '{0}' (expected left, front, right, back, top or bottom)")]
    UnknownSide(String),
}

/// Identifies a face of the sky cube.
///
/// `Unknown` stands for any unrecognised name and yields an all-zero
/// direction field instead of an error. Like `FromStr`, deserialization
/// accepts only the six real face names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeSide {
    /// x = -1 plane
    Left,
    /// y = -1 plane
    Front,
    /// x = +1 plane
    Right,
    /// y = +1 plane
    Back,
    /// z = +1 plane
    Top,
    /// z = -1 plane
    Bottom,
    /// Fallback for unrecognised names; never parsed from text.
    #[serde(skip_deserializing)]
    Unknown,
}

impl CubeSide {
    /// Returns the six real faces in unwrap order.
    pub const fn all() -> [CubeSide; 6] {
        [
            CubeSide::Left,
            CubeSide::Front,
            CubeSide::Right,
            CubeSide::Back,
            CubeSide::Top,
            CubeSide::Bottom,
        ]
    }

    /// Parses a face name, mapping anything unrecognised to `Unknown`.
    pub fn from_name(name: &str) -> CubeSide {
        name.parse().unwrap_or(CubeSide::Unknown)
    }

    /// Returns the lowercase name of the face.
    pub const fn name(self) -> &'static str {
        match self {
            CubeSide::Left => "left",
            CubeSide::Front => "front",
            CubeSide::Right => "right",
            CubeSide::Back => "back",
            CubeSide::Top => "top",
            CubeSide::Bottom => "bottom",
            CubeSide::Unknown => "unknown",
        }
    }

    /// True for the top and bottom caps.
    pub const fn is_cap(self) -> bool {
        matches!(self, CubeSide::Top | CubeSide::Bottom)
    }

    /// Shape `(rows, cols)` of the images rendered for this face.
    ///
    /// Caps are square with `width` on both axes.
    pub fn grid_shape(self, config: &GridConfig) -> (usize, usize) {
        if self.is_cap() {
            (config.width, config.width)
        } else {
            (config.width, config.height)
        }
    }

    /// Number of directions generated for this face.
    pub fn pixel_count(self, config: &GridConfig) -> usize {
        let (rows, cols) = self.grid_shape(config);
        rows * cols
    }
}

impl FromStr for CubeSide {
    type Err = ParseCubeSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(CubeSide::Left),
            "front" => Ok(CubeSide::Front),
            "right" => Ok(CubeSide::Right),
            "back" => Ok(CubeSide::Back),
            "top" => Ok(CubeSide::Top),
            "bottom" => Ok(CubeSide::Bottom),
            other => Err(ParseCubeSideError::UnknownSide(other.to_string())),
        }
    }
}

impl fmt::Display for CubeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
