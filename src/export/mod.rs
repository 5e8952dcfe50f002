//! Export module for saving rendered feature images.
//!
//! Three-channel images are written as 8-bit RGB PNGs and angle images as
//! 16-bit grayscale PNGs scaled by pi.

mod png;

pub use png::{
    export_angle_png,
    export_feature_images,
    export_rgb_png,
    ExportError,
    PngExportOptions,
};
