//! PNG export for rendered feature images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma, Rgb};
use thiserror::Error;

use crate::render::{FeatureImages, ImageArray};

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating the output file or directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The PNG encoder rejected the buffer.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    /// The image has zero rows or columns.
    #[error("Cannot export an empty {0}x{1} image")]
    EmptyImage(usize, usize),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

fn png_dims<T>(array: &ImageArray<T>) -> Result<(u32, u32), ExportError> {
    let (rows, cols) = array.shape();
    if rows == 0 || cols == 0 {
        return Err(ExportError::EmptyImage(rows, cols));
    }
    Ok((cols as u32, rows as u32))
}

#[inline]
fn to_u8(c: f64) -> u8 {
    // NaN saturates to 0
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Exports a three-channel image as an 8-bit RGB PNG.
///
/// Image rows become PNG rows. Channels are clamped to [0, 1] and NaN
/// channels are written as 0.
///
/// # Arguments
/// * `rgb` - Image to write
/// * `path` - Output file path
/// * `options` - PNG compression and filter settings
///
/// # Returns
/// `Ok(())` on success, `ExportError::EmptyImage` for a zero-sized image
pub fn export_rgb_png(
    rgb: &ImageArray<[f64; 3]>,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let (width, height) = png_dims(rgb)?;

    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (row, col, px) in img.enumerate_pixels_mut().map(|(x, y, px)| (y as usize, x as usize, px)) {
        let c = rgb.get(row, col);
        *px = Rgb([to_u8(c[0]), to_u8(c[1]), to_u8(c[2])]);
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;

    Ok(())
}

/// Exports an angle image in [0, pi] as a 16-bit grayscale PNG.
///
/// # Arguments
/// * `angle` - Angle of polarization per pixel, in radians
/// * `path` - Output file path
/// * `options` - PNG compression and filter settings
///
/// # Returns
/// `Ok(())` on success, `ExportError::EmptyImage` for a zero-sized image
pub fn export_angle_png(
    angle: &ImageArray<f64>,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let (width, height) = png_dims(angle)?;

    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let a = *angle.get(y as usize, x as usize);
            let normalized = (a / std::f64::consts::PI).clamp(0.0, 1.0);
            img.put_pixel(x, y, Luma([(normalized * 65535.0) as u16]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    // Convert u16 slice to bytes for the encoder
    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(byte_slice, width, height, image::ExtendedColorType::L16)?;

    Ok(())
}

/// Exports the three images of a face or skydome.
///
/// Files are named `{base_name}_luminance.png`, `{base_name}_dop.png` and
/// `{base_name}_aop.png`.
///
/// # Arguments
/// * `images` - Rendered feature images
/// * `output_dir` - Directory to write into; created if missing
/// * `base_name` - File name prefix
/// * `options` - PNG compression and filter settings
pub fn export_feature_images(
    images: &FeatureImages,
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    std::fs::create_dir_all(output_dir)?;

    export_rgb_png(
        &images.luminance,
        &output_dir.join(format!("{}_luminance.png", base_name)),
        options,
    )?;
    export_rgb_png(
        &images.polarization,
        &output_dir.join(format!("{}_dop.png", base_name)),
        options,
    )?;
    export_angle_png(
        &images.angle,
        &output_dir.join(format!("{}_aop.png", base_name)),
        options,
    )?;

    log::info!("wrote {} feature images to {}", base_name, output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::geometry::CubeSide;
    use crate::render::cubebox;
    use crate::sky::RayleighSky;
    use tempfile::tempdir;

    #[test]
    fn test_export_rgb_png_dimensions() {
        let mut rgb: ImageArray<[f64; 3]> = ImageArray::zeros(3, 5);
        rgb.set(2, 4, [1.0, 0.5, f64::NAN]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        export_rgb_png(&rgb, &path, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.get_pixel(4, 2).0, [255, 128, 0]);
    }

    #[test]
    fn test_export_angle_png() {
        let angle = ImageArray::from_flat(1, 2, vec![0.0, std::f64::consts::PI]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("aop.png");
        export_angle_png(&angle, &path, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_luma16();
        assert_eq!(decoded.get_pixel(0, 0).0, [0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [65535]);
    }

    #[test]
    fn test_empty_image_rejected() {
        let empty: ImageArray<f64> = ImageArray::zeros(0, 4);
        let dir = tempdir().unwrap();
        let result = export_angle_png(&empty, &dir.path().join("x.png"), &PngExportOptions::default());
        assert!(matches!(result, Err(ExportError::EmptyImage(0, 4))));
    }

    #[test]
    fn test_export_feature_images() {
        let images = cubebox(&RayleighSky::default(), CubeSide::Front, &GridConfig::square(8));
        let dir = tempdir().unwrap();
        let out = dir.path().join("faces");
        export_feature_images(&images, &out, "front", &PngExportOptions::default()).unwrap();

        for suffix in ["luminance", "dop", "aop"] {
            let path = out.join(format!("front_{}.png", suffix));
            assert!(path.exists(), "missing {}", path.display());
        }
    }
}
