//! PNG and JPEG encoding at the I/O boundary.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder as _, RgbaImage};
use log::debug;

/// Quality used when the format is picked from the extension.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Output encodings chosen from a file extension.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Png,
    /// Alpha is dropped.
    Jpeg,
}

impl ExportFormat {
    /// Pick the format from `path`'s extension, case-insensitively.
    ///
    /// # Errors
    /// Returns an error if the extension is missing or not supported.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            bail!("{} has no file extension", path.display());
        };
        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => bail!("unsupported export extension `{other}` for {}", path.display()),
        }
    }
}

/// Encode an RGBA image as PNG bytes at the given compression level.
///
/// # Errors
/// Returns an error if the encoder rejects the image.
pub fn encode_png(image: &RgbaImage, compression: CompressionType) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, compression, FilterType::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("encoding PNG")?;
    Ok(buf)
}

/// Encode an RGBA image as JPEG bytes, discarding alpha.
///
/// # Errors
/// Returns an error if `quality` is above 100 or the encoder rejects the image.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    if quality > 100 {
        bail!("JPEG quality {quality} is outside 0..=100");
    }
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .context("encoding JPEG")?;
    Ok(buf)
}

/// Write encoded bytes to `path`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_encoded(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(
        target: "compose::canvas",
        "[EXPORT] {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Write `image` to `path`, choosing the encoding from the extension.
///
/// # Errors
/// Returns an error for unsupported extensions, encoding failures or I/O errors.
pub fn export(image: &RgbaImage, path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path)?;
    let bytes = match format {
        ExportFormat::Png => encode_png(image, CompressionType::Default)?,
        ExportFormat::Jpeg => encode_jpeg(image, DEFAULT_JPEG_QUALITY)?,
    };
    debug!(
        target: "compose::canvas",
        "[EXPORT] {format:?} {}x{}",
        image.width(),
        image.height()
    );
    write_encoded(path, &bytes)
}
