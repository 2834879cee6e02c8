//! Owned RGBA canvases.

use std::path::Path;

use anyhow::{Context as _, Result};
use compose_autolayout::{
    Bounds, BoundsSettable, Drawable, Measurable, Repositionable, Resizable, Size,
};
use image::codecs::png::CompressionType;
use image::{RgbaImage, imageops};
use log::debug;

use crate::export::{encode_jpeg, encode_png, export, write_encoded};

/// An RGBA canvas with a position, used both as a render target and as a
/// drawable that composites itself onto another target.
///
/// The visible size starts at the buffer size. Resizing only moves the
/// visible edges: pixels are never resampled and the visible area never
/// grows past the buffer.
#[derive(Clone, Debug)]
pub struct Layer {
    image: RgbaImage,
    x: i32,
    y: i32,
    visible_width: u32,
    visible_height: u32,
}

impl Layer {
    /// Transparent layer at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        let (visible_width, visible_height) = image.dimensions();
        Self {
            image,
            x: 0,
            y: 0,
            visible_width,
            visible_height,
        }
    }

    /// Decode an image file into a layer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("loading layer from {}", path.display()))?;
        debug!(
            target: "compose::canvas",
            "[LAYER] loaded {} {}x{}",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// The whole backing buffer, including pixels outside the visible size.
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub const fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Visible size.
    pub fn size(&self) -> Size {
        Size::new(self.visible_width as i32, self.visible_height as i32)
    }

    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Copy of the visible region.
    pub fn visible(&self) -> RgbaImage {
        imageops::crop_imm(&self.image, 0, 0, self.visible_width, self.visible_height).to_image()
    }

    /// Paint `drawable` into a fresh overlay and composite it onto this layer.
    ///
    /// The drawable sees the current layer contents as its background.
    pub fn load_instruction(&mut self, drawable: &mut dyn Drawable) -> &mut Self {
        let mut overlay = RgbaImage::new(self.image.width(), self.image.height());
        drawable.paint(&self.image, &mut overlay);
        imageops::overlay(&mut self.image, &overlay, 0, 0);
        debug!(
            target: "compose::canvas",
            "[LAYER] composited overlay {}x{}",
            overlay.width(),
            overlay.height()
        );
        self
    }

    /// Load several drawables in order; later ones land on top.
    pub fn load_instructions<'items, I>(&mut self, drawables: I) -> &mut Self
    where
        I: IntoIterator<Item = &'items mut dyn Drawable>,
    {
        for drawable in drawables {
            self.load_instruction(drawable);
        }
        self
    }

    /// Composite the visible part of `other` onto this layer with its
    /// top-left corner at `(x, y)`.
    pub fn add_layer(&mut self, other: &Self, x: i32, y: i32) -> &mut Self {
        imageops::overlay(&mut self.image, &other.visible(), i64::from(x), i64::from(y));
        self
    }

    /// # Errors
    /// Returns an error if PNG encoding fails.
    pub fn encode_png(&self, compression: CompressionType) -> Result<Vec<u8>> {
        encode_png(&self.visible(), compression)
    }

    /// Write the visible region as PNG regardless of the path's extension.
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn export_png(&self, path: &Path, compression: CompressionType) -> Result<()> {
        write_encoded(path, &self.encode_png(compression)?)
    }

    /// Write the visible region as JPEG regardless of the path's extension.
    ///
    /// # Errors
    /// Returns an error if `quality` is above 100, or if encoding or writing fails.
    pub fn export_jpeg(&self, path: &Path, quality: u8) -> Result<()> {
        write_encoded(path, &encode_jpeg(&self.visible(), quality)?)
    }

    /// Write the visible region, choosing PNG or JPEG from the extension.
    ///
    /// # Errors
    /// Returns an error for unsupported extensions, encoding failures or I/O errors.
    pub fn export(&self, path: &Path) -> Result<()> {
        export(&self.visible(), path)
    }
}

impl Drawable for Layer {
    fn paint(&mut self, _background: &RgbaImage, target: &mut RgbaImage) {
        imageops::overlay(target, &self.visible(), i64::from(self.x), i64::from(self.y));
    }

    fn measurable(&mut self) -> Option<&mut dyn Measurable> {
        Some(self)
    }

    fn repositionable(&mut self) -> Option<&mut dyn Repositionable> {
        Some(self)
    }

    fn resizable(&mut self) -> Option<&mut dyn Resizable> {
        Some(self)
    }

    fn bounds_settable(&mut self) -> Option<&mut dyn BoundsSettable> {
        Some(self)
    }
}

impl Measurable for Layer {
    fn intrinsic_size(&mut self) -> Size {
        self.size()
    }
}

impl Repositionable for Layer {
    fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl Resizable for Layer {
    /// Clamp to `0..=buffer` on each axis.
    fn set_size(&mut self, width: i32, height: i32) {
        self.visible_width = u32::try_from(width.max(0))
            .unwrap_or(0)
            .min(self.image.width());
        self.visible_height = u32::try_from(height.max(0))
            .unwrap_or(0)
            .min(self.image.height());
    }
}

impl BoundsSettable for Layer {
    fn set_bounds(&mut self, bounds: Bounds) {
        self.set_position(bounds.x, bounds.y);
        self.set_size(bounds.width, bounds.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if resizing grows past the buffer or accepts negative sizes.
    fn visible_size_is_clamped_to_buffer() {
        let mut layer = Layer::new(10, 6);
        layer.set_size(4, 100);
        assert_eq!(layer.size(), Size::new(4, 6));
        layer.set_size(-3, 2);
        assert_eq!(layer.size(), Size::new(0, 2));
        layer.set_bounds(Bounds::new(7, 8, 20, 20));
        assert_eq!(layer.size(), Size::new(10, 6));
        assert_eq!(layer.position(), (7, 8));
        assert_eq!(layer.image().dimensions(), (10, 6));
    }
}
