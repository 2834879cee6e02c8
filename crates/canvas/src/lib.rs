//! Raster layers, solid swatches and image export for composed layouts.
//!
//! A [`Layer`] is an owned RGBA canvas. Drawables (including
//! [`compose_autolayout::AutoLayout`] containers) are painted into a fresh
//! overlay and composited onto the layer source-over.

mod export;
mod layer;
mod swatch;

pub use export::{
    DEFAULT_JPEG_QUALITY, ExportFormat, encode_jpeg, encode_png, export, write_encoded,
};
pub use image::codecs::png::CompressionType;
pub use layer::Layer;
pub use swatch::Swatch;
