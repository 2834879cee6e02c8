//! Solid-colour rectangles.

use compose_autolayout::{Bounds, BoundsSettable, Drawable, Measurable, Size};
use image::{Rgba, RgbaImage};

/// A filled rectangle. Layout containers resize and move it through
/// [`BoundsSettable`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Swatch {
    bounds: Bounds,
    color: Rgba<u8>,
}

impl Swatch {
    /// Swatch of the given size at the origin.
    pub const fn new(width: i32, height: i32, color: Rgba<u8>) -> Self {
        Self::at(Bounds::new(0, 0, width, height), color)
    }

    pub const fn at(bounds: Bounds, color: Rgba<u8>) -> Self {
        Self { bounds, color }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }
}

impl Drawable for Swatch {
    fn paint(&mut self, _background: &RgbaImage, target: &mut RgbaImage) {
        let left = self.bounds.x.max(0);
        let top = self.bounds.y.max(0);
        let right = self.bounds.right().min(target.width() as i32);
        let bottom = self.bounds.bottom().min(target.height() as i32);
        for y in top..bottom {
            for x in left..right {
                target.put_pixel(x as u32, y as u32, self.color);
            }
        }
    }

    fn measurable(&mut self) -> Option<&mut dyn Measurable> {
        Some(self)
    }

    fn bounds_settable(&mut self) -> Option<&mut dyn BoundsSettable> {
        Some(self)
    }
}

impl Measurable for Swatch {
    fn intrinsic_size(&mut self) -> Size {
        self.bounds.size()
    }
}

impl BoundsSettable for Swatch {
    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}
