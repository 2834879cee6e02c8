//! Drawable capabilities and the geometry values exchanged with children.
//!
//! A child only has to paint. Everything else is optional and discovered
//! once, when the child is registered with a container.

use image::RgbaImage;

/// Integer pixel size.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Resolved rectangle in absolute pixel coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Reports a natural size before layout.
pub trait Measurable {
    fn intrinsic_size(&mut self) -> Size;
}

/// Accepts a top-left position.
pub trait Repositionable {
    fn set_position(&mut self, x: i32, y: i32);
}

/// Accepts a resolved size.
pub trait Resizable {
    fn set_size(&mut self, width: i32, height: i32);
}

/// Accepts position and size in one call. Preferred over the separate sinks.
pub trait BoundsSettable {
    fn set_bounds(&mut self, bounds: Bounds);
}

/// Anything that can render itself onto a raster target.
///
/// `background` is the read-only state of the destination before this
/// drawable ran; `target` is the overlay being written.
pub trait Drawable {
    fn paint(&mut self, background: &RgbaImage, target: &mut RgbaImage);

    fn measurable(&mut self) -> Option<&mut dyn Measurable> {
        None
    }

    fn repositionable(&mut self) -> Option<&mut dyn Repositionable> {
        None
    }

    fn resizable(&mut self) -> Option<&mut dyn Resizable> {
        None
    }

    fn bounds_settable(&mut self) -> Option<&mut dyn BoundsSettable> {
        None
    }
}

/// Where resolved geometry goes after a layout pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GeometrySink {
    /// One `set_bounds` call.
    Bounds,
    /// `set_position` and/or `set_size`, whichever are supported.
    Separate { position: bool, size: bool },
}

impl GeometrySink {
    /// True when the child cannot receive any geometry at all.
    pub const fn is_detached(self) -> bool {
        matches!(
            self,
            Self::Separate {
                position: false,
                size: false
            }
        )
    }
}

/// Capability summary probed at registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Capabilities {
    pub measurable: bool,
    pub sink: GeometrySink,
}

impl Capabilities {
    pub fn probe(drawable: &mut dyn Drawable) -> Self {
        let measurable = drawable.measurable().is_some();
        let sink = if drawable.bounds_settable().is_some() {
            GeometrySink::Bounds
        } else {
            GeometrySink::Separate {
                position: drawable.repositionable().is_some(),
                size: drawable.resizable().is_some(),
            }
        };
        Self { measurable, sink }
    }

    /// Push `bounds` to `drawable` through the sink chosen at probe time.
    pub fn apply(self, drawable: &mut dyn Drawable, bounds: Bounds) {
        match self.sink {
            GeometrySink::Bounds => {
                if let Some(settable) = drawable.bounds_settable() {
                    settable.set_bounds(bounds);
                }
            }
            GeometrySink::Separate { position, size } => {
                if position && let Some(target) = drawable.repositionable() {
                    target.set_position(bounds.x, bounds.y);
                }
                if size && let Some(target) = drawable.resizable() {
                    target.set_size(bounds.width, bounds.height);
                }
            }
        }
    }
}
