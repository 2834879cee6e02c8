//! Arena records for registered children.

use image::RgbaImage;

use crate::axis::Axes;
use crate::capability::{Bounds, Capabilities, Drawable, Size};
use crate::layout::FlexItem;
use crate::style::{AlignItems, ItemStyle};

/// Handle returned by [`crate::AutoLayout::add`]. Indexes the container's
/// arena in registration order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ChildId(pub(crate) usize);

impl ChildId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Cached layout state for one child.
pub struct Node {
    pub drawable: Box<dyn Drawable>,
    pub style: ItemStyle,
    pub capabilities: Capabilities,
    /// Intrinsic size with explicit width/height applied.
    pub natural: Size,
    pub bounds: Bounds,
}

impl Node {
    pub fn new(mut drawable: Box<dyn Drawable>, style: ItemStyle) -> Self {
        let capabilities = Capabilities::probe(drawable.as_mut());
        Self {
            drawable,
            style,
            capabilities,
            natural: Size::ZERO,
            bounds: Bounds::default(),
        }
    }

    /// Query the drawable's intrinsic size and apply explicit overrides.
    pub fn measure(&mut self) -> Size {
        let intrinsic = if self.capabilities.measurable {
            self.drawable
                .measurable()
                .map_or(Size::ZERO, |measurable| measurable.intrinsic_size())
        } else {
            Size::ZERO
        };
        self.natural = Size::new(
            self.style.definite_width().unwrap_or(intrinsic.width),
            self.style.definite_height().unwrap_or(intrinsic.height),
        );
        self.natural
    }

    /// Main size before flexing: flex-basis, then explicit size, then intrinsic.
    pub fn base_main(&self, axes: Axes) -> i32 {
        self.style
            .definite_basis()
            .unwrap_or_else(|| axes.main(self.natural))
    }

    pub fn flex_item(&self, axes: Axes, container_align: AlignItems) -> FlexItem {
        FlexItem {
            base_main: self.base_main(axes),
            cross_size: axes.cross(self.natural),
            main_margins: axes.main_edges(self.style.margin),
            cross_margins: axes.cross_edges(self.style.margin),
            grow: self.style.grow_factor(),
            shrink: self.style.shrink_factor(),
            align: self.style.resolved_align(container_align),
            ignore_gap_before: self.style.ignore_gap_before,
        }
    }

    /// Push the resolved bounds to the drawable, then paint it.
    pub fn paint(&mut self, background: &RgbaImage, target: &mut RgbaImage) {
        self.capabilities.apply(self.drawable.as_mut(), self.bounds);
        self.drawable.paint(background, target);
    }
}
