//! Content-box resolution for a flex container.
//!
//! Explicit axes subtract padding. Auto axes start from a single-line
//! estimate that the pass refines once lines are known.

use log::debug;

use crate::axis::Axes;
use crate::capability::Size;
use crate::layout::FlexItem;
use crate::style::{ContainerStyle, Edges, Gap};

/// Inner box of a container plus the spacing that surrounds its items.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ContentBox {
    pub width: i32,
    pub height: i32,
    pub padding: Edges,
    pub gap: Gap,
    pub auto_width: bool,
    pub auto_height: bool,
}

impl ContentBox {
    pub const fn main(&self, axes: Axes) -> i32 {
        if axes.is_row() { self.width } else { self.height }
    }

    pub const fn cross(&self, axes: Axes) -> i32 {
        if axes.is_row() { self.height } else { self.width }
    }

    pub const fn main_is_auto(&self, axes: Axes) -> bool {
        if axes.is_row() {
            self.auto_width
        } else {
            self.auto_height
        }
    }

    pub const fn cross_is_auto(&self, axes: Axes) -> bool {
        if axes.is_row() {
            self.auto_height
        } else {
            self.auto_width
        }
    }

    pub const fn set_main(&mut self, axes: Axes, value: i32) {
        if axes.is_row() {
            self.width = value;
        } else {
            self.height = value;
        }
    }

    pub const fn set_cross(&mut self, axes: Axes, value: i32) {
        if axes.is_row() {
            self.height = value;
        } else {
            self.width = value;
        }
    }

    /// Content size plus padding.
    pub const fn outer_size(&self) -> Size {
        Size::new(
            self.width + self.padding.horizontal(),
            self.height + self.padding.vertical(),
        )
    }
}

/// Resolve the content box for `items`, which must hold in-flow children only.
pub fn resolve_content_box(style: &ContainerStyle, items: &[FlexItem]) -> ContentBox {
    let axes = Axes::new(style.direction);
    let padding = style.padding;
    let gap = style.gap;

    let (main_estimate, cross_estimate) = single_line_estimate(items, gap.main(style.direction));
    let (estimate_width, estimate_height) = axes.point(main_estimate, cross_estimate);

    let width = style
        .definite_width()
        .map_or(estimate_width, |outer| (outer - padding.horizontal()).max(0));
    let height = style
        .definite_height()
        .map_or(estimate_height, |outer| (outer - padding.vertical()).max(0));

    let content = ContentBox {
        width,
        height,
        padding,
        gap,
        auto_width: style.definite_width().is_none(),
        auto_height: style.definite_height().is_none(),
    };
    debug!(
        target: "compose::autolayout",
        "[RESOLVE] content={}x{} auto=({}, {}) items={}",
        content.width,
        content.height,
        content.auto_width,
        content.auto_height,
        items.len()
    );
    content
}

/// Main and cross extent of all items laid out on one line with every gap.
fn single_line_estimate(items: &[FlexItem], main_gap: i32) -> (i32, i32) {
    let main_sum: i32 = items.iter().map(FlexItem::outer_main).sum();
    let cross_max = items.iter().map(FlexItem::outer_cross).max().unwrap_or(0);
    let gaps = i32::try_from(items.len().saturating_sub(1)).unwrap_or(i32::MAX);
    (main_sum + main_gap * gaps, cross_max)
}
