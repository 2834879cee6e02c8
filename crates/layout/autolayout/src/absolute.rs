//! Out-of-flow placement against the container's padding box.
//!
//! Absolute items never flex. When both edges of an axis are set, the start
//! edge (`left`, `top`) wins.

use log::trace;

use crate::capability::{Bounds, Size};
use crate::style::ItemStyle;

/// Inner rectangle absolute offsets are measured against, in absolute
/// coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PaddingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Resolve the bounds of an absolutely positioned item of size `natural`.
pub fn position_absolute(style: &ItemStyle, natural: Size, area: PaddingBox) -> Bounds {
    let margin = style.margin;
    let x = style.left.map_or_else(
        || {
            style.right.map_or(area.left, |right| {
                area.left + area.width - right - natural.width - margin.right
            })
        },
        |left| area.left + left + margin.left,
    );
    let y = style.top.map_or_else(
        || {
            style.bottom.map_or(area.top, |bottom| {
                area.top + area.height - bottom - natural.height - margin.bottom
            })
        },
        |top| area.top + top + margin.top,
    );
    let bounds = Bounds::new(x, y, natural.width, natural.height);
    trace!(target: "compose::autolayout", "[ABSPOS] {bounds:?}");
    bounds
}
