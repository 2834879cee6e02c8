//! Cross-axis sizing and alignment of an item within its line.

use crate::style::AlignItems;

use super::super::FlexItem;

/// Resolve `(offset_in_line, cross_size)` for `item` in a line of cross size
/// `line_cross`.
///
/// Stretched items fill the line minus their cross margins and never drop
/// below one pixel.
pub fn align_in_line(item: &FlexItem, line_cross: i32) -> (i32, i32) {
    let (leading, trailing) = item.cross_margins;
    match item.align {
        AlignItems::Stretch => (leading, (line_cross - item.cross_margin_sum()).max(1)),
        AlignItems::Start => (leading, item.cross_size),
        AlignItems::Center => {
            let free = line_cross - item.cross_size - item.cross_margin_sum();
            (free / 2 + leading, item.cross_size)
        }
        AlignItems::End => (line_cross - item.cross_size - trailing, item.cross_size),
    }
}
