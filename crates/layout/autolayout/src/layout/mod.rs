//! Flex placement: line building, flexing, justification and cross packing.
//!
//! Inputs are plain [`FlexItem`] records for in-flow children in registration
//! order. Output positions are relative to the content box's top-left corner.

use log::{debug, trace};

use crate::axis::Axes;
use crate::capability::Bounds;
use crate::resolve::{ContentBox, resolve_content_box};
use crate::style::{AlignItems, ContainerStyle};

pub mod cross_axis;
pub mod distribution;
pub mod multi_line;

#[cfg(test)]
mod tests;

use cross_axis::align_in_line;
use distribution::{justify_params, resolve_main_sizes};
use multi_line::{FlexLine, LineSlot, break_into_lines, pack_lines};

/// Layout input for one in-flow item.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexItem {
    /// Main size before flexing, margins excluded.
    pub base_main: i32,
    /// Cross size before stretching, margins excluded.
    pub cross_size: i32,
    /// `(leading, trailing)` margins on the main axis.
    pub main_margins: (i32, i32),
    /// `(leading, trailing)` margins on the cross axis.
    pub cross_margins: (i32, i32),
    pub grow: f64,
    pub shrink: f64,
    pub align: AlignItems,
    pub ignore_gap_before: bool,
}

impl FlexItem {
    pub const fn main_margin_sum(&self) -> i32 {
        self.main_margins.0 + self.main_margins.1
    }

    pub const fn cross_margin_sum(&self) -> i32 {
        self.cross_margins.0 + self.cross_margins.1
    }

    /// Base main size plus main margins.
    pub const fn outer_main(&self) -> i32 {
        self.base_main + self.main_margin_sum()
    }

    /// Cross size plus cross margins.
    pub const fn outer_cross(&self) -> i32 {
        self.cross_size + self.cross_margin_sum()
    }
}

/// Resolved geometry of one item, relative to the content box origin.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ItemPlacement {
    pub main_offset: i32,
    pub cross_offset: i32,
    pub main_size: i32,
    pub cross_size: i32,
}

impl ItemPlacement {
    /// Physical bounds once the content box starts at `(left, top)`.
    pub const fn to_bounds(self, axes: Axes, left: i32, top: i32) -> Bounds {
        let (x, y) = axes.point(self.main_offset, self.cross_offset);
        let size = axes.size(self.main_size, self.cross_size);
        Bounds::new(left + x, top + y, size.width, size.height)
    }
}

/// Result of a full flex pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FlexOutcome {
    /// Content box after auto-size correction.
    pub content: ContentBox,
    /// One placement per input item, same order.
    pub placements: Vec<ItemPlacement>,
    pub line_count: usize,
}

/// Run the flex algorithm for a container over its in-flow items.
pub fn layout_flex(style: &ContainerStyle, items: &[FlexItem]) -> FlexOutcome {
    let axes = Axes::new(style.direction);
    let mut content = resolve_content_box(style, items);
    let main_gap = content.gap.main(style.direction);
    let cross_gap = content.gap.cross(style.direction);

    // Lines and budgets share the limit the items were broken against.
    let main_limit = content.main(axes);
    let lines = break_into_lines(items, main_limit, main_gap, style.wrap);
    correct_auto_size(&mut content, axes, &lines, cross_gap);

    let line_crosses: Vec<i32> = lines.iter().map(|line| line.cross).collect();
    let slots = pack_lines(
        style.align_content,
        content.cross(axes),
        &line_crosses,
        cross_gap,
    );

    let mut placements = Vec::with_capacity(items.len());
    for (line, slot) in lines.iter().zip(slots) {
        let budget = line.budget(main_limit, main_gap);
        place_line(
            &items[line.range.clone()],
            budget,
            main_gap,
            style,
            slot,
            &mut placements,
        );
    }

    debug!(
        target: "compose::autolayout",
        "[FLEX-PASS] items={} lines={} content={}x{}",
        items.len(),
        lines.len(),
        content.width,
        content.height
    );
    FlexOutcome {
        content,
        placements,
        line_count: lines.len(),
    }
}

/// Replace auto estimates with the extents of the lines actually built.
///
/// The cross axis is corrected for both directions; the main axis only for
/// columns.
fn correct_auto_size(content: &mut ContentBox, axes: Axes, lines: &[FlexLine], cross_gap: i32) {
    if content.cross_is_auto(axes) {
        let gaps = i32::try_from(lines.len().saturating_sub(1)).unwrap_or(i32::MAX);
        let total: i32 = lines.iter().map(|line| line.cross).sum::<i32>() + cross_gap * gaps;
        content.set_cross(axes, total);
    }
    // Auto-width rows keep the estimate, which counts every gap.
    if !axes.is_row() && content.main_is_auto(axes) {
        let widest = lines.iter().map(|line| line.extent).max().unwrap_or(0);
        content.set_main(axes, widest);
    }
}

/// Flex, justify and cross-align the items of one line.
fn place_line(
    line_items: &[FlexItem],
    budget: i32,
    main_gap: i32,
    style: &ContainerStyle,
    slot: LineSlot,
    out: &mut Vec<ItemPlacement>,
) {
    let sizes = resolve_main_sizes(line_items, budget, main_gap);
    let used: i32 = line_items
        .iter()
        .zip(&sizes)
        .map(|(item, size)| size + item.main_margin_sum())
        .sum::<i32>()
        + applied_gaps(line_items, main_gap);
    let (start, between) = justify_params(style.justify_content, budget, used, line_items.len());

    let mut cursor = start;
    for (index, (item, &main_size)) in line_items.iter().zip(&sizes).enumerate() {
        let (cross_in_line, cross_size) = align_in_line(item, slot.cross);
        let placement = ItemPlacement {
            main_offset: cursor + item.main_margins.0,
            cross_offset: slot.offset + cross_in_line,
            main_size,
            cross_size,
        };
        trace!(
            target: "compose::autolayout",
            "[FLEX-ITEM] main={}+{} cross={}+{}",
            placement.main_offset,
            placement.main_size,
            placement.cross_offset,
            placement.cross_size
        );
        out.push(placement);

        cursor += main_size + item.main_margin_sum();
        if let Some(next) = line_items.get(index + 1) {
            if !next.ignore_gap_before {
                cursor += main_gap;
            }
            cursor += between;
        }
    }
}

/// Sum of the fixed gaps between items, skipping suppressed ones.
fn applied_gaps(line_items: &[FlexItem], main_gap: i32) -> i32 {
    line_items
        .iter()
        .skip(1)
        .filter(|item| !item.ignore_gap_before)
        .map(|_| main_gap)
        .sum()
}
