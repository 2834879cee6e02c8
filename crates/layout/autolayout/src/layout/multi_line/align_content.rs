//! Align-content packing of lines along the cross axis.

use log::debug;

use crate::style::AlignItems;

/// Cross-axis position and size of one line inside the content box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LineSlot {
    pub offset: i32,
    pub cross: i32,
}

/// Compute a start offset and per-line growth for `align`.
///
/// Start, center and end shift the whole block of lines. Stretch grows every
/// line by an equal integer share of the leftover; the remainder is dropped.
pub fn align_content_params(
    align: AlignItems,
    container_cross: i32,
    content_total: i32,
    line_count: usize,
) -> (i32, i32) {
    let leftover = (container_cross - content_total).max(0);
    match align {
        AlignItems::Start => (0, 0),
        AlignItems::Center => (leftover / 2, 0),
        AlignItems::End => (leftover, 0),
        AlignItems::Stretch => {
            let count = i32::try_from(line_count).unwrap_or(i32::MAX);
            if count > 0 {
                (0, leftover / count)
            } else {
                (0, 0)
            }
        }
    }
}

/// Place lines of cross size `line_crosses` inside `container_cross`.
pub fn pack_lines(
    align: AlignItems,
    container_cross: i32,
    line_crosses: &[i32],
    cross_gap: i32,
) -> Vec<LineSlot> {
    let gaps = i32::try_from(line_crosses.len().saturating_sub(1)).unwrap_or(i32::MAX);
    let total = line_crosses.iter().sum::<i32>() + cross_gap * gaps;
    let (start, extra_per_line) =
        align_content_params(align, container_cross, total, line_crosses.len());
    debug!(
        target: "compose::autolayout",
        "[ALIGN-CONTENT] mode={align:?} container_cross={container_cross} lines_total={total} start={start} extra_per_line={extra_per_line}"
    );

    let mut offset = start;
    line_crosses
        .iter()
        .map(|&line_cross| {
            let slot = LineSlot {
                offset,
                cross: line_cross + extra_per_line,
            };
            offset += slot.cross + cross_gap;
            slot
        })
        .collect()
}
