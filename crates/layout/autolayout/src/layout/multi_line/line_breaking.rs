//! Line breaking for wrapping flex containers.

use core::ops::Range;

use log::debug;

use super::super::FlexItem;

/// A run of consecutive in-flow items laid out along the main axis.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FlexLine {
    /// `[start, end)` indices into the in-flow item slice.
    pub range: Range<usize>,
    /// Base main sizes with margins plus the fixed gaps actually applied.
    pub extent: i32,
    /// Largest cross size with margins.
    pub cross: i32,
    /// Gaps skipped because of `ignore_gap_before`.
    pub suppressed_gaps: i32,
}

impl FlexLine {
    const fn starting_at(index: usize) -> Self {
        Self {
            range: index..index,
            extent: 0,
            cross: 0,
            suppressed_gaps: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Main-axis space available to this line. Suppressed gaps never consume it.
    pub fn budget(&self, main_limit: i32, main_gap: i32) -> i32 {
        (main_limit - self.suppressed_gaps * main_gap).max(0)
    }

    fn push(&mut self, item: &FlexItem, main_gap: i32) {
        if !self.is_empty() {
            if item.ignore_gap_before {
                self.suppressed_gaps += 1;
            } else {
                self.extent += main_gap;
            }
        }
        self.extent += item.outer_main();
        self.cross = self.cross.max(item.outer_cross());
        self.range.end += 1;
    }
}

/// Partition `items` into lines against `main_limit`.
///
/// Without `wrap` every item lands on a single line. An item larger than the
/// limit still opens a line of its own.
pub fn break_into_lines(
    items: &[FlexItem],
    main_limit: i32,
    main_gap: i32,
    wrap: bool,
) -> Vec<FlexLine> {
    let mut lines = Vec::new();
    let mut current = FlexLine::starting_at(0);
    for (index, item) in items.iter().enumerate() {
        if wrap && !current.is_empty() {
            let gap = if item.ignore_gap_before { 0 } else { main_gap };
            if current.extent + gap + item.outer_main() > main_limit {
                lines.push(current);
                current = FlexLine::starting_at(index);
            }
        }
        current.push(item, main_gap);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    debug!(
        target: "compose::autolayout",
        "[FLEX-LINES] limit={} gap={} wrap={} lines={:?}",
        main_limit,
        main_gap,
        wrap,
        lines.iter().map(|line| line.range.clone()).collect::<Vec<_>>()
    );
    lines
}
