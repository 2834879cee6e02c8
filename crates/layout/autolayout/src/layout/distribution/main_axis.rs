//! Justify-content spacing along the main axis.

use crate::style::JustifyContent;

/// Compute the justify-content start offset and the extra spacing inserted
/// between adjacent items, on top of the fixed gap.
///
/// Slack is `budget - used`, floored at zero. Shares are integer divisions;
/// leftover pixels stay at the end of the line.
pub fn justify_params(
    justify: JustifyContent,
    budget: i32,
    used: i32,
    item_count: usize,
) -> (i32, i32) {
    let slack = (budget - used).max(0);
    let count = i32::try_from(item_count).unwrap_or(i32::MAX);
    match justify {
        JustifyContent::Center => (slack / 2, 0),
        JustifyContent::End => (slack, 0),
        JustifyContent::SpaceBetween if count > 1 => (0, slack / (count - 1)),
        JustifyContent::SpaceAround if count > 0 => {
            let between = slack / count;
            (between / 2, between)
        }
        JustifyContent::SpaceEvenly if count > 0 => {
            let between = slack / (count + 1);
            (between, between)
        }
        // Start, and space-between with a single item
        _ => (0, 0),
    }
}
