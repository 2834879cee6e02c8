//! Flex grow and shrink distribution in whole pixels.
//!
//! Free space is split proportionally to the factors, floored, and the
//! leftover pixels go one at a time to the items with the largest fractional
//! share. Ties keep item order.

use log::debug;

use super::super::{FlexItem, applied_gaps};

/// Split `amount` pixels by `factors` using the largest-remainder method.
///
/// The result always sums to `amount` when `amount > 0` and at least one
/// factor is positive; otherwise every share is zero.
pub fn largest_remainder(amount: i32, factors: &[f64]) -> Vec<i32> {
    let total: f64 = factors.iter().copied().filter(|factor| *factor > 0.0).sum();
    if amount <= 0 || total <= 0.0 {
        return vec![0; factors.len()];
    }

    let mut shares = Vec::with_capacity(factors.len());
    let mut fractions = Vec::with_capacity(factors.len());
    for &factor in factors {
        let exact = f64::from(amount) * (factor.max(0.0) / total);
        let floor = exact.floor();
        shares.push(floor as i32);
        fractions.push(exact - floor);
    }

    let floored: i32 = shares.iter().sum();
    let leftover = usize::try_from(amount - floored).unwrap_or(0);
    let mut order: Vec<usize> = (0..factors.len()).collect();
    // Stable: equal fractions keep their original order.
    order.sort_by(|left, right| fractions[*right].total_cmp(&fractions[*left]));
    for &index in order.iter().take(leftover) {
        shares[index] += 1;
    }
    shares
}

/// Distribute positive free space to items using flex-grow factors.
pub fn distribute_grow(free_space: i32, items: &[FlexItem], sizes: &mut [i32]) {
    debug_assert!(free_space >= 0, "grow called with negative free space");
    let factors: Vec<f64> = items.iter().map(|item| item.grow).collect();
    let shares = largest_remainder(free_space, &factors);
    for (size, share) in sizes.iter_mut().zip(shares) {
        *size = (*size + share).max(0);
    }
}

/// Distribute a deficit to items using flex-shrink factors, clamping at zero.
pub fn distribute_shrink(free_space: i32, items: &[FlexItem], sizes: &mut [i32]) {
    debug_assert!(free_space <= 0, "shrink called with positive free space");
    let factors: Vec<f64> = items.iter().map(|item| item.shrink).collect();
    let shares = largest_remainder(-free_space, &factors);
    for (size, share) in sizes.iter_mut().zip(shares) {
        *size = (*size - share).max(0);
    }
}

/// Resolve the main size of every item in one line against `budget`.
pub fn resolve_main_sizes(line_items: &[FlexItem], budget: i32, main_gap: i32) -> Vec<i32> {
    let mut sizes: Vec<i32> = line_items.iter().map(|item| item.base_main).collect();
    let outer_sum: i32 = line_items.iter().map(FlexItem::outer_main).sum();
    let free_space = budget - outer_sum - applied_gaps(line_items, main_gap);
    let total_grow: f64 = line_items.iter().map(|item| item.grow).sum();
    let total_shrink: f64 = line_items.iter().map(|item| item.shrink).sum();

    debug!(
        target: "compose::autolayout",
        "[FLEX-DISTRIBUTE] items={} budget={budget} outer_sum={outer_sum} free={free_space} grow={total_grow} shrink={total_shrink}",
        line_items.len()
    );
    if free_space > 0 && total_grow > 0.0 {
        distribute_grow(free_space, line_items, &mut sizes);
    } else if free_space < 0 && total_shrink > 0.0 {
        distribute_shrink(free_space, line_items, &mut sizes);
    }
    sizes
}
