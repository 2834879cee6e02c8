//! Tests for flex placement.

use super::*;
use crate::style::{Edges, FlexDirection, Gap, JustifyContent};


/// Helper to create a `FlexItem` with zero margins, no grow and the default shrink.
#[inline]
pub fn item(base_main: i32, cross_size: i32) -> FlexItem {
    FlexItem {
        base_main,
        cross_size,
        shrink: 1.0,
        ..FlexItem::default()
    }
}

/// Row container with 5px padding on every side and a 10px column gap.
#[inline]
pub fn padded_row(width: i32, height: i32) -> ContainerStyle {
    ContainerStyle {
        padding: Edges::all(5),
        gap: Gap::new(10, 0),
        width,
        height,
        ..ContainerStyle::default()
    }
}

/// Main offsets of every placement, in order.
#[inline]
pub fn main_offsets(outcome: &FlexOutcome) -> Vec<i32> {
    outcome
        .placements
        .iter()
        .map(|placement| placement.main_offset)
        .collect()
}

/// Cross offsets of every placement, in order.
#[inline]
pub fn cross_offsets(outcome: &FlexOutcome) -> Vec<i32> {
    outcome
        .placements
        .iter()
        .map(|placement| placement.cross_offset)
        .collect()
}

/// Resolved main sizes of every placement, in order.
#[inline]
pub fn main_sizes(outcome: &FlexOutcome) -> Vec<i32> {
    outcome
        .placements
        .iter()
        .map(|placement| placement.main_size)
        .collect()
}
