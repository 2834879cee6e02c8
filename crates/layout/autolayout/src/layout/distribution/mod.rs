//! Main-axis sizing: grow/shrink resolution and justify-content spacing.

pub mod flex_algorithm;
pub mod main_axis;

pub use flex_algorithm::{
    distribute_grow, distribute_shrink, largest_remainder, resolve_main_sizes,
};
pub use main_axis::justify_params;
