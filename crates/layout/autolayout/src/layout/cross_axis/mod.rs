//! Cross-axis sizing and alignment.

pub mod alignment;

pub use alignment::align_in_line;
