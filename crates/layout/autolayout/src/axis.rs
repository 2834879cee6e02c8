//! Main/cross axis mapping for a flex direction.

use crate::capability::Size;
use crate::style::{Edges, FlexDirection};

/// Resolved axis orientation. Rows run main along x, columns along y.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Axes {
    pub direction: FlexDirection,
}

impl Axes {
    pub const fn new(direction: FlexDirection) -> Self {
        Self { direction }
    }

    pub const fn is_row(self) -> bool {
        matches!(self.direction, FlexDirection::Row)
    }

    pub const fn main(self, size: Size) -> i32 {
        if self.is_row() { size.width } else { size.height }
    }

    pub const fn cross(self, size: Size) -> i32 {
        if self.is_row() { size.height } else { size.width }
    }

    /// Leading and trailing edges along the main axis.
    pub const fn main_edges(self, edges: Edges) -> (i32, i32) {
        if self.is_row() {
            (edges.left, edges.right)
        } else {
            (edges.top, edges.bottom)
        }
    }

    /// Leading and trailing edges along the cross axis.
    pub const fn cross_edges(self, edges: Edges) -> (i32, i32) {
        if self.is_row() {
            (edges.top, edges.bottom)
        } else {
            (edges.left, edges.right)
        }
    }

    /// Build a physical size from main and cross lengths.
    pub const fn size(self, main: i32, cross: i32) -> Size {
        if self.is_row() {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Map main/cross coordinates onto `(x, y)`.
    pub const fn point(self, main: i32, cross: i32) -> (i32, i32) {
        if self.is_row() {
            (main, cross)
        } else {
            (cross, main)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if column axes do not swap width and height.
    fn column_swaps_axes() {
        let axes = Axes::new(FlexDirection::Column);
        let size = Size::new(40, 90);
        assert_eq!(axes.main(size), 90);
        assert_eq!(axes.cross(size), 40);
        assert_eq!(axes.size(90, 40), size);
        assert_eq!(axes.point(7, 3), (3, 7));
        assert_eq!(axes.main_edges(Edges::new(1, 2, 3, 4)), (1, 3));
        assert_eq!(axes.cross_edges(Edges::new(1, 2, 3, 4)), (4, 2));
    }
}
