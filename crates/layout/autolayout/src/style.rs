//! Container and item style records.
//!
//! All numeric units are integer pixels. Explicit sizes of `0` mean "auto":
//! the value is derived from content during layout.

use serde::{Deserialize, Serialize};

/// Layout model selected by a container.
///
/// Only [`Display::Flex`] is implemented. Any other value is corrected to flex
/// when the style is handed to a container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    #[default]
    Flex,
    Block,
    Grid,
}

/// Orientation of the main axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    /// Items flow left to right.
    #[default]
    Row,
    /// Items flow top to bottom.
    Column,
}

/// Distribution of main-axis slack inside a line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    /// Slack between items, none at the edges.
    SpaceBetween,
    /// Equal slack around each item, half a share at the edges.
    SpaceAround,
    /// Equal slack between items and at both edges.
    SpaceEvenly,
}

/// Cross-axis alignment. Used for `align-items`, `align-self` and
/// `align-content` (line packing).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignItems {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

/// Whether an item participates in line flow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Relative,
    /// Out of flow, placed against the container padding box.
    Absolute,
}

/// Four box edges in `top, right, bottom, left` order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    pub const ZERO: Self = Self::all(0);

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right edges.
    pub const fn horizontal(self) -> i32 {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    pub const fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

/// Fixed spacing between adjacent items and lines.
///
/// `column` is horizontal spacing and `row` is vertical spacing, so a row
/// container uses `column` between items and `row` between wrapped lines.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Gap {
    pub column: i32,
    pub row: i32,
}

impl Gap {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Gap inserted between items of one line.
    pub const fn main(self, direction: FlexDirection) -> i32 {
        match direction {
            FlexDirection::Row => self.column,
            FlexDirection::Column => self.row,
        }
    }

    /// Gap inserted between lines.
    pub const fn cross(self, direction: FlexDirection) -> i32 {
        match direction {
            FlexDirection::Row => self.row,
            FlexDirection::Column => self.column,
        }
    }
}

/// Flex container properties.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub display: Display,
    pub direction: FlexDirection,
    pub wrap: bool,
    pub padding: Edges,
    pub gap: Gap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    /// Packing of lines along the cross axis.
    pub align_content: AlignItems,
    /// Outer width; `0` sizes the container to its content.
    pub width: i32,
    /// Outer height; `0` sizes the container to its content.
    pub height: i32,
}

impl ContainerStyle {
    /// Correct the style to the supported layout model.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.display != Display::Flex {
            log::debug!(
                target: "compose::autolayout",
                "display {:?} is not supported, using flex",
                self.display
            );
            self.display = Display::Flex;
        }
        self
    }

    pub const fn is_row(&self) -> bool {
        matches!(self.direction, FlexDirection::Row)
    }

    /// Explicit outer width, if any.
    pub fn definite_width(&self) -> Option<i32> {
        definite(self.width)
    }

    /// Explicit outer height, if any.
    pub fn definite_height(&self) -> Option<i32> {
        definite(self.height)
    }
}

/// Per-child layout properties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStyle {
    pub margin: Edges,
    /// Fixed width; `0` uses the intrinsic width.
    pub width: i32,
    /// Fixed height; `0` uses the intrinsic height.
    pub height: i32,
    pub flex_grow: f64,
    /// Shrink factor; `0` resolves to `1` when a line overflows.
    pub flex_shrink: f64,
    /// Preferred main size; `0` falls back to width/height, then intrinsic.
    pub flex_basis: i32,
    /// Overrides the container's `align_items` for this item.
    pub align_self: Option<AlignItems>,
    pub position: Position,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
    /// Paint order; higher values paint later.
    pub z_index: i32,
    /// Skip the container gap directly before this item.
    pub ignore_gap_before: bool,
}

impl ItemStyle {
    pub const fn is_absolute(&self) -> bool {
        matches!(self.position, Position::Absolute)
    }

    pub fn definite_width(&self) -> Option<i32> {
        definite(self.width)
    }

    pub fn definite_height(&self) -> Option<i32> {
        definite(self.height)
    }

    pub fn definite_basis(&self) -> Option<i32> {
        definite(self.flex_basis)
    }

    /// Grow factor with negative values treated as zero.
    pub fn grow_factor(&self) -> f64 {
        self.flex_grow.max(0.0)
    }

    /// Shrink factor with the "unset means one" rule applied.
    pub fn shrink_factor(&self) -> f64 {
        if self.flex_shrink > 0.0 {
            self.flex_shrink
        } else {
            1.0
        }
    }

    /// Effective cross alignment given the container default.
    pub fn resolved_align(&self, container: AlignItems) -> AlignItems {
        self.align_self.unwrap_or(container)
    }
}

/// Positive pixel values are explicit sizes; everything else is auto.
fn definite(value: i32) -> Option<i32> {
    (value > 0).then_some(value)
}
