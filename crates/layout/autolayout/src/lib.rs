//! Flexbox-style auto-layout for 2D composition.
//!
//! An [`AutoLayout`] container takes drawable children with per-item styles,
//! resolves integer bounds for each of them (wrapping, grow/shrink, alignment,
//! absolute placement, auto-sizing) and paints them in z-order.

mod absolute;
mod axis;
pub mod capability;
mod container;
pub mod layout;
mod node;
mod resolve;
pub mod style;

pub use absolute::{PaddingBox, position_absolute};
pub use axis::Axes;
pub use capability::{
    Bounds, BoundsSettable, Capabilities, Drawable, GeometrySink, Measurable, Repositionable,
    Resizable, Size,
};
pub use container::AutoLayout;
pub use layout::{FlexItem, FlexOutcome, ItemPlacement, layout_flex};
pub use node::ChildId;
pub use resolve::{ContentBox, resolve_content_box};
pub use style::{
    AlignItems, ContainerStyle, Display, Edges, FlexDirection, Gap, ItemStyle, JustifyContent,
    Position,
};
