//! The `AutoLayout` container: owns children, caches the last pass and paints
//! in z-order.

use image::RgbaImage;
use log::debug;

use crate::absolute::{PaddingBox, position_absolute};
use crate::axis::Axes;
use crate::capability::{Bounds, Drawable, Measurable, Repositionable, Size};
use crate::layout::{FlexItem, layout_flex};
use crate::node::{ChildId, Node};
use crate::style::{ContainerStyle, ItemStyle};

/// A flex container positioned at an absolute origin.
///
/// Layout is lazy: mutations mark the container stale and the next call that
/// needs geometry runs exactly one pass. Each container lays out its direct
/// children only; nested containers are measured, not re-laid out.
pub struct AutoLayout {
    x: i32,
    y: i32,
    style: ContainerStyle,
    nodes: Vec<Node>,
    outer: Option<Size>,
    is_stale: bool,
    passes: u64,
}

impl AutoLayout {
    pub fn new(x: i32, y: i32, style: ContainerStyle) -> Self {
        Self {
            x,
            y,
            style: style.normalized(),
            nodes: Vec::new(),
            outer: None,
            is_stale: true,
            passes: 0,
        }
    }

    /// Register a child. Its capabilities are probed once, here.
    pub fn add<D: Drawable + 'static>(&mut self, drawable: D, style: ItemStyle) -> ChildId {
        self.add_boxed(Box::new(drawable), style)
    }

    pub fn add_boxed(&mut self, drawable: Box<dyn Drawable>, style: ItemStyle) -> ChildId {
        let id = ChildId(self.nodes.len());
        self.nodes.push(Node::new(drawable, style));
        self.invalidate();
        id
    }

    /// Swap the container style. Non-flex display values are corrected.
    pub fn replace_style(&mut self, style: ContainerStyle) {
        self.style = style.normalized();
        self.invalidate();
    }

    pub const fn style(&self) -> &ContainerStyle {
        &self.style
    }

    pub const fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_origin(&mut self, x: i32, y: i32) {
        if (self.x, self.y) != (x, y) {
            self.x = x;
            self.y = y;
            self.invalidate();
        }
    }

    /// Drop every child.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.invalidate();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of layout passes run so far.
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Outer size (content plus padding), laying out first if needed.
    pub fn outer_size(&mut self) -> Size {
        match self.outer {
            Some(size) if !self.is_stale => size,
            _ => self.run_pass(),
        }
    }

    /// Resolved bounds of a child in absolute coordinates.
    pub fn bounds(&mut self, id: ChildId) -> Option<Bounds> {
        self.outer_size();
        self.nodes.get(id.index()).map(|node| node.bounds)
    }

    fn invalidate(&mut self) {
        self.is_stale = true;
        self.outer = None;
    }

    fn run_pass(&mut self) -> Size {
        let axes = Axes::new(self.style.direction);
        for node in &mut self.nodes {
            node.measure();
        }

        let (in_flow, items): (Vec<usize>, Vec<FlexItem>) = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.style.is_absolute())
            .map(|(index, node)| (index, node.flex_item(axes, self.style.align_items)))
            .unzip();
        let outcome = layout_flex(&self.style, &items);
        let content = outcome.content;
        let left = self.x + content.padding.left;
        let top = self.y + content.padding.top;

        for (&index, placement) in in_flow.iter().zip(&outcome.placements) {
            if let Some(node) = self.nodes.get_mut(index) {
                node.bounds = placement.to_bounds(axes, left, top);
            }
        }

        // Runs after auto-size correction so offsets see the final box.
        let area = PaddingBox {
            left,
            top,
            width: content.width,
            height: content.height,
        };
        for node in self.nodes.iter_mut().filter(|node| node.style.is_absolute()) {
            node.bounds = position_absolute(&node.style, node.natural, area);
        }

        let outer = content.outer_size();
        self.outer = Some(outer);
        self.is_stale = false;
        self.passes += 1;
        debug!(
            target: "compose::autolayout",
            "[LAYOUT] pass={} origin=({}, {}) children={} in_flow={} lines={} outer={}x{}",
            self.passes,
            self.x,
            self.y,
            self.nodes.len(),
            in_flow.len(),
            outcome.line_count,
            outer.width,
            outer.height
        );
        outer
    }

    /// Child indices sorted by ascending z-index, registration order within ties.
    fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<(i32, usize)> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.style.z_index, index))
            .collect();
        order.sort_by_key(|&(z_index, _)| z_index);
        order.into_iter().map(|(_, index)| index).collect()
    }
}

impl Drawable for AutoLayout {
    fn paint(&mut self, background: &RgbaImage, target: &mut RgbaImage) {
        self.outer_size();
        for index in self.paint_order() {
            if let Some(node) = self.nodes.get_mut(index) {
                node.paint(background, target);
            }
        }
    }

    fn measurable(&mut self) -> Option<&mut dyn Measurable> {
        Some(self)
    }

    fn repositionable(&mut self) -> Option<&mut dyn Repositionable> {
        Some(self)
    }
}

impl Measurable for AutoLayout {
    fn intrinsic_size(&mut self) -> Size {
        self.outer_size()
    }
}

impl Repositionable for AutoLayout {
    fn set_position(&mut self, x: i32, y: i32) {
        self.set_origin(x, y);
    }
}
