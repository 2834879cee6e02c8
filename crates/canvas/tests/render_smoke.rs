//! End-to-end rendering: auto-layout containers painted through layers.

use compose_autolayout::{
    AlignItems, AutoLayout, ContainerStyle, Drawable, Edges, FlexDirection, Gap, ItemStyle,
    JustifyContent, Position, Size,
};
use compose_canvas::{Layer, Swatch};
use image::Rgba;

const CORAL: Rgba<u8> = Rgba([255, 127, 80, 255]);
const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);

fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

fn alpha_at(layer: &Layer, x: u32, y: u32) -> u8 {
    layer.image().get_pixel(x, y).0[3]
}

#[test]
/// # Panics
/// Panics if laid-out swatches leave no visible pixels or the container size drifts.
fn column_of_swatches_renders() {
    init_logging();
    let style = ContainerStyle {
        direction: FlexDirection::Column,
        padding: Edges::all(16),
        gap: Gap::new(0, 16),
        justify_content: JustifyContent::Start,
        align_items: AlignItems::Start,
        width: 500,
        height: 1000,
        ..ContainerStyle::default()
    };
    let mut layout = AutoLayout::new(10, 20, style);
    layout.add(Swatch::new(100, 100, CORAL), ItemStyle::default());
    layout.add(Swatch::new(100, 100, CORAL), ItemStyle::default());

    let mut layer = Layer::new(800, 600);
    layer.load_instruction(&mut layout);

    let content_left = 10 + 16;
    let content_top = 20 + 16;
    assert!(alpha_at(&layer, content_left + 50, content_top + 50) > 0);
    assert!(alpha_at(&layer, content_left + 50, content_top + 100 + 16 + 50) > 0);
    // The gap between the two swatches stays transparent.
    assert_eq!(alpha_at(&layer, content_left + 50, content_top + 100 + 8), 0);
    assert_eq!(layout.outer_size(), Size::new(500, 1000));
}

#[test]
/// # Panics
/// Panics if higher z-index children do not paint over lower ones.
fn z_index_controls_overlap() {
    init_logging();
    let mut layout = AutoLayout::new(0, 0, ContainerStyle::default());
    let pinned = |z_index| ItemStyle {
        z_index,
        position: Position::Absolute,
        left: Some(0),
        top: Some(0),
        ..ItemStyle::default()
    };
    layout.add(Swatch::new(10, 10, NAVY), pinned(5));
    layout.add(Swatch::new(10, 10, CORAL), pinned(1));

    let mut layer = Layer::new(16, 16);
    layer.load_instruction(&mut layout);
    assert_eq!(*layer.image().get_pixel(4, 4), NAVY);
}

#[test]
/// # Panics
/// Panics if a layer used as a child is not measured, moved and composited.
fn layer_as_layout_child() {
    init_logging();
    let mut badge = Layer::new(4, 4);
    badge.load_instruction(&mut Swatch::new(4, 4, NAVY));

    let mut layout = AutoLayout::new(
        0,
        0,
        ContainerStyle {
            gap: Gap::new(2, 0),
            ..ContainerStyle::default()
        },
    );
    layout.add(Swatch::new(6, 4, CORAL), ItemStyle::default());
    layout.add(badge, ItemStyle::default());
    assert_eq!(layout.outer_size(), Size::new(12, 4));

    let mut layer = Layer::new(12, 4);
    layer.load_instruction(&mut layout);
    assert_eq!(*layer.image().get_pixel(0, 0), CORAL);
    assert_eq!(alpha_at(&layer, 7, 2), 0);
    assert_eq!(*layer.image().get_pixel(8, 0), NAVY);
    assert_eq!(*layer.image().get_pixel(11, 3), NAVY);
}

#[test]
/// # Panics
/// Panics if stacked instructions or sub-layers do not composite in order.
fn instructions_and_sub_layers_stack() {
    init_logging();
    let mut under = Swatch::new(8, 8, CORAL);
    let mut over = Swatch::new(4, 4, NAVY);
    let mut layer = Layer::new(8, 8);
    layer.load_instructions([&mut under as &mut dyn Drawable, &mut over]);
    assert_eq!(*layer.image().get_pixel(1, 1), NAVY);
    assert_eq!(*layer.image().get_pixel(6, 6), CORAL);

    let mut patch = Layer::new(2, 2);
    patch.load_instruction(&mut Swatch::new(2, 2, NAVY));
    layer.add_layer(&patch, 6, 6);
    assert_eq!(*layer.image().get_pixel(7, 7), NAVY);
    assert_eq!(layer.size(), Size::new(8, 8));
    assert_eq!(layer.position(), (0, 0));
}

#[test]
/// # Panics
/// Panics if a shrunk layer child paints pixels outside its resolved bounds.
fn shrunk_layer_is_cropped() {
    init_logging();
    let mut photo = Layer::new(10, 10);
    photo.load_instruction(&mut Swatch::new(10, 10, NAVY));

    let mut layout = AutoLayout::new(
        0,
        0,
        ContainerStyle {
            width: 12,
            ..ContainerStyle::default()
        },
    );
    let photo_id = layout.add(photo, ItemStyle::default());
    let swatch_id = layout.add(Swatch::new(6, 6, CORAL), ItemStyle::default());
    assert_eq!(layout.bounds(photo_id).map(|bounds| bounds.width), Some(8));
    assert_eq!(layout.bounds(swatch_id).map(|bounds| bounds.x), Some(8));

    let mut layer = Layer::new(12, 10);
    layer.load_instruction(&mut layout);
    assert_eq!(*layer.image().get_pixel(7, 9), NAVY);
    assert_eq!(*layer.image().get_pixel(8, 0), CORAL);
    assert_eq!(alpha_at(&layer, 9, 9), 0);
}
