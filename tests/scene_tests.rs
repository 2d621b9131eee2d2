//! Scene output: paint order, labels and styling

mod common;

use common::*;
use vecviz::{
    ColorId, DragState, DrawPrimitive, EngineConfig, GeometryModel, Point2, SceneBuilder, VectorId,
};

#[test]
fn paint_order_is_stable() {
    let controller = default_controller();
    let kinds = controller.scene().kinds();

    let expected: Vec<&str> = [
        // axes: two lines, two arrowheads, three axis labels
        &["LINE"; 6][..],
        &["LABEL"; 3][..],
        // scale labels
        &["LABEL"; 4][..],
        &["CIRCLE"][..],
        // vector 1 and vector 2, each shaft plus two barbs
        &["LINE"; 6][..],
        // center dot
        &["CIRCLE"][..],
        // projections
        &["LINE", "LABEL", "LINE", "LABEL", "LINE", "LABEL", "LINE", "LABEL"][..],
        &["ARC", "LABEL"][..],
    ]
    .concat();
    assert_eq!(kinds, expected);
}

#[test]
fn build_is_pure() {
    let config = EngineConfig::default();
    let model = GeometryModel::new(&config);
    let builder = SceneBuilder::new(&config);
    assert_eq!(
        builder.build(&model, DragState::Idle),
        builder.build(&model, DragState::Idle)
    );
}

#[test]
fn labels_follow_scalar_length() {
    let mut controller = default_controller();
    controller.set_scalar_length("2.5").unwrap();
    let scene = controller.scene();
    let labels = scene.label_texts();

    assert_eq!(&labels[..3], &["X", "Y", "0"]);
    assert_eq!(&labels[3..7], &["2.500", "2.500", "-2.500", "-2.500"]);
    // projections: vector 1 x then y, vector 2 x then y
    assert_eq!(&labels[7..11], &["2.500", "0.000", "0.000", "2.500"]);
    assert_eq!(labels[11], "90.00°");
}

#[test]
fn vector_shafts_end_at_tips() {
    let controller = default_controller();
    let model = controller.model();
    let scene = controller.scene();

    let shafts: Vec<_> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Line { from, to, .. } if *from == model.center() => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(shafts, vec![model.tip(VectorId::First), model.tip(VectorId::Second)]);
}

#[test]
fn dragged_vector_uses_light_color() {
    let mut controller = default_controller();
    let tip = controller.model().tip(VectorId::Second);
    controller.pointer_down(tip);

    let scene = controller.scene();
    assert!(scene.primitives.iter().any(|p| p.color() == ColorId::LightBlue));
    assert!(!scene.primitives.iter().any(|p| p.color() == ColorId::Blue));
    assert!(scene.primitives.iter().any(|p| p.color() == ColorId::Red));

    controller.pointer_up();
    let scene = controller.scene();
    assert!(!scene.primitives.iter().any(|p| p.color() == ColorId::LightBlue));
}

#[test]
fn arc_follows_shorter_side_clockwise() {
    let mut controller = controller_with_step(1.0);
    // Vector 2 to 300 degrees (-60), below the X axis
    let center = controller.model().center();
    let target = center + Point2::new(50.0, 86.6);
    drag(&mut controller, VectorId::Second, target);

    let scene = controller.scene();
    let arc = scene.primitives.iter().find(|p| p.kind() == "ARC").unwrap();
    let DrawPrimitive::Arc { sweep_angle, dashed, color, .. } = arc else {
        unreachable!()
    };
    // From +X down to -60 degrees is clockwise in math space, so on the
    // Y-down surface the sweep is positive
    assert!((sweep_angle - 60.0).abs() < 1e-9);
    assert!(*dashed);
    assert_eq!(*color, ColorId::Green);

    let end = arc.arc_end_point().unwrap();
    let expected = center + controller.model().vector2().flip_y() * 50.0;
    assert!(end.distance(&expected) < 1e-6);
    assert_eq!(scene.summary.angle_text(), "60.00°");
}

#[test]
fn arrowhead_length_is_fixed() {
    let mut controller = default_controller();
    controller.set_scalar_length("7").unwrap();
    let scene = controller.scene();
    let tip = controller.model().tip(VectorId::First);

    let lengths: Vec<f64> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Line { from, to, .. } if *from == tip => Some(from.distance(to)),
            _ => None,
        })
        .collect();
    // two barbs plus the two projection drops
    assert_eq!(lengths.len(), 4);
    assert_eq!(lengths.iter().filter(|d| (**d - 10.0).abs() < 1e-9).count(), 2);
}

#[test]
fn precision_is_configurable() {
    let config = EngineConfig {
        coordinate_precision: 2,
        angle_precision: 1,
        ..EngineConfig::default()
    };
    let model = GeometryModel::new(&config);
    let scene = SceneBuilder::new(&config).build(&model, DragState::Idle);
    assert_eq!(scene.summary.vector1_text(), "(1.00, 0.00)");
    assert_eq!(scene.summary.angle_text(), "90.0°");
    assert!(scene.label_texts().contains(&"1.00"));
}
