//! Scene construction from the geometry model

use log::warn;

use super::primitive::{
    DrawPrimitive, DEFAULT_THICKNESS, LABEL_FONT_SIZE, SCALE_FONT_SIZE, VECTOR_THICKNESS,
};
use super::summary::{format_angle, Summary};
use super::Scene;
use crate::config::EngineConfig;
use crate::interaction::DragState;
use crate::math;
use crate::model::{GeometryModel, VectorId};
use crate::types::{ColorId, Point2, Vector2};

/// Turns a model snapshot into an ordered list of primitives
///
/// Output order is paint order: axes, circle, vectors with arrowheads,
/// center dot, projections, angle arc with its label.
#[derive(Debug, Clone, Copy)]
pub struct SceneBuilder<'a> {
    config: &'a EngineConfig,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        SceneBuilder { config }
    }

    /// Build primitives and summary for the current state
    pub fn build(&self, model: &GeometryModel, drag: DragState) -> Scene {
        let mut primitives = Vec::with_capacity(32);

        self.push_axes(&mut primitives, model);
        self.push_scale_labels(&mut primitives, model);
        primitives.push(DrawPrimitive::Circle {
            center: model.center(),
            radius: model.radius(),
            color: self.config.ink_color,
            filled: false,
            thickness: DEFAULT_THICKNESS,
        });

        for id in [VectorId::First, VectorId::Second] {
            self.push_vector(&mut primitives, model, id, self.vector_color(id, drag));
        }

        primitives.push(DrawPrimitive::Circle {
            center: model.center(),
            radius: self.config.center_dot_radius_px,
            color: self.config.ink_color,
            filled: true,
            thickness: 0.0,
        });

        for id in [VectorId::First, VectorId::Second] {
            self.push_projection(&mut primitives, model, id, self.vector_color(id, drag));
        }

        self.push_angle_arc(&mut primitives, model);

        Scene {
            primitives,
            summary: self.summary(model),
        }
    }

    /// Numeric summary of the scaled vectors
    ///
    /// The angle comes from the unit directions, so it does not depend on the
    /// scalar length. It is NaN if the directions are degenerate.
    pub fn summary(&self, model: &GeometryModel) -> Summary {
        let v1 = model.scaled_vector1();
        let v2 = model.scaled_vector2();
        let angle_degrees = math::angle_between_degrees(model.vector1(), model.vector2())
            .unwrap_or_else(|err| {
                warn!("angle undefined for {} and {}: {}", v1, v2, err);
                f64::NAN
            });
        Summary {
            vector1_coords: v1,
            vector2_coords: v2,
            dot_product: math::dot(v1, v2),
            angle_degrees,
            coordinate_precision: self.config.coordinate_precision,
            angle_precision: self.config.angle_precision,
        }
    }

    fn vector_color(&self, id: VectorId, drag: DragState) -> ColorId {
        let colors = match id {
            VectorId::First => self.config.vector1_colors,
            VectorId::Second => self.config.vector2_colors,
        };
        colors.select(drag.is_dragging(id))
    }

    fn push_axes(&self, out: &mut Vec<DrawPrimitive>, model: &GeometryModel) {
        let center = model.center();
        let color = self.config.axis_color;
        let x_end = Point2::new(model.width(), center.y);
        let y_end = Point2::new(center.x, 0.0);

        out.push(DrawPrimitive::line(Point2::new(0.0, center.y), x_end, color));
        out.push(DrawPrimitive::line(Point2::new(center.x, model.height()), y_end, color));
        self.push_arrowhead(out, x_end, Vector2::UNIT_X, color);
        self.push_arrowhead(out, y_end, Vector2::UNIT_Y, color);

        let ink = self.config.ink_color;
        out.push(DrawPrimitive::label(
            Point2::new(x_end.x - 20.0, x_end.y + 2.0),
            "X",
            ink,
            LABEL_FONT_SIZE,
        ));
        out.push(DrawPrimitive::label(
            Point2::new(y_end.x + 10.0, y_end.y + 2.0),
            "Y",
            ink,
            LABEL_FONT_SIZE,
        ));
        out.push(DrawPrimitive::label(center, "0", ink, LABEL_FONT_SIZE));
    }

    /// Scalar length printed where the circle crosses the axes
    fn push_scale_labels(&self, out: &mut Vec<DrawPrimitive>, model: &GeometryModel) {
        let c = model.center();
        let r = model.radius();
        let text = format!("{:.*}", self.config.coordinate_precision, model.scalar_length());
        let negative = format!("-{}", text);
        let ink = self.config.ink_color;

        let positions = [
            (Point2::new(c.x + r, c.y), &text),
            (Point2::new(c.x, c.y - r - 15.0), &text),
            (Point2::new(c.x - r - 32.0, c.y), &negative),
            (Point2::new(c.x, c.y + r), &negative),
        ];
        for (position, text) in positions {
            out.push(DrawPrimitive::label(position, text.as_str(), ink, SCALE_FONT_SIZE));
        }
    }

    fn push_vector(
        &self,
        out: &mut Vec<DrawPrimitive>,
        model: &GeometryModel,
        id: VectorId,
        color: ColorId,
    ) {
        let tip = model.tip(id);
        out.push(DrawPrimitive::line(model.center(), tip, color).with_thickness(VECTOR_THICKNESS));
        self.push_arrowhead(out, tip, model.vector(id), color);
    }

    /// Two barbs at `tip`, rotated either side of the reversed `direction`
    ///
    /// `direction` is in math space; barb length does not depend on the
    /// length of the shaft.
    fn push_arrowhead(
        &self,
        out: &mut Vec<DrawPrimitive>,
        tip: Point2,
        direction: Vector2,
        color: ColorId,
    ) {
        let Ok(unit) = math::normalize(direction) else {
            return;
        };
        let back = -unit * self.config.arrow_length_px;
        for angle in [-self.config.arrow_angle_degrees, self.config.arrow_angle_degrees] {
            let barb = math::rotate_degrees(back, angle);
            out.push(
                DrawPrimitive::line(tip, tip + barb.flip_y(), color).with_thickness(VECTOR_THICKNESS),
            );
        }
    }

    /// Dashed drops from the tip to each axis, labelled with the scaled coordinate
    fn push_projection(
        &self,
        out: &mut Vec<DrawPrimitive>,
        model: &GeometryModel,
        id: VectorId,
        color: ColorId,
    ) {
        let center = model.center();
        let tip = model.tip(id);
        let direction = model.vector(id);
        let precision = self.config.coordinate_precision;

        let on_x = Point2::new(tip.x, center.y);
        out.push(DrawPrimitive::dashed_line(tip, on_x, color));
        out.push(DrawPrimitive::boxed_label(
            Point2::new(on_x.x + 2.0, on_x.y + 2.0),
            format!("{:.*}", precision, model.projection_on_x(direction)),
            color,
        ));

        let on_y = Point2::new(center.x, tip.y);
        out.push(DrawPrimitive::dashed_line(tip, on_y, color));
        out.push(DrawPrimitive::boxed_label(
            Point2::new(on_y.x + 2.0, on_y.y + 2.0),
            format!("{:.*}", precision, model.projection_on_y(direction)),
            color,
        ));
    }

    /// Shorter arc from vector 1 to vector 2, plus the angle label
    fn push_angle_arc(&self, out: &mut Vec<DrawPrimitive>, model: &GeometryModel) {
        let v1 = model.vector1();
        let v2 = model.vector2();
        let (signed, unsigned) = match (
            math::signed_angle_degrees(v1, v2),
            math::angle_between_degrees(v1, v2),
        ) {
            (Ok(signed), Ok(unsigned)) => (signed, unsigned),
            (Err(err), _) | (_, Err(err)) => {
                warn!("skipping angle arc: {}", err);
                return;
            }
        };

        let center = model.center();
        let radius = model.radius() * self.config.arc_radius_fraction;
        let color = self.config.arc_color;

        // Surface Y points down: both angles change sign here and nowhere else
        out.push(DrawPrimitive::Arc {
            center,
            radius,
            start_angle: -v1.angle_degrees(),
            sweep_angle: -signed,
            color,
            dashed: true,
            thickness: DEFAULT_THICKNESS,
        });

        let start = center + v1.flip_y() * radius;
        let end = center + v2.flip_y() * radius;
        let mid = start.midpoint(&end);
        out.push(DrawPrimitive::boxed_label(
            Point2::new(mid.x - 20.0, mid.y - 10.0),
            format_angle(unsigned, self.config.angle_precision),
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(model: &GeometryModel, drag: DragState) -> Scene {
        let config = EngineConfig::default();
        SceneBuilder::new(&config).build(model, drag)
    }

    #[test]
    fn test_primitive_count() {
        let scene = build(&GeometryModel::default(), DragState::Idle);
        assert_eq!(scene.primitives.len(), 31);
    }

    #[test]
    fn test_arc_sweeps_up_on_screen() {
        let model = GeometryModel::default();
        let scene = build(&model, DragState::Idle);
        let arc = scene
            .primitives
            .iter()
            .find(|p| p.kind() == "ARC")
            .unwrap();
        match arc {
            DrawPrimitive::Arc {
                start_angle,
                sweep_angle,
                ..
            } => {
                assert!(start_angle.abs() < 1e-9);
                assert!((sweep_angle + 90.0).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
        let end = arc.arc_end_point().unwrap();
        let expected = model.center() + Vector2::new(0.0, -50.0);
        assert!(end.distance(&expected) < 1e-9);
    }

    #[test]
    fn test_arrowhead_barbs() {
        let config = EngineConfig::default();
        let builder = SceneBuilder::new(&config);
        let mut out = Vec::new();
        let tip = Point2::new(100.0, 100.0);
        builder.push_arrowhead(&mut out, tip, Vector2::UNIT_X, ColorId::Red);
        assert_eq!(out.len(), 2);
        for barb in &out {
            let DrawPrimitive::Line { from, to, .. } = barb else {
                panic!("expected line");
            };
            assert_eq!(*from, tip);
            assert!((from.distance(to) - 10.0).abs() < 1e-9);
            assert!(to.x < tip.x);
        }
    }

    #[test]
    fn test_arrowhead_skips_zero_direction() {
        let config = EngineConfig::default();
        let mut out = Vec::new();
        SceneBuilder::new(&config).push_arrowhead(&mut out, Point2::ZERO, Vector2::ZERO, ColorId::Red);
        assert!(out.is_empty());
    }

    #[test]
    fn test_summary_angle_ignores_huge_length() {
        let mut model = GeometryModel::default();
        model.set_vector(VectorId::Second, Vector2::from_angle_degrees(45.0));
        model.set_scalar_length(1e200).unwrap();
        let config = EngineConfig::default();
        let summary = SceneBuilder::new(&config).summary(&model);
        assert!((summary.angle_degrees - 45.0).abs() < 1e-9);
        assert_eq!(summary.angle_text(), "45.00°");
    }

    #[test]
    fn test_drag_colors() {
        let model = GeometryModel::default();
        let idle = build(&model, DragState::Idle);
        let dragging = build(&model, DragState::DraggingVector1);
        assert!(idle.primitives.iter().any(|p| p.color() == ColorId::Red));
        assert!(!dragging.primitives.iter().any(|p| p.color() == ColorId::Red));
        assert!(dragging.primitives.iter().any(|p| p.color() == ColorId::LightPink));
        assert!(dragging.primitives.iter().any(|p| p.color() == ColorId::Blue));
    }
}
