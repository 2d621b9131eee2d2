//! Renderer-agnostic draw primitives
//!
//! Coordinates are surface pixels (Y down). Arc angles are in degrees on the
//! same surface: 0 points along +X and positive values turn clockwise on
//! screen, which is the convention of Y-down canvases.

use crate::types::{ColorId, Point2};

/// Default stroke width for shapes
pub const DEFAULT_THICKNESS: f64 = 3.0;
/// Stroke width of vector shafts and arrowheads
pub const VECTOR_THICKNESS: f64 = 4.0;
/// Font size of regular labels
pub const LABEL_FONT_SIZE: f64 = 16.0;
/// Font size of the scale labels on the circle
pub const SCALE_FONT_SIZE: f64 = 10.0;

/// One shape or label for the host renderer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line {
        from: Point2,
        to: Point2,
        color: ColorId,
        dashed: bool,
        thickness: f64,
    },
    Arc {
        center: Point2,
        radius: f64,
        /// Degrees, clockwise on screen from +X
        start_angle: f64,
        /// Degrees; positive sweeps clockwise on screen
        sweep_angle: f64,
        color: ColorId,
        dashed: bool,
        thickness: f64,
    },
    Label {
        /// Top-left corner of the text box
        position: Point2,
        text: String,
        color: ColorId,
        font_size: f64,
        /// Paint an opaque background behind the text
        boxed: bool,
    },
    Circle {
        center: Point2,
        radius: f64,
        color: ColorId,
        filled: bool,
        thickness: f64,
    },
}

impl DrawPrimitive {
    /// Solid line of default thickness
    pub fn line(from: Point2, to: Point2, color: ColorId) -> Self {
        DrawPrimitive::Line {
            from,
            to,
            color,
            dashed: false,
            thickness: DEFAULT_THICKNESS,
        }
    }

    /// Dashed line of default thickness
    pub fn dashed_line(from: Point2, to: Point2, color: ColorId) -> Self {
        DrawPrimitive::Line {
            from,
            to,
            color,
            dashed: true,
            thickness: DEFAULT_THICKNESS,
        }
    }

    /// Plain label without background
    pub fn label(position: Point2, text: impl Into<String>, color: ColorId, font_size: f64) -> Self {
        DrawPrimitive::Label {
            position,
            text: text.into(),
            color,
            font_size,
            boxed: false,
        }
    }

    /// Label painted over an opaque background
    pub fn boxed_label(position: Point2, text: impl Into<String>, color: ColorId) -> Self {
        DrawPrimitive::Label {
            position,
            text: text.into(),
            color,
            font_size: LABEL_FONT_SIZE,
            boxed: true,
        }
    }

    /// Replace the stroke width of a line, arc or circle
    pub fn with_thickness(mut self, value: f64) -> Self {
        match &mut self {
            DrawPrimitive::Line { thickness, .. }
            | DrawPrimitive::Arc { thickness, .. }
            | DrawPrimitive::Circle { thickness, .. } => *thickness = value,
            DrawPrimitive::Label { .. } => {}
        }
        self
    }

    /// Color of the primitive
    pub fn color(&self) -> ColorId {
        match self {
            DrawPrimitive::Line { color, .. }
            | DrawPrimitive::Arc { color, .. }
            | DrawPrimitive::Label { color, .. }
            | DrawPrimitive::Circle { color, .. } => *color,
        }
    }

    /// Short type name, handy in logs and tests
    pub fn kind(&self) -> &'static str {
        match self {
            DrawPrimitive::Line { .. } => "LINE",
            DrawPrimitive::Arc { .. } => "ARC",
            DrawPrimitive::Label { .. } => "LABEL",
            DrawPrimitive::Circle { .. } => "CIRCLE",
        }
    }

    /// Label text, if this is a label
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawPrimitive::Label { text, .. } => Some(text),
            _ => None,
        }
    }

    /// End point of an arc
    pub fn arc_end_point(&self) -> Option<Point2> {
        match self {
            DrawPrimitive::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
                ..
            } => {
                let end = (start_angle + sweep_angle).to_radians();
                Some(Point2::new(
                    center.x + radius * end.cos(),
                    center.y + radius * end.sin(),
                ))
            }
            _ => None,
        }
    }
}
