//! Geometry model: the two directions, the scalar length and the surface geometry

use crate::config::{EngineConfig, RadiusPolicy};
use crate::error::{Result, VecvizError};
use crate::math;
use crate::types::{Point2, Vector2};

/// Which of the two vectors an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorId {
    First,
    Second,
}

/// State of the vector canvas
///
/// `vector1` and `vector2` are unit directions in math space (Y up). The
/// surface fields are in pixels with Y down.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryModel {
    vector1: Vector2,
    vector2: Vector2,
    scalar_length: f64,
    snap_step_degrees: f64,
    radius_policy: RadiusPolicy,
    width: f64,
    height: f64,
    center: Point2,
    radius: f64,
}

impl GeometryModel {
    /// Create a model with the startup defaults of `config`
    pub fn new(config: &EngineConfig) -> Self {
        let mut model = GeometryModel {
            vector1: Vector2::UNIT_X,
            vector2: Vector2::UNIT_Y,
            scalar_length: 1.0,
            snap_step_degrees: config.snap_step_degrees,
            radius_policy: config.radius_policy,
            width: 0.0,
            height: 0.0,
            center: Point2::ZERO,
            radius: 0.0,
        };
        model.apply_surface(config.initial_width, config.initial_height);
        model
    }

    pub fn vector1(&self) -> Vector2 {
        self.vector1
    }

    pub fn vector2(&self) -> Vector2 {
        self.vector2
    }

    /// Unit direction of the given vector
    pub fn vector(&self, id: VectorId) -> Vector2 {
        match id {
            VectorId::First => self.vector1,
            VectorId::Second => self.vector2,
        }
    }

    pub fn scalar_length(&self) -> f64 {
        self.scalar_length
    }

    pub fn snap_step_degrees(&self) -> f64 {
        self.snap_step_degrees
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// X coordinate of `v` after scaling by the scalar length
    pub fn projection_on_x(&self, v: Vector2) -> f64 {
        v.x * self.scalar_length
    }

    /// Y coordinate of `v` after scaling by the scalar length
    pub fn projection_on_y(&self, v: Vector2) -> f64 {
        v.y * self.scalar_length
    }

    pub fn scaled_vector1(&self) -> Vector2 {
        self.vector1 * self.scalar_length
    }

    pub fn scaled_vector2(&self) -> Vector2 {
        self.vector2 * self.scalar_length
    }

    /// Pixel position of a math-space direction drawn at the circle radius
    pub fn to_surface(&self, direction: Vector2) -> Point2 {
        self.center + direction.flip_y() * self.radius
    }

    /// Math-space offset of a pixel position from the center
    pub fn from_surface(&self, point: Point2) -> Vector2 {
        (point - self.center).flip_y()
    }

    /// Rendered tip of the given vector in pixels
    pub fn tip(&self, id: VectorId) -> Point2 {
        self.to_surface(self.vector(id))
    }

    /// Replace the scalar length
    ///
    /// Fails with [`VecvizError::InvalidLength`] when `length` is not a
    /// positive finite number; the model is unchanged in that case.
    pub fn set_scalar_length(&mut self, length: f64) -> Result<()> {
        if !(length > 0.0 && length.is_finite()) {
            return Err(VecvizError::InvalidLength(length.to_string()));
        }
        self.scalar_length = length;
        Ok(())
    }

    /// Replace the snap step used by subsequent drags
    pub fn set_snap_step(&mut self, step_degrees: f64) -> Result<()> {
        math::validate_step(step_degrees)?;
        self.snap_step_degrees = step_degrees;
        Ok(())
    }

    /// Recompute center and radius for a new surface size
    ///
    /// Fails with [`VecvizError::InvalidSurface`] when either dimension is not
    /// positive and finite; the previous geometry stays in place.
    pub fn resize_surface(&mut self, width: f64, height: f64) -> Result<()> {
        let size = Vector2::new(width, height);
        if !(size.is_finite() && width > 0.0 && height > 0.0) {
            return Err(VecvizError::InvalidSurface { width, height });
        }
        self.apply_surface(width, height);
        Ok(())
    }

    fn apply_surface(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.center = Point2::new(width / 2.0, height / 2.0);
        self.radius = self.radius_policy.radius_for(width, height);
    }

    /// Store a new direction for one vector
    ///
    /// Only the drag path calls this, with an already snapped unit vector.
    pub(crate) fn set_vector(&mut self, id: VectorId, direction: Vector2) {
        match id {
            VectorId::First => self.vector1 = direction,
            VectorId::Second => self.vector2 = direction,
        }
    }
}

impl Default for GeometryModel {
    fn default() -> Self {
        GeometryModel::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = GeometryModel::default();
        assert_eq!(model.vector1(), Vector2::UNIT_X);
        assert_eq!(model.vector2(), Vector2::UNIT_Y);
        assert_eq!(model.scalar_length(), 1.0);
        assert_eq!(model.center(), Point2::new(400.0, 300.0));
        assert_eq!(model.radius(), 150.0);
    }

    #[test]
    fn test_scaled_and_projections() {
        let mut model = GeometryModel::default();
        model.set_scalar_length(2.0).unwrap();
        assert_eq!(model.scaled_vector1(), Vector2::new(2.0, 0.0));
        assert_eq!(model.scaled_vector2(), Vector2::new(0.0, 2.0));
        assert_eq!(model.projection_on_x(Vector2::new(0.5, 0.25)), 1.0);
        assert_eq!(model.projection_on_y(Vector2::new(0.5, 0.25)), 0.5);
    }

    #[test]
    fn test_invalid_length_leaves_model() {
        let mut model = GeometryModel::default();
        model.set_scalar_length(3.0).unwrap();
        let before = model.clone();
        assert!(model.set_scalar_length(0.0).is_err());
        assert!(model.set_scalar_length(-1.0).is_err());
        assert!(model.set_scalar_length(f64::INFINITY).is_err());
        assert!(model.set_scalar_length(f64::NAN).is_err());
        assert_eq!(model, before);
    }

    #[test]
    fn test_resize() {
        let mut model = GeometryModel::default();
        model.resize_surface(200.0, 100.0).unwrap();
        assert_eq!(model.center(), Point2::new(100.0, 50.0));
        assert_eq!(model.radius(), 150.0);
    }

    #[test]
    fn test_resize_fraction_policy() {
        let config = EngineConfig {
            radius_policy: RadiusPolicy::FractionOfMinDimension { fraction: 0.4 },
            ..EngineConfig::default()
        };
        let mut model = GeometryModel::new(&config);
        model.resize_surface(1000.0, 500.0).unwrap();
        assert_eq!(model.radius(), 200.0);
    }

    #[test]
    fn test_degenerate_resize_keeps_geometry() {
        let config = EngineConfig {
            radius_policy: RadiusPolicy::FractionOfMinDimension { fraction: 0.4 },
            ..EngineConfig::default()
        };
        let mut model = GeometryModel::new(&config);
        model.resize_surface(1000.0, 500.0).unwrap();
        let before = model.clone();

        for (w, h) in [
            (0.0, 600.0),
            (-100.0, 600.0),
            (800.0, 0.0),
            (f64::NAN, 600.0),
            (800.0, f64::INFINITY),
        ] {
            assert!(matches!(
                model.resize_surface(w, h),
                Err(VecvizError::InvalidSurface { .. })
            ));
        }
        assert_eq!(model, before);
        assert_eq!(model.radius(), 200.0);
    }

    #[test]
    fn test_tip_is_y_down() {
        let model = GeometryModel::default();
        assert_eq!(model.tip(VectorId::First), Point2::new(550.0, 300.0));
        assert_eq!(model.tip(VectorId::Second), Point2::new(400.0, 150.0));
        assert_eq!(model.from_surface(Point2::new(400.0, 305.0)), Vector2::new(0.0, -5.0));
    }
}
