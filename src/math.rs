//! Vector math used by the interaction and scene code
//!
//! All angles are in degrees. Directions live in math space (Y up); callers
//! converting to the Y-down surface flip exactly once at that boundary.

use crate::error::{Result, VecvizError};
use crate::types::Vector2;

/// Scale `v` to unit length
///
/// Fails with [`VecvizError::DegenerateVector`] when the length is zero or
/// not finite.
pub fn normalize(v: Vector2) -> Result<Vector2> {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Err(VecvizError::DegenerateVector);
    }
    Ok(v / len)
}

/// Dot product of two vectors
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.dot(&b)
}

/// Unsigned angle between two vectors, in [0, 180]
pub fn angle_between_degrees(a: Vector2, b: Vector2) -> Result<f64> {
    let cos = dot(normalize(a)?, normalize(b)?).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees().min(180.0))
}

/// Signed angle from `a` to `b`, in (-180, 180]
///
/// Positive when turning counter-clockwise from `a` to `b` with Y up.
pub fn signed_angle_degrees(a: Vector2, b: Vector2) -> Result<f64> {
    let a = normalize(a)?;
    let b = normalize(b)?;
    let angle = a.cross(&b).atan2(a.dot(&b)).to_degrees();
    // atan2(-0.0, -1.0) lands on the excluded end of the range
    if angle <= -180.0 || angle > 180.0 {
        Ok(180.0)
    } else {
        Ok(angle)
    }
}

/// Check that `step_degrees` can snap any direction in (-180, 180]
pub fn validate_step(step_degrees: f64) -> Result<()> {
    if step_degrees > 0.0 && step_degrees.is_finite() && (180.0 / step_degrees).is_finite() {
        Ok(())
    } else {
        Err(VecvizError::InvalidStep(step_degrees))
    }
}

/// Round `angle_degrees` to the nearest multiple of `step_degrees`
///
/// Fails with [`VecvizError::InvalidStep`] when the step is not positive and
/// finite, or when it is so small that the quotient overflows.
pub fn snap_to_step(angle_degrees: f64, step_degrees: f64) -> Result<f64> {
    validate_step(step_degrees)?;
    let snapped = (angle_degrees / step_degrees).round() * step_degrees;
    if !snapped.is_finite() {
        return Err(VecvizError::InvalidStep(step_degrees));
    }
    Ok(snapped)
}

/// Normalize `raw`, snap its direction to `step_degrees`, and rebuild a unit vector
pub fn snap_direction(raw: Vector2, step_degrees: f64) -> Result<Vector2> {
    let unit = normalize(raw)?;
    let snapped = snap_to_step(unit.angle_degrees(), step_degrees)?;
    let direction = Vector2::from_angle_degrees(snapped);
    if !direction.is_finite() {
        return Err(VecvizError::InvalidStep(step_degrees));
    }
    Ok(direction)
}

/// Rotate `v` counter-clockwise by `degrees`
pub fn rotate_degrees(v: Vector2, degrees: f64) -> Vector2 {
    let rotation = nalgebra::Rotation2::new(degrees.to_radians());
    (rotation * nalgebra::Vector2::from(v)).into()
}
