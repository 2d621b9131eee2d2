//! Vector types for geometric operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector
///
/// Used both for math-space directions (Y up) and for pixel positions on the
/// host surface (Y down). [`Point2`] names the second use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Pixel position on the host surface
pub type Point2 = Vector2;

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector2 = Vector2::new(0.0, 1.0);

    /// Unit vector pointing at `degrees`, counter-clockwise from +X
    pub fn from_angle_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Vector2::new(radians.cos(), radians.sin())
    }

    /// Calculate the length (magnitude) of the vector
    ///
    /// Does not overflow for components beyond the square root of `f64::MAX`.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of the vector in degrees, in (-180, 180]
    pub fn angle_degrees(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (returns scalar for 2D)
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*self - *other).length()
    }

    /// Mirror across the X axis; converts between Y-up and Y-down spaces
    pub fn flip_y(&self) -> Self {
        Vector2::new(self.x, -self.y)
    }

    /// Check that both components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Vector2) -> Self {
        Vector2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
