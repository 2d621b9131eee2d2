//! Numeric summary shown next to the canvas

use std::fmt;

use crate::types::Vector2;

/// Coordinates, dot product and angle of the scaled vectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub vector1_coords: Vector2,
    pub vector2_coords: Vector2,
    pub dot_product: f64,
    /// Unsigned, in [0, 180]
    pub angle_degrees: f64,
    pub coordinate_precision: usize,
    pub angle_precision: usize,
}

impl Summary {
    pub fn vector1_text(&self) -> String {
        format_coords(self.vector1_coords, self.coordinate_precision)
    }

    pub fn vector2_text(&self) -> String {
        format_coords(self.vector2_coords, self.coordinate_precision)
    }

    pub fn dot_product_text(&self) -> String {
        format!("{:.*}", self.coordinate_precision, self.dot_product)
    }

    pub fn angle_text(&self) -> String {
        format_angle(self.angle_degrees, self.angle_precision)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector 1: {}", self.vector1_text())?;
        writeln!(f, "Vector 2: {}", self.vector2_text())?;
        writeln!(f, "Dot product: {}", self.dot_product_text())?;
        write!(f, "Angle: {}", self.angle_text())
    }
}

/// `(x, y)` with fixed decimals
pub fn format_coords(v: Vector2, precision: usize) -> String {
    format!("({:.*}, {:.*})", precision, v.x, precision, v.y)
}

/// Angle with fixed decimals and a degree sign
pub fn format_angle(degrees: f64, precision: usize) -> String {
    format!("{:.*}°", precision, degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fields() {
        let summary = Summary {
            vector1_coords: Vector2::new(1.0, 0.0),
            vector2_coords: Vector2::new(0.0, 1.0),
            dot_product: 0.0,
            angle_degrees: 90.0,
            coordinate_precision: 3,
            angle_precision: 2,
        };
        assert_eq!(summary.vector1_text(), "(1.000, 0.000)");
        assert_eq!(summary.vector2_text(), "(0.000, 1.000)");
        assert_eq!(summary.dot_product_text(), "0.000");
        assert_eq!(summary.angle_text(), "90.00°");
        assert!(summary.to_string().ends_with("Angle: 90.00°"));
    }

    #[test]
    fn test_precision_drift() {
        assert_eq!(format_coords(Vector2::new(0.12345, -2.0), 2), "(0.12, -2.00)");
        assert_eq!(format_angle(45.0, 0), "45°");
    }
}
