//! Engine configuration
//!
//! The desktop variants differed only in snap step, hit tolerance, colors and
//! label precision; all of that is carried here as data.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VecvizError};
use crate::math;
use crate::types::{ColorId, VectorColors};

/// Snap step choices offered as one-click presets, in degrees
pub const STEP_PRESETS: [f64; 10] = [1.0, 2.0, 3.0, 5.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0];

/// How the circle radius follows the surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Constant radius in pixels
    Fixed { radius: f64 },
    /// Fraction of the smaller surface dimension
    FractionOfMinDimension { fraction: f64 },
}

impl RadiusPolicy {
    /// Radius for a surface of the given size
    pub fn radius_for(&self, width: f64, height: f64) -> f64 {
        match *self {
            RadiusPolicy::Fixed { radius } => radius,
            RadiusPolicy::FractionOfMinDimension { fraction } => width.min(height) * fraction,
        }
    }
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        RadiusPolicy::Fixed { radius: 150.0 }
    }
}

/// Tunable parameters of the interaction and scene engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial snap step in degrees
    pub snap_step_degrees: f64,
    /// Half-size of the square hit box around a vector tip
    pub hit_tolerance_px: f64,
    pub radius_policy: RadiusPolicy,
    /// Surface size assumed until the host reports a resize
    pub initial_width: f64,
    pub initial_height: f64,
    pub arrow_length_px: f64,
    /// Angle of each arrowhead barb relative to the shaft
    pub arrow_angle_degrees: f64,
    /// Angle arc radius as a fraction of the circle radius
    pub arc_radius_fraction: f64,
    pub center_dot_radius_px: f64,
    /// Decimals for coordinates, dot product, projections and scale labels
    pub coordinate_precision: usize,
    /// Decimals for angles
    pub angle_precision: usize,
    pub vector1_colors: VectorColors,
    pub vector2_colors: VectorColors,
    pub arc_color: ColorId,
    pub axis_color: ColorId,
    /// Circle, center dot and plain text
    pub ink_color: ColorId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            snap_step_degrees: 0.1,
            hit_tolerance_px: 10.0,
            radius_policy: RadiusPolicy::default(),
            initial_width: 800.0,
            initial_height: 600.0,
            arrow_length_px: 10.0,
            arrow_angle_degrees: 30.0,
            arc_radius_fraction: 1.0 / 3.0,
            center_dot_radius_px: 2.5,
            coordinate_precision: 3,
            angle_precision: 2,
            vector1_colors: VectorColors::new(ColorId::Red, ColorId::LightPink),
            vector2_colors: VectorColors::new(ColorId::Blue, ColorId::LightBlue),
            arc_color: ColorId::Green,
            axis_color: ColorId::LightGray,
            ink_color: ColorId::Black,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON and validate it
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        math::validate_step(self.snap_step_degrees)?;
        positive("hit_tolerance_px", self.hit_tolerance_px)?;
        positive("initial_width", self.initial_width)?;
        positive("initial_height", self.initial_height)?;
        positive("arrow_length_px", self.arrow_length_px)?;
        positive("arc_radius_fraction", self.arc_radius_fraction)?;
        positive("center_dot_radius_px", self.center_dot_radius_px)?;
        if !self.arrow_angle_degrees.is_finite() {
            return Err(VecvizError::InvalidConfig(
                "arrow_angle_degrees must be finite".to_string(),
            ));
        }
        match self.radius_policy {
            RadiusPolicy::Fixed { radius } => positive("radius", radius)?,
            RadiusPolicy::FractionOfMinDimension { fraction } => {
                positive("fraction", fraction)?;
                if fraction > 0.5 {
                    return Err(VecvizError::InvalidConfig(format!(
                        "fraction {} would push the circle off the surface",
                        fraction
                    )));
                }
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(VecvizError::InvalidConfig(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
