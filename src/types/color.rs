//! Color identifiers for draw primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named color carried by a draw primitive
///
/// The renderer resolves the identifier to a concrete color; [`ColorId::rgb`]
/// gives the values the desktop shells used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorId {
    #[default]
    Black,
    White,
    LightGray,
    Red,
    LightPink,
    Blue,
    LightBlue,
    Green,
    /// Arbitrary true color
    Rgb { r: u8, g: u8, b: u8 },
}

impl ColorId {
    /// Resolve to RGB values
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorId::Black => (0, 0, 0),
            ColorId::White => (255, 255, 255),
            ColorId::LightGray => (211, 211, 211),
            ColorId::Red => (255, 0, 0),
            ColorId::LightPink => (255, 182, 193),
            ColorId::Blue => (0, 0, 255),
            ColorId::LightBlue => (173, 216, 230),
            ColorId::Green => (0, 128, 0),
            ColorId::Rgb { r, g, b } => (*r, *g, *b),
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorId::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
            named => write!(f, "{:?}", named),
        }
    }
}

/// Resting and dragged color variants of one vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorColors {
    /// Color while the vector is not grabbed
    pub resting: ColorId,
    /// Color while the vector is being dragged
    pub dragged: ColorId,
}

impl VectorColors {
    pub const fn new(resting: ColorId, dragged: ColorId) -> Self {
        VectorColors { resting, dragged }
    }

    /// Pick the variant for the current drag status
    pub fn select(&self, dragging: bool) -> ColorId {
        if dragging {
            self.dragged
        } else {
            self.resting
        }
    }
}
