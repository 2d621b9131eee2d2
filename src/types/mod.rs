//! Core value types shared across the engine

pub mod color;
pub mod vector;

pub use color::{ColorId, VectorColors};
pub use vector::{Point2, Vector2};
