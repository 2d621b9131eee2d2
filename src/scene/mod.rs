//! Scene output: draw primitives plus the numeric summary

pub mod builder;
pub mod primitive;
pub mod summary;

pub use builder::SceneBuilder;
pub use primitive::DrawPrimitive;
pub use summary::Summary;

/// Result of one rebuild
///
/// `primitives` is in paint order; the renderer must preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub primitives: Vec<DrawPrimitive>,
    pub summary: Summary,
}

impl Scene {
    /// Texts of all labels, in paint order
    pub fn label_texts(&self) -> Vec<&str> {
        self.primitives.iter().filter_map(DrawPrimitive::text).collect()
    }

    /// Primitive type names, in paint order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.primitives.iter().map(DrawPrimitive::kind).collect()
    }
}
