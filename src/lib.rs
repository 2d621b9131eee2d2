//! # vecviz
//!
//! Interaction and scene-building engine for a canvas on which the user
//! drags two unit vectors and watches their coordinates, dot product,
//! angle and axis projections update live.
//!
//! The engine owns no window and no event loop. The host forwards pointer,
//! resize and text-input events to an [`InteractionController`], drains the
//! resulting notifications, and paints the [`Scene`] it gets back.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecviz::{EngineConfig, InteractionController, VectorId};
//!
//! let mut controller = InteractionController::new(EngineConfig::default())?;
//! controller.resize_surface(640.0, 480.0)?;
//!
//! // Grab vector 1 at its tip and drag it straight up
//! let tip = controller.model().tip(VectorId::First);
//! controller.pointer_down(tip);
//! controller.pointer_move(vecviz::Point2::new(320.0, 100.0));
//! controller.pointer_up();
//!
//! let scene = controller.scene();
//! assert_eq!(scene.summary.angle_text(), "0.00°");
//! # Ok::<(), vecviz::VecvizError>(())
//! ```
//!
//! ## Architecture
//!
//! - `math` - normalization, dot product, angles and snapping
//! - `model` - the two directions, scalar length and surface geometry
//! - `interaction` - pointer state machine and host commands
//! - `scene` - pure conversion of a model into draw primitives

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod interaction;
pub mod math;
pub mod model;
pub mod notification;
pub mod scene;
pub mod types;

// Re-export commonly used types
pub use config::{EngineConfig, RadiusPolicy, STEP_PRESETS};
pub use error::{Result, VecvizError};
pub use interaction::{DragState, InteractionController};
pub use model::{GeometryModel, VectorId};
pub use notification::{Notification, NotificationType};
pub use scene::{DrawPrimitive, Scene, SceneBuilder, Summary};
pub use types::{ColorId, Point2, Vector2, VectorColors};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
