//! Pointer interaction state machine and host commands
//!
//! ```text
//! Idle --down(hit v1)--> DraggingVector1 --up--> Idle
//! Idle --down(hit v2)--> DraggingVector2 --up--> Idle
//! Dragging* --move--> Dragging* (snap + store, StateChanged)
//! ```

use log::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::error::{Result, VecvizError};
use crate::math;
use crate::model::{GeometryModel, VectorId};
use crate::notification::{Notification, NotificationCollection, NotificationType};
use crate::scene::{Scene, SceneBuilder};
use crate::types::Point2;

/// Which vector, if any, follows the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingVector1,
    DraggingVector2,
}

impl DragState {
    /// Vector being dragged, if any
    pub fn dragged(&self) -> Option<VectorId> {
        match self {
            DragState::Idle => None,
            DragState::DraggingVector1 => Some(VectorId::First),
            DragState::DraggingVector2 => Some(VectorId::Second),
        }
    }

    pub fn is_dragging(&self, id: VectorId) -> bool {
        self.dragged() == Some(id)
    }
}

impl From<VectorId> for DragState {
    fn from(id: VectorId) -> Self {
        match id {
            VectorId::First => DragState::DraggingVector1,
            VectorId::Second => DragState::DraggingVector2,
        }
    }
}

/// Owns the model and drag state; translates host events into model updates
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: EngineConfig,
    model: GeometryModel,
    drag: DragState,
    notifications: NotificationCollection,
}

impl InteractionController {
    /// Create a controller with a fresh model
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let model = GeometryModel::new(&config);
        Ok(InteractionController {
            config,
            model,
            drag: DragState::Idle,
            notifications: NotificationCollection::new(),
        })
    }

    pub fn model(&self) -> &GeometryModel {
        &self.model
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Remove and return the notifications emitted since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Pending notifications, without draining them
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Build the scene for the current state
    pub fn scene(&self) -> Scene {
        SceneBuilder::new(&self.config).build(&self.model, self.drag)
    }

    /// Whether `point` lies inside the square hit box around a vector's tip
    pub fn hit_test(&self, point: Point2, id: VectorId) -> bool {
        let tip = self.model.tip(id);
        let tolerance = self.config.hit_tolerance_px;
        (point.x - tip.x).abs() < tolerance && (point.y - tip.y).abs() < tolerance
    }

    /// Start dragging the vector under `point`
    ///
    /// Vector 1 is checked first and wins when both tips are within reach.
    /// Returns the new drag state.
    pub fn pointer_down(&mut self, point: Point2) -> DragState {
        if self.drag != DragState::Idle {
            return self.drag;
        }
        let grabbed = [VectorId::First, VectorId::Second]
            .into_iter()
            .find(|&id| self.hit_test(point, id));
        if let Some(id) = grabbed {
            self.drag = DragState::from(id);
            debug!("grabbed {:?} at {}", id, point);
            self.notifications
                .notify(NotificationType::DragStarted, format!("{:?}", id));
        }
        self.drag
    }

    /// Rotate the dragged vector toward `point`
    ///
    /// Ignored while idle. A pointer exactly at the center leaves the vector
    /// unchanged. Returns whether the model changed.
    pub fn pointer_move(&mut self, point: Point2) -> bool {
        let Some(id) = self.drag.dragged() else {
            return false;
        };
        let raw = self.model.from_surface(point);
        match math::snap_direction(raw, self.model.snap_step_degrees()) {
            Ok(direction) => {
                self.model.set_vector(id, direction);
                trace!("{:?} -> {}", id, direction);
                self.notifications
                    .notify(NotificationType::StateChanged, format!("{:?} moved", id));
                true
            }
            Err(VecvizError::DegenerateVector) => {
                warn!("ignoring move to the center for {:?}", id);
                false
            }
            Err(err) => {
                warn!("ignoring move for {:?}: {}", id, err);
                false
            }
        }
    }

    /// Release the dragged vector
    ///
    /// Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let Some(id) = self.drag.dragged() else {
            return false;
        };
        self.drag = DragState::Idle;
        debug!("released {:?}", id);
        self.notifications
            .notify(NotificationType::DragEnded, format!("{:?}", id));
        true
    }

    /// Follow a host surface resize
    ///
    /// A surface with a zero, negative or non-finite dimension (for example a
    /// minimized window) is rejected and the last geometry is kept.
    pub fn resize_surface(&mut self, width: f64, height: f64) -> Result<()> {
        if let Err(err) = self.model.resize_surface(width, height) {
            warn!("ignoring resize: {}", err);
            return Err(err);
        }
        debug!(
            "surface {}x{}, center {}, radius {}",
            width,
            height,
            self.model.center(),
            self.model.radius()
        );
        self.notifications
            .notify(NotificationType::StateChanged, "surface resized");
        Ok(())
    }

    /// Parse and apply a scalar length typed by the user
    ///
    /// Accepts a comma as decimal separator. On rejection the model is left
    /// untouched and a `ValidationFailed` notification carries the user message.
    pub fn set_scalar_length(&mut self, raw: &str) -> Result<f64> {
        match parse_scalar_length(raw).and_then(|len| {
            self.model.set_scalar_length(len)?;
            Ok(len)
        }) {
            Ok(len) => {
                debug!("scalar length set to {}", len);
                self.notifications
                    .notify(NotificationType::StateChanged, "scalar length changed");
                Ok(len)
            }
            Err(err) => {
                warn!("rejected scalar length {:?}: {}", raw, err);
                self.notifications
                    .notify(NotificationType::ValidationFailed, err.user_message());
                Err(err)
            }
        }
    }

    /// Change the snap step for subsequent drags
    ///
    /// Existing vectors are not re-snapped.
    pub fn set_snap_step(&mut self, step_degrees: f64) -> Result<()> {
        if let Err(err) = self.model.set_snap_step(step_degrees) {
            warn!("rejected snap step {}", step_degrees);
            return Err(err);
        }
        debug!("snap step set to {}", step_degrees);
        Ok(())
    }
}

/// Classify raw user text as a scalar length
pub fn parse_scalar_length(raw: &str) -> Result<f64> {
    let text = raw.trim().replace(',', ".");
    let value: f64 = text
        .parse()
        .map_err(|_| VecvizError::InvalidLength(raw.to_string()))?;
    if !(value > 0.0 && value.is_finite()) {
        return Err(VecvizError::InvalidLength(raw.to_string()));
    }
    Ok(value)
}
