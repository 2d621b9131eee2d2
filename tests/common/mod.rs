//! Shared test utilities for vecviz integration tests.

#![allow(dead_code)]

use vecviz::{EngineConfig, InteractionController, Point2, Vector2, VectorId};

/// Tolerance for floating-point comparisons
pub const EPS: f64 = 1e-9;

/// Controller with default configuration on an 800x600 surface
pub fn default_controller() -> InteractionController {
    InteractionController::new(EngineConfig::default()).expect("default config is valid")
}

/// Controller with a custom snap step
pub fn controller_with_step(step: f64) -> InteractionController {
    let config = EngineConfig {
        snap_step_degrees: step,
        ..EngineConfig::default()
    };
    InteractionController::new(config).expect("valid config")
}

/// Grab `id` at its tip and move the pointer to `to`
pub fn drag(controller: &mut InteractionController, id: VectorId, to: Point2) {
    let tip = controller.model().tip(id);
    controller.pointer_down(tip);
    controller.pointer_move(to);
    controller.pointer_up();
}

pub fn assert_vec_close(actual: Vector2, expected: Vector2) {
    assert!(
        actual.distance(&expected) < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}
