use approx::assert_relative_eq;
use dihedral::components::{LateralState, WorldBounds};

/// Assert every state component is finite
#[track_caller]
pub fn assert_state_finite(state: &LateralState) {
    assert!(state.x.is_finite(), "x is not finite");
    assert!(state.y.is_finite(), "y is not finite");
    assert!(state.bank.is_finite(), "bank is not finite");
    assert!(state.x_rate.is_finite(), "x rate is not finite");
    assert!(state.y_rate.is_finite(), "y rate is not finite");
    assert!(state.bank_rate.is_finite(), "bank rate is not finite");
}

#[track_caller]
pub fn assert_bank_eq(state: &LateralState, expected: f64, epsilon: f64) {
    assert_relative_eq!(state.bank, expected, epsilon = epsilon);
}

/// Assert the aircraft is still inside the world
#[track_caller]
pub fn assert_within_world(state: &LateralState, bounds: &WorldBounds) {
    let position = bounds.world_position(state);
    assert!(
        bounds.contains(&position),
        "aircraft left the world at {:?}",
        position
    );
}
