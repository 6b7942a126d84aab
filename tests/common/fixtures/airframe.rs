use dihedral::{
    components::{Airframe, AirframeConfig, LateralState},
    resources::SimulationConfig,
};

/// Light single-engine trainer from the reference scenario.
pub fn create_reference_airframe_config() -> AirframeConfig {
    AirframeConfig {
        dihedral: 3.0,
        mass: 1000.0,
        wing_length: 5.5,
        wing_width: 1.5,
        body_area: 5.0,
        lift_coefficient_zero: 0.25,
        lift_slope: 0.2,
        altitude: 1000.0,
        cruise_speed: 52.0,
        roll_inertia: 1000.0,
        drag_multiplier: 1.0,
        constant_altitude: false,
        stall_angle: 15.0,
    }
}

pub fn create_reference_airframe() -> Airframe {
    Airframe::new(create_reference_airframe_config()).expect("reference airframe is valid")
}

/// Same airframe with flat wings.
pub fn create_flat_wing_config() -> AirframeConfig {
    AirframeConfig {
        dihedral: 0.0,
        ..create_reference_airframe_config()
    }
}

pub fn create_constant_altitude_config() -> AirframeConfig {
    AirframeConfig {
        constant_altitude: true,
        ..create_reference_airframe_config()
    }
}

/// Reference scenario: 5° initial bank, 60 Hz, no telemetry.
pub fn create_reference_config() -> SimulationConfig {
    SimulationConfig {
        airframe: create_reference_airframe_config(),
        initial_bank: 5.0,
        tick_rate: 60.0,
        ..Default::default()
    }
}

pub fn create_banked_state(bank: f64) -> LateralState {
    LateralState::perturbed(bank)
}
