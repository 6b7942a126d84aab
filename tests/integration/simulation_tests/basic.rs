use dihedral::{
    components::{AirData, LateralState, WorldBounds},
    systems::{aero_loads, step},
};
use dihedral::systems::controller::HeldCommand;

use crate::common::{
    assert_bank_eq, assert_state_finite, assert_within_world, create_constant_altitude_config,
    create_flat_wing_config, create_reference_airframe, create_reference_config, TestAppBuilder,
};

#[test]
fn test_startup_spawns_perturbed_aircraft() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();

    assert_eq!(app.state(), LateralState::perturbed(5.0));
    assert!(app.query_single::<AirData>().is_some());
    assert!(app.status().is_running());
    assert_eq!(app.clock().ticks(), 0);
}

#[test]
fn test_first_tick_restores_bank() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.tick();

    let state = app.state();
    assert_state_finite(&state);
    assert!(state.bank < 5.0, "bank should move toward level");
    assert!((state.bank - 5.0).abs() < 1.0);
    assert_eq!(app.clock().ticks(), 1);
    assert!((app.clock().elapsed() - 1.0 / 60.0).abs() < 1e-15);
}

#[test]
fn test_ticks_match_pure_integration() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.run_ticks(30);

    let airframe = create_reference_airframe();
    let mut expected = LateralState::perturbed(5.0);
    for _ in 0..30 {
        expected = step(&expected, 1.0 / 60.0, &airframe, &mut HeldCommand(0.0))
            .unwrap()
            .state;
    }

    assert_eq!(app.state(), expected);
}

#[test]
fn test_air_data_tracks_last_step() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.tick();

    let expected = aero_loads(&create_reference_airframe(), 0.0, 0.0, 5.0, 0.0).unwrap();
    let air_data = app.air_data();
    assert_eq!(air_data.left_aoa, expected.aoa.left);
    assert_eq!(air_data.right_aoa, expected.aoa.right);
    assert_eq!(air_data.net_force, expected.force);
    // Sideslip comes from the same start-of-step evaluation as the loads.
    assert_eq!(air_data.sideslip_angle, expected.sideslip);
    assert_eq!(air_data.sideslip_angle, 0.0);
    assert!(app.state().x_rate < 0.0);
    assert!(!air_data.autopilot);
}

#[test]
fn test_free_response_swings_through_level() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    let bounds = WorldBounds::default();

    let mut crossed = false;
    for _ in 0..600 {
        app.tick();
        let state = app.state();
        assert_state_finite(&state);
        assert_within_world(&state, &bounds);
        assert!(state.bank.abs() < 10.0);
        crossed |= state.bank < 0.0;
    }

    assert!(crossed, "dihedral should roll the aircraft back through level");
    assert!(app.status().is_running());
}

#[test]
fn test_constant_altitude_holds_height() {
    let mut config = create_reference_config();
    config.airframe = create_constant_altitude_config();
    let mut app = TestAppBuilder::new().with_config(config).build();
    app.run_ticks(300);

    let state = app.state();
    assert!(state.y.abs() < 1e-6);
    assert!(state.y_rate.abs() < 1e-6);
    assert!(state.x < 0.0, "banked lift still drifts the aircraft sideways");
}

#[test]
fn test_flat_wings_hold_bank() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_airframe(create_flat_wing_config())
        .build();
    app.run_ticks(120);

    // Without dihedral both wings see the same airflow, so nothing rolls the
    // aircraft back while banked lift still pulls it sideways.
    let state = app.state();
    assert_bank_eq(&state, 5.0, 1e-9);
    assert!(state.x < 0.0);
}

#[test]
fn test_level_start_stays_level() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_initial_bank(0.0)
        .build();
    app.run_ticks(120);

    let state = app.state();
    assert_bank_eq(&state, 0.0, 1e-9);
    assert!(state.x.abs() < 1e-9);
}
