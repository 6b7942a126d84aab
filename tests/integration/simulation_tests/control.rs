use dihedral::components::{ControlCommand, ControlSampling};

use crate::common::{assert_state_finite, create_reference_config, TestAppBuilder};

#[test]
fn test_manual_nudges_applied_next_tick() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();

    for _ in 0..3 {
        app.send(ControlCommand::NudgeLeft);
    }
    app.send(ControlCommand::NudgeRight);
    assert_eq!(app.control().aileron, 0.0);

    app.tick();
    assert_eq!(app.control().aileron, 4.0);
    assert_eq!(app.air_data().aileron, 4.0);
}

#[test]
fn test_left_aileron_raises_bank() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    for _ in 0..3 {
        app.send(ControlCommand::NudgeLeft);
    }
    app.run_ticks(60);

    // Unassisted the bank would have decayed below 5°.
    assert!(app.state().bank > 5.0);
}

#[test]
fn test_autopilot_levels_wings() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.send(ControlCommand::ToggleAutopilot);

    for _ in 0..600 {
        app.tick();
        assert!(app.control().aileron.abs() <= 30.0);
        assert_state_finite(&app.state());
    }

    assert!(app.control().autopilot);
    assert!(app.state().bank.abs() < 0.5);
    assert!(app.status().is_running());
}

#[test]
fn test_autopilot_saturates_on_large_bank() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_initial_bank(-20.0)
        .build();
    app.send(ControlCommand::ToggleAutopilot);

    let mut peak: f64 = 0.0;
    for _ in 0..600 {
        app.tick();
        peak = peak.max(app.control().aileron.abs());
    }

    assert_eq!(peak, 30.0);
    assert!(app.state().bank.abs() < 1.0);
}

#[test]
fn test_autopilot_locks_out_manual_input() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_initial_bank(0.0)
        .build();
    app.send(ControlCommand::ToggleAutopilot);
    app.send(ControlCommand::NudgeLeft);
    app.tick();

    // Wings level: the autopilot holds a zero command and the nudge is dropped.
    assert_eq!(app.control().aileron, 0.0);
}

#[test]
fn test_per_stage_autopilot_holds_bank_small() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_sampling(ControlSampling::PerStage)
        .build();
    app.send(ControlCommand::ToggleAutopilot);
    app.run_ticks(120);

    let mut worst: f64 = 0.0;
    for _ in 0..480 {
        app.tick();
        worst = worst.max(app.state().bank.abs());
        assert!(app.control().aileron.abs() <= 30.0);
    }

    assert!(worst < 2.5);
    assert!(app.status().is_running());
}
