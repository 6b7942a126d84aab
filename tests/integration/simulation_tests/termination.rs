use dihedral::components::{LateralState, TerminationReason, WingSide};

use crate::common::{create_banked_state, create_reference_config, TestAppBuilder};

#[test]
fn test_unsafe_bank_terminates_after_next_step() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.tick();
    app.set_state(create_banked_state(95.0));

    let reason = app.run_until_terminated(1);
    match reason {
        Some(TerminationReason::UnsafeBankAngle { bank }) => assert!(bank > 90.0),
        other => panic!("expected unsafe bank termination, got {:?}", other),
    }

    // No further integration once terminated.
    let frozen = app.state();
    let ticks = app.clock().ticks();
    app.run_ticks(10);
    assert_eq!(app.state(), frozen);
    assert_eq!(app.clock().ticks(), ticks);

    let ended = app.ended_events();
    assert_eq!(ended.len(), 1);
    assert!(ended[0].reason.is_normal());
}

#[test]
fn test_stall_aborts_run() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    let before = LateralState {
        y_rate: -20.0,
        ..Default::default()
    };
    app.set_state(before);

    match app.run_until_terminated(1) {
        Some(TerminationReason::Stalled {
            wing, threshold, ..
        }) => {
            assert_eq!(wing, WingSide::Left);
            assert_eq!(threshold, 15.0);
        }
        other => panic!("expected stall, got {:?}", other),
    }

    // The faulted step is discarded.
    assert_eq!(app.state(), before);
    assert_eq!(app.clock().ticks(), 0);
    assert!(!app.ended_events()[0].reason.is_normal());
}

#[test]
fn test_leaving_world_terminates() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .with_initial_bank(0.0)
        .build();
    app.set_state(LateralState {
        x: -149.9,
        x_rate: -30.0,
        ..Default::default()
    });

    match app.run_until_terminated(5) {
        Some(TerminationReason::BoundaryExceeded { x, .. }) => assert!(x < 0.0),
        other => panic!("expected boundary exit, got {:?}", other),
    }
}

#[test]
fn test_boundary_checked_before_bank() {
    let mut app = TestAppBuilder::new()
        .with_config(create_reference_config())
        .build();
    app.set_state(LateralState {
        x: 200.0,
        bank: 95.0,
        ..Default::default()
    });

    assert!(matches!(
        app.run_until_terminated(1),
        Some(TerminationReason::BoundaryExceeded { .. })
    ));
}
