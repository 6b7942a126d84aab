use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{ControlState, WingSide};
use crate::systems::aerodynamics::AeroLoads;

/// Per-wing aerodynamic readout from the last completed step, for HUD and
/// logging consumers.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirData {
    /// Left (pilot's) wing angle of attack (degrees).
    pub left_aoa: f64,
    /// Right (pilot's) wing angle of attack (degrees).
    pub right_aoa: f64,
    /// Left wing lift as (horizontal, vertical) force (N).
    pub left_lift: Vector2<f64>,
    /// Right wing lift as (horizontal, vertical) force (N).
    pub right_lift: Vector2<f64>,
    /// Direction of the airframe's velocity in the lateral plane (degrees).
    pub sideslip_angle: f64,
    /// Net force (N).
    pub net_force: Vector2<f64>,
    /// Aerodynamic torque excluding control input (N·m).
    pub aero_torque: f64,
    pub aileron: f64,
    pub autopilot: bool,
}

impl AirData {
    /// Replaces the readout with the loads acting at the start of the latest
    /// step.
    pub fn refresh(&mut self, loads: &AeroLoads, control: &ControlState) {
        self.left_aoa = loads.aoa.left;
        self.right_aoa = loads.aoa.right;
        self.left_lift = loads.lift.left;
        self.right_lift = loads.lift.right;
        self.sideslip_angle = loads.sideslip;
        self.net_force = loads.force;
        self.aero_torque = loads.torque;
        self.aileron = control.aileron;
        self.autopilot = control.autopilot;
    }

    /// Lift on `side` as (horizontal, vertical) force (N).
    pub fn lift(&self, side: WingSide) -> Vector2<f64> {
        match side {
            WingSide::Left => self.left_lift,
            WingSide::Right => self.right_lift,
        }
    }
}
