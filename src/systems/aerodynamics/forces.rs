use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{Airframe, WingSide};
use crate::utils::{opposing_drag, resolve_tilted};

/// A value carried for each wing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerWing<T> {
    pub left: T,
    pub right: T,
}

impl<T: Copy> PerWing<T> {
    pub fn get(&self, side: WingSide) -> T {
        match side {
            WingSide::Left => self.left,
            WingSide::Right => self.right,
        }
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> PerWing<U> {
        PerWing {
            left: f(self.left),
            right: f(self.right),
        }
    }
}

/// Horizontal body drag opposing the sideslip rate `vss` (m/s).
pub fn side_drag(airframe: &Airframe, vss: f64) -> Vector2<f64> {
    Vector2::new(
        opposing_drag(airframe.density(), vss, airframe.effective_drag_area()),
        0.0,
    )
}

/// Vertical body drag opposing the vertical rate `vy` (m/s).
pub fn vertical_drag(airframe: &Airframe, vy: f64) -> Vector2<f64> {
    Vector2::new(
        0.0,
        opposing_drag(airframe.density(), vy, airframe.effective_drag_area()),
    )
}

pub fn weight(airframe: &Airframe) -> Vector2<f64> {
    Vector2::new(0.0, -airframe.weight())
}

/// Vertical velocity increments induced at each wing by roll rate `w`
/// (deg/s). Positive roll drops the right wing into the airflow and lifts
/// the left one.
pub fn wingtip_rotational_velocity(airframe: &Airframe, w: f64) -> PerWing<f64> {
    let speed = airframe.wingtip_lever() * w;
    PerWing {
        left: WingSide::Left.tip_velocity_sign() * speed,
        right: WingSide::Right.tip_velocity_sign() * speed,
    }
}

/// Lift of one wing at angle of attack `aoa` (degrees), resolved into
/// (horizontal, vertical) components for bank angle `bank` (degrees).
///
/// The lift vector leans by `bank ± dihedral`; a positive lean points the
/// horizontal component toward negative x.
pub fn wing_lift(airframe: &Airframe, side: WingSide, bank: f64, aoa: f64) -> Vector2<f64> {
    let config = airframe.config();
    let coefficient = config.lift_coefficient_zero + config.lift_slope * aoa;
    let magnitude = airframe.wing_lift_per_coefficient() * coefficient;

    resolve_tilted(magnitude, side.tilt(bank, config.dihedral))
}

/// Rolling torque from one wing's lift, acting at mid-span. Right-wing lift
/// rolls right (positive), left-wing lift rolls left.
pub fn wing_torque(airframe: &Airframe, side: WingSide, lift: &Vector2<f64>) -> f64 {
    side.torque_sign() * lift.y * airframe.lift_arm()
}
