use serde::{Deserialize, Serialize};
use std::fmt;

/// Wing side in the pilot's frame. Viewed head on, the pilot's right wing
/// sits on the observer's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WingSide {
    Left,
    Right,
}

impl WingSide {
    /// Effective tilt of the wing's lift vector from vertical (degrees).
    /// Dihedral raises the left wing's tilt and lowers the right wing's.
    pub fn tilt(self, bank: f64, dihedral: f64) -> f64 {
        match self {
            WingSide::Left => bank + dihedral,
            WingSide::Right => bank - dihedral,
        }
    }

    /// Direction in which this wing's lift rolls the airframe. Positive is
    /// the rolling-right sense that reduces bank angle.
    pub fn torque_sign(self) -> f64 {
        match self {
            WingSide::Left => -1.0,
            WingSide::Right => 1.0,
        }
    }

    /// Direction of the tip velocity increment for a positive roll rate.
    pub fn tip_velocity_sign(self) -> f64 {
        match self {
            WingSide::Left => 1.0,
            WingSide::Right => -1.0,
        }
    }
}

impl fmt::Display for WingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WingSide::Left => write!(f, "left"),
            WingSide::Right => write!(f, "right"),
        }
    }
}

/// Planform classification by dihedral sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WingConfiguration {
    /// Wings tilt up; typical of general aviation and airliners.
    Dihedral,
    /// Wings tilt down; typical of some military aircraft.
    Anhedral,
    Flat,
}

impl WingConfiguration {
    pub fn from_dihedral(dihedral: f64) -> Self {
        if dihedral > 0.0 {
            WingConfiguration::Dihedral
        } else if dihedral < 0.0 {
            WingConfiguration::Anhedral
        } else {
            WingConfiguration::Flat
        }
    }
}

impl fmt::Display for WingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WingConfiguration::Dihedral => write!(f, "dihedral"),
            WingConfiguration::Anhedral => write!(f, "anhedral"),
            WingConfiguration::Flat => write!(f, "flat"),
        }
    }
}
