mod lateral;

pub use lateral::{Aircraft, LateralSimPlugin, SimulationSet};
