mod atmosphere;
mod config;
mod geometry;
mod model;

pub use atmosphere::AmbientAir;
pub use config::AirframeConfig;
pub use geometry::{WingConfiguration, WingSide};
pub use model::Airframe;
