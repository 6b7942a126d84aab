mod airframe;

// Re-export test fixtures
pub use airframe::*;
