mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_bank_eq, assert_state_finite, assert_within_world};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
