#[path = "../common/mod.rs"]
mod common;

mod simulation_tests;
