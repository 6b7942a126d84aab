mod basic;
mod control;
mod telemetry;
mod termination;
