//! Recipe handling, scenario orchestration and report output for the
//! `fabsim` binary.

pub mod output;
pub mod recipe;
pub mod scenario;

pub use recipe::Recipe;
pub use scenario::{Report, Simulation, run_scenario};
