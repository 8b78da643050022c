//! Roster demo - a guided tour of the team API

pub mod config;
pub mod scenario;

pub use config::{DemoConfig, OutputFormat};
pub use scenario::{run_scenario, ScenarioReport};
