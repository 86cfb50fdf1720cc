//! StitchKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod persistence;

pub use config::{Config, ExportSettings, MachineSettings, OptimizerSettings};
pub use persistence::SettingsManager;
