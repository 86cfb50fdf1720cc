//! Configuration for StitchKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - Machine settings (hoop limits, stitch budget, bounds checking)
//! - Optimizer settings (jump optimization, pull compensation)
//! - Export settings (design name, format, chunked writes, G-code output)

use serde::{Deserialize, Serialize};
use std::path::Path;
use stitchkit_core::{Error, MachineLimits, Result};
use stitchkit_formats::ExportFormat;

/// Machine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Maximum X travel in mm
    pub max_x: f64,
    /// Maximum Y travel in mm
    pub max_y: f64,
    /// Maximum number of segments a design may contain
    pub max_stitches: usize,
    /// Reject designs that exceed the machine limits on export
    pub bounds_checking: bool,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            max_x: 110.0,
            max_y: 170.0,
            max_stitches: 10_000,
            bounds_checking: true,
        }
    }
}

impl MachineSettings {
    /// Travel limits as used by the encoders and validator
    pub fn limits(&self) -> MachineLimits {
        MachineLimits::new(self.max_x, self.max_y)
    }
}

/// Path optimizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Optimize jump paths before every export
    pub enabled: bool,
    /// Largest gap bridged with a connecting stitch
    pub merge_threshold: f64,
    /// Fraction each stitch is lengthened by, 0 disables
    pub pull_compensation: f64,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            merge_threshold: 5.0,
            pull_compensation: 0.0,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Name written into headers and used for file names
    pub design_name: String,
    /// Format used when none is given
    pub default_format: ExportFormat,
    /// Bytes per write when saving large files
    pub chunk_size: usize,
    /// Z increment after every G-code move
    pub gcode_z_step: f64,
    /// Longest stitch produced when strokes are interpolated
    pub max_stitch_length: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            design_name: "design".to_string(),
            default_format: ExportFormat::Dst,
            chunk_size: 1024,
            gcode_z_step: 5.0,
            max_stitch_length: 12.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Machine settings
    pub machine: MachineSettings,
    /// Optimizer settings
    pub optimizer: OptimizerSettings,
    /// Export settings
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Machine
        if self.machine.max_x <= 0.0 || self.machine.max_y <= 0.0 {
            return Err(Error::other("Machine limits must be > 0"));
        }

        if self.machine.max_stitches == 0 {
            return Err(Error::other("Max stitches must be > 0"));
        }

        // Optimizer
        if self.optimizer.merge_threshold < 0.0 {
            return Err(Error::other("Merge threshold must be >= 0"));
        }

        if !(0.0..1.0).contains(&self.optimizer.pull_compensation) {
            return Err(Error::other("Pull compensation must be in [0, 1)"));
        }

        // Export
        if self.export.design_name.trim().is_empty() {
            return Err(Error::other("Design name must not be empty"));
        }

        if self.export.chunk_size == 0 {
            return Err(Error::other("Chunk size must be > 0"));
        }

        if self.export.gcode_z_step <= 0.0 {
            return Err(Error::other("G-code Z step must be > 0"));
        }

        if self.export.max_stitch_length <= 0.0 {
            return Err(Error::other("Max stitch length must be > 0"));
        }

        Ok(())
    }
}
