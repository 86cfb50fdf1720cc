//! # StitchKit
//!
//! Embroidery stitch modelling and export:
//! - Stitch model built from vectorized polylines
//! - DST (read and write), EXP, SVG preview and G-code output
//! - DST structure and machine dimension validation
//! - Jump-stitch path optimization and pull compensation
//!
//! ## Architecture
//!
//! StitchKit is organized as a workspace with multiple crates:
//!
//! 1. **stitchkit-core** - Stitch model, geometry, error types
//! 2. **stitchkit-formats** - DST/EXP/SVG/G-code encoders, DST decoder, validator
//! 3. **stitchkit-optimizer** - Path optimizer, statistics, pull compensation
//! 4. **stitchkit-settings** - Configuration and persistence
//! 5. **stitchkit** - Export service, design reports, logging and the command line binary

pub mod export;
pub mod report;

pub use export::{import_dst, write_chunked, ExportArtifact, ExportService};
pub use report::{inspect_dst, DesignReport};

pub use stitchkit_core::{
    interpolate_line, Error, FormatError, MachineLimits, Point, Result, StitchModel,
    StitchSegment, UnsupportedFormatError, ValidationError,
};

pub use stitchkit_formats::{
    read_metadata, to_hex_string, validate_design_dimensions, validate_dst,
    validate_dst_stitches, validate_stitch_deltas, DstMetadata, ExportFormat, GcodeGenerator,
};

pub use stitchkit_optimizer::{
    analyze_stitches, apply_pull_compensation, optimize_stitch_paths, PathOptimizer, StitchStats,
};

pub use stitchkit_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so encoded data on stdout stays clean
/// - RUST_LOG environment variable support
/// - INFO level unless RUST_LOG says otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
