//! # StitchKit Optimizer
//!
//! Post-processing for stitch sequences before export.
//!
//! - **Path optimizer**: reorders, reverses and merges stitch runs to cut
//!   jump count and travel
//! - **Statistics**: stitch and jump counts and distances
//! - **Pull compensation**: lengthens stitches to offset fabric pull

pub mod compensation;
pub mod optimizer;
pub mod stats;

pub use compensation::{apply_pull_compensation, DEFAULT_PULL_COMPENSATION};
pub use optimizer::{optimize_stitch_paths, PathOptimizer, StitchRun, DEFAULT_MERGE_THRESHOLD};
pub use stats::{analyze_stitches, StitchStats};
