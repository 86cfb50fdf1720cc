//! # StitchKit Core
//!
//! Core types for StitchKit.
//! Provides the stitch model, plane geometry, machine limits and the
//! error types shared by the codec and optimizer crates.

pub mod error;
pub mod geometry;
pub mod model;

pub use error::{Error, FormatError, Result, UnsupportedFormatError, ValidationError};
pub use geometry::{interpolate_line, MachineLimits, Point};
pub use model::{StitchModel, StitchSegment};
