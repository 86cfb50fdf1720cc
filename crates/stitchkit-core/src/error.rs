//! Error handling for StitchKit
//!
//! Provides error types for every layer that can fail:
//! - Format errors (malformed binary input while decoding)
//! - Validation errors (structural or dimensional violations)
//! - Unsupported export formats
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Format error type
///
/// Raised while decoding binary embroidery data. Corrupt stitch data is never
/// recovered from, since a guessed record could drive the machine somewhere
/// unexpected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Input is shorter than the smallest well-formed file
    #[error("Input too short: {len} bytes (minimum {min})")]
    TooShort {
        /// The actual input length.
        len: usize,
        /// The minimum accepted length.
        min: usize,
    },

    /// The stitch region ends in the middle of a record
    #[error("Truncated stitch record: {len} bytes of stitch data is not a multiple of 3")]
    TruncatedRecord {
        /// Length of the stitch region in bytes.
        len: usize,
    },

    /// A header field could not be parsed
    #[error("Invalid header field '{field}': {value:?}")]
    InvalidHeaderField {
        /// The header field name.
        field: String,
        /// The raw field text.
        value: String,
    },
}

/// Validation error type
///
/// Represents structural problems in encoded DST data and designs that do
/// not fit the target machine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// File shorter than header plus EOF marker
    #[error("Invalid DST file: Too short ({len} bytes)")]
    TooShort {
        /// The actual file length.
        len: usize,
    },

    /// Last three bytes are not the EOF marker
    #[error("Invalid DST file: Missing EOF marker")]
    MissingEofMarker,

    /// Stitch region length is not a multiple of the record size
    #[error("Invalid DST file: Stitches are not properly aligned ({len} bytes)")]
    MisalignedStitches {
        /// Length of the stitch region in bytes.
        len: usize,
    },

    /// A record carries an unknown flag byte
    #[error("Invalid stitch flags at index {index}: {flags:#04x}")]
    InvalidStitchFlags {
        /// Byte offset of the record within the stitch region.
        index: usize,
        /// The offending flag byte.
        flags: u8,
    },

    /// Design extends beyond the machine limits
    #[error("Design exceeds maximum dimensions: {max_width} x {max_height} (design reaches {design_x} x {design_y})")]
    DimensionsExceeded {
        /// Largest X coordinate in the design.
        design_x: f64,
        /// Largest Y coordinate in the design.
        design_y: f64,
        /// Allowed width.
        max_width: f64,
        /// Allowed height.
        max_height: f64,
    },

    /// A segment is too long to fit one signed delta byte
    #[error("Stitch {index} delta ({dx}, {dy}) exceeds the -128..=127 record range")]
    DeltaOutOfRange {
        /// Position of the segment in the sequence.
        index: usize,
        /// Rounded X delta.
        dx: i64,
        /// Rounded Y delta.
        dy: i64,
    },

    /// Design has more stitches than the machine accepts
    #[error("Design has {count} stitches, machine maximum is {max}")]
    TooManyStitches {
        /// Stitch count of the design.
        count: usize,
        /// Machine maximum.
        max: usize,
    },
}

/// Requested export format is not known
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported format: {format}")]
pub struct UnsupportedFormatError {
    /// The format name as requested.
    pub format: String,
}

impl UnsupportedFormatError {
    /// Create an error for the given format name
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

/// Main error type for StitchKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unsupported export format
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an unsupported format error
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Error::UnsupportedFormat(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
