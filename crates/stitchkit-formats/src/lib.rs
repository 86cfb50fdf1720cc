//! # StitchKit Formats
//!
//! Encoders and decoders between the stitch model and the files that
//! embroidery machines, vector viewers and motion controllers consume.
//!
//! ## Formats
//!
//! - **DST**: Tajima binary, encode and decode, header metadata
//! - **EXP**: binary, encode only
//! - **SVG**: visual preview that distinguishes stitches from jumps
//! - **G-code**: absolute `G0` program auto-scaled to machine limits
//!
//! The [`validator`] module checks DST structure and design dimensions.
//!
//! All functions here are pure: the same steps always produce the same
//! output.

pub mod dst;
pub mod exp;
pub mod format;
pub mod gcode;
pub mod svg;
pub mod validator;

pub use dst::{decode_signed_byte, encode_signed_byte, read_metadata, to_hex_string, DstMetadata};
pub use format::ExportFormat;
pub use gcode::{generate_gcode, Extents, GcodeGenerator};
pub use validator::{
    validate_design_dimensions, validate_dst, validate_dst_stitches, validate_for_machine,
    validate_stitch_count, validate_stitch_deltas,
};
