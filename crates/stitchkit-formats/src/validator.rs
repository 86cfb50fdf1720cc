//! DST structure and design dimension checks.
//!
//! Run the dimension and delta checks before encoding anything that is sent
//! to a physical machine, and the structural checks on encoded bytes before
//! they are persisted.

use std::ops::RangeInclusive;

use crate::dst::{
    segment_delta, EOF_MARKER, FLAG_JUMP, FLAG_STITCH, HEADER_SIZE, MIN_FILE_SIZE, RECORD_SIZE,
};
use stitchkit_core::{MachineLimits, StitchSegment, ValidationError};

/// Check the overall DST structure: minimum length and EOF marker
pub fn validate_dst(bytes: &[u8]) -> Result<(), ValidationError> {
    tracing::debug!(len = bytes.len(), "Validating DST file");

    if bytes.len() < MIN_FILE_SIZE {
        return Err(ValidationError::TooShort { len: bytes.len() });
    }
    if bytes[bytes.len() - EOF_MARKER.len()..] != EOF_MARKER {
        return Err(ValidationError::MissingEofMarker);
    }
    Ok(())
}

/// Check record alignment and flag bytes of the stitch region
pub fn validate_dst_stitches(bytes: &[u8]) -> Result<(), ValidationError> {
    if bytes.len() < MIN_FILE_SIZE {
        return Err(ValidationError::TooShort { len: bytes.len() });
    }

    let records = &bytes[HEADER_SIZE..bytes.len() - EOF_MARKER.len()];
    if records.len() % RECORD_SIZE != 0 {
        return Err(ValidationError::MisalignedStitches { len: records.len() });
    }

    for (i, record) in records.chunks_exact(RECORD_SIZE).enumerate() {
        let flags = record[2];
        if flags != FLAG_STITCH && flags != FLAG_JUMP {
            return Err(ValidationError::InvalidStitchFlags {
                index: i * RECORD_SIZE,
                flags,
            });
        }
    }
    Ok(())
}

/// Check that no endpoint lies beyond `max_width` / `max_height`.
///
/// An empty design always fits.
pub fn validate_design_dimensions(
    steps: &[StitchSegment],
    max_width: f64,
    max_height: f64,
) -> Result<(), ValidationError> {
    if steps.is_empty() {
        return Ok(());
    }

    let (design_x, design_y) = steps.iter().fold(
        (f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(mx, my), s| (mx.max(s.x1).max(s.x2), my.max(s.y1).max(s.y2)),
    );

    if design_x > max_width || design_y > max_height {
        return Err(ValidationError::DimensionsExceeded {
            design_x,
            design_y,
            max_width,
            max_height,
        });
    }
    Ok(())
}

/// [`validate_design_dimensions`] against machine limits
pub fn validate_for_machine(steps: &[StitchSegment], limits: &MachineLimits) -> Result<(), ValidationError> {
    validate_design_dimensions(steps, limits.max_x, limits.max_y)
}

/// Check the segment count against the machine maximum
pub fn validate_stitch_count(steps: &[StitchSegment], max_stitches: usize) -> Result<(), ValidationError> {
    if steps.len() > max_stitches {
        return Err(ValidationError::TooManyStitches {
            count: steps.len(),
            max: max_stitches,
        });
    }
    Ok(())
}

const DELTA_RANGE: RangeInclusive<i64> = -128..=127;

/// Check that every rounded segment delta fits a signed record byte.
///
/// DST and EXP store each delta in one byte, so a longer segment would wrap
/// to a different coordinate. Split long strokes with
/// [`StitchModel::stitch_to`](stitchkit_core::StitchModel::stitch_to) first.
pub fn validate_stitch_deltas(steps: &[StitchSegment]) -> Result<(), ValidationError> {
    for (index, step) in steps.iter().enumerate() {
        let (dx, dy) = segment_delta(step);
        if !DELTA_RANGE.contains(&dx) || !DELTA_RANGE.contains(&dy) {
            return Err(ValidationError::DeltaOutOfRange { index, dx, dy });
        }
    }
    Ok(())
}
