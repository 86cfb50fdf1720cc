//! EXP encoder
//!
//! Same record shape as DST behind a blank 512-byte header. Deltas are
//! written as the raw low byte of the rounded value. EXP is write-only.

use crate::dst::{flag_byte, segment_delta, EOF_MARKER, HEADER_SIZE, RECORD_SIZE};
use stitchkit_core::StitchSegment;

/// Encode a stitch sequence as an EXP file
pub fn encode(steps: &[StitchSegment]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + steps.len() * RECORD_SIZE + EOF_MARKER.len());
    out.resize(HEADER_SIZE, b' ');

    for step in steps {
        let (dx, dy) = segment_delta(step);
        out.push((dx & 0xFF) as u8);
        out.push((dy & 0xFF) as u8);
        out.push(flag_byte(step));
    }

    out.extend_from_slice(&EOF_MARKER);
    tracing::debug!(stitches = steps.len(), bytes = out.len(), "Encoded EXP");
    out
}
