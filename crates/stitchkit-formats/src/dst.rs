//! Tajima DST codec
//!
//! Layout:
//! - 512-byte header, padded with spaces. The design name sits in bytes
//!   0..20, the stitch count in 90..97, max X in 100..105 and max Y in
//!   105..110, all right-justified decimal.
//! - One 3-byte record per segment: `dx`, `dy` as two's-complement bytes,
//!   then a flag byte (`0x00` stitch, `0x80` jump).
//! - The EOF marker `00 00 F3`.

use stitchkit_core::{FormatError, StitchSegment};

/// Size of the fixed header
pub const HEADER_SIZE: usize = 512;
/// Size of one stitch record
pub const RECORD_SIZE: usize = 3;
/// End-of-file marker
pub const EOF_MARKER: [u8; 3] = [0x00, 0x00, 0xF3];
/// Smallest well-formed file: header plus EOF marker
pub const MIN_FILE_SIZE: usize = HEADER_SIZE + EOF_MARKER.len();
/// Flag byte of a stitch record
pub const FLAG_STITCH: u8 = 0x00;
/// Flag byte of a jump record
pub const FLAG_JUMP: u8 = 0x80;

const NAME_LEN: usize = 20;
const STITCH_COUNT_FIELD: (usize, usize) = (90, 7);
const MAX_X_FIELD: (usize, usize) = (100, 5);
const MAX_Y_FIELD: (usize, usize) = (105, 5);

/// Header metadata of a DST file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DstMetadata {
    /// Design name, trailing padding removed
    pub name: String,
    /// Number of stitch records declared in the header
    pub stitch_count: usize,
    /// Declared max X
    pub max_x: i64,
    /// Declared max Y
    pub max_y: i64,
}

/// Round half up, the rounding used for every delta and header number.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Encode a delta as a two's-complement byte.
///
/// Negative values are mapped with `0x100 + delta`; the result is masked to
/// a byte. Deltas outside `-128..=127` do not fit and wrap.
pub fn encode_signed_byte(delta: i64) -> u8 {
    let value = if delta < 0 { 0x100 + delta } else { delta };
    (value & 0xFF) as u8
}

/// Decode a two's-complement byte back into a delta
pub fn decode_signed_byte(byte: u8) -> i64 {
    if byte & 0x80 != 0 {
        -(0x100 - byte as i64)
    } else {
        byte as i64
    }
}

/// Rounded integer delta of a segment
pub(crate) fn segment_delta(step: &StitchSegment) -> (i64, i64) {
    (
        round_half_up(step.x2 - step.x1),
        round_half_up(step.y2 - step.y1),
    )
}

pub(crate) fn flag_byte(step: &StitchSegment) -> u8 {
    if step.pen_down {
        FLAG_STITCH
    } else {
        FLAG_JUMP
    }
}

/// Encode a stitch sequence as a DST file.
///
/// `name` is truncated to 20 characters; non-ASCII characters are written
/// as `?`. Each record rounds its own delta, residues are not carried to
/// the next record.
pub fn encode(steps: &[StitchSegment], name: &str, max_x: f64, max_y: f64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MIN_FILE_SIZE + steps.len() * RECORD_SIZE);
    out.extend_from_slice(&build_header(name, steps.len(), max_x, max_y));

    for (index, step) in steps.iter().enumerate() {
        let (dx, dy) = segment_delta(step);
        if !(-128..=127).contains(&dx) || !(-128..=127).contains(&dy) {
            tracing::warn!(
                index,
                dx,
                dy,
                "Stitch delta exceeds the DST byte range and will wrap"
            );
        }
        out.push(encode_signed_byte(dx));
        out.push(encode_signed_byte(dy));
        out.push(flag_byte(step));
    }

    out.extend_from_slice(&EOF_MARKER);
    tracing::debug!(name, stitches = steps.len(), bytes = out.len(), "Encoded DST");
    out
}

fn build_header(name: &str, stitch_count: usize, max_x: f64, max_y: f64) -> [u8; HEADER_SIZE] {
    let mut header = [b' '; HEADER_SIZE];

    for (slot, ch) in header.iter_mut().zip(name.chars().take(NAME_LEN)) {
        *slot = if ch.is_ascii() { ch as u8 } else { b'?' };
    }

    write_number(&mut header, STITCH_COUNT_FIELD, "stitch count", stitch_count as i64);
    write_number(&mut header, MAX_X_FIELD, "max X", round_half_up(max_x));
    write_number(&mut header, MAX_Y_FIELD, "max Y", round_half_up(max_y));
    header
}

/// Write a right-justified decimal into a fixed-width header field.
///
/// Values wider than the field are clamped to the widest number it holds.
fn write_number(header: &mut [u8], (offset, width): (usize, usize), field: &str, value: i64) {
    let largest = 10_i64.pow(width as u32) - 1;
    let smallest = -(10_i64.pow(width as u32 - 1) - 1);
    let clamped = value.clamp(smallest, largest);
    if clamped != value {
        tracing::warn!(field, value, clamped, "Header value does not fit its field");
    }

    let text = format!("{:>width$}", clamped, width = width);
    header[offset..offset + width].copy_from_slice(text.as_bytes());
}

/// Decode a DST file into stitch segments.
///
/// The header and the trailing three bytes are skipped; the EOF marker
/// itself is not checked here, see [`crate::validator::validate_dst`].
/// Positions are rebuilt by summing deltas from the origin.
pub fn decode(bytes: &[u8]) -> Result<Vec<StitchSegment>, FormatError> {
    if bytes.len() < MIN_FILE_SIZE {
        return Err(FormatError::TooShort {
            len: bytes.len(),
            min: MIN_FILE_SIZE,
        });
    }

    let records = &bytes[HEADER_SIZE..bytes.len() - EOF_MARKER.len()];
    if records.len() % RECORD_SIZE != 0 {
        return Err(FormatError::TruncatedRecord { len: records.len() });
    }

    let mut steps = Vec::with_capacity(records.len() / RECORD_SIZE);
    let (mut x, mut y) = (0_i64, 0_i64);
    for record in records.chunks_exact(RECORD_SIZE) {
        let dx = decode_signed_byte(record[0]);
        let dy = decode_signed_byte(record[1]);
        let pen_down = record[2] == FLAG_STITCH;

        let (x1, y1) = (x, y);
        x += dx;
        y += dy;
        steps.push(StitchSegment::new(
            x1 as f64, y1 as f64, x as f64, y as f64, pen_down,
        ));
    }

    tracing::debug!(stitches = steps.len(), "Decoded DST");
    Ok(steps)
}

/// Read the header metadata of a DST file
pub fn read_metadata(bytes: &[u8]) -> Result<DstMetadata, FormatError> {
    if bytes.len() < HEADER_SIZE {
        return Err(FormatError::TooShort {
            len: bytes.len(),
            min: HEADER_SIZE,
        });
    }

    let name = String::from_utf8_lossy(&bytes[..NAME_LEN]).trim().to_string();
    let stitch_count = parse_field(bytes, STITCH_COUNT_FIELD, "stitch_count")?;
    let max_x = parse_field(bytes, MAX_X_FIELD, "max_x")?;
    let max_y = parse_field(bytes, MAX_Y_FIELD, "max_y")?;

    Ok(DstMetadata {
        name,
        stitch_count: usize::try_from(stitch_count).map_err(|_| {
            FormatError::InvalidHeaderField {
                field: "stitch_count".to_string(),
                value: stitch_count.to_string(),
            }
        })?,
        max_x,
        max_y,
    })
}

fn parse_field(bytes: &[u8], (offset, width): (usize, usize), field: &str) -> Result<i64, FormatError> {
    let raw = String::from_utf8_lossy(&bytes[offset..offset + width]);
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FormatError::InvalidHeaderField {
            field: field.to_string(),
            value: raw.into_owned(),
        })
}

/// Hex dump of binary content, bytes separated by spaces
pub fn to_hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
