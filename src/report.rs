//! Design inspection for the `info` command

use serde::Serialize;
use stitchkit_core::Result;
use stitchkit_formats::{dst, DstMetadata};
use stitchkit_optimizer::{analyze_stitches, StitchStats};

/// Header metadata and stitch statistics of a DST file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    /// Numeric header fields; `None` when the header uses another layout
    pub metadata: Option<DstMetadata>,
    /// Statistics over the decoded records
    pub stats: StitchStats,
}

/// Decode `bytes` and summarize the design.
///
/// Stitch records must decode. Machine-written headers (`LA:`, `ST:` labels)
/// do not follow the fixed numeric layout this crate writes, so a header
/// that fails to parse is logged and reported as `None`.
pub fn inspect_dst(bytes: &[u8]) -> Result<DesignReport> {
    let steps = dst::decode(bytes)?;
    let metadata = match dst::read_metadata(bytes) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            tracing::warn!("Skipping DST header metadata: {}", e);
            None
        }
    };

    Ok(DesignReport {
        metadata,
        stats: analyze_stitches(&steps),
    })
}
