//! Stitch sequence statistics.

use serde::Serialize;
use std::fmt;
use stitchkit_core::StitchSegment;

/// Summary counts and lengths for a stitch sequence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StitchStats {
    /// Number of segments
    pub total_stitches: usize,
    /// Segments with the needle down
    pub running_stitches: usize,
    /// Segments with the needle up
    pub jump_stitches: usize,
    /// Jumps as a percentage of all segments
    pub jump_percentage: f64,
    /// Sum of stitch lengths
    pub total_running_distance: f64,
    /// Sum of jump lengths
    pub total_jump_distance: f64,
    /// Mean stitch length, zero without stitches
    pub avg_running_length: f64,
    /// Mean jump length, zero without jumps
    pub avg_jump_length: f64,
}

impl fmt::Display for StitchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total stitches:   {}", self.total_stitches)?;
        writeln!(
            f,
            "Running stitches: {} (avg {:.2}, total {:.2})",
            self.running_stitches, self.avg_running_length, self.total_running_distance
        )?;
        write!(
            f,
            "Jump stitches:    {} ({:.1}%, avg {:.2}, total {:.2})",
            self.jump_stitches, self.jump_percentage, self.avg_jump_length, self.total_jump_distance
        )
    }
}

/// Compute statistics for `steps`; all zero when empty
pub fn analyze_stitches(steps: &[StitchSegment]) -> StitchStats {
    if steps.is_empty() {
        return StitchStats::default();
    }

    let mut stats = StitchStats {
        total_stitches: steps.len(),
        ..StitchStats::default()
    };

    for step in steps {
        let distance = step.length();
        if step.pen_down {
            stats.running_stitches += 1;
            stats.total_running_distance += distance;
        } else {
            stats.jump_stitches += 1;
            stats.total_jump_distance += distance;
        }
    }

    if stats.running_stitches > 0 {
        stats.avg_running_length = stats.total_running_distance / stats.running_stitches as f64;
    }
    if stats.jump_stitches > 0 {
        stats.avg_jump_length = stats.total_jump_distance / stats.jump_stitches as f64;
    }
    stats.jump_percentage = stats.jump_stitches as f64 / stats.total_stitches as f64 * 100.0;

    stats
}
