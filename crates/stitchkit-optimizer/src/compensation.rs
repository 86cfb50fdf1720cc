//! Pull compensation.
//!
//! Thread tension pulls fabric inward, so sewn stitches come out shorter
//! than designed. Compensation lengthens each stitch along its own
//! direction by a fraction of its length. Jumps keep their end point, and
//! the start of any segment that followed a moved end is shifted to it, so
//! a contiguous sequence stays contiguous.

use stitchkit_core::{Point, StitchSegment};

/// Default fraction each stitch is extended by
pub const DEFAULT_PULL_COMPENSATION: f64 = 0.05;

/// Extend every stitch by `factor` of its length
pub fn apply_pull_compensation(steps: &[StitchSegment], factor: f64) -> Vec<StitchSegment> {
    let mut compensated = Vec::with_capacity(steps.len());
    // (original end, adjusted end) of the previous segment
    let mut previous: Option<(Point, Point)> = None;

    for step in steps {
        let mut adjusted = *step;

        if let Some((original_end, moved_end)) = previous {
            if original_end == step.start() {
                adjusted.x1 = moved_end.x;
                adjusted.y1 = moved_end.y;
            }
        }

        if step.pen_down {
            adjusted.x2 += (step.x2 - step.x1) * factor;
            adjusted.y2 += (step.y2 - step.y1) * factor;
        }

        previous = Some((step.end(), adjusted.end()));
        compensated.push(adjusted);
    }

    tracing::debug!(steps = steps.len(), factor, "Applied pull compensation");
    compensated
}
