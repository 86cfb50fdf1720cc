//! Jump-stitch path optimizer
//!
//! Reduces jump count and travel distance in five stages:
//!
//! 1. Partition the sequence into runs of consecutive stitches; jumps are
//!    dropped and regenerated at the end.
//! 2. Order runs with a nearest-neighbor heuristic, reversing a run when
//!    its end point is the closer one.
//! 3. Refine directions so each run starts at its end nearest to the
//!    previous run.
//! 4. Merge adjacent runs closer than a threshold with a connecting stitch.
//! 5. Re-linearize, inserting one jump between adjacent runs.
//!
//! Stage 2 is a greedy approximation of the open-path travelling salesman
//! problem: O(n²) in the number of runs, deterministic, and not optimal.
//! Ties go to the run found first.
//!
//! Stitches inside a run keep their order (or are all reversed); no stitch
//! is ever dropped or duplicated.

use crate::stats::analyze_stitches;
use stitchkit_core::{Point, StitchSegment};

/// Default gap below which adjacent runs are joined by a stitch
pub const DEFAULT_MERGE_THRESHOLD: f64 = 5.0;

/// A maximal sequence of consecutive stitches
#[derive(Debug, Clone, PartialEq)]
pub struct StitchRun {
    /// Segments in sewing order
    pub segments: Vec<StitchSegment>,
}

impl StitchRun {
    /// Create a run from segments
    pub fn new(segments: Vec<StitchSegment>) -> Self {
        Self { segments }
    }

    /// First point of the run, origin if empty
    pub fn start(&self) -> Point {
        self.segments
            .first()
            .map(StitchSegment::start)
            .unwrap_or_default()
    }

    /// Last point of the run, origin if empty
    pub fn end(&self) -> Point {
        self.segments
            .last()
            .map(StitchSegment::end)
            .unwrap_or_default()
    }

    /// The run sewn backwards
    pub fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(StitchSegment::reversed).collect(),
        }
    }

    /// Number of segments in the run
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the run has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Reorders and merges stitch runs to minimize jump travel
#[derive(Debug, Clone)]
pub struct PathOptimizer {
    merge_threshold: f64,
}

impl Default for PathOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MERGE_THRESHOLD)
    }
}

impl PathOptimizer {
    /// Create an optimizer with the given merge threshold
    pub fn new(merge_threshold: f64) -> Self {
        Self { merge_threshold }
    }

    /// Gap at or below which adjacent runs are merged
    pub fn merge_threshold(&self) -> f64 {
        self.merge_threshold
    }

    /// Run the full pipeline
    pub fn optimize(&self, steps: &[StitchSegment]) -> Vec<StitchSegment> {
        if steps.is_empty() {
            return Vec::new();
        }

        let runs = separate_into_runs(steps);
        tracing::debug!(steps = steps.len(), runs = runs.len(), "Separated into runs");

        let runs = order_nearest_neighbor(runs);
        let runs = refine_directions(runs);
        let runs = merge_nearby_runs(runs, self.merge_threshold);
        tracing::debug!(runs = runs.len(), threshold = self.merge_threshold, "Merged nearby runs");

        let optimized = runs_to_steps(&runs);

        let before = analyze_stitches(steps);
        let after = analyze_stitches(&optimized);
        let reduction = if before.jump_stitches > 0 {
            (before.jump_stitches as f64 - after.jump_stitches as f64) / before.jump_stitches as f64
                * 100.0
        } else {
            0.0
        };
        tracing::debug!(
            jumps_before = before.jump_stitches,
            jumps_after = after.jump_stitches,
            jump_distance_before = before.total_jump_distance,
            jump_distance_after = after.total_jump_distance,
            "Jump stitches reduced by {:.1}%",
            reduction
        );

        optimized
    }
}

/// Optimize with the default merge threshold
pub fn optimize_stitch_paths(steps: &[StitchSegment]) -> Vec<StitchSegment> {
    PathOptimizer::default().optimize(steps)
}

/// Split a sequence into runs of consecutive stitches, dropping jumps
pub fn separate_into_runs(steps: &[StitchSegment]) -> Vec<StitchRun> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for step in steps {
        if step.pen_down {
            current.push(*step);
        } else if !current.is_empty() {
            runs.push(StitchRun::new(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        runs.push(StitchRun::new(current));
    }

    runs
}

/// Greedy nearest-neighbor ordering starting from the first run
pub fn order_nearest_neighbor(runs: Vec<StitchRun>) -> Vec<StitchRun> {
    if runs.len() <= 1 {
        return runs;
    }

    let mut remaining = runs;
    let mut current = remaining.remove(0);
    let mut ordered = Vec::with_capacity(remaining.len() + 1);

    while !remaining.is_empty() {
        let current_end = current.end();
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;
        let mut reverse = false;

        for (i, run) in remaining.iter().enumerate() {
            let to_start = current_end.distance_to(&run.start());
            if to_start < nearest_distance {
                nearest_distance = to_start;
                nearest_index = i;
                reverse = false;
            }

            let to_end = current_end.distance_to(&run.end());
            if to_end < nearest_distance {
                nearest_distance = to_end;
                nearest_index = i;
                reverse = true;
            }
        }

        let next = remaining.remove(nearest_index);
        ordered.push(current);
        current = if reverse { next.reversed() } else { next };
    }
    ordered.push(current);

    ordered
}

/// Reverse any run whose end lies closer to the previous run's end than
/// its start does
pub fn refine_directions(runs: Vec<StitchRun>) -> Vec<StitchRun> {
    let mut refined: Vec<StitchRun> = Vec::with_capacity(runs.len());

    for run in runs {
        let flip = refined.last().map(StitchRun::end).is_some_and(|prev_end| {
            prev_end.distance_to(&run.end()) < prev_end.distance_to(&run.start())
        });
        refined.push(if flip { run.reversed() } else { run });
    }

    refined
}

/// Join adjacent runs whose gap is at most `threshold` with a connecting
/// stitch
pub fn merge_nearby_runs(runs: Vec<StitchRun>, threshold: f64) -> Vec<StitchRun> {
    let mut merged: Vec<StitchRun> = Vec::with_capacity(runs.len());

    for run in runs {
        if let Some(last) = merged.last_mut() {
            if last.end().distance_to(&run.start()) <= threshold {
                let connector = StitchSegment::stitch(last.end(), run.start());
                last.segments.push(connector);
                last.segments.extend(run.segments);
                continue;
            }
        }
        merged.push(run);
    }

    merged
}

/// Concatenate runs with one jump between each adjacent pair
pub fn runs_to_steps(runs: &[StitchRun]) -> Vec<StitchSegment> {
    let mut steps = Vec::with_capacity(runs.iter().map(|r| r.len() + 1).sum());

    for (i, run) in runs.iter().enumerate() {
        steps.extend_from_slice(&run.segments);
        if let Some(next) = runs.get(i + 1) {
            steps.push(StitchSegment::jump(run.end(), next.start()));
        }
    }

    steps
}
