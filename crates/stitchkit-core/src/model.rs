//! Stitch model
//!
//! A design is an ordered list of [`StitchSegment`]s. Each segment is a
//! straight move of the needle; `pen_down` tells whether the needle
//! penetrates the fabric (a stitch) or the frame only travels (a jump).
//!
//! [`StitchModel`] owns such a list together with the running pen position
//! and the bounding-box maxima. Every segment appended through the model
//! starts where the previous one ended, which the delta-based machine
//! formats rely on.

use crate::geometry::{interpolate_line, Point};
use serde::{Deserialize, Serialize};

/// A single directed needle move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StitchSegment {
    /// Start X
    pub x1: f64,
    /// Start Y
    pub y1: f64,
    /// End X
    pub x2: f64,
    /// End Y
    pub y2: f64,
    /// `true` for a stitch, `false` for a jump
    pub pen_down: bool,
}

impl StitchSegment {
    /// Create a new segment
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, pen_down: bool) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            pen_down,
        }
    }

    /// Create a stitch between two points
    pub fn stitch(from: Point, to: Point) -> Self {
        Self::new(from.x, from.y, to.x, to.y, true)
    }

    /// Create a jump between two points
    pub fn jump(from: Point, to: Point) -> Self {
        Self::new(from.x, from.y, to.x, to.y, false)
    }

    /// Start point
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// End point
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Euclidean length of the move
    pub fn length(&self) -> f64 {
        self.start().distance_to(&self.end())
    }

    /// The same move travelled in the opposite direction
    pub fn reversed(&self) -> Self {
        Self::new(self.x2, self.y2, self.x1, self.y1, self.pen_down)
    }

    /// Whether this segment is a jump
    pub fn is_jump(&self) -> bool {
        !self.pen_down
    }
}

/// Ordered stitch sequence with pen position and running bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StitchModel {
    steps: Vec<StitchSegment>,
    current_x: f64,
    current_y: f64,
    max_x: f64,
    max_y: f64,
}

impl StitchModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from an existing sequence, e.g. a decoded DST file.
    ///
    /// Bounds and pen position are derived from the segments.
    pub fn from_steps(steps: Vec<StitchSegment>) -> Self {
        let mut model = Self::new();
        model.replace_steps(steps);
        model
    }

    /// Replace the whole sequence, recomputing bounds and pen position
    pub fn replace_steps(&mut self, steps: Vec<StitchSegment>) {
        self.steps = steps;
        self.recompute_bounds();
        self.reset_position();
    }

    /// The segments in sewing order
    pub fn steps(&self) -> &[StitchSegment] {
        &self.steps
    }

    /// Consume the model, returning its segments
    pub fn into_steps(self) -> Vec<StitchSegment> {
        self.steps
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the model holds no segments
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pen position after the last segment
    pub fn current_position(&self) -> Point {
        Point::new(self.current_x, self.current_y)
    }

    /// Largest X coordinate seen, never negative
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Largest Y coordinate seen, never negative
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Add a point to the current stroke.
    ///
    /// The first point of an empty model only sets the pen position, it is
    /// the origin of the first future segment. Later points append a stitch
    /// from the current position.
    pub fn add_point(&mut self, x: f64, y: f64) {
        if self.steps.is_empty() {
            self.current_x = x;
            self.current_y = y;
            self.max_x = self.max_x.max(x);
            self.max_y = self.max_y.max(y);
            return;
        }

        self.move_to(self.current_x, self.current_y, x, y, true);
    }

    /// Append a segment and advance the pen to its end.
    ///
    /// Coordinates are not range checked here; machine limits are enforced
    /// by the validator at export time.
    pub fn move_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, pen_down: bool) {
        self.steps.push(StitchSegment::new(x1, y1, x2, y2, pen_down));
        self.max_x = self.max_x.max(x1).max(x2);
        self.max_y = self.max_y.max(y1).max(y2);
        self.current_x = x2;
        self.current_y = y2;
    }

    /// Travel to a point without stitching
    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.move_to(self.current_x, self.current_y, x, y, false);
    }

    /// Stitch from the pen position to a point, splitting the stroke so that
    /// no single stitch is longer than `max_stitch_length`.
    ///
    /// Unlike [`add_point`](Self::add_point) this always stitches, also on
    /// an empty model where the pen rests at the origin.
    pub fn stitch_to(&mut self, x: f64, y: f64, max_stitch_length: f64) {
        let points = interpolate_line(self.current_position(), Point::new(x, y), max_stitch_length);
        for pair in points.windows(2) {
            self.move_to(pair[0].x, pair[0].y, pair[1].x, pair[1].y, true);
        }
    }

    /// Add polylines produced by a vectorizer.
    ///
    /// Every consecutive point pair becomes a stitch after scaling. When a
    /// polyline does not start at the current pen position a jump is
    /// inserted first, so the sequence stays contiguous.
    ///
    /// With `max_stitch_length` set, each pair is split as by
    /// [`stitch_to`](Self::stitch_to).
    pub fn add_polylines(
        &mut self,
        paths: &[Vec<Point>],
        scale: f64,
        max_stitch_length: Option<f64>,
    ) {
        for path in paths {
            let mut points = path.iter().map(|p| Point::new(p.x * scale, p.y * scale));
            let Some(first) = points.next() else {
                continue;
            };

            if self.steps.is_empty() {
                self.add_point(first.x, first.y);
            } else if self.current_position() != first {
                self.jump_to(first.x, first.y);
            }

            for point in points {
                match max_stitch_length {
                    Some(max_len) => self.stitch_to(point.x, point.y, max_len),
                    None => self.move_to(self.current_x, self.current_y, point.x, point.y, true),
                }
            }
        }
        tracing::debug!(
            polylines = paths.len(),
            steps = self.steps.len(),
            "Added vectorized paths"
        );
    }

    /// Remove the last segment.
    ///
    /// Bounds are recomputed from the remaining segments and the pen returns
    /// to the end of the new last segment, or the origin when empty.
    pub fn undo_step(&mut self) {
        if self.steps.pop().is_none() {
            return;
        }
        self.recompute_bounds();
        self.reset_position();
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn recompute_bounds(&mut self) {
        let (max_x, max_y) = self.steps.iter().fold((0.0_f64, 0.0_f64), |(mx, my), s| {
            (mx.max(s.x1).max(s.x2), my.max(s.y1).max(s.y2))
        });
        self.max_x = max_x;
        self.max_y = max_y;
    }

    fn reset_position(&mut self) {
        let end = self.steps.last().map(StitchSegment::end).unwrap_or_default();
        self.current_x = end.x;
        self.current_y = end.y;
    }
}
