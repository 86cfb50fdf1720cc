//! Plane geometry shared by the stitch model, codecs and optimizer.

use serde::{Deserialize, Serialize};

/// A point in design units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Machine travel limits in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineLimits {
    /// Maximum travel along X
    pub max_x: f64,
    /// Maximum travel along Y
    pub max_y: f64,
}

impl MachineLimits {
    /// Create limits from explicit maxima
    pub fn new(max_x: f64, max_y: f64) -> Self {
        Self { max_x, max_y }
    }
}

impl Default for MachineLimits {
    fn default() -> Self {
        Self {
            max_x: 110.0,
            max_y: 170.0,
        }
    }
}

/// Split the line from `start` to `end` into evenly spaced points.
///
/// Consecutive points are at most `max_step` apart. Both endpoints are always
/// included; a line no longer than `max_step` yields just the two endpoints.
pub fn interpolate_line(start: Point, end: Point, max_step: f64) -> Vec<Point> {
    let length = start.distance_to(&end);
    if max_step <= 0.0 || length <= max_step {
        return vec![start, end];
    }

    let steps = (length / max_step).ceil() as usize;
    let x_step = (end.x - start.x) / steps as f64;
    let y_step = (end.y - start.y) / steps as f64;

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    for s in 1..steps {
        points.push(Point::new(
            start.x + x_step * s as f64,
            start.y + y_step * s as f64,
        ));
    }
    points.push(end);
    points
}
