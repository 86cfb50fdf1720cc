//! G-code generation from stitch sequences.
//!
//! The design is translated to a zero origin and scaled uniformly so it
//! fills the machine travel limits. Every stitch end becomes an absolute
//! `G0` move followed by an ascending `Z` value. The Z channel does not
//! drive a physical axis; it lets a motion visualizer separate successive
//! stitch events.

use chrono::{DateTime, Utc};
use stitchkit_core::{MachineLimits, StitchSegment};

/// Default Z increment emitted after every stitch
pub const DEFAULT_Z_STEP: f64 = 5.0;

/// Bounding box of the stitch end points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extents {
    /// Smallest X
    pub min_x: f64,
    /// Smallest Y
    pub min_y: f64,
    /// Largest X
    pub max_x: f64,
    /// Largest Y
    pub max_y: f64,
}

impl Extents {
    /// Compute the extents of all end points; all zero when empty
    pub fn of(steps: &[StitchSegment]) -> Self {
        let mut iter = steps.iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        iter.fold(
            Self {
                min_x: first.x2,
                min_y: first.y2,
                max_x: first.x2,
                max_y: first.y2,
            },
            |e, s| Self {
                min_x: e.min_x.min(s.x2),
                min_y: e.min_y.min(s.y2),
                max_x: e.max_x.max(s.x2),
                max_y: e.max_y.max(s.y2),
            },
        )
    }

    /// Width of the box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Uniform scale that fits the box into `limits`.
    ///
    /// An axis with zero extent does not constrain the scale.
    pub fn fit_scale(&self, limits: &MachineLimits) -> f64 {
        let scale_x = if self.width() > 0.0 {
            limits.max_x / self.width()
        } else {
            1.0
        };
        let scale_y = if self.height() > 0.0 {
            limits.max_y / self.height()
        } else {
            1.0
        };
        scale_x.min(scale_y)
    }
}

/// G-code generator for stitch sequences
#[derive(Debug, Clone)]
pub struct GcodeGenerator {
    limits: MachineLimits,
    z_step: f64,
    generated_at: Option<DateTime<Utc>>,
}

impl Default for GcodeGenerator {
    fn default() -> Self {
        Self::new(MachineLimits::default())
    }
}

impl GcodeGenerator {
    /// Creates a generator targeting the given machine limits.
    pub fn new(limits: MachineLimits) -> Self {
        Self {
            limits,
            z_step: DEFAULT_Z_STEP,
            generated_at: None,
        }
    }

    /// Sets the Z increment emitted after every move.
    pub fn with_z_step(mut self, z_step: f64) -> Self {
        self.z_step = z_step;
        self
    }

    /// Records a generation time in the header comments.
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Machine limits this generator scales to.
    pub fn limits(&self) -> &MachineLimits {
        &self.limits
    }

    /// Generates the complete program.
    pub fn generate(&self, steps: &[StitchSegment], name: &str) -> String {
        let extents = Extents::of(steps);
        let scale = extents.fit_scale(&self.limits);

        if extents.width() > self.limits.max_x || extents.height() > self.limits.max_y {
            tracing::warn!(
                "Design size ({:.1} x {:.1}) exceeds machine limits ({} x {})",
                extents.width(),
                extents.height(),
                self.limits.max_x,
                self.limits.max_y
            );
        }

        let mut gcode = String::new();
        gcode.push_str(&self.generate_header(steps.len(), name, &extents, scale));
        gcode.push_str(&self.generate_body(steps, &extents, scale));
        gcode.push_str(&self.generate_footer());
        gcode
    }

    /// Generates header comments and machine setup.
    pub fn generate_header(&self, stitch_count: usize, name: &str, extents: &Extents, scale: f64) -> String {
        let mut gcode = String::new();
        gcode.push_str("; Design Bounds Analysis\n");
        gcode.push_str(&format!(
            "; Original size: {:.3} x {:.3}\n",
            extents.width(),
            extents.height()
        ));
        gcode.push_str(&format!(
            "; Machine limits: {} x {}\n",
            self.limits.max_x, self.limits.max_y
        ));
        gcode.push_str(&format!("; Scale factor: {:.3}\n", scale));
        gcode.push_str(&format!(
            "; Final size: {:.3} x {:.3}\n",
            extents.width() * scale,
            extents.height() * scale
        ));
        gcode.push_str(&format!("; Design name: {}\n", name));
        if let Some(at) = self.generated_at {
            gcode.push_str(&format!("; Generated on: {}\n", at.to_rfc3339()));
        }
        gcode.push_str(&format!("(STITCH_COUNT:{})\n", stitch_count));
        gcode.push_str(&format!("(EXTENTS_LEFT:{:.3})\n", extents.min_x));
        gcode.push_str(&format!("(EXTENTS_TOP:{:.3})\n", extents.min_y));
        gcode.push_str(&format!("(EXTENTS_RIGHT:{:.3})\n", extents.max_x));
        gcode.push_str(&format!("(EXTENTS_BOTTOM:{:.3})\n", extents.max_y));
        gcode.push_str(&format!("(EXTENTS_WIDTH:{:.3})\n", extents.width()));
        gcode.push_str(&format!("(EXTENTS_HEIGHT:{:.3})\n", extents.height()));

        gcode.push_str("G90         ; Absolute positioning\n");
        gcode.push_str("G21         ; Millimeter units\n");
        gcode.push_str("G28         ; Home\n");
        gcode.push_str("G0 X0.0 Y0.0\n");
        gcode.push('\n');
        gcode
    }

    /// Generates one move plus one Z marker per stitch.
    pub fn generate_body(&self, steps: &[StitchSegment], extents: &Extents, scale: f64) -> String {
        let mut gcode = String::new();
        let mut current_z = 0.0;

        for (index, step) in steps.iter().enumerate() {
            let x = (step.x2 - extents.min_x) * scale;
            let y = (step.y2 - extents.min_y) * scale;
            gcode.push_str(&format!("G0 X{:.3} Y{:.3} ; Step {}\n", x, y, index + 1));

            current_z += self.z_step;
            gcode.push_str(&format!("G0 Z{:.1}\n", current_z));
        }

        gcode
    }

    /// Generates the footer: rehome and end of program.
    pub fn generate_footer(&self) -> String {
        "\nG28\nM30\n".to_string()
    }
}

/// Generate G-code for `steps` scaled to `limits`
pub fn generate_gcode(steps: &[StitchSegment], name: &str, limits: MachineLimits) -> String {
    GcodeGenerator::new(limits).generate(steps, name)
}
