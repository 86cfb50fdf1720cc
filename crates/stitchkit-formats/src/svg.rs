//! SVG rendering of a stitch sequence
//!
//! Stitches are drawn as opaque dark lines. Jumps are drawn thin, red and
//! half transparent; they are the only visual trace of travel moves.

use stitchkit_core::StitchSegment;

/// Padding added to the design maxima for the view box
pub const VIEWBOX_PADDING: f64 = 10.0;

const STITCH_STYLE: &str = r##"stroke="#333" stroke-width="2""##;
const JUMP_STYLE: &str = r##"stroke="#f00" stroke-width="1" opacity="0.5""##;

/// Render a stitch sequence as a minimal SVG document
pub fn encode(steps: &[StitchSegment], max_x: f64, max_y: f64) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        max_x + VIEWBOX_PADDING,
        max_y + VIEWBOX_PADDING
    ));

    for step in steps {
        let style = if step.pen_down {
            STITCH_STYLE
        } else {
            JUMP_STYLE
        };
        svg.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} />"#,
            step.x1, step.y1, step.x2, step.y2, style
        ));
    }

    svg.push_str("</svg>");
    svg
}
