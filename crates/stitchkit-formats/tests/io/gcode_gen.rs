use stitchkit_core::{MachineLimits, StitchSegment};
use stitchkit_formats::{generate_gcode, GcodeGenerator};

fn steps() -> Vec<StitchSegment> {
    vec![
        StitchSegment::new(0.0, 0.0, 10.0, 10.0, true),
        StitchSegment::new(10.0, 10.0, 20.0, 20.0, true),
    ]
}

#[test]
fn test_gcode_generation() {
    let gcode = generate_gcode(&steps(), "test-design", MachineLimits::default());

    assert!(gcode.contains("G90"));
    assert!(gcode.contains("G21"));
    assert!(gcode.contains("G28"));
    assert!(gcode.contains("M30"));
    assert!(gcode.contains("Design name: test-design"));
}

#[test]
fn test_gcode_header() {
    let gcode = GcodeGenerator::new(MachineLimits::new(70.0, 130.0)).generate(&steps(), "d");

    assert!(gcode.contains("; Design Bounds Analysis"));
    assert!(gcode.contains("; Machine limits: 70 x 130"));
    assert!(gcode.contains("(STITCH_COUNT:2)"));
    assert!(gcode.contains("(EXTENTS_LEFT:10.000)"));
    assert!(gcode.contains("(EXTENTS_WIDTH:10.000)"));
}

#[test]
fn test_one_move_per_step() {
    let gcode = generate_gcode(&steps(), "d", MachineLimits::default());
    let moves = gcode.lines().filter(|l| l.contains("; Step ")).count();
    let z_marks = gcode.lines().filter(|l| l.starts_with("G0 Z")).count();
    assert_eq!(moves, 2);
    assert_eq!(z_marks, 2);
}

#[test]
fn test_output_is_deterministic() {
    let a = generate_gcode(&steps(), "same", MachineLimits::default());
    let b = generate_gcode(&steps(), "same", MachineLimits::default());
    assert_eq!(a, b);
}
