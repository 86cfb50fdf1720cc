use proptest::prelude::*;
use stitchkit_core::{Point, StitchModel, StitchSegment};
use stitchkit_optimizer::{analyze_stitches, optimize_stitch_paths, PathOptimizer};

/// Three short runs laid out along X, sewn far-near-far
fn reversed_proximity() -> Vec<StitchSegment> {
    let mut model = StitchModel::new();
    model.add_polylines(
        &[
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            vec![Point::new(100.0, 0.0), Point::new(90.0, 0.0)],
            vec![Point::new(20.0, 0.0), Point::new(12.0, 0.0)],
        ],
        1.0,
        None,
    );
    model.into_steps()
}

#[test]
fn test_jump_distance_reduced() {
    let steps = reversed_proximity();
    let before = analyze_stitches(&steps);
    let after = analyze_stitches(&PathOptimizer::new(1.0).optimize(&steps));

    assert_eq!(before.jump_stitches, 2);
    assert!(after.jump_stitches <= before.jump_stitches);
    assert!(after.total_jump_distance < before.total_jump_distance);
    assert_eq!(after.running_stitches, before.running_stitches);
}

#[test]
fn test_default_threshold_merges_close_runs() {
    let steps = reversed_proximity();
    let optimized = optimize_stitch_paths(&steps);
    let stats = analyze_stitches(&optimized);

    // 10 -> 12 is within 5 and gets a connecting stitch; 20 -> 90 stays a jump.
    assert_eq!(stats.jump_stitches, 1);
    assert_eq!(stats.running_stitches, 4);
    assert_eq!(optimized[1], StitchSegment::new(10.0, 0.0, 12.0, 0.0, true));
}

#[test]
fn test_only_jumps_yields_empty() {
    let steps = vec![StitchSegment::new(0.0, 0.0, 5.0, 5.0, false)];
    assert!(optimize_stitch_paths(&steps).is_empty());
}

proptest! {
    #[test]
    fn jump_count_never_increases(
        moves in prop::collection::vec((-80i32..80, -80i32..80, any::<bool>()), 1..40)
    ) {
        let mut model = StitchModel::new();
        model.add_point(0.0, 0.0);
        for (x, y, pen_down) in moves {
            let from = model.current_position();
            model.move_to(from.x, from.y, x as f64, y as f64, pen_down);
        }

        let before = analyze_stitches(model.steps());
        let after = analyze_stitches(&optimize_stitch_paths(model.steps()));
        prop_assert!(after.jump_stitches <= before.jump_stitches);
    }
}
