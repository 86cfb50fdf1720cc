use proptest::prelude::*;
use stitchkit_core::{StitchModel, StitchSegment};
use stitchkit_optimizer::PathOptimizer;

/// A contiguous sequence built by walking integer points
fn walk_strategy() -> impl Strategy<Value = Vec<StitchSegment>> {
    prop::collection::vec((-50i32..50, -50i32..50, any::<bool>()), 1..40).prop_map(|moves| {
        let mut model = StitchModel::new();
        model.add_point(0.0, 0.0);
        for (x, y, pen_down) in moves {
            let from = model.current_position();
            model.move_to(from.x, from.y, x as f64, y as f64, pen_down);
        }
        model.into_steps()
    })
}

fn take_match(pool: &mut Vec<StitchSegment>, step: &StitchSegment) -> bool {
    let found = pool
        .iter()
        .position(|s| s == step || *s == step.reversed());
    match found {
        Some(i) => {
            pool.swap_remove(i);
            true
        }
        None => false,
    }
}

proptest! {
    #[test]
    fn every_stitch_survives_once_without_merging(steps in walk_strategy()) {
        // Negative threshold disables merging, so no connectors are added.
        let optimized = PathOptimizer::new(-1.0).optimize(&steps);

        let mut pool: Vec<StitchSegment> = optimized.iter().copied().filter(|s| s.pen_down).collect();
        let originals: Vec<StitchSegment> = steps.iter().copied().filter(|s| s.pen_down).collect();
        prop_assert_eq!(pool.len(), originals.len());
        for step in &originals {
            prop_assert!(take_match(&mut pool, step), "stitch {:?} missing", step);
        }
    }

    #[test]
    fn merging_only_adds_connectors(steps in walk_strategy()) {
        let optimized = PathOptimizer::default().optimize(&steps);

        let mut pool: Vec<StitchSegment> = optimized.iter().copied().filter(|s| s.pen_down).collect();
        for step in steps.iter().filter(|s| s.pen_down) {
            prop_assert!(take_match(&mut pool, step));
        }
        // Leftovers are connectors, each no longer than the merge threshold.
        for connector in pool {
            prop_assert!(connector.length() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn output_is_contiguous(steps in walk_strategy()) {
        let optimized = PathOptimizer::default().optimize(&steps);
        for pair in optimized.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
    }
}
