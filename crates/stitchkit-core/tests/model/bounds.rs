use proptest::prelude::*;
use stitchkit_core::{StitchModel, StitchSegment};

fn true_max(steps: &[StitchSegment]) -> (f64, f64) {
    steps.iter().fold((0.0_f64, 0.0_f64), |(mx, my), s| {
        (mx.max(s.x1).max(s.x2), my.max(s.y1).max(s.y2))
    })
}

#[test]
fn test_bounds_follow_move_to() {
    let mut model = StitchModel::new();
    model.move_to(0.0, 0.0, 10.0, 10.0, true);
    model.move_to(10.0, 10.0, 20.0, 20.0, true);
    assert_eq!(model.max_x(), 20.0);
    assert_eq!(model.max_y(), 20.0);
    assert_eq!(model.len(), 2);
}

#[derive(Debug, Clone)]
enum Op {
    Move(f64, f64, bool),
    Point(f64, f64),
    Undo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-200.0..500.0_f64, -200.0..500.0_f64, any::<bool>()).prop_map(|(x, y, p)| Op::Move(x, y, p)),
        (-200.0..500.0_f64, -200.0..500.0_f64).prop_map(|(x, y)| Op::Point(x, y)),
        Just(Op::Undo),
    ]
}

proptest! {
    #[test]
    fn bounds_match_true_maximum(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut model = StitchModel::new();
        // Origin set by add_point on an empty model also counts towards bounds.
        let mut origin_max = (0.0_f64, 0.0_f64);

        for op in ops {
            match op {
                Op::Move(x, y, pen_down) => {
                    let from = model.current_position();
                    model.move_to(from.x, from.y, x, y, pen_down);
                }
                Op::Point(x, y) => {
                    if model.is_empty() {
                        origin_max = (origin_max.0.max(x), origin_max.1.max(y));
                    }
                    model.add_point(x, y);
                }
                Op::Undo => {
                    if !model.is_empty() {
                        origin_max = (0.0, 0.0);
                    }
                    model.undo_step();
                }
            }

            let (mx, my) = true_max(model.steps());
            prop_assert!(model.max_x() >= 0.0);
            prop_assert!(model.max_y() >= 0.0);
            prop_assert_eq!(model.max_x(), mx.max(origin_max.0));
            prop_assert_eq!(model.max_y(), my.max(origin_max.1));
        }
    }

    #[test]
    fn appended_segments_are_contiguous(points in prop::collection::vec((0.0..100.0_f64, 0.0..100.0_f64), 2..32)) {
        let mut model = StitchModel::new();
        for (x, y) in points {
            model.add_point(x, y);
        }
        for pair in model.steps().windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
    }
}
