use stitchkit_core::{MachineLimits, StitchSegment, ValidationError};
use stitchkit_formats::{dst, exp, validate_dst, validate_dst_stitches, validate_for_machine};

#[test]
fn test_exp_output_passes_structural_checks() {
    let steps = vec![
        StitchSegment::new(0.0, 0.0, 5.0, 5.0, true),
        StitchSegment::new(5.0, 5.0, 50.0, 5.0, false),
    ];
    let bytes = exp::encode(&steps);
    assert!(validate_dst(&bytes).is_ok());
    assert!(validate_dst_stitches(&bytes).is_ok());
}

#[test]
fn test_truncated_file_fails_both_checks() {
    let bytes = dst::encode(&[StitchSegment::new(0.0, 0.0, 1.0, 1.0, true)], "t", 1.0, 1.0);
    let truncated = &bytes[..bytes.len() - 1];
    assert_eq!(validate_dst(truncated), Err(ValidationError::MissingEofMarker));
    assert!(validate_dst_stitches(truncated).is_err());
}

#[test]
fn test_machine_limits_checked_before_encoding() {
    let steps = vec![StitchSegment::new(0.0, 0.0, 100.0, 150.0, true)];
    assert!(validate_for_machine(&steps, &MachineLimits::default()).is_ok());
    assert!(validate_for_machine(&steps, &MachineLimits::new(70.0, 130.0)).is_err());
}
