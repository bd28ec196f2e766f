//! Validated mode: sampled precondition checks

mod common;

use common::{init_tracing, EndAt};
use seqcore::checked::{
    equal_range_checked, equal_range_until_checked, sort_heap_checked, sort_heap_until_checked,
};
use seqcore::cursor::{SliceCursor, SliceCursorMut};
use seqcore::{make_heap, Identity, Less, ValidationConfig, ValidationError};
use test_case::test_case;

#[test_case(1 ; "exhaustive")]
#[test_case(3 ; "every third")]
#[test_case(16 ; "default stride")]
fn partitioned_input_passes(stride: usize) {
    init_tracing();
    let config = ValidationConfig::sampled(stride).expect("valid stride");
    let v: Vec<i32> = (0..200).map(|i| i / 7).collect();
    let r = equal_range_checked(&v, &5, Less, Identity, &config).expect("partitioned");
    assert_eq!((r.begin().position(), r.end().position()), (35, 42));
}

#[test_case(&[5, 1, 2, 3], 3 => 1 ; "after then before")]
#[test_case(&[1, 4, 3, 2], 3 => 2 ; "after then equivalent")]
#[test_case(&[3, 1, 4], 3 => 1 ; "equivalent then before")]
fn exhaustive_check_reports_offset(input: &[i32], value: i32) -> usize {
    init_tracing();
    let err = equal_range_checked(input, &value, Less, Identity, &ValidationConfig::exhaustive())
        .expect_err("not partitioned");
    match err {
        ValidationError::NotPartitioned { offset } => offset,
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn sampling_can_miss_violations_between_samples() {
    let v = [0, 9, 0, 0, 9];
    let sparse = ValidationConfig::sampled(2).expect("valid stride");
    assert!(equal_range_checked(&v, &5, Less, Identity, &sparse).is_ok());
    assert!(equal_range_checked(&v, &5, Less, Identity, &ValidationConfig::exhaustive()).is_err());
}

#[test]
fn unsized_end_marker_is_walked_for_partition_checks() {
    let v = [1, 2, 2, 3];
    let r = equal_range_until_checked(
        SliceCursor::new(&v),
        EndAt(4),
        &2,
        Less,
        Identity,
        &ValidationConfig::default(),
    )
    .expect("partitioned");
    assert_eq!((r.begin().position(), r.end().position()), (1, 3));
}

#[test_case(1 ; "exhaustive")]
#[test_case(4 ; "sampled")]
fn heap_is_sorted_after_validation(stride: usize) {
    init_tracing();
    let mut v: Vec<i32> = (0..64).rev().collect();
    make_heap(&mut v, Less, Identity);
    let config = ValidationConfig::default().with_sample_stride(stride);
    let end = sort_heap_checked(&mut v, Less, Identity, &config).expect("valid heap");
    assert_eq!(end.position(), 64);
    assert_eq!(v, (0..64).collect::<Vec<_>>());
}

#[test]
fn broken_heap_is_left_untouched() {
    let mut v = vec![9, 8, 7, 1, 2, 3, 20];
    let err = sort_heap_checked(&mut v, Less, Identity, &ValidationConfig::exhaustive())
        .expect_err("not a heap");
    assert_eq!(err, ValidationError::NotAHeap { parent: 2, child: 6 });
    assert_eq!(err.to_string(), "heap property violated between parent 2 and child 6");
    assert_eq!(v, [9, 8, 7, 1, 2, 3, 20]);
}

#[test]
fn heap_check_needs_a_sized_end_marker() {
    let mut v = vec![3, 2, 1];
    let err = sort_heap_until_checked(
        SliceCursorMut::new(&mut v),
        EndAt(3),
        Less,
        Identity,
        &ValidationConfig::exhaustive(),
    )
    .expect_err("unsized end");
    assert!(matches!(err, ValidationError::InvalidConfiguration(_)));
}

#[test]
fn zero_stride_is_a_configuration_error() {
    let err = ValidationConfig::sampled(0).expect_err("zero stride");
    assert_eq!(
        err.to_string(),
        "invalid validation configuration: sample stride must be > 0"
    );
}

#[test]
fn literal_zero_stride_partition_check_inspects_every_element() {
    let config = ValidationConfig { sample_stride: 0 };
    let r = equal_range_checked(&[1, 2, 3], &2, Less, Identity, &config).expect("partitioned");
    assert_eq!((r.begin().position(), r.end().position()), (1, 2));
    let err = equal_range_checked(&[3, 1, 2], &2, Less, Identity, &config).expect_err("unpartitioned");
    assert_eq!(err, ValidationError::NotPartitioned { offset: 1 });
}

#[test]
fn literal_zero_stride_heap_check_inspects_every_element() {
    let config = ValidationConfig { sample_stride: 0 };
    let mut v = vec![3, 2, 1];
    assert_eq!(sort_heap_checked(&mut v, Less, Identity, &config).expect("heap").position(), 3);
    assert_eq!(v, [1, 2, 3]);
    let mut broken = vec![1, 5, 3];
    let err = sort_heap_checked(&mut broken, Less, Identity, &config).expect_err("not a heap");
    assert_eq!(err, ValidationError::NotAHeap { parent: 0, child: 1 });
}
