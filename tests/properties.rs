mod common;

use common::ForwardOnly;
use proptest::prelude::*;
use seqcore::cursor::SliceCursor;
use seqcore::{
    any_of, equal_range, equal_range_until, is_heap, is_sorted, lower_bound, make_heap, sort_heap,
    upper_bound, Greater, Identity, Less,
};

proptest! {
    #[test]
    fn equal_range_brackets_exactly_the_equal_keys(
        mut values in proptest::collection::vec(-20i32..20, 0..200),
        probe in -25i32..25,
    ) {
        values.sort();
        let r = equal_range(&values, &probe, Less, Identity);
        let (begin, end) = (r.begin().position(), r.end().position());
        prop_assert_eq!(begin, values.partition_point(|v| *v < probe));
        prop_assert_eq!(end, values.partition_point(|v| *v <= probe));
        prop_assert_eq!(lower_bound(&values, &probe, Less, Identity).position(), begin);
        prop_assert_eq!(upper_bound(&values, &probe, Less, Identity).position(), end);
    }

    #[test]
    fn forward_only_cursors_agree_with_random_access(
        mut values in proptest::collection::vec(0i32..10, 0..100),
        probe in 0i32..10,
    ) {
        values.sort();
        let fast = equal_range(&values, &probe, Less, Identity);
        let slow = equal_range_until(
            ForwardOnly(SliceCursor::new(&values)),
            ForwardOnly(SliceCursor::end_of(&values)),
            &probe,
            Less,
            Identity,
        );
        prop_assert_eq!(fast.begin().position(), slow.begin().0.position());
        prop_assert_eq!(fast.end().position(), slow.end().0.position());
    }

    #[test]
    fn heap_sort_matches_std_sort(values in proptest::collection::vec(any::<i16>(), 0..300)) {
        let mut expected = values.clone();
        expected.sort();
        let mut actual = values;
        make_heap(&mut actual, Less, Identity);
        prop_assert!(is_heap(&actual, Less, Identity));
        let end = sort_heap(&mut actual, Less, Identity);
        prop_assert_eq!(end.position(), expected.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn heap_sort_under_greater_is_descending(values in proptest::collection::vec(any::<i16>(), 0..300)) {
        let mut v = values;
        make_heap(&mut v, Greater, Identity);
        sort_heap(&mut v, Greater, Identity);
        prop_assert!(is_sorted(&v, Greater, Identity));
    }

    #[test]
    fn any_of_matches_iterator_any(values in proptest::collection::vec(any::<u8>(), 0..64), needle in any::<u8>()) {
        prop_assert_eq!(
            any_of(&values, |v: &u8| *v == needle, Identity),
            values.iter().any(|v| *v == needle)
        );
    }
}
