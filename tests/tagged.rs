//! Tagged results as seen by callers

use std::collections::HashSet;

use seqcore::tagged::{Tagged, TaggedPair};
use seqcore::{equal_range, make_tagged_pair, tag, tag_specifier, Identity, Less};

tag_specifier!(
    /// Count of matches.
    Hits,
    /// Count of misses.
    Misses,
    /// Total inspected.
    Seen,
);

type Tally = Tagged<(u32, u32, u32), (Hits, Misses, Seen)>;

fn tally(values: &[i32], threshold: i32) -> Tally {
    let hits = values.iter().filter(|v| **v >= threshold).count() as u32;
    let seen = values.len() as u32;
    Tagged::new((hits, seen - hits, seen))
}

#[test]
fn custom_tags_name_three_slots() {
    let mut t = tally(&[1, 5, 7, 2], 5);
    assert_eq!(*t.by_tag::<Hits, _>(), 2);
    assert_eq!(*t.by_tag::<Misses, _>(), 2);
    assert_eq!(*t.by_tag::<Seen, _>(), 4);
    *t.by_tag_mut::<Seen, _>() += 1;
    let plain: (u32, u32, u32) = t.into();
    assert_eq!(plain, (2, 2, 5));
}

#[test]
fn defaults_and_formatting_match_the_tuple() {
    let t = Tally::default();
    assert_eq!(t.into_base(), (0, 0, 0));
    let pair = make_tagged_pair::<tag::Min, tag::Max, _, _>(1, 9);
    assert_eq!(format!("{pair:?}"), format!("{:?}", (1, 9)));
    assert_eq!(pair.into_tag::<tag::Max, _>(), 9);
}

#[test]
fn hashing_and_swapping() {
    let mut a = make_tagged_pair::<tag::In, tag::Out, _, _>(1, 'a');
    let mut b = make_tagged_pair::<tag::In, tag::Out, _, _>(2, 'b');
    a.swap(&mut b);
    assert_eq!((*a.in_(), *a.out()), (2, 'b'));
    assert_eq!((*b.in_(), *b.out()), (1, 'a'));

    let set: HashSet<TaggedPair<tag::In, tag::Out, i32, char>> = [a, b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn algorithm_results_destructure() {
    let v = [2, 4, 4, 4, 8];
    let bounds = equal_range(&v, &4, Less, Identity);
    let (begin, end) = bounds.into_base();
    assert_eq!(end.position() - begin.position(), 3);
    assert_eq!(begin.remaining(), &[4, 4, 4, 8]);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_the_plain_tuple() {
    let pair = make_tagged_pair::<tag::Begin, tag::End, _, _>(3usize, 7usize);
    let json = serde_json::to_string(&pair).expect("serialize");
    assert_eq!(json, "[3,7]");
    let back: TaggedPair<tag::Begin, tag::End, usize, usize> =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, pair);
}
