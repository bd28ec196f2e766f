//! Binary heaps over permutable storage.
//!
//! A range is a heap under `relation` when no element relates to its child
//! positions, i.e. `!relation(key(parent), key(child))`. With [`Less`] that
//! is a max-heap.
//!
//! [`Less`]: crate::invoke::Less

use crate::concepts::{
    distance, Cursor, ForwardCursor, IndexedCursor, PermutableCursor, Sentinel, Sequence,
};
use crate::invoke::{holds_projected, Projection, Relation};

/// Number of positions in `[first, last)` for a cursor that cannot be cloned.
///
/// Walks `first` to the end and back when the sentinel cannot measure.
fn permutable_distance<C, S>(first: &mut C, last: &S) -> usize
where
    C: PermutableCursor,
    S: Sentinel<C>,
{
    if let Some(n) = last.distance_from(first) {
        return n;
    }
    let mut n = 0;
    while !last.is_end(first) {
        first.advance();
        n += 1;
    }
    first.retreat_by(n);
    n
}

/// Restore the heap property below `root` in a heap of `len` elements.
fn sift_down<C, R, P>(cursor: &mut C, mut root: usize, len: usize, relation: &mut R, projection: &P)
where
    C: PermutableCursor,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            break;
        }
        if child + 1 < len
            && holds_projected(relation, projection, cursor.at(child), cursor.at(child + 1))
        {
            child += 1;
        }
        if !holds_projected(relation, projection, cursor.at(root), cursor.at(child)) {
            break;
        }
        cursor.swap(root, child);
        root = child;
    }
}

fn make_heap_n<C, R, P>(cursor: &mut C, len: usize, relation: &mut R, projection: &P)
where
    C: PermutableCursor,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    for root in (0..len / 2).rev() {
        sift_down(cursor, root, len, relation, projection);
    }
}

fn sort_heap_n<C, R, P>(cursor: &mut C, len: usize, relation: &mut R, projection: &P)
where
    C: PermutableCursor,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    for last in (1..len).rev() {
        cursor.swap(0, last);
        sift_down(cursor, 0, last, relation, projection);
    }
}

/// Length of the longest prefix of the `len` elements at `cursor` that is a heap.
pub(crate) fn heap_prefix_len<C, R, P>(cursor: &C, len: usize, relation: &mut R, projection: &P) -> usize
where
    C: IndexedCursor,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    for child in 1..len {
        let parent = (child - 1) / 2;
        if holds_projected(relation, projection, cursor.at(parent), cursor.at(child)) {
            return child;
        }
    }
    len
}

/// Sort the heap `[first, last)` in place; returns the cursor at `last`.
///
/// The range must already be a heap under `relation` and `projection`;
/// this is not checked (see [`crate::checked`]). The result is ascending
/// under `relation`, so [`Greater`](crate::invoke::Greater) on a min-heap
/// sorts descending. `O(n log n)` comparisons.
pub fn sort_heap_until<C, S, R, P>(mut first: C, last: S, mut relation: R, projection: P) -> C
where
    C: PermutableCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    let len = permutable_distance(&mut first, &last);
    sort_heap_n(&mut first, len, &mut relation, &projection);
    first.advance_by(len);
    first
}

/// [`sort_heap_until`] over a whole sequence.
///
/// ```
/// use seqcore::{make_heap, sort_heap, Identity, Less};
///
/// let mut v = vec![4, 1, 3, 2];
/// make_heap(&mut v, Less, Identity);
/// let end = sort_heap(&mut v, Less, Identity);
/// assert_eq!(end.position(), 4);
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub fn sort_heap<Q, R, P>(sequence: Q, relation: R, projection: P) -> Q::Cursor
where
    Q: Sequence,
    Q::Cursor: PermutableCursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key>,
{
    let (first, last) = sequence.into_bounds();
    sort_heap_until(first, last, relation, projection)
}

/// Arrange `[first, last)` into a heap; returns the cursor at `last`.
pub fn make_heap_until<C, S, R, P>(mut first: C, last: S, mut relation: R, projection: P) -> C
where
    C: PermutableCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    let len = permutable_distance(&mut first, &last);
    make_heap_n(&mut first, len, &mut relation, &projection);
    first.advance_by(len);
    first
}

/// [`make_heap_until`] over a whole sequence.
pub fn make_heap<Q, R, P>(sequence: Q, relation: R, projection: P) -> Q::Cursor
where
    Q: Sequence,
    Q::Cursor: PermutableCursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key>,
{
    let (first, last) = sequence.into_bounds();
    make_heap_until(first, last, relation, projection)
}

/// Number of leading elements of `[first, last)` that form a heap.
///
/// Only reads, so shared slices qualify.
pub fn is_heap_until<C, S, R, P>(first: C, last: S, mut relation: R, projection: P) -> usize
where
    C: ForwardCursor + IndexedCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    let len = distance(&first, &last);
    heap_prefix_len(&first, len, &mut relation, &projection)
}

/// Whether the whole sequence is a heap.
pub fn is_heap<Q, R, P>(sequence: Q, mut relation: R, projection: P) -> bool
where
    Q: Sequence,
    Q::Cursor: ForwardCursor + IndexedCursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key>,
{
    let (first, last) = sequence.into_bounds();
    let len = distance(&first, &last);
    heap_prefix_len(&first, len, &mut relation, &projection) == len
}
