use crate::concepts::{Cursor, ForwardCursor, Sentinel, Sequence};
use crate::invoke::{holds_projected, Projection, Relation};

fn first_unsorted<C, S, R, P>(first: C, last: &S, relation: &mut R, projection: &P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    if last.is_end(&first) {
        return first;
    }
    let mut previous = first.clone();
    let mut next = first;
    next.advance();
    while !last.is_end(&next) {
        if holds_projected(relation, projection, next.read(), previous.read()) {
            return next;
        }
        previous.advance();
        next.advance();
    }
    next
}

/// First position in `[first, last)` whose key is ordered before its
/// predecessor's, or the end position if the range is sorted.
pub fn is_sorted_until<C, S, R, P>(first: C, last: S, mut relation: R, projection: P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    first_unsorted(first, &last, &mut relation, &projection)
}

/// Whether the whole sequence is sorted under `relation`.
pub fn is_sorted<Q, R, P>(sequence: Q, mut relation: R, projection: P) -> bool
where
    Q: Sequence,
    Q::Cursor: ForwardCursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key>,
{
    let (first, last) = sequence.into_bounds();
    let stop = first_unsorted(first, &last, &mut relation, &projection);
    last.is_end(&stop)
}
