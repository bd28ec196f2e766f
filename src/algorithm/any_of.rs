use crate::concepts::{Cursor, Sentinel, Sequence};
use crate::invoke::Projection;

/// Whether any element in `[first, last)` has a projected key satisfying
/// `predicate`.
///
/// Stops at the first match, so the predicate runs at most `k + 1` times
/// where `k` is the index of the first match. Needs only a single-pass
/// cursor and terminates on an endless sequence once a match exists.
pub fn any_of_until<C, S, Pred, P>(mut first: C, last: S, mut predicate: Pred, projection: P) -> bool
where
    C: Cursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    Pred: FnMut(&P::Key) -> bool,
{
    while !last.is_end(&first) {
        if projection.with_key(first.read(), &mut predicate) {
            return true;
        }
        first.advance();
    }
    false
}

/// [`any_of_until`] over a whole sequence.
///
/// ```
/// use seqcore::{any_of, Identity};
///
/// assert!(any_of(&[1, 4, 9][..], |x: &i32| x % 2 == 0, Identity));
/// assert!(!any_of(&Vec::<i32>::new(), |_: &i32| true, Identity));
/// ```
pub fn any_of<Q, Pred, P>(sequence: Q, predicate: Pred, projection: P) -> bool
where
    Q: Sequence,
    Q::Cursor: Cursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    Pred: FnMut(&P::Key) -> bool,
{
    let (first, last) = sequence.into_bounds();
    any_of_until(first, last, predicate, projection)
}
