use crate::concepts::{distance, Cursor, ForwardCursor, Sentinel, Sequence};
use crate::invoke::{holds, Projection, Relation};
use crate::tagged::{make_tagged_pair, tag, TaggedPair};

/// `{begin, end}` bounds returned by [`equal_range`].
pub type Bounds<C> = TaggedPair<tag::Begin, tag::End, C, C>;

/// Whether `relation(projection(*cursor), value)` holds.
#[inline]
fn key_before<C, V, R, P>(cursor: &C, value: &V, relation: &mut R, projection: &P) -> bool
where
    C: Cursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V>,
{
    projection.with_key(cursor.read(), |key| holds(relation, key, value))
}

/// Whether `relation(value, projection(*cursor))` holds.
#[inline]
fn value_before<C, V, R, P>(cursor: &C, value: &V, relation: &mut R, projection: &P) -> bool
where
    C: Cursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<V, P::Key>,
{
    projection.with_key(cursor.read(), |key| holds(relation, value, key))
}

fn lower_bound_n<C, V, R, P>(mut first: C, mut len: usize, value: &V, relation: &mut R, projection: &P) -> C
where
    C: ForwardCursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V>,
{
    while len != 0 {
        let half = len / 2;
        let mut middle = first.clone();
        middle.advance_by(half);
        if key_before(&middle, value, relation, projection) {
            middle.advance();
            first = middle;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

fn upper_bound_n<C, V, R, P>(mut first: C, mut len: usize, value: &V, relation: &mut R, projection: &P) -> C
where
    C: ForwardCursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<V, P::Key>,
{
    while len != 0 {
        let half = len / 2;
        let mut middle = first.clone();
        middle.advance_by(half);
        if value_before(&middle, value, relation, projection) {
            len = half;
        } else {
            middle.advance();
            first = middle;
            len -= half + 1;
        }
    }
    first
}

fn equal_range_n<C, V, R, P>(mut first: C, mut len: usize, value: &V, relation: &mut R, projection: &P) -> Bounds<C>
where
    C: ForwardCursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    while len != 0 {
        let half = len / 2;
        let mut middle = first.clone();
        middle.advance_by(half);
        if key_before(&middle, value, relation, projection) {
            middle.advance();
            first = middle;
            len -= half + 1;
        } else if value_before(&middle, value, relation, projection) {
            len = half;
        } else {
            // `middle` is equivalent to `value`: the lower bound lies in
            // [first, middle), the upper bound in (middle, first + len).
            let lower = lower_bound_n(first, half, value, relation, projection);
            middle.advance();
            let upper = upper_bound_n(middle, len - half - 1, value, relation, projection);
            return make_tagged_pair(lower, upper);
        }
    }
    make_tagged_pair(first.clone(), first)
}

/// First position in `[first, last)` whose key is not ordered before `value`.
pub fn lower_bound_until<C, S, V, R, P>(first: C, last: S, value: &V, mut relation: R, projection: P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V>,
{
    let len = distance(&first, &last);
    lower_bound_n(first, len, value, &mut relation, &projection)
}

/// [`lower_bound_until`] over a whole sequence.
pub fn lower_bound<Q, V, R, P>(sequence: Q, value: &V, relation: R, projection: P) -> Q::Cursor
where
    Q: Sequence,
    Q::Cursor: ForwardCursor,
    V: ?Sized,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key, V>,
{
    let (first, last) = sequence.into_bounds();
    lower_bound_until(first, last, value, relation, projection)
}

/// First position in `[first, last)` whose key `value` is ordered before.
pub fn upper_bound_until<C, S, V, R, P>(first: C, last: S, value: &V, mut relation: R, projection: P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<V, P::Key>,
{
    let len = distance(&first, &last);
    upper_bound_n(first, len, value, &mut relation, &projection)
}

/// [`upper_bound_until`] over a whole sequence.
pub fn upper_bound<Q, V, R, P>(sequence: Q, value: &V, relation: R, projection: P) -> Q::Cursor
where
    Q: Sequence,
    Q::Cursor: ForwardCursor,
    V: ?Sized,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<V, P::Key>,
{
    let (first, last) = sequence.into_bounds();
    upper_bound_until(first, last, value, relation, projection)
}

/// The subrange of `[first, last)` whose keys are equivalent to `value`.
///
/// The range must be partitioned with respect to `value` under `relation`
/// and `projection`; this is not checked (see [`crate::checked`]). When
/// nothing is equivalent both bounds sit where `value` would be inserted.
///
/// Forward-only cursors are bisected too, not scanned: comparisons stay
/// `O(log n)` for every cursor kind, while cursor steps grow from
/// `O(log n)` with constant-time `advance_by` to `O(n)` without it.
pub fn equal_range_until<C, S, V, R, P>(first: C, last: S, value: &V, mut relation: R, projection: P) -> Bounds<C>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    let len = distance(&first, &last);
    equal_range_n(first, len, value, &mut relation, &projection)
}

/// [`equal_range_until`] over a whole sequence.
///
/// ```
/// use seqcore::{equal_range, Identity, Less};
///
/// let v = [0, 1, 2, 2, 2, 3];
/// let r = equal_range(&v, &2, Less, Identity);
/// assert_eq!((r.begin().position(), r.end().position()), (2, 5));
/// ```
pub fn equal_range<Q, V, R, P>(sequence: Q, value: &V, relation: R, projection: P) -> Bounds<Q::Cursor>
where
    Q: Sequence,
    Q::Cursor: ForwardCursor,
    V: ?Sized,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    let (first, last) = sequence.into_bounds();
    equal_range_until(first, last, value, relation, projection)
}
