//! Capability model
//!
//! Each algorithm states the least it needs from its cursor, end marker,
//! ordering and projection as trait bounds. A call that does not meet them
//! is rejected by the type checker before any element is read.
//!
//! Capability lattice:
//!
//! ```text
//! Cursor ──► ForwardCursor ──┐
//!    │                       ├──► RandomAccessCursor
//!    └────► IndexedCursor ───┤
//!                            └──► PermutableCursor
//! ```
//!
//! | algorithm            | cursor bound          |
//! |----------------------|-----------------------|
//! | `any_of`             | [`Cursor`]            |
//! | `equal_range` & co.  | [`ForwardCursor`]     |
//! | `sort_heap` & co.    | [`PermutableCursor`]  |
//! | `is_heap` & co.      | [`ForwardCursor`] + [`IndexedCursor`] |
//!
//! The end marker only has to implement [`Sentinel`] for the cursor type.
//!
//! Sorting a heap needs write access, so shared slices are rejected:
//!
//! ```compile_fail
//! use seqcore::{sort_heap, Identity, Less};
//!
//! let v = vec![3, 2, 1];
//! sort_heap(&v[..], Less, Identity);
//! ```
//!
//! Bisection revisits positions, so single-pass cursors are rejected:
//!
//! ```compile_fail
//! use seqcore::cursor::{Exhausted, IterCursor};
//! use seqcore::{equal_range_until, Identity, Less};
//!
//! let mut source = vec![1, 2, 3].into_iter();
//! let once = std::iter::from_fn(|| source.next());
//! equal_range_until(IterCursor::new(once), Exhausted, &2, Less, Identity);
//! ```
//!
//! Predicates see the projected key, not the element:
//!
//! ```compile_fail
//! use seqcore::{any_of, field};
//!
//! struct Point { x: i32 }
//! let points = [Point { x: 1 }];
//! any_of(&points[..], |p: &Point| p.x > 0, field!(Point, x));
//! ```

/// Single-pass read/advance traversal.
pub trait Cursor {
    /// Element type the cursor reads.
    type Value: ?Sized;

    /// Read the element under the cursor.
    ///
    /// Calling this at the end position is a contract violation; the
    /// provided cursors panic.
    fn read(&self) -> &Self::Value;

    /// Step to the next position.
    fn advance(&mut self);
}

/// Multi-pass cursor: a clone walks independently and sees the same elements.
pub trait ForwardCursor: Cursor + Clone {
    /// Step `n` positions forward.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Number of steps from `self` to `end` when it can be computed without
    /// walking.
    fn distance_to(&self, _end: &Self) -> Option<usize> {
        None
    }
}

/// Positional read relative to the cursor.
pub trait IndexedCursor: Cursor {
    /// Element `offset` positions past the cursor.
    fn at(&self, offset: usize) -> &Self::Value;
}

/// Forward cursor whose `advance_by`, `distance_to` and `at` run in constant time.
pub trait RandomAccessCursor: ForwardCursor + IndexedCursor {}

/// Exclusive positional access that can reorder elements.
///
/// Not `Clone`: an implementation may own a unique borrow of its storage.
pub trait PermutableCursor: IndexedCursor {
    /// Step `n` positions forward.
    fn advance_by(&mut self, n: usize);

    /// Step `n` positions back.
    fn retreat_by(&mut self, n: usize);

    /// Exchange the elements `a` and `b` positions past the cursor.
    fn swap(&mut self, a: usize, b: usize);
}

/// End marker for cursors of type `C`.
///
/// The marker need not be a position: counts and "never" are both valid
/// end markers.
pub trait Sentinel<C: ?Sized> {
    /// Whether `cursor` has reached the end.
    fn is_end(&self, cursor: &C) -> bool;

    /// Steps left before `cursor` reaches the end, when known without walking.
    fn distance_from(&self, _cursor: &C) -> Option<usize> {
        None
    }
}

impl<C: ForwardCursor + PartialEq> Sentinel<C> for C {
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor == self
    }

    #[inline]
    fn distance_from(&self, cursor: &C) -> Option<usize> {
        cursor.distance_to(self)
    }
}

/// A whole-sequence value that yields its cursor and end marker.
///
/// Implemented for borrowed containers so extraction never copies or moves
/// elements.
pub trait Sequence {
    /// Cursor positioned at the first element.
    type Cursor;
    /// End marker matching [`Sequence::Cursor`].
    type End: Sentinel<Self::Cursor>;

    /// Split into `(first, last)`.
    fn into_bounds(self) -> (Self::Cursor, Self::End);
}

/// Number of positions in `[first, last)`.
///
/// Asks the sentinel first and walks a clone of `first` otherwise.
pub fn distance<C, S>(first: &C, last: &S) -> usize
where
    C: ForwardCursor,
    S: Sentinel<C>,
{
    if let Some(n) = last.distance_from(first) {
        return n;
    }
    let mut cursor = first.clone();
    let mut n = 0;
    while !last.is_end(&cursor) {
        cursor.advance();
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Counted, CountedEnd, Exhausted, IterCursor, SliceCursor};

    #[test]
    fn distance_uses_sized_sentinel() {
        let data = [1, 2, 3, 4, 5];
        let first = SliceCursor::new(&data);
        let mut last = first;
        last.advance_by(4);
        assert_eq!(distance(&first, &last), 4);
        assert_eq!(last.distance_from(&first), Some(4));
    }

    #[test]
    fn distance_walks_unsized_sentinel() {
        let data = vec![10, 20, 30];
        let first = IterCursor::new(data.iter());
        assert_eq!(Exhausted.distance_from(&first), None);
        assert_eq!(distance(&first, &Exhausted), 3);
    }

    #[test]
    fn distance_of_counted_range() {
        let data = [0u8; 8];
        let first = Counted::new(SliceCursor::new(&data), 3);
        assert_eq!(distance(&first, &CountedEnd), 3);
    }
}
