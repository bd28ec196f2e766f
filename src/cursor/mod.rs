//! Cursor and end-marker implementations
//!
//! Borrowed standard containers are [`Sequence`]s: contiguous storage
//! yields random-access [`SliceCursor`]s (or permutable [`SliceCursorMut`]s
//! through a unique borrow), node-based containers yield forward-only
//! [`IterCursor`]s.

mod counted;
mod iota;
mod iter;
mod slice;
mod subrange;

pub use counted::{Counted, CountedEnd};
pub use iota::{Iota, Unreachable};
pub use iter::{Exhausted, IterCursor};
pub use slice::{SliceCursor, SliceCursorMut, SliceEnd};
pub use subrange::{make_subrange, Subrange};

use std::collections::{btree_set, linked_list, vec_deque, BTreeSet, LinkedList, VecDeque};

use crate::concepts::Sequence;

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        (SliceCursor::new(self), SliceCursor::end_of(self))
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        self.as_slice().into_bounds()
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        self.as_slice().into_bounds()
    }
}

impl<'a, T> Sequence for &'a mut [T] {
    type Cursor = SliceCursorMut<'a, T>;
    type End = SliceEnd;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        (SliceCursorMut::new(self), SliceEnd)
    }
}

impl<'a, T, const N: usize> Sequence for &'a mut [T; N] {
    type Cursor = SliceCursorMut<'a, T>;
    type End = SliceEnd;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        self.as_mut_slice().into_bounds()
    }
}

impl<'a, T> Sequence for &'a mut Vec<T> {
    type Cursor = SliceCursorMut<'a, T>;
    type End = SliceEnd;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        self.as_mut_slice().into_bounds()
    }
}

impl<'a, T> Sequence for &'a LinkedList<T> {
    type Cursor = IterCursor<linked_list::Iter<'a, T>>;
    type End = Exhausted;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        (IterCursor::new(self.iter()), Exhausted)
    }
}

impl<'a, T> Sequence for &'a BTreeSet<T> {
    type Cursor = IterCursor<btree_set::Iter<'a, T>>;
    type End = Exhausted;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        (IterCursor::new(self.iter()), Exhausted)
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Cursor = IterCursor<vec_deque::Iter<'a, T>>;
    type End = Exhausted;

    fn into_bounds(self) -> (Self::Cursor, Self::End) {
        (IterCursor::new(self.iter()), Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{distance, Cursor};

    #[test]
    fn containers_expose_their_bounds() {
        let v = vec![1, 2, 3];
        let (first, last) = (&v).into_bounds();
        assert_eq!(distance(&first, &last), 3);

        let list: LinkedList<i32> = v.iter().copied().collect();
        let (first, last) = (&list).into_bounds();
        assert_eq!(distance(&first, &last), 3);
        assert_eq!(**first.read(), 1);
    }

    #[test]
    fn extraction_borrows_without_copying() {
        let mut v = vec![String::from("x"), String::from("y")];
        let ptr = v.as_ptr();
        let (first, _) = (&v).into_bounds();
        assert!(std::ptr::eq(first.read(), ptr));
        let (first, _) = (&mut v).into_bounds();
        assert_eq!(first.position(), 0);
    }
}
