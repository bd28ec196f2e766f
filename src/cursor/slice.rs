use std::fmt;

use crate::concepts::{
    Cursor, ForwardCursor, IndexedCursor, PermutableCursor, RandomAccessCursor, Sentinel,
};

/// Random-access cursor over a shared slice.
///
/// Two cursors compare equal when they point into the same slice at the
/// same position, so a cursor is its own end marker.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Cursor one past the last element of `slice`.
    pub fn end_of(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The elements from the cursor to the end of the slice.
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.slice.as_ptr() == other.slice.as_ptr() && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    type Value = T;

    #[inline]
    fn read(&self) -> &T {
        &self.slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.pos += n;
    }

    #[inline]
    fn distance_to(&self, end: &Self) -> Option<usize> {
        Some(end.pos.saturating_sub(self.pos))
    }
}

impl<T> IndexedCursor for SliceCursor<'_, T> {
    #[inline]
    fn at(&self, offset: usize) -> &T {
        &self.slice[self.pos + offset]
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {}

/// Permutable cursor holding the unique borrow of a slice.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Give the slice back.
    pub fn into_slice(self) -> &'a mut [T] {
        self.slice
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    type Value = T;

    #[inline]
    fn read(&self) -> &T {
        &self.slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> IndexedCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn at(&self, offset: usize) -> &T {
        &self.slice[self.pos + offset]
    }
}

impl<T> PermutableCursor for SliceCursorMut<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.pos += n;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.pos -= n;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.slice.swap(self.pos + a, self.pos + b);
    }
}

/// End marker for slice cursors: "one past the last element".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceEnd;

impl<T> Sentinel<SliceCursorMut<'_, T>> for SliceEnd {
    #[inline]
    fn is_end(&self, cursor: &SliceCursorMut<'_, T>) -> bool {
        cursor.pos >= cursor.slice.len()
    }

    #[inline]
    fn distance_from(&self, cursor: &SliceCursorMut<'_, T>) -> Option<usize> {
        Some(cursor.slice.len().saturating_sub(cursor.pos))
    }
}

impl<T> Sentinel<SliceCursor<'_, T>> for SliceEnd {
    #[inline]
    fn is_end(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.pos >= cursor.slice.len()
    }

    #[inline]
    fn distance_from(&self, cursor: &SliceCursor<'_, T>) -> Option<usize> {
        Some(cursor.slice.len().saturating_sub(cursor.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_cursor_reads_and_measures() {
        let data = [5, 6, 7, 8];
        let mut cursor = SliceCursor::new(&data);
        let end = SliceCursor::end_of(&data);
        assert_eq!(*cursor.read(), 5);
        assert_eq!(*cursor.at(2), 7);
        cursor.advance();
        assert_eq!(cursor.distance_to(&end), Some(3));
        assert_eq!(cursor.remaining(), &[6, 7, 8]);
        assert!(!end.is_end(&cursor));
        cursor.advance_by(3);
        assert!(end.is_end(&cursor));
        assert!(SliceEnd.is_end(&cursor));
    }

    #[test]
    fn cursors_into_different_slices_differ() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(SliceCursor::new(&a), SliceCursor::new(&b));
        assert_eq!(SliceCursor::new(&a), SliceCursor::new(&a));
    }

    #[test]
    fn mutable_cursor_swaps_relative_to_position() {
        let mut data = [1, 2, 3, 4];
        let mut cursor = SliceCursorMut::new(&mut data);
        PermutableCursor::advance_by(&mut cursor, 1);
        cursor.swap(0, 2);
        assert_eq!(SliceEnd.distance_from(&cursor), Some(3));
        cursor.retreat_by(1);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.into_slice(), &[1, 4, 3, 2]);
    }

    #[test]
    #[should_panic]
    fn reading_past_the_end_panics() {
        let data = [1];
        let cursor = SliceCursor::end_of(&data);
        let _ = cursor.read();
    }
}
