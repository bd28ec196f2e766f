use crate::concepts::{Cursor, ForwardCursor, IndexedCursor, PermutableCursor, Sentinel};

/// Cursor limited to a fixed number of steps.
///
/// The end is a count, not a position, so the end marker is the separate
/// [`CountedEnd`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted<C> {
    inner: C,
    remaining: usize,
}

impl<C> Counted<C> {
    /// Limit `inner` to `count` steps.
    pub fn new(inner: C, count: usize) -> Self {
        Self {
            inner,
            remaining: count,
        }
    }

    /// Steps left before the end.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The wrapped cursor.
    pub fn base(&self) -> &C {
        &self.inner
    }

    /// Drop the step limit.
    pub fn into_base(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Counted<C> {
    type Value = C::Value;

    #[inline]
    fn read(&self) -> &C::Value {
        self.inner.read()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
        self.remaining -= 1;
    }
}

impl<C: ForwardCursor> ForwardCursor for Counted<C> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
        self.remaining -= n;
    }

    #[inline]
    fn distance_to(&self, end: &Self) -> Option<usize> {
        Some(self.remaining.saturating_sub(end.remaining))
    }
}

impl<C: IndexedCursor> IndexedCursor for Counted<C> {
    #[inline]
    fn at(&self, offset: usize) -> &C::Value {
        debug_assert!(offset < self.remaining, "offset past counted end");
        self.inner.at(offset)
    }
}

impl<C: PermutableCursor> PermutableCursor for Counted<C> {
    #[inline]
    fn advance_by(&mut self, n: usize) {
        PermutableCursor::advance_by(&mut self.inner, n);
        self.remaining -= n;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.inner.retreat_by(n);
        self.remaining += n;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a, b);
    }
}

/// End marker for [`Counted`]: reached when no steps remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountedEnd;

impl<C> Sentinel<Counted<C>> for CountedEnd {
    #[inline]
    fn is_end(&self, cursor: &Counted<C>) -> bool {
        cursor.remaining == 0
    }

    #[inline]
    fn distance_from(&self, cursor: &Counted<C>) -> Option<usize> {
        Some(cursor.remaining)
    }
}
