use std::fmt;

use crate::concepts::{Cursor, ForwardCursor, Sentinel};

/// Cursor over any [`Iterator`], holding the current item.
///
/// Single-pass in general. When the iterator is `Clone` (as the borrowing
/// iterators of the standard collections are) the cursor is a
/// [`ForwardCursor`].
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Pull the first item of `iter`.
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self { iter, current }
    }

    /// Whether the iterator has run out.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Value = I::Item;

    fn read(&self) -> &I::Item {
        match &self.current {
            Some(item) => item,
            None => panic!("read through an exhausted IterCursor"),
        }
    }

    fn advance(&mut self) {
        self.current = self.iter.next();
    }
}

impl<I> ForwardCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
}

/// End marker for [`IterCursor`]: reached once the iterator yields `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhausted;

impl<I: Iterator> Sentinel<IterCursor<I>> for Exhausted {
    #[inline]
    fn is_end(&self, cursor: &IterCursor<I>) -> bool {
        cursor.is_exhausted()
    }
}
