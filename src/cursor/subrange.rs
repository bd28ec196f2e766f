use crate::concepts::{Sentinel, Sequence};
use crate::tagged::{tag, TaggedPair};

/// A cursor and its end marker held together as one sequence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrange<C, S = C> {
    first: C,
    last: S,
}

impl<C, S: Sentinel<C>> Subrange<C, S> {
    /// Pair `first` with `last`.
    pub fn new(first: C, last: S) -> Self {
        Self { first, last }
    }

    /// Whether the subrange holds no elements.
    pub fn is_empty(&self) -> bool {
        self.last.is_end(&self.first)
    }

    /// Cursor at the first element.
    pub fn first(&self) -> &C {
        &self.first
    }

    /// End marker.
    pub fn last(&self) -> &S {
        &self.last
    }
}

impl<C, S: Sentinel<C>> Sequence for Subrange<C, S> {
    type Cursor = C;
    type End = S;

    fn into_bounds(self) -> (C, S) {
        (self.first, self.last)
    }
}

impl<C: Sentinel<C>> From<TaggedPair<tag::Begin, tag::End, C, C>> for Subrange<C, C> {
    fn from(bounds: TaggedPair<tag::Begin, tag::End, C, C>) -> Self {
        let (first, last) = bounds.into_base();
        Self { first, last }
    }
}

/// Build a [`Subrange`] from a cursor and an end marker.
pub fn make_subrange<C, S: Sentinel<C>>(first: C, last: S) -> Subrange<C, S> {
    Subrange::new(first, last)
}
