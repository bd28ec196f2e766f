use std::ops::AddAssign;

use crate::concepts::{Cursor, ForwardCursor, Sentinel};

/// Unbounded cursor over `start, start + 1, ...`.
///
/// Pair it with another `Iota` for a half-open interval or with
/// [`Unreachable`] for an endless sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iota<T> {
    value: T,
}

impl<T> Iota<T> {
    /// Start counting at `start`.
    pub fn new(start: T) -> Self {
        Self { value: start }
    }
}

impl<T: Copy + AddAssign + From<u8>> Cursor for Iota<T> {
    type Value = T;

    #[inline]
    fn read(&self) -> &T {
        &self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.value += T::from(1u8);
    }
}

impl<T: Copy + AddAssign + From<u8>> ForwardCursor for Iota<T> {}

/// End marker that no cursor ever reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unreachable;

impl<C: ?Sized> Sentinel<C> for Unreachable {
    #[inline]
    fn is_end(&self, _cursor: &C) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::distance;

    #[test]
    fn bounded_iota_has_length() {
        assert_eq!(distance(&Iota::new(3u32), &Iota::new(10u32)), 7);
    }

    #[test]
    fn unreachable_never_ends() {
        let mut cursor = Iota::new(0i64);
        cursor.advance_by(1_000);
        assert!(!Unreachable.is_end(&cursor));
        assert_eq!(*cursor.read(), 1_000);
    }
}
