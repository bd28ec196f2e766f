//! Projection and invocation layer
//!
//! Algorithms never call user code directly. Keys are produced through
//! [`Projection`] and compared through [`Relation`], so a plain function, a
//! closure, [`Identity`] and a [`Field`] accessor are all invoked the same
//! way.
//!
//! A projection lends its key to a continuation instead of returning it.
//! That lets [`Identity`] and [`Field`] hand out a borrow of the element
//! while a computed key (`|p: &Point| p.x.abs()`) hands out a temporary.

use std::fmt;

/// Maps an element to the key that predicates and orderings see.
///
/// Projections take `&self`: they must not have side effects.
pub trait Projection<T: ?Sized> {
    /// Key type.
    type Key: ?Sized;

    /// Project `value` and pass the key to `f`.
    fn with_key<R>(&self, value: &T, f: impl FnOnce(&Self::Key) -> R) -> R;
}

/// The default projection: the element is its own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: ?Sized> Projection<T> for Identity {
    type Key = T;

    #[inline]
    fn with_key<R>(&self, value: &T, f: impl FnOnce(&T) -> R) -> R {
        f(value)
    }
}

impl<T: ?Sized, K, F: Fn(&T) -> K> Projection<T> for F {
    type Key = K;

    #[inline]
    fn with_key<R>(&self, value: &T, f: impl FnOnce(&K) -> R) -> R {
        f(&self(value))
    }
}

/// "Pick field" projection: borrows one member of the element.
///
/// Usually built with [`field!`](crate::field).
pub struct Field<T: ?Sized, K: ?Sized> {
    access: fn(&T) -> &K,
}

impl<T: ?Sized, K: ?Sized> Field<T, K> {
    /// Wrap an accessor.
    pub fn new(access: fn(&T) -> &K) -> Self {
        Self { access }
    }
}

impl<T: ?Sized, K: ?Sized> Clone for Field<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, K: ?Sized> Copy for Field<T, K> {}

impl<T: ?Sized, K: ?Sized> fmt::Debug for Field<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("element", &std::any::type_name::<T>())
            .field("key", &std::any::type_name::<K>())
            .finish()
    }
}

impl<T: ?Sized, K: ?Sized> Projection<T> for Field<T, K> {
    type Key = K;

    #[inline]
    fn with_key<R>(&self, value: &T, f: impl FnOnce(&K) -> R) -> R {
        f((self.access)(value))
    }
}

/// Build a [`Field`] projection for `Type::member`.
///
/// ```
/// use seqcore::{field, invoke::project};
///
/// struct Reading { sensor: u8, value: f32 }
/// let sensor = field!(Reading, sensor);
/// let r = Reading { sensor: 7, value: 0.5 };
/// assert_eq!(project(&sensor, &r, |k| *k), 7);
/// # let _ = r.value;
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $member:ident) => {
        $crate::invoke::Field::<$ty, _>::new(|value: &$ty| &value.$member)
    };
}

/// Binary relation over keys, such as a strict weak ordering.
pub trait Relation<A: ?Sized, B: ?Sized = A> {
    /// Whether `a` relates to `b`.
    fn holds(&mut self, a: &A, b: &B) -> bool;
}

/// `a < b`; the default ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for Less {
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        PartialOrd::lt(a, b)
    }
}

/// `a > b`; turns max-heaps into min-heaps and ascending into descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<A: ?Sized + PartialOrd<B>, B: ?Sized> Relation<A, B> for Greater {
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        PartialOrd::gt(a, b)
    }
}

impl<A: ?Sized, B: ?Sized, F: FnMut(&A, &B) -> bool> Relation<A, B> for F {
    #[inline]
    fn holds(&mut self, a: &A, b: &B) -> bool {
        self(a, b)
    }
}

/// Project `value` through `projection` and hand the key to `f`.
#[inline]
pub fn project<T, P, R>(projection: &P, value: &T, f: impl FnOnce(&P::Key) -> R) -> R
where
    T: ?Sized,
    P: Projection<T>,
{
    projection.with_key(value, f)
}

/// Evaluate `relation(a, b)`.
///
/// Picks the `Relation<A, B>` impl from the argument types, which matters
/// for relations that are implemented in both directions.
#[inline]
pub fn holds<A, B, R>(relation: &mut R, a: &A, b: &B) -> bool
where
    A: ?Sized,
    B: ?Sized,
    R: Relation<A, B> + ?Sized,
{
    relation.holds(a, b)
}

/// Evaluate `relation(projection(a), projection(b))`.
#[inline]
pub fn holds_projected<T, P, R>(relation: &mut R, projection: &P, a: &T, b: &T) -> bool
where
    T: ?Sized,
    P: Projection<T>,
    R: Relation<P::Key> + ?Sized,
{
    projection.with_key(a, |ka| projection.with_key(b, |kb| relation.holds(ka, kb)))
}
