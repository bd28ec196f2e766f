//! Tagged tuples
//!
//! [`Tagged`] puts compile-time names over the slots of a tuple. The names
//! cost nothing at run time: the wrapper is `#[repr(transparent)]` over
//! the tuple and the tags live in `PhantomData`.
//!
//! ```
//! use seqcore::tagged::{make_tagged_pair, tag};
//!
//! let bounds = make_tagged_pair::<tag::Begin, tag::End, _, _>(2usize, 5usize);
//! assert_eq!(*bounds.begin(), bounds.0);
//! assert_eq!(*bounds.end(), bounds.1);
//! let plain: (usize, usize) = bounds.into();
//! assert_eq!(plain, (2, 5));
//! ```

mod position;

pub use position::{Positional, I0, I1, I2, I3};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Marker for types usable as tag names.
pub trait TagSpecifier {}

/// Declare tag specifier types.
///
/// ```
/// use seqcore::tag_specifier;
/// use seqcore::tagged::Tagged;
///
/// tag_specifier!(Count, Total);
///
/// let t: Tagged<(u32, u64), (Count, Total)> = (3, 90).into();
/// assert_eq!(*t.by_tag::<Total, _>(), 90);
/// ```
#[macro_export]
macro_rules! tag_specifier {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name;

            impl $crate::tagged::TagSpecifier for $name {}
        )+
    };
}

/// Tag specifiers used by the algorithms.
pub mod tag {
    tag_specifier!(
        /// Input position.
        In,
        /// First input position.
        In1,
        /// Second input position.
        In2,
        /// Output position.
        Out,
        /// First output position.
        Out1,
        /// Second output position.
        Out2,
        /// Function object.
        Fun,
        /// Minimum.
        Min,
        /// Maximum.
        Max,
        /// Start of a subrange.
        Begin,
        /// End of a subrange.
        End,
    );
}

/// Name lists that fit a base aggregate: no more names than slots.
pub trait TagsFor<B> {}

macro_rules! impl_tags_for {
    ($( ($($tag:ident),*) for ($($slot:ident),+); )*) => {
        $(
            impl<$($tag: TagSpecifier,)* $($slot,)+> TagsFor<($($slot,)+)> for ($($tag,)*) {}
        )*
    };
}

impl_tags_for! {
    () for (A);
    (T0) for (A);
    () for (A, B);
    (T0) for (A, B);
    (T0, T1) for (A, B);
    () for (A, B, C);
    (T0) for (A, B, C);
    (T0, T1) for (A, B, C);
    (T0, T1, T2) for (A, B, C);
    () for (A, B, C, D);
    (T0) for (A, B, C, D);
    (T0, T1) for (A, B, C, D);
    (T0, T1, T2) for (A, B, C, D);
    (T0, T1, T2, T3) for (A, B, C, D);
}

/// Tag list where `Tag` names slot `Ix`.
pub trait HasTag<Tag, Ix> {}

impl<T0> HasTag<T0, I0> for (T0,) {}
impl<T0, T1> HasTag<T0, I0> for (T0, T1) {}
impl<T0, T1> HasTag<T1, I1> for (T0, T1) {}
impl<T0, T1, T2> HasTag<T0, I0> for (T0, T1, T2) {}
impl<T0, T1, T2> HasTag<T1, I1> for (T0, T1, T2) {}
impl<T0, T1, T2> HasTag<T2, I2> for (T0, T1, T2) {}
impl<T0, T1, T2, T3> HasTag<T0, I0> for (T0, T1, T2, T3) {}
impl<T0, T1, T2, T3> HasTag<T1, I1> for (T0, T1, T2, T3) {}
impl<T0, T1, T2, T3> HasTag<T2, I2> for (T0, T1, T2, T3) {}
impl<T0, T1, T2, T3> HasTag<T3, I3> for (T0, T1, T2, T3) {}

/// A tuple `B` with the slot names `Tags`.
///
/// Dereferences to `B`, so positional access is plain tuple syntax
/// (`t.0`, `t.1`). Comparison, hashing and formatting delegate to `B`.
#[repr(transparent)]
pub struct Tagged<B, Tags> {
    base: B,
    _tags: PhantomData<fn() -> Tags>,
}

/// Two-slot [`Tagged`] with names `T1`, `T2` over `(A, B)`.
pub type TaggedPair<T1, T2, A, B> = Tagged<(A, B), (T1, T2)>;

impl<B, Tags: TagsFor<B>> Tagged<B, Tags> {
    /// Attach names to `base`.
    #[inline]
    pub fn new(base: B) -> Self {
        Self {
            base,
            _tags: PhantomData,
        }
    }
}

impl<B, Tags> Tagged<B, Tags> {
    /// The untagged aggregate.
    #[inline]
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Mutable access to the untagged aggregate.
    #[inline]
    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    /// Drop the names.
    #[inline]
    pub fn into_base(self) -> B {
        self.base
    }

    /// Swap the names for another list over the same aggregate.
    pub fn retag<Other: TagsFor<B>>(self) -> Tagged<B, Other> {
        Tagged::new(self.base)
    }

    /// Convert the aggregate while keeping the names.
    pub fn convert<Other>(self) -> Tagged<Other, Tags>
    where
        Other: From<B>,
        Tags: TagsFor<Other>,
    {
        Tagged::new(Other::from(self.base))
    }

    /// Exchange contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.base, &mut other.base);
    }

    /// Slot named `Tag`.
    #[inline]
    pub fn by_tag<Tag, Ix>(&self) -> &<B as Positional<Ix>>::Output
    where
        Tags: HasTag<Tag, Ix>,
        B: Positional<Ix>,
    {
        self.base.get()
    }

    /// Mutable slot named `Tag`.
    #[inline]
    pub fn by_tag_mut<Tag, Ix>(&mut self) -> &mut <B as Positional<Ix>>::Output
    where
        Tags: HasTag<Tag, Ix>,
        B: Positional<Ix>,
    {
        self.base.get_mut()
    }

    /// Move out the slot named `Tag`.
    #[inline]
    pub fn into_tag<Tag, Ix>(self) -> <B as Positional<Ix>>::Output
    where
        Tags: HasTag<Tag, Ix>,
        B: Positional<Ix>,
    {
        self.base.into_slot()
    }
}

macro_rules! named_getters {
    ($($tag:ident => $get:ident, $get_mut:ident, $into:ident;)*) => {
        impl<B, Tags> Tagged<B, Tags> {
            $(
                #[doc = concat!("Slot tagged [`tag::", stringify!($tag), "`].")]
                #[inline]
                pub fn $get<Ix>(&self) -> &<B as Positional<Ix>>::Output
                where
                    Tags: HasTag<tag::$tag, Ix>,
                    B: Positional<Ix>,
                {
                    self.base.get()
                }

                #[doc = concat!("Mutable slot tagged [`tag::", stringify!($tag), "`].")]
                #[inline]
                pub fn $get_mut<Ix>(&mut self) -> &mut <B as Positional<Ix>>::Output
                where
                    Tags: HasTag<tag::$tag, Ix>,
                    B: Positional<Ix>,
                {
                    self.base.get_mut()
                }

                #[doc = concat!("Move out the slot tagged [`tag::", stringify!($tag), "`].")]
                #[inline]
                pub fn $into<Ix>(self) -> <B as Positional<Ix>>::Output
                where
                    Tags: HasTag<tag::$tag, Ix>,
                    B: Positional<Ix>,
                {
                    self.base.into_slot()
                }
            )*
        }
    };
}

named_getters! {
    In => in_, in_mut, into_in;
    In1 => in1, in1_mut, into_in1;
    In2 => in2, in2_mut, into_in2;
    Out => out, out_mut, into_out;
    Out1 => out1, out1_mut, into_out1;
    Out2 => out2, out2_mut, into_out2;
    Fun => fun, fun_mut, into_fun;
    Begin => begin, begin_mut, into_begin;
    End => end, end_mut, into_end;
}

impl<B, Tags> Deref for Tagged<B, Tags> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        &self.base
    }
}

impl<B, Tags> DerefMut for Tagged<B, Tags> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

impl<B, Tags: TagsFor<B>> From<B> for Tagged<B, Tags> {
    #[inline]
    fn from(base: B) -> Self {
        Self::new(base)
    }
}

impl<A, Tags> From<Tagged<(A,), Tags>> for (A,) {
    fn from(tagged: Tagged<(A,), Tags>) -> Self {
        tagged.base
    }
}

impl<A, B, Tags> From<Tagged<(A, B), Tags>> for (A, B) {
    fn from(tagged: Tagged<(A, B), Tags>) -> Self {
        tagged.base
    }
}

impl<A, B, C, Tags> From<Tagged<(A, B, C), Tags>> for (A, B, C) {
    fn from(tagged: Tagged<(A, B, C), Tags>) -> Self {
        tagged.base
    }
}

impl<A, B, C, D, Tags> From<Tagged<(A, B, C, D), Tags>> for (A, B, C, D) {
    fn from(tagged: Tagged<(A, B, C, D), Tags>) -> Self {
        tagged.base
    }
}

impl<B: Clone, Tags> Clone for Tagged<B, Tags> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _tags: PhantomData,
        }
    }
}

impl<B: Copy, Tags> Copy for Tagged<B, Tags> {}

impl<B: Default, Tags: TagsFor<B>> Default for Tagged<B, Tags> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: fmt::Debug, Tags> fmt::Debug for Tagged<B, Tags> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.base, f)
    }
}

impl<B: PartialEq, Tags> PartialEq for Tagged<B, Tags> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<B: Eq, Tags> Eq for Tagged<B, Tags> {}

impl<B: PartialOrd, Tags> PartialOrd for Tagged<B, Tags> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<B: Ord, Tags> Ord for Tagged<B, Tags> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base)
    }
}

impl<B: Hash, Tags> Hash for Tagged<B, Tags> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<B: serde::Serialize, Tags> serde::Serialize for Tagged<B, Tags> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.base.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: serde::Deserialize<'de>, Tags: TagsFor<B>> serde::Deserialize<'de>
    for Tagged<B, Tags>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        B::deserialize(deserializer).map(Tagged::new)
    }
}

/// Build a [`TaggedPair`] named `T1`, `T2` from two values.
///
/// Element types are taken from the arguments as written, so a borrowed
/// argument is stored as a reference and an owned one by value.
#[inline]
pub fn make_tagged_pair<T1, T2, A, B>(first: A, second: B) -> TaggedPair<T1, T2, A, B>
where
    T1: TagSpecifier,
    T2: TagSpecifier,
{
    Tagged::new((first, second))
}
