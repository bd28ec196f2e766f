//! Type-level slot indices for tuples.

/// Slot 0.
#[derive(Debug, Clone, Copy)]
pub enum I0 {}
/// Slot 1.
#[derive(Debug, Clone, Copy)]
pub enum I1 {}
/// Slot 2.
#[derive(Debug, Clone, Copy)]
pub enum I2 {}
/// Slot 3.
#[derive(Debug, Clone, Copy)]
pub enum I3 {}

/// Positional access to slot `Ix` of a tuple.
pub trait Positional<Ix> {
    /// Type stored in the slot.
    type Output;

    /// Borrow the slot.
    fn get(&self) -> &Self::Output;

    /// Mutably borrow the slot.
    fn get_mut(&mut self) -> &mut Self::Output;

    /// Move the slot out.
    fn into_slot(self) -> Self::Output;
}

macro_rules! impl_positional {
    ($( ($($ty:ident),+) => $ix:ident, $n:tt, $out:ident; )*) => {
        $(
            impl<$($ty),+> Positional<$ix> for ($($ty,)+) {
                type Output = $out;

                #[inline]
                fn get(&self) -> &$out {
                    &self.$n
                }

                #[inline]
                fn get_mut(&mut self) -> &mut $out {
                    &mut self.$n
                }

                #[inline]
                fn into_slot(self) -> $out {
                    self.$n
                }
            }
        )*
    };
}

impl_positional! {
    (A) => I0, 0, A;
    (A, B) => I0, 0, A;
    (A, B) => I1, 1, B;
    (A, B, C) => I0, 0, A;
    (A, B, C) => I1, 1, B;
    (A, B, C) => I2, 2, C;
    (A, B, C, D) => I0, 0, A;
    (A, B, C, D) => I1, 1, B;
    (A, B, C, D) => I2, 2, C;
    (A, B, C, D) => I3, 3, D;
}
