//! Shared cursors and data for integration tests

#![allow(dead_code)]

use seqcore::cursor::{SliceCursor, SliceCursorMut};
use seqcore::{Cursor, ForwardCursor, Sentinel};

/// Hides every capability of `C` beyond [`ForwardCursor`], including its
/// constant-time `advance_by` and `distance_to`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardOnly<C>(pub C);

impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Value = C::Value;

    fn read(&self) -> &C::Value {
        self.0.read()
    }

    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

/// End marker at a fixed offset that cannot report the distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndAt(pub usize);

impl<T> Sentinel<SliceCursor<'_, T>> for EndAt {
    fn is_end(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.position() >= self.0
    }
}

impl<T> Sentinel<SliceCursorMut<'_, T>> for EndAt {
    fn is_end(&self, cursor: &SliceCursorMut<'_, T>) -> bool {
        cursor.position() >= self.0
    }
}

/// Deterministic permutation of `0..n`.
pub fn scrambled(n: usize) -> Vec<i32> {
    let mut v: Vec<i32> = (0..n as i32).collect();
    let mut state = 0x9e37_79b9_u32;
    for i in (1..n).rev() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        v.swap(i, state as usize % (i + 1));
    }
    v
}

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
