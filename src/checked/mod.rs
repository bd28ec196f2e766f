//! Validated mode
//!
//! `equal_range` and `sort_heap` trust their preconditions. The wrappers
//! here test a sample of the input first and report a violation instead of
//! returning an unspecified result. A stride of `k` inspects every `k`-th
//! element, so the check can miss violations between samples; stride 1 is
//! exhaustive.

use thiserror::Error;
use tracing::{debug, trace};

use crate::algorithm::{equal_range_until, heap_prefix_len, sort_heap_until, Bounds};
use crate::concepts::{distance, Cursor, ForwardCursor, PermutableCursor, Sentinel, Sequence};
use crate::invoke::{holds, holds_projected, Projection, Relation};

/// Default spacing between sampled elements.
pub const DEFAULT_SAMPLE_STRIDE: usize = 16;

/// Errors reported by validated algorithms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Configuration invalid (e.g., zero stride).
    #[error("invalid validation configuration: {0}")]
    InvalidConfiguration(String),

    /// A sampled element is out of order relative to the search value.
    #[error("sequence is not partitioned with respect to the search value at offset {offset}")]
    NotPartitioned {
        /// Offset of the first sampled element found out of order.
        offset: usize,
    },

    /// A sampled child is ordered after its parent.
    #[error("heap property violated between parent {parent} and child {child}")]
    NotAHeap {
        /// Offset of the parent.
        parent: usize,
        /// Offset of the child that should not exceed it.
        child: usize,
    },
}

/// Sampling parameters for validated mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Inspect every `sample_stride`-th element; zero is treated as one.
    pub sample_stride: usize,
}

impl ValidationConfig {
    /// Sample every `stride`-th element.
    pub fn sampled(stride: usize) -> Result<Self, ValidationError> {
        if stride == 0 {
            return Err(ValidationError::InvalidConfiguration(
                "sample stride must be > 0".to_string(),
            ));
        }
        Ok(Self {
            sample_stride: stride,
        })
    }

    /// Inspect every element.
    pub fn exhaustive() -> Self {
        Self { sample_stride: 1 }
    }

    /// Set the stride; zero is raised to one.
    pub fn with_sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride.max(1);
        self
    }

    /// Whether every element is inspected.
    pub fn is_exhaustive(&self) -> bool {
        self.sample_stride == 1
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

/// Check partitioning of `len` elements at `first` around `value`.
///
/// Keys ordered before `value` must come first, then equivalent keys, then
/// keys `value` is ordered before. Returns the offset of the first sampled
/// element that breaks this.
fn check_partitioned<C, V, R, P>(
    mut cursor: C,
    len: usize,
    value: &V,
    relation: &mut R,
    projection: &P,
    stride: usize,
) -> Result<(), ValidationError>
where
    C: ForwardCursor,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    let stride = stride.max(1);
    // 0: ordered before value, 1: equivalent, 2: ordered after.
    let mut phase = 0u8;
    let mut offset = 0;
    while offset < len {
        let current = projection.with_key(cursor.read(), |key| {
            if holds(relation, key, value) {
                0u8
            } else if holds(relation, value, key) {
                2
            } else {
                1
            }
        });
        if current < phase {
            debug!(offset, "partition violation");
            return Err(ValidationError::NotPartitioned { offset });
        }
        phase = current;
        let step = stride.min(len - offset);
        cursor.advance_by(step);
        offset += step;
    }
    Ok(())
}

fn check_heap<C, R, P>(
    cursor: &C,
    len: usize,
    relation: &mut R,
    projection: &P,
    stride: usize,
) -> Result<(), ValidationError>
where
    C: PermutableCursor,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    let stride = stride.max(1);
    if stride == 1 {
        let prefix = heap_prefix_len(cursor, len, relation, projection);
        if prefix < len {
            let parent = (prefix - 1) / 2;
            debug!(parent, child = prefix, "heap violation");
            return Err(ValidationError::NotAHeap {
                parent,
                child: prefix,
            });
        }
        return Ok(());
    }
    for child in (1..len).step_by(stride) {
        let parent = (child - 1) / 2;
        if holds_projected(relation, projection, cursor.at(parent), cursor.at(child)) {
            debug!(parent, child, "heap violation");
            return Err(ValidationError::NotAHeap { parent, child });
        }
    }
    Ok(())
}

/// [`equal_range_until`] after a sampled partition check.
pub fn equal_range_until_checked<C, S, V, R, P>(
    first: C,
    last: S,
    value: &V,
    mut relation: R,
    projection: P,
    config: &ValidationConfig,
) -> Result<Bounds<C>, ValidationError>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    V: ?Sized,
    P: Projection<C::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    let len = distance(&first, &last);
    trace!(len, stride = config.sample_stride, "validating partition");
    check_partitioned(
        first.clone(),
        len,
        value,
        &mut relation,
        &projection,
        config.sample_stride,
    )?;
    Ok(equal_range_until(first, last, value, relation, projection))
}

/// [`crate::equal_range`] after a sampled partition check.
pub fn equal_range_checked<Q, V, R, P>(
    sequence: Q,
    value: &V,
    relation: R,
    projection: P,
    config: &ValidationConfig,
) -> Result<Bounds<Q::Cursor>, ValidationError>
where
    Q: Sequence,
    Q::Cursor: ForwardCursor,
    V: ?Sized,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key, V> + Relation<V, P::Key>,
{
    let (first, last) = sequence.into_bounds();
    equal_range_until_checked(first, last, value, relation, projection, config)
}

/// [`sort_heap_until`] after a sampled heap check.
///
/// `last` must be able to measure its distance from `first`; the check
/// reads elements before any are moved.
pub fn sort_heap_until_checked<C, S, R, P>(
    first: C,
    last: S,
    mut relation: R,
    projection: P,
    config: &ValidationConfig,
) -> Result<C, ValidationError>
where
    C: PermutableCursor,
    S: Sentinel<C>,
    P: Projection<C::Value>,
    R: Relation<P::Key>,
{
    let len = last.distance_from(&first).ok_or_else(|| {
        ValidationError::InvalidConfiguration(
            "validated sort_heap requires a sized end marker".to_string(),
        )
    })?;
    trace!(len, stride = config.sample_stride, "validating heap");
    check_heap(&first, len, &mut relation, &projection, config.sample_stride)?;
    Ok(sort_heap_until(first, last, relation, projection))
}

/// [`crate::sort_heap`] after a sampled heap check.
pub fn sort_heap_checked<Q, R, P>(
    sequence: Q,
    relation: R,
    projection: P,
    config: &ValidationConfig,
) -> Result<Q::Cursor, ValidationError>
where
    Q: Sequence,
    Q::Cursor: PermutableCursor,
    P: Projection<<Q::Cursor as Cursor>::Value>,
    R: Relation<P::Key>,
{
    let (first, last) = sequence.into_bounds();
    sort_heap_until_checked(first, last, relation, projection, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoke::{Identity, Less};

    #[test]
    fn zero_stride_is_rejected() {
        assert!(matches!(
            ValidationConfig::sampled(0),
            Err(ValidationError::InvalidConfiguration(_))
        ));
        assert_eq!(ValidationConfig::default().sample_stride, DEFAULT_SAMPLE_STRIDE);
        assert!(ValidationConfig::default().with_sample_stride(0).is_exhaustive());
    }

    #[test]
    fn unpartitioned_input_is_reported() {
        let v = [3, 1, 2];
        let err = equal_range_checked(&v, &2, Less, Identity, &ValidationConfig::exhaustive())
            .unwrap_err();
        assert_eq!(err, ValidationError::NotPartitioned { offset: 1 });
    }

    #[test]
    fn broken_heap_is_reported() {
        let mut v = vec![1, 5, 3];
        let err = sort_heap_checked(&mut v, Less, Identity, &ValidationConfig::exhaustive())
            .unwrap_err();
        assert_eq!(err, ValidationError::NotAHeap { parent: 0, child: 1 });
        assert_eq!(v, [1, 5, 3]);
    }
}
