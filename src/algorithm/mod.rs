//! Sequence algorithms
//!
//! Every algorithm has a cursor-pair form `name_until(first, last, ..)` and
//! a whole-sequence form `name(sequence, ..)` that extracts the bounds and
//! forwards. Orderings and projections are explicit arguments; pass
//! [`Less`](crate::invoke::Less) and [`Identity`](crate::invoke::Identity)
//! for the usual defaults.

mod any_of;
mod bounds;
mod heap;
mod sorted;

pub use any_of::{any_of, any_of_until};
pub use bounds::{
    equal_range, equal_range_until, lower_bound, lower_bound_until, upper_bound,
    upper_bound_until, Bounds,
};
pub use heap::{
    is_heap, is_heap_until, make_heap, make_heap_until, sort_heap, sort_heap_until,
};
pub use sorted::{is_sorted, is_sorted_until};

pub(crate) use heap::heap_prefix_len;
