//! # Generic sequence algorithms over cursors and end markers
//!
//! Algorithms are written once against a small capability model and run
//! over any container or cursor that meets their minimum requirements.
//!
//! ## Core Pieces
//!
//! 1. **Cursors and end markers**: a position is a [`Cursor`]; the end of a
//!    range is any [`Sentinel`] for it, so counts and "never" work as ends
//! 2. **Capabilities**: each algorithm asks for the weakest cursor that
//!    suffices, checked at compile time
//! 3. **Projections**: predicates and orderings see a projected key, e.g. a
//!    single field picked with [`field!`]
//! 4. **Tagged results**: multi-part results such as `{begin, end}` are
//!    tuples with named accessors
//!
//! ## Usage Example
//!
//! ```
//! use seqcore::{any_of, equal_range, field, make_heap, sort_heap, Identity, Less};
//!
//! struct Reading { sensor: u8, value: i32 }
//! let readings = [Reading { sensor: 1, value: -4 }, Reading { sensor: 2, value: 7 }];
//! assert!(any_of(&readings, |v: &i32| *v < 0, field!(Reading, value)));
//!
//! let sorted = [1, 2, 2, 2, 5];
//! let run = equal_range(&sorted, &2, Less, Identity);
//! assert_eq!(run.end().position() - run.begin().position(), 3);
//!
//! let mut v = vec![3, 9, 4, 1];
//! make_heap(&mut v, Less, Identity);
//! sort_heap(&mut v, Less, Identity);
//! assert_eq!(v, [1, 3, 4, 9]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algorithm;  // any_of, bounds, heaps, sortedness
pub mod checked;    // Validated mode for unchecked preconditions
pub mod concepts;   // Capability traits
pub mod cursor;     // Cursor and end-marker implementations
pub mod invoke;     // Projections and relations
pub mod tagged;     // Tagged multi-results

// Re-exports for convenience
pub use algorithm::{
    any_of, any_of_until, equal_range, equal_range_until, is_heap, is_heap_until, is_sorted,
    is_sorted_until, lower_bound, lower_bound_until, make_heap, make_heap_until, sort_heap,
    sort_heap_until, upper_bound, upper_bound_until, Bounds,
};
pub use checked::{ValidationConfig, ValidationError};
pub use concepts::{
    Cursor, ForwardCursor, IndexedCursor, PermutableCursor, RandomAccessCursor, Sentinel, Sequence,
};
pub use invoke::{Field, Greater, Identity, Less, Projection, Relation};
pub use tagged::{make_tagged_pair, tag, Tagged, TaggedPair};
