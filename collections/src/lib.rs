//! This crate provides immutable collections that never hold absent values.
//!
//! [`ImmutableList`] is an ordered sequence allowing duplicates,
//! [`ImmutableSet`] an unordered collection without duplicates and
//! [`ImmutableMap`] a key/value association whose lookups return an
//! [`immutils_core::Opt`]. The map exposes its keys, values and entries as
//! borrowed, read-only views.
//!
//! Every collection takes a snapshot of its input at construction: nothing
//! the caller still holds is aliased. Modifications go through `copy_and_*`
//! operations, which clone the whole backing store (there is no structural
//! sharing) and leave the original untouched. The `try_*` constructors accept
//! nullable input and reject it as a whole if anything in it is absent.

mod hash;
mod metrics;

pub mod iter;
pub mod list;
pub mod map;
pub mod set;

pub use iter::ReadOnlyIter;
pub use list::ImmutableList;
pub use map::{Entry, ImmutableMap};
pub use set::ImmutableSet;
