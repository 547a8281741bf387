//! Sum types that encode absence, failure and choice in the type itself.
//!
//! [`Opt`] is a value that may or may not be present, [`Either`] holds one of
//! two typed values and [`Fallible`] is the success-or-failure specialization
//! of the same shape. None of them ever wraps an absent value: the nullable
//! entry points (`try_*`) go through the [`guard`] module, which is also what
//! the immutable collections of `immutils-collections` use to reject absent
//! elements before taking a snapshot of their input.

pub mod either;
pub mod error;
pub mod fallible;
pub mod guard;
pub mod opt;

pub use either::Either;
pub use error::{Error, NullSite, Result};
pub use fallible::Fallible;
pub use opt::Opt;
