//! Errors raised by the sum types and the immutable collections.
use std::fmt;

/// Where an absent value was found when it was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NullSite {
    /// A single argument, e.g. the payload of [`crate::Opt::try_of`].
    Argument,
    /// A whole source collection.
    Source,
    /// The element at `index` of a source sequence, in iteration order.
    Element { index: usize },
    /// The key of the entry at `index`.
    Key { index: usize },
    /// The value of the entry at `index`.
    Value { index: usize },
}

impl fmt::Display for NullSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullSite::Argument => write!(f, "argument"),
            NullSite::Source => write!(f, "source collection"),
            NullSite::Element { index } => write!(f, "element #{index}"),
            NullSite::Key { index } => write!(f, "key of entry #{index}"),
            NullSite::Value { index } => write!(f, "value of entry #{index}"),
        }
    }
}

/// An error raised by an operation of this crate or of `immutils-collections`.
///
/// Every variant is raised synchronously at the point of violation, and the
/// same inputs always produce the same error.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An absent value reached a position that forbids it.
    #[error("absent {site} rejected")]
    NullRejected { site: NullSite },

    /// A value was forcibly extracted from an absent [`crate::Opt`].
    #[error("no value present")]
    NoValuePresent,

    /// Positional access outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Something tried to remove an element through a read-only iterator.
    #[error("removal through the {view} iterator is not supported")]
    UnsupportedMutation { view: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
