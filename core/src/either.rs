//! One of two typed values.
use crate::{error::Result, guard, opt::Opt};

/// Holds either a `Left` or a `Right` value, never both.
///
/// This is handy when a function returns one of two unrelated types, say an
/// `Either<u32, String>`. There is no implicit conversion between the sides:
/// which one is populated is decided at construction and inspected by tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Builds a `Left` from a nullable value, rejecting `None`.
    pub fn try_left(value: Option<L>) -> Result<Self> {
        guard::require_non_null(value).map(Either::Left)
    }

    /// Builds a `Right` from a nullable value, rejecting `None`.
    pub fn try_right(value: Option<R>) -> Result<Self> {
        guard::require_non_null(value).map(Either::Right)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Opt<L> {
        match self {
            Either::Left(value) => Opt::Present(value),
            Either::Right(_) => Opt::Absent,
        }
    }

    pub fn right(self) -> Opt<R> {
        match self {
            Either::Left(_) => Opt::Absent,
            Either::Right(value) => Opt::Present(value),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }
}
