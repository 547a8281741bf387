//! The outcome of an operation: a success value or a typed failure.
//!
//! [`Fallible`] has the same two-state shape as [`Either`], with names that
//! say which side is which. The failure type is not required to implement
//! [`std::error::Error`]. Conversions to and from [`Either`] and
//! [`std::result::Result`] are lossless.
use crate::{either::Either, error::Result, guard, opt::Opt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fallible<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Fallible<T, E> {
    pub fn success(value: T) -> Self {
        Fallible::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Fallible::Failure(error)
    }

    /// Builds a `Success` from a nullable value, rejecting `None`.
    pub fn try_success(value: Option<T>) -> Result<Self> {
        guard::require_non_null(value).map(Fallible::Success)
    }

    /// Builds a `Failure` from a nullable error, rejecting `None`.
    pub fn try_failure(error: Option<E>) -> Result<Self> {
        guard::require_non_null(error).map(Fallible::Failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Fallible::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Fallible::Failure(_))
    }

    pub fn success_value(self) -> Opt<T> {
        match self {
            Fallible::Success(value) => Opt::Present(value),
            Fallible::Failure(_) => Opt::Absent,
        }
    }

    pub fn failure_value(self) -> Opt<E> {
        match self {
            Fallible::Success(_) => Opt::Absent,
            Fallible::Failure(error) => Opt::Present(error),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Fallible<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Fallible::Success(value),
            Err(error) => Fallible::Failure(error),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for std::result::Result<T, E> {
    fn from(fallible: Fallible<T, E>) -> Self {
        match fallible {
            Fallible::Success(value) => Ok(value),
            Fallible::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for Either<T, E> {
    fn from(fallible: Fallible<T, E>) -> Self {
        match fallible {
            Fallible::Success(value) => Either::Left(value),
            Fallible::Failure(error) => Either::Right(error),
        }
    }
}

impl<T, E> From<Either<T, E>> for Fallible<T, E> {
    fn from(either: Either<T, E>) -> Self {
        match either {
            Either::Left(value) => Fallible::Success(value),
            Either::Right(error) => Fallible::Failure(error),
        }
    }
}
