//! A value that may or may not be present.
use crate::{
    error::{Error, Result},
    guard,
};

/// Either a present value or nothing.
///
/// `Present` never wraps an absent value: constructing one from a nullable
/// input goes through [`Opt::try_of`], which rejects `None`. Two `Absent`s are
/// always equal, and `Absent` orders before any `Present`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Opt<T> {
    Absent,
    Present(T),
}

// Written out so that `Opt<T>: Default` holds for every `T`.
#[allow(clippy::derivable_impls)]
impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::Absent
    }
}

impl<T> Opt<T> {
    pub fn empty() -> Self {
        Opt::Absent
    }

    pub fn of(value: T) -> Self {
        Opt::Present(value)
    }

    /// Wraps a nullable value, rejecting `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_core::{Error, Opt};
    /// assert_eq!(Opt::try_of(Some("test")), Ok(Opt::Present("test")));
    /// assert!(matches!(Opt::<&str>::try_of(None), Err(Error::NullRejected { .. })));
    /// ```
    pub fn try_of(value: Option<T>) -> Result<Self> {
        guard::require_non_null(value).map(Opt::Present)
    }

    /// Wraps a nullable value, mapping `None` to `Absent`. Never fails.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Opt::Present(value),
            None => Opt::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Opt::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the contained value, or `default` if there is none.
    pub fn value_or(self, default: T) -> T {
        match self {
            Opt::Present(value) => value,
            Opt::Absent => default,
        }
    }

    /// Like [`Opt::value_or`], with a nullable default.
    ///
    /// An absent default is rejected even when a value is present.
    pub fn try_value_or(self, default: Option<T>) -> Result<T> {
        let default = guard::require_non_null(default)?;
        Ok(self.value_or(default))
    }

    /// Returns the contained value, or [`Error::NoValuePresent`].
    pub fn get_or_fail(self) -> Result<T> {
        match self {
            Opt::Present(value) => Ok(value),
            Opt::Absent => Err(Error::NoValuePresent),
        }
    }

    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Present(value) => Opt::Present(value),
            Opt::Absent => Opt::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Opt::of_nullable(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        match opt {
            Opt::Present(value) => Some(value),
            Opt::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullSite;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct NoDefault(u8);

    #[test]
    fn default_needs_no_default_payload() {
        assert_eq!(Opt::<NoDefault>::default(), Opt::Absent);
        assert_eq!(
            Opt::<NoDefault>::default().value_or(NoDefault(1)),
            NoDefault(1)
        );
    }

    #[test]
    fn construction() {
        assert_eq!(Opt::<&str>::empty(), Opt::Absent);
        assert_eq!(Opt::<&str>::default(), Opt::Absent);

        let test = Opt::of("test");
        assert!(test.is_present());
        assert_matches!(test, Opt::Present(value) if value == "test");
        assert_eq!(test.get_or_fail(), Ok("test"));

        assert_eq!(
            Opt::<&str>::try_of(None),
            Err(Error::NullRejected {
                site: NullSite::Argument
            })
        );

        let nullable = Opt::of_nullable(Some("test"));
        assert!(nullable.is_present());
        assert_eq!(nullable.get_or_fail(), Ok("test"));
        assert_eq!(Opt::<&str>::of_nullable(None), Opt::Absent);
    }

    #[test]
    fn extraction() {
        assert_eq!(Opt::of("test").value_or("else"), "test");
        assert_eq!(Opt::empty().value_or("else"), "else");

        assert_eq!(Opt::of(1).try_value_or(Some(2)), Ok(1));
        assert_eq!(Opt::empty().try_value_or(Some(2)), Ok(2));
        assert_matches!(
            Opt::of(1).try_value_or(None),
            Err(Error::NullRejected { .. })
        );

        assert_eq!(Opt::<u8>::empty().get_or_fail(), Err(Error::NoValuePresent));
        assert!(Opt::<u8>::empty().is_absent());
    }

    #[test]
    fn equality_is_by_variant_and_payload() {
        assert_eq!(Opt::<u8>::empty(), Opt::of_nullable(None));
        assert_ne!(Opt::of(1), Opt::of(2));
        assert_ne!(Opt::of(1), Opt::empty());
        assert!(Opt::empty() < Opt::of(0));
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(Opt::from(Some(5)).into_option(), Some(5));
        assert_eq!(Option::<u8>::from(Opt::Absent), None);
        assert_eq!(Opt::of(String::from("x")).as_ref(), Opt::Present(&String::from("x")));
    }
}
