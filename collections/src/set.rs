use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
};

use immutils_core::{guard, Result};
use indexmap::IndexSet;

use crate::{
    hash,
    iter::read_only_iter,
    metrics::{increment, sample},
};

/// An immutable unordered collection without duplicates.
///
/// Absent elements are rejected. Equality and hashing ignore the order in
/// which elements were added. Iteration order is unspecified, but stays the
/// same across iterations of one instance.
#[derive(Clone)]
pub struct ImmutableSet<E> {
    data: IndexSet<E>,
}

#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    inner: indexmap::set::Iter<'a, E>,
}

read_only_iter!(Iter<'a, E>, &'a E, "set");

impl<E> Default for ImmutableSet<E> {
    fn default() -> Self {
        ImmutableSet {
            data: IndexSet::new(),
        }
    }
}

impl<E> ImmutableSet<E> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.data.iter(),
        }
    }
}

impl<E: Hash + Eq> ImmutableSet<E> {
    /// Builds a set out of `source`. Duplicates are kept once.
    pub fn new<I: IntoIterator<Item = E>>(source: I) -> Self {
        ImmutableSet {
            data: source.into_iter().collect(),
        }
    }

    /// Builds a set out of a nullable source of nullable elements.
    ///
    /// Fails if the source itself or any of its elements is absent.
    pub fn try_from_nullable<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let source = guard::require_source(source)?;
        Ok(Self::new(guard::require_all_non_null(source)?))
    }

    pub fn singleton(element: E) -> Self {
        Self::new([element])
    }

    pub fn try_singleton(element: Option<E>) -> Result<Self> {
        guard::require_non_null(element).map(Self::singleton)
    }

    /// Membership test. `element` may be any type the elements can be
    /// borrowed as, e.g. `&str` for a set of `String`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableSet;
    /// let set = ImmutableSet::new(["one".to_owned(), "two".to_owned()]);
    /// assert!(set.contains("one"));
    /// assert!(!set.contains("three"));
    /// ```
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains(element)
    }

    pub(crate) fn from_index_set(data: IndexSet<E>) -> Self {
        ImmutableSet { data }
    }
}

impl<E: Hash + Eq + Clone> ImmutableSet<E> {
    pub fn from_slice(source: &[E]) -> Self {
        Self::new(source.iter().cloned())
    }

    /// Copies the elements into a new `HashSet`, which the caller is free to
    /// mutate.
    pub fn copy_out(&self) -> HashSet<E> {
        self.data.iter().cloned().collect()
    }

    fn copy_with_capacity(&self, additional: usize) -> IndexSet<E> {
        increment!("ImmutableSet::copy");
        sample!("ImmutableSet.copy_len", self.len() as f64);

        let mut data = IndexSet::with_capacity(self.len() + additional);
        data.extend(self.data.iter().cloned());
        data
    }

    /// Returns a new set with the elements of `self` and `element`.
    ///
    /// Adding an element that is already there gives an equal set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableSet;
    /// let set = ImmutableSet::from(["one"]);
    /// assert_eq!(set.copy_and_add("two").len(), 2);
    /// assert_eq!(set.copy_and_add("one").len(), 1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn copy_and_add(&self, element: E) -> Self {
        let mut data = self.copy_with_capacity(1);
        data.insert(element);
        ImmutableSet { data }
    }

    pub fn copy_and_add_all<I: IntoIterator<Item = E>>(&self, elements: I) -> Self {
        let elements = elements.into_iter();
        let mut data = self.copy_with_capacity(elements.size_hint().0);
        data.extend(elements);
        ImmutableSet { data }
    }

    pub fn try_copy_and_add(&self, element: Option<E>) -> Result<Self> {
        let element = guard::require_non_null(element)?;
        Ok(self.copy_and_add(element))
    }

    pub fn try_copy_and_add_all<I>(&self, elements: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let elements = guard::require_all_non_null(guard::require_source(elements)?)?;
        Ok(self.copy_and_add_all(elements))
    }
}

impl<E: Hash + Eq> PartialEq for ImmutableSet<E> {
    fn eq(&self, other: &Self) -> bool {
        // IndexSet equality is already order-independent.
        self.data == other.data
    }
}

impl<E: Hash + Eq> Eq for ImmutableSet<E> {}

impl<E: Hash> Hash for ImmutableSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash::unordered(self.data.iter(), state);
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

/// Renders the set as `[a, b, c]`.
impl<E: fmt::Display> fmt::Display for ImmutableSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<'a, E> IntoIterator for &'a ImmutableSet<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for ImmutableSet<E> {
    type Item = E;
    type IntoIter = indexmap::set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<E: Hash + Eq> FromIterator<E> for ImmutableSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<E: Hash + Eq, const N: usize> From<[E; N]> for ImmutableSet<E> {
    fn from(elements: [E; N]) -> Self {
        Self::new(elements)
    }
}
