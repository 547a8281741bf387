use std::{fmt, ops::Index};

use immutils_core::{guard, Error, Opt, Result};

use crate::{
    iter::read_only_iter,
    metrics::{increment, sample},
};

/// An immutable ordered collection.
///
/// Duplicates are allowed, absent elements are not. The list owns its
/// elements: every constructor takes a snapshot of its source, and every
/// `copy_and_*` operation clones the whole backing store before applying its
/// change, leaving `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImmutableList<E> {
    data: Vec<E>,
}

#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    inner: std::slice::Iter<'a, E>,
}

read_only_iter!(Iter<'a, E>, &'a E, "list");

impl<E> Default for ImmutableList<E> {
    fn default() -> Self {
        ImmutableList { data: Vec::new() }
    }
}

impl<E> ImmutableList<E> {
    /// Builds a list out of `source`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableList;
    /// let list = ImmutableList::new(vec![1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(2), Ok(&3));
    /// ```
    pub fn new<I: IntoIterator<Item = E>>(source: I) -> Self {
        ImmutableList {
            data: source.into_iter().collect(),
        }
    }

    /// Builds a list out of a nullable source of nullable elements.
    ///
    /// Fails if the source itself or any of its elements is absent. In that
    /// case no list is built at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableList;
    /// # use immutils_core::{Error, NullSite};
    /// let list = ImmutableList::try_from_nullable(Some([Some(1), Some(2)]));
    /// assert_eq!(list, Ok(ImmutableList::from([1, 2])));
    ///
    /// let list = ImmutableList::try_from_nullable(Some([Some(1), None, Some(3)]));
    /// assert_eq!(
    ///     list,
    ///     Err(Error::NullRejected { site: NullSite::Element { index: 1 } })
    /// );
    /// ```
    pub fn try_from_nullable<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let source = guard::require_source(source)?;
        Ok(ImmutableList {
            data: guard::require_all_non_null(source)?,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn singleton(element: E) -> Self {
        ImmutableList {
            data: vec![element],
        }
    }

    pub fn try_singleton(element: Option<E>) -> Result<Self> {
        guard::require_non_null(element).map(Self::singleton)
    }

    /// The number of elements in this list.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the length is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] unless `index < self.len()`.
    pub fn get(&self, index: usize) -> Result<&E> {
        self.data.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn first(&self) -> Opt<&E> {
        self.data.first().into()
    }

    pub fn last(&self) -> Opt<&E> {
        self.data.last().into()
    }

    /// Returns an iterator over references to the elements, in order.
    ///
    /// Each call starts over from the first element.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.data.iter(),
        }
    }
}

impl<E: PartialEq> ImmutableList<E> {
    pub fn contains(&self, element: &E) -> bool {
        self.data.contains(element)
    }

    /// Position of the first occurrence of `element`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableList;
    /// # use immutils_core::Opt;
    /// let list = ImmutableList::from(["a", "b", "b"]);
    /// assert_eq!(list.index_of(&"b"), Opt::Present(1));
    /// assert_eq!(list.index_of(&"c"), Opt::Absent);
    /// ```
    pub fn index_of(&self, element: &E) -> Opt<usize> {
        self.data.iter().position(|e| e == element).into()
    }
}

impl<E: Clone> ImmutableList<E> {
    /// Builds a list out of a borrowed slice, cloning every element.
    pub fn from_slice(source: &[E]) -> Self {
        ImmutableList {
            data: source.to_vec(),
        }
    }

    /// Copies the elements into a new `Vec`, which the caller is free to
    /// mutate.
    pub fn copy_out(&self) -> Vec<E> {
        self.data.clone()
    }

    fn copy_with_capacity(&self, additional: usize) -> Vec<E> {
        increment!("ImmutableList::copy");
        sample!("ImmutableList.copy_len", self.len() as f64);

        let mut data = Vec::with_capacity(self.len() + additional);
        data.extend_from_slice(&self.data);
        data
    }

    /// Returns a new list made of the elements of `self` followed by
    /// `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableList;
    /// let list = ImmutableList::from([1, 2, 3]);
    /// let longer = list.copy_and_append(4);
    /// assert_eq!(longer.len(), 4);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn copy_and_append(&self, element: E) -> Self {
        let mut data = self.copy_with_capacity(1);
        data.push(element);
        ImmutableList { data }
    }

    /// Returns a new list made of the elements of `self` followed by those
    /// of `elements`, in iteration order.
    pub fn copy_and_append_all<I: IntoIterator<Item = E>>(&self, elements: I) -> Self {
        let elements = elements.into_iter();
        let mut data = self.copy_with_capacity(elements.size_hint().0);
        data.extend(elements);
        ImmutableList { data }
    }

    pub fn try_copy_and_append(&self, element: Option<E>) -> Result<Self> {
        let element = guard::require_non_null(element)?;
        Ok(self.copy_and_append(element))
    }

    /// Like [`ImmutableList::copy_and_append_all`] for a nullable source of
    /// nullable elements. Everything is checked before anything is copied.
    pub fn try_copy_and_append_all<I>(&self, elements: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let elements = guard::require_all_non_null(guard::require_source(elements)?)?;
        Ok(self.copy_and_append_all(elements))
    }
}

impl<'a, E> IntoIterator for &'a ImmutableList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for ImmutableList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<E> FromIterator<E> for ImmutableList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<E, const N: usize> From<[E; N]> for ImmutableList<E> {
    fn from(elements: [E; N]) -> Self {
        Self::new(elements)
    }
}

impl<E> Index<usize> for ImmutableList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

/// Renders the list as `[1, 2, 3]`.
impl<E: fmt::Display> fmt::Display for ImmutableList<E> {
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
