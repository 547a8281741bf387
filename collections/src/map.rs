use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
};

use immutils_core::{guard, Opt, Result};
use indexmap::IndexMap;

use crate::{
    hash,
    iter::read_only_iter,
    metrics::{increment, sample},
    set::ImmutableSet,
};

/// An immutable association of keys to values.
///
/// Each key maps to exactly one value; absent keys and values are rejected.
/// Two maps are equal when they hold the same key/value pairs, whatever
/// order they were inserted in. Lookups return an [`Opt`] rather than an
/// `Option`.
#[derive(Clone)]
pub struct ImmutableMap<K, V> {
    data: IndexMap<K, V>,
}

/// A key/value pair.
///
/// Used to build maps with [`ImmutableMap::of`], and yielded (as
/// `Entry<&K, &V>`) when iterating over [`ImmutableMap::entries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

/// A read-only view of the keys of an [`ImmutableMap`].
///
/// The view borrows the map, so it cannot outlive it. Use
/// [`KeySet::to_set`] to get an owned [`ImmutableSet`].
#[derive(Debug)]
pub struct KeySet<'a, K, V> {
    data: &'a IndexMap<K, V>,
}

/// A read-only view of the values of an [`ImmutableMap`].
#[derive(Debug)]
pub struct Values<'a, K, V> {
    data: &'a IndexMap<K, V>,
}

/// A read-only view of the entries of an [`ImmutableMap`].
#[derive(Debug)]
pub struct Entries<'a, K, V> {
    data: &'a IndexMap<K, V>,
}

// The views are plain shared borrows: copying one is free and any copy can be
// iterated again from the start. Derives would require `K: Copy, V: Copy`.
macro_rules! copy_view {
    ( $view:ident ) => {
        impl<K, V> Clone for $view<'_, K, V> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<K, V> Copy for $view<'_, K, V> {}
    };
}

copy_view!(KeySet);
copy_view!(Values);
copy_view!(Entries);

#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: indexmap::map::Keys<'a, K, V>,
}

read_only_iter!(Keys<'a, K, V>, &'a K, "keys");

#[derive(Debug, Clone)]
pub struct ValuesIter<'a, K, V> {
    inner: indexmap::map::Values<'a, K, V>,
}

read_only_iter!(ValuesIter<'a, K, V>, &'a V, "values");

type EntryFn<'a, K, V> = fn((&'a K, &'a V)) -> Entry<&'a K, &'a V>;

#[derive(Clone)]
pub struct EntriesIter<'a, K, V> {
    inner: std::iter::Map<indexmap::map::Iter<'a, K, V>, EntryFn<'a, K, V>>,
}

read_only_iter!(EntriesIter<'a, K, V>, Entry<&'a K, &'a V>, "entries");

impl<'a, K, V> KeySet<'a, K, V> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Keys<'a, K, V> {
        Keys {
            inner: self.data.keys(),
        }
    }
}

impl<K: Hash + Eq, V> KeySet<'_, K, V> {
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V> KeySet<'_, K, V> {
    /// Copies the keys out into an owned set.
    pub fn to_set(&self) -> ImmutableSet<K> {
        increment!("ImmutableMap::copy_keys");
        ImmutableSet::from_index_set(self.data.keys().cloned().collect())
    }
}

// Key views compare and hash like sets: two views, or a view and an
// `ImmutableSet`, are equal when they hold the same keys in any order.
impl<K: Hash + Eq, V, W> PartialEq<KeySet<'_, K, W>> for KeySet<'_, K, V> {
    fn eq(&self, other: &KeySet<'_, K, W>) -> bool {
        self.len() == other.len() && other.iter().all(|key| self.contains(key))
    }
}

impl<K: Hash + Eq, V> Eq for KeySet<'_, K, V> {}

impl<K: Hash + Eq, V> PartialEq<ImmutableSet<K>> for KeySet<'_, K, V> {
    fn eq(&self, other: &ImmutableSet<K>) -> bool {
        self.len() == other.len() && other.iter().all(|key| self.contains(key))
    }
}

impl<K: Hash + Eq, V> PartialEq<KeySet<'_, K, V>> for ImmutableSet<K> {
    fn eq(&self, other: &KeySet<'_, K, V>) -> bool {
        other == self
    }
}

impl<K: Hash, V> Hash for KeySet<'_, K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash::unordered(self.data.keys(), state);
    }
}

/// Renders the keys as `[a, b, c]`, like [`ImmutableSet`].
impl<K: fmt::Display, V> fmt::Display for KeySet<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "]")
    }
}

impl<'a, K, V> IntoIterator for KeySet<'a, K, V> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> ValuesIter<'a, K, V> {
        ValuesIter {
            inner: self.data.values(),
        }
    }
}

impl<'a, K, V> IntoIterator for Values<'a, K, V> {
    type Item = &'a V;
    type IntoIter = ValuesIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Entries<'a, K, V> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> EntriesIter<'a, K, V> {
        let to_entry: EntryFn<'a, K, V> = |(key, value)| Entry::new(key, value);
        EntriesIter {
            inner: self.data.iter().map(to_entry),
        }
    }
}

impl<'a, K, V> IntoIterator for Entries<'a, K, V> {
    type Item = Entry<&'a K, &'a V>;
    type IntoIter = EntriesIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        ImmutableMap {
            data: IndexMap::new(),
        }
    }
}

impl<K, V> ImmutableMap<K, V> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A view of the keys, borrowing this map. Nothing is copied.
    pub fn keys(&self) -> KeySet<'_, K, V> {
        KeySet { data: &self.data }
    }

    /// A view of the values, borrowing this map. Nothing is copied.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { data: &self.data }
    }

    /// A view of the entries, borrowing this map. Nothing is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableMap;
    /// let map = ImmutableMap::from([("one", 1), ("two", 2)]);
    /// let sum: i32 = map.entries().iter().map(|entry| **entry.value()).sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries { data: &self.data }
    }
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Builds a map out of `(key, value)` pairs. If a key appears more than
    /// once, the last value wins.
    pub fn new<I: IntoIterator<Item = (K, V)>>(source: I) -> Self {
        ImmutableMap {
            data: source.into_iter().collect(),
        }
    }

    /// Builds a map out of a nullable source of nullable keys and values.
    ///
    /// Every key and every value is checked before the map is built, so a
    /// rejected source never yields a partially filled map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableMap;
    /// # use immutils_core::{Error, NullSite};
    /// let map = ImmutableMap::try_from_nullable(Some([(Some("one"), Some(1))]));
    /// assert_eq!(map, Ok(ImmutableMap::singleton("one", 1)));
    ///
    /// let map = ImmutableMap::try_from_nullable(Some([(Some("one"), None::<i32>)]));
    /// assert_eq!(map, Err(Error::NullRejected { site: NullSite::Value { index: 0 } }));
    /// ```
    pub fn try_from_nullable<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = (Option<K>, Option<V>)>,
    {
        let source = guard::require_source(source)?;
        Ok(Self::new(guard::require_no_null_entries(source)?))
    }

    pub fn singleton(key: K, value: V) -> Self {
        Self::new([(key, value)])
    }

    pub fn try_singleton(key: Option<K>, value: Option<V>) -> Result<Self> {
        let key = guard::require_non_null(key)?;
        let value = guard::require_non_null(value)?;
        Ok(Self::singleton(key, value))
    }

    /// Builds a map out of explicit entries. If several entries share a key,
    /// the one appearing last wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::{Entry, ImmutableMap};
    /// # use immutils_core::Opt;
    /// let map = ImmutableMap::of([Entry::new("k", 1), Entry::new("k", 2)]);
    /// assert_eq!(map.lookup("k"), Opt::Present(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn of<I: IntoIterator<Item = Entry<K, V>>>(entries: I) -> Self {
        Self::new(entries.into_iter().map(Entry::into_parts))
    }

    /// Like [`ImmutableMap::of`], with nullable entries, keys and values.
    ///
    /// An absent entry is reported as [`NullSite::Element`], an absent key or
    /// value as [`NullSite::Key`] or [`NullSite::Value`].
    ///
    /// [`NullSite::Element`]: immutils_core::NullSite::Element
    /// [`NullSite::Key`]: immutils_core::NullSite::Key
    /// [`NullSite::Value`]: immutils_core::NullSite::Value
    pub fn try_of<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Entry<Option<K>, Option<V>>>>,
    {
        let entries = guard::require_all_non_null(entries)?;
        Self::try_from_nullable(Some(entries.into_iter().map(Entry::into_parts)))
    }

    /// Looks up the value associated with `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableMap;
    /// # use immutils_core::Opt;
    /// let map = ImmutableMap::from([("one".to_owned(), 1), ("two".to_owned(), 2)]);
    /// assert_eq!(map.lookup("one"), Opt::Present(&1));
    /// assert_eq!(map.lookup("three"), Opt::Absent);
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> Opt<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.get(key).into()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.data.values().any(|v| v == value)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> ImmutableMap<K, V> {
    /// Copies the keys out into an owned set.
    pub fn key_set(&self) -> ImmutableSet<K> {
        self.keys().to_set()
    }

    /// Copies the pairs into a new `HashMap`, which the caller is free to
    /// mutate.
    pub fn copy_out(&self) -> HashMap<K, V> {
        self.data
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn copy_with_capacity(&self, additional: usize) -> IndexMap<K, V> {
        increment!("ImmutableMap::copy");
        sample!("ImmutableMap.copy_len", self.len() as f64);

        let mut data = IndexMap::with_capacity(self.len() + additional);
        data.extend(
            self.data
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        data
    }

    /// Returns a new map with the pairs of `self` plus `key -> value`,
    /// replacing any previous value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use immutils_collections::ImmutableMap;
    /// # use immutils_core::Opt;
    /// let map = ImmutableMap::singleton("one", 1);
    /// let bigger = map.copy_and_put("two", 2);
    /// assert_eq!(bigger.len(), 2);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.lookup("two"), Opt::Absent);
    /// ```
    pub fn copy_and_put(&self, key: K, value: V) -> Self {
        let mut data = self.copy_with_capacity(1);
        data.insert(key, value);
        ImmutableMap { data }
    }

    /// Returns a new map with the pairs of `self` plus all of `pairs`. Later
    /// pairs win over earlier ones and over those of `self`.
    pub fn copy_and_put_all<I: IntoIterator<Item = (K, V)>>(&self, pairs: I) -> Self {
        let pairs = pairs.into_iter();
        let mut data = self.copy_with_capacity(pairs.size_hint().0);
        data.extend(pairs);
        ImmutableMap { data }
    }

    /// Returns a new map with the pairs of `self` and `other`, the values of
    /// `other` winning on shared keys.
    pub fn copy_and_merge(&self, other: &ImmutableMap<K, V>) -> Self {
        self.copy_and_put_all(
            other
                .data
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    pub fn try_copy_and_put(&self, key: Option<K>, value: Option<V>) -> Result<Self> {
        let key = guard::require_non_null(key)?;
        let value = guard::require_non_null(value)?;
        Ok(self.copy_and_put(key, value))
    }

    /// Like [`ImmutableMap::copy_and_put_all`] for a nullable source of
    /// nullable pairs. Everything is checked before anything is copied.
    pub fn try_copy_and_put_all<I>(&self, pairs: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = (Option<K>, Option<V>)>,
    {
        let pairs = guard::require_no_null_entries(guard::require_source(pairs)?)?;
        Ok(self.copy_and_put_all(pairs))
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality is already order-independent.
        self.data == other.data
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: Hash, V: Hash> Hash for ImmutableMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash::unordered(self.data.iter(), state);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

/// Renders the map as `{one=1, two=2}`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for ImmutableMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, "}}")
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = Entry<&'a K, &'a V>;
    type IntoIter = EntriesIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries().iter()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<K: Hash + Eq, V> FromIterator<Entry<K, V>> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for ImmutableMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::new(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::ReadOnlyIter;
    use assert_matches::assert_matches;
    use immutils_core::{Error, NullSite};
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn one_two() -> ImmutableMap<&'static str, i32> {
        ImmutableMap::of([Entry::new("one", 1), Entry::new("two", 2)])
    }

    #[test]
    fn does_copy() {
        let mut source = HashMap::new();
        source.insert("one", 1);

        let map: ImmutableMap<_, _> = source.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(map.len(), 1);
        source.insert("two", 2);
        assert_eq!(source.len(), 2);
        assert_eq!(map.len(), 1);
        assert!(map.lookup("two").is_absent());

        let mut copy = map.copy_out();
        assert_eq!(copy.len(), 1);
        copy.insert("two", 2);
        assert_eq!(copy.len(), 2);
        assert_eq!(map.len(), 1);

        let copy2 = map.copy_and_put("two", 2);
        assert_eq!(copy2.len(), 2);
        assert_eq!(map.len(), 1);

        let copy3 = map.copy_and_put_all(source.iter().map(|(k, v)| (*k, *v)));
        assert_eq!(copy3.len(), 2);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn constructors() {
        let single = ImmutableMap::singleton("one", 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single.lookup("one").get_or_fail(), Ok(&1));
        assert!(!single.lookup("two").is_present());

        assert!(ImmutableMap::<u8, u8>::empty().is_empty());

        let tuples = one_two();
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples.lookup("one"), Opt::Present(&1));
        assert_eq!(tuples.lookup("two"), Opt::Present(&2));
        assert_eq!(tuples.lookup("three"), Opt::Absent);
    }

    #[test]
    fn last_write_wins() {
        let map = ImmutableMap::of([Entry::new("k", 1), Entry::new("k", 2)]);
        assert_eq!(map.lookup("k"), Opt::Present(&2));

        let merged = one_two().copy_and_merge(&ImmutableMap::from([("two", 20), ("three", 3)]));
        assert_eq!(merged, ImmutableMap::from([("one", 1), ("two", 20), ("three", 3)]));

        let put = one_two().copy_and_put_all([("one", 10), ("one", 100)]);
        assert_eq!(put.lookup("one"), Opt::Present(&100));
    }

    #[test]
    fn display_eq_hash() {
        assert_eq!(ImmutableMap::<u8, u8>::empty().to_string(), "{}");
        assert_eq!(ImmutableMap::singleton("one", 1).to_string(), "{one=1}");
        assert_eq!(
            ImmutableMap::from([("one", 1), ("two", 2), ("three", 3)]).to_string(),
            "{one=1, two=2, three=3}"
        );

        let one = ImmutableMap::singleton("one", 1);
        assert_eq!(one, ImmutableMap::of([Entry::new("one", 1)]));
        assert_ne!(one, ImmutableMap::empty());
        assert_ne!(one, ImmutableMap::singleton("one", 2));
        assert_eq!(
            ImmutableMap::from([("a", 1), ("b", 2)]),
            ImmutableMap::from([("b", 2), ("a", 1)])
        );

        assert_eq!(hash_of(&one), hash_of(&ImmutableMap::singleton("one", 1)));
        assert_ne!(hash_of(&one), hash_of(&ImmutableMap::<&str, i32>::empty()));
        assert_eq!(
            hash_of(&ImmutableMap::from([("a", 1), ("b", 2)])),
            hash_of(&ImmutableMap::from([("b", 2), ("a", 1)]))
        );
    }

    #[test]
    fn operations() {
        let tuples = one_two();

        assert!(tuples.contains_key("one"));
        assert!(!tuples.contains_key("three"));

        assert!(tuples.contains_value(&2));
        assert!(!tuples.contains_value(&3));

        let keys = tuples.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("one"));
        assert!(!keys.contains("three"));
        assert!(keys == ImmutableSet::from(["two", "one"]));
        assert_eq!(tuples.key_set(), ImmutableSet::from(["one", "two"]));

        let mut seen = 0;
        for entry in tuples.entries() {
            seen += 1;
            assert!(["one", "two"].contains(entry.key()));
            assert!([1, 2].contains(entry.value()));
        }
        assert_eq!(seen, 2);

        let mut values: Vec<i32> = tuples.values().iter().copied().collect();
        values.sort();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn views_are_read_only() {
        let tuples = one_two();

        assert_eq!(
            tuples.values().iter().remove(),
            Err(Error::UnsupportedMutation { view: "values" })
        );
        assert_eq!(
            tuples.entries().iter().remove(),
            Err(Error::UnsupportedMutation { view: "entries" })
        );
        assert_eq!(
            tuples.keys().iter().remove(),
            Err(Error::UnsupportedMutation { view: "keys" })
        );
        assert_eq!(tuples.len(), 2);

        // A view can be walked again from the start.
        let values = tuples.values();
        assert_eq!(values.iter().count(), 2);
        assert_eq!(values.into_iter().count(), 2);
        assert_eq!(values.iter().count(), 2);
    }

    #[test]
    fn key_views_are_sets() {
        let forward = ImmutableMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let backward = ImmutableMap::from([("c", 30), ("b", 20), ("a", 10)]);
        let fewer = ImmutableMap::from([("a", 1), ("b", 2)]);

        assert_eq!(forward.keys(), backward.keys());
        assert_ne!(forward.keys(), fewer.keys());
        assert_eq!(hash_of(&forward.keys()), hash_of(&backward.keys()));
        assert_ne!(hash_of(&forward.keys()), hash_of(&fewer.keys()));

        let set = ImmutableSet::from(["b", "c", "a"]);
        assert_eq!(forward.keys(), set);
        assert_eq!(set, backward.keys());
        assert_ne!(set, fewer.keys());
        assert_eq!(hash_of(&set), hash_of(&backward.keys()));

        assert_eq!(fewer.keys().to_string(), "[a, b]");
        assert_eq!(fewer.keys().to_string(), fewer.key_set().to_string());
        assert_eq!(ImmutableMap::<u8, u8>::empty().keys().to_string(), "[]");
    }

    #[test]
    fn not_null() {
        assert_eq!(
            ImmutableMap::try_from_nullable(Some(vec![(Some("one"), None::<i32>)])),
            Err(Error::NullRejected {
                site: NullSite::Value { index: 0 }
            })
        );
        assert_eq!(
            ImmutableMap::try_from_nullable(Some(vec![(None::<&str>, Some(1))])),
            Err(Error::NullRejected {
                site: NullSite::Key { index: 0 }
            })
        );
        assert_matches!(
            ImmutableMap::<&str, i32>::try_from_nullable(None::<Vec<(Option<&str>, Option<i32>)>>),
            Err(Error::NullRejected {
                site: NullSite::Source
            })
        );
        assert_matches!(
            ImmutableMap::try_singleton(Some("one"), None::<i32>),
            Err(Error::NullRejected { .. })
        );

        assert_eq!(
            ImmutableMap::try_of([Some(Entry::new(Some("one"), Some(1))), None]),
            Err(Error::NullRejected {
                site: NullSite::Element { index: 1 }
            })
        );
        assert_eq!(
            ImmutableMap::try_of([
                Some(Entry::new(Some("one"), Some(1))),
                Some(Entry::new(Some("two"), None))
            ]),
            Err(Error::NullRejected {
                site: NullSite::Value { index: 1 }
            })
        );
        assert_eq!(
            ImmutableMap::try_of([Some(Entry::new(Some("one"), Some(1)))]),
            Ok(ImmutableMap::singleton("one", 1))
        );

        let map = one_two();
        assert_matches!(
            map.try_copy_and_put(None, Some(3)),
            Err(Error::NullRejected { .. })
        );
        assert_matches!(
            map.try_copy_and_put_all(Some([(Some("three"), None)])),
            Err(Error::NullRejected { .. })
        );
        assert_eq!(
            map.try_copy_and_put_all(Some([(Some("three"), Some(3))])),
            Ok(map.copy_and_put("three", 3))
        );
        assert_eq!(map.len(), 2);
    }
}
