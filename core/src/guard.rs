//! Checks that reject absent values before anything is built from them.
//!
//! Absent values are `None`s coming in through the nullable entry points
//! (`try_*` constructors and friends). Every check here either returns the
//! whole validated input, unwrapped, or an error: a caller never gets to see a
//! partially validated snapshot.
use crate::error::{Error, NullSite, Result};

fn reject(site: NullSite) -> Error {
    log::trace!("rejecting absent {site}");
    Error::NullRejected { site }
}

/// Returns the value if it is present.
///
/// # Examples
///
/// ```rust
/// # use immutils_core::{guard, Error, NullSite};
/// assert_eq!(guard::require_non_null(Some(3)), Ok(3));
/// assert_eq!(
///     guard::require_non_null::<i32>(None),
///     Err(Error::NullRejected { site: NullSite::Argument })
/// );
/// ```
pub fn require_non_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| reject(NullSite::Argument))
}

/// Like [`require_non_null`], for a source collection as a whole.
pub fn require_source<I>(source: Option<I>) -> Result<I> {
    source.ok_or_else(|| reject(NullSite::Source))
}

/// Checks every item, in iteration order, and returns them unwrapped.
///
/// Fails on the first absent item; the error reports its position.
pub fn require_all_non_null<T, I>(items: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let items = items.into_iter();
    let mut checked = Vec::with_capacity(items.size_hint().0);
    for (index, item) in items.enumerate() {
        checked.push(item.ok_or_else(|| reject(NullSite::Element { index }))?);
    }
    Ok(checked)
}

/// Checks every key, then every value, of a mapping-like source.
///
/// Nothing is returned until both passes succeed, so an absent key is always
/// reported before an absent value, whatever their positions.
pub fn require_no_null_entries<K, V, I>(entries: I) -> Result<Vec<(K, V)>>
where
    I: IntoIterator<Item = (Option<K>, Option<V>)>,
{
    let raw: Vec<_> = entries.into_iter().collect();

    if let Some(index) = raw.iter().position(|(key, _)| key.is_none()) {
        return Err(reject(NullSite::Key { index }));
    }
    if let Some(index) = raw.iter().position(|(_, value)| value.is_none()) {
        return Err(reject(NullSite::Value { index }));
    }

    // Both passes succeeded, so `zip` keeps every entry.
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| key.zip(value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_non_null() {
        assert_eq!(
            require_all_non_null([Some(1), Some(2), Some(3)]),
            Ok(vec![1, 2, 3])
        );
        assert_eq!(require_all_non_null(Vec::<Option<u8>>::new()), Ok(vec![]));
        assert_eq!(
            require_all_non_null([Some(1), Some(2), None, Some(4), None]),
            Err(Error::NullRejected {
                site: NullSite::Element { index: 2 }
            })
        );
    }

    #[test]
    fn source() {
        assert_eq!(require_source(Some(vec![1])), Ok(vec![1]));
        assert_matches!(
            require_source::<Vec<u8>>(None),
            Err(Error::NullRejected {
                site: NullSite::Source
            })
        );
    }

    #[test]
    fn no_null_entries() {
        assert_eq!(
            require_no_null_entries([(Some("test"), Some("test"))]),
            Ok(vec![("test", "test")])
        );
        assert_eq!(
            require_no_null_entries(Vec::<(Option<u8>, Option<u8>)>::new()),
            Ok(vec![])
        );
        assert_eq!(
            require_no_null_entries([(Some("test"), None::<&str>)]),
            Err(Error::NullRejected {
                site: NullSite::Value { index: 0 }
            })
        );
        assert_eq!(
            require_no_null_entries([(None::<&str>, Some("test"))]),
            Err(Error::NullRejected {
                site: NullSite::Key { index: 0 }
            })
        );
    }

    #[test]
    fn keys_are_checked_before_values() {
        let entries = [(Some(1), None), (Some(2), Some('b')), (None, Some('c'))];
        assert_eq!(
            require_no_null_entries(entries),
            Err(Error::NullRejected {
                site: NullSite::Key { index: 2 }
            })
        );
    }
}
