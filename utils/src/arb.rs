//! Generators for `arbtest` properties.
//!
//! The nullable variants produce `None`s with a small probability, so that a
//! property sees both sources that pass the absent-value checks and sources
//! that fail them.
use arbitrary::{Arbitrary, Result, Unstructured};

/// One in `NULL_ODDS` generated items is absent.
const NULL_ODDS: u32 = 16;

// u.arbitrary() generates very short vecs by default:
// https://github.com/matklad/arbtest/issues/8
pub fn arb_vec<'a, T: Arbitrary<'a>>(u: &mut Unstructured<'a>) -> Result<Vec<T>> {
    let len = u.arbitrary_len::<T>()?;
    std::iter::from_fn(|| Some(u.arbitrary::<T>()))
        .take(len)
        .collect()
}

pub fn arb_nullable<'a, T: Arbitrary<'a>>(u: &mut Unstructured<'a>) -> Result<Option<T>> {
    if u.ratio(1, NULL_ODDS)? {
        Ok(None)
    } else {
        u.arbitrary().map(Some)
    }
}

pub fn arb_nullable_vec<'a, T: Arbitrary<'a>>(
    u: &mut Unstructured<'a>,
) -> Result<Vec<Option<T>>> {
    let len = u.arbitrary_len::<T>()?;
    std::iter::from_fn(|| Some(arb_nullable(u)))
        .take(len)
        .collect()
}

pub fn arb_nullable_entries<'a, K: Arbitrary<'a>, V: Arbitrary<'a>>(
    u: &mut Unstructured<'a>,
) -> Result<Vec<(Option<K>, Option<V>)>> {
    let len = u.arbitrary_len::<(K, V)>()?;
    let mut entry = || -> Result<(Option<K>, Option<V>)> {
        Ok((arb_nullable(u)?, arb_nullable(u)?))
    };
    std::iter::from_fn(|| Some(entry())).take(len).collect()
}
