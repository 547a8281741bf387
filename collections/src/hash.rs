//! Hashing that does not depend on iteration order.
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Combines the hashes of `items` so that any permutation gives the same
/// result. Each item is hashed on its own with fixed keys, then the results
/// are summed.
pub(crate) fn unordered<H: Hasher, T: Hash>(items: impl Iterator<Item = T>, state: &mut H) {
    let mut len = 0usize;
    let mut sum = 0u64;
    for item in items {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        sum = sum.wrapping_add(hasher.finish());
        len += 1;
    }
    state.write_usize(len);
    state.write_u64(sum);
}
