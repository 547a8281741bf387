//! Inputs shared by the collection benchmarks.

/// `"key-0"`, `"key-1"`, ... up to `len` strings.
pub fn numbered_strings(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("key-{i}")).collect()
}

/// Pairs of [`numbered_strings`] and their index.
pub fn numbered_entries(len: usize) -> Vec<(String, usize)> {
    numbered_strings(len).into_iter().zip(0..).collect()
}
