use std::cmp::Ordering;

use crate::key::{InternalKey, extract_user_key, raw_trailer};

/// Total order over user keys, supplied by whoever configures the engine.
///
/// Must be consistent for the lifetime of a database: every SSTable on disk
/// was sorted with it.
pub trait Comparator: Send + Sync {
    /// Persisted alongside the data so a mismatched comparator can be detected.
    fn name(&self) -> &'static str;

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;
}

/// Lexicographic byte order. The default user comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytewiseComparator;

impl Comparator for BytewiseComparator {
    fn name(&self) -> &'static str {
        "lsm.BytewiseComparator"
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }
}

/// Orders encoded internal keys:
///
/// 1. user key ascending (by the wrapped user comparator)
/// 2. sequence descending (newest version first)
/// 3. value type descending
///
/// Steps 2 and 3 together are just "trailer descending", since the sequence
/// occupies the high bits of the trailer.
///
/// This sits on the hot path of every merge, lookup and compaction, so it
/// assumes well-formed keys and does not validate trailers.
#[derive(Debug, Clone)]
pub struct InternalKeyComparator<C: Comparator = BytewiseComparator> {
    user: C,
}

impl<C: Comparator> InternalKeyComparator<C> {
    pub fn new(user: C) -> Self {
        InternalKeyComparator { user }
    }

    /// The wrapped user key comparator.
    pub fn user_comparator(&self) -> &C {
        &self.user
    }

    /// Compare two owned internal keys.
    pub fn compare_keys(&self, a: &InternalKey, b: &InternalKey) -> Ordering {
        self.compare(a.as_bytes(), b.as_bytes())
    }
}

impl Default for InternalKeyComparator<BytewiseComparator> {
    fn default() -> Self {
        InternalKeyComparator::new(BytewiseComparator)
    }
}

impl<C: Comparator> Comparator for InternalKeyComparator<C> {
    fn name(&self) -> &'static str {
        "lsm.InternalKeyComparator"
    }

    /// # Panics
    /// Panics if either key is shorter than the 8-byte trailer.
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.user
            .compare(extract_user_key(a), extract_user_key(b))
            .then_with(|| raw_trailer(b).cmp(&raw_trailer(a)))
    }
}
