//! Order-insensitive collection equality and hashing.
//!
//! - [`set_eq`] - set-semantics slice comparison
//! - [`unordered_hash`] - commutative hash over any iteration order
//! - [`map_eq`] - map equality across different hasher types
//! - [`map_hash`] - commutative hash for `HashMap`, which has no `Hash`

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::{BuildHasher, DefaultHasher, Hash, Hasher};

/// Compares two slices with set semantics.
///
/// Order is ignored and duplicates collapse: two slices are equal when
/// they have the same length and contain the same set of values.
///
/// # Example
///
/// ```
/// use sniffrs::collections::set_eq;
///
/// assert!(set_eq(&[3, 1, 2], &[1, 2, 3]));
/// assert!(set_eq(&[1, 1, 2], &[2, 2, 1]));
/// assert!(!set_eq(&[1, 2], &[1, 2, 3]));
/// ```
pub fn set_eq<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let left_set: HashSet<&T> = left.iter().collect();
    let right_set: HashSet<&T> = right.iter().collect();
    left_set == right_set
}

/// Computes a hash that is independent of iteration order.
///
/// Per-element hashes are combined with a wrapping sum, so equal
/// multisets hash identically no matter how they are ordered. Useful
/// for hashing the contents of sets and maps.
///
/// # Example
///
/// ```
/// use sniffrs::collections::unordered_hash;
///
/// let a = unordered_hash(&[1, 2, 3]);
/// let b = unordered_hash(&[3, 1, 2]);
/// assert_eq!(a, b);
/// ```
pub fn unordered_hash<T, I>(items: I) -> u64
where
    T: Hash,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .map(|item| hash_one(&item))
        .fold(0u64, u64::wrapping_add)
}

/// Compares two maps entry by entry.
///
/// Unlike `==`, the maps may use different [`BuildHasher`]s.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use sniffrs::collections::map_eq;
///
/// let left: HashMap<&str, i32> = [("a", 1), ("b", 2)].into();
/// let right: HashMap<&str, i32> = [("b", 2), ("a", 1)].into();
/// assert!(map_eq(&left, &right));
/// ```
pub fn map_eq<K, V, S1, S2>(left: &HashMap<K, V, S1>, right: &HashMap<K, V, S2>) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .all(|(key, value)| right.get(key).is_some_and(|other| other == value))
}

/// Computes an order-independent hash of a map's entries.
///
/// `HashMap` does not implement `Hash`; this fills the gap with a
/// commutative sum of per-entry hashes, so two equal maps hash the same
/// regardless of bucket order.
pub fn map_hash<K, V, S>(map: &HashMap<K, V, S>) -> u64
where
    K: Hash,
    V: Hash,
    S: BuildHasher,
{
    map.iter()
        .map(|entry| hash_one(&entry))
        .fold(0u64, u64::wrapping_add)
}

fn hash_one<T: Hash>(item: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish()
}
