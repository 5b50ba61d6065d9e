//! Symmetric difference of two collections under an identity rule.

use std::collections::HashSet;
use std::hash::Hash;

/// A value found in exactly one of two collections, tagged with its side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence<T> {
    pub value: T,
    pub in_a: bool,
    pub in_b: bool,
}

impl<T> Presence<T> {
    pub fn only_in_a(value: T) -> Self {
        Self {
            value,
            in_a: true,
            in_b: false,
        }
    }

    pub fn only_in_b(value: T) -> Self {
        Self {
            value,
            in_a: false,
            in_b: true,
        }
    }

    /// The same presence with the sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            value: self.value,
            in_a: self.in_b,
            in_b: self.in_a,
        }
    }
}

/// Symmetric difference under plain equality.
pub fn symmetric_difference<T>(a: &[T], b: &[T]) -> Vec<Presence<T>>
where
    T: Clone + Eq + Hash,
{
    symmetric_difference_by_key(a, b, |value| value)
}

/// Symmetric difference where two values are equal iff their keys are.
///
/// Values only in `a` come first in `a`'s order, then values only in `b` in
/// `b`'s order. Repeated keys within one side are reported once.
pub fn symmetric_difference_by_key<'a, T, K, F>(a: &'a [T], b: &'a [T], key: F) -> Vec<Presence<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let keys_a: HashSet<K> = a.iter().map(&key).collect();
    let keys_b: HashSet<K> = b.iter().map(&key).collect();

    // Keys only in `a` and keys only in `b` are disjoint, so one set suffices.
    let mut emitted: HashSet<K> = HashSet::new();
    let mut changes = Vec::new();

    for value in a {
        let k = key(value);
        if !keys_b.contains(&k) && emitted.insert(k) {
            changes.push(Presence::only_in_a(value.clone()));
        }
    }
    for value in b {
        let k = key(value);
        if !keys_a.contains(&k) && emitted.insert(k) {
            changes.push(Presence::only_in_b(value.clone()));
        }
    }

    changes
}
