//! Sets with algebraic operations.
//!
//! An [ExtendedSet] remembers the order in which elements were first inserted,
//! and all operations that produce a new set preserve the order of the calling set.
//!
//! ```
//! use algebrica::set::ExtendedSet;
//!
//! let a: ExtendedSet<_> = [1, 2, 3].into();
//! let b: ExtendedSet<_> = [2, 3, 4].into();
//! assert_eq!(a.intersection(&b).to_vec(), vec![2, 3]);
//! assert_eq!(a.difference(&b).to_vec(), vec![1]);
//! ```

use std::{
    collections::{BTreeSet, HashSet as StdHashSet},
    fmt::{self, Display},
    hash::{BuildHasher, Hash},
};

use ahash::{HashSet, HashSetExt};

use crate::printer::{PrintOptions, SetPrinter};

/// A collection that supports membership tests and iteration, which is
/// all that the set operations of [ExtendedSet] need from their operand.
pub trait SetLike<T> {
    /// Check if `e` is a member of the collection.
    fn has(&self, e: &T) -> bool;
    /// Iterate over the members of the collection.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// An insertion-ordered set of unique elements.
#[derive(Clone)]
pub struct ExtendedSet<T> {
    order: Vec<T>,
    members: HashSet<T>,
}

impl<T: Hash + Eq + Clone> ExtendedSet<T> {
    /// Create an empty set.
    pub fn new() -> ExtendedSet<T> {
        ExtendedSet {
            order: vec![],
            members: HashSet::new(),
        }
    }

    /// Create an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> ExtendedSet<T> {
        ExtendedSet {
            order: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Add `e` to the set. Returns `false` if it was already present, in which
    /// case its position is unchanged.
    pub fn insert(&mut self, e: T) -> bool {
        if self.members.contains(&e) {
            return false;
        }

        self.members.insert(e.clone());
        self.order.push(e);
        true
    }

    /// Remove `e` from the set. Returns `true` if it was present.
    pub fn remove(&mut self, e: &T) -> bool {
        if !self.members.remove(e) {
            return false;
        }

        if let Some(pos) = self.order.iter().position(|x| x == e) {
            self.order.remove(pos);
        }
        true
    }

    pub fn contains(&self, e: &T) -> bool {
        self.members.contains(e)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    /// Copy the elements in insertion order into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.order.clone()
    }

    /// Get the set of all elements that are in `self` or in `other`.
    /// The elements of `self` come first, followed by the new elements of `other`.
    pub fn union(&self, other: &impl SetLike<T>) -> ExtendedSet<T> {
        let mut res = self.clone();
        for e in other.elements() {
            res.insert(e.clone());
        }
        res
    }

    /// Get the set of all elements of `self` that are also in `other`.
    pub fn intersection(&self, other: &impl SetLike<T>) -> ExtendedSet<T> {
        self.iter().filter(|e| other.has(e)).cloned().collect()
    }

    /// Get the set of all elements of `self` that are not in `other`.
    pub fn difference(&self, other: &impl SetLike<T>) -> ExtendedSet<T> {
        self.iter().filter(|e| !other.has(e)).cloned().collect()
    }

    /// Check if every element of `self` is in `other`. The empty set is a subset of every set.
    pub fn is_subset_of(&self, other: &impl SetLike<T>) -> bool {
        self.iter().all(|e| other.has(e))
    }

    /// Check if every element of `other` is in `self`.
    pub fn is_superset_of(&self, other: &impl SetLike<T>) -> bool {
        other.elements().all(|e| self.contains(e))
    }
}

impl<T: Hash + Eq + Clone> Default for ExtendedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> SetLike<T> for ExtendedSet<T> {
    fn has(&self, e: &T) -> bool {
        self.contains(e)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SetLike<T> for StdHashSet<T, S> {
    fn has(&self, e: &T) -> bool {
        self.contains(e)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    fn has(&self, e: &T) -> bool {
        self.contains(e)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for ExtendedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = ExtendedSet::new();
        s.extend(iter);
        s
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for ExtendedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

impl<T: Hash + Eq + Clone, const N: usize> From<[T; N]> for ExtendedSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Hash + Eq + Clone> From<Vec<T>> for ExtendedSet<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<T> From<ExtendedSet<T>> for Vec<T> {
    fn from(s: ExtendedSet<T>) -> Self {
        s.order
    }
}

impl<T> IntoIterator for ExtendedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ExtendedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Two sets are equal when they have the same members, regardless of order.
impl<T: Hash + Eq> PartialEq for ExtendedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Hash + Eq> Eq for ExtendedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ExtendedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.order.iter()).finish()
    }
}

impl<T: Hash + Eq + Clone + Display> Display for ExtendedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SetPrinter::new_with_options(self, PrintOptions::from_fmt(f)).fmt(f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ExtendedSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.order, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Hash + Eq + Clone> serde::Deserialize<'de>
    for ExtendedSet<T>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(ExtendedSet::from)
    }
}
