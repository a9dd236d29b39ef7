//! [`Seq`]: the growable, ordered container declaration lists are built in.
//!
//! Serializers accumulate records here before encoding and rebuild the same
//! lists after decoding (a declaration's field list, a module's symbol
//! table).  The usage profile is batch-build then read-mostly, so storage is
//! kept at exactly `len()` slots after every operation: each mutation
//! reallocates to the new exact size instead of keeping amortized spare
//! capacity.  That makes single-element mutation O(n), which is fine for
//! these lists and keeps resident memory equal to live content.
//!
//! Out-of-range positions are defined errors ([`SeqError::OutOfBounds`]) and
//! popping an empty sequence is `None`; nothing here panics on bad input.
//!
//! Read access goes through `Deref<Target = [T]>`, so indexing, slicing and
//! iteration all work directly on a `Seq`.

use std::mem;
use std::ops::{Deref, DerefMut};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Growable ordered sequence with zero-slack storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seq<T> {
    items: Box<[T]>,
}

impl<T> Seq<T> {
    /// An empty sequence.  Allocates nothing.
    pub fn new() -> Self {
        Seq {
            items: Vec::new().into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slots.  Always equal to [`len`](Seq::len): the backing
    /// store is reallocated to the exact new size by every mutation.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Append `value` at position `len()`.
    pub fn push(&mut self, value: T) {
        let mut v = self.take_vec();
        v.push(value);
        self.put_vec(v);
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let mut v = self.take_vec();
        let out = v.pop();
        self.put_vec(v);
        out
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        if index > self.len() {
            return Err(SeqError::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        let mut v = self.take_vec();
        v.insert(index, value);
        self.put_vec(v);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `[index+1, len)`
    /// one slot left.
    pub fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        if index >= self.len() {
            return Err(SeqError::OutOfBounds {
                index,
                len: self.len(),
            });
        }
        let mut v = self.take_vec();
        let out = v.remove(index);
        self.put_vec(v);
        Ok(out)
    }

    /// Release the backing storage and reset to the empty state.
    pub fn clear(&mut self) {
        self.items = Vec::new().into_boxed_slice();
    }

    fn take_vec(&mut self) -> Vec<T> {
        mem::take(&mut self.items).into_vec()
    }

    fn put_vec(&mut self, v: Vec<T>) {
        // into_boxed_slice drops any spare capacity, restoring the
        // storage-equals-content invariant.
        self.items = v.into_boxed_slice();
    }
}

impl<T: Clone> Seq<T> {
    /// Append every element of `src` in order.  `src` is unmodified.
    pub fn concat(&mut self, src: &Seq<T>) {
        let mut v = self.take_vec();
        v.extend_from_slice(src);
        self.put_vec(v);
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::new()
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for Seq<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq {
            items: iter.into_iter().collect::<Vec<T>>().into_boxed_slice(),
        }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut v = self.take_vec();
        v.extend(iter);
        self.put_vec(v);
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Seq<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
