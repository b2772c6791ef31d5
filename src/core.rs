//! Core traits and adaptors for msdsort.
//!
//! This module defines:
//! - [`KeyAccessor`]: read access to the byte key at a position.
//! - [`KeySwap`]: exchanges the elements behind two positions.
//! - [`ByKey`]: sorts a slice by a borrowed key extracted with a closure.
//! - [`Permutation`]: a swappable index view over a read-only collection.

use std::collections::VecDeque;

/// A trait for accessing key data from a collection without copying.
///
/// The sorter only ever reads keys through this trait, so any positional
/// collection can be sorted: `Vec<String>`, `Vec<Vec<u8>>`, parallel arrays
/// or records keyed by one field.
///
/// # Examples
///
/// ```
/// use msdsort::core::KeyAccessor;
///
/// struct MyCollection {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for MyCollection {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.data[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns a byte slice representing the key at the given index.
    fn get_key(&self, index: usize) -> &[u8];

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte at `offset` of the key at `index`, or `None` if the key
    /// is exactly `offset` bytes long or shorter.
    ///
    /// The counting pass calls this once per element per level. Implementors
    /// with a cheaper path than building the whole `&[u8]` may override it.
    #[inline(always)]
    fn get_byte(&self, index: usize, offset: usize) -> Option<u8> {
        self.get_key(index).get(offset).copied()
    }
}

/// A collection whose elements can be exchanged by position.
///
/// After `swap(a, b)`, `get_key(a)` must return what `get_key(b)` returned
/// before the call, and vice versa. Collections with several backing columns
/// swap all of them.
///
/// ```
/// use msdsort::core::{KeyAccessor, KeySwap};
///
/// struct Table {
///     names: Vec<String>,
///     ids: Vec<u32>,
/// }
///
/// impl KeyAccessor for Table {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.names[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.names.len()
///     }
/// }
///
/// impl KeySwap for Table {
///     fn swap(&mut self, a: usize, b: usize) {
///         self.names.swap(a, b);
///         self.ids.swap(a, b);
///     }
/// }
/// ```
pub trait KeySwap: KeyAccessor {
    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeySwap for [T] {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeySwap for Vec<T> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// VecDeque provides O(1) random access and swap.
impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeySwap for VecDeque<T> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Sorts a slice of arbitrary elements by a key borrowed from each element.
///
/// Built by [`sort_by_key`](crate::algo::sort_by_key); exposed so it can be
/// handed to a configured [`RadixSorter`](crate::algo::RadixSorter).
pub struct ByKey<'a, T, F> {
    data: &'a mut [T],
    key: F,
}

impl<'a, T, F> ByKey<'a, T, F>
where
    F: Fn(&T) -> &[u8],
{
    pub fn new(data: &'a mut [T], key: F) -> Self {
        Self { data, key }
    }
}

impl<T, F> KeyAccessor for ByKey<'_, T, F>
where
    F: Fn(&T) -> &[u8],
{
    #[inline(always)]
    fn get_key(&self, index: usize) -> &[u8] {
        (self.key)(&self.data[index])
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T, F> KeySwap for ByKey<'_, T, F>
where
    F: Fn(&T) -> &[u8],
{
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// An ordering of positions over a read-only collection.
///
/// Swapping exchanges two entries of the index vector; the provider is never
/// touched. Sorting a `Permutation` therefore yields the indices that would
/// order the provider.
pub struct Permutation<'a, P: ?Sized> {
    provider: &'a P,
    indices: Vec<usize>,
}

impl<'a, P: KeyAccessor + ?Sized> Permutation<'a, P> {
    /// Creates the identity permutation `0..provider.len()`.
    pub fn identity(provider: &'a P) -> Self {
        Self {
            provider,
            indices: (0..provider.len()).collect(),
        }
    }

    /// The current order, as positions into the provider.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl<P: KeyAccessor + ?Sized> KeyAccessor for Permutation<'_, P> {
    #[inline(always)]
    fn get_key(&self, index: usize) -> &[u8] {
        self.provider.get_key(self.indices[index])
    }

    fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline(always)]
    fn get_byte(&self, index: usize, offset: usize) -> Option<u8> {
        self.provider.get_byte(self.indices[index], offset)
    }
}

impl<P: KeyAccessor + ?Sized> KeySwap for Permutation<'_, P> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.indices.swap(a, b);
    }
}
