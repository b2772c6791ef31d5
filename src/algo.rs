//! In-place MSD radix sort over byte-string keys.
//!
//! The sort partitions a range of positions into 257 buckets by the byte at the
//! current depth (one extra bucket, ordered first, holds keys that end exactly at
//! that depth), permutes elements into their buckets with swaps only, and
//! recurses into every byte bucket one level deeper. Small ranges fall back to
//! insertion sort on the remaining key suffixes.
//!
//! The main entry points are [`radix_sort`], [`sort`], [`sort_by_key`] and
//! [`sort_indices`]. [`RadixSorter`] exposes the small-range cutoff.

use crate::core::{ByKey, KeyAccessor, KeySwap, Permutation};
use cuneiform::cuneiform;

/// Ranges of at most this many elements are finished with insertion sort.
pub const SMALL_SORT_THRESHOLD: usize = 24;

/// One bucket per byte value plus the terminated bucket.
const RADIX_BUCKETS: usize = 257;

/// Bucket of keys with no byte at the current depth. Sorts before byte 0.
const TERMINATED: usize = 0;

// Cache-aligned counts struct.
#[cuneiform]
struct BucketCounts {
    data: [usize; RADIX_BUCKETS],
}

/// A configured MSD radix sorter.
///
/// The free functions in this module use [`RadixSorter::default`]; build one
/// explicitly to change the small-range cutoff.
///
/// ```
/// use msdsort::RadixSorter;
///
/// let mut data = vec!["pear", "fig", "apple", "figs"];
/// RadixSorter::new().with_small_sort_threshold(0).sort(&mut data);
///
/// assert_eq!(data, vec!["apple", "fig", "figs", "pear"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadixSorter {
    small_sort_threshold: usize,
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixSorter {
    pub const fn new() -> Self {
        Self {
            small_sort_threshold: SMALL_SORT_THRESHOLD,
        }
    }

    /// Sets the largest range length handed to insertion sort.
    ///
    /// Any value is correct; `0` runs the radix partitioner down to ranges of
    /// two elements, `usize::MAX` turns the whole sort into insertion sort.
    pub fn with_small_sort_threshold(mut self, threshold: usize) -> Self {
        self.small_sort_threshold = threshold;

        self
    }

    pub fn small_sort_threshold(&self) -> usize {
        self.small_sort_threshold
    }

    /// Sorts `items` in place so that `get_key(i) <= get_key(i + 1)` for every
    /// adjacent pair of positions, comparing keys byte-wise.
    ///
    /// Elements only move through [`KeySwap::swap`]. Collections of length 0
    /// or 1 are left untouched. Equal keys may end up in any relative order.
    pub fn sort<S: KeySwap + ?Sized>(&self, items: &mut S) {
        let len = items.len();

        // By definition, this is already sorted
        if len < 2 {
            return;
        }

        self.partition(items, 0, len, 0);
    }

    /// Returns the positions of `provider` in key order without modifying it.
    pub fn sort_indices<P: KeyAccessor + ?Sized>(&self, provider: &P) -> Vec<usize> {
        let mut permutation = Permutation::identity(provider);
        self.sort(&mut permutation);

        permutation.into_indices()
    }

    /// Sorts `[lo, hi)`, whose keys all agree on bytes `[0, depth)`.
    fn partition<S: KeySwap + ?Sized>(&self, items: &mut S, lo: usize, hi: usize, depth: usize) {
        let mut depth = depth;

        loop {
            let len = hi - lo;
            if len < 2 {
                return;
            }

            if len <= self.small_sort_threshold {
                insertion_sort(items, lo, hi, depth);
                return;
            }

            // 1. Count bucket sizes at this depth
            let mut counts = BucketCounts {
                data: [0; RADIX_BUCKETS],
            };
            let counts = &mut counts.data;

            for index in lo..hi {
                counts[bucket_of(&*items, index, depth)] += 1;
            }

            // Common prefix: every key shares this byte (or every key ends here).
            // Move one byte deeper without recursing.
            if let Some(bucket) = counts.iter().position(|&count| count == len) {
                if bucket == TERMINATED {
                    return;
                }
                depth += 1;
                continue;
            }

            // 2. Bucket boundaries (prefix sums), terminated bucket first
            let mut heads = [0usize; RADIX_BUCKETS];
            let mut ends = [0usize; RADIX_BUCKETS];
            let mut sum = lo;
            heads
                .iter_mut()
                .zip(ends.iter_mut())
                .zip(counts.iter())
                .for_each(|((head, end), &count)| {
                    *head = sum;
                    sum += count;
                    *end = sum;
                });

            // 3. Move every element into its bucket
            permute(items, &mut heads, &ends, depth);

            // 4. Recurse on byte buckets; the terminated bucket is all ties
            let mut start = lo + counts[TERMINATED];
            for &count in &counts[TERMINATED + 1..] {
                let end = start + count;
                if count > 1 {
                    self.partition(items, start, end, depth + 1);
                }
                start = end;
            }

            return;
        }
    }
}

/// Sorts `items` in place by byte-wise key order.
///
/// # Examples
///
/// ```
/// use msdsort::{radix_sort, KeyAccessor, KeySwap};
///
/// struct Columns {
///     keys: Vec<&'static str>,
///     values: Vec<u32>,
/// }
///
/// impl KeyAccessor for Columns {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.keys[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
/// }
///
/// impl KeySwap for Columns {
///     fn swap(&mut self, a: usize, b: usize) {
///         self.keys.swap(a, b);
///         self.values.swap(a, b);
///     }
/// }
///
/// let mut columns = Columns {
///     keys: vec!["foo", "fo", "bar"],
///     values: vec![1, 2, 3],
/// };
/// radix_sort(&mut columns);
///
/// assert_eq!(columns.keys, vec!["bar", "fo", "foo"]);
/// assert_eq!(columns.values, vec![3, 2, 1]);
/// ```
pub fn radix_sort<S: KeySwap + ?Sized>(items: &mut S) {
    RadixSorter::new().sort(items);
}

/// Sorts a slice of byte-like values in place.
///
/// ```
/// use msdsort::sort;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// sort(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn sort<T: AsRef<[u8]>>(data: &mut [T]) {
    radix_sort(data);
}

/// Sorts a slice in place by a byte key borrowed from each element.
///
/// ```
/// use msdsort::sort_by_key;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let mut users = vec![
///     User { name: "mallory".to_string(), age: 41 },
///     User { name: "alice".to_string(), age: 30 },
/// ];
/// sort_by_key(&mut users, |user| user.name.as_bytes());
///
/// assert_eq!(users[0].age, 30);
/// ```
pub fn sort_by_key<T, F>(data: &mut [T], key: F)
where
    F: Fn(&T) -> &[u8],
{
    radix_sort(&mut ByKey::new(data, key));
}

/// Returns the positions of `provider` in key order, leaving it unmodified.
///
/// ```
/// use msdsort::sort_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
///
/// assert_eq!(sort_indices(&data), vec![1, 0, 2]);
/// ```
pub fn sort_indices<P: KeyAccessor + ?Sized>(provider: &P) -> Vec<usize> {
    RadixSorter::new().sort_indices(provider)
}

#[inline(always)]
fn bucket_of<S: KeyAccessor + ?Sized>(items: &S, index: usize, depth: usize) -> usize {
    match items.get_byte(index, depth) {
        Some(byte) => byte as usize + 1,
        None => TERMINATED,
    }
}

/// American flag permutation.
///
/// `heads[b]` is the next unresolved slot of bucket `b` and `ends[b]` its end.
/// Each swap sends the element at the current slot to the head of its own
/// bucket, where it stays, so the pass does at most one swap per element.
fn permute<S: KeySwap + ?Sized>(
    items: &mut S,
    heads: &mut [usize; RADIX_BUCKETS],
    ends: &[usize; RADIX_BUCKETS],
    depth: usize,
) {
    for bucket in 0..RADIX_BUCKETS {
        while heads[bucket] < ends[bucket] {
            let slot = heads[bucket];
            let target = bucket_of(&*items, slot, depth);
            if target != bucket {
                items.swap(slot, heads[target]);
            }
            heads[target] += 1;
        }
    }
}

/// Insertion sort on the key suffixes starting at `depth`, using adjacent swaps.
fn insertion_sort<S: KeySwap + ?Sized>(items: &mut S, lo: usize, hi: usize, depth: usize) {
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && is_less(&*items, j, j - 1, depth) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[inline(always)]
fn is_less<S: KeyAccessor + ?Sized>(items: &S, a: usize, b: usize, depth: usize) -> bool {
    suffix(items.get_key(a), depth) < suffix(items.get_key(b), depth)
}

#[inline(always)]
fn suffix(key: &[u8], depth: usize) -> &[u8] {
    key.get(depth..).unwrap_or_default()
}
