//! # msdsort
//!
//! `msdsort` is an in-place most-significant-byte radix sort for collections ordered by
//! byte-string keys. It is a drop-in replacement for `slice::sort_unstable` when the key is a
//! string, a byte vector, or a field borrowed from a larger record.
//!
//! ## Key Features
//!
//! - **Indirect access**: The sort reads keys through [`KeyAccessor`] and moves elements through
//!   [`KeySwap`], so it works on slices, `Vec`s, `VecDeque`s, parallel arrays and records
//!   without copying keys out.
//! - **No auxiliary buffers**: Elements are moved into their buckets with swaps only. Each
//!   partition level uses a fixed 257-entry counting table on the stack.
//! - **Variable-length keys**: A key that ends at the current byte offset sorts before every key
//!   that continues, so `"fo"` precedes `"foo"`.
//! - **Small-range fallback**: Short ranges are finished with insertion sort on the remaining
//!   key suffixes. The cutoff is configurable through [`RadixSorter`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use msdsort::sort;
//!
//! let mut data = vec!["foo", "", "Hello", "fo", "%*&^*&^&"];
//! sort(&mut data);
//!
//! assert_eq!(data, vec!["", "%*&^*&^&", "Hello", "fo", "foo"]);
//! ```
//!
//! ### Records
//!
//! ```rust
//! use msdsort::sort_by_key;
//!
//! struct Book {
//!     title: String,
//!     year: u16,
//! }
//!
//! let mut books = vec![
//!     Book { title: "Walden".to_string(), year: 1854 },
//!     Book { title: "Emma".to_string(), year: 1815 },
//! ];
//! sort_by_key(&mut books, |book| book.title.as_bytes());
//!
//! assert_eq!(books[0].year, 1815);
//! ```
//!
//! ### Custom Collections
//!
//! Implement [`KeyAccessor`] and [`KeySwap`] and call [`radix_sort`]. Keys are compared
//! byte-wise; there is no collation. Equal keys may be reordered relative to each other.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N * L) where L is the length of the distinguishing prefix of the keys; long
//!   shared prefixes are skipped one byte per counting pass without recursion.
//! - **Memory**: No heap allocation during the sort. Stack use grows with the number of distinct
//!   byte positions examined, never with the number of elements.

pub mod algo;
pub mod core;
pub use crate::algo::{RadixSorter, radix_sort, sort, sort_by_key, sort_indices};
pub use crate::core::{ByKey, KeyAccessor, KeySwap, Permutation};

pub mod prelude {
    pub use crate::algo::{RadixSorter, radix_sort, sort, sort_by_key, sort_indices};
    pub use crate::core::{KeyAccessor, KeySwap};
}
