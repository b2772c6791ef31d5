use msdsort::core::{KeyAccessor, KeySwap};
use msdsort::prelude::*;

// Simulate an external columnar array (like from apache-arrow).
// Swapping exchanges the value ranges, never the bytes in `data`.
struct MockArrowArray {
    data: Vec<u8>,
    ranges: Vec<(usize, usize)>,
}

impl MockArrowArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut ranges = Vec::new();
        for s in strings {
            let start = data.len();
            data.extend_from_slice(s.as_bytes());
            ranges.push((start, data.len()));
        }
        Self { data, ranges }
    }

    fn values(&self) -> Vec<&str> {
        self.ranges
            .iter()
            .map(|&(start, end)| std::str::from_utf8(&self.data[start..end]).unwrap())
            .collect()
    }
}

// Implement the traits for the external struct.
// This proves they are implementable by "outside crates".
impl KeyAccessor for MockArrowArray {
    fn get_key(&self, index: usize) -> &[u8] {
        let (start, end) = self.ranges[index];
        &self.data[start..end]
    }

    fn len(&self) -> usize {
        self.ranges.len()
    }

    fn get_byte(&self, index: usize, offset: usize) -> Option<u8> {
        let (start, end) = self.ranges[index];
        if start + offset < end {
            Some(self.data[start + offset])
        } else {
            None
        }
    }
}

impl KeySwap for MockArrowArray {
    fn swap(&mut self, a: usize, b: usize) {
        self.ranges.swap(a, b);
    }
}

/// Parallel arrays: the key column and a payload column move together.
struct ParallelColumns {
    keys: Vec<String>,
    ids: Vec<u32>,
}

impl KeyAccessor for ParallelColumns {
    fn get_key(&self, index: usize) -> &[u8] {
        self.keys[index].as_bytes()
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl KeySwap for ParallelColumns {
    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.ids.swap(a, b);
    }
}

/// Counts calls to `swap`.
struct SwapCounter {
    keys: Vec<String>,
    swaps: usize,
}

impl SwapCounter {
    fn new<S: ToString>(keys: &[S]) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            swaps: 0,
        }
    }
}

impl KeyAccessor for SwapCounter {
    fn get_key(&self, index: usize) -> &[u8] {
        self.keys[index].as_bytes()
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl KeySwap for SwapCounter {
    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.swaps += 1;
    }
}

/// Claims more elements than it holds.
struct Overstated {
    keys: Vec<&'static str>,
}

impl KeyAccessor for Overstated {
    fn get_key(&self, index: usize) -> &[u8] {
        self.keys[index].as_bytes()
    }

    fn len(&self) -> usize {
        self.keys.len() + 1
    }
}

impl KeySwap for Overstated {
    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut mock = MockArrowArray::new(&["foo", "bar", "baz", "", "ba"]);
    radix_sort(&mut mock);

    assert_eq!(mock.values(), vec!["", "ba", "bar", "baz", "foo"]);
}

#[test]
fn test_external_struct_indices() {
    let mock = MockArrowArray::new(&["foo", "bar", "baz"]);
    let indices = sort_indices(&mock);

    // sorted: bar (1), baz (2), foo (0)
    assert_eq!(indices, vec![1, 2, 0]);
}

#[test]
fn test_external_struct_large() {
    let words: Vec<String> = (0..2_000).map(|i| format!("k{}", (i * 7919) % 2_000)).collect();
    let refs: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    let mut mock = MockArrowArray::new(&refs);

    radix_sort(&mut mock);

    let mut expected = refs.clone();
    expected.sort();
    assert_eq!(mock.values(), expected);
}

#[test]
fn test_parallel_columns() {
    let keys = ["pear", "apple", "fig", "apple", "banana", "figs"];
    let mut columns = ParallelColumns {
        keys: keys.iter().map(|k| k.to_string()).collect(),
        ids: (0..keys.len() as u32).collect(),
    };

    radix_sort(&mut columns);

    assert_eq!(
        columns.keys,
        vec!["apple", "apple", "banana", "fig", "figs", "pear"]
    );
    for (key, &id) in columns.keys.iter().zip(columns.ids.iter()) {
        assert_eq!(key, keys[id as usize]);
    }
}

#[test]
fn test_no_swaps_for_trivial_inputs() {
    for keys in [vec![], vec![""], vec!["x"]] {
        let mut counter = SwapCounter::new(&keys);
        radix_sort(&mut counter);
        assert_eq!(counter.swaps, 0);
    }
}

#[test]
fn test_no_swaps_for_sorted_input() {
    let mut keys: Vec<String> = (0..1_000).map(|i: usize| (i ^ 0x2cc).to_string()).collect();
    keys.sort();

    let mut counter = SwapCounter::new(&keys);
    radix_sort(&mut counter);
    assert_eq!(counter.swaps, 0);
    assert_eq!(counter.keys, keys);
}

#[test]
#[should_panic]
fn test_accessor_panic_propagates() {
    let mut overstated = Overstated {
        keys: vec!["b", "a", "c"],
    };
    radix_sort(&mut overstated);
}

#[test]
fn test_permutation_view() {
    use msdsort::Permutation;

    let columns = MockArrowArray::new(&["delta", "alpha", "charlie", "bravo"]);
    let mut view = Permutation::identity(&columns);
    RadixSorter::new().with_small_sort_threshold(0).sort(&mut view);

    assert_eq!(view.indices(), &[1, 3, 2, 0]);
    assert_eq!(view.get_key(0), b"alpha");
    // The underlying array keeps its original order.
    assert_eq!(columns.values(), vec!["delta", "alpha", "charlie", "bravo"]);
}
