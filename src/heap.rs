use std::{error, fmt, mem};

use crate::order::{NaturalOrder, ReverseOrder, TotalOrder};

/// Starting capacity of heaps built by `new`, `new_by` and `from_vec*`;
/// shrinking never takes the buffer below the capacity configured at
/// construction.
pub const DEFAULT_CAPACITY: usize = 100;

/// Returned by `peek_max`/`extract_max` on an empty heap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Underflow;

impl fmt::Display for Underflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("max-heap underflow")
    }
}

impl error::Error for Underflow {}

/// Array-backed binary max-heap with an injectable order.
///
/// Capacity is tracked separately from the element count and is managed
/// explicitly: it doubles when an insert finds the buffer full and halves
/// when an extract drops occupancy to a quarter, so a long drain hands
/// memory back instead of holding the high-water mark.
#[derive(Clone, Debug)]
pub struct MaxHeap<T, O: TotalOrder<T> = NaturalOrder> {
    data: Vec<T>,
    cap: usize,
    min_cap: usize,
    order: O,
}

pub type MinHeap<T> = MaxHeap<T, ReverseOrder>;

impl<T: Ord> MaxHeap<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::new_by(NaturalOrder)
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_by(capacity, NaturalOrder)
    }

    /// O(n)
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_by(data, NaturalOrder)
    }
}

impl<T, O: TotalOrder<T>> MaxHeap<T, O> {
    /// O(1)
    #[inline]
    pub fn new_by(order: O) -> Self {
        Self::with_capacity_by(DEFAULT_CAPACITY, order)
    }

    /// Empty heap that holds `capacity` elements before the first regrowth;
    /// `capacity` also becomes the floor below which shrinking never goes.
    pub fn with_capacity_by(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cap: capacity,
            min_cap: capacity,
            order,
        }
    }

    /// Bulk-load: O(n) build-heap, sifting down from the last internal node
    /// to the root.
    pub fn from_vec_by(data: Vec<T>, order: O) -> Self {
        let cap = data.len().max(DEFAULT_CAPACITY);
        let mut heap = Self {
            data,
            cap,
            min_cap: DEFAULT_CAPACITY,
            order,
        };

        let spare = cap - heap.data.len();
        heap.data.reserve(spare);

        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        debug_assert!(heap.is_max_heap());

        heap
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// O(1)
    #[inline]
    pub fn peek_max(&self) -> Result<&T, Underflow> {
        self.data.first().ok_or(Underflow)
    }

    /// The elements in array order, for debugging and test fixtures.
    /// Any index into this slice is stale after the next mutating call,
    /// which may reallocate the buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Amortized O(log n); doubles the capacity when the buffer is full.
    pub fn insert(&mut self, x: T) {
        if self.data.len() == self.cap {
            self.resize((2 * self.cap).max(1));
        }

        self.data.push(x);
        self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_max_heap());
    }

    /// Removes and returns the maximum. Amortized O(log n); halves the
    /// capacity once occupancy drops to a quarter, but never below the
    /// capacity configured at construction.
    pub fn extract_max(&mut self) -> Result<T, Underflow> {
        let mut max = self.data.pop().ok_or(Underflow)?;
        if let Some(root) = self.data.first_mut() {
            max = mem::replace(root, max);
            self.sift_down(0);
        }
        debug_assert!(self.is_max_heap());

        if !self.data.is_empty()
            && self.data.len() == self.cap / 4
            && self.cap / 2 >= self.min_cap
        {
            self.resize(self.cap / 2);
        }

        Ok(max)
    }

    /// Moves the elements into a fresh buffer of exactly `new_cap` slots.
    /// The copy is all-or-nothing.
    ///
    /// # Panics
    ///
    /// If `new_cap` is smaller than the current element count.
    pub fn resize(&mut self, new_cap: usize) {
        assert!(
            self.data.len() <= new_cap,
            "cannot resize a heap of {} elements to capacity {}",
            self.data.len(),
            new_cap,
        );

        let mut buf = Vec::with_capacity(new_cap);
        buf.extend(mem::take(&mut self.data));
        self.data = buf;
        self.cap = new_cap;
    }

    /// In-place heapsort; ascending under the heap's order. O(n log n).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.data.len()).rev() {
            self.data.swap(0, end);
            self.sift_down_to(0, end);
        }
        self.data
    }

    /// Full consistency scan: no child compares greater than its parent.
    /// An empty heap is trivially valid. O(n); for tests and debug
    /// assertions, not the hot path.
    pub fn is_max_heap(&self) -> bool {
        (1..self.data.len())
            .all(|node| !self.order.less(&self.data[(node - 1) / 2], &self.data[node]))
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.order.less(&self.data[parent], &self.data[node]) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    #[inline]
    fn sift_down(&mut self, node: usize) {
        self.sift_down_to(node, self.data.len());
    }

    /// Sinks `node` within `data[..end]`, swapping with the greater child.
    fn sift_down_to(&mut self, mut node: usize, end: usize) {
        loop {
            let left = 2 * node + 1;
            if end <= left {
                break;
            }
            let right = left + 1;

            let mut max = node;
            if self.order.less(&self.data[max], &self.data[left]) {
                max = left;
            }
            if right < end && self.order.less(&self.data[max], &self.data[right]) {
                max = right;
            }
            if max == node {
                break;
            }

            self.data.swap(node, max);
            node = max;
        }
    }
}

impl<T, O: TotalOrder<T> + Default> Default for MaxHeap<T, O> {
    #[inline]
    fn default() -> Self {
        Self::new_by(O::default())
    }
}

impl<T, O: TotalOrder<T> + Default> std::iter::FromIterator<T> for MaxHeap<T, O> {
    /// O(n)
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        Self::from_vec_by(iter.into_iter().collect(), O::default())
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for MaxHeap<T, O> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        for x in iter {
            self.insert(x);
        }
    }
}
