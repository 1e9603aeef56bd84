//! Common trait for mergeable heap data structures
//!
//! [`MergeableHeap`] is the full mutation/query surface shared by the
//! [`BinomialHeap`](crate::binomial::BinomialHeap) and
//! [`FibonacciHeap`](crate::fibonacci::FibonacciHeap): insert, find-minimum,
//! extract-minimum, and meld. Elements are bare keys from any totally
//! ordered domain; there is no separate payload.
//!
//! Queries on an empty heap return `None` rather than panicking; callers may
//! check [`is_empty`](MergeableHeap::is_empty) first or treat `None` as
//! "no value". No operation fails for valid input.

/// A min-heap that supports melding two heaps into one.
///
/// `meld` consumes the donor heap by value: ownership of every node moves
/// into `self`, so no node is ever reachable from two heaps at once.
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::binomial::BinomialHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut a = BinomialHeap::new();
/// a.insert(4);
/// a.insert(9);
///
/// let mut b = BinomialHeap::new();
/// b.insert(2);
///
/// a.meld(b);
/// assert_eq!(a.len(), 3);
/// assert_eq!(a.extract_min(), Some(2));
/// ```
pub trait MergeableHeap<K: Ord> {
    /// Creates a new empty heap.
    fn new() -> Self;

    /// Returns true if the heap holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap.
    fn len(&self) -> usize;

    /// Inserts a key.
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap, O(1) for the Fibonacci heap.
    fn insert(&mut self, key: K);

    /// Returns the minimum key without removing it, or `None` when empty.
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap (root-list scan), O(1) for the
    /// Fibonacci heap (tracked minimum).
    fn find_min(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` when empty.
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap, O(log n) amortized for the Fibonacci
    /// heap (this is where consolidation runs).
    fn extract_min(&mut self) -> Option<K>;

    /// Melds another heap into this one, consuming it.
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap, O(1) for the Fibonacci heap.
    fn meld(&mut self, other: Self);

    /// Removes the first occurrence of `key`, returning whether it was found.
    ///
    /// Deletion is implemented by draining the whole heap and reinserting
    /// the survivors, an O(n log n) rebuild. The textbook O(log n) deletion
    /// needs decrease-key and cascading cuts, which these heaps do not
    /// carry.
    fn remove(&mut self, key: &K) -> bool
    where
        Self: Sized,
    {
        let mut survivors = Self::new();
        let mut removed = false;
        while let Some(k) = self.extract_min() {
            if !removed && k == *key {
                removed = true;
                continue;
            }
            survivors.insert(k);
        }
        self.meld(survivors);
        removed
    }
}
