//! Mergeable priority queues
//!
//! This crate provides the two classic mergeable-heap data structures, the
//! priority queues whose merge operation is cheaper than rebuilding:
//!
//! - **Binomial Heap**: O(log n) insert, extract-min, and meld; the root list
//!   mirrors the binary representation of the element count, and melding two
//!   heaps is carry propagation exactly like binary addition
//! - **Fibonacci Heap**: O(1) insert and meld; O(log n) amortized extract-min,
//!   paid for by a lazy consolidation pass that restores the degree bound
//!
//! Both heaps expose the same mutation/query surface through
//! [`MergeableHeap`], plus read-only inspection hooks (`roots()` enumeration
//! and per-node key/degree/children views) so an external renderer can lay
//! the trees out without reaching into heap internals.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::fibonacci::FibonacciHeap;
//! use mergeable_heaps::MergeableHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! assert_eq!(heap.find_min(), Some(&3));
//! assert_eq!(heap.extract_min(), Some(3));
//! assert_eq!(heap.extract_min(), Some(5));
//! assert!(heap.is_empty());
//! ```

pub mod binomial;
pub mod fibonacci;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::MergeableHeap;
