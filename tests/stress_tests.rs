//! Stress tests that push both heaps through large operation mixes
//!
//! These perform large numbers of operations in various patterns to catch
//! edge cases (carry chains, deep consolidations) that small tests miss.

use mergeable_heaps::binomial::BinomialHeap;
use mergeable_heaps::fibonacci::FibonacciHeap;
use mergeable_heaps::MergeableHeap;

/// Test massive numbers of inserts and extracts
fn test_massive_operations<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..1000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and extract
fn test_alternating_ops<H: MergeableHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert!(heap.extract_min().is_some());
    }
    assert_eq!(heap.len(), 200);

    let mut last = i32::MIN;
    while let Some(k) = heap.extract_min() {
        assert!(k >= last);
        last = k;
    }
    assert!(heap.is_empty());
}

/// Test melding two large heaps
fn test_large_meld<H: MergeableHeap<i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..500 {
        heap1.insert(i * 2);
        heap2.insert(i * 2 + 1);
    }

    heap1.meld(heap2);
    assert_eq!(heap1.len(), 1000);

    // Evens and odds interleave perfectly in the drain
    for i in 0..1000 {
        assert_eq!(heap1.extract_min(), Some(i));
    }
}

/// Test melding many small heaps into one accumulator
fn test_meld_many_small<H: MergeableHeap<i32>>() {
    let mut acc = H::new();

    for chunk in 0..100 {
        let mut small = H::new();
        for i in 0..10 {
            small.insert(chunk * 10 + (9 - i));
        }
        acc.meld(small);
    }
    assert_eq!(acc.len(), 1000);

    for i in 0..1000 {
        assert_eq!(acc.extract_min(), Some(i));
    }
}

/// Test a sawtooth pattern: grow, half-drain, grow again
fn test_sawtooth<H: MergeableHeap<i32>>() {
    let mut heap = H::new();
    let mut expected_len = 0usize;

    for round in 0..10 {
        for i in 0..100 {
            heap.insert(round * 1000 + i);
        }
        expected_len += 100;

        for _ in 0..50 {
            assert!(heap.extract_min().is_some());
        }
        expected_len -= 50;

        assert_eq!(heap.len(), expected_len);
    }

    let mut last = i32::MIN;
    while let Some(k) = heap.extract_min() {
        assert!(k >= last);
        last = k;
    }
}

macro_rules! heap_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

heap_test!(binomial_massive_operations, BinomialHeap<i32>, test_massive_operations);
heap_test!(binomial_alternating_ops, BinomialHeap<i32>, test_alternating_ops);
heap_test!(binomial_large_meld, BinomialHeap<i32>, test_large_meld);
heap_test!(binomial_meld_many_small, BinomialHeap<i32>, test_meld_many_small);
heap_test!(binomial_sawtooth, BinomialHeap<i32>, test_sawtooth);

heap_test!(fibonacci_massive_operations, FibonacciHeap<i32>, test_massive_operations);
heap_test!(fibonacci_alternating_ops, FibonacciHeap<i32>, test_alternating_ops);
heap_test!(fibonacci_large_meld, FibonacciHeap<i32>, test_large_meld);
heap_test!(fibonacci_meld_many_small, FibonacciHeap<i32>, test_meld_many_small);
heap_test!(fibonacci_sawtooth, FibonacciHeap<i32>, test_sawtooth);
