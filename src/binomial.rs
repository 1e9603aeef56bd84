//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert and extract_min
//! - O(log n) meld
//!
//! # Algorithm Overview
//!
//! The heap keeps its trees on a singly-linked root list ordered by strictly
//! increasing degree, with at most one tree of each degree. This is analogous
//! to the binary representation of n: a heap of n elements has a degree-k
//! tree exactly where n has a 1-bit at position k.
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! **Meld** is the core operation, in two phases:
//! 1. Merge the two root lists into one list of non-decreasing degree,
//!    keeping equal-degree roots adjacent (classic sorted-list merge)
//! 2. Walk the merged list with a three-node window, linking each adjacent
//!    equal-degree pair into a tree one degree higher. A link may collide
//!    with the next tree along, so collisions carry upward exactly like
//!    binary addition
//!
//! Insert melds a singleton tree; extract_min unlinks the minimum root,
//! promotes its children to a fresh root list, and melds that back in.

use crate::traits::MergeableHeap;
use std::cell::{Ref, RefCell};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

/// Type alias for node reference (strong reference)
type NodeRef<K> = Rc<RefCell<Node<K>>>;

/// Type alias for optional node reference
type NodePtr<K> = Option<NodeRef<K>>;

/// Type alias for weak node reference (for parent links)
type WeakNodeRef<K> = Weak<RefCell<Node<K>>>;

/// Internal node structure for the binomial heap
///
/// **Memory Model**: Strong references flow from roots downward (`child`,
/// `sibling`). The `parent` back-pointer is weak, so every node has exactly
/// one owning path and no reference cycles form.
///
/// A node of degree k heads a binomial tree of exactly 2ᵏ nodes; its
/// children sit on the `child` sibling chain in decreasing degree order
/// (k-1, k-2, ..., 0).
struct Node<K> {
    key: K,
    /// Degree: number of children.
    degree: usize,
    /// Parent node - weak reference to avoid cycles (None if root)
    parent: Option<WeakNodeRef<K>>,
    /// First child; the remaining children hang off its sibling chain
    child: NodePtr<K>,
    /// Next root in the root list, or next child in a child list
    sibling: NodePtr<K>,
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::binomial::BinomialHeap;
/// use mergeable_heaps::MergeableHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
/// assert_eq!(heap.find_min(), Some(&1));
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct BinomialHeap<K: Ord> {
    /// First root of the degree-ascending root list (None when empty)
    head: NodePtr<K>,
    /// Number of elements in the heap
    len: usize,
}

impl<K: Ord> MergeableHeap<K> for BinomialHeap<K> {
    fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a new key into the heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The key is wrapped in a degree-0 singleton tree and melded into the
    /// existing root list. The cost is the carry propagation of that meld,
    /// just like incrementing a binary counter.
    fn insert(&mut self, key: K) {
        let node = Rc::new(RefCell::new(Node {
            key,
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        }));

        let roots = self.head.take();
        self.head = Self::union_roots(roots, Some(node));
        self.len += 1;
    }

    /// Returns the minimum key by scanning the root list
    ///
    /// **Time Complexity**: O(log n) - the root list holds at most
    /// ⌊log₂ n⌋ + 1 trees, and the minimum of a heap-ordered tree is its root.
    fn find_min(&self) -> Option<&K> {
        let mut min = Rc::clone(self.head.as_ref()?);
        let mut curr = min.borrow().sibling.clone();
        while let Some(node) = curr {
            if node.borrow().key < min.borrow().key {
                min = Rc::clone(&node);
            }
            let next = node.borrow().sibling.clone();
            curr = next;
        }

        // SAFETY: We return a reference tied to the &self lifetime. The node
        // stays alive because the root list owns it through an Rc chain, the
        // list cannot change while self is borrowed, and RefCell contents do
        // not move.
        let node_ptr = min.as_ptr();
        unsafe { Some(&(*node_ptr).key) }
    }

    /// Removes and returns the minimum key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the root list for the minimum root, tracking its predecessor
    /// 2. Unlink it from the root list
    /// 3. Reverse its child list (stored in decreasing degree order) into an
    ///    increasing-degree root list, clearing parent links - each child of
    ///    a Bₖ root is itself a complete binomial tree
    /// 4. Meld the orphaned children back into the remaining roots
    fn extract_min(&mut self) -> Option<K> {
        // Locate the minimum root and the root preceding it
        let mut min = Rc::clone(self.head.as_ref()?);
        let mut min_prev: NodePtr<K> = None;
        let mut prev = Rc::clone(&min);
        let mut curr = min.borrow().sibling.clone();
        while let Some(node) = curr {
            if node.borrow().key < min.borrow().key {
                min = Rc::clone(&node);
                min_prev = Some(Rc::clone(&prev));
            }
            let next = node.borrow().sibling.clone();
            prev = node;
            curr = next;
        }
        drop(prev);

        // Unlink the minimum from the root list
        let rest = min.borrow_mut().sibling.take();
        match min_prev {
            Some(p) => p.borrow_mut().sibling = rest,
            None => self.head = rest,
        }

        // Promote the children: reversed, they form a valid root list
        let orphans = Self::reverse_children(min.borrow_mut().child.take());
        let roots = self.head.take();
        self.head = Self::union_roots(roots, orphans);
        self.len -= 1;

        // The root list and child chains no longer reference the node, so
        // this is the last strong reference.
        let node = Rc::try_unwrap(min)
            .ok()
            .expect("extracted root should have no other strong references")
            .into_inner();
        Some(node.key)
    }

    /// Melds another heap into this heap, consuming it
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// Both root lists are merged and re-linked in one pass (see
    /// `union_roots`). The donor's head moves into `self`, so every node
    /// keeps exactly one owner.
    fn meld(&mut self, mut other: Self) {
        let a = self.head.take();
        let b = other.head.take();
        self.head = Self::union_roots(a, b);
        self.len += other.len;
        other.len = 0;
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Enumerates the current root list in ascending degree order.
    ///
    /// Intended for renderers and structure checks: each [`NodeView`] exposes
    /// the key, degree, and immediate children of one tree node.
    pub fn roots(&self) -> SiblingIter<'_, K> {
        SiblingIter {
            next: self.head.clone(),
            _heap: PhantomData,
        }
    }

    /// Merge phase of the union: combines two degree-ascending root lists
    /// into one list of non-decreasing degree.
    ///
    /// Equal-degree roots end up adjacent; the carry phase resolves them.
    /// Recursion depth is bounded by the combined root-list length, which is
    /// O(log n).
    fn merge_root_lists(a: NodePtr<K>, b: NodePtr<K>) -> NodePtr<K> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(x), Some(y)) => {
                if x.borrow().degree <= y.borrow().degree {
                    let rest = x.borrow_mut().sibling.take();
                    let merged = Self::merge_root_lists(rest, Some(y));
                    x.borrow_mut().sibling = merged;
                    Some(x)
                } else {
                    let rest = y.borrow_mut().sibling.take();
                    let merged = Self::merge_root_lists(Some(x), rest);
                    y.borrow_mut().sibling = merged;
                    Some(y)
                }
            }
        }
    }

    /// Two-phase union of two root lists: merge, then carry/link.
    ///
    /// The carry phase walks the merged list with a three-node window
    /// (`prev`, `curr`, `next`). The window advances when `curr` and `next`
    /// differ in degree, or when `next`'s own sibling shares `next`'s degree
    /// (a triple - that pair is resolved first, one step later). Otherwise
    /// the larger-keyed of `curr`/`next` is linked under the smaller-keyed
    /// one, producing a tree one degree higher that may itself collide with
    /// the tree after it. This is binary addition with carry propagation.
    fn union_roots(a: NodePtr<K>, b: NodePtr<K>) -> NodePtr<K> {
        let mut head = Self::merge_root_lists(a, b)?;

        let mut prev: NodePtr<K> = None;
        let mut curr = Rc::clone(&head);
        loop {
            let next = match curr.borrow().sibling.clone() {
                Some(n) => n,
                None => break,
            };

            let curr_degree = curr.borrow().degree;
            let next_degree = next.borrow().degree;
            let triple = next
                .borrow()
                .sibling
                .as_ref()
                .map_or(false, |s| s.borrow().degree == next_degree);

            if curr_degree != next_degree || triple {
                prev = Some(curr);
                curr = next;
            } else if curr.borrow().key <= next.borrow().key {
                // next joins under curr; curr inherits next's sibling
                let rest = next.borrow_mut().sibling.take();
                curr.borrow_mut().sibling = rest;
                Self::link_trees(next, &curr);
            } else {
                // curr joins under next; the list is routed around curr
                match &prev {
                    Some(p) => p.borrow_mut().sibling = Some(Rc::clone(&next)),
                    None => head = Rc::clone(&next),
                }
                let demoted = std::mem::replace(&mut curr, Rc::clone(&next));
                Self::link_trees(demoted, &next);
            }
        }

        Some(head)
    }

    /// Links two equal-degree trees: `child`'s root becomes the leftmost
    /// child of `parent`'s root, whose degree increases by one.
    ///
    /// **Time Complexity**: O(1)
    ///
    /// Linking two Bₖ trees produces a B_{k+1} tree; the caller guarantees
    /// `parent`'s key is not larger than `child`'s, so heap order holds.
    fn link_trees(child: NodeRef<K>, parent: &NodeRef<K>) {
        debug_assert!(parent.borrow().key <= child.borrow().key);
        debug_assert_eq!(parent.borrow().degree, child.borrow().degree);

        {
            let mut c = child.borrow_mut();
            let mut p = parent.borrow_mut();
            c.parent = Some(Rc::downgrade(parent));
            c.sibling = p.child.take();
            p.degree += 1;
        }
        parent.borrow_mut().child = Some(child);
    }

    /// Reverses a child list into a root list.
    ///
    /// Children are stored in decreasing degree order; reversed, they form a
    /// valid degree-ascending root list. Parent links are cleared along the
    /// way since every node becomes a root.
    fn reverse_children(child: NodePtr<K>) -> NodePtr<K> {
        let mut reversed: NodePtr<K> = None;
        let mut curr = child;
        while let Some(node) = curr {
            let next = {
                let mut n = node.borrow_mut();
                n.parent = None;
                n.sibling.take()
            };
            node.borrow_mut().sibling = reversed.take();
            reversed = Some(node);
            curr = next;
        }
        reversed
    }
}

/// Immutable view of one tree node, for renderers and structure checks.
///
/// A view borrows the heap, so the structure cannot be mutated while any
/// view is live.
pub struct NodeView<'a, K> {
    node: NodeRef<K>,
    _heap: PhantomData<&'a Node<K>>,
}

impl<'a, K> NodeView<'a, K> {
    /// The node's key, borrowed for the lifetime of the returned guard.
    pub fn key(&self) -> Ref<'_, K> {
        Ref::map(self.node.borrow(), |n| &n.key)
    }

    /// Number of direct children.
    pub fn degree(&self) -> usize {
        self.node.borrow().degree
    }

    /// Iterates the immediate children in decreasing degree order.
    pub fn children(&self) -> SiblingIter<'a, K> {
        SiblingIter {
            next: self.node.borrow().child.clone(),
            _heap: PhantomData,
        }
    }
}

/// Iterator over one sibling chain: the root list, or one node's child list.
pub struct SiblingIter<'a, K> {
    next: NodePtr<K>,
    _heap: PhantomData<&'a Node<K>>,
}

impl<'a, K> Iterator for SiblingIter<'a, K> {
    type Item = NodeView<'a, K>;

    fn next(&mut self) -> Option<NodeView<'a, K>> {
        let node = self.next.take()?;
        self.next = node.borrow().sibling.clone();
        Some(NodeView {
            node,
            _heap: PhantomData,
        })
    }
}

// Note: most tests live in tests/, shared generically with the Fibonacci
// heap; tests/structure_tests.rs checks the binomial-shape invariant.
