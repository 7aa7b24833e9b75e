//! Rose tree - a value with an ordered forest of subtrees.
//!
//! `Tree` is the non-linear container of the crate. Its natural fold order is
//! pre-order: a node's value first, then each subtree from left to right.
//! `reduce_right` visits the exact reverse of that sequence.
//!
//! Traversals run on an explicit work stack rather than recursion, so
//! folding a deep tree does not grow the call stack.
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::tree::Tree;
//! use lambars_foldable::typeclass::Foldable;
//!
//! let tree = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3), Tree::leaf(4)]);
//! let visited = tree.reduce(Vec::new(), |mut accumulator, element| {
//!     accumulator.push(element);
//!     accumulator
//! });
//! assert_eq!(visited, vec![1, 2, 3, 4]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::typeclass::{Foldable, TypeConstructor};

/// Pending nodes kept inline before the work stack spills to the heap.
const TRAVERSAL_INLINE_CAPACITY: usize = 16;

/// A rose tree: one value and any number of ordered children.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::tree::Tree;
///
/// let tree = Tree::new("root", vec![Tree::leaf("left"), Tree::leaf("right")]);
/// assert_eq!(*tree.value(), "root");
/// assert_eq!(tree.forest().len(), 2);
/// assert_eq!(tree.size(), 3);
/// ```
///
/// Only the folds and [`Tree::size`] walk the tree on an explicit stack. The
/// derived `Clone`, `PartialEq`, `Hash` and `Debug` impls, the serde impls and
/// `Drop` recurse once per level, so their depth is bounded by the thread stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree<A> {
    value: A,
    forest: Vec<Self>,
}

static_assertions::assert_impl_all!(Tree<i32>: Send, Sync, Clone);

impl<A> Tree<A> {
    /// Creates a tree from a root value and its children.
    #[inline]
    pub const fn new(value: A, forest: Vec<Self>) -> Self {
        Self { value, forest }
    }

    /// Creates a tree without children.
    #[inline]
    pub const fn leaf(value: A) -> Self {
        Self::new(value, Vec::new())
    }

    /// Returns the root value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns the children, left to right.
    #[inline]
    pub fn forest(&self) -> &[Self] {
        &self.forest
    }

    /// Appends a child as the new right-most subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::tree::Tree;
    ///
    /// let tree = Tree::leaf(1).with_child(Tree::leaf(2));
    /// assert_eq!(*tree.forest()[0].value(), 2);
    /// ```
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.forest.push(child);
        self
    }

    /// Splits the tree into its root value and children.
    pub fn into_parts(self) -> (A, Vec<Self>) {
        (self.value, self.forest)
    }

    /// Returns the number of values in the tree. Never zero.
    pub fn size(&self) -> usize {
        let mut pending: SmallVec<[&Self; TRAVERSAL_INLINE_CAPACITY]> = SmallVec::new();
        pending.push(self);
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.forest.iter());
        }
        count
    }
}

impl<A> TypeConstructor for Tree<A> {
    type Inner = A;
    type WithType<B> = Tree<B>;
}

/// Work item for the right-to-left traversal.
enum Frame<A> {
    Expand(Tree<A>),
    Emit(A),
}

impl<A> Foldable for Tree<A> {
    fn reduce<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        let mut pending: SmallVec<[Self; TRAVERSAL_INLINE_CAPACITY]> = SmallVec::new();
        pending.push(self);
        let mut accumulator = init;
        while let Some(Self { value, forest }) = pending.pop() {
            accumulator = function(accumulator, value);
            // Reversed so the left-most child is popped next.
            pending.extend(forest.into_iter().rev());
        }
        accumulator
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let mut pending: SmallVec<[Frame<A>; TRAVERSAL_INLINE_CAPACITY]> = SmallVec::new();
        pending.push(Frame::Expand(self));
        let mut accumulator = init;
        while let Some(frame) = pending.pop() {
            match frame {
                Frame::Expand(Self { value, forest }) => {
                    // The root is emitted after every subtree; the right-most
                    // subtree sits on top of the stack.
                    pending.push(Frame::Emit(value));
                    pending.extend(forest.into_iter().map(Frame::Expand));
                }
                Frame::Emit(value) => accumulator = function(value, accumulator),
            }
        }
        accumulator
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn length(&self) -> usize {
        self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Semigroup, Sum};
    use rstest::rstest;

    fn sample() -> Tree<i32> {
        // 1
        // ├── 2
        // │   ├── 5
        // │   └── 6
        // ├── 3
        // └── 4
        //     └── 7
        Tree::new(
            1,
            vec![
                Tree::new(2, vec![Tree::leaf(5), Tree::leaf(6)]),
                Tree::leaf(3),
                Tree::new(4, vec![Tree::leaf(7)]),
            ],
        )
    }

    fn push(mut accumulator: Vec<i32>, element: i32) -> Vec<i32> {
        accumulator.push(element);
        accumulator
    }

    #[rstest]
    fn reduce_visits_pre_order() {
        assert_eq!(sample().reduce(Vec::new(), push), vec![1, 2, 5, 6, 3, 4, 7]);
    }

    #[rstest]
    fn reduce_right_visits_reverse_pre_order() {
        let visited = sample().reduce_right(Vec::new(), |element, accumulator| {
            push(accumulator, element)
        });
        assert_eq!(visited, vec![7, 4, 3, 6, 5, 2, 1]);
    }

    #[rstest]
    fn reduce_right_builds_same_sequence_as_reduce() {
        let from_right = sample().reduce_right(Vec::new(), |element, accumulator| {
            vec![element].combine(accumulator)
        });
        assert_eq!(from_right, sample().reduce(Vec::new(), push));
    }

    #[rstest]
    fn leaf_folds_its_single_value() {
        assert_eq!(
            Tree::leaf(9).reduce(1, |accumulator, element| accumulator + element),
            10
        );
        assert_eq!(
            Tree::leaf(9).reduce_right(1, |element, accumulator| element - accumulator),
            8
        );
        assert!(!Foldable::is_empty(&Tree::leaf(0)));
    }

    #[rstest]
    fn fold_map_sums_every_node() {
        assert_eq!(sample().fold_map(Sum), Sum(28));
    }

    #[rstest]
    fn size_and_length_count_nodes() {
        assert_eq!(sample().size(), 7);
        assert_eq!(sample().length(), 7);
        assert_eq!(Tree::leaf(()).size(), 1);
    }

    #[rstest]
    fn with_child_appends_on_the_right() {
        let tree = Tree::leaf(1).with_child(Tree::leaf(2)).with_child(Tree::leaf(3));
        assert_eq!(tree.reduce(Vec::new(), push), vec![1, 2, 3]);
    }

    #[rstest]
    fn into_parts_splits_root_and_forest() {
        let (value, forest) = sample().into_parts();
        assert_eq!(value, 1);
        assert_eq!(forest.len(), 3);
        assert_eq!(*forest[2].value(), 4);
    }

    /// A single path of `depth` nodes, root `depth - 1` down to leaf `0`.
    fn chain(depth: i32) -> Tree<i32> {
        let mut tree = Tree::leaf(0);
        for level in 1..depth {
            tree = Tree::new(level, vec![tree]);
        }
        tree
    }

    #[rstest]
    fn million_node_chain_folds_on_a_small_stack() {
        let depth = 1_000_000;
        let folded = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(move || {
                let total = chain(depth).reduce(0_i64, |accumulator, element| {
                    accumulator + i64::from(element)
                });
                let deepest = chain(depth).reduce_right(None, |element, accumulator| {
                    accumulator.or(Some(element))
                });
                (total, deepest)
            })
            .expect("fold thread should spawn")
            .join()
            .expect("fold thread should finish");
        assert_eq!(folded, (499_999_500_000, Some(0)));
    }
}
