//! # pmtree
//!
//! Permutation trees with indexed lexicographic lookup.
//!
//! ## Overview
//!
//! A [`PermutationTree`] materializes every permutation of a small set of
//! symbols as a tree: each path from a child of the sentinel root to a leaf
//! is one permutation. The finished tree answers three read-only queries:
//!
//! * [`PermutationTree::all_perms`] lists every permutation.
//! * [`PermutationTree::perm_by_traversal`] finds the k-th permutation by
//!   counting leaves depth-first.
//! * [`PermutationTree::perm_by_navigation`] finds the k-th permutation by
//!   descending directly through the factorial number system.
//!
//! ```
//! let tree = pmtree::PermutationTree::new(['1', '2', '3']).unwrap();
//!
//! assert_eq!(tree.all_perms().len(), 6);
//! assert_eq!(tree.perm_by_traversal(2), vec!['1', '3', '2']);
//! assert_eq!(tree.perm_by_navigation(2), vec!['1', '3', '2']);
//! assert!(tree.perm_by_navigation(7).is_empty());
//! ```
//!
//! Permutation counts are `u64`, which limits a tree to [`MAX_SYMBOLS`]
//! symbols. Memory grows with `n!`, so practical trees are far smaller.

mod builder;
mod display;
mod error;
mod factorial;
mod iterator;
mod lookup;
mod tree;

pub mod node;


pub use builder::*;
pub use error::TreeError;
pub use factorial::{factorial, factorial_digits, MAX_SYMBOLS};
pub use iterator::{IterNode, NodeIter};
pub use node::{Node, NodePosition};
pub use tree::PermutationTree;

pub type NodeDepth = usize;
pub type NodeIndex = usize;

/// 1-based permutation index and permutation count.
pub type PermIndex = u64;

/// Every permutation held by `tree`, in lexicographic order relative to the
/// input order.
pub fn get_all_perms<T: Clone>(tree: &PermutationTree<T>) -> Vec<Vec<T>> {
    tree.all_perms()
}

/// The `num`-th permutation by traversal. Empty when `num` is negative or
/// outside `1..=tree.total_permutations()`.
pub fn get_perm1<T: Clone>(tree: &PermutationTree<T>, num: i64) -> Vec<T> {
    PermIndex::try_from(num)
        .map(|num| tree.perm_by_traversal(num))
        .unwrap_or_default()
}

/// The `num`-th permutation by navigation. Empty when `num` is negative or
/// outside `1..=tree.total_permutations()`.
pub fn get_perm2<T: Clone>(tree: &PermutationTree<T>, num: i64) -> Vec<T> {
    PermIndex::try_from(num)
        .map(|num| tree.perm_by_navigation(num))
        .unwrap_or_default()
}
