//! Indexed access to the k-th permutation.
//!
//! Two strategies answer the same query. Traversal walks leaves depth-first
//! and counts down to the requested one, costing time proportional to its
//! position. Navigation decomposes the index in the factorial number system
//! and descends straight to the target leaf, one child per level.
//!
//! Both take a 1-based index and agree on every valid one.

use std::ops::ControlFlow;

use tracing::trace;

use crate::{error::TreeError, factorial::split, node::Node, PermIndex, PermutationTree};

impl<T> PermutationTree<T>
where
    T: Clone,
{
    /// The `num`-th permutation found by depth-first traversal, or an empty
    /// vector when `num` is outside `1..=total_permutations()`.
    pub fn perm_by_traversal(&self, num: PermIndex) -> Vec<T> {
        self.try_perm_by_traversal(num).unwrap_or_default()
    }

    /// The `num`-th permutation found by factorial number system navigation,
    /// or an empty vector when `num` is outside `1..=total_permutations()`.
    pub fn perm_by_navigation(&self, num: PermIndex) -> Vec<T> {
        self.try_perm_by_navigation(num).unwrap_or_default()
    }

    pub fn try_perm_by_traversal(&self, num: PermIndex) -> Result<Vec<T>, TreeError> {
        let root = self.checked_root(num)?;

        let mut remaining = num;
        let mut path = Vec::with_capacity(self.symbol_count());
        for child in root.children() {
            match traverse(child, remaining, &mut path) {
                ControlFlow::Break(perm) => return Ok(perm),
                ControlFlow::Continue(left) => remaining = left,
            }
        }

        // Unreachable for a tree holding exactly total_permutations() leaves
        Err(self.out_of_range(num))
    }

    pub fn try_perm_by_navigation(&self, num: PermIndex) -> Result<Vec<T>, TreeError> {
        let mut node = self.checked_root(num)?;

        let mut offset = num - 1;
        let mut perm = Vec::with_capacity(self.symbol_count());
        while !node.is_leaf() {
            // Block size comes from this node's own fan-out
            let (child_index, rest) =
                split(offset, node.num_children()).ok_or_else(|| self.out_of_range(num))?;
            let child = node
                .children()
                .get(child_index)
                .ok_or_else(|| self.out_of_range(num))?;

            trace!(
                depth = child.position().depth(),
                child_index,
                offset = rest,
                "Navigate"
            );

            perm.extend(child.value().cloned());
            offset = rest;
            node = child;
        }

        Ok(perm)
    }

    fn checked_root(&self, num: PermIndex) -> Result<&Node<T>, TreeError> {
        match self.root() {
            Some(root) if (1..=self.total_permutations()).contains(&num) => Ok(root),
            _ => {
                trace!(num, total = self.total_permutations(), "Index out of range");
                Err(self.out_of_range(num))
            }
        }
    }

    fn out_of_range(&self, num: PermIndex) -> TreeError {
        TreeError::IndexOutOfRange {
            num,
            total: self.total_permutations(),
        }
    }
}

/// Depth-first countdown over the leaves below `node`.
///
/// Breaks with the completed permutation when the countdown reaches zero on a
/// leaf, otherwise continues with the countdown left after this subtree. The
/// path buffer is restored on `Continue`.
fn traverse<T: Clone>(
    node: &Node<T>,
    mut remaining: PermIndex,
    path: &mut Vec<T>,
) -> ControlFlow<Vec<T>, PermIndex> {
    path.extend(node.value().cloned());

    if node.is_leaf() {
        remaining -= 1;
        if remaining == 0 {
            return ControlFlow::Break(std::mem::take(path));
        }
    } else {
        for child in node.children() {
            match traverse(child, remaining, path) {
                ControlFlow::Continue(left) => remaining = left,
                found => return found,
            }
        }
    }

    path.pop();
    ControlFlow::Continue(remaining)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        factorial::factorial_digits,
        test::{perm_string, symbols, tree_of},
    };

    #[test]
    fn test_scenario() {
        let tree = tree_of("123");

        assert_eq!(perm_string(tree.perm_by_traversal(1)), "123");
        assert_eq!(perm_string(tree.perm_by_navigation(1)), "123");
        assert_eq!(perm_string(tree.perm_by_traversal(2)), "132");
        assert_eq!(perm_string(tree.perm_by_navigation(2)), "132");
        assert_eq!(perm_string(tree.perm_by_traversal(6)), "321");
        assert_eq!(perm_string(tree.perm_by_navigation(6)), "321");

        assert!(tree.perm_by_traversal(7).is_empty());
        assert!(tree.perm_by_traversal(0).is_empty());
        assert!(tree.perm_by_navigation(7).is_empty());
        assert!(tree.perm_by_navigation(0).is_empty());
    }

    #[test]
    fn test_out_of_range_error() {
        let tree = tree_of("123");
        assert_eq!(
            tree.try_perm_by_traversal(7),
            Err(TreeError::IndexOutOfRange { num: 7, total: 6 })
        );
        assert_eq!(
            tree.try_perm_by_navigation(0),
            Err(TreeError::IndexOutOfRange { num: 0, total: 6 })
        );
        assert_eq!(
            tree.try_perm_by_navigation(PermIndex::MAX),
            Err(TreeError::IndexOutOfRange {
                num: PermIndex::MAX,
                total: 6
            })
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = tree_of("");
        for num in [0, 1, 2] {
            assert!(tree.perm_by_traversal(num).is_empty());
            assert!(tree.perm_by_navigation(num).is_empty());
        }
    }

    #[test]
    fn test_single_symbol() {
        let tree = tree_of("z");
        assert_eq!(tree.perm_by_traversal(1), vec!['z']);
        assert_eq!(tree.perm_by_navigation(1), vec!['z']);
        assert!(tree.perm_by_navigation(2).is_empty());
    }

    #[test]
    fn test_duplicate_symbols() {
        // Repeated branches stay indexable, and both strategies agree
        let tree = tree_of("aab");
        let all = tree.all_perms();
        for num in 1..=tree.total_permutations() {
            let expected = &all[num as usize - 1];
            assert_eq!(&tree.perm_by_traversal(num), expected);
            assert_eq!(&tree.perm_by_navigation(num), expected);
        }
    }

    #[test]
    fn test_navigation_follows_digits() {
        let tree = PermutationTree::new(0..5usize).unwrap();
        for index in 0..tree.total_permutations() {
            // Symbols are 0..n, so the chosen child among the remaining
            // symbols is the Lehmer code digit
            let perm = tree.perm_by_navigation(index + 1);
            let mut remaining: Vec<usize> = (0..5).collect();
            let digits: Vec<usize> = perm
                .iter()
                .map(|symbol| {
                    let digit = remaining.iter().position(|s| s == symbol).unwrap();
                    remaining.remove(digit);
                    digit
                })
                .collect();
            assert_eq!(Some(digits), factorial_digits(index, 5));
        }
    }

    #[traced_test]
    #[test]
    fn test_navigation_trace() {
        let tree = tree_of("abc");
        assert_eq!(perm_string(tree.perm_by_navigation(4)), "bca");
        assert!(logs_contain("Navigate"));
    }

    fn tree_and_index() -> impl Strategy<Value = (PermutationTree<u8>, PermIndex)> {
        (0..=6u8).prop_flat_map(|n| {
            let tree = PermutationTree::new(0..n).unwrap();
            let total = tree.total_permutations();
            (Just(tree), 1..=total.max(1))
        })
    }

    proptest! {
        #[test]
        fn strategies_agree((tree, num) in tree_and_index()) {
            prop_assume!(!tree.is_empty());
            let all = tree.all_perms();
            let traversal = tree.perm_by_traversal(num);
            let navigation = tree.perm_by_navigation(num);
            prop_assert_eq!(&traversal, &navigation);
            prop_assert_eq!(&traversal, &all[num as usize - 1]);
        }

        #[test]
        fn out_of_range_is_empty(n in 0..=5usize, over in 1..1000u64) {
            let tree = PermutationTree::new(symbols(n)).unwrap();
            let num = tree.total_permutations() + over;
            prop_assert!(tree.perm_by_traversal(num).is_empty());
            prop_assert!(tree.perm_by_navigation(num).is_empty());
            prop_assert!(tree.perm_by_traversal(0).is_empty());
            prop_assert!(tree.perm_by_navigation(0).is_empty());
        }

        #[test]
        fn lookups_idempotent((tree, num) in tree_and_index()) {
            prop_assert_eq!(tree.perm_by_traversal(num), tree.perm_by_traversal(num));
            prop_assert_eq!(tree.perm_by_navigation(num), tree.perm_by_navigation(num));
        }
    }
}
