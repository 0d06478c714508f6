use crate::{
    builder::TreeBuilder,
    error::TreeError,
    iterator::NodeIter,
    node::Node,
    PermIndex,
};

/// A tree holding every permutation of a sequence of symbols.
///
/// Each path from a child of the sentinel root down to a leaf spells out one
/// permutation. Children appear in the order their symbols were supplied, so
/// a depth-first, left to right walk visits permutations in lexicographic
/// order relative to the input order.
///
/// The tree is immutable once built. Every query borrows it shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTree<T> {
    root: Option<Node<T>>,
    total: PermIndex,
    symbols: usize,
}

impl<T> PermutationTree<T> {
    pub(crate) fn empty() -> Self {
        Self {
            root: None,
            total: 0,
            symbols: 0,
        }
    }

    pub(crate) fn from_root(root: Node<T>, total: PermIndex, symbols: usize) -> Self {
        Self {
            root: Some(root),
            total,
            symbols,
        }
    }

    /// Creates a [`TreeBuilder`] for configuring construction.
    pub fn builder() -> TreeBuilder<T> {
        TreeBuilder::new()
    }

    /// The sentinel root, absent for a tree built from no symbols.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Number of permutations held, `n!` for `n` symbols and 0 when empty.
    pub fn total_permutations(&self) -> PermIndex {
        self.total
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-order iterator over every node, sentinel first.
    pub fn iter(&self) -> NodeIter<'_, T> {
        match &self.root {
            Some(root) => NodeIter::new(root),
            None => NodeIter::empty(),
        }
    }

    /// Number of nodes including the sentinel.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

impl<T> PermutationTree<T>
where
    T: Clone + PartialEq,
{
    /// Builds the tree for `symbols` with the default [`TreeBuilder`] options.
    ///
    /// Empty input yields an empty tree rather than an error.
    pub fn new<I>(symbols: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        TreeBuilder::new().symbols(symbols).build()
    }
}

impl<T> PermutationTree<T>
where
    T: Clone,
{
    /// Every permutation in depth-first, left to right order.
    pub fn all_perms(&self) -> Vec<Vec<T>> {
        let mut result = Vec::new();

        if let Some(root) = &self.root {
            let mut current = Vec::with_capacity(self.symbols);
            for child in root.children() {
                collect_perms(child, &mut current, &mut result);
            }
        }

        result
    }
}

fn collect_perms<T: Clone>(node: &Node<T>, current: &mut Vec<T>, result: &mut Vec<Vec<T>>) {
    current.extend(node.value().cloned());

    if node.is_leaf() {
        result.push(current.clone());
    } else {
        for child in node.children() {
            collect_perms(child, current, result);
        }
    }

    current.pop();
}

impl<T> TryFrom<Vec<T>> for PermutationTree<T>
where
    T: Clone + PartialEq,
{
    type Error = TreeError;

    fn try_from(symbols: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl<'a, T> IntoIterator for &'a PermutationTree<T> {
    type Item = crate::iterator::IterNode<'a, T>;
    type IntoIter = NodeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{expected_node_count, perm_strings, reference_factorial, symbols, tree_of};

    #[test]
    fn test_enumerate() {
        let tree = tree_of("123");
        assert_eq!(
            perm_strings(tree.all_perms()),
            vec!["123", "132", "213", "231", "312", "321"]
        );
        assert_eq!(tree.total_permutations(), 6);
    }

    #[test]
    fn test_input_order() {
        // Order follows the input, not the sorted symbols
        let tree = tree_of("cab");
        assert_eq!(
            perm_strings(tree.all_perms()),
            vec!["cab", "cba", "acb", "abc", "bca", "bac"]
        );
    }

    #[test]
    fn test_single() {
        let tree = tree_of("x");
        assert_eq!(tree.all_perms(), vec![vec!['x']]);
        assert_eq!(tree.total_permutations(), 1);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_empty() {
        let tree = PermutationTree::<char>::new([]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.all_perms().is_empty());
        assert_eq!(tree.total_permutations(), 0);
        assert_eq!(tree.symbol_count(), 0);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_counts() {
        for n in 0..=6 {
            let tree = PermutationTree::new(symbols(n)).unwrap();
            let expected = if n == 0 { 0 } else { reference_factorial(n) };
            assert_eq!(tree.total_permutations(), expected);
            assert_eq!(tree.all_perms().len() as PermIndex, expected);
            assert_eq!(tree.node_count(), expected_node_count(n));
        }
    }

    #[test]
    fn test_try_from() {
        let tree = PermutationTree::try_from(vec![1u32, 2]).unwrap();
        assert_eq!(tree.all_perms(), vec![vec![1, 2], vec![2, 1]]);
        assert_eq!(tree, PermutationTree::new([1u32, 2]).unwrap());
    }

    #[test]
    fn test_builder_entry() {
        let tree = PermutationTree::builder().symbols("ab".chars()).build().unwrap();
        assert_eq!(perm_strings(tree.all_perms()), vec!["ab", "ba"]);
    }

    #[test]
    fn test_idempotent() {
        let tree = tree_of("abcd");
        assert_eq!(tree.all_perms(), tree.all_perms());
    }

    #[test]
    fn test_into_iterator() {
        let tree = tree_of("abc");
        let leaves = (&tree).into_iter().filter(|node| node.is_leaf()).count();
        assert_eq!(leaves, 6);
    }
}
