//! Builders for constructing permutation trees.
//!
//! [`TreeBuilder`] collects the input symbols and construction options, then
//! drives a [`NodeBuilder`] recursively from the sentinel down to the leaves.
//!

use std::collections::HashMap;

use tracing::{debug, debug_span, warn};

use crate::{
    error::TreeError,
    factorial::{factorial, MAX_SYMBOLS},
    node::{Node, NodePosition},
    NodeDepth, NodeIndex, PermutationTree,
};

/// A builder for adding children below one node.
///
/// Created by [`TreeBuilder::build`] for the sentinel and then once per
/// child, each builder holding a mutable borrow of the node it extends.
pub struct NodeBuilder<'a, T> {
    // Node receiving children
    node: &'a mut Node<T>,

    // Next free index for each depth, shared across the whole build
    depth_index: &'a mut HashMap<NodeDepth, NodeIndex>,

    position: NodePosition,

    // Nodes created so far, shared across the whole build
    created: &'a mut usize,
}

impl<'a, T> NodeBuilder<'a, T>
where
    T: Clone,
{
    fn new(
        node: &'a mut Node<T>,
        position: NodePosition,
        depth_index: &'a mut HashMap<NodeDepth, NodeIndex>,
        created: &'a mut usize,
    ) -> Self {
        Self {
            node,
            depth_index,
            position,
            created,
        }
    }

    /// Adds a child to the current node.
    ///
    /// # Arguments
    ///
    /// * `value`: The symbol held by the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, value: T, f: F) -> Result<(), TreeError>
    where
        F: FnOnce(&mut NodeBuilder<'_, T>) -> Result<(), TreeError>,
    {
        let child_index = self.node.num_children();

        let depth = self.position.depth + 1;
        let depth_index = self.depth_index.entry(depth).or_insert(0);

        let position = NodePosition {
            depth,
            index: *depth_index,
            child_index,
        };

        *depth_index += 1;

        let mut child = Node::new(value).with_position(position);
        *self.created += 1;

        let mut node_builder =
            NodeBuilder::new(&mut child, position, self.depth_index, self.created);

        // Call the supplied closure with the NodeBuilder to add this node's children
        f(&mut node_builder)?;

        // Release the borrow of child before moving it into the parent
        drop(node_builder);

        self.node.push_child(child);

        Ok(())
    }

    /// Adds one child per remaining symbol, in order, each followed by a
    /// subtree over the other remaining symbols.
    ///
    /// Symbols are removed by position, so equal symbols at different
    /// positions still produce separate branches.
    pub fn branch(&mut self, remaining: &[T]) -> Result<(), TreeError> {
        for (i, value) in remaining.iter().enumerate() {
            let rest: Vec<T> = remaining[..i]
                .iter()
                .chain(&remaining[i + 1..])
                .cloned()
                .collect();

            self.child(value.clone(), |child| child.branch(&rest))?;
        }
        Ok(())
    }

    pub fn node(&self) -> &Node<T> {
        self.node
    }

    pub fn position(&self) -> &NodePosition {
        &self.position
    }
}

/// A builder for constructing permutation trees.
///
/// # Examples
///
/// ```
/// use pmtree::TreeBuilder;
///
/// let tree = TreeBuilder::new()
///     .symbols(['x', 'y', 'z'])
///     .reject_duplicates(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.total_permutations(), 6);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<T> {
    symbols: Vec<T>,
    max_symbols: usize,
    reject_duplicates: bool,
    debug_span: tracing::Span,
}

impl<T> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeBuilder<T> {
    /// Creates a new `TreeBuilder` instance with no symbols.
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            symbols: Vec::new(),
            max_symbols: MAX_SYMBOLS,
            reject_duplicates: false,
            debug_span,
        }
    }

    /// Appends symbols to the input sequence.
    pub fn symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Appends a single symbol to the input sequence.
    pub fn symbol(mut self, symbol: T) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Limits the number of input symbols. Values above [`MAX_SYMBOLS`] are
    /// clamped, since larger permutation counts do not fit a `u64`.
    pub fn max_symbols(mut self, max: usize) -> Self {
        self.max_symbols = max.min(MAX_SYMBOLS);
        self
    }

    /// Fail the build when two input positions hold equal symbols.
    pub fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }
}

impl<T> TreeBuilder<T>
where
    T: Clone + PartialEq,
{
    /// Returns the constructed tree.
    pub fn build(self) -> Result<PermutationTree<T>, TreeError> {
        self.debug_span.in_scope(|| {
            let count = self.symbols.len();

            if count > self.max_symbols {
                warn!(count, max = self.max_symbols, "Too many symbols");
                return Err(TreeError::TooManySymbols {
                    count,
                    max: self.max_symbols,
                });
            }

            if self.reject_duplicates {
                if let Some((first, second)) = find_duplicate(&self.symbols) {
                    warn!(first, second, "Duplicate symbol");
                    return Err(TreeError::DuplicateSymbol { first, second });
                }
            }

            if count == 0 {
                debug!("No symbols, built empty tree");
                return Ok(PermutationTree::empty());
            }

            let total = factorial(count).ok_or(TreeError::TooManySymbols {
                count,
                max: MAX_SYMBOLS,
            })?;

            let mut root = Node::sentinel().with_position(NodePosition::zero());
            let mut depth_index = HashMap::new();
            let mut created = 1;

            let mut node_builder = NodeBuilder::new(
                &mut root,
                NodePosition::zero(),
                &mut depth_index,
                &mut created,
            );
            node_builder.branch(&self.symbols)?;
            drop(node_builder);

            debug!(
                symbols = count,
                permutations = total,
                nodes = created,
                "Finished building tree"
            );

            Ok(PermutationTree::from_root(root, total, count))
        })
    }
}

/// Positions of the first pair of equal symbols.
fn find_duplicate<T: PartialEq>(symbols: &[T]) -> Option<(usize, usize)> {
    symbols.iter().enumerate().find_map(|(second, symbol)| {
        symbols[..second]
            .iter()
            .position(|other| other == symbol)
            .map(|first| (first, second))
    })
}
