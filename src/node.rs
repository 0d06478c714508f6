//! Owned permutation tree nodes.
//!
//! Every node exclusively owns its children. There are no parent or sibling
//! references, so a subtree is released together with its owner.

use crate::{NodeDepth, NodeIndex};

/// Location of a node within the tree, assigned by the builder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePosition {
    // Distance from the sentinel, which sits at depth 0
    pub(crate) depth: NodeDepth,
    // Left to right rank among all nodes at the same depth
    pub(crate) index: NodeIndex,
    // Rank among the children of the parent
    pub(crate) child_index: NodeIndex,
}

impl NodePosition {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> NodeDepth {
        self.depth
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn child_index(&self) -> NodeIndex {
        self.child_index
    }
}

/// One symbol placed at one position of a permutation prefix.
///
/// The sentinel root carries no symbol. Every other node holds exactly one,
/// and a node without children terminates a permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: Option<T>,
    children: Vec<Node<T>>,
    position: NodePosition,
}

impl<T> Node<T> {
    pub(crate) fn sentinel() -> Self {
        Self {
            value: None,
            children: Vec::new(),
            position: NodePosition::zero(),
        }
    }

    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Some(value),
            children: Vec::new(),
            position: NodePosition::zero(),
        }
    }

    pub(crate) fn with_position(mut self, position: NodePosition) -> Self {
        self.position = position;
        self
    }

    /// The symbol held by this node, `None` for the sentinel.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Return the number of child nodes for this node
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn position(&self) -> &NodePosition {
        &self.position
    }

    /// Add a new child node to this node
    pub(crate) fn push_child(&mut self, node: Node<T>) {
        self.children.push(node);
    }
}
