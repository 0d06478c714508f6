use std::{collections::VecDeque, ops::Deref};

use crate::{node::Node, NodeDepth};

/// A node yielded by [`NodeIter`], tagged with its depth below the start node.
pub struct IterNode<'iter, T> {
    depth: NodeDepth,
    node: &'iter Node<T>,
}

impl<'iter, T> IterNode<'iter, T> {
    pub fn depth(&self) -> NodeDepth {
        self.depth
    }

    pub fn node(&self) -> &'iter Node<T> {
        self.node
    }
}

impl<'iter, T> Deref for IterNode<'iter, T> {
    type Target = Node<T>;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Pre-order, left to right iterator over a node and all of its descendants.
pub struct NodeIter<'iter, T> {
    stack: VecDeque<(NodeDepth, &'iter Node<T>)>,
}

impl<'iter, T> NodeIter<'iter, T> {
    pub fn new(node: &'iter Node<T>) -> Self {
        Self {
            stack: VecDeque::from([(0, node)]),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            stack: VecDeque::new(),
        }
    }
}

impl<'iter, T> Iterator for NodeIter<'iter, T> {
    type Item = IterNode<'iter, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop_front()?;

        // Push children in reverse so the leftmost child is visited next
        node.children()
            .iter()
            .rev()
            .for_each(|child| self.stack.push_front((depth + 1, child)));

        Some(IterNode { depth, node })
    }
}

impl<'iter, T> IntoIterator for &'iter Node<T> {
    type Item = IterNode<'iter, T>;
    type IntoIter = NodeIter<'iter, T>;

    fn into_iter(self) -> Self::IntoIter {
        NodeIter::new(self)
    }
}
