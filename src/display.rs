use std::fmt::Write;

use crate::{node::Node, PermutationTree};

pub struct TreeDisplay;

impl TreeDisplay {
    /// Write `node` and its descendants one per line, joined by box-drawing
    /// guides. The sentinel is drawn as `•`.
    pub fn format<T, F>(
        node: &Node<T>,
        f: &mut std::fmt::Formatter<'_>,
        data_format: F,
    ) -> std::fmt::Result
    where
        F: Fn(&T, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        Self::format_value(node, f, &data_format)?;
        f.write_char('\n')?;

        let mut guides = String::new();
        Self::format_children(node, f, &data_format, &mut guides)
    }

    fn format_children<T, F>(
        node: &Node<T>,
        f: &mut std::fmt::Formatter<'_>,
        data_format: &F,
        guides: &mut String,
    ) -> std::fmt::Result
    where
        F: Fn(&T, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        let count = node.num_children();

        for (i, child) in node.children().iter().enumerate() {
            let last = i + 1 == count;

            f.write_str(guides)?;
            f.write_str(if last { "┗━" } else { "┣━" })?;
            Self::format_value(child, f, data_format)?;
            f.write_char('\n')?;

            let len = guides.len();
            guides.push_str(if last { "  " } else { "┃ " });
            Self::format_children(child, f, data_format, guides)?;
            guides.truncate(len);
        }

        Ok(())
    }

    fn format_value<T, F>(
        node: &Node<T>,
        f: &mut std::fmt::Formatter<'_>,
        data_format: &F,
    ) -> std::fmt::Result
    where
        F: Fn(&T, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        match node.value() {
            Some(value) => data_format(value, f),
            None => f.write_char('•'),
        }
    }
}

impl<T> std::fmt::Display for PermutationTree<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root() {
            Some(root) => TreeDisplay::format(root, f, |value, f| write!(f, "{}", value)),
            None => f.write_str("(empty)"),
        }
    }
}
