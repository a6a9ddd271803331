//! Structural dumps of an [`AvlTree`] for external visualisation.
//!
//! [`to_dot`] produces Graphviz text with record-shaped nodes: leaves carry a single
//! field, internal nodes carry `<C0>` and `<C1>` ports that the left and right edges
//! attach to. Nothing here rasterises; the caller pipes the text to a renderer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::avl::{AvlTree, Keyed, Node, NodeId};

const DOT_HEADER: &str = "digraph cards {\n\
rankdir=TB;\n\
node [shape = record, style=filled, fillcolor=\"#8b7bc3\"];\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize tree snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders the tree as a Graphviz digraph. An empty tree yields only the header.
pub fn to_dot<T: Keyed + Clone + Display>(tree: &AvlTree<T>) -> String {
    let mut out = String::from(DOT_HEADER);
    if let Some(root) = tree.root() {
        write_node(&mut out, root);
    }
    out.push_str("}\n");
    out
}

fn write_node<T: Keyed + Display>(out: &mut String, node: &Node<T>) {
    let label = escape_label(&node.item().to_string());
    // Writing into a String cannot fail.
    let _ = if node.is_leaf() {
        writeln!(out, "{} [label=\"{}\"];", node.id(), label)
    } else {
        writeln!(out, "{} [label=\"<C0>|{}|<C1>\"];", node.id(), label)
    };
    if let Some(left) = node.left() {
        write_node(out, left);
        let _ = writeln!(out, "{}:C0 -> {};", node.id(), left.id());
    }
    if let Some(right) = node.right() {
        write_node(out, right);
        let _ = writeln!(out, "{}:C1 -> {};", node.id(), right.id());
    }
}

fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '|' | '<' | '>' | '{' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Writes [`to_dot`] output to `path`. The tree is only read.
pub fn write_dot<T, P>(tree: &AvlTree<T>, path: P) -> Result<(), ExportError>
where
    T: Keyed + Clone + Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, to_dot(tree)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One node of a [`TreeSnapshot`], children referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot<T> {
    pub id: NodeId,
    pub item: T,
    pub height: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Flat, serializable view of the tree shape, nodes listed in pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot<T> {
    pub root: Option<NodeId>,
    pub height: i32,
    pub nodes: Vec<NodeSnapshot<T>>,
}

impl<T: Serialize> TreeSnapshot<T> {
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: Display> Display for TreeSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.nodes {
            write!(f, "{} {} h={}", n.id, n.item, n.height)?;
            if let Some(l) = n.left {
                write!(f, " L={}", l)?;
            }
            if let Some(r) = n.right {
                write!(f, " R={}", r)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn snapshot<T: Keyed + Clone>(tree: &AvlTree<T>) -> TreeSnapshot<T> {
    let mut nodes = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        snapshot_node(root, &mut nodes);
    }
    TreeSnapshot {
        root: tree.root().map(Node::id),
        height: tree.height(),
        nodes,
    }
}

fn snapshot_node<T: Keyed + Clone>(node: &Node<T>, nodes: &mut Vec<NodeSnapshot<T>>) {
    nodes.push(NodeSnapshot {
        id: node.id(),
        item: node.item().clone(),
        height: node.height(),
        left: node.left().map(Node::id),
        right: node.right().map(Node::id),
    });
    if let Some(left) = node.left() {
        snapshot_node(left, nodes);
    }
    if let Some(right) = node.right() {
        snapshot_node(right, nodes);
    }
}
