//! Self-balancing AVL tree keyed on an integer derived from each element.
//!
//! Nodes exclusively own their children (`Option<Box<Node>>`), there are no parent
//! links. Heights follow the `-1` for empty, `0` for leaf convention and are
//! recomputed on the way back up from every insert and delete, where each ancestor
//! is rebalanced with single or double rotations.
//!
//! ```rust
//! use cardtree_engine::avl::AvlTree;
//!
//! let mut tree: AvlTree<u32> = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.root().map(|n| n.key()), Some(20));
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.in_order(), vec![10, 20, 30]);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use crate::cards::Card;
use crate::queue::OrderedQueue;

/// Items stored in the tree expose a totally ordered integer key.
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for Card {
    fn key(&self) -> u32 {
        u32::from(self.total())
    }
}

impl Keyed for u32 {
    fn key(&self) -> u32 {
        *self
    }
}

/// Diagnostic identity of a node, assigned in creation order by the owning tree.
///
/// Never used for ordering or equality of the stored elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
pub struct Node<T> {
    item: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
    id: NodeId,
}

impl<T: Keyed> Node<T> {
    fn leaf(item: T, id: NodeId) -> Self {
        Self {
            item,
            height: 0,
            left: None,
            right: None,
            id,
        }
    }

    #[inline]
    pub fn key(&self) -> u32 {
        self.item.key()
    }

    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Stored height; a leaf is 0.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    fn update_height(&mut self) {
        self.height = 1 + height_of(self.left()).max(height_of(self.right()));
    }
}

/// Height of an optional subtree: `-1` when absent.
pub fn height_of<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |n| n.height)
}

/// `height(right) - height(left)`, 0 for an absent node.
pub fn balance_factor<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(0, |n| height_of(n.right.as_deref()) - height_of(n.left.as_deref()))
}

/// Number of rotations performed since the tree was created.
///
/// A double rotation counts once on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStats {
    pub left: u64,
    pub right: u64,
}

impl RotationStats {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.left + self.right
    }
}

/// Structural problems reported by [`AvlTree::verify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {key} stores height {stored}, expected {expected}")]
    StaleHeight { key: u32, stored: i32, expected: i32 },
    #[error("node {key} is unbalanced (balance factor {balance})")]
    Unbalanced { key: u32, balance: i32 },
    #[error("node {key} is out of search order")]
    OutOfOrder { key: u32 },
    #[error("tree counts {tracked} nodes but holds {actual}")]
    CountMismatch { tracked: usize, actual: usize },
}

/// AVL tree owning its nodes and the node id counter.
#[derive(Debug, Clone)]
pub struct AvlTree<T = Card> {
    root: Link<T>,
    len: usize,
    next_id: u32,
    rotations: RotationStats,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            next_id: 1,
            rotations: RotationStats::default(),
        }
    }
}

impl<T: Keyed + Clone> AvlTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub fn rotation_stats(&self) -> RotationStats {
        self.rotations
    }

    /// Height of the whole tree, `-1` when empty.
    #[must_use]
    pub fn height(&self) -> i32 {
        height_of(self.root())
    }

    /// Finds the node holding `key`: right when the node key is smaller, else left.
    pub fn search(&self, key: u32) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            if node.key() == key {
                break;
            }
            current = if node.key() < key {
                node.right()
            } else {
                node.left()
            };
        }
        current
    }

    pub fn contains(&self, key: u32) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `item`, rebalancing every ancestor on the way back up.
    ///
    /// Equal keys descend to the right. Uniqueness is not checked here; callers that
    /// need it must test [`AvlTree::contains`] first.
    pub fn insert(&mut self, item: T) {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let root = self.root.take();
        self.root = Some(insert_node(root, item, id, &mut self.rotations));
        self.len += 1;
    }

    /// Removes the node holding `key` when it has at most one child.
    ///
    /// Returns the removed item. A missing key or a node with two children leaves the
    /// tree unchanged and returns `None`; no in-order successor swap is attempted.
    pub fn delete(&mut self, key: u32) -> Option<T> {
        let mut removed = None;
        let root = self.root.take();
        self.root = delete_node(root, key, &mut removed, &mut self.rotations);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn in_order(&self) -> Vec<T> {
        let mut queue = OrderedQueue::new();
        if let Some(root) = self.root() {
            collect_in_order(root, &mut queue);
        }
        queue.drain_to_vec()
    }

    pub fn pre_order(&self) -> Vec<T> {
        let mut queue = OrderedQueue::new();
        if let Some(root) = self.root() {
            collect_pre_order(root, &mut queue);
        }
        queue.drain_to_vec()
    }

    pub fn post_order(&self) -> Vec<T> {
        let mut queue = OrderedQueue::new();
        if let Some(root) = self.root() {
            collect_post_order(root, &mut queue);
        }
        queue.drain_to_vec()
    }

    /// Items at depth `depth` (root is 0), left to right.
    ///
    /// Walks the whole tree. Depths past the bottom yield an empty vector.
    pub fn level(&self, depth: usize) -> Vec<T> {
        let mut queue = OrderedQueue::new();
        if let Some(root) = self.root() {
            collect_level(root, &mut queue, 0, depth);
        }
        queue.drain_to_vec()
    }

    /// Checks heights, balance factors, search ordering and the node count.
    pub fn verify(&self) -> Result<(), TreeError> {
        let mut count = 0;
        if let Some(root) = self.root() {
            verify_node(root, None, None, &mut count)?;
        }
        if count != self.len {
            return Err(TreeError::CountMismatch {
                tracked: self.len,
                actual: count,
            });
        }
        Ok(())
    }
}

fn insert_node<T: Keyed>(
    link: Link<T>,
    item: T,
    id: NodeId,
    stats: &mut RotationStats,
) -> Box<Node<T>> {
    let mut node = match link {
        Some(n) => n,
        None => return Box::new(Node::leaf(item, id)),
    };
    if node.key() > item.key() {
        node.left = Some(insert_node(node.left.take(), item, id, stats));
    } else {
        node.right = Some(insert_node(node.right.take(), item, id, stats));
    }
    rebalance(node, stats)
}

fn delete_node<T: Keyed>(
    link: Link<T>,
    key: u32,
    removed: &mut Option<T>,
    stats: &mut RotationStats,
) -> Link<T> {
    let mut node = link?;
    match node.key().cmp(&key) {
        Ordering::Greater => node.left = delete_node(node.left.take(), key, removed, stats),
        Ordering::Less => node.right = delete_node(node.right.take(), key, removed, stats),
        Ordering::Equal if node.left.is_none() || node.right.is_none() => {
            let child = node.left.take().or_else(|| node.right.take());
            *removed = Some(node.item);
            return child.map(|c| rebalance(c, stats));
        }
        Ordering::Equal => {}
    }
    Some(rebalance(node, stats))
}

fn rebalance<T: Keyed>(mut node: Box<Node<T>>, stats: &mut RotationStats) -> Box<Node<T>> {
    node.update_height();
    let bf = balance_factor(Some(&*node));
    if bf > 1 {
        // a balanced child only happens after delete and needs a single rotation
        let single = node
            .right()
            .is_some_and(|r| height_of(r.right()) >= height_of(r.left()));
        if !single {
            node.right = node.right.take().map(|r| rotate_right(r, stats));
        }
        node = rotate_left(node, stats);
    } else if bf < -1 {
        let single = node
            .left()
            .is_some_and(|l| height_of(l.left()) >= height_of(l.right()));
        if !single {
            node.left = node.left.take().map(|l| rotate_left(l, stats));
        }
        node = rotate_right(node, stats);
    }
    node
}

fn rotate_left<T: Keyed>(mut node: Box<Node<T>>, stats: &mut RotationStats) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    tracing::trace!(key = node.key(), pivot = pivot.key(), "rotate left");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    stats.left += 1;
    pivot
}

fn rotate_right<T: Keyed>(mut node: Box<Node<T>>, stats: &mut RotationStats) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    tracing::trace!(key = node.key(), pivot = pivot.key(), "rotate right");
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    stats.right += 1;
    pivot
}

fn collect_in_order<T: Clone>(node: &Node<T>, queue: &mut OrderedQueue<T>) {
    if let Some(left) = node.left.as_deref() {
        collect_in_order(left, queue);
    }
    queue.enqueue(node.item.clone());
    if let Some(right) = node.right.as_deref() {
        collect_in_order(right, queue);
    }
}

fn collect_pre_order<T: Clone>(node: &Node<T>, queue: &mut OrderedQueue<T>) {
    queue.enqueue(node.item.clone());
    if let Some(left) = node.left.as_deref() {
        collect_pre_order(left, queue);
    }
    if let Some(right) = node.right.as_deref() {
        collect_pre_order(right, queue);
    }
}

fn collect_post_order<T: Clone>(node: &Node<T>, queue: &mut OrderedQueue<T>) {
    if let Some(left) = node.left.as_deref() {
        collect_post_order(left, queue);
    }
    if let Some(right) = node.right.as_deref() {
        collect_post_order(right, queue);
    }
    queue.enqueue(node.item.clone());
}

fn collect_level<T: Clone>(
    node: &Node<T>,
    queue: &mut OrderedQueue<T>,
    depth: usize,
    target: usize,
) {
    if let Some(left) = node.left.as_deref() {
        collect_level(left, queue, depth + 1, target);
    }
    if depth == target {
        queue.enqueue(node.item.clone());
    }
    if let Some(right) = node.right.as_deref() {
        collect_level(right, queue, depth + 1, target);
    }
}

// Left keys are strictly below the node key, right keys are at or above it.
fn verify_node<T: Keyed>(
    node: &Node<T>,
    lower: Option<u32>,
    upper: Option<u32>,
    count: &mut usize,
) -> Result<i32, TreeError> {
    let key = node.key();
    if lower.is_some_and(|lo| key < lo) || upper.is_some_and(|hi| key >= hi) {
        return Err(TreeError::OutOfOrder { key });
    }
    *count += 1;
    let lh = match node.left() {
        Some(l) => verify_node(l, lower, Some(key), count)?,
        None => -1,
    };
    let rh = match node.right() {
        Some(r) => verify_node(r, Some(key), upper, count)?,
        None => -1,
    };
    let expected = 1 + lh.max(rh);
    if node.height != expected {
        return Err(TreeError::StaleHeight {
            key,
            stored: node.height,
            expected,
        });
    }
    let balance = rh - lh;
    if balance.abs() > 1 {
        return Err(TreeError::Unbalanced { key, balance });
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[u32]) -> AvlTree<u32> {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.insert(k);
        }
        tree
    }

    fn keys(node: Option<&Node<u32>>) -> Option<u32> {
        node.map(Node::key)
    }

    #[test]
    fn empty_tree_height_is_minus_one() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.height(), -1);
        assert!(tree.is_empty());
        assert!(tree.in_order().is_empty());
        assert!(tree.level(0).is_empty());
        assert_eq!(tree.search(1).map(Node::key), None);
        assert!(tree.verify().is_ok());
    }

    #[test]
    fn ascending_inserts_rotate_left_once() {
        let tree = tree_of(&[10, 20, 30]);
        let root = tree.root().unwrap();
        assert_eq!(root.key(), 20);
        assert_eq!(keys(root.left()), Some(10));
        assert_eq!(keys(root.right()), Some(30));
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.rotation_stats(), RotationStats { left: 1, right: 0 });
    }

    #[test]
    fn descending_inserts_rotate_right_once() {
        let tree = tree_of(&[30, 20, 10]);
        assert_eq!(keys(tree.root()), Some(20));
        assert_eq!(tree.rotation_stats(), RotationStats { left: 0, right: 1 });
    }

    #[test]
    fn zigzag_inserts_use_double_rotation() {
        let right_left = tree_of(&[10, 30, 20]);
        assert_eq!(keys(right_left.root()), Some(20));
        assert_eq!(right_left.rotation_stats(), RotationStats { left: 1, right: 1 });

        let left_right = tree_of(&[30, 10, 20]);
        assert_eq!(keys(left_right.root()), Some(20));
        assert_eq!(left_right.rotation_stats().total(), 2);
        assert_eq!(left_right.in_order(), vec![10, 20, 30]);
    }

    #[test]
    fn deleting_leaf_keeps_sibling() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert_eq!(tree.delete(5), Some(5));
        let root = tree.root().unwrap();
        assert_eq!(root.key(), 10);
        assert!(root.left().is_none());
        assert_eq!(keys(root.right()), Some(15));
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn deleting_single_child_node_promotes_child() {
        let mut tree = tree_of(&[10, 5, 15, 20]);
        assert_eq!(tree.delete(15), Some(15));
        assert_eq!(keys(tree.root().unwrap().right()), Some(20));
        assert_eq!(tree.in_order(), vec![5, 10, 20]);
        assert!(tree.verify().is_ok());
    }

    #[test]
    fn deleting_node_with_two_children_is_refused() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert_eq!(tree.delete(10), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.pre_order(), vec![10, 5, 15]);
    }

    #[test]
    fn deleting_missing_key_is_noop() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert_eq!(tree.delete(7), None);
        assert_eq!(tree.in_order(), vec![5, 10, 15]);
        let mut empty: AvlTree<u32> = AvlTree::new();
        assert_eq!(empty.delete(1), None);
    }

    #[test]
    fn delete_rebalances_ancestors() {
        // 10 -> (5, 20 -> (15, _)); removing 5 leaves 10 right-heavy by 2
        let mut tree = tree_of(&[10, 5, 20, 15]);
        tree.delete(5);
        let root = tree.root().unwrap();
        assert_eq!(root.key(), 15);
        assert_eq!(keys(root.left()), Some(10));
        assert_eq!(keys(root.right()), Some(20));
        assert!(tree.verify().is_ok());
    }

    #[test]
    fn delete_with_balanced_right_child_rotates_once() {
        let mut tree = tree_of(&[20, 10, 40, 5, 30, 50, 25, 55]);
        tree.verify().unwrap();
        let before = tree.rotation_stats();
        assert_eq!(tree.delete(5), Some(5));
        tree.verify().unwrap();
        assert_eq!(tree.pre_order(), vec![40, 20, 10, 30, 25, 50, 55]);
        assert_eq!(tree.rotation_stats().left, before.left + 1);
        assert_eq!(tree.rotation_stats().right, before.right);
    }

    #[test]
    fn delete_with_balanced_left_child_rotates_once() {
        let mut tree = tree_of(&[40, 50, 20, 55, 30, 10, 35, 5]);
        tree.verify().unwrap();
        let before = tree.rotation_stats();
        assert_eq!(tree.delete(55), Some(55));
        tree.verify().unwrap();
        assert_eq!(tree.pre_order(), vec![20, 10, 5, 40, 30, 35, 50]);
        assert_eq!(tree.rotation_stats().right, before.right + 1);
        assert_eq!(tree.rotation_stats().left, before.left);
    }

    #[test]
    fn traversal_orders() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.pre_order(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.post_order(), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn level_extraction() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.level(0), vec![4]);
        assert_eq!(tree.level(1), vec![2, 6]);
        assert_eq!(tree.level(2), vec![1, 3, 5, 7]);
        assert!(tree.level(3).is_empty());
    }

    #[test]
    fn height_and_balance_of_handles() {
        let tree = tree_of(&[10, 5, 15, 20]);
        assert_eq!(height_of(tree.search(10)), 2);
        assert_eq!(height_of(tree.search(20)), 0);
        assert_eq!(height_of(tree.search(99)), -1);
        assert_eq!(balance_factor(tree.search(10)), 1);
        assert_eq!(balance_factor(tree.search(15)), 1);
        assert_eq!(balance_factor(tree.search(99)), 0);
    }

    #[test]
    fn equal_keys_descend_right() {
        let mut tree = AvlTree::new();
        tree.insert(10u32);
        tree.insert(10u32);
        assert_eq!(tree.len(), 2);
        assert!(tree.root().unwrap().right().is_some());
        assert!(tree.root().unwrap().left().is_none());
    }

    #[test]
    fn node_ids_follow_creation_order_across_rotations() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.search(10).unwrap().id(), NodeId(1));
        assert_eq!(tree.search(20).unwrap().id(), NodeId(2));
        assert_eq!(tree.search(30).unwrap().id(), NodeId(3));
        assert_eq!(NodeId(2).to_string(), "node2");
    }

    #[test]
    fn cards_are_keyed_by_total() {
        let mut tree = AvlTree::new();
        for text in ["K♠", "A♣", "10♦"] {
            tree.insert(text.parse::<Card>().unwrap());
        }
        let totals: Vec<u8> = tree.in_order().iter().map(Card::total).collect();
        assert_eq!(totals, vec![1, 30, 73]);
        assert_eq!(tree.search(30).unwrap().item().to_string(), "10♦");
    }
}
