use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::avl::{AvlTree, Keyed};
use crate::cards::Card;
use crate::errors::GameError;
use crate::export::{self, TreeSnapshot};

/// Value a single card, or a pair of cards, must reach to leave the tree.
pub const REMOVAL_SUM: u8 = 13;

/// Traversal order accepted by [`GameSession::traversal`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "in" | "inorder" => Ok(Traversal::InOrder),
            "pre" | "preorder" => Ok(Traversal::PreOrder),
            "post" | "postorder" => Ok(Traversal::PostOrder),
            _ => Err(format!("unknown traversal `{}`", s)),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::InOrder => "inOrder",
            Traversal::PreOrder => "preOrder",
            Traversal::PostOrder => "postOrder",
        };
        f.write_str(name)
    }
}

/// One game over a tree of cards.
///
/// All rule checks happen here, before the tree is touched: the tree itself accepts
/// duplicates and silently refuses two-child deletions, so every operation that
/// could hit either case is rejected with a [`GameError`] first.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    tree: Option<AvlTree<Card>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current tree with one built from `cards`, in order.
    ///
    /// The previous tree is kept if any card is repeated.
    pub fn start<I>(&mut self, cards: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut tree = AvlTree::new();
        for card in cards {
            if contains(&tree, &card) {
                tracing::warn!(card = %card, "rejected start with duplicated card");
                return Err(GameError::DuplicateCard(card));
            }
            tree.insert(card);
        }
        tracing::info!(cards = tree.len(), height = tree.height(), "game started");
        self.tree = Some(tree);
        Ok(())
    }

    /// Parses every card before starting; one bad card rejects the whole hand.
    pub fn start_from_text<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<(), GameError> {
        let cards = texts
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        self.start(cards)
    }

    pub fn is_started(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Result<&AvlTree<Card>, GameError> {
        self.tree.as_ref().ok_or(GameError::NoGame)
    }

    fn tree_mut(&mut self) -> Result<&mut AvlTree<Card>, GameError> {
        self.tree.as_mut().ok_or(GameError::NoGame)
    }

    pub fn add(&mut self, card: Card) -> Result<(), GameError> {
        let tree = self.tree_mut()?;
        if contains(tree, &card) {
            tracing::warn!(card = %card, "rejected duplicated card");
            return Err(GameError::DuplicateCard(card));
        }
        tree.insert(card);
        tracing::debug!(card = %card, height = tree.height(), "card added");
        Ok(())
    }

    /// Removes a lone King. The card must be present and a leaf.
    pub fn remove(&mut self, card: Card) -> Result<(), GameError> {
        let tree = self.tree_mut()?;
        check_removable(tree, &card).inspect_err(log_rejection)?;
        if card.rank_value() != REMOVAL_SUM {
            let err = GameError::NotKing(card);
            log_rejection(&err);
            return Err(err);
        }
        tree.delete(card.key());
        tracing::debug!(card = %card, height = tree.height(), "card removed");
        Ok(())
    }

    /// Removes two leaf cards whose values add up to 13.
    ///
    /// Both removals are applied to a copy that replaces the tree only when both
    /// succeed: removing `first` can rotate `second` into a parent position.
    pub fn remove_pair(&mut self, first: Card, second: Card) -> Result<(), GameError> {
        let tree = self.tree_mut()?;
        let checks = check_present(tree, &first)
            .and_then(|()| check_present(tree, &second))
            .and_then(|()| check_leaf(tree, &first))
            .and_then(|()| check_leaf(tree, &second));
        checks.inspect_err(log_rejection)?;
        if first.rank_value() + second.rank_value() != REMOVAL_SUM {
            let err = GameError::SumMismatch(first, second);
            log_rejection(&err);
            return Err(err);
        }

        let mut staged = tree.clone();
        staged.delete(first.key());
        if staged.delete(second.key()).is_none() {
            let err = GameError::ParentCard(second);
            log_rejection(&err);
            return Err(err);
        }
        *tree = staged;
        tracing::debug!(first = %first, second = %second, height = tree.height(), "pair removed");
        Ok(())
    }

    /// Cards at a 1-based level, left to right.
    pub fn level(&self, level: usize) -> Result<Vec<Card>, GameError> {
        let tree = self.tree()?;
        let max = usize::try_from(tree.height() + 1).unwrap_or(0);
        if level < 1 || level > max {
            return Err(GameError::InvalidLevel { level, max });
        }
        Ok(tree.level(level - 1))
    }

    pub fn traversal(&self, order: Traversal) -> Result<Vec<Card>, GameError> {
        let tree = self.tree()?;
        Ok(match order {
            Traversal::InOrder => tree.in_order(),
            Traversal::PreOrder => tree.pre_order(),
            Traversal::PostOrder => tree.post_order(),
        })
    }

    pub fn height(&self) -> Result<i32, GameError> {
        Ok(self.tree()?.height())
    }

    pub fn contains(&self, card: &Card) -> Result<bool, GameError> {
        Ok(contains(self.tree()?, card))
    }

    /// A card is a parent when its node has at least one child.
    pub fn is_parent(&self, card: &Card) -> Result<bool, GameError> {
        let tree = self.tree()?;
        Ok(tree.search(card.key()).is_some_and(|n| !n.is_leaf()))
    }

    pub fn cards(&self) -> Result<Vec<Card>, GameError> {
        self.traversal(Traversal::InOrder)
    }

    pub fn dot(&self) -> Result<String, GameError> {
        Ok(export::to_dot(self.tree()?))
    }

    pub fn snapshot(&self) -> Result<TreeSnapshot<Card>, GameError> {
        Ok(export::snapshot(self.tree()?))
    }
}

fn contains(tree: &AvlTree<Card>, card: &Card) -> bool {
    tree.search(card.key()).is_some_and(|n| n.item() == card)
}

fn check_present(tree: &AvlTree<Card>, card: &Card) -> Result<(), GameError> {
    if contains(tree, card) {
        Ok(())
    } else {
        Err(GameError::CardNotFound(*card))
    }
}

fn check_leaf(tree: &AvlTree<Card>, card: &Card) -> Result<(), GameError> {
    match tree.search(card.key()) {
        Some(node) if !node.is_leaf() => Err(GameError::ParentCard(*card)),
        _ => Ok(()),
    }
}

fn check_removable(tree: &AvlTree<Card>, card: &Card) -> Result<(), GameError> {
    check_present(tree, card)?;
    check_leaf(tree, card)
}

fn log_rejection(err: &GameError) {
    tracing::warn!(error = %err, "rejected removal");
}
