//! # cardtree-engine: Card AVL Tree Core
//!
//! An AVL tree of playing cards keyed on `rank value + suit offset`, plus the game
//! rules that decide which cards may join or leave the tree.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`queue`] - FIFO accumulator used by traversals
//! - [`avl`] - Self-balancing tree with traversals and level queries
//! - [`export`] - Graphviz DOT text and serializable tree snapshots
//! - [`game`] - Game session enforcing duplicate, parent and sum-of-13 rules
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardtree_engine::game::{GameSession, Traversal};
//!
//! let mut game = GameSession::new();
//! game.start_from_text(&["A♣", "2♣", "3♣"]).unwrap();
//!
//! // Inserting three ascending keys rotates the middle card to the root
//! let level = game.level(1).unwrap();
//! assert_eq!(level[0].to_string(), "2♣");
//!
//! let cards: Vec<String> = game
//!     .traversal(Traversal::PreOrder)
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(cards, ["2♣", "A♣", "3♣"]);
//! ```
//!
//! ## Game Rules
//!
//! Only leaves may leave the tree: a King alone, or two leaves whose values add up
//! to 13. Violations come back as [`errors::GameError`]:
//!
//! ```rust
//! use cardtree_engine::errors::GameError;
//! use cardtree_engine::game::GameSession;
//!
//! let mut game = GameSession::new();
//! game.start_from_text(&["7♦", "6♣", "7♥"]).unwrap();
//!
//! match game.remove("7♦".parse().unwrap()) {
//!     Err(GameError::ParentCard(card)) => println!("{} still has children", card),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! game.remove_pair("6♣".parse().unwrap(), "7♥".parse().unwrap()).unwrap();
//! ```

pub mod avl;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod export;
pub mod game;
pub mod queue;
