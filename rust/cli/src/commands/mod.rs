//! Command handler modules for the cardtree CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod dot;
mod level;
mod render;
mod session;
mod tree;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use dot::handle_dot_command;
pub use level::handle_level_command;
pub use render::handle_render_command;
pub use session::handle_session_command;
pub use tree::handle_tree_command;

use crate::cli::HandArgs;
use crate::config::Config;
use crate::error::CliError;
use cardtree_engine::cards::Card;
use cardtree_engine::deck::Deck;
use cardtree_engine::game::GameSession;

/// Splits a card list on commas and whitespace.
pub(crate) fn split_cards(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Seeded deal of `count` cards; the seed falls back to configuration, then to random.
pub(crate) fn deal_hand(seed: Option<u64>, count: usize, config: &Config) -> Vec<Card> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    tracing::debug!(seed, count, "dealing hand");
    Deck::seeded(seed).deal(count)
}

/// Starts a game from `--cards`, or from a seeded deal when no cards are given.
pub(crate) fn start_session(hand: &HandArgs, config: &Config) -> Result<GameSession, CliError> {
    let mut game = GameSession::new();
    match &hand.cards {
        Some(text) => game.start_from_text(&split_cards(text))?,
        None => {
            let count = hand.deal.map_or(config.hand_size, usize::from);
            game.start(deal_hand(hand.seed, count, config))?
        }
    }
    Ok(game)
}
