//! Deal command handler.
//!
//! Deals a seeded random hand and prints it in the comma-separated form accepted
//! by `--cards`, so a dealt hand can be replayed exactly.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

const DECK_SIZE: usize = 52;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed; falls back to the configured seed, then to random
/// * `count` - Number of cards; falls back to the configured hand size
/// * `config` - Resolved configuration
/// * `out` - Output stream for the dealt hand
/// * `err` - Output stream for warnings
pub fn handle_deal_command(
    seed: Option<u64>,
    count: Option<usize>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut count = count.unwrap_or(config.hand_size);
    if count == 0 {
        return Err(CliError::InvalidInput("count must be at least 1".into()));
    }
    if count > DECK_SIZE {
        ui::display_warning(err, &format!("only {} cards in a deck", DECK_SIZE))?;
        count = DECK_SIZE;
    }
    let hand = super::deal_hand(seed, count, config);
    let text = hand
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "{}", text)?;
    Ok(())
}
