//! Tree command: traversal and height of a freshly built tree.

use crate::cli::HandArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::ui::format_cards;
use cardtree_engine::game::Traversal;
use std::io::Write;

/// Handle the tree command.
///
/// Prints three lines: the traversal order, the visited cards and the tree height.
pub fn handle_tree_command(
    hand: &HandArgs,
    order: &str,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let order: Traversal = order.parse().map_err(CliError::InvalidInput)?;
    let game = super::start_session(hand, config)?;
    let cards = game.traversal(order)?;
    writeln!(out, "order: {}", order)?;
    writeln!(out, "cards: {}", format_cards(&cards))?;
    writeln!(out, "height: {}", game.height()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &str) -> HandArgs {
        HandArgs {
            cards: Some(cards.into()),
            ..HandArgs::default()
        }
    }

    #[test]
    fn prints_pre_order_and_height() {
        let mut out = Vec::new();
        handle_tree_command(&hand("A♣ 2♣ 3♣"), "pre", &Config::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "order: preOrder\ncards: 2♣ A♣ 3♣\nheight: 1\n"
        );
    }

    #[test]
    fn rejects_unknown_order() {
        let mut out = Vec::new();
        let err = handle_tree_command(&hand("A♣"), "sideways", &Config::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }
}
