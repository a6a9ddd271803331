use crate::cli::HandArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::ui::format_cards;
use std::io::Write;

/// Handle the level command. Levels are 1-based: level 1 is the root.
pub fn handle_level_command(
    hand: &HandArgs,
    level: usize,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = super::start_session(hand, config)?;
    let cards = game.level(level)?;
    writeln!(out, "level {}: {}", level, format_cards(&cards))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtree_engine::errors::GameError;

    #[test]
    fn prints_cards_at_level() {
        let hand = HandArgs {
            cards: Some("A♣,2♣,3♣".into()),
            ..HandArgs::default()
        };
        let mut out = Vec::new();
        handle_level_command(&hand, 2, &Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "level 2: A♣ 3♣\n");

        let err = handle_level_command(&hand, 3, &Config::default(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Game(GameError::InvalidLevel { level: 3, max: 2 })
        ));
    }
}
