//! Line-oriented game session.
//!
//! Each stdin line is one command. Rule violations are reported on the error stream
//! and the session keeps going with the tree unchanged.

use super::split_cards;
use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use cardtree_engine::cards::Card;
use cardtree_engine::errors::GameError;
use cardtree_engine::game::{GameSession, Traversal};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  start <cards>        start a new tree (comma or space separated)
  deal [count]         start a new tree from a seeded deal
  add <card>           insert a card
  remove <card> [card] remove a King, or two cards adding up to 13
  level <n>            cards at level n (root is 1)
  traverse [in|pre|post]
  height
  dot
  nodes                one line per node: id, card, height, children
  snapshot
  help
  quit";

enum Flow {
    Continue,
    Quit,
}

/// Handle the session command, reading commands from `input` until EOF or `quit`.
pub fn handle_session_command(
    config: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = GameSession::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match execute(&mut game, trimmed, config, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }
    Ok(())
}

fn execute(
    game: &mut GameSession,
    line: &str,
    config: &Config,
    out: &mut dyn Write,
) -> Result<Flow, CliError> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    match command.to_ascii_lowercase().as_str() {
        "start" => {
            let texts = split_cards(rest);
            if texts.is_empty() {
                return Err(CliError::InvalidInput("start needs at least one card".into()));
            }
            game.start_from_text(&texts)?;
            writeln!(out, "started with {} cards", texts.len())?;
        }
        "deal" => {
            let count = if rest.is_empty() {
                config.hand_size
            } else {
                parse_number(rest, "count")?
            };
            if !(1..=52).contains(&count) {
                return Err(CliError::InvalidInput("count must be 1-52".into()));
            }
            let hand = super::deal_hand(None, count, config);
            writeln!(out, "dealt {}", ui::format_cards(&hand))?;
            game.start(hand)?;
        }
        "add" => {
            let card = single_card(rest)?;
            game.add(card)?;
            writeln!(out, "added {}", card)?;
        }
        "remove" => match split_cards(rest).as_slice() {
            [one] => {
                let card = parse_card(one)?;
                game.remove(card)?;
                writeln!(out, "removed {}", card)?;
            }
            [first, second] => {
                let (first, second) = (parse_card(first)?, parse_card(second)?);
                game.remove_pair(first, second)?;
                writeln!(out, "removed {} {}", first, second)?;
            }
            _ => return Err(CliError::InvalidInput("remove takes one or two cards".into())),
        },
        "level" => {
            let level = parse_number(rest, "level")?;
            let cards = game.level(level)?;
            writeln!(out, "level {}: {}", level, ui::format_cards(&cards))?;
        }
        "traverse" => {
            let order = if rest.is_empty() {
                Traversal::InOrder
            } else {
                rest.parse::<Traversal>().map_err(CliError::InvalidInput)?
            };
            let cards = game.traversal(order)?;
            writeln!(out, "{}: {}", order, ui::format_cards(&cards))?;
        }
        "height" => writeln!(out, "height: {}", game.height()?)?,
        "dot" => write!(out, "{}", game.dot()?)?,
        "nodes" => write!(out, "{}", game.snapshot()?)?,
        "snapshot" => writeln!(out, "{}", game.snapshot()?.to_json_pretty()?)?,
        "help" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            return Err(CliError::InvalidInput(format!(
                "unknown command `{}` (try `help`)",
                other
            )));
        }
    }
    Ok(Flow::Continue)
}

fn single_card(text: &str) -> Result<Card, CliError> {
    match split_cards(text).as_slice() {
        [one] => parse_card(one),
        _ => Err(CliError::InvalidInput("expected exactly one card".into())),
    }
}

fn parse_card(text: &str) -> Result<Card, CliError> {
    Ok(text.parse::<Card>().map_err(GameError::from)?)
}

fn parse_number(text: &str, what: &str) -> Result<usize, CliError> {
    text.parse()
        .map_err(|_| CliError::InvalidInput(format!("{} must be a positive number", what)))
}
