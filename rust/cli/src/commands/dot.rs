//! Dot command: structural dump of the tree for external tools.

use crate::cli::HandArgs;
use crate::config::Config;
use crate::error::CliError;
use cardtree_engine::export;
use std::io::Write;
use std::path::Path;

/// Handle the dot command.
///
/// Writes Graphviz text (or the JSON node snapshot with `json`) to `output` when
/// given, otherwise to `out`.
pub fn handle_dot_command(
    hand: &HandArgs,
    output: Option<&Path>,
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = super::start_session(hand, config)?;
    match (output, json) {
        (None, false) => write!(out, "{}", game.dot()?)?,
        (None, true) => writeln!(out, "{}", game.snapshot()?.to_json_pretty()?)?,
        (Some(path), false) => {
            export::write_dot(game.tree()?, path)?;
            writeln!(out, "wrote {}", path.display())?;
        }
        (Some(path), true) => {
            std::fs::write(path, format!("{}\n", game.snapshot()?.to_json_pretty()?))?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}
