//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "renderer": {
//!     "value": "dot",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Displays the already resolved configuration as formatted JSON.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "renderer": {
            "value": config.renderer,
            "source": sources.renderer,
        },
        "image_format": {
            "value": config.image_format,
            "source": sources.image_format,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
