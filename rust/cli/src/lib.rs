//! # cardtree CLI Library
//!
//! Command-line front end for the card AVL tree game in `cardtree-engine`.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream for the interactive `session` command.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let code = cardtree_cli::run(
//!     ["cardtree", "tree", "--cards", "A♣,2♣,3♣", "--order", "pre"],
//!     &mut out,
//!     &mut std::io::sink(),
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("cards: 2♣ A♣ 3♣"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `tree`: Build a tree and print a traversal and its height
//! - `level`: Print the cards on one level of the tree
//! - `dot`: Print or write the Graphviz description (or a JSON snapshot)
//! - `render`: Pipe the Graphviz description to an external renderer
//! - `deal`: Deal a seeded random hand
//! - `session`: Play interactively, one command per stdin line
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod render;
pub mod ui;

use cli::{CardtreeCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_dot_command, handle_level_command,
    handle_render_command, handle_session_command, handle_tree_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["tree", "level", "dot", "render", "deal", "session", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// Like [`run`], reading `session` commands from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardtreeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::Config(e.to_string()).to_string());
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, &resolved, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    resolved: &config::ConfigResolved,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = &resolved.config;
    match cmd {
        Commands::Tree { hand, order } => handle_tree_command(&hand, &order, config, out),
        Commands::Level { hand, level } => handle_level_command(&hand, level, config, out),
        Commands::Dot { hand, output, json } => {
            handle_dot_command(&hand, output.as_deref(), json, config, out)
        }
        Commands::Render {
            hand,
            output,
            format,
        } => handle_render_command(&hand, &output, format.as_deref(), config, out),
        Commands::Deal { seed, count } => handle_deal_command(seed, count, config, out, err),
        Commands::Session => handle_session_command(config, input, out, err),
        Commands::Cfg => handle_cfg_command(resolved, out),
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Usage: cardtree <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: cardtree --help")
}
