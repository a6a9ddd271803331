//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cardtree",
    version,
    about = "Card game played on a self-balancing AVL tree"
)]
pub struct CardtreeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Where the starting cards come from: an explicit list, or a seeded deal.
#[derive(Args, Debug, Clone, Default)]
pub struct HandArgs {
    /// Cards separated by commas or spaces, e.g. "A♣,10♦,K♠"
    #[arg(long, conflicts_with = "deal")]
    pub cards: Option<String>,
    /// Deal this many random cards instead of --cards
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=52))]
    pub deal: Option<u8>,
    /// Seed for --deal
    #[arg(long, conflicts_with = "cards")]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print a traversal and its height
    Tree {
        #[command(flatten)]
        hand: HandArgs,
        /// Traversal order: in, pre or post
        #[arg(long, default_value = "in")]
        order: String,
    },
    /// Print the cards at a 1-based level of the tree
    Level {
        #[command(flatten)]
        hand: HandArgs,
        #[arg(long)]
        level: usize,
    },
    /// Print the Graphviz description of the tree
    Dot {
        #[command(flatten)]
        hand: HandArgs,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the JSON node snapshot instead of DOT
        #[arg(long)]
        json: bool,
    },
    /// Render the tree to an image with the configured renderer
    Render {
        #[command(flatten)]
        hand: HandArgs,
        #[arg(long)]
        output: PathBuf,
        /// Image format passed to the renderer (overrides configuration)
        #[arg(long)]
        format: Option<String>,
    },
    /// Deal a seeded random hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        count: Option<usize>,
    },
    /// Interactive game read from stdin, one command per line
    Session,
    /// Show the resolved configuration
    Cfg,
}
