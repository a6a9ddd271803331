//! Command failures. Every variant is printed as `Error: ...` and exits with `2`.

use cardtree_engine::errors::GameError;
use cardtree_engine::export::ExportError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Reading input, writing output or dot files
    Io(std::io::Error),

    /// Malformed command arguments or session lines
    InvalidInput(String),

    Config(String),

    /// Game rule violation or invalid card reported by the engine
    Game(GameError),

    /// External renderer missing or failed
    Render(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Game(e) => write!(f, "{}", e),
            CliError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Game(error)
    }
}

impl From<ExportError> for CliError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::Io { source, .. } => CliError::Io(source),
            other => CliError::InvalidInput(other.to_string()),
        }
    }
}
