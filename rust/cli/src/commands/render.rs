use crate::cli::HandArgs;
use crate::config::{Config, IMAGE_FORMATS};
use crate::error::CliError;
use crate::render::Renderer;
use std::io::Write;
use std::path::Path;

/// Handle the render command.
///
/// Builds the tree, pipes its DOT text to the configured renderer and waits for the
/// renderer to exit before reporting the image path.
pub fn handle_render_command(
    hand: &HandArgs,
    output: &Path,
    format: Option<&str>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let format = format.unwrap_or(&config.image_format);
    if !IMAGE_FORMATS.contains(&format) {
        return Err(CliError::InvalidInput(format!(
            "format must be one of {}",
            IMAGE_FORMATS.join(", ")
        )));
    }
    let game = super::start_session(hand, config)?;
    let renderer = Renderer::new(&config.renderer, format);
    renderer.render(&game.dot()?, output)?;
    writeln!(out, "rendered {}", output.display())?;
    Ok(())
}
