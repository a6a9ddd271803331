//! External renderer invocation.
//!
//! DOT text is written to the renderer's stdin and the call blocks until the
//! process exits; success means a zero exit status and an output file on disk.

use crate::error::CliError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    program: String,
    args: Vec<String>,
    format: String,
}

impl Renderer {
    /// `command` is split on whitespace: the program, then arguments placed before
    /// the format and output flags (e.g. `dot -Gdpi=150`).
    pub fn new(command: &str, format: impl Into<String>) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        Self {
            program: words.next().unwrap_or_default(),
            args: words.collect(),
            format: format.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Runs `<program> [args] -T<format> -o <output>` with `dot` on stdin.
    pub fn render(&self, dot: &str, output: &Path) -> Result<(), CliError> {
        tracing::debug!(program = %self.program, output = %output.display(), "rendering tree");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    CliError::Render(format!("renderer `{}` not found", self.program))
                }
                _ => CliError::Io(e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // a renderer that exits early closes the pipe; its exit status says why
            match stdin.write_all(dot.as_bytes()) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!(program = %self.program, "renderer closed stdin early");
                }
                other => other?,
            }
        }
        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(CliError::Render(format!(
                "`{}` exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }
        if !output.exists() {
            return Err(CliError::Render(format!(
                "`{}` did not produce {}",
                self.program,
                output.display()
            )));
        }
        Ok(())
    }
}
