//! Output Rendering
//!
//! Text for humans, a single JSON document for scripts.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::GenerateResult;
use crate::error::ComposeError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Serialize)]
struct CompleteEvent<'a> {
    event: &'static str,
    command: &'static str,
    version: &'static str,
    script: Option<&'a Path>,
    #[serde(flatten)]
    result: &'a GenerateResult,
}

#[derive(Serialize)]
struct ErrorEvent<'a> {
    event: &'static str,
    command: &'static str,
    code: &'a str,
    message: String,
}

/// Render a successful run
pub fn render_result<W: Write>(
    format: OutputFormat,
    result: &GenerateResult,
    quiet: bool,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let event = CompleteEvent {
                event: "complete",
                command: "generate",
                version: env!("CARGO_PKG_VERSION"),
                script: result.script().map(|f| f.path.as_path()),
                result,
            };
            serde_json::to_writer(&mut *out, &event).map_err(io::Error::other)?;
            writeln!(out)
        }
        OutputFormat::Text if quiet => Ok(()),
        OutputFormat::Text => {
            let verb = if result.dry_run { "would write" } else { "wrote" };
            for file in &result.files {
                let hex = file.hash.hex();
                writeln!(
                    out,
                    "  {} {} ({})",
                    verb,
                    file.path.display(),
                    &hex[..hex.len().min(12)]
                )?;
            }
            writeln!(
                out,
                "{} {} host descriptor(s) and deploy script in {}",
                if result.dry_run { "Planned" } else { "Generated" },
                result.host_count(),
                result.directory.display()
            )
        }
    }
}

/// Render a failed run
pub fn render_error<W: Write>(format: OutputFormat, err: &anyhow::Error, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let code = err
                .downcast_ref::<ComposeError>()
                .map(ComposeError::code)
                .unwrap_or("error");
            let event = ErrorEvent {
                event: "error",
                command: "generate",
                code,
                message: format!("{:#}", err),
            };
            serde_json::to_writer(&mut *out, &event).map_err(io::Error::other)?;
            writeln!(out)
        }
        OutputFormat::Text => writeln!(out, "Error: {:#}", err),
    }
}

/// Render a failed run, falling back to plain text on `fallback` when
/// `out` cannot be written.
pub fn report_error<W: Write, F: Write>(
    format: OutputFormat,
    err: &anyhow::Error,
    out: &mut W,
    fallback: &mut F,
) {
    if render_error(format, err, out).is_err() {
        let _ = writeln!(fallback, "Error: {:#}", err);
    }
}
