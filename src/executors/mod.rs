//! Command executors that handle the actual logic for each command

pub mod basics;
pub mod elif;

use std::fs::File;
use std::io::BufWriter;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::DemoOptions;
use crate::writer::GraphmlWriter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Creates the output directory, writes `file_name` inside it with the yEd
/// extension enabled, and reports where it went
pub(crate) fn write_demo<F>(config: &DemoOptions, file_name: &str, body: F) -> Result<()>
where
    F: FnOnce(&mut GraphmlWriter<BufWriter<File>>) -> crate::error::Result<()>,
{
    std::fs::create_dir_all(&config.output_dir)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Failed to create output directory '{}'",
                config.output_dir.display()
            )
        })?;

    let path = config.output_file(file_name);
    eprintln!(
        "{} Writing {}...",
        style("📝").cyan(),
        style(file_name).bold()
    );

    let body = |writer: &mut GraphmlWriter<BufWriter<File>>| {
        writer.enable_yed();
        body(writer)
    };
    let written = if config.indent {
        GraphmlWriter::write_file_indented(&path, body)
    } else {
        GraphmlWriter::write_file(&path, body)
    };
    written.wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;

    eprintln!(
        "{} Graph written to {}",
        style("✓").green(),
        style(path.display()).bold()
    );
    Ok(())
}
