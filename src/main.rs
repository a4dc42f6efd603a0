use miette::Result;
use tracing_subscriber::EnvFilter;

/// Main entry point for the graphml-demo CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    graphml_writer::run()
}
