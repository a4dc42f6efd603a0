//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Where and how a demo document is written
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory the GraphML file is written to
    #[arg(value_name = "OUTPUT_DIR", env = "GRAPHML_DEMO_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Indent nested elements
    #[arg(long, env = "GRAPHML_DEMO_INDENT")]
    pub indent: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphmlError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::GraphmlError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GraphmlError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
