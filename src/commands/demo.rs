//! Demo command implementations

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DemoOptions;
use crate::error::GraphmlError;
use crate::executors::CommandExecutor;
use crate::executors::basics::BasicsExecutor;
use crate::executors::elif::ElifExecutor;

impl FromCommand for DemoOptions {
    fn from_command(command: Commands) -> Result<Self, GraphmlError> {
        match command {
            Commands::Basics { output } | Commands::Elif { output } => DemoOptions::builder()
                .with_output_dir(output.output_dir)
                .with_indent(output.indent)
                .build(),
        }
    }
}

crate::impl_try_from_command!(DemoOptions);

/// Execute the basics command
pub fn execute_basics_command(command: Commands) -> Result<()> {
    let config = DemoOptions::from_command(command)
        .wrap_err("Failed to parse basics command configuration")?;
    BasicsExecutor::execute(config)
}

/// Execute the elif command
pub fn execute_elif_command(command: Commands) -> Result<()> {
    let config = DemoOptions::from_command(command)
        .wrap_err("Failed to parse elif command configuration")?;
    ElifExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::common::OutputArgs;

    #[test]
    fn test_options_from_command() {
        let command = Commands::Elif {
            output: OutputArgs {
                output_dir: PathBuf::from("/tmp/graphs"),
                indent: true,
            },
        };

        let options = DemoOptions::try_from(command).unwrap();
        assert_eq!(options.output_dir, PathBuf::from("/tmp/graphs"));
        assert!(options.indent);
    }
}
