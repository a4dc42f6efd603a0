//! Command implementations for the graphml-demo CLI
//!
//! - basics: the minimal yEd document built with the raw writer calls
//! - elif: a larger document built from reusable node descriptors

pub mod demo;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Basics { .. } => demo::execute_basics_command(command),
        Commands::Elif { .. } => demo::execute_elif_command(command),
    }
}
