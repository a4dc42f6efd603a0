use clap::{Parser, Subcommand};

use crate::common::OutputArgs;

#[derive(Parser)]
#[command(
    name = "graphml-demo",
    about = "Write sample yEd-flavoured GraphML documents",
    long_about = "graphml-demo writes sample GraphML documents with the yEd extension enabled. \
                  Open the generated files in yEd to see shape nodes, borders, fills and \
                  estimated node sizes.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write yed-basics.graphml: four labelled nodes fanned out from one
    ///
    /// The first node has a dotted border, a blue fill, an octagon outline
    /// and a fixed 50x50 size; the others are sized from their labels.
    Basics {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write elif.graphml: a star of diamonds around an octagon, plus a
    /// little robot
    ///
    /// Built from reusable node descriptors derived from shared prototypes.
    Elif {
        #[command(flatten)]
        output: OutputArgs,
    },
}
