use std::{io, path::PathBuf};

use anyhow::Error;

use clap::Parser;

use ancpoly_core::{
    io::{read, text::DEFAULT_PRECISION},
    tree::Node,
    Input,
};

mod runner;
use runner::Runner;

/// Summarize sampled frequencies.
///
/// Prints the mean frequency of each variant across all realizations, with one line per node.
#[derive(Debug, Parser)]
pub struct Summarize {
    /// Input realizations.
    ///
    /// The input can be provided here or read from stdin. Input is expected in the format written
    /// by the sample command, with one realization per line.
    #[clap(value_parser, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Delimiter between fields.
    #[clap(short = 'd', long, default_value_t = '\t', value_name = "CHAR")]
    pub delimiter: char,

    /// Include a header with the names of variants.
    #[clap(short = 'H', long)]
    pub header: bool,

    /// Nodes to summarize.
    ///
    /// By default, all nodes are summarized from the root towards the leaves. Use comma to
    /// separate node names.
    #[clap(
        short = 'n',
        long,
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "NODE,..."
    )]
    pub nodes: Option<Vec<Node>>,

    /// Precision to use when printing frequencies.
    #[clap(short = 'p', long, default_value_t = DEFAULT_PRECISION, value_name = "INT")]
    pub precision: usize,
}

impl Summarize {
    pub fn run(self) -> Result<(), Error> {
        let reader = read::Builder::default()
            .set_input(Input::new(self.input)?)
            .build()?;

        let nodes = self.nodes.unwrap_or_else(|| Node::iter().collect());

        let mut runner = Runner::new(
            io::stdout().lock(),
            nodes,
            self.header,
            self.delimiter,
            self.precision,
        );
        runner.run(reader)
    }
}
