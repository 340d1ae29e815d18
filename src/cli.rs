//! The `u-cutwidth` command line interface.

use clap::{crate_version, Parser};
use std::path::PathBuf;

use crate::error::Result;
use crate::graph::{dot, loader};
use crate::report::{format_permutation, ConsoleReporter};
use crate::search::{LogObserver, MultiSampleReducer, SearchConfig};

/// CLI arguments.
#[derive(Parser, Debug)]
#[clap(version = crate_version!(), long_about = None)]
#[clap(about = "Estimate the cutwidth of a graph by random permutation search")]
pub struct Cli {
    /// Graph file: a `nodes edges` header followed by one `u v` edge per line.
    graph: PathBuf,

    /// Random permutations evaluated per sample.
    #[arg(long, short = 'p', default_value_t = 100)]
    trials: usize,

    /// Number of independent samples.
    #[arg(long, short = 's', default_value_t = 10)]
    samples: usize,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Run samples in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Print every trial permutation and its cutwidth.
    #[arg(long)]
    show_trials: bool,

    /// Print the adjacency lists before searching.
    #[arg(long)]
    print_graph: bool,

    /// Write the graph as Graphviz DOT to this path.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Only print the final cutwidth and ordering.
    #[arg(long, short, conflicts_with = "show_trials")]
    quiet: bool,
}

impl Cli {
    /// The search configuration described by the arguments.
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::default()
            .with_trials_per_sample(self.trials)
            .with_sample_count(self.samples)
            .with_parallel(self.parallel);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Validates the search parameters, loads the graph, optionally prints
    /// and exports it, then runs the search and prints the report.
    pub fn run(self) -> Result<()> {
        let config = self.search_config();
        config.validate()?;
        let graph = loader::load_graph(&self.graph)?;

        if self.print_graph {
            print!("{graph}");
        }

        if let Some(path) = &self.dot {
            dot::save_dot(&graph, path)?;
        }

        let outcome = if self.quiet {
            MultiSampleReducer::run_with_observer(&graph, &config, &LogObserver)?
        } else {
            let reporter = ConsoleReporter::stdout(self.show_trials);
            MultiSampleReducer::run_with_observer(&graph, &config, &reporter)?
        };

        if self.quiet {
            println!("{}", outcome.best.cutwidth);
            println!("{}", format_permutation(&outcome.best.permutation));
        }
        Ok(())
    }
}
