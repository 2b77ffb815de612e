use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Domain {
    /// Integer marble counts over a 0/1 adjacency matrix
    #[clap(alias = "boolean")]
    Marble,
    /// Real weights (probabilities)
    #[clap(alias = "fraction")]
    Probability,
    /// Complex amplitudes
    #[clap(alias = "complex")]
    Photon,
}

#[derive(Debug, Parser)]
#[command(
    name = "qwalk",
    about = "Complex linear algebra, marble/photon walks and slit experiments",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QwalkCli {
    /// Global: path to config (TOML); default: ~/.qwalk/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug logging on stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply an adjacency matrix to a state a number of times
    ///
    /// Input JSON: { "adjacency": [[..]], "state": [..] }
    /// Complex entries are written as [re, im].
    Walk {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(long = "domain", value_enum, default_value_t = Domain::Marble)]
        domain: Domain,

        /// Number of clicks (time steps)
        #[arg(long = "clicks", default_value_t = 1)]
        clicks: usize,
    },

    /// Multi-slit experiment; input JSON is the (slits + targets + 1)-square base matrix
    Slits {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(long = "slits")]
        slits: usize,

        #[arg(long = "targets")]
        targets: usize,

        /// Complex amplitudes instead of probabilities
        #[arg(long = "photon", action = ArgAction::SetTrue)]
        photon: bool,
    },

    /// Measurement statistics for a ket and an optional observable
    ///
    /// Input JSON: { "ket": [[re, im], ..], "observable": [[[re, im], ..], ..] }
    Observe {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Only report the probability of this position
        #[arg(long = "position")]
        position: Option<usize>,

        /// Also ask an eigen solver for the observable's eigenvalues
        #[arg(long = "eigen", action = ArgAction::SetTrue)]
        eigen: bool,

        /// Solver name (http, local); default: first available
        #[arg(long = "solver", value_name = "NAME", requires = "eigen")]
        solver: Option<String>,
    },

    /// Print the wire/display string of a complex matrix
    Show {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}
