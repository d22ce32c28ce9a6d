use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use grid_search::{Algorithm, Coordinate};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-search")]
#[command(about = "Grid path search with exploration traces")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one algorithm on a map
    Solve {
        #[command(flatten)]
        map: MapArgs,

        /// Search algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,

        /// Print the map with the explored cells and the path
        #[arg(short, long)]
        render: bool,
    },

    /// Run every algorithm on the same map and compare
    Benchmark {
        #[command(flatten)]
        map: MapArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// Text map: `.` open, `#` blocked, `S` start, `T` target
    #[arg(value_name = "MAP")]
    pub path: PathBuf,

    /// Start cell as `x,y`, overriding the map's `S`
    #[arg(long)]
    pub start: Option<Coordinate>,

    /// Target cell as `x,y`, overriding the map's `T`
    #[arg(long)]
    pub target: Option<Coordinate>,

    /// Give every open cell a random weight for uniform-cost search
    #[arg(short, long)]
    pub weighted: bool,

    /// Seed for the random weights
    #[arg(long, requires = "weighted")]
    pub seed: Option<u64>,

    /// Depth limit for depth-limited search
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Breadth-first search
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Depth-first search, 8 directions
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Depth-first search, no diagonals
    #[value(name = "dfs-orthogonal")]
    DFSOrthogonal,

    /// Uniform-cost search
    #[value(name = "ucs")]
    #[allow(clippy::upper_case_acronyms)]
    UCS,

    /// Depth-limited search
    #[value(name = "dls")]
    #[allow(clippy::upper_case_acronyms)]
    DLS,

    /// Iterative deepening depth-first search
    #[value(name = "iddfs")]
    #[allow(clippy::upper_case_acronyms)]
    IDDFS,

    /// Bidirectional breadth-first search
    Bidirectional,
}

impl From<PathfindingAlgorithm> for Algorithm {
    fn from(algorithm: PathfindingAlgorithm) -> Self {
        match algorithm {
            PathfindingAlgorithm::BFS => Self::BFS,
            PathfindingAlgorithm::DFS => Self::DFS,
            PathfindingAlgorithm::DFSOrthogonal => Self::DFSOrthogonal,
            PathfindingAlgorithm::UCS => Self::UCS,
            PathfindingAlgorithm::DLS => Self::DLS,
            PathfindingAlgorithm::IDDFS => Self::IDDFS,
            PathfindingAlgorithm::Bidirectional => Self::Bidirectional,
        }
    }
}
