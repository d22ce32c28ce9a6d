mod bfs;
mod bidirectional;
mod dfs;
mod dls;
mod iddfs;
pub mod path;
pub mod traits;
mod ucs;

pub use bfs::BFS;
pub use bidirectional::Bidirectional;
pub use dfs::{DFS, OrthogonalDFS};
pub use dls::{DEFAULT_DEPTH_LIMIT, DLS, depth_limited};
pub use iddfs::IDDFS;
pub use traits::{PathfindingAlgorithm, SearchResult};
pub use ucs::UCS;
