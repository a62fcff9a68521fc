//! Search algorithms over `graphwalk_core` graphs.
//!
//! Every search here is one frontier-driven loop: a stack gives DFS, a queue
//! gives BFS, and a decrease-key priority queue gives Dijkstra and Prim. No
//! search recurses, so deep or cyclic graphs are safe.

pub mod frontier;
pub mod search;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod tree;

pub use frontier::Frontier;
pub use search::{priority_first_search, Candidate, Ranking};
pub use shortest_path::{dijkstra, dijkstra_edges, ensure_non_negative};
pub use spanning_tree::{prim, prim_from};
pub use traversal::{bfs, connected, dfs, dfs_reachable, distance};
pub use tree::{path_weight, Distances, SearchTree};
