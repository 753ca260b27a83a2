//! Graph coloring (greedy, DSATUR, backtracking) and minimum spanning trees (Kruskal)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error types
pub mod error;

/// coloring instance base trait, solutions and checker
pub mod color;

/// weighted undirected graph
pub mod graph;

/// unweighted adjacency lists (graph or MST view)
pub mod adjacency;

/// disjoint-set structure
pub mod union_find;

/// Kruskal's minimum spanning tree
pub mod kruskal;

/// instrumentation hooks
pub mod stats;

/// read DIMACS formats
pub mod dimacs;

/// random graphs and classic graph families
pub mod generator;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the graph coloring problem
pub mod search;

pub use color::{Color, ColoringInstance, VertexId};
pub use error::{ColorError, Result};
pub use graph::{Edge, Graph, Weight};
pub use kruskal::{mst, SpanningForest};
pub use search::backtracking::{backtracking_dsatur_feasible, backtracking_feasible, minimum_coloring, MinimumColoring};
pub use search::dsatur::dsatur_order;
pub use search::greedy::{greedy_coloring, greedy_coloring_by_degree};
