use thiserror::Error;

use crate::color::VertexId;
use crate::graph::Weight;

/// Result type for the coloring and MST operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/** errors raised when an input is rejected, or when a search is interrupted.

Infeasibility of a given number of colors is not an error (see `SearchOutcome`).
*/
#[derive(Debug, Error)]
pub enum ColorError {
    /// vertex id outside of [0, n)
    #[error("vertex {vertex} out of range (instance has {nb_vertices} vertices)")]
    InvalidVertex {
        /// offending id
        vertex: VertexId,
        /// number of vertices of the instance
        nb_vertices: usize,
    },

    /// a vertex adjacent to itself can not be colored
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// the same edge given twice
    #[error("duplicate edge ({u},{v})")]
    DuplicateEdge {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
    },

    /// v is a neighbor of u but u is not a neighbor of v
    #[error("asymmetric adjacency: {v} is a neighbor of {u}, but {u} is not a neighbor of {v}")]
    AsymmetricAdjacency {
        /// vertex whose list contains v
        u: VertexId,
        /// neighbor missing the reverse entry
        v: VertexId,
    },

    /// edge weights are assumed non-negative by the MST
    #[error("negative weight {weight} on edge ({u},{v})")]
    NegativeWeight {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// offending weight
        weight: Weight,
    },

    /// palette (or number of colors) of size 0
    #[error("the palette must contain at least one color")]
    EmptyPalette,

    /// edge probability outside of [0, 1]
    #[error("invalid density {0} (expected a probability)")]
    InvalidDensity(f64),

    /// a visiting order that is not a permutation of the vertices
    #[error("vertex order is not a permutation of the {nb_vertices} vertices")]
    InvalidOrder {
        /// number of vertices of the instance
        nb_vertices: usize,
    },

    /// the stopping criterion fired during the search
    #[error("search interrupted while trying {nb_colors} colors")]
    Interrupted {
        /// number of colors being tried when the search stopped
        nb_colors: usize,
    },

    /// malformed instance or solution file
    #[error("parse error (line {line}): {reason}")]
    Parse {
        /// line number (starting at 1)
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// invalid command line argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// statistics serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// file access error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
