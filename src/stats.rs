use serde::Serialize;

/** instrumentation hooks called by the algorithms.

Observers only count; they never change the outcome of an algorithm.
The unit type `()` is the no-op observer.
*/
pub trait SearchObserver {
    /// an edge (or a neighbor entry of an adjacency list) has been looked at
    fn edge_examined(&mut self) {}

    /// a search node has been created (one color assigned to one vertex)
    fn node_expanded(&mut self) {}
}

impl SearchObserver for () {}

/** counts the instrumentation events */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// number of edges examined
    pub nb_edges_examined: u64,
    /// number of search nodes expanded
    pub nb_expanded: u64,
}

impl SearchObserver for SearchStats {
    fn edge_examined(&mut self) { self.nb_edges_examined += 1; }

    fn node_expanded(&mut self) { self.nb_expanded += 1; }
}
