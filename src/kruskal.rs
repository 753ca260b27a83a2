use serde::Serialize;
use tracing::debug;

use crate::adjacency::AdjacencyList;
use crate::color::{ColoringInstance, VertexId};
use crate::graph::{Edge, Graph, Weight};
use crate::stats::SearchObserver;
use crate::union_find::UnionFind;

/** minimum spanning forest of a graph.

If the graph is connected, it is a spanning tree (n-1 edges). Otherwise each connected
component gets its own minimum spanning tree.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    /// nb vertices of the source graph
    nb_vertices: usize,
    /// selected edges, in the order Kruskal accepted them
    edges: Vec<Edge>,
}

impl SpanningForest {
    /// selected edges (ascending weight)
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// number of vertices of the source graph
    pub fn nb_vertices(&self) -> usize { self.nb_vertices }

    /// true if the source graph is connected (n-1 edges)
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.nb_vertices.max(1)
    }

    /// number of trees in the forest
    pub fn nb_components(&self) -> usize {
        self.nb_vertices - self.edges.len()
    }

    /// sum of the selected weights
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// unweighted adjacency of the forest (coloring on the MST)
    pub fn to_adjacency(&self) -> AdjacencyList {
        let mut adj_list:Vec<Vec<VertexId>> = vec![Vec::new() ; self.nb_vertices];
        for e in &self.edges {
            adj_list[e.u].push(e.v);
            adj_list[e.v].push(e.u);
        }
        AdjacencyList::from_checked(adj_list)
    }
}

/** Kruskal's algorithm.

Edges are sorted by ascending weight with a stable sort (equal weights keep their
original order), then accepted iff they join two different components. O(E log E).
*/
pub fn mst(graph:&Graph) -> SpanningForest {
    mst_with_observer(graph, &mut ())
}

/** Kruskal's algorithm, reporting every edge considered to the observer. */
pub fn mst_with_observer<O:SearchObserver+?Sized>(graph:&Graph, observer:&mut O) -> SpanningForest {
    let n = graph.nb_vertices();
    let mut sorted_edges = graph.edges().to_vec();
    sorted_edges.sort_by_key(|e| e.weight);
    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for e in sorted_edges {
        observer.edge_examined();
        if uf.union(e.u, e.v) {
            edges.push(e);
            if edges.len() + 1 == n { break; } // spanning tree complete
        }
    }
    let res = SpanningForest { nb_vertices: n, edges };
    debug!(
        edges = res.edges.len(),
        weight = res.total_weight(),
        components = res.nb_components(),
        "kruskal done"
    );
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    /// all spanning trees by brute force over the edge subsets (small graphs only)
    fn brute_force_mst_weight(graph:&Graph) -> Option<Weight> {
        let m = graph.nb_edges();
        let n = graph.nb_vertices();
        let mut best = None;
        for mask in 0u32..(1 << m) {
            if mask.count_ones() as usize + 1 != n { continue; }
            let mut uf = UnionFind::new(n);
            let mut w = 0;
            let mut acyclic = true;
            for (i,e) in graph.edges().iter().enumerate() {
                if mask & (1 << i) != 0 {
                    acyclic &= uf.union(e.u, e.v);
                    w += e.weight;
                }
            }
            if acyclic && best.map_or(true, |b| w < b) { best = Some(w); }
        }
        best
    }

    fn sample_graph() -> Graph {
        Graph::from_edges(5, vec![
            (0,1,4), (0,2,2), (0,3,3), (1,2,6),
            (1,3,8), (2,3,1), (3,4,9), (2,4,5),
        ]).unwrap()
    }

    #[test]
    fn test_connected_graph() {
        let g = sample_graph();
        let forest = mst(&g);
        assert!(forest.is_spanning_tree());
        assert_eq!(forest.edges().len(), 4);
        assert_eq!(forest.total_weight(), 12);
        assert_eq!(Some(forest.total_weight()), brute_force_mst_weight(&g));
        for e in forest.edges() {
            assert!(g.edges().contains(e));
        }
        assert_eq!(forest.edges()[0], Edge::new(2,3,1));
    }

    #[test]
    fn test_weighted_instance_file() {
        let g = crate::dimacs::read_from_file("insts/weighted5.col").unwrap();
        assert_eq!(g.nb_vertices(), 5);
        assert_eq!(g.nb_edges(), 8);
        let forest = mst(&g);
        assert!(forest.is_spanning_tree());
        assert_eq!(forest.total_weight(), 12);
        assert_eq!(forest, mst(&sample_graph()));
    }

    #[test]
    fn test_stable_ties() {
        let g = Graph::from_edges(3, vec![(0,1,1), (1,2,1), (0,2,1)]).unwrap();
        let forest = mst(&g);
        assert_eq!(forest.edges(), &[Edge::new(0,1,1), Edge::new(1,2,1)]);
        assert_eq!(mst(&g), forest);
    }

    #[test]
    fn test_disconnected_graph() {
        let g = Graph::from_edges(5, vec![(0,1,3), (2,3,1), (3,4,2), (2,4,7)]).unwrap();
        let forest = mst(&g);
        assert!(!forest.is_spanning_tree());
        assert_eq!(forest.nb_components(), 2);
        assert_eq!(forest.total_weight(), 6);
    }

    #[test]
    fn test_trivial_graphs() {
        assert!(mst(&Graph::new(0)).is_spanning_tree());
        assert!(mst(&Graph::new(1)).is_spanning_tree());
        assert_eq!(mst(&Graph::new(3)).nb_components(), 3);
    }

    #[test]
    fn test_mst_adjacency() {
        let forest = mst(&sample_graph());
        let adj = forest.to_adjacency();
        assert_eq!(adj.nb_vertices(), 5);
        assert_eq!(adj.nb_edges(), 4);
        assert!(adj.are_adjacent(3, 2));
        assert!(adj.are_adjacent(2, 3));
    }

    #[test]
    fn test_observer_counts_edges() {
        let g = Graph::from_edges(3, vec![(0,1,1), (1,2,1)]).unwrap();
        let mut stats = crate::stats::SearchStats::default();
        let forest = mst_with_observer(&g, &mut stats);
        assert_eq!(stats.nb_edges_examined, 2);
        assert_eq!(forest, mst(&g));
    }
}
