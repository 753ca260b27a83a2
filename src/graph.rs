use bit_set::BitSet;
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyList;
use crate::color::{ColoringInstance, VertexId};
use crate::error::{ColorError, Result};

/// edge weight (non-negative)
pub type Weight = i64;

/** undirected weighted edge */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// first endpoint
    pub u: VertexId,
    /// second endpoint
    pub v: VertexId,
    /// weight
    pub weight: Weight,
}

impl Edge {
    /// creates an edge
    pub fn new(u:VertexId, v:VertexId, weight:Weight) -> Self { Self { u, v, weight } }
}

/** models an undirected weighted graph.

The adjacency is always the symmetric closure of the edge list: adding (u,v,w) adds
(v,w) to adj[u] and (u,w) to adj[v]. Built once, then only read by the algorithms.
*/
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph, in insertion order
    edges: Vec<Edge>,
    /// weighted_adj[i]: (neighbor, weight) pairs of vertex i
    weighted_adj: Vec<Vec<(VertexId, Weight)>>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for Graph {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix {
            None => { self.adj_list[u].iter().any(|c| &v==c) },
            Some(matrix) => { matrix[u].contains(v) }
        }
    }
}

impl Graph {

    /** graph with n vertices and no edges */
    pub fn new(n:usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            weighted_adj: vec![Vec::new() ; n],
            adj_list: vec![Vec::new() ; n],
            adj_matrix: None,
        }
    }

    /** builds a graph from (u, v, weight) triples */
    pub fn from_edges<It>(n:usize, edges:It) -> Result<Self>
    where It:IntoIterator<Item=(VertexId,VertexId,Weight)> {
        let mut res = Self::new(n);
        for (u,v,w) in edges {
            res.add_edge(u, v, w)?;
        }
        Ok(res)
    }

    /** adds the undirected edge (u,v) with weight w.

    Fails on out of range vertices, self-loops, negative weights and edges already present
    (so the degree of a vertex is its number of distinct neighbors).
    */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId, w:Weight) -> Result<()> {
        for x in [u,v] {
            if x >= self.n {
                return Err(ColorError::InvalidVertex { vertex: x, nb_vertices: self.n });
            }
        }
        if u == v { return Err(ColorError::SelfLoop(u)); }
        if w < 0 { return Err(ColorError::NegativeWeight { u, v, weight: w }); }
        if self.are_adjacent(u, v) {
            return Err(ColorError::DuplicateEdge { u: u.min(v), v: u.max(v) });
        }
        self.push_edge(u, v, w);
        Ok(())
    }

    /// adds an edge already known to be valid
    pub(crate) fn push_edge(&mut self, u:VertexId, v:VertexId, w:Weight) {
        debug_assert!(u < self.n && v < self.n && u != v && w >= 0);
        self.edges.push(Edge::new(u, v, w));
        self.weighted_adj[u].push((v,w));
        self.weighted_adj[v].push((u,w));
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        if let Some(matrix) = &mut self.adj_matrix {
            matrix[u].insert(v);
            matrix[v].insert(u);
        }
    }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// edge list (insertion order)
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// (neighbor, weight) pairs of u
    pub fn weighted_neighbors(&self, u:VertexId) -> &[(VertexId, Weight)] {
        &self.weighted_adj[u]
    }

    /// sum of the edge weights
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// unweighted copy of the adjacency
    pub fn to_adjacency(&self) -> AdjacencyList {
        AdjacencyList::from_checked(self.adj_list.clone())
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }
}
