use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use crate::error::{ColorError, Result};

/** unweighted adjacency structure. Used for the original graph (weights removed)
or for the MST view of it. */
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    /// nb vertices
    n: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for AdjacencyList {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, iterate over
            None => { self.adj_list[u].iter().any(|c| &v==c) },
            Some(matrix) => { matrix[u].contains(v) } // otherwise, use it
        }
    }
}

impl AdjacencyList {

    /** constructor using an adjacency list.

    Fails if a neighbor is out of range, on self-loops, on a neighbor listed twice, or if
    the lists are not symmetric (v in adj_list[u] iff u in adj_list[v]).
    The adjacency matrix is populated along the way.
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Result<Self> {
        let n = adj_list.len();
        let mut matrix = vec![BitSet::with_capacity(n) ; n];
        for (u,l) in adj_list.iter().enumerate() {
            for v in l {
                if *v >= n {
                    return Err(ColorError::InvalidVertex { vertex: *v, nb_vertices: n });
                }
                if *v == u { return Err(ColorError::SelfLoop(u)); }
                if !matrix[u].insert(*v) {
                    return Err(ColorError::DuplicateEdge { u: u.min(*v), v: u.max(*v) });
                }
            }
        }
        for (u,l) in adj_list.iter().enumerate() {
            if let Some(v) = l.iter().find(|v| !matrix[**v].contains(u)) {
                return Err(ColorError::AsymmetricAdjacency { u, v: *v });
            }
        }
        Ok(Self { n, adj_list, adj_matrix: Some(matrix) })
    }

    /// constructor for lists already known to be valid (in range, symmetric, no self-loop or duplicate)
    pub(crate) fn from_checked(adj_list:Vec<Vec<VertexId>>) -> Self {
        Self { n: adj_list.len(), adj_list, adj_matrix:None }
    }

    /** builds the symmetric adjacency of an undirected edge list.
    Fails on out of range vertices, self-loops and duplicate edges. */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            for w in [u,v] {
                if *w >= n {
                    return Err(ColorError::InvalidVertex { vertex: *w, nb_vertices: n });
                }
            }
            if u == v { return Err(ColorError::SelfLoop(*u)); }
            adj_list[*u].push(*v);
            adj_list[*v].push(*u);
        }
        Self::new(adj_list)
    }

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize {
        self.adj_list.iter().map(|l| l.len()).sum::<usize>() / 2
    }

    /// builds the edge list (u < v)
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in self.adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
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


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges() {
        let inst = AdjacencyList::from_edges(4, &[(0,1),(0,2),(1,3),(2,3)]).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,2]);
        assert_eq!(inst.degree(3), 2);
        assert_eq!(inst.edges(), vec![(0,1),(0,2),(1,3),(2,3)]);
    }

    #[test]
    fn test_adj_matrix() {
        let mut inst = AdjacencyList::from_checked(vec![vec![1], vec![0], vec![]]);
        assert!(inst.are_adjacent(1, 0));
        inst.populate_adj_matrix();
        assert!(inst.are_adjacent(0, 1));
        assert!(!inst.are_adjacent(0, 2));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            AdjacencyList::from_edges(2, &[(0,2)]),
            Err(ColorError::InvalidVertex { vertex: 2, nb_vertices: 2 })
        ));
        assert!(AdjacencyList::new(vec![vec![1], vec![5]]).is_err());
    }

    #[test]
    fn test_rejects_self_loops() {
        assert!(matches!(AdjacencyList::from_edges(2, &[(0,0)]), Err(ColorError::SelfLoop(0))));
        assert!(matches!(AdjacencyList::new(vec![vec![], vec![1]]), Err(ColorError::SelfLoop(1))));
    }

    #[test]
    fn test_rejects_asymmetric_lists() {
        assert!(matches!(
            AdjacencyList::new(vec![vec![1], vec![]]),
            Err(ColorError::AsymmetricAdjacency { u: 0, v: 1 })
        ));
        assert!(AdjacencyList::new(vec![vec![1], vec![0]]).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_edges() {
        assert!(matches!(
            AdjacencyList::from_edges(3, &[(0,1),(1,2),(1,0)]),
            Err(ColorError::DuplicateEdge { u: 0, v: 1 })
        ));
        assert!(matches!(
            AdjacencyList::new(vec![vec![1,1], vec![0,0]]),
            Err(ColorError::DuplicateEdge { u: 0, v: 1 })
        ));
    }
}
