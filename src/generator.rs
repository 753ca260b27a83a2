use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::color::VertexId;
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Weight};

/// weights of the random graphs are drawn in [MIN_WEIGHT, MAX_WEIGHT]
pub const MIN_WEIGHT:Weight = 1;
/// see MIN_WEIGHT
pub const MAX_WEIGHT:Weight = 15;

fn check_density(density:f64) -> Result<()> {
    if (0. ..=1.).contains(&density) { Ok(()) } else { Err(ColorError::InvalidDensity(density)) }
}

/** random connected graph.

1. shuffle the vertices and attach each of them (but the first) to a random earlier one:
   this random spanning tree makes the graph connected
2. add every other pair {u,v} with probability `density`

weights are uniform in [MIN_WEIGHT, MAX_WEIGHT].
*/
pub fn random_connected<R:Rng+?Sized>(n:usize, density:f64, rng:&mut R) -> Result<Graph> {
    check_density(density)?;
    let mut res = Graph::new(n);
    let mut vertices:Vec<VertexId> = (0..n).collect();
    vertices.shuffle(rng);
    // spanning tree edges (u,v) with u < v
    let mut tree_edges:HashSet<(VertexId,VertexId)> = HashSet::with_capacity(n.saturating_sub(1));
    for i in 1..n {
        let u = vertices[i];
        let v = vertices[rng.gen_range(0..i)];
        res.push_edge(u, v, rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT));
        tree_edges.insert((u.min(v), u.max(v)));
    }
    for u in 0..n {
        for v in u+1..n {
            if !tree_edges.contains(&(u,v)) && rng.gen_bool(density) {
                res.push_edge(u, v, rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT));
            }
        }
    }
    debug!(n, density, edges=res.nb_edges(), "random connected graph generated");
    Ok(res)
}

/** random graph where each pair {u,v} is an edge (of weight 1) with probability `density`.
May be disconnected. */
pub fn random_uniform<R:Rng+?Sized>(n:usize, density:f64, rng:&mut R) -> Result<Graph> {
    check_density(density)?;
    let mut res = Graph::new(n);
    for u in 0..n {
        for v in u+1..n {
            if rng.gen_bool(density) {
                res.push_edge(u, v, 1);
            }
        }
    }
    debug!(n, density, edges=res.nb_edges(), "random uniform graph generated");
    Ok(res)
}

/// n isolated vertices
pub fn empty(n:usize) -> Graph { Graph::new(n) }

/// complete graph K_n
pub fn complete(n:usize) -> Graph {
    let mut res = Graph::new(n);
    for u in 0..n {
        for v in u+1..n {
            res.push_edge(u, v, 1);
        }
    }
    res
}

/// cycle 0-1-...-(n-1)-0 (a path if n < 3)
pub fn cycle(n:usize) -> Graph {
    let mut res = path(n);
    if n >= 3 {
        res.push_edge(n-1, 0, 1);
    }
    res
}

/// path 0-1-...-(n-1)
pub fn path(n:usize) -> Graph {
    let mut res = Graph::new(n);
    for u in 1..n {
        res.push_edge(u-1, u, 1);
    }
    res
}

/// star with center 0 and leaves 1..n-1
pub fn star(n:usize) -> Graph {
    let mut res = Graph::new(n);
    for u in 1..n {
        res.push_edge(0, u, 1);
    }
    res
}

/// complete bipartite graph K_{a,b}: vertices [0,a) on one side, [a,a+b) on the other
pub fn complete_bipartite(a:usize, b:usize) -> Graph {
    let mut res = Graph::new(a+b);
    for u in 0..a {
        for v in a..a+b {
            res.push_edge(u, v, 1);
        }
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::color::ColoringInstance;
    use crate::kruskal::mst;

    #[test]
    fn test_random_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [1usize, 2, 5, 20] {
            let g = random_connected(n, 0.3, &mut rng).unwrap();
            assert_eq!(g.nb_vertices(), n);
            assert!(g.nb_edges() + 1 >= n);
            assert!(mst(&g).is_spanning_tree());
            for e in g.edges() {
                assert!(e.u != e.v);
                assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&e.weight));
            }
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = random_connected(30, 0.5, &mut rng).unwrap();
        let mut pairs:Vec<(VertexId,VertexId)> = g.edges().iter().map(|e| (e.u.min(e.v), e.u.max(e.v))).collect();
        let nb_edges = pairs.len();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), nb_edges);
        for v in g.vertices() {
            let mut neighbors = g.neighbors(v).to_vec();
            neighbors.sort_unstable();
            neighbors.dedup();
            assert_eq!(neighbors.len(), g.degree(v));
        }
        // only the spanning tree when the density is 0
        let tree = random_connected(2000, 0., &mut rng).unwrap();
        assert_eq!(tree.nb_edges(), 1999);
        assert!(mst(&tree).is_spanning_tree());
    }

    #[test]
    fn test_reproducible() {
        let g1 = random_connected(12, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        let g2 = random_connected(12, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn test_density_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_uniform(6, 1., &mut rng).unwrap().nb_edges(), 15);
        assert_eq!(random_uniform(6, 0., &mut rng).unwrap().nb_edges(), 0);
        assert_eq!(random_connected(6, 0., &mut rng).unwrap().nb_edges(), 5);
        assert!(matches!(random_uniform(6, 1.5, &mut rng), Err(ColorError::InvalidDensity(_))));
    }

    #[test]
    fn test_families() {
        assert_eq!(empty(4).nb_edges(), 0);
        assert_eq!(complete(5).nb_edges(), 10);
        assert_eq!(cycle(4).nb_edges(), 4);
        assert_eq!(cycle(2).nb_edges(), 1);
        assert_eq!(path(1).nb_edges(), 0);
        assert_eq!(star(5).degree(0), 4);
        assert_eq!(complete_bipartite(2, 3).nb_edges(), 6);
    }
}
