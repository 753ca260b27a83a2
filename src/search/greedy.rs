use std::cmp::Reverse;

use bit_set::BitSet;
use tracing::debug;

use crate::color::{Color, ColoringInstance, VertexId};
use crate::error::{ColorError, Result};
use crate::stats::SearchObserver;

/** visiting order of the greedy heuristics */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyOrder {
    /// vertices 0..n-1
    Natural,
    /// decreasing degree, ties broken by increasing vertex id
    DecreasingDegree,
}

impl GreedyOrder {
    /// vertices in the visiting order
    pub fn vertices<I:ColoringInstance+?Sized>(&self, inst:&I) -> Vec<VertexId> {
        let mut res:Vec<VertexId> = inst.vertices().collect();
        if *self == GreedyOrder::DecreasingDegree {
            res.sort_by_key(|v| Reverse(inst.degree(*v))); // stable
        }
        res
    }
}

/** numeric palette 1..=k */
pub fn palette(k:usize) -> Vec<Color> { (1..=k).collect() }

/** greedy coloring visiting the vertices in index order.

Each vertex takes the first palette color (in palette order) not used by its colored
neighbors. If all colors are taken, the vertex stays uncolored (None): the palette is
never extended.

Fails only if the palette is empty.
*/
pub fn greedy_coloring<I, C>(inst:&I, palette:&[C]) -> Result<Vec<Option<C>>>
where I:ColoringInstance+?Sized, C:Clone {
    greedy_with_observer(inst, palette, GreedyOrder::Natural, &mut ())
}

/** greedy coloring visiting the vertices by decreasing degree (same assignment rule) */
pub fn greedy_coloring_by_degree<I, C>(inst:&I, palette:&[C]) -> Result<Vec<Option<C>>>
where I:ColoringInstance+?Sized, C:Clone {
    greedy_with_observer(inst, palette, GreedyOrder::DecreasingDegree, &mut ())
}

/** greedy coloring with an explicit visiting order and instrumentation. O(V + E + V·P/64). */
pub fn greedy_with_observer<I, C, O>(
    inst:&I,
    palette:&[C],
    order:GreedyOrder,
    observer:&mut O,
) -> Result<Vec<Option<C>>>
where I:ColoringInstance+?Sized, C:Clone, O:SearchObserver+?Sized {
    if palette.is_empty() { return Err(ColorError::EmptyPalette); }
    let n = inst.nb_vertices();
    // colors[v]: index in the palette of the color of v
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    let mut used = BitSet::with_capacity(palette.len());
    let mut nb_failures:usize = 0;
    for v in order.vertices(inst) {
        used.clear();
        for u in inst.neighbors(v) {
            observer.edge_examined();
            if let Some(c) = colors[*u] { used.insert(c); }
        }
        colors[v] = (0..palette.len()).find(|c| !used.contains(*c));
        if colors[v].is_none() { nb_failures += 1; }
    }
    debug!(order=?order, palette=palette.len(), uncolored=nb_failures, "greedy done");
    Ok(colors.into_iter().map(|c| c.map(|i| palette[i].clone())).collect())
}

/// true if every vertex received a color
pub fn is_complete<C>(colors:&[Option<C>]) -> bool {
    colors.iter().all(|c| c.is_some())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyList;
    use crate::color::{check_assignment, CheckerResult};

    fn star() -> AdjacencyList {
        AdjacencyList::from_edges(5, &[(0,1),(0,2),(0,3),(0,4)]).unwrap()
    }

    #[test]
    fn test_greedy_in_order() {
        // path 0-1-2 plus isolated vertex 3
        let inst = AdjacencyList::from_edges(4, &[(0,1),(1,2)]).unwrap();
        let colors = greedy_coloring(&inst, &["red", "green", "blue"]).unwrap();
        assert_eq!(colors, vec![Some("red"), Some("green"), Some("red"), Some("red")]);
        assert_eq!(check_assignment(&inst, &colors), CheckerResult::Ok(2));
    }

    #[test]
    fn test_greedy_by_degree_order() {
        let inst = AdjacencyList::from_edges(4, &[(0,1),(1,2),(2,3),(1,3)]).unwrap();
        // degrees: 1, 3, 2, 2
        assert_eq!(GreedyOrder::DecreasingDegree.vertices(&inst), vec![1,2,3,0]);
        let colors = greedy_coloring_by_degree(&inst, &palette(4)).unwrap();
        assert_eq!(colors, vec![Some(2), Some(1), Some(2), Some(3)]);
        assert!(is_complete(&colors));
    }

    #[test]
    fn test_star() {
        let colors = greedy_coloring_by_degree(&star(), &palette(2)).unwrap();
        assert_eq!(colors, vec![Some(1), Some(2), Some(2), Some(2), Some(2)]);
    }

    #[test]
    fn test_palette_too_small() {
        // triangle with 2 colors: the last vertex can not be colored
        let inst = AdjacencyList::from_edges(3, &[(0,1),(1,2),(2,0)]).unwrap();
        let colors = greedy_coloring(&inst, &palette(2)).unwrap();
        assert_eq!(colors, vec![Some(1), Some(2), None]);
        assert!(!is_complete(&colors));
        assert_eq!(check_assignment(&inst, &colors), CheckerResult::VertexNotColored(2));
    }

    #[test]
    fn test_empty_palette() {
        let empty:[Color; 0] = [];
        assert!(matches!(greedy_coloring(&star(), &empty), Err(ColorError::EmptyPalette)));
    }

    #[test]
    fn test_deterministic() {
        let inst = star();
        let a = greedy_coloring_by_degree(&inst, &palette(3)).unwrap();
        let b = greedy_coloring_by_degree(&inst, &palette(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(greedy_coloring(&inst, &palette(3)).unwrap(), greedy_coloring(&inst, &palette(3)).unwrap());
    }
}
