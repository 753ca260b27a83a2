use std::cmp::{Ordering, Reverse};

use bit_set::BitSet;
use priority_queue::PriorityQueue;
use tracing::debug;

use crate::color::{Color, ColoringInstance, VertexId};
use crate::error::{ColorError, Result};
use crate::stats::SearchObserver;

/** priority of a vertex in the DSATUR order.
maximum saturation, then maximum degree, then minimum vertex id */
#[derive(Debug, PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    vertex: Reverse<VertexId>,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** computes the DSATUR visiting order (a permutation of the vertices).

1. choose a vertex not yet ordered with the largest saturation set (break ties by the
   largest degree, then by the smallest id)
2. append it to the order
3. add it to the saturation set of its neighbors that are not yet ordered
4. repeat until every vertex is ordered

No color is assigned here: the saturation set of a vertex is the set of its already
ordered neighbors. O((V + E) log V).
*/
pub fn dsatur_order<I:ColoringInstance+?Sized>(inst:&I) -> Vec<VertexId> {
    dsatur_order_with_observer(inst, &mut ())
}

/** DSATUR order, reporting the adjacency scans to the observer */
pub fn dsatur_order_with_observer<I, O>(inst:&I, observer:&mut O) -> Vec<VertexId>
where I:ColoringInstance+?Sized, O:SearchObserver+?Sized {
    let n:usize = inst.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::with_capacity(n);
    for v in inst.vertices() {
        remaining_vertices.push(v, DSatInfo { dsat:0, degree:inst.degree(v), vertex:Reverse(v) });
    }
    let mut ordered = BitSet::with_capacity(n);
    let mut saturation:Vec<BitSet> = vec![BitSet::default() ; n];
    let mut res = Vec::with_capacity(n);
    while let Some((v,_)) = remaining_vertices.pop() {
        res.push(v);
        ordered.insert(v);
        for u in inst.neighbors(v) {
            observer.edge_examined();
            // parallel edges count once
            if !ordered.contains(*u) && saturation[*u].insert(v) {
                remaining_vertices.change_priority_by(u, |p| { p.dsat += 1; });
            }
        }
    }
    debug_assert_eq!(res.len(), n);
    res
}

/** checks that order is a permutation of the vertices of inst */
pub fn check_order<I:ColoringInstance+?Sized>(inst:&I, order:&[VertexId]) -> Result<()> {
    let n = inst.nb_vertices();
    if order.len() != n {
        return Err(ColorError::InvalidOrder { nb_vertices: n });
    }
    let mut seen = BitSet::with_capacity(n);
    for v in order {
        if *v >= n {
            return Err(ColorError::InvalidVertex { vertex: *v, nb_vertices: n });
        }
        if !seen.insert(*v) {
            return Err(ColorError::InvalidOrder { nb_vertices: n });
        }
    }
    Ok(())
}

/** first-fit coloring along a vertex order: each vertex takes the smallest color (from 1)
not used by its colored neighbors. Never fails; the number of colors used is an upper
bound of the chromatic number.

returns (number of colors, colors[v])
*/
pub fn first_fit_along<I:ColoringInstance+?Sized>(inst:&I, order:&[VertexId]) -> Result<(usize, Vec<Color>)> {
    check_order(inst, order)?;
    let n = inst.nb_vertices();
    let mut colors:Vec<Color> = vec![0 ; n]; // 0: uncolored
    let mut adj_colors = BitSet::new();
    let mut nb_colors:usize = 0;
    for v in order {
        adj_colors.clear();
        for u in inst.neighbors(*v) {
            adj_colors.insert(colors[*u]);
        }
        let mut color:Color = 1;
        while adj_colors.contains(color) { color += 1; }
        colors[*v] = color;
        nb_colors = nb_colors.max(color);
    }
    debug!(nb_colors, "first-fit upper bound");
    Ok((nb_colors, colors))
}

/** upper bound given by the first-fit coloring along the DSATUR order */
pub fn dsatur_upper_bound<I:ColoringInstance+?Sized>(inst:&I) -> (usize, Vec<Color>) {
    let order = dsatur_order(inst);
    match first_fit_along(inst, &order) {
        Ok(res) => res,
        Err(e) => unreachable!("dsatur_order always returns a permutation ({})", e),
    }
}
