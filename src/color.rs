use std::ops::Range;

use bit_set::BitSet;
use tracing::info;

use crate::error::{ColorError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Color id produced by the exact searches (colors are numbered from 1) */
pub type Color = usize;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** coloring instance base trait.

Vertices are the dense range [0, n). The neighbor lists are expected to be symmetric
(v in neighbors(u) iff u in neighbors(v)).
*/
pub trait ColoringInstance {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// vertex ids
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// returns true if u and v are adjacent. O(Δ(G)) unless overridden
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.neighbors(u).iter().any(|w| *w == v)
    }

    /// logs statistics of the instance
    fn display_statistics(&self) {
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        let nb_arcs:usize = degrees.iter().sum();
        info!(
            vertices = self.nb_vertices(),
            edges = nb_arcs / 2,
            min_degree = degrees.iter().min().copied().unwrap_or(0),
            max_degree = degrees.iter().max().copied().unwrap_or(0),
            "instance statistics"
        );
    }
}

/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the solution is feasible and uses the given number of colors
    Ok(usize),
    /// the vertex appears in two color classes
    VertexAddedTwice(VertexId),
    /// the vertex has no color
    VertexNotColored(VertexId),
    /// the two (adjacent) vertices share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks a solution given as a partition (sol[i]: vertices colored with the i-th color).
returns the number of colors if the solution is feasible
*/
pub fn checker<I:ColoringInstance+?Sized>(inst:&I, sol:&[Vec<VertexId>]) -> CheckerResult {
    // check that all vertices are added
    let mut visited = BitSet::with_capacity(inst.nb_vertices());
    for c in sol {
        for v in c {
            if *v >= inst.nb_vertices() || !visited.insert(*v) {
                return CheckerResult::VertexAddedTwice(*v);
            }
        }
    }
    if let Some(v) = inst.vertices().find(|v| !visited.contains(*v)) {
        return CheckerResult::VertexNotColored(v);
    }
    // check conflicts
    for c in sol {
        for (i,v1) in c.iter().enumerate() {
            for v2 in &c[i+1..] {
                if inst.are_adjacent(*v1, *v2) {
                    return CheckerResult::ConflictingEdge(*v1, *v2);
                }
            }
        }
    }
    // if ok: return the number of (non-empty) colors
    CheckerResult::Ok(sol.iter().filter(|c| !c.is_empty()).count())
}

/**
checks a solution given as an assignment (colors[v]: color of v, None if uncolored).
Works for any color token.
*/
pub fn check_assignment<I, C>(inst:&I, colors:&[Option<C>]) -> CheckerResult
where I:ColoringInstance+?Sized, C:PartialEq {
    if colors.len() != inst.nb_vertices() {
        return CheckerResult::VertexNotColored(colors.len().min(inst.nb_vertices()));
    }
    let mut distinct:Vec<&C> = Vec::new();
    for (u,cu) in colors.iter().enumerate() {
        let cu = match cu {
            None => return CheckerResult::VertexNotColored(u),
            Some(c) => c,
        };
        for v in inst.neighbors(u) {
            if colors[*v].as_ref() == Some(cu) {
                return CheckerResult::ConflictingEdge(u.min(*v), u.max(*v));
            }
        }
        if !distinct.contains(&cu) { distinct.push(cu); }
    }
    CheckerResult::Ok(distinct.len())
}

/// converts an assignment (colors numbered from 1) into a partition. Uncolored vertices are left out.
pub fn to_partition(colors:&[Option<Color>]) -> Solution {
    let nb_colors = colors.iter().flatten().max().copied().unwrap_or(0);
    let mut res = vec![vec![] ; nb_colors.max(1)];
    for (v,c) in colors.iter().enumerate() {
        if let Some(c) = c {
            res[c.saturating_sub(1)].push(v);
        }
    }
    res.retain(|class| !class.is_empty());
    res
}

/** writes a string encoding the solution (one line per color) */
pub fn solution_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for e in solution {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/** reads a solution encoded by `solution_to_string` */
pub fn solution_from_string(s:&str) -> Result<Solution> {
    let mut res = Vec::new();
    for (i,line) in s.lines().enumerate() {
        let class = line.split_whitespace()
            .map(|tok| tok.parse::<VertexId>().map_err(|e| ColorError::Parse {
                line: i+1,
                reason: format!("invalid vertex '{}': {}", tok, e),
            }))
            .collect::<Result<Vec<VertexId>>>()?;
        if !class.is_empty() { res.push(class); }
    }
    Ok(res)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyList;

    fn square() -> AdjacencyList {
        AdjacencyList::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap()
    }

    #[test]
    fn test_checker_ok() {
        let inst = square();
        assert_eq!(checker(&inst, &[vec![0,2], vec![1,3]]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_errors() {
        let inst = square();
        assert_eq!(checker(&inst, &[vec![0,2], vec![1]]), CheckerResult::VertexNotColored(3));
        assert_eq!(checker(&inst, &[vec![0,2], vec![1,3,2]]), CheckerResult::VertexAddedTwice(2));
        assert_eq!(checker(&inst, &[vec![0,1], vec![2,3]]), CheckerResult::ConflictingEdge(0,1));
    }

    #[test]
    fn test_check_assignment() {
        let inst = square();
        assert_eq!(check_assignment(&inst, &[Some("a"), Some("b"), Some("a"), Some("b")]), CheckerResult::Ok(2));
        assert_eq!(check_assignment(&inst, &[Some(1), Some(2), None, Some(2)]), CheckerResult::VertexNotColored(2));
        assert_eq!(check_assignment(&inst, &[Some(1), Some(2), Some(2), Some(3)]), CheckerResult::ConflictingEdge(1,2));
    }

    #[test]
    fn test_partition_and_string() {
        let sol = to_partition(&[Some(1), Some(2), Some(1), None]);
        assert_eq!(sol, vec![vec![0,2], vec![1]]);
        let s = solution_to_string(&sol);
        assert_eq!(s, "0 2 \n1 \n");
        assert_eq!(solution_from_string(&s).unwrap(), sol);
        assert!(solution_from_string("0 x\n").is_err());
    }
}
