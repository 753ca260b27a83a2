use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use tracing::debug;

use crate::color::VertexId;
use crate::error::{ColorError, Result};
use crate::graph::{Graph, Weight};


/** reads a graph in the DIMACS format from a file.

An optional third integer on an edge line is read as the edge weight (default: 1).
*/
pub fn read_from_file(filename:&str) -> Result<Graph> {
    let content = fs::read_to_string(filename)?;
    let res = read_from_str(content.as_str())?;
    debug!(filename, vertices=res.0.len(), "DIMACS instance read");
    Ok(res.1)
}

/** reads a DIMACS graph. returns the edge list (as read) and the graph.

 - comment lines start with 'c'
 - header: "p edge n m" (or "p col n m")
 - edges: "e u v [w]" (WARNING: indices start at 1 in the DIMACS format)
*/
pub fn read_from_str(s:&str) -> Result<(Vec<(VertexId,VertexId,Weight)>, Graph)> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges = Vec::new();
    let mut res:Option<Graph> = None;
    let mut nb_duplicates:usize = 0;
    for (i,line) in s.lines().enumerate() {
        let line = line.trim();
        let err = |reason:String| ColorError::Parse { line: i+1, reason };
        if line.is_empty() || line.starts_with('c') { continue; }
        if line.starts_with('p') {
            if header.is_some() { return Err(err("second header".to_string())); }
            let (_, (n,m)) = read_header(line)
                .map_err(|e| err(format!("invalid header: {}", e)))?;
            header = Some((n,m));
            res = Some(Graph::new(n));
            continue;
        }
        let graph = match res.as_mut() {
            None => return Err(err("edge before the header".to_string())),
            Some(g) => g,
        };
        let (_, (a,b,w)) = read_edge(line)
            .map_err(|e| err(format!("invalid edge: {}", e)))?;
        if a == 0 || b == 0 {
            return Err(err("vertex ids start at 1".to_string()));
        }
        let w = w.unwrap_or(1);
        // the first occurrence of an edge (and its weight) is kept
        match graph.add_edge(a-1, b-1, w) {
            Ok(()) => edges.push((a-1, b-1, w)),
            Err(ColorError::DuplicateEdge { .. }) => nb_duplicates += 1,
            Err(e) => return Err(e),
        }
    }
    if nb_duplicates > 0 {
        debug!(nb_duplicates, "duplicate edges skipped");
    }
    match (header, res) {
        (Some((_,m)), Some(graph)) => {
            // some generators count each edge twice
            if edges.len() != m && 2*edges.len() != m {
                debug!(expected=m, read=edges.len(), "edge count differs from the header");
            }
            Ok((edges, graph))
        },
        _ => Err(ColorError::Parse { line: 0, reason: "missing header".to_string() }),
    }
}

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads a (possibly negative) weight
fn read_weight(s:&str) -> IResult<&str, Weight> {
    map_res(recognize(pair(opt(char('-')), digit1)), |d:&str| d.parse::<Weight>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (s, n1) = read_integer(s)?;
    let (s, _) = space1(s)?;
    let (s, n2) = read_integer(s)?;
    let (s, _) = space0(s)?;
    Ok((s, (n1,n2)))
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    let (s, _) = alt((tag("p edge"), tag("p col")))(s)?;
    let (s, _) = space1(s)?;
    read_two_integers(s)
}

/// reads edge line "e a b [w]"
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize,Option<Weight>)> {
    let (s, _) = tag("e")(s)?;
    let (s, _) = space1(s)?;
    let (s, (a,b)) = read_two_integers(s)?;
    let (s, w) = opt(read_weight)(s)?;
    let (s, _) = space0(s)?;
    Ok((s, (a,b,w)))
}
