use serde::Serialize;
use tracing::{debug, info};

use crate::color::{Color, ColoringInstance, Solution, VertexId, to_partition};
use crate::error::{ColorError, Result};
use crate::search::dsatur::{check_order, dsatur_order_with_observer, first_fit_along};
use crate::search::stopping::{NeverStoppingCriterion, StoppingCriterion};
use crate::stats::SearchObserver;

/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy)]
struct Decision {
    v: VertexId,
    c: Color,
}

/// either a decision to apply, either a decision to undo
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to commit
    Restore(Decision) // decision taken
}

/** vertex visiting order of the backtracking */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderingType {
    /// vertices 0..n-1
    Natural,
    /// DSATUR order (see `dsatur_order`)
    Dsatur,
}

/** result of a search with a fixed number of colors */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// colors[v] in 1..=k for every vertex v
    Feasible(Vec<Color>),
    /// the whole search space has been explored: no coloring with k colors
    Infeasible,
    /// the stopping criterion fired before the end of the search
    Interrupted,
}

/**
Backtracking search space: colors the vertices one by one in a fixed order, trying
colors 1..=k in increasing order. A color is allowed iff no already colored neighbor
holds it. No propagation beyond direct neighbors.

The recursion is replaced by an explicit stack of events: expanding a vertex pushes,
for each allowed color (in decreasing order), a `Restore` then a `Commit`. Popping a
`Commit` colors the vertex and expands the next one; popping the matching `Restore`
uncolors it, right before the next color is tried. Every failed branch leaves the
assignment exactly as it found it.
*/
#[derive(Debug)]
pub struct BacktrackingSpace<'a, I:ColoringInstance+?Sized> {
    /// instance
    inst: &'a I,
    /// order[i]: i-th vertex to color
    order: &'a [VertexId],
    /// number of colors allowed
    max_colors: usize,
    /// colors[i]: color assigned to vertex i
    colors: Vec<Option<Color>>,
    /// decision history
    decisions: Vec<BacktrackEvent>,
    /// number of colored vertices (position in the order)
    nb_colored: usize,
}

impl<'a, I:ColoringInstance+?Sized> BacktrackingSpace<'a, I> {
    /** creates a new backtracking search space.

    Fails if max_colors is 0 or if order is not a permutation of the vertices.
    */
    pub fn new(inst:&'a I, order:&'a [VertexId], max_colors:usize) -> Result<Self> {
        if max_colors == 0 { return Err(ColorError::EmptyPalette); }
        check_order(inst, order)?;
        let n = inst.nb_vertices();
        Ok(Self {
            inst,
            order,
            max_colors,
            colors: vec![None ; n],
            decisions: Vec::with_capacity(n),
            nb_colored: 0,
        })
    }

    /// true if no already colored neighbor of v uses c. O(degree)
    fn is_safe<O:SearchObserver+?Sized>(&self, v:VertexId, c:Color, observer:&mut O) -> bool {
        for u in self.inst.neighbors(v) {
            observer.edge_examined();
            if self.colors[*u] == Some(c) { return false; }
        }
        true
    }

    /// pushes the decisions for the vertex at the current position
    fn push_next_decisions<O:SearchObserver+?Sized>(&mut self, observer:&mut O) {
        let v = self.order[self.nb_colored];
        // reverse order: the smallest color is popped first
        for c in (1..=self.max_colors).rev() {
            if self.is_safe(v, c, observer) {
                let decision = Decision { v, c };
                self.decisions.push(BacktrackEvent::Restore(decision)); // prepare to backtrack
                self.decisions.push(BacktrackEvent::Commit(decision)); // decision to apply
            }
        }
    }

    /// applies a decision to the search space
    fn commit(&mut self, decision:Decision) {
        debug_assert!(self.colors[decision.v].is_none());
        debug_assert_eq!(self.order[self.nb_colored], decision.v);
        self.colors[decision.v] = Some(decision.c);
        self.nb_colored += 1;
    }

    /// restores the search space from a decision
    fn restore(&mut self, decision:Decision) {
        debug_assert_eq!(self.colors[decision.v], Some(decision.c));
        self.colors[decision.v] = None;
        self.nb_colored -= 1;
    }

    /** depth first search.

    pops each event and applies it. The stopping criterion is checked before each descent.
    returns as soon as every vertex is colored.
    */
    pub fn dfs_search<S, O>(mut self, stopping_criterion:&S, observer:&mut O) -> SearchOutcome
    where S:StoppingCriterion+?Sized, O:SearchObserver+?Sized {
        let n = self.inst.nb_vertices();
        if n == 0 { return SearchOutcome::Feasible(Vec::new()); }
        // populate decisions with the root node children
        self.push_next_decisions(observer);
        while let Some(event) = self.decisions.pop() {
            match event {
                BacktrackEvent::Restore(decision) => { // restore the state
                    self.restore(decision);
                },
                BacktrackEvent::Commit(decision) => { // apply the decision and generate children
                    if stopping_criterion.is_finished() {
                        return SearchOutcome::Interrupted;
                    }
                    self.commit(decision);
                    observer.node_expanded();
                    if self.nb_colored == n {
                        let res:Vec<Color> = self.colors.iter().flatten().copied().collect();
                        debug_assert_eq!(res.len(), n);
                        return SearchOutcome::Feasible(res);
                    }
                    self.push_next_decisions(observer);
                }
            }
        }
        debug_assert!(self.colors.iter().all(|c| c.is_none()));
        SearchOutcome::Infeasible
    }
}

fn natural_order<I:ColoringInstance+?Sized>(inst:&I) -> Vec<VertexId> {
    inst.vertices().collect()
}

fn outcome_to_option(outcome:SearchOutcome, k:usize) -> Result<Option<Vec<Color>>> {
    match outcome {
        SearchOutcome::Feasible(colors) => Ok(Some(colors)),
        SearchOutcome::Infeasible => Ok(None),
        SearchOutcome::Interrupted => Err(ColorError::Interrupted { nb_colors: k }),
    }
}

/** plain backtracking: is there a coloring with k colors? (vertices visited in index order)

returns the coloring (colors in 1..=k) or None.
*/
pub fn backtracking_feasible<I:ColoringInstance+?Sized>(inst:&I, k:usize) -> Result<Option<Vec<Color>>> {
    let order = natural_order(inst);
    let space = BacktrackingSpace::new(inst, &order, k)?;
    outcome_to_option(space.dfs_search(&NeverStoppingCriterion, &mut ()), k)
}

/** DSATUR-guided backtracking: same search, vertices visited in the given order
(usually computed by `dsatur_order`). */
pub fn backtracking_dsatur_feasible<I:ColoringInstance+?Sized>(
    inst:&I, k:usize, order:&[VertexId]
) -> Result<Option<Vec<Color>>> {
    let space = BacktrackingSpace::new(inst, order, k)?;
    outcome_to_option(space.dfs_search(&NeverStoppingCriterion, &mut ()), k)
}

/** minimum coloring found by the backtracking */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimumColoring {
    /// number of colors (chromatic number if the search was not bounded below it)
    pub nb_colors: usize,
    /// colors[v] in 1..=nb_colors
    pub colors: Vec<Color>,
}

impl MinimumColoring {
    /// partition form of the coloring (i-th class: vertices colored with i+1)
    pub fn to_solution(&self) -> Solution {
        let colors:Vec<Option<Color>> = self.colors.iter().copied().map(Some).collect();
        to_partition(&colors)
    }
}

/** searches the minimum number of colors: tries k = 1, 2, ... up to an upper bound and
returns the first k for which the backtracking finds a coloring.

Exponential in the worst case: meant for small graphs (tens of vertices).
*/
#[derive(Debug)]
pub struct MinimumColoringSolver<'a, I:ColoringInstance+?Sized> {
    inst: &'a I,
    ordering: OrderingType,
    upper_bound: Option<usize>,
}

impl<'a, I:ColoringInstance+?Sized> MinimumColoringSolver<'a, I> {
    /// DSATUR ordering, upper bound given by a first-fit coloring
    pub fn new(inst:&'a I) -> Self {
        Self { inst, ordering: OrderingType::Dsatur, upper_bound: None }
    }

    /// sets the vertex visiting order
    pub fn ordering(mut self, ordering:OrderingType) -> Self {
        self.ordering = ordering;
        self
    }

    /// largest number of colors tried (None: first-fit bound along the visiting order)
    pub fn upper_bound(mut self, upper_bound:Option<usize>) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// runs the search until it ends
    pub fn solve(&self) -> Result<Option<MinimumColoring>> {
        self.solve_with(&NeverStoppingCriterion, &mut ())
    }

    /// runs the search.
    ///
    /// returns None if the caller-provided upper bound is smaller than the chromatic number.
    /// Fails if the upper bound is 0, or with `Interrupted` if the stopping criterion fires.
    ///
    /// # Panics
    /// - if no coloring is found within a bound known to be colorable (first-fit bound or n)
    pub fn solve_with<S, O>(&self, stopping_criterion:&S, observer:&mut O) -> Result<Option<MinimumColoring>>
    where S:StoppingCriterion+?Sized, O:SearchObserver+?Sized {
        if self.upper_bound == Some(0) { return Err(ColorError::EmptyPalette); }
        let n = self.inst.nb_vertices();
        if n == 0 {
            return Ok(Some(MinimumColoring { nb_colors: 0, colors: Vec::new() }));
        }
        let order = match self.ordering {
            OrderingType::Natural => natural_order(self.inst),
            OrderingType::Dsatur => dsatur_order_with_observer(self.inst, observer),
        };
        // (bound, a coloring with bound colors is known to exist)
        let (bound, colorable) = match self.upper_bound {
            Some(k) if k < n => (k, false),
            Some(_) => (n, true),
            None => (first_fit_along(self.inst, &order)?.0, true),
        };
        debug!(ordering=?self.ordering, bound, "minimum coloring search");
        for k in 1..=bound {
            let space = BacktrackingSpace::new(self.inst, &order, k)?;
            match space.dfs_search(stopping_criterion, observer) {
                SearchOutcome::Feasible(colors) => {
                    info!(nb_colors = k, "coloring found");
                    return Ok(Some(MinimumColoring { nb_colors: k, colors }));
                },
                SearchOutcome::Infeasible => {
                    debug!(k, "no coloring");
                },
                SearchOutcome::Interrupted => {
                    return Err(ColorError::Interrupted { nb_colors: k });
                },
            }
        }
        assert!(!colorable, "backtracking found no coloring with {} colors, one is known to exist", bound);
        Ok(None)
    }
}

/** minimum coloring (DSATUR-guided backtracking).

upper_bound: largest number of colors tried (None: first-fit bound along the DSATUR order)
*/
pub fn minimum_coloring<I:ColoringInstance+?Sized>(inst:&I, upper_bound:Option<usize>) -> Result<Option<MinimumColoring>> {
    MinimumColoringSolver::new(inst).upper_bound(upper_bound).solve()
}
