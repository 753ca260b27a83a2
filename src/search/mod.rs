//! Search procedures for the graph coloring problem.

/// greedy heuristics (insertion order, decreasing degree)
pub mod greedy;

/// DSATUR vertex ordering and first-fit upper bound
pub mod dsatur;

/// backtracking (plain and DSATUR-guided) and minimum coloring driver
pub mod backtracking;

/// stopping criteria (cancellation hooks of the searches)
pub mod stopping;
