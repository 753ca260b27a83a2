//! Graph coloring and minimum spanning tree command line tool

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::time::Instant;

use clap::{App, ArgMatches, load_yaml};
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mst_color::adjacency::AdjacencyList;
use mst_color::color::{to_partition, ColoringInstance, Color, Solution};
use mst_color::error::{ColorError, Result};
use mst_color::kruskal::mst_with_observer;
use mst_color::search::backtracking::{MinimumColoringSolver, OrderingType};
use mst_color::search::dsatur::{dsatur_order_with_observer, first_fit_along};
use mst_color::search::greedy::{greedy_with_observer, is_complete, palette, GreedyOrder};
use mst_color::search::stopping::{NeverStoppingCriterion, StoppingCriterion, TimeStoppingCriterion};
use mst_color::stats::SearchStats;
use mst_color::util::{export_results, read_params, Params};


/**
reads an instance, the algorithm to run and its parameters, and solves the problem.
*/
pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(main_args:&ArgMatches) -> Result<()> {
    let params = read_params(main_args)?;
    params.graph.display_statistics();
    let algorithm = main_args.subcommand_name().unwrap_or("dsatur-backtracking");
    if algorithm == "mst" {
        return run_mst(&params);
    }
    let inst:AdjacencyList = if params.use_mst {
        mst_with_observer(&params.graph, &mut ()).to_adjacency()
    } else {
        params.graph.to_adjacency()
    };
    // solve it
    let mut stats = SearchStats::default();
    let t_start = Instant::now();
    let (nb_colors, solution):(Option<usize>, Option<Solution>) = match algorithm {
        "greedy" | "greedy-degree" => {
            let order = if algorithm == "greedy" { GreedyOrder::Natural } else { GreedyOrder::DecreasingDegree };
            // max degree + 1 colors always suffice
            let max_degree = inst.vertices().map(|v| inst.degree(v)).max().unwrap_or(0);
            let colors = greedy_with_observer(
                &inst, &palette(params.nb_colors.unwrap_or(max_degree+1)), order, &mut stats
            )?;
            if !is_complete(&colors) {
                println!("palette too small: {} vertices left uncolored", colors.iter().filter(|c| c.is_none()).count());
            }
            let solution = to_partition(&colors);
            (Some(solution.len()), Some(solution))
        },
        "dsatur" => {
            let order = dsatur_order_with_observer(&inst, &mut stats);
            println!("DSATUR order: {:?}", order);
            let (k, colors) = first_fit_along(&inst, &order)?;
            let colors:Vec<Option<Color>> = colors.into_iter().map(Some).collect();
            (Some(k), Some(to_partition(&colors)))
        },
        "backtracking" | "dsatur-backtracking" => {
            let ordering = if algorithm == "backtracking" { OrderingType::Natural } else { OrderingType::Dsatur };
            let stopping_criterion:Box<dyn StoppingCriterion> = match params.time_limit {
                None => Box::new(NeverStoppingCriterion),
                Some(t) => Box::new(TimeStoppingCriterion::new(t)),
            };
            let res = MinimumColoringSolver::new(&inst)
                .ordering(ordering)
                .upper_bound(params.nb_colors)
                .solve_with(&*stopping_criterion, &mut stats);
            match res {
                Ok(Some(coloring)) => (Some(coloring.nb_colors), Some(coloring.to_solution())),
                Ok(None) => {
                    println!("no coloring with at most {} colors", params.nb_colors.unwrap_or(0));
                    (None, None)
                },
                Err(ColorError::Interrupted { nb_colors }) => {
                    println!("time limit reached while trying {} colors", nb_colors);
                    (None, None)
                },
                Err(e) => return Err(e),
            }
        },
        _ => return Err(ColorError::InvalidArgument(format!("unknown algorithm {}", algorithm))),
    };
    let duration = t_start.elapsed().as_secs_f32();
    match nb_colors {
        Some(k) => println!("{} took {:.3} seconds. Nb colors: {}", algorithm, duration, k),
        None => println!("{} took {:.3} seconds. No solution", algorithm, duration),
    }
    let stats = json!({
        "algorithm": algorithm,
        "inst_name": params.inst_name,
        "mst": params.use_mst,
        "nb_colors": nb_colors,
        "time_searched": duration,
        "nb_edges_examined": stats.nb_edges_examined,
        "nb_expanded": stats.nb_expanded,
    });
    // export results
    export_results(
        &inst,
        solution.as_deref(),
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    )
}

/// computes the MST, prints it and exports its edges
fn run_mst(params:&Params) -> Result<()> {
    let mut stats = SearchStats::default();
    let t_start = Instant::now();
    let forest = mst_with_observer(&params.graph, &mut stats);
    let duration = t_start.elapsed().as_secs_f32();
    println!(
        "Kruskal took {:.3} seconds. weight: {}\t edges: {}\t {}",
        duration,
        forest.total_weight(),
        forest.edges().len(),
        if forest.is_spanning_tree() { "spanning tree".to_string() }
        else { format!("forest ({} components)", forest.nb_components()) },
    );
    let stats = json!({
        "algorithm": "mst",
        "inst_name": params.inst_name,
        "time_searched": duration,
        "mst_weight": forest.total_weight(),
        "spanning_tree": forest.is_spanning_tree(),
        "nb_components": forest.nb_components(),
        "nb_edges_examined": stats.nb_edges_examined,
        "edges": forest.edges(),
    });
    if let Some(filename) = &params.perf_file {
        std::fs::write(filename, serde_json::to_string(&stats)?)?;
    }
    if let Some(filename) = &params.sol_file {
        let mut res = String::default();
        for e in forest.edges() {
            res += format!("{} {} {}\n", e.u, e.v, e.weight).as_str();
        }
        std::fs::write(filename, res)?;
    }
    Ok(())
}
