use std::str::FromStr;

use clap::ArgMatches;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::{info, warn};

use crate::color::{checker, solution_to_string, CheckerResult, ColoringInstance, VertexId};
use crate::dimacs;
use crate::error::{ColorError, Result};
use crate::generator::random_connected;
use crate::graph::Graph;

/// edge density of the random instances if not given
pub const DEFAULT_DENSITY:f64 = 0.4;

/** parameters read from the command line */
#[derive(Debug)]
pub struct Params {
    /// instance name (file name, or description of the random instance)
    pub inst_name: String,
    /// instance
    pub graph: Graph,
    /// if true, color the minimum spanning tree instead of the graph
    pub use_mst: bool,
    /// palette size / upper bound on the number of colors
    pub nb_colors: Option<usize>,
    /// time limit (seconds)
    pub time_limit: Option<f32>,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the statistics
    pub perf_file: Option<String>,
}

/// parses an optional argument
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>>
where T::Err: std::fmt::Display {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|e|
            ColorError::InvalidArgument(format!("--{} {}: {}", name, s, e))
        ),
    }
}

/** reads command line input: the instance (DIMACS file or random graph), and the search options */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let (inst_name, graph) = match (main_args.value_of("instance"), parse_arg::<usize>(main_args, "random")?) {
        (Some(filename), _) => {
            info!(filename, "reading instance");
            (filename.to_string(), dimacs::read_from_file(filename)?)
        },
        (None, Some(n)) => {
            let density = parse_arg::<f64>(main_args, "density")?.unwrap_or(DEFAULT_DENSITY);
            let seed = parse_arg::<u64>(main_args, "seed")?.unwrap_or(0);
            let mut rng = StdRng::seed_from_u64(seed);
            (
                format!("random_n{}_d{}_s{}", n, density, seed),
                random_connected(n, density, &mut rng)?
            )
        },
        (None, None) => return Err(ColorError::InvalidArgument(
            "an instance is needed (--instance or --random)".to_string()
        )),
    };
    let nb_colors = parse_arg::<usize>(main_args, "colors")?;
    if nb_colors == Some(0) { return Err(ColorError::EmptyPalette); }
    let time_limit = parse_arg::<f32>(main_args, "time")?;
    let sol_file = main_args.value_of("solution").map(|e| e.to_string());
    if let Some(e) = &sol_file { info!("printing solutions in: {}", e); }
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    if let Some(e) = &perf_file { info!("printing perfs in: {}", e); }
    Ok(Params {
        inst_name,
        graph,
        use_mst: main_args.is_present("mst"),
        nb_colors,
        time_limit,
        sol_file,
        perf_file,
    })
}

/// exports search results to files
pub fn export_results<I:ColoringInstance+?Sized>(
    instance:&I,
    solution:Option<&[Vec<VertexId>]>,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename, serde_json::to_string(stats)?)?;
    }
    // export solution
    if let (Some(filename), Some(solution)) = (sol_file, solution) {
        match checker(instance, solution) {
            CheckerResult::Ok(_) => {},
            checker_result => { warn!("invalid solution (reason: {:?})", checker_result) }
        };
        std::fs::write(filename, solution_to_string(solution))?;
    }
    Ok(())
}
