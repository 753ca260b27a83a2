use clap::{App, ArgMatches, load_yaml};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mst_color::{
    dimacs,
    color::{checker, solution_from_string, CheckerResult},
    error::Result,
};

/** checks a coloring solution against an instance */
pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    // parse arguments
    let yaml = load_yaml!("checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    match run(&main_args) {
        Ok(true) => {},
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// returns true if the solution is feasible
fn run(main_args:&ArgMatches) -> Result<bool> {
    // both arguments are required by the yaml description
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let instance = dimacs::read_from_file(inst_filename)?;
    let solution = solution_from_string(&std::fs::read_to_string(sol_filename)?)?;
    // call checker
    match checker(&instance, &solution) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
            return Ok(true);
        },
        CheckerResult::VertexAddedTwice(v) => {
            println!("ERROR: vertex {} colored twice", v);
        },
        CheckerResult::VertexNotColored(v) => {
            println!("ERROR: vertex {} not colored", v);
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are adjacent and share a color", a, b);
        },
    };
    Ok(false)
}
