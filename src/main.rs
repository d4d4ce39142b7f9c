//! Command-line front end for the delivery-route solvers.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use delivery_routing::io::read_model;
use delivery_routing::models::{CostModel, RouteResult};
use delivery_routing::render::{render_ascii, render_svg};
use delivery_routing::solver::{held_karp, nearest_neighbor};
use delivery_routing::Result;

/// Computes delivery-route orderings from a travel-time matrix file.
#[derive(Debug, Parser)]
#[command(name = "delivery-routing", version, about)]
struct Args {
    /// Input file: a label line followed by one matrix row per point.
    input: PathBuf,

    /// Which solver(s) to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,

    /// Start point index for the nearest-neighbor heuristic.
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Print an ASCII grid of each computed route.
    #[arg(long)]
    ascii: bool,

    /// Directory to write SVG diagrams of the computed routes into.
    #[arg(long, value_name = "DIR")]
    svg_out: Option<PathBuf>,
}

/// Which of the two fixed solvers to invoke. This is an explicit, closed
/// choice: there is no registry of algorithms behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Exact Held–Karp dynamic programming (at most 15 points).
    Exact,
    /// Nearest-neighbor heuristic.
    Nearest,
    /// Both, reporting the heuristic's gap over the optimum.
    Both,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let model = read_model(&args.input)?;
    info!(
        "loaded {} points from {}: {}",
        model.len(),
        args.input.display(),
        model.points().join(", ")
    );
    debug!("matrix symmetric: {}", model.matrix().is_symmetric());

    match args.algorithm {
        Algorithm::Exact => {
            let route = held_karp(&model)?;
            report(args, &model, &route, "Optimal route", "exact")?;
        }
        Algorithm::Nearest => {
            let route = nearest_neighbor(&model, args.start)?;
            report(args, &model, &route, "Route found", "nearest-neighbor")?;
        }
        Algorithm::Both => {
            let exact = held_karp(&model)?;
            report(args, &model, &exact, "Optimal route", "exact")?;

            let heuristic = nearest_neighbor(&model, args.start)?;
            report(args, &model, &heuristic, "Route found", "nearest-neighbor")?;

            println!(
                "Difference: {:.2}% above the optimal route",
                heuristic.gap_percent(&exact)
            );
        }
    }

    Ok(())
}

/// Prints one solver's result and writes the optional visualizations.
fn report(
    args: &Args,
    model: &CostModel,
    route: &RouteResult,
    heading: &str,
    name: &str,
) -> Result<()> {
    println!("{heading} ({name}): {}", route.describe(model));
    println!("Total time: {}", route.total_cost());

    if args.ascii {
        println!("{}", render_ascii(model, route));
    }

    if let Some(dir) = &args.svg_out {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}.svg"));
        fs::write(&path, render_svg(model, route))?;
        info!("route diagram written to {}", path.display());
    }

    Ok(())
}
