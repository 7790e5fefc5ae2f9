// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::{io::Write, path::Path, sync::Arc, time::{Duration, Instant}};

use bbtsp::*;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::{info, LevelFilter};

/// BBTSP solves the symmetric traveling salesman problem to optimality with
/// a branch-and-bound search whose subproblems are bounded by one trees.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance that needs to be solved. The first line
    /// gives the number of cities (optionally followed by the known optimal
    /// length) and each of the following lines gives the `x y` coordinates
    /// of one city.
    instance: String,
    /// The lower bound used to evaluate each subproblem
    #[clap(short, long, value_enum, default_value_t = BoundKind::HeldKarp)]
    bound: BoundKind,
    /// Explore the subproblems depth first rather than best bound first
    #[clap(long)]
    depth_first: bool,
    /// How long do you want the solver to keep working on your problem ?
    /// (in seconds)
    #[clap(short, long)]
    duration: Option<u64>,
    /// Start the search with the nearest neighbor tour as incumbent
    #[clap(short, long)]
    warm: bool,
    /// Increases the verbosity of the logs (can be repeated)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BoundKind {
    /// The plain minimum one tree
    Simple,
    /// The one tree improved by subgradient optimization of node penalties
    HeldKarp,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logger(args.verbose);

    let instance = read_instance(&args.instance)?;
    let simple = SimpleOneTree;
    let held_karp = HeldKarpOneTree::default();
    let bound: &dyn OneTreeLowerBound = match args.bound {
        BoundKind::Simple => &simple,
        BoundKind::HeldKarp => &held_karp,
    };
    let cutoff = TimeBudget::new(Duration::from_secs(args.duration.unwrap_or(u64::MAX)));
    let mut best_first = SimpleFringe::new(MinLB);
    let mut depth_first = DepthFirstFringe::new();
    let fringe: &mut dyn Fringe = if args.depth_first { &mut depth_first } else { &mut best_first };

    let mut solver = DefaultSolver::custom(&instance, bound, &cutoff, fringe);
    if args.warm {
        if let Some((value, tour)) = nearest_neighbor_tour(&instance) {
            info!("warm start with a tour of length {value:.2}");
            solver.set_primal(value, tour);
        }
    }

    let start    = Instant::now();
    let outcome  = solver.minimize()?;
    let duration = start.elapsed();

    println!("instance : {}", instance_name(&args.instance));
    println!("cities   : {}", instance.nb_cities());
    println!("status   : {}", status(outcome));
    println!("lower bnd: {}", objective(solver.best_lower_bound()));
    println!("upper bnd: {}", objective(solver.best_value().unwrap_or(f64::INFINITY)));
    println!("gap      : {:.4}", solver.gap());
    println!("explored : {}", solver.explored());
    println!("duration : {}", duration.as_secs_f32());
    println!("solution : {}", tour_to_string(instance.nb_cities(), solver.best_solution()));
    if let Some(expected) = instance.objective() {
        println!("expected : {expected:.2}");
    }
    Ok(())
}

/// Builds the logger using the environment variable 'RUST_LOG' to determine
/// the log level. If it is not set, the level is raised from `warn` by as
/// many levels as `verbosity`.
fn init_logger(verbosity: u8) {
    let start_time = Arc::new(Instant::now());
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = Env::default().default_filter_or(level.as_str());
    Builder::from_env(env)
        .format(move |buf, record| {
            let elapsed = start_time.elapsed().as_millis();
            writeln!(buf, "c {:>6}.{:<03} [{}] - {}", elapsed / 1000, elapsed % 1000, record.level(), record.args())
        })
        .init();
}
fn instance_name<P: AsRef<Path>>(fname: P) -> String {
    fname.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| fname.as_ref().display().to_string())
}
fn objective(x: f64) -> String {
    if x.is_finite() {
        format!("{x:.2}")
    } else if x > 0.0 {
        "+inf".to_string()
    } else {
        "-inf".to_string()
    }
}
fn status(completion: Completion) -> &'static str {
   if completion.is_exact {
       "Proved"
   } else {
       "Timeout"
   }
}
fn tour_to_string(nb_cities: usize, solution: Option<Solution>) -> String {
    match solution.and_then(|tour| tour_order(nb_cities, &tour)) {
        None => "No feasible solution found".to_string(),
        Some(order) => order.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
    }
}
