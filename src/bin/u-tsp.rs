//! u-tsp CLI: solve Euclidean TSP instances and compare solvers.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;

use u_tsp::experiments::{ExperimentConfig, ExperimentRunner};
use u_tsp::graph::{random_points, Graph};
use u_tsp::hds::HdsConfig;
use u_tsp::opt_ppp::{MoveStrategy, OptPppConfig};
use u_tsp::points::{load_points, save_points};
use u_tsp::ppp::Construction;
use u_tsp::solve::{Algorithm, Details, Solution, SolveOptions};

/// Point count above which branch & bound only runs when asked for.
const HDS_DEFAULT_MAX_N: usize = 12;

#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Euclidean TSP: nearest neighbor, 2-opt, MST approximation and branch & bound")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one instance with one or more solvers
    Solve(SolveArgs),

    /// Compare solvers over many random instances
    Stats(StatsArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Number of random points
    #[arg(short, long, default_value_t = 10, conflicts_with = "file")]
    n: usize,

    /// Read points from a file instead of generating them
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Random seed (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// First point of the greedy cycle and spanning tree root
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Write the points to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Solver to run (repeatable; default: all, branch & bound only up
    /// to 12 points)
    #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
    algorithms: Vec<Algorithm>,

    /// Node budget of the branch & bound search
    #[arg(long, default_value_t = 100_000)]
    max_nodes: usize,

    /// Pass budget of the 2-opt search
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Use the cheaper, looser branch & bound bound
    #[arg(long)]
    simple_bound: bool,

    /// Apply the best 2-opt move per pass instead of the first found
    #[arg(long, conflicts_with = "sweep")]
    best_improvement: bool,

    /// Apply every improving 2-opt move in one scan before rescanning
    #[arg(long)]
    sweep: bool,

    /// Build the greedy cycle by nearest insertion
    #[arg(long, conflicts_with = "attach")]
    insertion: bool,

    /// Build the greedy cycle by attaching each point after its nearest
    /// cycle point
    #[arg(long)]
    attach: bool,

    /// Print the visiting order of each tour
    #[arg(long)]
    show_cycle: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Points per instance
    #[arg(short, long, default_value_t = 10)]
    n: usize,

    /// Number of random instances
    #[arg(short, long, default_value_t = 100)]
    trials: usize,

    /// Seed of the first instance
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run a scalability sweep over these sizes instead of a single n
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Solver to run (repeatable; default: all)
    #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
    algorithms: Vec<Algorithm>,

    /// Largest instance on which branch & bound runs
    #[arg(long, default_value_t = HDS_DEFAULT_MAX_N)]
    hds_max_n: usize,

    /// Run trials in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level.
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Solve(args) => cmd_solve(&args),
        Commands::Stats(args) => cmd_stats(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_solve(args: &SolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let points = match &args.file {
        Some(path) => load_points(path)?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            log::info!("generating {} points with seed {seed}", args.n);
            random_points(args.n, seed)
        }
    };
    if let Some(path) = &args.save {
        save_points(path, &points)?;
        log::info!("saved {} points to {}", points.len(), path.display());
    }
    let graph = Graph::new(points)?;

    let options = solve_options(args);
    let explicit = !args.algorithms.is_empty();
    let algorithms: Vec<Algorithm> = if explicit {
        args.algorithms.clone()
    } else {
        Algorithm::ALL
            .into_iter()
            .filter(|a| !a.is_exponential() || graph.size() <= HDS_DEFAULT_MAX_N)
            .collect()
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{} points", graph.size())?;
    for algorithm in algorithms {
        let solution = algorithm.solve(&graph, &options)?;
        print_solution(&mut out, &solution, args.show_cycle)?;
    }
    if !explicit && graph.size() > HDS_DEFAULT_MAX_N {
        writeln!(out, "hds skipped above {HDS_DEFAULT_MAX_N} points (pass -a hds to force)")?;
    }
    Ok(())
}

fn solve_options(args: &SolveArgs) -> SolveOptions {
    let mut opt_ppp = OptPppConfig::default();
    if let Some(passes) = args.max_iterations {
        opt_ppp = opt_ppp.with_max_iterations(passes);
    }
    if args.best_improvement {
        opt_ppp = opt_ppp.with_strategy(MoveStrategy::BestImprovement);
    } else if args.sweep {
        opt_ppp = opt_ppp.with_strategy(MoveStrategy::Sweep);
    }

    let mut options = SolveOptions::default()
        .with_start(args.start)
        .with_opt_ppp(opt_ppp)
        .with_hds(
            HdsConfig::default()
                .with_max_nodes(args.max_nodes)
                .with_simple_bound(args.simple_bound),
        );
    if args.insertion {
        options.ppp.construction = Construction::NearestInsertion;
    } else if args.attach {
        options.ppp.construction = Construction::NearestAttach;
    }
    options
}

fn print_solution(
    out: &mut impl Write,
    solution: &Solution,
    show_cycle: bool,
) -> io::Result<()> {
    write!(
        out,
        "{:<8} length {:>12.6}  {:<15} {:>10.3} ms",
        solution.algorithm.as_str(),
        solution.tour.length,
        solution.status.as_str(),
        solution.elapsed.as_secs_f64() * 1000.0
    )?;
    match solution.details {
        Details::Ppp => {}
        Details::OptPpp {
            initial_length,
            passes,
            moves,
        } => write!(
            out,
            "  ({moves} moves in {passes} passes, from {initial_length:.6})"
        )?,
        Details::OptPrim { mst_weight } => write!(out, "  (mst {mst_weight:.6})")?,
        Details::Hds {
            nodes_expanded,
            nodes_pruned,
            ..
        } => write!(out, "  ({nodes_expanded} expanded, {nodes_pruned} pruned)")?,
    }
    writeln!(out)?;

    if show_cycle {
        let order: Vec<String> = solution.tour.cycle.iter().map(|v| v.to_string()).collect();
        writeln!(out, "         cycle: {}", order.join(" "))?;
    }
    Ok(())
}

fn cmd_stats(args: &StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ExperimentConfig::default()
        .with_n(args.n)
        .with_trials(args.trials)
        .with_seed(args.seed)
        .with_hds_max_n(args.hds_max_n)
        .with_parallel(args.parallel);
    if !args.algorithms.is_empty() {
        config = config.with_algorithms(args.algorithms.clone());
    }
    if args.parallel && !cfg!(feature = "parallel") {
        log::warn!("built without the `parallel` feature, running trials sequentially");
    }

    let mut out = io::stdout().lock();
    if args.sizes.is_empty() {
        let report = ExperimentRunner::run(&config)?;
        write!(out, "{report}")?;
    } else {
        for report in ExperimentRunner::scalability(&args.sizes, &config)? {
            write!(out, "{report}")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
