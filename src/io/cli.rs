//! Command-line interface for single solves and success rate batches

use crate::analysis::statistics::{TrialRunner, TrialStats};
use crate::board::Position;
use crate::io::configuration::{
    DEFAULT_BOARD_SIZE, DEFAULT_TRIAL_NODE_BUDGET, DEFAULT_TRIALS, MAX_BOARD_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::TrialProgress;
use crate::solver::{BacktrackingSolver, LasVegasSolver, TourOutcome, TourSolver, solve_las_vegas};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "knights-tour")]
#[command(author, version, about = "Search for closed knight's tours")]
/// Command-line arguments for the knight's tour solver
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attempt one closed tour and print the resulting board
    Solve(SolveArgs),
    /// Measure solver success rates over many random starts
    Trials(TrialArgs),
}

/// Solver selection for a single solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Exhaustive depth-first search
    Backtracking,
    /// Randomized walk without backtracking
    LasVegas,
}

impl Method {
    /// Human-readable solver name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backtracking => "Backtracking",
            Self::LasVegas => "Las Vegas",
        }
    }
}

/// Solver selection for a trial batch
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrialMethod {
    /// Exhaustive depth-first search only
    Backtracking,
    /// Randomized walk only
    LasVegas,
    /// Both solvers, one batch each
    Both,
}

impl TrialMethod {
    /// Solvers to run, in reporting order
    pub fn methods(self) -> Vec<Method> {
        match self {
            Self::Backtracking => vec![Method::Backtracking],
            Self::LasVegas => vec![Method::LasVegas],
            Self::Both => vec![Method::Backtracking, Method::LasVegas],
        }
    }
}

/// Arguments for a single solve
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Solver to use
    #[arg(short, long, value_enum, default_value_t = Method::Backtracking)]
    pub method: Method,

    /// Starting square as x,y
    #[arg(long, value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
    pub start: Position,

    /// Board side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Random seed for a reproducible Las Vegas walk
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Abandon a backtracking search after entering this many squares
    #[arg(short = 'b', long)]
    pub node_budget: Option<u64>,
}

/// Arguments for a success rate batch
#[derive(Args, Debug)]
pub struct TrialArgs {
    /// Solvers to measure
    #[arg(short, long, value_enum, default_value_t = TrialMethod::Both)]
    pub method: TrialMethod,

    /// Board side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Number of trials per solver
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed for reproducible start positions
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Node budget for each backtracking trial; trials reaching it are reported as undecided
    #[arg(short = 'b', long, default_value_t = DEFAULT_TRIAL_NODE_BUDGET)]
    pub node_budget: u64,

    /// Let every backtracking trial search to exhaustion
    #[arg(short, long, conflicts_with = "node_budget")]
    pub exhaustive: bool,

    /// Spread trials across all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl TrialArgs {
    /// Backtracking solver configured by the budget flags
    pub const fn backtracking_solver(&self) -> BacktrackingSolver {
        if self.exhaustive {
            BacktrackingSolver::new()
        } else {
            BacktrackingSolver::with_node_budget(self.node_budget)
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a board side length within the supported range
///
/// # Errors
///
/// Returns an error if the value is not an integer in `1..=MAX_BOARD_SIZE`
pub fn parse_board_size(value: &str) -> Result<usize> {
    let size = value
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid_parameter("size", &value, &e))?;
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be between 1 and {MAX_BOARD_SIZE}"),
        ));
    }
    Ok(size)
}

/// Executes parsed commands and writes their reports to standard output
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is rejected or a budgeted search runs out of nodes
    pub fn execute(&self) -> Result<()> {
        match &self.cli.command {
            Command::Solve(args) => {
                let outcome = Self::solve(args)?;
                print_outcome(args, &outcome);
                Ok(())
            }
            Command::Trials(args) => {
                for method in args.method.methods() {
                    let stats = Self::trials(args, method)?;
                    print_stats(method, &stats);
                }
                Ok(())
            }
        }
    }

    /// Run one solve as described by `args`
    ///
    /// # Errors
    ///
    /// Returns an error if the backtracking node budget runs out
    pub fn solve(args: &SolveArgs) -> Result<TourOutcome> {
        match args.method {
            Method::Backtracking => {
                let solver = args
                    .node_budget
                    .map_or_else(BacktrackingSolver::new, BacktrackingSolver::with_node_budget);
                solver.search(args.start, args.size)
            }
            Method::LasVegas => Ok(args.seed.map_or_else(
                || solve_las_vegas(args.start, args.size),
                |seed| LasVegasSolver::seeded(seed).solve(args.start, args.size),
            )),
        }
    }

    /// Run one batch of trials for `method`
    ///
    /// # Errors
    ///
    /// Returns an error if the size or trial count is rejected
    pub fn trials(args: &TrialArgs, method: Method) -> Result<TrialStats> {
        let mut runner = TrialRunner::new(args.size, args.trials)?;
        if let Some(seed) = args.seed {
            runner = runner.with_seed(seed);
        }

        let progress = if args.should_show_progress() {
            TrialProgress::new(method.label(), args.trials)
        } else {
            TrialProgress::hidden(args.trials)
        };
        let record = |success| progress.record(success);

        let stats = match (method, args.parallel) {
            (Method::Backtracking, false) => {
                runner.run_with_progress(&mut args.backtracking_solver(), record)
            }
            (Method::Backtracking, true) => {
                let solver = args.backtracking_solver();
                runner.run_parallel(move |start, size| solver.attempt(start, size), record)
            }
            (Method::LasVegas, false) => match args.seed {
                Some(seed) => runner.run_with_progress(&mut LasVegasSolver::seeded(seed), record),
                None => runner.run_with_progress(&mut solve_las_vegas, record),
            },
            (Method::LasVegas, true) => runner.run_parallel(solve_las_vegas, record),
        };

        progress.finish();
        Ok(stats)
    }
}

// Reports are the program's output
#[allow(clippy::print_stdout)]
fn print_outcome(args: &SolveArgs, outcome: &TourOutcome) {
    println!(
        "{} tour from {} on {}x{}: {}",
        args.method.label(),
        args.start,
        args.size,
        args.size,
        if outcome.success { "closed tour found" } else { "no closed tour" }
    );
    println!("Squares placed: {}", outcome.steps);
    print!("{}", outcome.board);
}

#[allow(clippy::print_stdout)]
fn print_stats(method: Method, stats: &TrialStats) {
    println!("--- Results for {} ---", method.label());
    println!("Total runs: {}", stats.trials);
    println!("Successful runs: {}", stats.count);
    println!("Failed runs: {}", stats.failures());
    println!("Success rate: {:.2}%", stats.rate * 100.0);
    if stats.aborted > 0 {
        println!("Undecided runs (node budget reached): {}", stats.aborted);
        if stats.decided() > 0 {
            let decided_rate = stats.count as f64 / stats.decided() as f64;
            println!("Success rate among decided runs: {:.2}%", decided_rate * 100.0);
        }
    }
    println!("Total time: {:.2} seconds", stats.elapsed_seconds);
}
