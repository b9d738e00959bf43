//! Success rate measurement over many independent trials
//!
//! Each trial draws a uniformly random start, hands it to a solver that builds its own
//! board, and records whether a closed tour came back. Trials share no state, so the
//! tally does not depend on the order they run in and [`TrialRunner::run_parallel`]
//! is an equivalent alternative to the sequential runner.

use crate::board::Position;
use crate::io::configuration::MAX_BOARD_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::solver::{TourOutcome, TourSolver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use std::time::{Duration, Instant};

/// Aggregate outcome of a batch of trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    /// Number of trials that produced a closed tour
    pub count: usize,
    /// Number of trials abandoned at a node budget without a verdict
    pub aborted: usize,
    /// Number of trials run
    pub trials: usize,
    /// Fraction of successful trials, 0 when no trials ran
    ///
    /// Aborted trials count in the denominator, so the rate is a lower bound while any
    /// trial is left undecided.
    pub rate: f64,
    /// Wall-clock time for the whole batch
    pub elapsed_seconds: f64,
}

impl TrialStats {
    fn new(tally: Tally, trials: usize, elapsed: Duration) -> Self {
        let Tally { count, aborted } = tally;
        let rate = if trials == 0 {
            0.0
        } else {
            count as f64 / trials as f64
        };
        Self {
            count,
            aborted,
            trials,
            rate,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    /// Number of trials that ended without a closed tour and were not aborted
    pub const fn failures(&self) -> usize {
        self.trials
            .saturating_sub(self.count)
            .saturating_sub(self.aborted)
    }

    /// Number of trials that reached a verdict
    pub const fn decided(&self) -> usize {
        self.trials.saturating_sub(self.aborted)
    }
}

/// Running success and abort counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    count: usize,
    aborted: usize,
}

impl Tally {
    fn of(outcome: &TourOutcome) -> Self {
        Self {
            count: usize::from(outcome.success),
            aborted: usize::from(outcome.aborted && !outcome.success),
        }
    }

    const fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            aborted: self.aborted + other.aborted,
        }
    }
}

/// Configured batch of trials on a fixed board size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRunner {
    size: usize,
    trials: usize,
    seed: Option<u64>,
}

impl TrialRunner {
    /// Create a runner for `trials` attempts on a `size` x `size` board
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero or exceeds [`MAX_BOARD_SIZE`], or if no
    /// trials are requested
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must be between 1 and {MAX_BOARD_SIZE}"),
            ));
        }
        if trials == 0 {
            return Err(invalid_parameter("trials", &trials, &"must be at least 1"));
        }
        Ok(Self {
            size,
            trials,
            seed: None,
        })
    }

    /// Draw start positions from a seeded source so the batch is reproducible
    ///
    /// Solvers keep their own randomness; seed them separately for fully
    /// reproducible Las Vegas batches.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Board side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of trials per batch
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Seed for start positions, if any
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run every trial in sequence
    pub fn run<S: TourSolver + ?Sized>(&self, solver: &mut S) -> TrialStats {
        self.run_with_progress(solver, |_| {})
    }

    /// Run every trial in sequence, reporting each result to `on_trial`
    pub fn run_with_progress<S, P>(&self, solver: &mut S, on_trial: P) -> TrialStats
    where
        S: TourSolver + ?Sized,
        P: FnMut(bool),
    {
        match self.seed {
            Some(seed) => run_sequential(
                solver,
                self.size,
                self.trials,
                &mut StdRng::seed_from_u64(seed),
                on_trial,
            ),
            None => run_sequential(solver, self.size, self.trials, &mut rand::rng(), on_trial),
        }
    }

    /// Run trials across the rayon thread pool, reporting each result to `on_trial`
    ///
    /// With a seed, trial `i` draws its start from a source seeded with `seed + i`, so
    /// the tally is reproducible regardless of scheduling. The starts differ from
    /// those of a seeded sequential run.
    pub fn run_parallel<F, P>(&self, solver: F, on_trial: P) -> TrialStats
    where
        F: Fn(Position, usize) -> TourOutcome + Sync,
        P: Fn(bool) + Sync,
    {
        let timer = Instant::now();
        let size = self.size;

        let tally = (0..self.trials)
            .into_par_iter()
            .map(|trial| {
                let start = match self.seed {
                    Some(seed) => random_start(
                        &mut StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
                        size,
                    ),
                    None => random_start(&mut rand::rng(), size),
                };
                let result =
                    start.map_or_else(Tally::default, |start| Tally::of(&solver(start, size)));
                on_trial(result.count > 0);
                result
            })
            .reduce(Tally::default, Tally::merge);

        TrialStats::new(tally, self.trials, timer.elapsed())
    }
}

/// Run `trials` attempts with random starts on a `size` x `size` board
///
/// Outcomes marked [`aborted`](TourOutcome::aborted) are tallied separately from
/// failures. A board of size 0 has no start to draw, so every trial counts as a failure without
/// calling the solver.
pub fn run_trials<S: TourSolver + ?Sized>(solver: &mut S, size: usize, trials: usize) -> TrialStats {
    run_sequential(solver, size, trials, &mut rand::rng(), |_| {})
}

fn run_sequential<S, R, P>(
    solver: &mut S,
    size: usize,
    trials: usize,
    rng: &mut R,
    mut on_trial: P,
) -> TrialStats
where
    S: TourSolver + ?Sized,
    R: Rng + ?Sized,
    P: FnMut(bool),
{
    let timer = Instant::now();
    let mut tally = Tally::default();

    for _ in 0..trials {
        let trial = random_start(rng, size)
            .map_or_else(Tally::default, |start| Tally::of(&solver.solve(start, size)));
        on_trial(trial.count > 0);
        tally = tally.merge(trial);
    }

    TrialStats::new(tally, trials, timer.elapsed())
}

/// Uniformly random square on a `size` x `size` board
fn random_start<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Option<Position> {
    let bound = i32::try_from(size).ok().filter(|&bound| bound > 0)?;
    Some(Position::new(
        rng.random_range(0..bound),
        rng.random_range(0..bound),
    ))
}
