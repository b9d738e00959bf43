//! Randomized single-pass walk for a closed tour
//!
//! The walk picks uniformly among the currently legal moves and never backtracks, so a
//! reported success is always a genuine closed tour but a failure says nothing about
//! whether one exists. Repeated calls are independent Bernoulli trials.

use crate::board::moves::{closes_to, legal_moves};
use crate::board::{Board, Position};
use crate::solver::outcome::{TourOutcome, TourSolver};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Las Vegas solver drawing its choices from an owned random source
#[derive(Debug, Clone)]
pub struct LasVegasSolver<R> {
    rng: R,
}

impl<R: Rng> LasVegasSolver<R> {
    /// Create a solver around an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the solver and return its random source
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl LasVegasSolver<StdRng> {
    /// Create a solver whose walks are reproducible for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TourSolver for LasVegasSolver<R> {
    fn solve(&mut self, start: Position, size: usize) -> TourOutcome {
        solve_las_vegas_with(start, size, &mut self.rng)
    }
}

/// Attempt a closed tour with a freshly seeded thread-local random source
pub fn solve_las_vegas(start: Position, size: usize) -> TourOutcome {
    solve_las_vegas_with(start, size, &mut rand::rng())
}

/// Attempt a closed tour, drawing each move from `rng`
///
/// On failure the board keeps the partial walk up to the square where the knight ran
/// out of legal moves.
pub fn solve_las_vegas_with<R: Rng + ?Sized>(
    start: Position,
    size: usize,
    rng: &mut R,
) -> TourOutcome {
    let Ok(last_step) = u32::try_from(size.saturating_mul(size)) else {
        return TourOutcome::rejected(size);
    };
    if !start.in_bounds(size) {
        return TourOutcome::rejected(size);
    }

    let mut board = Board::new(size);
    let mut current = start;
    let mut step = 1;
    board.mark(current, step);

    while step < last_step {
        let Some(&next) = legal_moves(&board, current).choose(rng) else {
            break;
        };
        current = next;
        step += 1;
        board.mark(current, step);
    }

    TourOutcome {
        success: step == last_step && closes_to(current, start),
        board,
        steps: u64::from(step),
        aborted: false,
    }
}
