//! Tour results and the solver abstraction used by the trial harness

use crate::board::{Board, Position};

/// Result of a single solve invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourOutcome {
    /// Whether the board holds a closed tour
    pub success: bool,
    /// Final board, returned regardless of success
    ///
    /// Backtracking failures leave it all-zero; Las Vegas failures leave the partial walk.
    pub board: Board,
    /// Number of times a square was marked during the solve
    ///
    /// Counts search nodes for backtracking and walk length for Las Vegas.
    pub steps: u64,
    /// Whether the solver gave up at a node budget before reaching a verdict
    ///
    /// An aborted outcome is never a success, but it does not show that no tour exists.
    pub aborted: bool,
}

impl TourOutcome {
    /// Failed outcome with an untouched board, used for off-board starts
    pub fn rejected(size: usize) -> Self {
        Self {
            success: false,
            board: Board::new(size),
            steps: 0,
            aborted: false,
        }
    }

    /// Undecided outcome for a search abandoned after `steps` nodes
    pub fn budget_exhausted(size: usize, steps: u64) -> Self {
        Self {
            success: false,
            board: Board::new(size),
            steps,
            aborted: true,
        }
    }

    /// Split into the `(success, board)` pair
    pub fn into_parts(self) -> (bool, Board) {
        (self.success, self.board)
    }
}

/// Anything that can attempt a closed tour from a start square
///
/// Implemented by both solvers and by any closure with the same shape, so the trial
/// harness can drive either.
pub trait TourSolver {
    /// Attempt a closed tour of a `size` x `size` board starting at `start`
    fn solve(&mut self, start: Position, size: usize) -> TourOutcome;
}

impl<F> TourSolver for F
where
    F: FnMut(Position, usize) -> TourOutcome,
{
    fn solve(&mut self, start: Position, size: usize) -> TourOutcome {
        self(start, size)
    }
}
