//! Exhaustive depth-first search for a closed tour
//!
//! Squares are tried in [`KNIGHT_MOVES`](crate::board::moves::KNIGHT_MOVES) order with
//! no move-ordering heuristic, and the search stops at the first closed tour it reaches.
//! The same start and size therefore always report the same tour. The price is that
//! worst-case running time grows exponentially with the board: several 6x6 starts need
//! hundreds of millions of nodes and 8x8 starts can run for hours. Callers that need a
//! latency bound impose one with [`BacktrackingSolver::with_node_budget`].
//!
//! The current path lives on a heap-allocated stack, so large boards cost memory rather
//! than call stack depth.

use crate::board::moves::{KNIGHT_MOVES, closes_to};
use crate::board::{Board, Position};
use crate::io::error::{Result, TourError, invalid_parameter};
use crate::solver::outcome::{TourOutcome, TourSolver};

/// Backtracking search, optionally bounded by a node budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackingSolver {
    node_budget: Option<u64>,
}

impl BacktrackingSolver {
    /// Unbounded search that only gives up once every branch is exhausted
    pub const fn new() -> Self {
        Self { node_budget: None }
    }

    /// Search that abandons the attempt after entering `budget` squares
    pub const fn with_node_budget(budget: u64) -> Self {
        Self {
            node_budget: Some(budget),
        }
    }

    /// Configured node budget, if any
    pub const fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }

    /// Search for a closed tour of a `size` x `size` board from `start`
    ///
    /// An off-board start returns a failed outcome with an all-zero board. A failed
    /// search also returns an all-zero board, since every visit is undone on the way out.
    ///
    /// # Errors
    ///
    /// Returns an error if the node budget runs out before the search settles, or if
    /// the board has more squares than a move number can count
    pub fn search(&self, start: Position, size: usize) -> Result<TourOutcome> {
        let last_step = u32::try_from(size.saturating_mul(size))
            .map_err(|e| invalid_parameter("size", &size, &e))?;

        if !start.in_bounds(size) {
            return Ok(TourOutcome::rejected(size));
        }

        let mut search = Search {
            board: Board::new(size),
            start,
            last_step,
            nodes: 0,
            node_budget: self.node_budget,
        };

        let success = match search.run() {
            Step::Found => true,
            Step::DeadEnd => false,
            Step::Aborted => {
                return Err(TourError::SearchBudgetExhausted {
                    budget: search.node_budget.unwrap_or(search.nodes),
                });
            }
        };

        Ok(TourOutcome {
            success,
            board: search.board,
            steps: search.nodes,
            aborted: false,
        })
    }

    /// Search like [`search`](Self::search), reporting any error as a failed tour
    ///
    /// A search abandoned at the node budget yields an all-zero board and an outcome
    /// marked [`aborted`](TourOutcome::aborted), so callers can tell it apart from an
    /// exhausted search.
    pub fn attempt(&self, start: Position, size: usize) -> TourOutcome {
        match self.search(start, size) {
            Ok(outcome) => outcome,
            Err(TourError::SearchBudgetExhausted { budget }) => {
                TourOutcome::budget_exhausted(size, budget)
            }
            Err(_) => TourOutcome::rejected(size),
        }
    }
}

impl TourSolver for BacktrackingSolver {
    fn solve(&mut self, start: Position, size: usize) -> TourOutcome {
        self.attempt(start, size)
    }
}

/// Search exhaustively for a closed tour from `start`
///
/// Returns once a tour is found or every branch has been ruled out. See the module
/// documentation for the running time this can imply.
pub fn solve_backtracking(start: Position, size: usize) -> TourOutcome {
    BacktrackingSolver::new().attempt(start, size)
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A closed tour was completed and is left on the board
    Found,
    /// Every continuation failed and every visit was undone
    DeadEnd,
    /// The node budget ran out and every visit was undone
    Aborted,
}

/// A square on the current path and the next offset to try from it
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    step: u32,
    next_move: usize,
}

/// Mutable state of one search, owned for its whole duration
///
/// The path is kept on an explicit stack of frames, so the search depth is bounded by
/// the board rather than by the thread's call stack.
struct Search {
    board: Board,
    start: Position,
    last_step: u32,
    nodes: u64,
    node_budget: Option<u64>,
}

impl Search {
    /// Explore every path from the start square in offset order
    ///
    /// On anything but [`Step::Found`] the board is left all-zero.
    fn run(&mut self) -> Step {
        let mut path: Vec<Frame> = Vec::new();
        let mut candidate = Some(self.start);

        loop {
            if let Some(position) = candidate.take() {
                let step = path.last().map_or(1, |frame| frame.step + 1);
                match self.enter(position, step) {
                    Some(Step::Found) => return Step::Found,
                    Some(Step::Aborted) => {
                        self.unwind(&path);
                        return Step::Aborted;
                    }
                    Some(Step::DeadEnd) => {}
                    None => path.push(Frame {
                        position,
                        step,
                        next_move: 0,
                    }),
                }
                continue;
            }

            let Some(frame) = path.last_mut() else {
                return Step::DeadEnd;
            };
            match KNIGHT_MOVES.get(frame.next_move) {
                Some(&(dx, dy)) => {
                    frame.next_move += 1;
                    candidate = frame
                        .position
                        .offset(dx, dy)
                        .filter(|&next| self.board.is_legal(next));
                }
                None => {
                    let position = frame.position;
                    path.pop();
                    self.board.clear(position);
                }
            }
        }
    }

    /// Place the knight on `position` as move `step`
    ///
    /// Returns the verdict when the square ends its branch on arrival, or `None` when
    /// the search must continue from it. A branch that ends in anything but
    /// [`Step::Found`] leaves `position` unvisited.
    fn enter(&mut self, position: Position, step: u32) -> Option<Step> {
        if self.node_budget.is_some_and(|budget| self.nodes >= budget) {
            return Some(Step::Aborted);
        }
        self.nodes += 1;
        self.board.mark(position, step);

        if step < self.last_step {
            return None;
        }
        if closes_to(position, self.start) {
            return Some(Step::Found);
        }
        self.board.clear(position);
        Some(Step::DeadEnd)
    }

    fn unwind(&mut self, path: &[Frame]) {
        for frame in path {
            self.board.clear(frame.position);
        }
    }
}
