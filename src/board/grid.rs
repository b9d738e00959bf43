//! Occupancy grid of move numbers with tour validation
//!
//! A cell holds 0 while unvisited and the 1-based move number at which the knight
//! landed on it otherwise. Solvers own their board exclusively and mutate it through
//! [`Board::mark`] and [`Board::clear`].

use crate::board::Position;
use crate::board::moves::{closes_to, is_knight_move};
use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Square board of move numbers indexed by `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u32>,
    size: usize,
}

impl Board {
    /// Create an all-zero `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
            size,
        }
    }

    /// Wrap an existing grid of move numbers
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square
    pub fn from_cells(cells: Array2<u32>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "cells",
                &format!("{rows}x{cols}"),
                &"board must be square",
            ));
        }
        Ok(Self { cells, size: rows })
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of squares, which is also the length of a complete tour
    pub const fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// Underlying grid of move numbers
    pub const fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    /// Consume the board and return its grid
    pub fn into_cells(self) -> Array2<u32> {
        self.cells
    }

    /// Move number at `position`, or `None` if it lies off the board
    pub fn get(&self, position: Position) -> Option<u32> {
        position
            .index(self.size)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Check whether `position` is on the board and not yet visited
    pub fn is_legal(&self, position: Position) -> bool {
        self.get(position) == Some(0)
    }

    /// Record that the knight reached `position` on move `step`
    ///
    /// Returns `false` and leaves the board untouched if `position` is off the board.
    pub fn mark(&mut self, position: Position, step: u32) -> bool {
        match position
            .index(self.size)
            .and_then(|index| self.cells.get_mut(index))
        {
            Some(cell) => {
                *cell = step;
                true
            }
            None => false,
        }
    }

    /// Undo a visit, returning `position` to the unvisited state
    pub fn clear(&mut self, position: Position) {
        self.mark(position, 0);
    }

    /// Number of visited squares
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&step| step != 0).count()
    }

    /// Check whether no square has been visited
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&step| step == 0)
    }

    /// Square holding move number `step`
    pub fn position_of(&self, step: u32) -> Option<Position> {
        if step == 0 {
            return None;
        }
        self.cells
            .indexed_iter()
            .find(|&(_, &value)| value == step)
            .and_then(|((x, y), _)| Position::from_index([x, y]))
    }

    /// Iterate over the rows of the board, one per `x` coordinate
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, u32>> {
        self.cells.rows().into_iter()
    }

    /// Check whether the visited squares form a knight's path from move 1
    ///
    /// Holds when the move numbers present are exactly `1..=k` for some `k` and every
    /// pair of consecutive moves is a knight move apart. An empty board is the empty path.
    pub fn is_knight_path(&self) -> bool {
        self.ordered_path().is_some_and(|path| is_connected(&path))
    }

    /// Check whether the board holds a complete closed knight's tour
    ///
    /// Requires every square to carry a distinct move number in `1..=size²`,
    /// consecutive moves to be knight moves, and the last square to reach the first.
    pub fn is_closed_tour(&self) -> bool {
        let Some(path) = self.ordered_path() else {
            return false;
        };
        let closed = matches!(
            (path.first(), path.last()),
            (Some(&first), Some(&last)) if closes_to(last, first)
        );
        closed && path.len() == self.cell_count() && is_connected(&path)
    }

    /// Squares ordered by move number, if the values form a gap-free prefix of `1..`
    fn ordered_path(&self) -> Option<Vec<Position>> {
        let mut slots: Vec<Option<Position>> = vec![None; self.cell_count()];
        let mut visited = 0;

        for ((x, y), &step) in self.cells.indexed_iter() {
            if step == 0 {
                continue;
            }
            let slot = slots.get_mut(usize::try_from(step).ok()?.checked_sub(1)?)?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(Position::from_index([x, y])?);
            visited += 1;
        }

        slots.into_iter().take(visited).collect()
    }
}

fn is_connected(path: &[Position]) -> bool {
    path.windows(2)
        .all(|pair| matches!(pair, [from, to] if is_knight_move(*from, *to)))
}

/// Renders move numbers right-aligned, one board row per line
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_count().to_string().len();
        for row in self.rows() {
            let line = row
                .iter()
                .map(|step| format!("{step:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
