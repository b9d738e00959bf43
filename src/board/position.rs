//! Signed board coordinates with textual parsing

use crate::io::error::{TourError, invalid_position};
use std::fmt;
use std::str::FromStr;

/// A square on the board, addressed as `(x, y)`
///
/// Coordinates are signed so that positions produced by adding a knight offset to an
/// edge square, or supplied by a caller, can lie off the board. Whether a position is
/// on the board depends on the board size, see [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Row coordinate
    pub x: i32,
    /// Column coordinate
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position displaced by `(dx, dy)`, or `None` if a coordinate leaves the `i32` range
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Check whether the position lies on a `size` x `size` board
    pub fn in_bounds(self, size: usize) -> bool {
        self.index(size).is_some()
    }

    /// Grid indices for the position on a `size` x `size` board, if it lies on it
    pub fn index(self, size: usize) -> Option<[usize; 2]> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < size && y < size).then_some([x, y])
    }

    /// Position for grid indices
    ///
    /// Returns `None` when an index does not fit in the signed coordinate range.
    pub fn from_index([x, y]: [usize; 2]) -> Option<Self> {
        Some(Self {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(y).ok()?,
        })
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses the `x,y` form, tolerating whitespace around either coordinate
impl FromStr for Position {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_position(s, &"expected the form 'x,y'"))?;

        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<i32>()
                .map_err(|e| invalid_position(s, &format!("'{part}' is not an integer: {e}")))
        };

        Ok(Self::new(parse(x)?, parse(y)?))
    }
}
