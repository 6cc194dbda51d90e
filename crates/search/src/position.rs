use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinate: `x` is the column, `y` is the row.
///
/// Ordering compares `x` first and breaks ties on `y`, which is the rule used
/// to pick the two ends of a [`PositionRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move one cell along `direction`. Returns `None` when the step would
    /// leave the non-negative quadrant; upper bounds are the grid's business.
    pub fn step(self, direction: Direction) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(direction.dx)?,
            y: self.y.checked_add_signed(direction.dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Unit step between two adjacent cells (the scan slope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

impl Direction {
    /// The eight neighbour offsets, in the order neighbours are explored.
    pub const ALL: [Direction; 8] = [
        Direction { dx: -1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: 1 },
    ];

    /// Slope from `from` to `to`, if the two cells are distinct neighbours.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        Self::ALL
            .into_iter()
            .find(|direction| direction.dx == dx && direction.dy == dy)
    }

    /// Compass name, mostly for log output.
    pub const fn name(self) -> &'static str {
        match (self.dx, self.dy) {
            (0, -1) => "north",
            (1, -1) => "north-east",
            (1, 0) => "east",
            (1, 1) => "south-east",
            (0, 1) => "south",
            (-1, 1) => "south-west",
            (-1, 0) => "west",
            (-1, -1) => "north-west",
            _ => "none",
        }
    }
}

/// The two extreme ends of a found word, `start <= end` by [`Position`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    pub start: Position,
    pub end: Position,
}

impl PositionRange {
    /// Minimum number of cells a placement needs before it gets a range.
    pub const MIN_POSITIONS: usize = 3;

    /// Build a range from a word's cells. Placements shorter than
    /// [`Self::MIN_POSITIONS`] produce no range.
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        if positions.len() < Self::MIN_POSITIONS {
            return None;
        }
        let mut sorted = positions.to_vec();
        sorted.sort();
        Some(Self {
            start: *sorted.first()?,
            end: *sorted.last()?,
        })
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.start, self.end)
    }
}
