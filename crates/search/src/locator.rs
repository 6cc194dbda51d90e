use crate::grid::Grid;
use crate::position::Position;

/// Every cell holding `ch`, top row first and left to right within a row.
pub fn locate_char(grid: &Grid, ch: char) -> Vec<Position> {
    grid.cells()
        .filter(|&(_, cell)| cell == ch)
        .map(|(pos, _)| pos)
        .collect()
}
