use crate::grid::Grid;
use crate::position::{Direction, Position};
use std::collections::HashMap;

/// In-bounds neighbours of `pos`, in [`Direction::ALL`] order.
pub fn neighbor_positions(grid: &Grid, pos: Position) -> Vec<Position> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| pos.step(direction))
        .filter(|&next| grid.get(next).is_some())
        .collect()
}

/// Neighbours of `pos` grouped by the character they hold.
///
/// Lists are never empty and keep [`Direction::ALL`] order.
pub fn neighbors_by_char(grid: &Grid, pos: Position) -> HashMap<char, Vec<Position>> {
    let mut grouped: HashMap<char, Vec<Position>> = HashMap::new();
    for next in neighbor_positions(grid, pos) {
        if let Some(ch) = grid.get(next) {
            grouped.entry(ch).or_default().push(next);
        }
    }
    grouped
}
