use crate::grid::Grid;
use crate::locator::locate_char;
use crate::neighbors::neighbors_by_char;
use crate::position::{Direction, Position};

/// One concrete placement of a word on the grid, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<(char, Position)>,
}

impl Placement {
    pub fn positions(&self) -> Vec<Position> {
        self.cells.iter().map(|&(_, pos)| pos).collect()
    }

    /// Letters read back from the grid along the placement.
    pub fn text(&self) -> String {
        self.cells.iter().map(|&(ch, _)| ch).collect()
    }

    /// Scan slope; `None` for single-cell placements.
    pub fn direction(&self) -> Option<Direction> {
        match self.cells.as_slice() {
            [(_, first), (_, second), ..] => Direction::between(*first, *second),
            _ => None,
        }
    }
}

/// Try to read `word` starting at `anchor` and continuing through the
/// adjacent cell `second`.
///
/// Returns `None` if the cells are not neighbours, if the walk leaves the grid
/// before the word is complete, or if the letters differ (case-sensitive).
pub fn scan(grid: &Grid, word: &str, anchor: Position, second: Position) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    scan_letters(grid, &letters, anchor, second)
}

fn scan_letters(
    grid: &Grid,
    letters: &[char],
    anchor: Position,
    second: Position,
) -> Option<Placement> {
    if letters.len() < 2 {
        return None;
    }
    let slope = Direction::between(anchor, second)?;

    let mut cells = Vec::with_capacity(letters.len());
    let mut current = anchor;
    for (step, &expected) in letters.iter().enumerate() {
        if step > 0 {
            current = current.step(slope)?;
        }
        let found = grid.get(current)?;
        if found != expected {
            return None;
        }
        cells.push((found, current));
    }

    Some(Placement { cells })
}

/// Find the first placement of `word` on the grid.
///
/// Anchors are tried in row-major order and, for each anchor, every adjacent
/// occurrence of the second letter is tried before moving on. The search stops
/// at the first full match.
pub fn locate_word(grid: &Grid, word: &str) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    let (&first, rest) = letters.split_first()?;

    let anchors = locate_char(grid, first);
    let Some(&second) = rest.first() else {
        return anchors.first().map(|&pos| Placement {
            cells: vec![(first, pos)],
        });
    };

    for anchor in anchors {
        let neighbors = neighbors_by_char(grid, anchor);
        let Some(candidates) = neighbors.get(&second) else {
            log::trace!("{word}: anchor {anchor} has no adjacent '{second}'");
            continue;
        };
        for &next in candidates {
            if let Some(placement) = scan_letters(grid, &letters, anchor, next) {
                return Some(placement);
            }
            log::trace!(
                "{word}: no match from {anchor} heading {}",
                Direction::between(anchor, next).map_or("none", Direction::name)
            );
        }
    }

    None
}
