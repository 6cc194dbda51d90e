use crate::position::Position;

/// Immutable character grid, stored row by row.
///
/// Rows are expected to have equal length but this is not enforced; every
/// lookup goes through [`Grid::get`], which checks the row's own length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Parse one row per line. Whitespace inside a line is ignored, so `ABC`
    /// and `A B C` describe the same row. Blank lines before the first row and
    /// after the last one are skipped; blank lines in between stay as
    /// zero-length rows so row numbers match the text.
    pub fn from_lines(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
            return Self::default();
        };
        let last = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .unwrap_or(first);
        Self::from_rows(&lines[first..=last])
    }

    /// One grid row per item, in order. Whitespace inside a row is ignored and
    /// rows that end up empty are kept as zero-length rows.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|ch| !ch.is_whitespace())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Character at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.y)?.get(pos.x).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `y` (0 for rows past the bottom).
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub fn is_ragged(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|first| self.rows.iter().any(|row| row.len() != first.len()))
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &ch)| (Position::new(x, y), ch))
        })
    }
}
