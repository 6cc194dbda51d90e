use crate::error::{Result, SearchError};
use crate::grid::Grid;
use crate::position::PositionRange;
use crate::scanner::locate_word;
use std::collections::{BTreeMap, HashSet};

/// Words found by a batch solve, keyed by the word.
///
/// Words that were not found are absent; there is never an empty entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    found: BTreeMap<String, PositionRange>,
}

impl Solution {
    pub fn found(&self, word: &str) -> Option<&PositionRange> {
        self.found.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.found.contains_key(word)
    }

    /// Words from `words` with no entry, in input order and without repeats.
    pub fn missing<'a, S: AsRef<str>>(&self, words: &'a [S]) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| !self.contains(word) && seen.insert(*word))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PositionRange)> {
        self.found.iter().map(|(word, range)| (word.as_str(), range))
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Batch solver over a borrowed grid.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'g> {
    grid: &'g Grid,
}

impl<'g> Solver<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Search every word independently and collect the ranges of the ones found.
    ///
    /// Fails only if the list contains an empty word; this is checked before
    /// any searching starts.
    pub fn solve<S: AsRef<str>>(&self, words: &[S]) -> Result<Solution> {
        if let Some(index) = words.iter().position(|word| word.as_ref().is_empty()) {
            return Err(SearchError::EmptyWord { index });
        }

        let mut solution = Solution::default();
        for word in words.iter().map(AsRef::as_ref) {
            if solution.contains(word) {
                continue;
            }
            let Some(placement) = locate_word(self.grid, word) else {
                log::debug!("{word}: not found");
                continue;
            };
            match PositionRange::from_positions(&placement.positions()) {
                Some(range) => {
                    log::debug!("{word}: found at {range}");
                    solution.found.insert(word.to_string(), range);
                }
                None => {
                    log::debug!(
                        "{word}: found but shorter than {} letters, no range reported",
                        PositionRange::MIN_POSITIONS
                    );
                }
            }
        }

        log::info!(
            "Solved {} of {} words on a {}-row grid",
            solution.len(),
            words.len(),
            self.grid.row_count()
        );
        Ok(solution)
    }
}

/// Convenience entry point: `Solver::new(grid).solve(words)`.
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Result<Solution> {
    Solver::new(grid).solve(words)
}
