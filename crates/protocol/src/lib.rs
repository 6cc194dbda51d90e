use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wordsearch_search::{Position, PositionRange, Solution};

pub mod puzzle;

pub use puzzle::{normalize_words, CaseMode, PuzzleFile, PuzzleFormat};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct FoundWord {
    pub word: String,
    pub start: Point,
    pub end: Point,
    /// `(x1,y1)...(x2,y2)`
    pub range: String,
}

impl FoundWord {
    pub fn new(word: &str, range: &PositionRange) -> Self {
        Self {
            word: word.to_string(),
            start: range.start.into(),
            end: range.end.into(),
            range: range.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SolveReport {
    pub schema_version: u32,
    /// Found words, in word-list order.
    pub found: Vec<FoundWord>,
    /// Words with no reported range, in word-list order.
    pub missing: Vec<String>,
    pub found_count: usize,
    pub total: usize,
    /// `found_count * 100 / total`, truncated.
    pub percent: usize,
}

impl SolveReport {
    /// Summarise `solution` against the word list it was solved for.
    ///
    /// Repeated words are counted once.
    pub fn build<S: AsRef<str>>(words: &[S], solution: &Solution) -> Self {
        let mut unique: Vec<&str> = Vec::with_capacity(words.len());
        for word in words.iter().map(AsRef::as_ref) {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        let found: Vec<FoundWord> = unique
            .iter()
            .filter_map(|word| solution.found(word).map(|range| FoundWord::new(word, range)))
            .collect();
        let missing = solution
            .missing(&unique)
            .into_iter()
            .map(str::to_string)
            .collect();

        let total = unique.len();
        let found_count = found.len();
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            found,
            missing,
            found_count,
            total,
            percent: percent(found_count, total),
        }
    }
}

fn percent(found: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    found * 100 / total
}

pub fn serialize_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).map_err(Into::into)
    } else {
        serde_json::to_string(value).map_err(Into::into)
    }
}
