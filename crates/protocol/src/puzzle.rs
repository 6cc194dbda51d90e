//! Puzzle files: a grid plus the words to look for.
//!
//! ```toml
//! case = "upper"
//! rows = [
//!     "RUST",
//!     "XAXX",
//! ]
//! words = ["rust"]
//! ```

use anyhow::{anyhow, Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordsearch_search::Grid;

/// How words are normalised before searching. The grid itself is never changed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
    Preserve,
}

impl CaseMode {
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseMode::Upper => word.to_uppercase(),
            CaseMode::Lower => word.to_lowercase(),
            CaseMode::Preserve => word.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleFormat {
    Toml,
    Json,
}

impl PuzzleFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => PuzzleFormat::Toml,
            _ => PuzzleFormat::Json,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PuzzleFile {
    /// Grid rows, top to bottom. Whitespace inside a row is ignored.
    pub rows: Vec<String>,
    /// Words to look for.
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub case: CaseMode,
}

impl PuzzleFile {
    pub fn parse(text: &str, format: PuzzleFormat) -> Result<Self> {
        let puzzle: PuzzleFile = match format {
            PuzzleFormat::Toml => toml::from_str(text).context("Invalid TOML puzzle")?,
            PuzzleFormat::Json => serde_json::from_str(text).context("Invalid JSON puzzle")?,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read puzzle {}", path.display()))?;
        Self::parse(&text, PuzzleFormat::from_path(path))
            .with_context(|| format!("Failed to load puzzle {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.rows.iter().all(|row| row.trim().is_empty()) {
            return Err(anyhow!("puzzle has no grid rows"));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        let grid = Grid::from_rows(&self.rows);
        if grid.is_ragged() {
            log::warn!("Puzzle grid has rows of different lengths");
        }
        grid
    }

    /// The word list after trimming and applying [`Self::case`].
    pub fn normalized_words(&self) -> Vec<String> {
        normalize_words(self.words.as_slice(), self.case)
    }
}

/// Trim each word and apply `case`. Entries that end up empty are dropped.
pub fn normalize_words<S: AsRef<str>>(words: &[S], case: CaseMode) -> Vec<String> {
    words
        .iter()
        .map(|word| word.as_ref().trim())
        .filter(|word| !word.is_empty())
        .map(|word| case.apply(word))
        .collect()
}
