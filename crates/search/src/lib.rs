//! # Word Search
//!
//! Locates target words inside a rectangular (or ragged) grid of characters,
//! scanning all eight compass directions.
//!
//! ## Architecture
//!
//! ```text
//! solve(grid, words)
//!     │
//!     └──> Solver (per word)
//!            ├─ locate_char        every cell holding the first letter
//!            ├─ neighbors_by_char  adjacent cells holding the second letter
//!            ├─ scan               walk the slope, compare with the word
//!            └─ PositionRange      extreme ends of the placement
//! ```
//!
//! Only the first placement found for a word is reported. Words that are not
//! on the grid are simply absent from the [`Solution`].

mod error;
mod grid;
mod locator;
mod neighbors;
mod position;
mod scanner;
mod solver;

pub use error::{Result, SearchError};
pub use grid::Grid;
pub use locator::locate_char;
pub use neighbors::{neighbor_positions, neighbors_by_char};
pub use position::{Direction, Position, PositionRange};
pub use scanner::{locate_word, scan, Placement};
pub use solver::{solve, Solution, Solver};
