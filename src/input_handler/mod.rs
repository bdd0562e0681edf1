//! Reading puzzles from the five-row text notation and writing solutions
//! back out in the same notation.

pub mod puzzle_file;
pub mod puzzle_serialize;

pub use puzzle_file::{parse_puzzle, read_puzzle_file, PuzzleFileError, PuzzleParseError};
pub use puzzle_serialize::{format_solution, write_solution, NO_SOLUTION};
