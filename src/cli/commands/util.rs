//! Shared utilities for CLI commands.

use std::path::Path;
use std::process;

use huarong::board::Board;
use huarong::input_handler::read_puzzle_file;
use huarong::search::SearchLimits;

/// Reads the puzzle file, or reports the problem and exits.
pub(crate) fn load_board_or_exit(path: &Path) -> Board {
    match read_puzzle_file(path) {
        Ok(board) => board,
        Err(error) => {
            eprintln!("Failed to load puzzle: {}", error);
            process::exit(1);
        }
    }
}

pub(crate) fn create_limits(max_expansions: Option<usize>) -> SearchLimits {
    SearchLimits { max_expansions }
}
