use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid())
    }
}

/// Builds a board from five row literals in the puzzle file notation.
/// Panics if the rows do not describe a valid board.
#[macro_export]
macro_rules! puzzle_position {
    ($($row:literal)*) => {{
        let rows: Vec<&str> = vec![$($row),*];
        assert_eq!(rows.len(), 5, "Invalid number of rows. Expected 5, got {}", rows.len());
        $crate::input_handler::parse_puzzle(&rows.join("\n"))
            .unwrap_or_else(|error| panic!("Invalid puzzle position: {}", error))
    }};
}
