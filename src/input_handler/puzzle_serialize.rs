//! Solution output: every board of the path as a five-row grid, each grid
//! followed by a blank line.

use std::io::{self, Write};

use crate::board::Board;
use crate::solution::Solution;

pub const NO_SOLUTION: &str = "No solution";

/// Writes the solution path. When there is none, writes `initial` followed
/// by a `No solution` line instead.
pub fn write_solution<W: Write>(
    out: &mut W,
    initial: &Board,
    solution: Option<&Solution>,
) -> io::Result<()> {
    match solution {
        Some(solution) => {
            for board in solution.boards() {
                write!(out, "{}", board)?;
                writeln!(out)?;
            }
        }
        None => {
            write!(out, "{}", initial)?;
            writeln!(out)?;
            writeln!(out, "{}", NO_SOLUTION)?;
        }
    }
    Ok(())
}

pub fn format_solution(initial: &Board, solution: Option<&Solution>) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_solution(&mut buffer, initial, solution);
    String::from_utf8_lossy(&buffer).into_owned()
}
