use common::Cell;

use crate::board::Board;

/// Where the goal piece's top-left corner has to end up: resting on the
/// bottom edge, centred over the exit.
pub const TARGET: Cell = Cell::from_xy(1, 3);

/// The one goal predicate used by every search.
#[inline(always)]
pub fn is_goal(board: &Board) -> bool {
    board.goal_position() == TARGET
}

/// Manhattan distance from the goal piece's anchor to `TARGET`.
///
/// Admissible: each slide changes the goal anchor by at most one cell and
/// every other slide leaves it where it is, while all slides cost one.
#[inline(always)]
pub fn manhattan_distance(board: &Board) -> u32 {
    board.goal_position().manhattan_distance(TARGET)
}

/// Lower bound on the number of slides still needed to solve a board.
pub trait Heuristic: Clone + Send + Sync {
    fn estimate(&self, board: &Board) -> u32;
}

#[derive(Clone, Copy, Default, Debug)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    #[inline(always)]
    fn estimate(&self, board: &Board) -> u32 {
        manhattan_distance(board)
    }
}

/// Always zero. Turns best-first search into uniform-cost search.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    #[inline(always)]
    fn estimate(&self, _board: &Board) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_position;

    #[test]
    fn test_is_goal() {
        let solved = puzzle_position! {
            "...."
            "...."
            "...."
            ".11."
            ".11."
        };
        let unsolved = puzzle_position! {
            "...."
            "...."
            "...."
            "11.."
            "11.."
        };
        assert!(is_goal(&solved));
        assert!(!is_goal(&unsolved));
    }

    #[test]
    fn test_manhattan_distance() {
        let board = puzzle_position! {
            ".11."
            ".11."
            "...."
            "...."
            "...."
        };
        assert_eq!(3, manhattan_distance(&board));
        assert_eq!(3, ManhattanDistance.estimate(&board));
        assert_eq!(0, NullHeuristic.estimate(&board));

        let corner = puzzle_position! {
            "..11"
            "..11"
            "...."
            "...."
            "...."
        };
        assert_eq!(4, manhattan_distance(&corner));
    }

    #[test]
    fn test_distance_is_zero_only_at_the_target() {
        let solved = puzzle_position! {
            "2..2"
            "^<>^"
            "v22v"
            ".11."
            ".11."
        };
        assert_eq!(0, manhattan_distance(&solved));
        assert!(is_goal(&solved));
    }
}
