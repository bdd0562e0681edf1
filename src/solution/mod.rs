//! Turning a terminal search state into the ordered list of boards from the
//! initial configuration to the goal.

use thiserror::Error;

use crate::board::Board;
use crate::search::SearchState;
use crate::slide::Slide;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    #[error("no path: the parent chain does not lead back to a root state")]
    NoPath,
}

/// A solved puzzle: every board from the initial configuration to the goal,
/// and the slide between each consecutive pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    boards: Vec<Board>,
    slides: Vec<Slide>,
}

impl Solution {
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn move_count(&self) -> usize {
        self.slides.len()
    }

    pub fn initial(&self) -> &Board {
        &self.boards[0]
    }

    pub fn last(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }
}

/// Follows parent links from `terminal` back to the root and returns the
/// path in forward order.
///
/// Every link must lower the path cost by exactly one and the chain must end
/// at a state with cost zero, otherwise `SolutionError::NoPath`.
pub fn extract_path(terminal: &SearchState) -> Result<Solution, SolutionError> {
    let mut boards = Vec::with_capacity(terminal.g() as usize + 1);
    let mut slides = Vec::with_capacity(terminal.g() as usize);
    let mut current = terminal;

    loop {
        boards.push(current.board().clone());
        match (current.parent(), current.slide()) {
            (None, None) if current.g() == 0 => break,
            (Some(parent), Some(slide)) if parent.g() + 1 == current.g() => {
                slides.push(slide);
                current = parent;
            }
            _ => return Err(SolutionError::NoPath),
        }
    }

    boards.reverse();
    slides.reverse();
    Ok(Solution { boards, slides })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::{is_goal, ManhattanDistance};
    use crate::move_generator::MoveGenerator;
    use crate::puzzle_position;
    use crate::search::{search, SearchContext, Strategy};

    #[test]
    fn test_root_only_path() {
        let board = puzzle_position! {
            "...."
            "...."
            "...."
            ".11."
            ".11."
        };
        let root = SearchState::root(board.clone(), 0);
        let solution = extract_path(&root).unwrap();
        assert_eq!(0, solution.move_count());
        assert_eq!(&board, solution.initial());
        assert_eq!(&board, solution.last());
    }

    #[test]
    fn test_path_runs_from_initial_to_goal() {
        let board = puzzle_position! {
            "11.."
            "11.."
            "<>.."
            "..2."
            "..2."
        };
        let outcome = search(
            &mut SearchContext::default(),
            &board,
            Strategy::BestFirst,
            &MoveGenerator::default(),
            &ManhattanDistance,
        )
        .unwrap();
        let solution = extract_path(outcome.terminal().unwrap()).unwrap();

        assert_eq!(8, solution.move_count());
        assert_eq!(9, solution.boards().len());
        assert_eq!(&board, solution.initial());
        assert!(is_goal(solution.last()));
        for (pair, slide) in solution.boards().windows(2).zip(solution.slides()) {
            assert_eq!(Ok(pair[1].clone()), slide.apply(&pair[0]));
        }
    }

    #[test]
    fn test_broken_chain_is_rejected() {
        let board = puzzle_position! {
            ".11."
            ".11."
            "...."
            "...."
            "...."
        };
        let (slide, next) = MoveGenerator::default().successors(&board).remove(0);

        // root with a nonzero cost
        let bad_root = SearchState::from_parts(board.clone(), 4, 0, None, None);
        assert_eq!(Err(SolutionError::NoPath), extract_path(&bad_root));

        // link that skips a cost
        let root = SearchState::root(board.clone(), 0);
        let skipping = SearchState::from_parts(next.clone(), 2, 0, Some(slide), Some(root));
        assert_eq!(Err(SolutionError::NoPath), extract_path(&skipping));

        // parent without a slide
        let root = SearchState::root(board, 0);
        let unlabelled = SearchState::from_parts(next, 1, 0, None, Some(root));
        assert_eq!(Err(SolutionError::NoPath), extract_path(&unlabelled));
    }
}
