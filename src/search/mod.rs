//! Search over board configurations.
//!
//! Every strategy starts from a root `SearchState`, tests states with
//! `evaluate::is_goal`, detects duplicates by board identity, and returns
//! the terminal state whose parent chain spells out the path.

pub mod best_first;
pub mod breadth_first;
pub mod context;
pub mod depth_first;
pub mod state;

#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use crate::board::Board;
use crate::evaluate::Heuristic;
use crate::move_generator::MoveGenerator;

pub use best_first::best_first_search;
pub use breadth_first::breadth_first_search;
pub use context::{SearchContext, SearchLimits, SearchStats};
pub use depth_first::depth_first_search;
pub use state::SearchState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("expansion limit reached after expanding {expanded} states")]
    ExpansionLimitReached { expanded: usize },
}

/// How a search run ended.
#[derive(Debug)]
pub enum SearchOutcome {
    Solved(Rc<SearchState>),
    NoSolution,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// The goal state, when one was found.
    pub fn terminal(&self) -> Option<&Rc<SearchState>> {
        match self {
            SearchOutcome::Solved(state) => Some(state),
            SearchOutcome::NoSolution => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BestFirst,
    BreadthFirst,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::DepthFirst,
    Strategy::BestFirst,
    Strategy::BreadthFirst,
];

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BestFirst => "astar",
            Strategy::BreadthFirst => "bfs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "astar" | "a-star" | "best-first" => Ok(Strategy::BestFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            _ => Err("invalid search algorithm; options are: dfs, astar, bfs"),
        }
    }
}

/// Builds the root state for `board` and runs `strategy` from it.
pub fn search<H: Heuristic>(
    context: &mut SearchContext,
    board: &Board,
    strategy: Strategy,
    move_generator: &MoveGenerator,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    let root = SearchState::root(board.clone(), heuristic.estimate(board));
    match strategy {
        Strategy::DepthFirst => depth_first_search(context, root, move_generator, heuristic),
        Strategy::BestFirst => best_first_search(context, root, move_generator, heuristic),
        Strategy::BreadthFirst => breadth_first_search(context, root, move_generator, heuristic),
    }
}
