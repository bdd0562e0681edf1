use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::board::Board;
use crate::evaluate::ManhattanDistance;
use crate::move_generator::MoveGenerator;
use crate::search::{search, SearchContext, SearchError, SearchLimits, SearchStats, Strategy};
use crate::solution::{extract_path, Solution, SolutionError};

/// Which search to run and how far it may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub limits: SearchLimits,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BestFirst,
            limits: SearchLimits::unlimited(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
    #[error("Solution extraction failed: {0}")]
    Solution(#[from] SolutionError),
}

/// Everything a single solve produced. `solution` is `None` when the search
/// exhausted every reachable configuration without reaching the goal.
#[derive(Clone, Debug)]
pub struct SolveReport {
    pub strategy: Strategy,
    pub solution: Option<Solution>,
    pub stats: SearchStats,
    pub duration: Option<Duration>,
}

impl SolveReport {
    pub fn move_count(&self) -> Option<usize> {
        self.solution.as_ref().map(Solution::move_count)
    }
}

/// Results of running depth-first and best-first search side by side.
#[derive(Debug)]
pub struct RaceReport {
    pub depth_first: Result<SolveReport, SolverError>,
    pub best_first: Result<SolveReport, SolverError>,
}

/// Runs the configured search on a board with the Manhattan distance
/// heuristic and extracts the path.
#[derive(Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    move_generator: MoveGenerator,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            move_generator: MoveGenerator::new(),
        }
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn solve(&self, board: &Board) -> Result<SolveReport, SolverError> {
        let mut context = SearchContext::new(self.config.limits);
        let outcome = search(
            &mut context,
            board,
            self.config.strategy,
            &self.move_generator,
            &ManhattanDistance,
        )?;

        let solution = match outcome.terminal() {
            Some(terminal) => Some(extract_path(terminal)?),
            None => {
                warn!("{} search found no solution", self.config.strategy);
                None
            }
        };

        Ok(SolveReport {
            strategy: self.config.strategy,
            solution,
            stats: context.stats(),
            duration: context.last_search_duration(),
        })
    }

    /// Runs depth-first and best-first search on two threads. Each thread
    /// owns its search tree; only the extracted solutions cross back.
    pub fn race(&self, board: &Board) -> RaceReport {
        let depth_first = Solver::with_config(SolverConfig {
            strategy: Strategy::DepthFirst,
            ..self.config
        });
        let best_first = Solver::with_config(SolverConfig {
            strategy: Strategy::BestFirst,
            ..self.config
        });

        let (depth_first, best_first) =
            rayon::join(|| depth_first.solve(board), || best_first.solve(board));

        if let (Ok(dfs), Ok(astar)) = (&depth_first, &best_first) {
            info!(
                "race finished: dfs {:?} moves in {:?}, astar {:?} moves in {:?}",
                dfs.move_count(),
                dfs.duration,
                astar.move_count(),
                astar.duration
            );
        }

        RaceReport {
            depth_first,
            best_first,
        }
    }
}
