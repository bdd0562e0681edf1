//! Search tests.
//!
//! Test coverage:
//! - Trivial, already-solved and blocked boards for every strategy
//! - Known minimum for the classic layout
//! - Best-first optimality against breadth-first
//! - Heuristic admissibility over a whole reachable component
//! - Depth-first path validity
//! - Expansion limits and duplicate detection

use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::evaluate::{is_goal, Heuristic, ManhattanDistance, NullHeuristic};
use crate::move_generator::MoveGenerator;
use crate::puzzle_position;
use crate::slide::direction::Direction;
use crate::slide::Slide;

use super::*;

fn run(board: &Board, strategy: Strategy) -> (SearchOutcome, SearchStats) {
    let mut context = SearchContext::default();
    let outcome = search(
        &mut context,
        board,
        strategy,
        &MoveGenerator::default(),
        &ManhattanDistance,
    )
    .unwrap();
    (outcome, context.stats())
}

fn solution_length(board: &Board, strategy: Strategy) -> Option<u32> {
    run(board, strategy).0.terminal().map(|state| state.g())
}

/// Walks the parent chain of `terminal` and checks every link is one legal
/// slide. Returns the boards from root to terminal.
fn assert_valid_path(terminal: &Rc<SearchState>) -> Vec<Board> {
    let mut boards = vec![terminal.board().clone()];
    let mut current = terminal;
    while let Some(parent) = current.parent() {
        let slide = current.slide().unwrap();
        assert_eq!(Ok(current.board().clone()), slide.apply(parent.board()));
        assert_eq!(Some(slide), Slide::between(parent.board(), current.board()));
        assert_eq!(parent.g() + 1, current.g());
        boards.push(parent.board().clone());
        current = parent;
    }
    assert_eq!(0, current.g());
    boards.reverse();
    boards
}

/// Exact distance to the nearest goal configuration for every board in the
/// component of `board`.
fn exact_distances(board: &Board) -> FxHashMap<u64, (Board, u32)> {
    let generator = MoveGenerator::default();
    let mut component: FxHashMap<u64, Board> = FxHashMap::default();
    let mut queue = VecDeque::new();
    component.insert(board.position_id(), board.clone());
    queue.push_back(board.clone());
    while let Some(current) = queue.pop_front() {
        for (_, next) in generator.successors(&current) {
            if !component.contains_key(&next.position_id()) {
                component.insert(next.position_id(), next.clone());
                queue.push_back(next);
            }
        }
    }

    // slides are reversible, so distance-to-goal is a multi-source BFS
    let mut distances: FxHashMap<u64, (Board, u32)> = FxHashMap::default();
    let mut queue = VecDeque::new();
    for (id, candidate) in component.iter() {
        if is_goal(candidate) {
            distances.insert(*id, (candidate.clone(), 0));
            queue.push_back((candidate.clone(), 0));
        }
    }
    while let Some((current, distance)) = queue.pop_front() {
        for (_, next) in generator.successors(&current) {
            if !distances.contains_key(&next.position_id()) {
                distances.insert(next.position_id(), (next.clone(), distance + 1));
                queue.push_back((next, distance + 1));
            }
        }
    }
    distances
}

#[test]
fn test_lone_goal_piece_slides_down_three_times() {
    let board = puzzle_position! {
        ".11."
        ".11."
        "...."
        "...."
        "...."
    };
    let (outcome, _) = run(&board, Strategy::BestFirst);
    let terminal = outcome.terminal().unwrap();
    assert_eq!(3, terminal.g());
    assert!(is_goal(terminal.board()));

    let boards = assert_valid_path(terminal);
    assert_eq!(4, boards.len());
    let mut current = terminal;
    while let Some(parent) = current.parent() {
        assert_eq!(Direction::Down, current.slide().unwrap().direction());
        current = parent;
    }
}

#[test]
fn test_solved_board_returns_root() {
    let board = puzzle_position! {
        "2..2"
        "^<>^"
        "v22v"
        ".11."
        ".11."
    };
    for &strategy in ALL_STRATEGIES.iter() {
        let (outcome, stats) = run(&board, strategy);
        let terminal = outcome.terminal().unwrap();
        assert!(terminal.is_root(), "{}", strategy);
        assert_eq!(0, stats.expanded, "{}", strategy);
    }
}

#[test]
fn test_board_without_slides_has_no_solution() {
    let board = puzzle_position! {
        "2112"
        "2112"
        "2222"
        "2222"
        "2222"
    };
    for &strategy in ALL_STRATEGIES.iter() {
        let (outcome, stats) = run(&board, strategy);
        assert!(!outcome.is_solved(), "{}", strategy);
        assert_eq!(1, stats.expanded, "{}", strategy);
    }
}

#[test]
fn test_exhausted_search_expands_each_configuration_once() {
    // the goal is walled in by vertical pieces that can never clear
    let board = puzzle_position! {
        "^11^"
        "v11v"
        "^^^^"
        "vvvv"
        "2..2"
    };
    let reachable = MoveGenerator::default().count_reachable(&board);
    assert_eq!(38, reachable);
    for &strategy in ALL_STRATEGIES.iter() {
        let (outcome, stats) = run(&board, strategy);
        assert!(!outcome.is_solved(), "{}", strategy);
        assert_eq!(reachable, stats.expanded, "{}", strategy);
    }
}

#[test]
fn test_classic_layout_minimum() {
    let board = puzzle_position! {
        "^11^"
        "v11v"
        "^<>^"
        "v22v"
        "2..2"
    };
    let (outcome, stats) = run(&board, Strategy::BestFirst);
    let terminal = outcome.terminal().unwrap();
    assert_eq!(116, terminal.g());
    assert_eq!(117, assert_valid_path(terminal).len());
    assert!(stats.expanded <= 25_955);
}

#[test]
fn test_best_first_matches_breadth_first() {
    let boards = [
        puzzle_position! {
            ".11."
            ".11."
            "<>.."
            "2..."
            "...."
        },
        puzzle_position! {
            "11^."
            "11v."
            "..2."
            "<>.."
            "...."
        },
        puzzle_position! {
            "11.."
            "11.."
            "<>.."
            "..2."
            "..2."
        },
        puzzle_position! {
            "2.2."
            ".11."
            ".11."
            "^..^"
            "v..v"
        },
    ];
    let expected = [5, 8, 8, 2];
    for (board, &expected) in boards.iter().zip(expected.iter()) {
        assert_eq!(Some(expected), solution_length(board, Strategy::BreadthFirst));
        assert_eq!(Some(expected), solution_length(board, Strategy::BestFirst));
    }
}

#[test]
fn test_null_heuristic_is_still_optimal() {
    let board = puzzle_position! {
        "11^."
        "11v."
        "..2."
        "<>.."
        "...."
    };
    let mut context = SearchContext::default();
    let outcome = search(
        &mut context,
        &board,
        Strategy::BestFirst,
        &MoveGenerator::default(),
        &NullHeuristic,
    )
    .unwrap();
    assert_eq!(8, outcome.terminal().unwrap().g());
}

#[test]
fn test_manhattan_distance_is_admissible() {
    let board = puzzle_position! {
        ".11."
        ".11."
        "<>.."
        "2..."
        "...."
    };
    let distances = exact_distances(&board);
    assert_eq!(1736, distances.len());
    for (candidate, distance) in distances.values() {
        let estimate = ManhattanDistance.estimate(candidate);
        assert!(
            estimate <= *distance,
            "estimate {} exceeds distance {} for\n{}",
            estimate,
            distance,
            candidate
        );
    }
}

#[test]
fn test_depth_first_paths_are_valid() {
    let boards = [
        puzzle_position! {
            "^11^"
            "v11v"
            "^<>^"
            "v22v"
            "2..2"
        },
        puzzle_position! {
            "11<>"
            "11<>"
            "<><>"
            "<><>"
            "2.2."
        },
        puzzle_position! {
            ".11."
            ".11."
            "<>.."
            "2..."
            "...."
        },
    ];
    for board in boards.iter() {
        let (outcome, _) = run(board, Strategy::DepthFirst);
        let terminal = outcome.terminal().unwrap();
        assert!(is_goal(terminal.board()));
        let path = assert_valid_path(terminal);
        assert_eq!(board, &path[0]);

        let ids: FxHashSet<u64> = path.iter().map(|b| b.position_id()).collect();
        assert_eq!(path.len(), ids.len(), "path revisits a configuration");
    }
}

#[test]
fn test_expansion_limit_stops_search() {
    let board = puzzle_position! {
        "^11^"
        "v11v"
        "^<>^"
        "v22v"
        "2..2"
    };
    let mut context = SearchContext::new(SearchLimits::with_max_expansions(50));
    let result = search(
        &mut context,
        &board,
        Strategy::BestFirst,
        &MoveGenerator::default(),
        &ManhattanDistance,
    );
    assert_eq!(
        SearchError::ExpansionLimitReached { expanded: 50 },
        result.unwrap_err()
    );
    assert_eq!(50, context.expanded_count());
    assert!(context.last_search_duration().is_some());
}

#[test]
fn test_best_first_is_deterministic() {
    let board = puzzle_position! {
        "11<>"
        "11<>"
        "<><>"
        "<><>"
        "2.2."
    };
    let first = run(&board, Strategy::BestFirst);
    let second = run(&board, Strategy::BestFirst);
    assert_eq!(first.1, second.1);
    let first_path = assert_valid_path(first.0.terminal().unwrap());
    let second_path = assert_valid_path(second.0.terminal().unwrap());
    assert_eq!(first_path, second_path);
    assert_eq!(31, first_path.len());
}

#[test]
fn test_strategy_from_str() {
    assert_eq!(Ok(Strategy::DepthFirst), "dfs".parse::<Strategy>());
    assert_eq!(Ok(Strategy::BestFirst), "astar".parse::<Strategy>());
    assert_eq!(Ok(Strategy::BestFirst), "best-first".parse::<Strategy>());
    assert_eq!(Ok(Strategy::BreadthFirst), "bfs".parse::<Strategy>());
    assert!("ida".parse::<Strategy>().is_err());
    for &strategy in ALL_STRATEGIES.iter() {
        assert_eq!(Ok(strategy), strategy.to_string().parse::<Strategy>());
    }
}
