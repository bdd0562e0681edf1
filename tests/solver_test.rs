use huarong::evaluate::is_goal;
use huarong::move_generator::MoveGenerator;
use huarong::prelude::*;
use huarong::scramble::{scramble, SOLVED_LAYOUT};
use huarong::search::ALL_STRATEGIES;

fn solver(strategy: Strategy) -> Solver {
    Solver::with_config(SolverConfig {
        strategy,
        limits: SearchLimits::unlimited(),
    })
}

fn assert_valid_solution(board: &Board, solution: &Solution) {
    assert_eq!(board, solution.initial());
    assert!(is_goal(solution.last()));
    assert_eq!(solution.boards().len(), solution.move_count() + 1);
    for (pair, slide) in solution.boards().windows(2).zip(solution.slides()) {
        assert_eq!(Ok(pair[1].clone()), slide.apply(&pair[0]));
    }
}

#[test]
fn test_every_strategy_solves_scrambled_puzzles() {
    let solved: Board = SOLVED_LAYOUT.parse().unwrap();
    for seed in 0..5 {
        let board = scramble(&solved, 30, seed);
        let optimal = solver(Strategy::BreadthFirst)
            .solve(&board)
            .unwrap()
            .move_count()
            .unwrap();
        assert!(optimal <= 30);

        for &strategy in ALL_STRATEGIES.iter() {
            let report = solver(strategy).solve(&board).unwrap();
            let solution = report.solution.unwrap();
            assert_valid_solution(&board, &solution);
            if strategy != Strategy::DepthFirst {
                assert_eq!(optimal, solution.move_count(), "{} seed {}", strategy, seed);
            }
        }
    }
}

#[test]
fn test_classic_layout_state_space() {
    let board: Board = "^11^\nv11v\n^<>^\nv22v\n2..2".parse().unwrap();
    assert_eq!(25_955, MoveGenerator::new().count_reachable(&board));
}

#[test]
fn test_race_agrees_with_single_runs() {
    let board: Board = "^11^\nv11v\n^<>^\nv22v\n2..2".parse().unwrap();
    let report = Solver::new().race(&board);
    let best_first = report.best_first.unwrap();
    let depth_first = report.depth_first.unwrap();
    assert_eq!(Some(116), best_first.move_count());
    assert_valid_solution(&board, depth_first.solution.as_ref().unwrap());
    assert!(depth_first.move_count().unwrap() >= 116);
}
