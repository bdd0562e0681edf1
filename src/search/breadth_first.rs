use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::evaluate::{is_goal, Heuristic};
use crate::move_generator::MoveGenerator;

use super::context::SearchContext;
use super::state::SearchState;
use super::{SearchError, SearchOutcome, Strategy};

/// Breadth-first search. Ignores the heuristic for ordering, so the path it
/// finds is a shortest one; used as the reference the other strategies are
/// checked against.
pub fn breadth_first_search<H: Heuristic>(
    context: &mut SearchContext,
    root: Rc<SearchState>,
    move_generator: &MoveGenerator,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    context.run(Strategy::BreadthFirst, |context| {
        let mut frontier = VecDeque::new();
        let mut visited = FxHashSet::default();
        frontier.push_back(root);
        context.record_generated();

        while let Some(state) = frontier.pop_front() {
            if !visited.insert(state.id()) {
                context.record_discarded();
                continue;
            }
            if is_goal(state.board()) {
                return Ok(SearchOutcome::Solved(state));
            }
            context.record_expansion()?;

            for (slide, board) in move_generator.successors(state.board()) {
                if visited.contains(&board.position_id()) {
                    context.record_discarded();
                    continue;
                }
                let h = heuristic.estimate(&board);
                frontier.push_back(SearchState::child(&state, slide, board, h));
                context.record_generated();
            }
            context.observe_frontier(frontier.len());
        }

        Ok(SearchOutcome::NoSolution)
    })
}
