use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::evaluate::{is_goal, Heuristic};
use crate::move_generator::MoveGenerator;

use super::context::SearchContext;
use super::state::SearchState;
use super::{SearchError, SearchOutcome, Strategy};

/// Depth-first search over configurations. Returns the first goal state it
/// pops, which is not necessarily the closest one.
///
/// A state is tested against the goal before its identity is marked
/// visited, and successors whose identity is already visited are never
/// pushed.
pub fn depth_first_search<H: Heuristic>(
    context: &mut SearchContext,
    root: Rc<SearchState>,
    move_generator: &MoveGenerator,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    context.run(Strategy::DepthFirst, |context| {
        let mut frontier = vec![root];
        let mut visited = FxHashSet::default();
        context.record_generated();

        while let Some(state) = frontier.pop() {
            if visited.contains(&state.id()) {
                context.record_discarded();
                continue;
            }
            if is_goal(state.board()) {
                return Ok(SearchOutcome::Solved(state));
            }
            context.record_expansion()?;
            visited.insert(state.id());

            for (slide, board) in move_generator.successors(state.board()) {
                if visited.contains(&board.position_id()) {
                    context.record_discarded();
                    continue;
                }
                let h = heuristic.estimate(&board);
                frontier.push(SearchState::child(&state, slide, board, h));
                context.record_generated();
            }
            context.observe_frontier(frontier.len());
        }

        Ok(SearchOutcome::NoSolution)
    })
}
