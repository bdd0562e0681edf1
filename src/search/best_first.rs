use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::evaluate::{is_goal, Heuristic};
use crate::move_generator::MoveGenerator;

use super::context::SearchContext;
use super::state::SearchState;
use super::{SearchError, SearchOutcome, Strategy};

/// Frontier entry for best-first search. Entries are popped by smallest
/// `f`, then smallest identity, then earliest insertion, so the pop order
/// is fully deterministic.
struct FrontierEntry {
    f: u32,
    id: u64,
    sequence: u64,
    state: Rc<SearchState>,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u64, u64) {
        (self.f, self.id, self.sequence)
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap is a max-heap, so the comparison is reversed.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, state: Rc<SearchState>) {
        let entry = FrontierEntry {
            f: state.f(),
            id: state.id(),
            sequence: self.next_sequence,
            state,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<Rc<SearchState>> {
        self.heap.pop().map(|entry| entry.state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A* search: expands states in order of `g + h`. With an admissible
/// heuristic the first goal state popped is at minimum depth.
///
/// A popped state whose identity is already visited is discarded. Otherwise
/// it is marked visited, tested against the goal, and expanded.
pub fn best_first_search<H: Heuristic>(
    context: &mut SearchContext,
    root: Rc<SearchState>,
    move_generator: &MoveGenerator,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    context.run(Strategy::BestFirst, |context| {
        let mut frontier = Frontier::default();
        let mut visited = FxHashSet::default();
        frontier.push(root);
        context.record_generated();

        while let Some(state) = frontier.pop() {
            if !visited.insert(state.id()) {
                context.record_discarded();
                continue;
            }
            if is_goal(state.board()) {
                return Ok(SearchOutcome::Solved(state));
            }
            context.record_expansion()?;

            for (slide, board) in move_generator.successors(state.board()) {
                // would be discarded on pop anyway
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
