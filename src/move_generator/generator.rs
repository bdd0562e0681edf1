//! Slide generation.
//!
//! A slide is legal when every cell the piece newly covers is empty. Those
//! cells depend only on the piece kind, its anchor and the direction, so
//! they are looked up in a table built once per `MoveGenerator` and checked
//! against the board's empty-cell mask.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::board::{piece::Piece, Board};
use crate::slide::direction::ALL_DIRECTIONS;
use crate::slide::Slide;

use super::targets::{SlideTarget, Targets};

/// A list of slides that is optimized for small sizes. A 4x5 board has at
/// most two empty cells when fully packed, but sparse boards can produce
/// many more slides.
pub type SlideList = SmallVec<[Slide; 16]>;

/// Generates all legal slides for a given board.
#[derive(Clone, Default)]
pub struct MoveGenerator {
    targets: Targets,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every legal slide, pieces in board order and directions in
    /// up/down/left/right order.
    pub fn generate_moves(&self, board: &Board) -> SlideList {
        let mut slides: SlideList = smallvec![];
        for &piece in board.pieces() {
            for (slide, _) in self.legal_targets(board, piece) {
                slides.push(slide);
            }
        }
        slides
    }

    /// Every board reachable with one slide, paired with the slide that
    /// produces it. Follows the same order as `generate_moves`.
    pub fn successors(&self, board: &Board) -> Vec<(Slide, Board)> {
        let mut successors = Vec::new();
        for (index, &piece) in board.pieces().iter().enumerate() {
            for (slide, target) in self.legal_targets(board, piece) {
                successors.push((slide, board.with_piece_moved(index, target.destination)));
            }
        }
        successors
    }

    fn legal_targets<'a>(
        &'a self,
        board: &'a Board,
        piece: Piece,
    ) -> impl Iterator<Item = (Slide, SlideTarget)> + 'a {
        let empty = board.empty_cells();
        ALL_DIRECTIONS.iter().filter_map(move |&direction| {
            let target = self.targets.lookup(piece, direction)?;
            if (target.entering & empty) == target.entering {
                Some((Slide::new(piece, direction), target))
            } else {
                None
            }
        })
    }

    /// Number of distinct configurations reachable from `board`, including
    /// `board` itself.
    pub fn count_reachable(&self, board: &Board) -> usize {
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen.insert(board.position_id());
        queue.push_back(board.clone());

        while let Some(current) = queue.pop_front() {
            for (_, next) in self.successors(&current) {
                if seen.insert(next.position_id()) {
                    queue.push_back(next);
                }
            }
        }

        debug!("reachable configurations: {}", seen.len());
        seen.len()
    }
}
