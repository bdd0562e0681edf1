pub mod direction;

use core::fmt;

use common::Bitboard;
use thiserror::Error;

use crate::board::{piece::Piece, Board};
use crate::move_generator::MoveGenerator;
use direction::Direction;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlideError {
    #[error("Cannot slide {piece}, it is not on the board")]
    PieceNotOnBoard { piece: Piece },
    #[error("Cannot slide {slide}, the piece would leave the board")]
    OffTheBoard { slide: Slide },
    #[error("Cannot slide {slide}, the destination is occupied")]
    DestinationOccupied { slide: Slide },
}

/// Moves one piece by one cell. `piece` is the piece as it stands before
/// the slide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Slide {
    piece: Piece,
    direction: Direction,
}

impl Slide {
    pub fn new(piece: Piece, direction: Direction) -> Self {
        Self { piece, direction }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The piece after the slide, or `None` if it would leave the board.
    pub fn destination(&self) -> Option<Piece> {
        self.piece.shifted(self.direction)
    }

    /// Cells the piece newly covers after the slide. These are the only
    /// cells that have to be empty for the slide to be legal.
    pub fn entering_cells(&self) -> Option<Bitboard> {
        let before = self.piece.footprint()?;
        let after = self.destination()?.footprint()?;
        Some(after & !before)
    }

    /// Checked application: returns the resulting board, leaving `board`
    /// untouched.
    pub fn apply(&self, board: &Board) -> Result<Board, SlideError> {
        let index = board
            .piece_index(&self.piece)
            .ok_or(SlideError::PieceNotOnBoard { piece: self.piece })?;
        let moved = self
            .destination()
            .ok_or(SlideError::OffTheBoard { slide: *self })?;
        let entering = self
            .entering_cells()
            .ok_or(SlideError::OffTheBoard { slide: *self })?;

        if entering.overlaps(board.occupied()) {
            return Err(SlideError::DestinationOccupied { slide: *self });
        }

        Ok(board.with_piece_moved(index, moved))
    }

    /// The legal slide that turns `before` into `after`, if there is one.
    pub fn between(before: &Board, after: &Board) -> Option<Slide> {
        MoveGenerator::default()
            .successors(before)
            .into_iter()
            .find_map(|(slide, board)| (&board == after).then(|| slide))
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.piece, self.direction)
    }
}
