pub mod error;
pub mod grid;
pub mod piece;

mod display;

use common::{Bitboard, Cell};
use smallvec::SmallVec;

use error::InvalidConfiguration;
use grid::Grid;
use piece::Piece;

pub type PieceList = SmallVec<[Piece; 12]>;

/// A placement of pieces on the 4x5 board. The piece list is the only
/// source of truth: occupancy, the goal anchor, the identity and the grid
/// are all projections of it. Boards are never modified in place; moving a
/// piece yields a new board.
///
/// Pieces are kept in sorted order, so two boards compare equal exactly when
/// they hold the same multiset of pieces.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    pieces: PieceList,
    occupied: Bitboard,
    goal: Cell,
    position_id: u64,
}

impl Board {
    /// Validates and builds a board from a list of pieces.
    pub fn new<I>(pieces: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = Piece>,
    {
        let pieces: PieceList = pieces.into_iter().collect();

        let mut occupied = Bitboard::EMPTY;
        for &piece in &pieces {
            let footprint = piece
                .footprint()
                .ok_or(InvalidConfiguration::PieceOutOfBounds { piece })?;
            if let Some(cell) = (occupied & footprint).cells().next() {
                return Err(InvalidConfiguration::OverlappingPieces { piece, cell });
            }
            occupied |= footprint;
        }

        let mut goals = pieces.iter().filter(|piece| piece.is_goal());
        let goal = match goals.next() {
            Some(goal) => goal.anchor(),
            None => return Err(InvalidConfiguration::MissingGoalPiece),
        };
        let extra_goals = goals.count();
        if extra_goals > 0 {
            return Err(InvalidConfiguration::DuplicateGoalPiece {
                count: extra_goals + 1,
            });
        }

        Ok(Self::derive(pieces, occupied, goal))
    }

    fn derive(mut pieces: PieceList, occupied: Bitboard, goal: Cell) -> Self {
        pieces.sort_unstable();
        let position_id = Grid::from_pieces(&pieces).position_id();
        Self {
            pieces,
            occupied,
            goal,
            position_id,
        }
    }

    /// Returns a new board with the piece at `index` replaced by `moved`.
    /// The caller has already checked that `moved` fits.
    pub(crate) fn with_piece_moved(&self, index: usize, moved: Piece) -> Self {
        let mut pieces = self.pieces.clone();
        pieces[index] = moved;

        let occupied = pieces
            .iter()
            .filter_map(|piece| piece.footprint())
            .fold(Bitboard::EMPTY, |acc, footprint| acc | footprint);
        let goal = if moved.is_goal() {
            moved.anchor()
        } else {
            self.goal
        };

        Self::derive(pieces, occupied, goal)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_index(&self, piece: &Piece) -> Option<usize> {
        self.pieces.binary_search(piece).ok()
    }

    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    pub fn empty_cells(&self) -> Bitboard {
        !self.occupied
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(cell)
    }

    /// The piece covering `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        if !self.is_occupied(cell) {
            return None;
        }
        self.pieces.iter().copied().find(|piece| {
            piece
                .footprint()
                .map_or(false, |footprint| footprint.contains(cell))
        })
    }

    /// Top-left corner of the goal piece.
    pub fn goal_position(&self) -> Cell {
        self.goal
    }

    /// Canonical identity of the configuration, used for duplicate
    /// detection and frontier tie-breaking.
    pub fn position_id(&self) -> u64 {
        self.position_id
    }

    pub fn grid(&self) -> Grid {
        Grid::from_pieces(&self.pieces)
    }
}
