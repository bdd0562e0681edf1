use std::fmt;

use common::{Bitboard, Cell};
use smallvec::SmallVec;

use super::grid::CellRole;
use crate::slide::direction::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum PieceKind {
    Goal,
    Horizontal,
    Vertical,
    Single,
}

pub const ALL_PIECE_KINDS: [PieceKind; 4] = [
    PieceKind::Goal,
    PieceKind::Horizontal,
    PieceKind::Vertical,
    PieceKind::Single,
];

impl PieceKind {
    /// `(width, height)` in cells.
    pub fn dimensions(self) -> (u8, u8) {
        match self {
            PieceKind::Goal => (2, 2),
            PieceKind::Horizontal => (2, 1),
            PieceKind::Vertical => (1, 2),
            PieceKind::Single => (1, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Goal => "goal",
            PieceKind::Horizontal => "horizontal",
            PieceKind::Vertical => "vertical",
            PieceKind::Single => "single",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece and the cell of its top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Piece {
    /// The 2x2 piece that has to reach the exit.
    Goal(Cell),
    Horizontal(Cell),
    Vertical(Cell),
    Single(Cell),
}

impl Piece {
    pub fn new(kind: PieceKind, anchor: Cell) -> Self {
        match kind {
            PieceKind::Goal => Piece::Goal(anchor),
            PieceKind::Horizontal => Piece::Horizontal(anchor),
            PieceKind::Vertical => Piece::Vertical(anchor),
            PieceKind::Single => Piece::Single(anchor),
        }
    }

    pub fn kind(&self) -> PieceKind {
        match self {
            Piece::Goal(_) => PieceKind::Goal,
            Piece::Horizontal(_) => PieceKind::Horizontal,
            Piece::Vertical(_) => PieceKind::Vertical,
            Piece::Single(_) => PieceKind::Single,
        }
    }

    pub fn anchor(&self) -> Cell {
        match *self {
            Piece::Goal(cell)
            | Piece::Horizontal(cell)
            | Piece::Vertical(cell)
            | Piece::Single(cell) => cell,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Piece::Goal(_))
    }

    /// The cells covered by the piece, or `None` if any of them is off the
    /// board.
    pub fn footprint(&self) -> Option<Bitboard> {
        let anchor = self.anchor();
        let (width, height) = self.kind().dimensions();
        let mut footprint = Bitboard::EMPTY;
        for dy in 0..height {
            for dx in 0..width {
                footprint |= anchor.offset(dx as i8, dy as i8)?.bitboard();
            }
        }
        Some(footprint)
    }

    /// The same piece moved one cell in `direction`, or `None` if it would
    /// leave the board.
    pub fn shifted(&self, direction: Direction) -> Option<Piece> {
        let (dx, dy) = direction.offset();
        let moved = Piece::new(self.kind(), self.anchor().offset(dx, dy)?);
        moved.footprint().map(|_| moved)
    }

    /// Each covered cell paired with the part of the piece drawn there.
    /// Cells that fall off the board are skipped.
    pub fn cell_roles(&self) -> SmallVec<[(Cell, CellRole); 4]> {
        let anchor = self.anchor();
        let parts: &[(i8, i8, CellRole)] = match self {
            Piece::Goal(_) => &[
                (0, 0, CellRole::GoalTopLeft),
                (1, 0, CellRole::GoalTopRight),
                (0, 1, CellRole::GoalBottomLeft),
                (1, 1, CellRole::GoalBottomRight),
            ],
            Piece::Horizontal(_) => &[
                (0, 0, CellRole::HorizontalLeft),
                (1, 0, CellRole::HorizontalRight),
            ],
            Piece::Vertical(_) => &[
                (0, 0, CellRole::VerticalTop),
                (0, 1, CellRole::VerticalBottom),
            ],
            Piece::Single(_) => &[(0, 0, CellRole::Single)],
        };

        parts
            .iter()
            .filter_map(|&(dx, dy, role)| anchor.offset(dx, dy).map(|cell| (cell, role)))
            .collect()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.anchor())
    }
}
