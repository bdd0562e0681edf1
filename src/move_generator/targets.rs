use common::{Bitboard, Cell, CELL_COUNT};

use crate::board::piece::{Piece, PieceKind, ALL_PIECE_KINDS};
use crate::slide::direction::{Direction, ALL_DIRECTIONS};
use crate::slide::Slide;

/// Where a piece ends up after a slide, and which cells must be empty for
/// the slide to be legal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlideTarget {
    pub destination: Piece,
    pub entering: Bitboard,
}

/// Precomputed slide targets for every piece kind, anchor cell and
/// direction. Entries are `None` when the slide would leave the board (or
/// the anchor itself cannot hold the piece).
#[derive(Clone)]
pub struct Targets {
    table: [[[Option<SlideTarget>; 4]; CELL_COUNT as usize]; 4],
}

impl Default for Targets {
    fn default() -> Self {
        let mut table = [[[None; 4]; CELL_COUNT as usize]; 4];

        for (kind_index, &kind) in ALL_PIECE_KINDS.iter().enumerate() {
            for cell in Cell::all() {
                let piece = Piece::new(kind, cell);
                for (direction_index, &direction) in ALL_DIRECTIONS.iter().enumerate() {
                    let slide = Slide::new(piece, direction);
                    table[kind_index][cell.index() as usize][direction_index] =
                        match (slide.destination(), slide.entering_cells()) {
                            (Some(destination), Some(entering)) => Some(SlideTarget {
                                destination,
                                entering,
                            }),
                            _ => None,
                        };
                }
            }
        }

        Self { table }
    }
}

impl Targets {
    pub fn lookup(&self, piece: Piece, direction: Direction) -> Option<SlideTarget> {
        self.table[kind_index(piece.kind())][piece.anchor().index() as usize]
            [direction_index(direction)]
    }
}

fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Goal => 0,
        PieceKind::Horizontal => 1,
        PieceKind::Vertical => 2,
        PieceKind::Single => 3,
    }
}

fn direction_index(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}
