use common::Cell;
use thiserror::Error;

use super::piece::Piece;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidConfiguration {
    #[error("Invalid configuration: {piece} extends past the edge of the board")]
    PieceOutOfBounds { piece: Piece },
    #[error("Invalid configuration: {piece} overlaps another piece at {cell}")]
    OverlappingPieces { piece: Piece, cell: Cell },
    #[error("Invalid configuration: the board has no 2x2 goal piece")]
    MissingGoalPiece,
    #[error("Invalid configuration: found {count} goal pieces, exactly one is allowed")]
    DuplicateGoalPiece { count: usize },
}
