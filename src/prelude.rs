//! Common types re-exported for convenience.

pub use crate::board::{piece::Piece, piece::PieceKind, Board};
pub use crate::evaluate::{Heuristic, ManhattanDistance};
pub use crate::move_generator::MoveGenerator;
pub use crate::search::{SearchLimits, Strategy};
pub use crate::slide::{direction::Direction, Slide};
pub use crate::solution::Solution;
pub use crate::solver::{Solver, SolverConfig};
pub use common::{Bitboard, Cell};
