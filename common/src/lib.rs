//! Geometry shared by the solver: cell coordinates and occupancy masks
//! for the fixed 4x5 Hua Rong Dao grid.

pub mod bitboard;

pub use bitboard::bitboard::Bitboard;
pub use bitboard::cell::Cell;
pub use bitboard::{CELL_COUNT, HEIGHT, WIDTH};
