pub mod bitboard;
pub mod cell;

pub const WIDTH: u8 = 4;
pub const HEIGHT: u8 = 5;
pub const CELL_COUNT: u8 = WIDTH * HEIGHT;
