use std::fmt;

use crate::bitboard::bitboard::Bitboard;
use crate::bitboard::{CELL_COUNT, HEIGHT, WIDTH};

/// A cell on the 4x5 grid. The origin is the top-left corner, `x` grows to
/// the right and `y` grows downward.
///
/// Fields are ordered `y` then `x` so the derived ordering is row-major,
/// which matches the bit index order of `Bitboard`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    y: u8,
    x: u8,
}

impl Cell {
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < WIDTH && y < HEIGHT {
            Some(Self { y, x })
        } else {
            None
        }
    }

    /// Builds a cell from known-good coordinates. Panics if the coordinates
    /// are off the board.
    pub const fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < WIDTH && y < HEIGHT, "cell is off the board");
        Self { y, x }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                y: index / WIDTH,
                x: index % WIDTH,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn index(self) -> u8 {
        self.y * WIDTH + self.x
    }

    pub fn bitboard(self) -> Bitboard {
        Bitboard(1) << self.index()
    }

    /// The cell `(x + dx, y + dy)`, or `None` if that falls off the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as u8, y as u8)
    }

    pub fn manhattan_distance(self, other: Self) -> u32 {
        let dx = (self.x as i32 - other.x as i32).abs();
        let dy = (self.y as i32 - other.y as i32).abs();
        (dx + dy) as u32
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
