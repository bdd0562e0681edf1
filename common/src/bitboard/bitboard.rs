use core::fmt;
use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

use crate::bitboard::cell::Cell;
use crate::bitboard::{HEIGHT, WIDTH};

/// Occupancy mask over the 20 cells of the board. Bit `y * 4 + x` is set
/// when cell `(x, y)` is part of the mask.
#[derive(Clone, Copy, PartialEq, Debug, PartialOrd, Eq, Ord, Hash, Default)]
pub struct Bitboard(pub u32);

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0x00000);
    pub const ALL: Self = Self(0xFFFFF);

    pub const COLUMN_0: Self = Self(0x11111);
    pub const COLUMN_1: Self = Self(0x22222);
    pub const COLUMN_2: Self = Self(0x44444);
    pub const COLUMN_3: Self = Self(0x88888);

    pub const ROW_0: Self = Self(0x0000F);
    pub const ROW_1: Self = Self(0x000F0);
    pub const ROW_2: Self = Self(0x00F00);
    pub const ROW_3: Self = Self(0x0F000);
    pub const ROW_4: Self = Self(0xF0000);

    pub fn overlaps(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.overlaps(cell.bitboard())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn trailing_zeros(&self) -> u32 {
        self.0.trailing_zeros()
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the cells in the mask in ascending index order.
    pub fn cells(self) -> Cells {
        Cells { remaining: self }
    }
}

pub struct Cells {
    remaining: Bitboard,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = self.remaining.trailing_zeros() as u8;
        self.remaining.0 &= self.remaining.0 - 1;
        Cell::from_index(index)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Shl<u8> for Bitboard {
    type Output = Self;

    fn shl(self, rhs: u8) -> Self {
        Self(self.0 << rhs)
    }
}

impl Shr<u8> for Bitboard {
    type Output = Self;

    fn shr(self, rhs: u8) -> Self {
        Self(self.0 >> rhs)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut result = String::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let cell = Cell::from_xy(x, y);
                result.push(if self.contains(cell) { 'X' } else { '.' });
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}
