use std::fmt;

use common::{Cell, HEIGHT, WIDTH};

use super::piece::Piece;

pub const GOAL_CHAR: char = '1';
pub const SINGLE_CHAR: char = '2';
pub const EMPTY_CHAR: char = '.';
pub const HORIZONTAL_LEFT_CHAR: char = '<';
pub const HORIZONTAL_RIGHT_CHAR: char = '>';
pub const VERTICAL_TOP_CHAR: char = '^';
pub const VERTICAL_BOTTOM_CHAR: char = 'v';

/// What a single cell of the grid shows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellRole {
    Empty,
    GoalTopLeft,
    GoalTopRight,
    GoalBottomLeft,
    GoalBottomRight,
    HorizontalLeft,
    HorizontalRight,
    VerticalTop,
    VerticalBottom,
    Single,
}

impl Default for CellRole {
    fn default() -> Self {
        CellRole::Empty
    }
}

impl CellRole {
    pub fn to_char(self) -> char {
        match self {
            CellRole::Empty => EMPTY_CHAR,
            CellRole::GoalTopLeft
            | CellRole::GoalTopRight
            | CellRole::GoalBottomLeft
            | CellRole::GoalBottomRight => GOAL_CHAR,
            CellRole::HorizontalLeft => HORIZONTAL_LEFT_CHAR,
            CellRole::HorizontalRight => HORIZONTAL_RIGHT_CHAR,
            CellRole::VerticalTop => VERTICAL_TOP_CHAR,
            CellRole::VerticalBottom => VERTICAL_BOTTOM_CHAR,
            CellRole::Single => SINGLE_CHAR,
        }
    }

    /// 3-bit code used for position identities. The four goal roles share a
    /// code: with exactly one goal piece its corners are implied by the
    /// pattern of goal cells.
    pub fn code(self) -> u64 {
        match self {
            CellRole::Empty => 0,
            CellRole::GoalTopLeft
            | CellRole::GoalTopRight
            | CellRole::GoalBottomLeft
            | CellRole::GoalBottomRight => 1,
            CellRole::HorizontalLeft => 2,
            CellRole::HorizontalRight => 3,
            CellRole::VerticalTop => 4,
            CellRole::VerticalBottom => 5,
            CellRole::Single => 6,
        }
    }
}

/// Dense 4x5 view of a board. Always derived from a piece list and never
/// edited on its own.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid {
    rows: [[CellRole; WIDTH as usize]; HEIGHT as usize],
}

impl Grid {
    pub fn from_pieces(pieces: &[Piece]) -> Self {
        let mut grid = Grid::default();
        for piece in pieces {
            for (cell, role) in piece.cell_roles() {
                grid.rows[cell.y() as usize][cell.x() as usize] = role;
            }
        }
        grid
    }

    pub fn role(&self, cell: Cell) -> CellRole {
        self.rows[cell.y() as usize][cell.x() as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellRole; WIDTH as usize]> {
        self.rows.iter()
    }

    /// Each row rendered as a 4 character string.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|role| role.to_char()).collect())
            .collect()
    }

    /// Packs every cell's role code, in cell index order, into the low 60
    /// bits. Distinct valid boards always produce distinct values.
    pub fn position_id(&self) -> u64 {
        Cell::all().fold(0, |id, cell| {
            id | (self.role(cell).code() << (3 * cell.index() as u64))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
