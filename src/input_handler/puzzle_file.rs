//! Puzzle file parsing.
//!
//! A puzzle file holds five rows of four characters:
//!
//! ```text
//! ^11^
//! v11v
//! ^<>^
//! v22v
//! 2..2
//! ```
//!
//! `1` marks the goal piece, `2` a single, `<>` a horizontal piece, `^`
//! over `v` a vertical piece and `.` an empty cell. Pieces are read from
//! their anchor characters; the remaining characters must then agree with
//! the board those pieces produce.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use common::{Cell, HEIGHT};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::error::InvalidConfiguration;
use crate::board::grid::{
    EMPTY_CHAR, GOAL_CHAR, HORIZONTAL_LEFT_CHAR, HORIZONTAL_RIGHT_CHAR, SINGLE_CHAR,
    VERTICAL_BOTTOM_CHAR, VERTICAL_TOP_CHAR,
};
use crate::board::piece::Piece;
use crate::board::Board;

static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[12<>^v.]{4}$").expect("ROW_RE regex should be valid"));

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleParseError {
    #[error("Wrong number of rows: 5 expected, {row_count} given")]
    InvalidRowCount { row_count: usize },
    #[error("Invalid character {invalid_character:?} in row {row}, column {column}")]
    InvalidCharacter {
        invalid_character: char,
        row: usize,
        column: usize,
    },
    #[error("Row {row} has {length} cells, 4 expected: {invalid_row:?}")]
    InvalidRowLength {
        row: usize,
        length: usize,
        invalid_row: String,
    },
    #[error("Row {row} does not match its pieces: read {found:?}, pieces give {derived:?}")]
    InconsistentRow {
        row: usize,
        found: String,
        derived: String,
    },
    #[error("{0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
}

#[derive(Error, Debug)]
pub enum PuzzleFileError {
    #[error("io error reading {path:?}: {error}")]
    IOError { path: String, error: String },
    #[error("{0}")]
    Parse(#[from] PuzzleParseError),
}

type ParseResult<T> = Result<T, PuzzleParseError>;

/// Parses the five-row puzzle notation into a board. Trailing whitespace on
/// each row and trailing blank lines are ignored.
pub fn parse_puzzle(input: &str) -> ParseResult<Board> {
    let rows = split_rows(input)?;

    let mut pieces = Vec::new();
    let mut goal_seen = false;
    for (y, row) in rows.iter().enumerate() {
        for (x, character) in row.chars().enumerate() {
            let anchor = Cell::from_xy(x as u8, y as u8);
            match character {
                GOAL_CHAR if !goal_seen => {
                    goal_seen = true;
                    pieces.push(Piece::Goal(anchor));
                }
                HORIZONTAL_LEFT_CHAR => pieces.push(Piece::Horizontal(anchor)),
                VERTICAL_TOP_CHAR => pieces.push(Piece::Vertical(anchor)),
                SINGLE_CHAR => pieces.push(Piece::Single(anchor)),
                // covered by an anchor seen earlier, checked below
                _ => {}
            }
        }
    }

    let board = Board::new(pieces)?;
    check_consistency(&board, &rows)?;
    Ok(board)
}

/// Reads and parses a puzzle file.
pub fn read_puzzle_file<P: AsRef<Path>>(path: P) -> Result<Board, PuzzleFileError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|error| PuzzleFileError::IOError {
        path: path.display().to_string(),
        error: error.to_string(),
    })?;
    Ok(parse_puzzle(&contents)?)
}

fn split_rows(input: &str) -> ParseResult<Vec<&str>> {
    let mut rows: Vec<&str> = input.lines().map(str::trim_end).collect();
    while rows.last().map_or(false, |row| row.is_empty()) {
        rows.pop();
    }

    if rows.len() != HEIGHT as usize {
        return Err(PuzzleParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    for (row_index, row) in rows.iter().enumerate() {
        if ROW_RE.is_match(row) {
            continue;
        }
        if let Some((column, invalid_character)) = row
            .chars()
            .enumerate()
            .find(|(_, character)| !is_puzzle_char(*character))
        {
            return Err(PuzzleParseError::InvalidCharacter {
                invalid_character,
                row: row_index,
                column,
            });
        }
        return Err(PuzzleParseError::InvalidRowLength {
            row: row_index,
            length: row.chars().count(),
            invalid_row: row.to_string(),
        });
    }

    Ok(rows)
}

fn is_puzzle_char(character: char) -> bool {
    matches!(
        character,
        GOAL_CHAR
            | SINGLE_CHAR
            | EMPTY_CHAR
            | HORIZONTAL_LEFT_CHAR
            | HORIZONTAL_RIGHT_CHAR
            | VERTICAL_TOP_CHAR
            | VERTICAL_BOTTOM_CHAR
    )
}

// Stray continuation characters (a `>` with no `<`, a second goal block, a
// `.` where a piece reaches) only show up once the grid is redrawn.
fn check_consistency(board: &Board, rows: &[&str]) -> ParseResult<()> {
    let derived = board.grid().to_lines();
    for (row, (found, derived)) in rows.iter().zip(derived.iter()).enumerate() {
        if *found != derived.as_str() {
            return Err(PuzzleParseError::InconsistentRow {
                row,
                found: found.to_string(),
                derived: derived.clone(),
            });
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = PuzzleParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_puzzle(input)
    }
}
