// error.rs - Errors for operations that take coordinates or text from outside the board

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("pattern {name:?} has a cell at ({row}, {col}), outside the {rows}x{cols} board")]
    PatternOutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors from parsing a board out of its plaintext form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {col}: unexpected character {found:?}")]
    UnexpectedChar { row: usize, col: usize, found: char },
}
