// lib.rs - Conway's Game of Life: cells, the generation rule, and the run/pause/clear lifecycle

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod grid;
pub mod patterns;

pub use board::Board;
pub use cell::Cell;
pub use error::{BoardError, ParseBoardError};
pub use game::{Game, State};
pub use grid::{GRID_COLS, GRID_ROWS, TICK_INTERVAL};
pub use patterns::{PATTERNS, Pattern};

/// The board at its configured size.
pub type GameBoard = Board<GRID_ROWS, GRID_COLS>;

/// A game over [`GameBoard`].
pub type LifeGame = Game<GRID_ROWS, GRID_COLS>;
