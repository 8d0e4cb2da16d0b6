// board.rs - Fixed-size board and the generation rule

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use log::trace;

use crate::cell::Cell;
use crate::error::{BoardError, ParseBoardError};
use crate::grid::{self, NEIGHBOURS};
use crate::patterns::Pattern;

const ALIVE: char = 'o';
const DEAD: char = '.';

/// A `ROWS x COLS` grid of cells addressed by `(row, col)`.
///
/// The grid does not wrap: positions past an edge simply do not exist.
/// Boards compare equal when the same cells are alive.
#[derive(Clone, Debug)]
pub struct Board<const ROWS: usize, const COLS: usize> {
    cells: [[Cell; COLS]; ROWS],
    generation: u64,
}

impl<const ROWS: usize, const COLS: usize> Default for Board<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Board<ROWS, COLS> {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::dead(); COLS]; ROWS],
            generation: 0,
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Number of generations committed since the board was created or last cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Positions off the board read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_alive())
    }

    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.set_alive(alive);
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.toggle();
        Ok(())
    }

    /// Live cells among the up to 8 in-bounds neighbours of `(row, col)`.
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &delta in &NEIGHBOURS {
            if let Some((r, c)) = grid::offset((row, col), delta, ROWS, COLS) {
                if self.cells[r][c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Stages every cell's next state. No current state changes until
    /// [`commit_generation`](Self::commit_generation).
    pub fn evaluate_next_generation(&mut self) {
        for (row, col) in grid::positions(ROWS, COLS) {
            let count = self.live_neighbours(row, col);
            let cell = &mut self.cells[row][col];
            cell.set_next_alive(next_state(cell.is_alive(), count));
        }
    }

    pub fn commit_generation(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::commit);
    }

    /// Advances the whole board by one generation.
    pub fn step_generation(&mut self) {
        self.evaluate_next_generation();
        self.commit_generation();
        self.generation += 1;
        trace!("generation {} committed, {} alive", self.generation, self.population());
    }

    /// Kills every cell and resets the generation count.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_alive(false);
        }
        self.generation = 0;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        grid::positions(ROWS, COLS)
            .filter(|&(row, col)| self.cells[row][col].is_alive())
            .collect()
    }

    /// Clears the board and brings `pattern` to life.
    ///
    /// Every cell of the pattern is checked first; a pattern that does not fit
    /// leaves the board untouched.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), BoardError> {
        if let Some(&(row, col)) = pattern
            .cells
            .iter()
            .find(|&&(row, col)| row >= ROWS || col >= COLS)
        {
            return Err(BoardError::PatternOutOfBounds {
                name: pattern.name,
                row,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }

        self.clear();
        for &(row, col) in pattern.cells {
            self.cells[row][col].set_alive(true);
        }
        Ok(())
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        self.cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(BoardError::OutOfBounds {
                row,
                col,
                rows: ROWS,
                cols: COLS,
            })
    }
}

/// Conway's B3/S23 rule.
fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true,  // Survival
        (false, 3)            => true,  // Birth
        _                     => false, // Under/overpopulation, or stays dead
    }
}

impl<const ROWS: usize, const COLS: usize> PartialEq for Board<ROWS, COLS> {
    fn eq(&self, other: &Self) -> bool {
        self.cells
            .iter()
            .flatten()
            .map(Cell::is_alive)
            .eq(other.cells.iter().flatten().map(Cell::is_alive))
    }
}

impl<const ROWS: usize, const COLS: usize> Eq for Board<ROWS, COLS> {}

/// Parses one line per row, `o` for a live cell and `.` for a dead one.
/// Blank lines and surrounding whitespace are ignored.
impl<const ROWS: usize, const COLS: usize> FromStr for Board<ROWS, COLS> {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        if lines.len() != ROWS {
            return Err(ParseBoardError::RowCount {
                expected: ROWS,
                found: lines.len(),
            });
        }

        let mut board = Self::new();
        for (row, line) in lines.into_iter().enumerate() {
            let found = line.chars().count();
            if found != COLS {
                return Err(ParseBoardError::RowLength {
                    row,
                    expected: COLS,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    ALIVE => board.cells[row][col].set_alive(true),
                    DEAD => (),
                    found => return Err(ParseBoardError::UnexpectedChar { row, col, found }),
                }
            }
        }
        Ok(board)
    }
}

impl<const ROWS: usize, const COLS: usize> Display for Board<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_char(if cell.is_alive() { ALIVE } else { DEAD })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameBoard;

    fn parse<const R: usize, const C: usize>(s: &str) -> Board<R, C> {
        s.parse().unwrap()
    }

    /// A 3x3 board with the centre set to `alive` and the first `n` neighbours alive.
    fn centre_with_neighbours(alive: bool, n: usize) -> Board<3, 3> {
        let mut board = Board::<3, 3>::new();
        board.set_alive(1, 1, alive).unwrap();
        for &(dr, dc) in &NEIGHBOURS[..n] {
            board.set_alive((1 + dr) as usize, (1 + dc) as usize, true).unwrap();
        }
        board
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            for alive in [false, true] {
                let mut board = centre_with_neighbours(alive, n);
                assert_eq!(board.live_neighbours(1, 1) as usize, n);
                board.evaluate_next_generation();
                let expected = matches!((alive, n), (true, 2 | 3) | (false, 3));
                assert_eq!(
                    board.cell(1, 1).unwrap().next_alive(),
                    expected,
                    "alive={alive} neighbours={n}"
                );
            }
        }
    }

    #[test]
    fn dead_cell_with_three_neighbours_is_born() {
        let mut board: Board<5, 5> = parse(
            "
            .....
            .o...
            ...o.
            .o...
            .....
            ",
        );
        assert!(!board.is_alive(2, 2));
        board.step_generation();
        assert!(board.is_alive(2, 2));
    }

    #[test]
    fn lonely_cells_die() {
        // (0, 0) has no neighbours, (4, 3) and (4, 4) have one each.
        let mut board: Board<5, 5> = parse(
            "
            o....
            .....
            .....
            .....
            ...oo
            ",
        );
        board.step_generation();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn crowded_cell_dies() {
        let mut board: Board<5, 5> = parse(
            "
            .....
            .o.o.
            ..o..
            .o.o.
            .....
            ",
        );
        assert_eq!(board.live_neighbours(2, 2), 4);
        board.step_generation();
        assert!(!board.is_alive(2, 2));
    }

    #[test]
    fn cells_with_two_or_three_neighbours_survive() {
        let mut board: Board<5, 5> = parse(
            "
            .....
            .o.o.
            ..o..
            ...o.
            .....
            ",
        );
        assert_eq!(board.live_neighbours(2, 2), 3);
        board.step_generation();
        assert!(board.is_alive(2, 2));

        let mut board: Board<5, 5> = parse(
            "
            .....
            .o...
            ..o..
            ...o.
            .....
            ",
        );
        assert_eq!(board.live_neighbours(2, 2), 2);
        board.step_generation();
        assert!(board.is_alive(2, 2));
    }

    #[test]
    fn all_dead_is_a_fixed_point() {
        let mut board: GameBoard = parse(
            "
            oo..................
            .o..................
            ....................
            ....................
            ....................
            ....................
            ....................
            ....................
            ....................
            .........ooo........
            ....................
            ....................
            ....................
            ....................
            ....................
            ....................
            ....................
            ....................
            ...................o
            ..................oo
            ",
        );
        board.clear();
        for _ in 0..10 {
            board.step_generation();
            assert_eq!(board.population(), 0);
        }
    }

    #[test]
    fn edges_count_only_in_bounds_neighbours() {
        let board: Board<3, 3> = parse(
            "
            ooo
            ooo
            ooo
            ",
        );
        assert_eq!(board.live_neighbours(0, 0), 3);
        assert_eq!(board.live_neighbours(0, 2), 3);
        assert_eq!(board.live_neighbours(2, 0), 3);
        assert_eq!(board.live_neighbours(2, 2), 3);
        assert_eq!(board.live_neighbours(0, 1), 5);
        assert_eq!(board.live_neighbours(1, 0), 5);
        assert_eq!(board.live_neighbours(1, 1), 8);
    }

    #[test]
    fn corners_do_not_wrap() {
        // A wrapping grid would give (0, 0) three neighbours and a birth.
        let mut board: Board<4, 4> = parse(
            "
            ...o
            ....
            ....
            o..o
            ",
        );
        assert_eq!(board.live_neighbours(0, 0), 0);
        board.step_generation();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal: Board<5, 5> = parse(
            "
            .....
            .....
            .ooo.
            .....
            .....
            ",
        );
        let mut board = horizontal.clone();

        board.step_generation();
        assert_eq!(board.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        board.step_generation();
        assert_eq!(board, horizontal);
        assert_eq!(board.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn isolated_cell_dies_without_births() {
        for (row, col) in [(0, 0), (2, 3), (4, 4), (0, 4)] {
            let mut board = Board::<5, 5>::new();
            board.toggle(row, col).unwrap();
            board.step_generation();
            assert_eq!(board.population(), 0, "cell at ({row}, {col})");
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let mut board = GameBoard::new();
        for (row, col) in [(7, 7), (7, 8), (8, 7), (8, 8)] {
            board.set_alive(row, col, true).unwrap();
        }
        let block = board.clone();
        for _ in 0..20 {
            board.step_generation();
            assert_eq!(board, block);
        }
        assert_eq!(board.generation(), 20);
    }

    #[test]
    fn clear_keeps_staged_state() {
        let mut board: Board<5, 5> = parse(
            "
            .....
            .....
            .ooo.
            .....
            .....
            ",
        );
        board.evaluate_next_generation();
        board.clear();
        assert_eq!(board.population(), 0);
        assert!(board.cell(1, 2).unwrap().next_alive());
    }

    #[test]
    fn clear_resets_generation() {
        let mut board = Board::<5, 5>::new();
        board.step_generation();
        board.step_generation();
        assert_eq!(board.generation(), 2);
        board.clear();
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn toggling_off_the_board_is_an_error() {
        let mut board = Board::<5, 5>::new();
        assert_eq!(
            board.toggle(5, 0),
            Err(BoardError::OutOfBounds { row: 5, col: 0, rows: 5, cols: 5 })
        );
        assert!(board.set_alive(0, 7, true).is_err());
        assert!(!board.is_alive(9, 9));
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn pattern_that_does_not_fit_leaves_board_untouched() {
        let pattern = Pattern {
            name: "Too wide",
            cells: &[(0, 0), (0, 5)],
        };
        let mut board = Board::<5, 5>::new();
        board.toggle(3, 3).unwrap();
        let err = board.apply_pattern(&pattern).unwrap_err();
        assert_eq!(
            err,
            BoardError::PatternOutOfBounds { name: "Too wide", row: 0, col: 5, rows: 5, cols: 5 }
        );
        assert_eq!(board.live_cells(), vec![(3, 3)]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "ooo\n...".parse::<Board<3, 3>>(),
            Err(ParseBoardError::RowCount { expected: 3, found: 2 })
        );
        assert_eq!(
            "ooo\n..\n...".parse::<Board<3, 3>>(),
            Err(ParseBoardError::RowLength { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(
            "ooo\n...\n.x.".parse::<Board<3, 3>>(),
            Err(ParseBoardError::UnexpectedChar { row: 2, col: 1, found: 'x' })
        );
    }

    #[test]
    fn display_matches_parse_format() {
        let text = ".o.\n..o\nooo\n";
        let board: Board<3, 3> = parse(text);
        assert_eq!(board.to_string(), text);
    }
}
