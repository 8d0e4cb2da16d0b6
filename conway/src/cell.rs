// cell.rs - A single automaton cell

/// One grid position: its current state plus the state staged for the next generation.
///
/// `next_alive` only carries meaning between an evaluation pass and the commit
/// that follows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    next_alive: bool,
}

impl Cell {
    pub const fn dead() -> Self {
        Self { alive: false, next_alive: false }
    }

    /// Flips the current state. The staged state is left alone.
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_next_alive(&mut self, next_alive: bool) {
        self.next_alive = next_alive;
    }

    pub fn next_alive(&self) -> bool {
        self.next_alive
    }

    /// Makes the staged state current.
    pub fn commit(&mut self) {
        self.alive = self.next_alive;
    }
}
