/// State of a dead cell.
pub const DEAD: u32 = 0;
/// State of a live cell.
pub const ALIVE: u32 = 1;

/// A single cell cycling through `0..max_states`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    state: u32,
    max_states: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            state: DEAD,
            max_states: 2,
        }
    }
}

impl Cell {
    /// The modulus is not validated; advancing a cell with `max_states == 0` panics.
    pub fn new(state: u32, max_states: u32) -> Self {
        Cell { state, max_states }
    }

    /// Move to the next state, wrapping back to 0.
    pub fn advance(&mut self) {
        self.state = (self.state + 1) % self.max_states;
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Number of states this cell cycles through. Always 2 for cells on a [`Grid`].
    ///
    /// [`Grid`]: crate::Grid
    pub fn max_states(&self) -> u32 {
        self.max_states
    }

    pub fn is_alive(&self) -> bool {
        self.state == ALIVE
    }
}
