use crate::cell::{Cell, ALIVE};
use crate::error::GridError;
use crate::patterns::Pattern;
use rand::Rng;

/// A fixed-size board of cells plus the states they had at the last snapshot.
///
/// Neighbor counts only ever read the snapshot, so cells can be flipped in place
/// during a generation without affecting the decisions for cells not yet visited.
/// Manual edits through [`Grid::toggle_cell`] must be followed by
/// [`Grid::snapshot`] before they take part in neighbor counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    previous_states: Vec<u32>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            previous_states: vec![0; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index. Panics when `(x, y)` lies outside the board.
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Copy every cell's current state into the previous-generation buffer.
    pub fn snapshot(&mut self) {
        for (previous, cell) in self.previous_states.iter_mut().zip(&self.cells) {
            *previous = cell.state();
        }
    }

    /// Advance the cell at `(x, y)` to its next state. Does not snapshot.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx].advance();
    }

    /// Live state of the cell at `(x, y)`.
    pub fn cell_state(&self, x: usize, y: usize) -> u32 {
        self.cells[self.index(x, y)].state()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell_state(x, y) == ALIVE
    }

    /// State of the cell at `(x, y)` as of the last snapshot.
    pub fn snapshot_state(&self, x: usize, y: usize) -> u32 {
        self.previous_states[self.index(x, y)]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether the cell at `(x, y)` flips in the next generation.
    ///
    /// The cell's own state is read live, its neighbors from the snapshot.
    pub fn should_change_state(&self, x: usize, y: usize) -> bool {
        let current = self.cell_state(x, y);
        let neighbors = self.count_live_neighbors(x, y);

        match (current, neighbors) {
            (ALIVE, n) => !(2..=3).contains(&n), // Underpopulation or overcrowding
            (_, n) => n == 3,                    // Birth
        }
    }

    /// Count live cells in the snapshot among the in-bounds Moore neighbors.
    ///
    /// Panics when `(x, y)` itself lies outside the board.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        self.index(x, y);
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    // Skip the current cell
                    continue;
                }

                // Left and top edges
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                // Right and bottom edges
                if !self.contains(nx, ny) {
                    continue;
                }

                if self.previous_states[self.index(nx, ny)] == ALIVE {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the grid by one generation and snapshot the result.
    ///
    /// Returns whether any cell changed.
    pub fn advance_generation(&mut self) -> bool {
        let mut changed = 0usize;

        for x in 0..self.width {
            for y in 0..self.height {
                if self.should_change_state(x, y) {
                    self.toggle_cell(x, y);
                    changed += 1;
                }
            }
        }
        self.snapshot();

        log::trace!("generation advanced, {changed} cells changed");
        changed > 0
    }

    /// Bring the cell at `(x, y)` to life. Out-of-range coordinates are ignored.
    ///
    /// Returns whether the cell changed. Does not snapshot.
    pub fn make_alive(&mut self, x: usize, y: usize) -> bool {
        if !self.contains(x, y) || self.is_alive(x, y) {
            return false;
        }
        self.toggle_cell(x, y);
        true
    }

    /// Kill the cell at `(x, y)`. Out-of-range coordinates are ignored.
    ///
    /// Returns whether the cell changed. Does not snapshot.
    pub fn make_dead(&mut self, x: usize, y: usize) -> bool {
        if !self.contains(x, y) || !self.is_alive(x, y) {
            return false;
        }
        self.toggle_cell(x, y);
        true
    }

    fn kill_all(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_alive()) {
            cell.advance();
        }
    }

    /// Kill every cell and snapshot.
    pub fn clear(&mut self) {
        self.kill_all();
        self.snapshot();
        log::debug!("grid cleared");
    }

    /// Clear, then bring each cell to life with the given probability, and snapshot.
    pub fn randomize(&mut self, probability: f64) -> Result<(), GridError> {
        self.randomize_with(&mut rand::rng(), probability)
    }

    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }

        self.kill_all();
        for cell in self.cells.iter_mut() {
            if rng.random_bool(probability) {
                cell.advance();
            }
        }
        self.snapshot();

        log::debug!(
            "grid randomized with p={probability}, {} cells alive",
            self.live_count()
        );
        Ok(())
    }

    /// Make the pattern's cells alive with its origin at `(x, y)`, then snapshot.
    ///
    /// Cells falling outside the board are skipped. Existing live cells are kept.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for &(dx, dy) in pattern.cells {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            self.make_alive(cx, cy);
        }
        self.snapshot();
    }

    /// Clear the board and place the pattern near its center.
    pub fn seed_centered(&mut self, pattern: &Pattern) {
        let x = (self.width / 2).saturating_sub(1);
        let y = (self.height / 2).saturating_sub(1);

        self.kill_all();
        self.place(pattern, x, y);
        log::debug!("seeded {} at ({x}, {y})", pattern.name);
    }
}
