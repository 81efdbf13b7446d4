mod grid;
mod patterns;

pub use grid::Grid;
pub use patterns::Pattern;

use rand::Rng;

/// Conway's GoL on a torus: the current field, a scratch field of the same
/// size and the generation counter.
pub struct LifeEngine {
    grid: Grid,
    next: Grid,
    generation: u64,
}

impl LifeEngine {
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self::from_grid(Grid::blank(rows, cols))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let (rows, cols) = grid.size();
        Self {
            grid,
            next: Grid::blank(rows, cols),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) {
        self.grid.step_into(&mut self.next);
        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid.toggle_cell(row, col);
    }

    pub fn set_cell(&mut self, row: usize, col: usize, state: bool) {
        self.grid.set_cell(row, col, state);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.grid.randomize(rng, density);
        self.generation = 0;
    }

    pub fn load_preset(&mut self, cells: &[(usize, usize)]) {
        self.grid.load_preset(cells);
        self.generation = 0;
    }

    /// Loads `pattern` with its top left corner at `(row, col)`.
    pub fn load_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) {
        self.load_preset(&pattern.offset(row, col));
        log::debug!(
            "loaded pattern {:?} ({} cells) at ({}, {})",
            pattern.name(),
            pattern.cells().len(),
            row,
            col
        );
    }
}
