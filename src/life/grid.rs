use rand::Rng;
use std::fmt;

/// Fixed-size toroidal field of Conway's GoL cells, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a field filled with dead cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// [`(rows, cols)`] of the field
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State of a single cell; coordinates outside the field read as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[col + row * self.cols]
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Sets a single cell; coordinates outside the field are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, state: bool) {
        if self.contains(row, col) {
            self.cells[col + row * self.cols] = state;
        }
    }

    /// Flips a single cell; coordinates outside the field are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.contains(row, col) {
            let cell = &mut self.cells[col + row * self.cols];
            *cell = !*cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Fills the field with random cells, each alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() {
            0.
        } else {
            density.clamp(0., 1.)
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
    }

    /// Clears the field, then sets every listed `(row, col)` alive.
    pub fn load_preset(&mut self, cells: &[(usize, usize)]) {
        self.clear();
        for &(row, col) in cells {
            self.set_cell(row, col, true);
        }
    }

    /// Counts alive cells among the 8 neighbors, wrapping both axes.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let r1 = if row == 0 { self.rows - 1 } else { row - 1 };
        let r2 = if row == self.rows - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.cols - 1 } else { col - 1 };
        let c2 = if col == self.cols - 1 { 0 } else { col + 1 };
        self.get(r1, c1) as u8
            + self.get(r1, col) as u8
            + self.get(r1, c2) as u8
            + self.get(row, c1) as u8
            + self.get(row, c2) as u8
            + self.get(r2, c1) as u8
            + self.get(r2, col) as u8
            + self.get(r2, c2) as u8
    }

    /// Writes the next generation of `self` into `dst`.
    ///
    /// `dst` is overwritten completely and must have the same size.
    pub fn step_into(&self, dst: &mut Grid) {
        assert_eq!(self.size(), dst.size());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neibs = self.neighbor_count(row, col);
                let next = if self.get(row, col) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                dst.cells[col + row * self.cols] = next;
            }
        }
    }

    /// Returns the next generation; `self` is left untouched.
    pub fn step(&self) -> Grid {
        let mut next = Grid::blank(self.rows, self.cols);
        self.step_into(&mut next);
        next
    }

    /// Iterates over `(row, col)` of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}
