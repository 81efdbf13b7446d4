use crate::{utils::parse_rle, Result};

/// A named set of alive cells, `(row, col)` relative to the pattern's top left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(usize, usize)>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Glider moving towards increasing rows and columns.
    pub fn glider() -> Self {
        Self::new("glider", vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Period-2 oscillator, horizontal phase.
    pub fn blinker() -> Self {
        Self::new("blinker", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Gosper glider gun; already contains a small margin from the corner.
    pub fn gosper_glider_gun() -> Self {
        #[rustfmt::skip]
        const GUN: [(usize, usize); 36] = [
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13), (3, 14), (9, 14),
            (6, 15), (4, 16), (8, 16), (5, 17), (6, 17), (7, 17), (6, 18),
            (3, 21), (4, 21), (5, 21), (3, 22), (4, 22), (5, 22), (2, 23), (6, 23),
            (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ];
        Self::new("gosper glider gun", GUN.to_vec())
    }

    /// Parses a pattern in RLE format.
    pub fn from_rle(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        Ok(Self::new(name, parse_rle(data)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// `(rows, cols)` of the bounding box anchored at the origin.
    pub fn bounding_size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Cells shifted by `(row, col)`; cells that would overflow are dropped.
    pub fn offset(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter_map(|&(r, c)| Some((r.checked_add(row)?, c.checked_add(col)?)))
            .collect()
    }
}
