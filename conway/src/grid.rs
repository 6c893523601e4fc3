// grid.rs - Rectangular cell container shared by the automaton and the editor

use itertools::iproduct;
use std::ops::Index;

use crate::{Error, Result};

/// Cell index as `(row, column)`.
pub type Cell = (usize, usize);

/// Rectangular `rows x cols` grid of cell values, stored row-major.
///
/// Lookups outside the grid return `None` instead of panicking, so border
/// scans can probe past the edge freely. There is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellGrid<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V> CellGrid<V> {
    /// Builds a grid from literal row data.
    ///
    /// Every row must be as long as the first one. An empty input gives a
    /// `0 x 0` grid.
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::InvalidGrid {
                row,
                expected: cols,
                found: bad.len(),
            });
        }
        let m = rows.len();
        Ok(Self {
            rows: m,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, (i, j): Cell) -> bool {
        i < self.rows && j < self.cols
    }

    fn offset(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.0 * self.cols + cell.1)
    }

    pub fn get(&self, cell: Cell) -> Option<&V> {
        self.offset(cell).map(|k| &self.cells[k])
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut V> {
        self.offset(cell).map(move |k| &mut self.cells[k])
    }

    /// Overwrites one cell. Returns `false` (and does nothing) when the cell
    /// is outside the grid.
    pub fn set(&mut self, cell: Cell, value: V) -> bool {
        match self.get_mut(cell) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Moore neighborhood of `cell` clipped to the grid, in row-major order.
    pub fn neighbors(&self, (i, j): Cell) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(di, dj)| di != 0 || dj != 0)
            .filter_map(move |(di, dj)| {
                let n = (i.checked_add_signed(di)?, j.checked_add_signed(dj)?);
                self.contains(n).then_some(n)
            })
    }

    /// All cell indices in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// Values paired with their index, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &V)> + '_ {
        self.indices().zip(self.cells.iter())
    }

    /// Returns a new grid of the same shape with every value transformed.
    pub fn map<W>(&self, mut f: impl FnMut(&V, Cell) -> W) -> CellGrid<W> {
        CellGrid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(cell, v)| f(v, cell)).collect(),
        }
    }

    /// Visits every cell in row-major order.
    pub fn for_each(&self, mut f: impl FnMut(&V, Cell)) {
        for (cell, v) in self.iter() {
            f(v, cell);
        }
    }

    /// Row slices, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[V]> + '_ {
        // chunks() panics on 0; a 0-column grid has no visible rows anyway.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl<V: Clone> CellGrid<V> {
    /// `m x n` grid with every cell set to `default`.
    pub fn blank(m: usize, n: usize, default: V) -> Self {
        Self {
            rows: m,
            cols: n,
            cells: vec![default; m * n],
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<V>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.row_slices().map(<[V]>::to_vec).collect()
    }
}

impl<V> Index<Cell> for CellGrid<V> {
    type Output = V;

    fn index(&self, cell: Cell) -> &V {
        match self.get(cell) {
            Some(v) => v,
            None => panic!(
                "cell {:?} out of range for {}x{} grid",
                cell, self.rows, self.cols
            ),
        }
    }
}
