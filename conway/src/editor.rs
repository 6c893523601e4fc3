// editor.rs - Editable seed grid and pointer-agnostic paint sessions

use log::debug;

use crate::automaton::{Automaton, RuleConfig};
use crate::grid::{Cell, CellGrid};

pub const DEFAULT_EDITOR_DIMENSIONS: (usize, usize) = (50, 50);

/// A binary grid the user draws a seed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    grid: CellGrid<bool>,
}

impl Default for Editor {
    fn default() -> Self {
        let (m, n) = DEFAULT_EDITOR_DIMENSIONS;
        Self::new(m, n)
    }
}

impl Editor {
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            grid: CellGrid::blank(m, n, false),
        }
    }

    /// Starts from an existing drawing. The editor is at least `m x n` and at
    /// least as large as `initial`; `initial` goes in the top-left corner.
    pub fn with_initial(initial: &CellGrid<bool>, m: usize, n: usize) -> Self {
        let (im, in_) = initial.dimensions();
        let mut editor = Self::new(m.max(im), n.max(in_));
        editor.copy_from(initial);
        editor
    }

    /// Opens a generation for editing.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        Self {
            grid: automaton.grid().clone(),
        }
    }

    pub fn grid(&self) -> &CellGrid<bool> {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.grid.get(cell).copied()
    }

    /// Out-of-range cells are ignored.
    pub fn set(&mut self, cell: Cell, value: bool) -> bool {
        self.grid.set(cell, value)
    }

    /// Flips one cell and returns its new value.
    pub fn toggle(&mut self, cell: Cell) -> Option<bool> {
        let slot = self.grid.get_mut(cell)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn clear(&mut self) {
        let (m, n) = self.dimensions();
        self.grid = CellGrid::blank(m, n, false);
    }

    /// Changes the dimensions, keeping whatever overlaps the new size.
    pub fn resize(&mut self, m: usize, n: usize) {
        debug!("resizing editor {:?} -> {:?}", self.dimensions(), (m, n));
        let old = std::mem::replace(&mut self.grid, CellGrid::blank(m, n, false));
        self.copy_from(&old);
    }

    fn copy_from(&mut self, other: &CellGrid<bool>) {
        for (cell, &alive) in other.iter() {
            self.grid.set(cell, alive);
        }
    }

    /// The current drawing as generation 0 of an automaton.
    pub fn seed(&self, rule: RuleConfig) -> Automaton {
        Automaton::from_grid(&self.grid, rule)
    }

    /// Starts painting at `cell`: the cell is toggled, and the value it ends
    /// up with is painted onto every cell the session moves over.
    ///
    /// Returns `None` if `cell` is outside the grid.
    pub fn begin(&mut self, cell: Cell) -> Option<PaintSession> {
        let value = self.toggle(cell)?;
        Some(PaintSession {
            value,
            last: cell,
            painted: 1,
        })
    }
}

/// One press-drag-release gesture, whatever device it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintSession {
    value: bool,
    last: Cell,
    painted: usize,
}

impl PaintSession {
    /// Value being painted.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Moves to `cell`, painting every cell on the straight line from the
    /// previous position so fast drags leave no gaps.
    pub fn continue_to(&mut self, editor: &mut Editor, cell: Cell) {
        if cell == self.last {
            return;
        }
        for c in line(self.last, cell).skip(1) {
            if editor.set(c, self.value) {
                self.painted += 1;
            }
        }
        self.last = cell;
    }

    /// Finishes the gesture and returns how many cell writes it made.
    pub fn end(self) -> usize {
        debug!("paint session ended after {} cells", self.painted);
        self.painted
    }
}

/// Bresenham line from `start` to `end`, both inclusive.
fn line(start: Cell, end: Cell) -> impl Iterator<Item = Cell> {
    let (mut i, mut j) = (start.0 as isize, start.1 as isize);
    let (ei, ej) = (end.0 as isize, end.1 as isize);
    let di = (ei - i).abs();
    let dj = -(ej - j).abs();
    let si = if i < ei { 1 } else { -1 };
    let sj = if j < ej { 1 } else { -1 };
    let mut err = di + dj;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let ret = (i as usize, j as usize);
        if i == ei && j == ej {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 >= dj {
                err += dj;
                i += si;
            }
            if e2 <= di {
                err += di;
                j += sj;
            }
        }
        Some(ret)
    })
}
