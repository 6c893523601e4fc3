// patterns.rs - Named seed patterns, stored as offsets from their top-left corner

use crate::grid::{Cell, CellGrid};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Cell],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(m, n), &(i, j)| (m.max(i + 1), n.max(j + 1)))
    }

    /// Sets the pattern's cells alive with its top-left corner at `origin`.
    /// Cells that land outside the grid are dropped. Returns how many landed.
    pub fn stamp(&self, grid: &mut CellGrid<bool>, (oi, oj): Cell) -> usize {
        self.cells
            .iter()
            .filter(|&&(i, j)| grid.set((oi + i, oj + j), true))
            .count()
    }

    /// Blank `m x n` grid with the pattern stamped in the middle.
    pub fn centered(&self, m: usize, n: usize) -> CellGrid<bool> {
        let (h, w) = self.size();
        let mut grid = CellGrid::blank(m, n, false);
        self.stamp(&mut grid, (m.saturating_sub(h) / 2, n.saturating_sub(w) / 2));
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Automaton, Evolve, RuleConfig};

    #[test]
    fn test_sizes() {
        assert_eq!(find("glider").unwrap().size(), (3, 3));
        assert_eq!(find("Pulsar").unwrap().size(), (13, 13));
        assert_eq!(find("gosper glider gun").unwrap().size(), (9, 36));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_stamp_clips_at_border() {
        let mut grid = CellGrid::blank(4, 4, false);
        let placed = find("Blinker").unwrap().stamp(&mut grid, (3, 2));
        assert_eq!(placed, 2);
        assert!(grid[(3, 2)] && grid[(3, 3)]);
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let seed = Automaton::from_grid(&find("Pulsar").unwrap().centered(17, 17), RuleConfig::CLASSIC);
        let later = seed
            .next_generation()
            .next_generation()
            .next_generation();
        assert_ne!(seed.next_generation(), seed);
        assert_eq!(later, seed);
    }

    #[test]
    fn test_centered_blinker() {
        let grid = find("Blinker").unwrap().centered(5, 5);
        let alive: Vec<_> = grid.iter().filter(|(_, a)| **a).map(|(c, _)| c).collect();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);
    }
}
