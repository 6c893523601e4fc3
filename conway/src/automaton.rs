// automaton.rs - Birth/survival transition rule over a binary CellGrid

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::{Cell, CellGrid};
use crate::Result;

/// Neighbor-count thresholds of a life-like rule.
///
/// A live cell survives when its neighbor count is *exactly* `survival_low`
/// or *exactly* `survival_high`. Counts strictly between the two do not
/// survive unless they equal one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleConfig {
    pub survival_low: u8,
    pub survival_high: u8,
    pub birth_count: u8,
}

impl RuleConfig {
    /// Conway's B3/S23.
    pub const CLASSIC: Self = Self {
        survival_low: 2,
        survival_high: 3,
        birth_count: 3,
    };

    pub fn survives(&self, neighbors: usize) -> bool {
        [self.survival_low, self.survival_high]
            .iter()
            .any(|&n| usize::from(n) == neighbors)
    }

    pub fn born(&self, neighbors: usize) -> bool {
        usize::from(self.birth_count) == neighbors
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Values that can seed an automaton. Anything "truthy" becomes a live cell.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}
impl_truthy_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}
impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Things that can produce their successor generation.
///
/// `next_generation` must not mutate `self`; history relies on earlier
/// generations staying valid.
pub trait Evolve {
    fn next_generation(&self) -> Self;
}

/// One generation of a life-like automaton: a binary grid plus the rule that
/// produced it and will produce its successor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Automaton {
    grid: CellGrid<bool>,
    rule: RuleConfig,
}

impl Automaton {
    /// Coerces any grid into live/dead cells.
    pub fn from_grid<V: Truthy>(grid: &CellGrid<V>, rule: RuleConfig) -> Self {
        Self {
            grid: grid.map(|v, _| v.is_truthy()),
            rule,
        }
    }

    /// Builds an automaton from raw row data, rejecting ragged input.
    pub fn from_rows<V: Truthy>(rows: Vec<Vec<V>>, rule: RuleConfig) -> Result<Self> {
        let grid = CellGrid::from_rows(rows)?;
        Ok(Self::from_grid(&grid, rule))
    }

    /// Random `size x size` seed using the thread-local RNG.
    pub fn random(size: usize, rule: RuleConfig) -> Self {
        Self::random_with(&mut rand::rng(), size, rule)
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, size: usize, rule: RuleConfig) -> Self {
        Self {
            grid: random_seed(rng, size),
            rule,
        }
    }

    pub fn grid(&self) -> &CellGrid<bool> {
        &self.grid
    }

    /// Gives up the cells, e.g. to hand them to an editor.
    pub fn into_grid(self) -> CellGrid<bool> {
        self.grid
    }

    pub fn rule(&self) -> RuleConfig {
        self.rule
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.iter().filter(|(_, alive)| **alive).map(|(cell, _)| cell)
    }

    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    /// Out-of-range cells are dead.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.grid.get(cell).copied().unwrap_or(false)
    }

    pub fn neighbor_count(&self, cell: Cell) -> usize {
        self.grid
            .neighbors(cell)
            .filter(|&n| self.is_alive(n))
            .count()
    }

    fn alive_next(&self, cell: Cell, alive: bool) -> bool {
        let count = self.neighbor_count(cell);
        if alive {
            self.rule.survives(count)
        } else {
            self.rule.born(count)
        }
    }
}

impl Evolve for Automaton {
    fn next_generation(&self) -> Self {
        let grid = self.grid.map(|&alive, cell| self.alive_next(cell, alive));
        let next = Self {
            grid,
            rule: self.rule,
        };
        trace!(
            "computed generation: population {} -> {}",
            self.population(),
            next.population()
        );
        next
    }
}

/// Sets each of the `size x size` cells alive with probability 1/2.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R, size: usize) -> CellGrid<bool> {
    CellGrid::blank(size, size, false).map(|_, _| rng.random_bool(0.5))
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.row_slices() {
            let line: String = row.iter().map(|&a| if a { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn life(rows: Vec<Vec<u8>>) -> Automaton {
        Automaton::from_rows(rows, RuleConfig::CLASSIC).unwrap()
    }

    #[test]
    fn test_blinker_has_period_two() {
        let vertical = life(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
        let horizontal = life(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);

        let next = vertical.next_generation();
        assert_eq!(next, horizontal);
        assert_eq!(next.next_generation(), vertical);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = life(vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(block.next_generation(), block);
    }

    #[test]
    fn test_glider_moves_without_wrapping() {
        let glider = life(vec![
            vec![0, 1, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![1, 1, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let mut g = glider.clone();
        for _ in 0..4 {
            g = g.next_generation();
        }
        let moved: Vec<_> = g.alive_cells().collect();
        let expected: Vec<_> = glider.alive_cells().map(|(i, j)| (i + 1, j + 1)).collect();
        assert_eq!(moved, expected);
    }

    #[test]
    fn test_survival_is_membership_not_range() {
        // Center cell has 2 live neighbors; with thresholds 1 and 4 it must die
        // even though 2 lies between them.
        let rule = RuleConfig {
            survival_low: 1,
            survival_high: 4,
            birth_count: 3,
        };
        let a = Automaton::from_rows(
            vec![vec![1, 0, 1], vec![0, 1, 0], vec![0, 0, 0]],
            rule,
        )
        .unwrap();
        assert_eq!(a.neighbor_count((1, 1)), 2);
        let next = a.next_generation();
        assert!(!next.is_alive((1, 1)));
        assert_eq!(next.rule(), rule);

        assert!(rule.survives(1));
        assert!(!rule.survives(2));
        assert!(!rule.survives(3));
        assert!(rule.survives(4));
    }

    #[test]
    fn test_coercion_of_truthy_values() {
        let a = Automaton::from_rows(
            vec![vec![Some(2.5), None], vec![Some(0.0), Some(f64::NAN)]],
            RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(a.alive_cells().collect::<Vec<_>>(), vec![(0, 0)]);
        assert!(!a.is_alive((9, 9)));
    }

    #[test]
    fn test_ragged_seed_is_rejected() {
        assert!(Automaton::from_rows(vec![vec![1, 0], vec![1]], RuleConfig::CLASSIC).is_err());
    }

    #[test]
    fn test_next_generation_leaves_original_untouched() {
        let a = life(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
        let before = a.clone();
        let _ = a.next_generation();
        assert_eq!(a, before);
    }

    #[test]
    fn test_random_seed_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Automaton::random_with(&mut rng, 12, RuleConfig::CLASSIC);
        assert_eq!(a.dimensions(), (12, 12));
        // 144 fair coin flips: all-dead or all-alive would be astronomically unlikely.
        assert!(a.population() > 0 && a.population() < 144);
    }

    #[test]
    fn test_display() {
        let a = life(vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(a.to_string(), "#.\n.#\n");
    }
}
