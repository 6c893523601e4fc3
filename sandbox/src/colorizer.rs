// colorizer.rs - Turns live/dead cells into paintable colors

use conway::CellGrid;
use egui::Color32;
use grid_display::ColorMatrix;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colorizer {
    pub live: Color32,
    pub dead: Color32,
    /// Swap the live and dead colors.
    pub invert: bool,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::monochrome(false)
    }
}

impl Colorizer {
    /// Black live cells on white, or the reverse when `invert` is set.
    pub fn monochrome(invert: bool) -> Self {
        Self {
            live: Color32::BLACK,
            dead: Color32::WHITE,
            invert,
        }
    }

    pub fn color(&self, alive: bool) -> Color32 {
        if alive != self.invert { self.live } else { self.dead }
    }

    pub fn colorize(&self, grid: &CellGrid<bool>) -> ColorMatrix {
        (0..grid.rows())
            .map(|i| {
                (0..grid.cols())
                    .map(|j| Some(self.color(grid[(i, j)])))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochrome_and_invert() {
        let grid = CellGrid::from_rows(vec![vec![true, false]]).unwrap();
        let plain = Colorizer::default().colorize(&grid);
        assert_eq!(plain, vec![vec![Some(Color32::BLACK), Some(Color32::WHITE)]]);

        let inverted = Colorizer::monochrome(true).colorize(&grid);
        assert_eq!(inverted, vec![vec![Some(Color32::WHITE), Some(Color32::BLACK)]]);
    }

    #[test]
    fn test_shape_matches_grid() {
        let grid = CellGrid::blank(3, 0, false);
        assert_eq!(Colorizer::default().colorize(&grid), vec![Vec::new(); 3]);
    }
}
