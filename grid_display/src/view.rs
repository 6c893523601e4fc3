// view.rs - SurfaceMapper plus the last rendered matrix

use egui::Pos2;
use log::{debug, warn};

use crate::RenderError;
use crate::mapper::{CellIndex, ColorMatrix, SurfaceMapper};
use crate::surface::Surface;

/// Keeps the most recently rendered color matrix so that gridline toggles
/// and rescales can repaint without the caller supplying the data again.
#[derive(Debug)]
pub struct GridView<S> {
    mapper: SurfaceMapper<S>,
    cache: Option<ColorMatrix>,
    grid_lines: bool,
}

impl<S: Surface> GridView<S> {
    pub fn new(rows: usize, cols: usize, surface: S, grid_lines: bool) -> Self {
        Self {
            mapper: SurfaceMapper::new(rows, cols, surface),
            cache: None,
            grid_lines,
        }
    }

    /// Rebinds to new logical dimensions and drops the cached matrix, which
    /// no longer fits.
    pub fn reinit(&mut self, rows: usize, cols: usize) {
        self.mapper.reinit(rows, cols);
        self.cache = None;
    }

    pub fn mapper(&self) -> &SurfaceMapper<S> {
        &self.mapper
    }
    pub fn mapper_mut(&mut self) -> &mut SurfaceMapper<S> {
        &mut self.mapper
    }
    pub fn surface(&self) -> &S {
        self.mapper.surface()
    }
    pub fn surface_mut(&mut self) -> &mut S {
        self.mapper.surface_mut()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.mapper.dimensions()
    }

    /// The matrix last passed to [`render`](Self::render), if any.
    pub fn cached(&self) -> Option<&ColorMatrix> {
        self.cache.as_ref()
    }

    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    /// Renders `matrix` with the current gridline setting and caches it.
    pub fn render(&mut self, matrix: ColorMatrix) -> Result<(), RenderError> {
        let grid_lines = self.grid_lines;
        self.render_with(matrix, grid_lines)
    }

    /// Renders `matrix`, choosing gridlines explicitly. The choice sticks for
    /// later re-renders.
    pub fn render_with(&mut self, matrix: ColorMatrix, grid_lines: bool) -> Result<(), RenderError> {
        self.mapper.render_all(&matrix, grid_lines)?;
        self.grid_lines = grid_lines;
        self.cache = Some(matrix);
        Ok(())
    }

    pub fn add_grid_lines(&mut self) {
        self.set_grid_lines(true);
    }

    pub fn remove_grid_lines(&mut self) {
        self.set_grid_lines(false);
    }

    /// Flips gridlines and repaints the cached matrix, if there is one.
    /// Cell colors are never touched.
    pub fn set_grid_lines(&mut self, grid_lines: bool) {
        self.grid_lines = grid_lines;
        debug!("gridlines {}", if grid_lines { "on" } else { "off" });
        self.redraw();
    }

    /// Resizes the surface and repaints the cached matrix at the new size.
    pub fn rescale(&mut self, factor: f32) -> Result<(), RenderError> {
        self.mapper.rescale(factor)?;
        self.redraw();
        Ok(())
    }

    /// Like [`rescale`](Self::rescale) but with an absolute scale relative to
    /// the size the layout was bound at.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), RenderError> {
        self.mapper.set_scale(scale)?;
        self.redraw();
        Ok(())
    }

    pub fn cell_from_point(&self, point: Pos2) -> Option<CellIndex> {
        self.mapper.point_to_cell(point)
    }

    fn redraw(&mut self) {
        if let Some(matrix) = &self.cache {
            // Only fails if the mapper was rebound through mapper_mut().
            if let Err(e) = self.mapper.render_all(matrix, self.grid_lines) {
                warn!("cached matrix no longer fits the layout: {}", e);
            }
        }
    }
}
