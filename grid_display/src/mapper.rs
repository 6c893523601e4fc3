// mapper.rs - Translation between a rows x cols layout and surface pixels

use egui::{Color32, Pos2, Rect, Vec2, pos2};
use log::{debug, warn};

use crate::RenderError;
use crate::surface::Surface;

/// Cell index as `(row, column)`.
pub type CellIndex = (usize, usize);

/// One color per cell, row-major; `None` leaves the cell transparent.
pub type ColorMatrix = Vec<Vec<Option<Color32>>>;

/// Binds a logical `rows x cols` layout to a surface.
///
/// Cell sizes are derived from the surface size independently on each axis,
/// so cells are not necessarily square. Cell `(i, j)` covers
/// `x in [j * w, (j + 1) * w)`, `y in [i * h, (i + 1) * h)`.
#[derive(Debug)]
pub struct SurfaceMapper<S> {
    rows: usize,
    cols: usize,
    surface: S,
    /// Surface size when the layout was bound; the baseline for rescaling.
    original_size: Vec2,
    /// Product of all rescale factors since binding.
    scale: f32,
    grid_lines: bool,
    line_color: Color32,
}

impl<S: Surface> SurfaceMapper<S> {
    pub fn new(rows: usize, cols: usize, surface: S) -> Self {
        let original_size = surface.size();
        debug!("bound {}x{} layout to {:?} surface", rows, cols, original_size);
        Self {
            rows,
            cols,
            surface,
            original_size,
            scale: 1.0,
            grid_lines: false,
            line_color: Color32::GRAY,
        }
    }

    /// Rebinds to new logical dimensions. The current surface size becomes
    /// the new rescale baseline.
    pub fn reinit(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.original_size = self.surface.size();
        self.scale = 1.0;
        debug!("rebound to {}x{} layout at {:?}", rows, cols, self.original_size);
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn original_size(&self) -> Vec2 {
        self.original_size
    }
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether the last full render drew gridlines.
    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    pub fn line_color(&self) -> Color32 {
        self.line_color
    }
    pub fn set_line_color(&mut self, color: Color32) {
        self.line_color = color;
    }

    /// Pixel width and height of one cell.
    pub fn cell_size(&self) -> Vec2 {
        let size = self.surface.size();
        Vec2::new(size.x / self.cols as f32, size.y / self.rows as f32)
    }

    /// Pixel rectangle of cell `(i, j)`.
    pub fn cell_bounds(&self, (i, j): CellIndex) -> Rect {
        let cell = self.cell_size();
        Rect::from_min_size(pos2(j as f32 * cell.x, i as f32 * cell.y), cell)
    }

    pub fn fill_cell(&mut self, cell: CellIndex, color: Color32) {
        let rect = self.cell_bounds(cell);
        self.surface.fill_rect(rect, color);
    }

    pub fn clear_cell(&mut self, cell: CellIndex) {
        let rect = self.cell_bounds(cell);
        self.surface.clear_rect(rect);
    }

    /// Cell under a screen-space point, or `None` if the point is off the
    /// surface.
    ///
    /// The result is a plain floor division and is not clamped further.
    pub fn point_to_cell(&self, point: Pos2) -> Option<CellIndex> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        let local = point - self.surface.offset();
        let size = self.surface.size();
        // Written so that NaN coordinates fall outside.
        let inside = local.x >= 0.0 && local.x < size.x && local.y >= 0.0 && local.y < size.y;
        if !inside {
            return None;
        }
        let cell = self.cell_size();
        // Rounding can push a point just inside the far edge onto index
        // `rows` or `cols`; the point is on the surface, so it belongs to the
        // last cell.
        Some((
            ((local.y / cell.y).floor() as usize).min(self.rows - 1),
            ((local.x / cell.x).floor() as usize).min(self.cols - 1),
        ))
    }

    /// Clears the surface and paints every cell of `matrix`, then optionally
    /// overlays one gridline per row and per column boundary.
    ///
    /// Nothing is painted if `matrix` does not have the bound shape.
    pub fn render_all(
        &mut self,
        matrix: &[Vec<Option<Color32>>],
        draw_grid_lines: bool,
    ) -> Result<(), RenderError> {
        check_shape(matrix, self.dimensions())?;

        self.surface.clear();
        for (i, row) in matrix.iter().enumerate() {
            for (j, color) in row.iter().enumerate() {
                match color {
                    Some(color) => self.fill_cell((i, j), *color),
                    None => self.clear_cell((i, j)),
                }
            }
        }
        if draw_grid_lines {
            self.draw_grid_lines();
        }
        self.grid_lines = draw_grid_lines;
        Ok(())
    }

    fn draw_grid_lines(&mut self) {
        let size = self.surface.size();
        let cell = self.cell_size();
        for i in 0..self.rows {
            let y = (i as f32 * cell.y).floor();
            self.surface
                .draw_line(pos2(0.0, y), pos2(size.x, y), self.line_color);
        }
        for j in 0..self.cols {
            let x = (j as f32 * cell.x).floor();
            self.surface
                .draw_line(pos2(x, 0.0), pos2(x, size.y), self.line_color);
        }
    }

    /// Multiplies the current scale by `factor` and resizes the surface to
    /// `original_size * scale`. Sizes are always derived from the baseline, so
    /// `rescale(f)` followed by `rescale(1.0 / f)` returns to the original.
    ///
    /// Rows and columns are unchanged and nothing is repainted.
    pub fn rescale(&mut self, factor: f32) -> Result<(), RenderError> {
        let scale = self.scale * factor;
        if !(factor.is_finite() && factor > 0.0 && scale.is_finite() && scale > 0.0) {
            warn!("rejected rescale by {}", factor);
            return Err(RenderError::InvalidScale(factor));
        }
        self.apply_scale(scale);
        Ok(())
    }

    /// Sets the scale relative to the baseline size directly.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), RenderError> {
        if !(scale.is_finite() && scale > 0.0) {
            warn!("rejected scale {}", scale);
            return Err(RenderError::InvalidScale(scale));
        }
        self.apply_scale(scale);
        Ok(())
    }

    fn apply_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.surface.resize(self.original_size * scale);
        debug!("surface rescaled to {:?} (x{})", self.surface.size(), scale);
    }
}

/// Checks that `matrix` is exactly `rows x cols`.
pub fn check_shape(
    matrix: &[Vec<Option<Color32>>],
    (rows, cols): (usize, usize),
) -> Result<(), RenderError> {
    let found_cols = matrix
        .iter()
        .map(Vec::len)
        .find(|&n| n != cols)
        .unwrap_or(cols);
    if matrix.len() != rows || found_cols != cols {
        warn!(
            "color matrix {}x{} does not fit {}x{} layout",
            matrix.len(),
            found_cols,
            rows,
            cols
        );
        return Err(RenderError::DimensionMismatch {
            expected: (rows, cols),
            found: (matrix.len(), found_cols),
        });
    }
    Ok(())
}
