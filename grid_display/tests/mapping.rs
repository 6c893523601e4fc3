//! Property tests for pixel <-> cell mapping.
//!
//! 1. The center of every cell's bounds maps back to that cell.
//! 2. rescale(f) then rescale(1/f) restores the surface size.
//! 3. Points off the surface never map to a cell.
//! 4. Points on the surface always map to a cell inside the layout.

use egui::{Vec2, pos2};
use grid_display::{PixelSurface, Surface, SurfaceMapper};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1usize..60, 1usize..60, 1usize..800, 1usize..800)
}

/// Largest f32 strictly less than a positive `v`.
fn just_below(v: f32) -> f32 {
    f32::from_bits(v.to_bits() - 1)
}

proptest! {
    #[test]
    fn cell_centers_round_trip(
        (rows, cols, w, h) in layout_strategy(),
        offset_x in -500.0f32..500.0,
        offset_y in -500.0f32..500.0,
    ) {
        let mut surface = PixelSurface::new(w, h);
        surface.set_offset(pos2(offset_x, offset_y));
        let mapper = SurfaceMapper::new(rows, cols, surface);
        let offset = mapper.surface().offset().to_vec2();
        for i in 0..rows {
            for j in 0..cols {
                let center = mapper.cell_bounds((i, j)).center() + offset;
                prop_assert_eq!(mapper.point_to_cell(center), Some((i, j)));
            }
        }
    }

    #[test]
    fn rescale_round_trip((rows, cols, w, h) in layout_strategy(), factor in 0.05f32..20.0) {
        let mut mapper = SurfaceMapper::new(rows, cols, PixelSurface::new(w, h));
        let original = mapper.surface().size();
        mapper.rescale(factor).unwrap();
        mapper.rescale(1.0 / factor).unwrap();
        let size = mapper.surface().size();
        prop_assert!((size.x - original.x).abs() <= 1.0, "{:?} vs {:?}", size, original);
        prop_assert!((size.y - original.y).abs() <= 1.0, "{:?} vs {:?}", size, original);
        prop_assert_eq!(mapper.dimensions(), (rows, cols));
    }

    #[test]
    fn off_surface_points_are_absent((rows, cols, w, h) in layout_strategy(), dx in 0.0f32..100.0, dy in 0.0f32..100.0) {
        let mapper = SurfaceMapper::new(rows, cols, PixelSurface::new(w, h));
        let size = mapper.surface().size();
        prop_assert_eq!(mapper.point_to_cell(pos2(-dx - 0.01, dy)), None);
        prop_assert_eq!(mapper.point_to_cell(pos2(size.x + dx, dy)), None);
        prop_assert_eq!(mapper.point_to_cell(pos2(dx, size.y + dy)), None);
    }

    #[test]
    fn on_surface_points_stay_in_layout(
        (rows, cols, w, h) in layout_strategy(),
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
    ) {
        let mapper = SurfaceMapper::new(rows, cols, PixelSurface::new(w, h));
        let size = mapper.surface().size();
        // Nudge toward the far edge as much as f32 allows.
        let x = (fx * size.x).min(just_below(size.x));
        let y = (fy * size.y).min(just_below(size.y));
        let (i, j) = mapper.point_to_cell(pos2(x, y)).unwrap();
        prop_assert!(i < rows && j < cols, "({}, {}) outside {}x{}", i, j, rows, cols);
    }
}

#[test]
fn far_edge_maps_to_last_cell() {
    let mapper = SurfaceMapper::new(3, 3, PixelSurface::new(100, 100));
    assert_eq!(mapper.point_to_cell(pos2(50.0, 99.99999)), Some((2, 1)));
    assert_eq!(mapper.point_to_cell(pos2(99.99999, 50.0)), Some((1, 2)));
}

#[test]
fn cell_size_tracks_surface() {
    let mut mapper = SurfaceMapper::new(3, 4, PixelSurface::new(120, 90));
    assert_eq!(mapper.cell_size(), Vec2::new(30.0, 30.0));
    mapper.rescale(2.0).unwrap();
    assert_eq!(mapper.cell_size(), Vec2::new(60.0, 60.0));
}
