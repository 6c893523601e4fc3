// surface.rs - Paint targets a SurfaceMapper can draw onto

use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use std::ops::Range;

/// A fixed-size pixel area with a position on screen.
///
/// Coordinates passed to the paint methods are surface-local pixels, with the
/// origin in the top left corner.
pub trait Surface {
    /// Size in pixels.
    fn size(&self) -> Vec2;
    /// Changes the size. Contents afterwards are unspecified; callers repaint.
    fn resize(&mut self, size: Vec2);
    /// Screen position of the top left corner, used to translate pointer
    /// coordinates into surface-local ones.
    fn offset(&self) -> Pos2;

    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn clear_rect(&mut self, rect: Rect);
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32);

    fn clear(&mut self) {
        let all = Rect::from_min_size(Pos2::ZERO, self.size());
        self.clear_rect(all);
    }
}

/// In-memory RGBA surface.
///
/// A pixel belongs to a rectangle when the pixel's center lies inside it
/// (min edges inclusive, max edges exclusive), so adjacent cells tile without
/// gaps or overlap. Cleared pixels are fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
    offset: Pos2,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            pixels: vec![Color32::TRANSPARENT; width * height],
            offset: Pos2::ZERO,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    /// Moves the surface on screen.
    pub fn set_offset(&mut self, offset: Pos2) {
        self.offset = offset;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Snapshot for uploading as an egui texture.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self.pixels.clone(),
        }
    }

    fn paint(&mut self, rect: Rect, color: Color32) {
        let xs = covered(rect.min.x, rect.max.x, self.width);
        for y in covered(rect.min.y, rect.max.y, self.height) {
            let row = y * self.width;
            self.pixels[row + xs.start..row + xs.end].fill(color);
        }
    }

    fn plot(&mut self, x: isize, y: isize, color: Color32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }
}

/// Pixel indices whose centers fall in `[lo, hi)`, clipped to `0..limit`.
fn covered(lo: f32, hi: f32, limit: usize) -> Range<usize> {
    let clip = |v: f32| (v - 0.5).ceil().clamp(0.0, limit as f32) as usize;
    let (start, end) = (clip(lo), clip(hi));
    start..end.max(start)
}

impl Surface for PixelSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn resize(&mut self, size: Vec2) {
        let width = size.x.round().max(1.0) as usize;
        let height = size.y.round().max(1.0) as usize;
        *self = Self {
            offset: self.offset,
            ..Self::new(width, height)
        };
    }

    fn offset(&self) -> Pos2 {
        self.offset
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.paint(rect, color);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.paint(rect, Color32::TRANSPARENT);
    }

    /// One-pixel Bresenham line between the pixels containing `from` and `to`.
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        let (mut x, mut y) = (from.x.floor() as isize, from.y.floor() as isize);
        let (x1, y1) = (to.x.floor() as isize, to.y.floor() as isize);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_adjacent_rects_tile_exactly() {
        let mut s = PixelSurface::new(10, 1);
        s.fill_rect(Rect::from_min_max(pos2(0.0, 0.0), pos2(3.3, 1.0)), Color32::RED);
        s.fill_rect(Rect::from_min_max(pos2(3.3, 0.0), pos2(6.6, 1.0)), Color32::GREEN);
        s.fill_rect(Rect::from_min_max(pos2(6.6, 0.0), pos2(10.0, 1.0)), Color32::BLUE);
        let row: Vec<_> = (0..10).map(|x| s.pixel(x, 0).unwrap()).collect();
        assert_eq!(&row[..3], &[Color32::RED; 3]);
        // Pixel 6 has its center at 6.5, inside [3.3, 6.6).
        assert_eq!(&row[3..7], &[Color32::GREEN; 4]);
        assert_eq!(&row[7..], &[Color32::BLUE; 3]);
    }

    #[test]
    fn test_rect_is_clipped() {
        let mut s = PixelSurface::new(4, 4);
        s.fill_rect(Rect::from_min_max(pos2(-5.0, 2.0), pos2(50.0, 50.0)), Color32::WHITE);
        assert_eq!(s.pixel(0, 1), Some(Color32::TRANSPARENT));
        assert_eq!(s.pixel(0, 2), Some(Color32::WHITE));
        assert_eq!(s.pixel(3, 3), Some(Color32::WHITE));
        s.clear();
        assert!(s.pixels().iter().all(|&p| p == Color32::TRANSPARENT));
    }

    #[test]
    fn test_lines() {
        let mut s = PixelSurface::new(5, 5);
        s.draw_line(pos2(0.0, 2.0), pos2(5.0, 2.0), Color32::GRAY);
        assert!((0..5).all(|x| s.pixel(x, 2) == Some(Color32::GRAY)));
        assert_eq!(s.pixel(0, 1), Some(Color32::TRANSPARENT));

        s.draw_line(pos2(0.0, 0.0), pos2(4.0, 4.0), Color32::RED);
        assert!((0..5).all(|i| s.pixel(i, i) == Some(Color32::RED)));
    }

    #[test]
    fn test_resize_keeps_offset() {
        let mut s = PixelSurface::new(4, 4);
        s.set_offset(pos2(10.0, 20.0));
        s.resize(Vec2::new(7.4, 0.2));
        assert_eq!((s.width(), s.height()), (7, 1));
        assert_eq!(s.offset(), pos2(10.0, 20.0));
        assert_eq!(s.to_color_image().size, [7, 1]);
    }
}
