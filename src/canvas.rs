//! Square RGBA drawing surface used to compose launcher icons.
//!
//! Only flat fills are supported: every fill overwrites the pixels it covers,
//! there is no blending and no anti-aliasing at shape edges.

use image::{Rgba, RgbaImage};

/// Brand color used for the icon background (#6750A4)
pub const PRIMARY: Rgba<u8> = Rgba([103, 80, 164, 255]);

/// Fill color for the monogram strokes
pub const GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A square raster buffer that icons are painted onto before being saved.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Allocate a fully transparent `size`x`size` canvas
    pub fn new(size: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(size, size, TRANSPARENT),
        }
    }

    pub fn size(&self) -> u32 {
        self.buffer.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.buffer.get_pixel(x, y)
    }

    /// Fill the rectangle spanned by `(x0, y0)` and `(x1, y1)`.
    ///
    /// Both corners are inclusive, the same bounding box convention most 2D
    /// drawing APIs use, so `(0, 0)`-`(size, size)` covers the whole canvas.
    /// Anything past the canvas edge is clipped.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
        let size = self.size();
        if size == 0 || x0 >= size || y0 >= size || x0 > x1 || y0 > y1 {
            return;
        }
        let x_end = x1.min(size - 1);
        let y_end = y1.min(size - 1);

        for y in y0..=y_end {
            for x in x0..=x_end {
                self.buffer.put_pixel(x, y, color);
            }
        }
    }

    /// Fill the ellipse inscribed in the canvas bounds.
    ///
    /// The canvas is square so this is a circle of radius `size / 2` centred
    /// on `(size / 2, size / 2)`; a pixel is painted when its coordinate lies
    /// on or inside that circle.
    pub fn fill_ellipse(&mut self, color: Rgba<u8>) {
        let size = self.size();
        let center = size as f32 / 2.0;
        let radius_sq = center * center;

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                if dx * dx + dy * dy <= radius_sq {
                    self.buffer.put_pixel(x, y, color);
                }
            }
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(16);
        assert_eq!(canvas.size(), 16);
        assert_eq!(canvas.as_image().height(), 16);
        assert!(canvas.as_image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_is_inclusive() {
        let mut canvas = Canvas::new(10);
        canvas.fill_rect(2, 3, 4, 5, GLYPH);

        let painted = canvas.as_image().pixels().filter(|p| **p == GLYPH).count();
        assert_eq!(painted, 3 * 3);
        assert_eq!(canvas.pixel(2, 3), GLYPH);
        assert_eq!(canvas.pixel(4, 5), GLYPH);
        assert_eq!(canvas.pixel(5, 5), TRANSPARENT);
        assert_eq!(canvas.pixel(4, 6), TRANSPARENT);
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(8);
        canvas.fill_rect(0, 0, 8, 8, PRIMARY);
        assert!(canvas.as_image().pixels().all(|p| *p == PRIMARY));

        // Fully outside: nothing to draw
        let mut canvas = Canvas::new(8);
        canvas.fill_rect(9, 9, 20, 20, PRIMARY);
        assert!(canvas.as_image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_overwrites() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rect(0, 0, 4, 4, PRIMARY);
        canvas.fill_rect(1, 1, 1, 1, GLYPH);
        assert_eq!(canvas.pixel(1, 1), GLYPH);
        assert_eq!(canvas.pixel(0, 0), PRIMARY);
    }

    #[test]
    fn test_fill_ellipse_leaves_corners_clear() {
        for size in [8, 48, 192] {
            let mut canvas = Canvas::new(size);
            canvas.fill_ellipse(PRIMARY);

            let last = size - 1;
            assert_eq!(canvas.pixel(size / 2, size / 2), PRIMARY);
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(canvas.pixel(x, y), TRANSPARENT, "corner ({x}, {y}) at {size}");
            }
            // Edge midpoints touch the circle
            assert_eq!(canvas.pixel(size / 2, 0), PRIMARY);
            assert_eq!(canvas.pixel(0, size / 2), PRIMARY);
        }
    }
}
