use crate::color::Color;

/// CPU raster surface - row-major RGBA8 pixel buffer.
///
/// All drawing primitives clip silently at the canvas bounds; pixels outside
/// the canvas are simply not written.
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a new canvas with dimensions, initially all zero (transparent black).
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * 4;
        Self {
            pixels: vec![0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA bytes of a single pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Clear the whole canvas to a color.
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(bytemuck::bytes_of(&color));
        }
    }

    /// Set a single pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(bytemuck::bytes_of(&color));
    }

    /// Fill a corner-anchored rectangle: `(x, y)` is the top-left pixel.
    ///
    /// The fill range is clamped to the canvas intersection in i64, so sizes
    /// up to `u32::MAX` clip instead of wrapping.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px as i32, py as i32, color);
            }
        }
    }

    /// Fill a circle centered on `(cx, cy)` using a squared-distance test.
    ///
    /// The bounding box is clamped to the canvas and the distance test runs
    /// in i64, so radii up to `u32::MAX` clip instead of overflowing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let r = radius as i64;
        let r_sq = r * r;
        let (cx, cy) = (cx as i64, cy as i64);

        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(self.width as i64 - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(self.height as i64 - 1);

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px - cx;
                let dy = py - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(px as i32, py as i32, color);
                }
            }
        }
    }

    /// Fill a polygon with an even-odd scanline fill.
    ///
    /// Vertices are absolute canvas coordinates; fewer than 3 vertices draw
    /// nothing. Each edge spans the half-open scanline range
    /// `[min(y0, y1), max(y0, y1))` so shared vertices are counted once.
    pub fn fill_polygon(&mut self, vertices: &[(i32, i32)], color: Color) {
        if vertices.len() < 3 {
            return;
        }

        let (min_y, max_y) = vertices
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v.1), hi.max(v.1)));
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        let mut crossings: Vec<i32> = Vec::with_capacity(vertices.len());
        for y in min_y..=max_y {
            crossings.clear();
            for i in 0..vertices.len() {
                let (x0, y0) = vertices[i];
                let (x1, y1) = vertices[(i + 1) % vertices.len()];
                if y0 == y1 {
                    continue;
                }
                if y >= y0.min(y1) && y < y0.max(y1) {
                    let t = (y - y0) as f64 / (y1 - y0) as f64;
                    crossings.push((x0 as f64 + t * (x1 - x0) as f64).round() as i32);
                }
            }
            crossings.sort_unstable();
            for span in crossings.chunks_exact(2) {
                for x in span[0]..=span[1] {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}
