//! Offscreen alpha buffer that text is rasterized into.

/// 8-bit alpha buffer in device pixels.
///
/// Compositing is max-based: drawing never makes a pixel more transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`, zero outside the buffer.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Composite `alpha` onto a pixel. Out-of-bounds writes are ignored.
    pub fn blend(&mut self, x: i64, y: i64, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = self.data[idx].max(alpha);
    }

    /// Fill every pixel whose centre lies inside the rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, alpha: u8) {
        let x0 = (x - 0.5).ceil() as i64;
        let x1 = (x + w - 0.5).ceil() as i64;
        let y0 = (y - 0.5).ceil() as i64;
        let y1 = (y + h - 0.5).ceil() as i64;
        for py in y0.max(0)..y1.min(self.height as i64) {
            for px in x0.max(0)..x1.min(self.width as i64) {
                self.blend(px, py, alpha);
            }
        }
    }

    /// Composite a `mask_width x mask_height` alpha mask with its top-left at `(left, top)`.
    pub fn blit_mask(
        &mut self,
        left: i64,
        top: i64,
        mask_width: u32,
        mask_height: u32,
        mask: &[u8],
    ) {
        let mask_width = mask_width as usize;
        for (row, line) in mask.chunks(mask_width.max(1)).take(mask_height as usize).enumerate() {
            for (col, &alpha) in line.iter().enumerate() {
                if alpha > 0 {
                    self.blend(left + col as i64, top + row as i64, alpha);
                }
            }
        }
    }

    /// Number of pixels with alpha strictly above `threshold`.
    pub fn coverage(&self, threshold: u8) -> usize {
        self.data.iter().filter(|&&a| a > threshold).count()
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of pixels above `threshold`.
    pub fn ink_bounds(&self, threshold: u8) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.alpha(x, y) > threshold {
                    bounds = Some(match bounds {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        bounds
    }
}
