//! Owned RGB pixel surface.
//!
//! This is the drawing primitive every panel and tile is built on: fill,
//! rectangle fill/stroke, colour-keyed blit and nearest-neighbour scaling.
//! All writes are clipped to the surface; nothing here panics on
//! out-of-range coordinates.

use crate::types::{Rect, Rgb};

/// 2D surface of RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
    /// Pixels of this color are skipped when this bitmap is blitted.
    color_key: Option<Rgb>,
}

impl Bitmap {
    pub fn new(width: u16, height: u16, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
            color_key: None,
        }
    }

    /// Build from row-major pixels. Returns `None` if the length does not
    /// match `width * height`.
    pub fn from_pixels(width: u16, height: u16, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
            color_key: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Bounds of the surface at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn color_key(&self) -> Option<Rgb> {
        self.color_key
    }

    pub fn set_color_key(&mut self, key: Option<Rgb>) {
        self.color_key = key;
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    /// Stroke the inside edge of `rect` with a border `width` pixels thick.
    ///
    /// A zero width draws nothing. A width covering the whole rect fills it.
    pub fn stroke_rect(&mut self, rect: Rect, width: u16, color: Rgb) {
        if width == 0 {
            return;
        }
        let bw = width.min(rect.w);
        let bh = width.min(rect.h);
        // Top and bottom bands.
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, bh), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - bh as i32, rect.w, bh), color);
        // Left and right bands.
        self.fill_rect(Rect::new(rect.x, rect.y, bw, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - bw as i32, rect.y, bw, rect.h), color);
    }

    /// Copy `src` onto this surface with its top-left corner at `(x, y)`.
    ///
    /// Source pixels equal to `src`'s color key are skipped. The copy is
    /// clipped to this surface.
    pub fn blit(&mut self, src: &Bitmap, x: i32, y: i32) {
        let key = src.color_key;
        for sy in 0..src.height as i32 {
            let ty = y + sy;
            if ty < 0 || ty >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width as i32 {
                let Some(color) = src.get(sx, sy) else {
                    continue;
                };
                if key == Some(color) {
                    continue;
                }
                self.set(x + sx, ty, color);
            }
        }
    }

    /// Nearest-neighbour resample to `width x height`. The color key carries
    /// over.
    pub fn scaled(&self, width: u16, height: u16) -> Bitmap {
        let mut out = Bitmap::new(width, height, Rgb::default());
        out.color_key = self.color_key;
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height as usize {
            let sy = y * self.height as usize / height as usize;
            for x in 0..width as usize {
                let sx = x * self.width as usize / width as usize;
                out.pixels[y * width as usize + x] = self.pixels[sy * self.width as usize + sx];
            }
        }
        out
    }

    /// Overwrite this surface's pixels with `src`'s, keeping this surface's
    /// size. Pixels outside `src` keep their value. The color key is not
    /// consulted.
    pub fn copy_from(&mut self, src: &Bitmap) {
        let w = self.width.min(src.width) as usize;
        let h = self.height.min(src.height) as usize;
        for y in 0..h {
            let dst_row = y * self.width as usize;
            let src_row = y * src.width as usize;
            self.pixels[dst_row..dst_row + w].copy_from_slice(&src.pixels[src_row..src_row + w]);
        }
    }
}
