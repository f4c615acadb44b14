//! WindowView: maps the window bitmap into a terminal framebuffer.
//!
//! Each terminal cell shows two vertically stacked pixels with an upper half
//! block: the foreground paints the top pixel and the background the bottom.
//! A status line sits on the row below the window.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Bitmap;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PIXELS_PER_ROW;

const UPPER_HALF: char = '\u{2580}';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowView {
    /// Used below an odd last pixel row and around the window.
    background: Rgb,
    status_style: CellStyle,
}

impl Default for WindowView {
    fn default() -> Self {
        Self::new(Rgb::new(0, 0, 0))
    }
}

impl WindowView {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            status_style: CellStyle::colors(Rgb::new(220, 220, 220), background),
        }
    }

    /// Terminal size needed to show `window` plus the status line.
    pub fn required_size(window: &Bitmap) -> Viewport {
        Viewport::new(window.width(), window_rows(window).saturating_add(1))
    }

    /// Render the window and status line into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport; anything outside it is
    /// clipped.
    pub fn render_into(
        &self,
        window: &Bitmap,
        status: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: self.status_style,
        });

        let rows = window_rows(window);
        let cols = window.width().min(viewport.width);
        for row in 0..rows.min(viewport.height) {
            let top_y = row as i32 * PIXELS_PER_ROW as i32;
            for col in 0..cols {
                let x = col as i32;
                let top = window.get(x, top_y).unwrap_or(self.background);
                let bottom = window.get(x, top_y + 1).unwrap_or(self.background);
                fb.put_char(col, row, UPPER_HALF, CellStyle::colors(top, bottom));
            }
        }

        if rows < viewport.height {
            fb.put_str(0, rows, status, self.status_style);
        }
    }
}

fn window_rows(window: &Bitmap) -> u16 {
    window.height().div_ceil(PIXELS_PER_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color;

    #[test]
    fn two_pixel_rows_share_a_cell() {
        let mut window = Bitmap::new(2, 4, color::BLACK);
        window.set(0, 0, color::RED);
        window.set(0, 1, color::BLUE);

        let mut fb = FrameBuffer::new(0, 0);
        WindowView::default().render_into(&window, "", Viewport::new(2, 3), &mut fb);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, UPPER_HALF);
        assert_eq!(cell.style.fg, color::RED);
        assert_eq!(cell.style.bg, color::BLUE);
        assert_eq!(fb.get(1, 1).unwrap().style.fg, color::BLACK);
    }

    #[test]
    fn odd_height_pads_bottom_with_background() {
        let window = Bitmap::new(1, 3, color::GREEN);
        let view = WindowView::new(color::GREY);
        assert_eq!(WindowView::required_size(&window), Viewport::new(1, 3));

        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&window, "", Viewport::new(1, 3), &mut fb);
        let cell = fb.get(0, 1).unwrap();
        assert_eq!(cell.style.fg, color::GREEN);
        assert_eq!(cell.style.bg, color::GREY);
    }

    #[test]
    fn status_line_goes_below_window() {
        let window = Bitmap::new(4, 2, color::WHITE);
        let mut fb = FrameBuffer::new(0, 0);
        WindowView::default().render_into(&window, "ok", Viewport::new(6, 3), &mut fb);
        assert_eq!(fb.get(0, 1).unwrap().ch, 'o');
        assert_eq!(fb.get(1, 1).unwrap().ch, 'k');
        assert_eq!(fb.get(5, 0).unwrap().ch, ' ');
    }

    #[test]
    fn small_viewport_clips() {
        let window = Bitmap::new(10, 10, color::WHITE);
        let mut fb = FrameBuffer::new(0, 0);
        WindowView::default().render_into(&window, "status", Viewport::new(3, 2), &mut fb);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 2);
        assert!(fb.cells().iter().all(|c| c.ch == UPPER_HALF));
    }
}
