//! Panels: offscreen surfaces composited onto a parent.
//!
//! A panel owns a bitmap sized to its rect. Every frame it is repainted
//! (`update`) and blitted onto a target (`draw`). The target may itself be
//! another panel's bitmap, which gives a shallow compositing tree:
//! Icon -> Interface -> window.

use crate::bitmap::Bitmap;
use crate::types::{Point, Rect, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    image: Bitmap,
    rect: Rect,
    background: Rgb,
}

impl Panel {
    pub fn new(rect: Rect, background: Rgb) -> Self {
        Self {
            image: Bitmap::new(rect.w, rect.h, background),
            rect,
            background,
        }
    }

    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut Bitmap {
        &mut self.image
    }

    /// Placement within the parent surface.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move the panel. The size is fixed at construction.
    pub fn move_to(&mut self, origin: Point) {
        self.rect.x = origin.x;
        self.rect.y = origin.y;
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Default repaint: clear to the background color.
    pub fn clear(&mut self) {
        self.image.fill(self.background);
    }

    /// Blit the current image onto `target` at the panel's position.
    pub fn blit_onto(&self, target: &mut Bitmap) {
        target.blit(&self.image, self.rect.x, self.rect.y);
    }
}

/// Capability shared by every compositable widget.
///
/// `Context` is whatever the widget borrows to repaint itself: nothing for
/// the map, the mirrored bitmap for an icon, the tile source for the side
/// panel.
pub trait Drawable {
    type Context<'a>;

    fn panel(&self) -> &Panel;

    /// Repaint the panel's bitmap from current state.
    fn update(&mut self, ctx: Self::Context<'_>);

    /// Optionally repaint, then composite onto `target`.
    fn draw(&mut self, target: &mut Bitmap, ctx: Self::Context<'_>, update: bool) {
        if update {
            self.update(ctx);
        }
        self.panel().blit_onto(target);
    }
}

impl Drawable for Panel {
    type Context<'a> = ();

    fn panel(&self) -> &Panel {
        self
    }

    fn update(&mut self, _ctx: ()) {
        self.clear();
    }
}
