//! Icon: a bordered image widget.

use crate::bitmap::Bitmap;
use crate::panel::{Drawable, Panel};
use crate::types::{Rect, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    panel: Panel,
    /// Copy of the source image, refreshed on every update.
    mirror: Bitmap,
    border: u16,
    border_color: Rgb,
    outer: bool,
}

impl Icon {
    /// `rect` is the size of the mirrored image. With `outer`, the panel
    /// grows by `border` on width and height so the border sits outside the
    /// image's origin instead of on top of it.
    pub fn new(rect: Rect, border: u16, border_color: Rgb, outer: bool, background: Rgb) -> Self {
        let mut panel_rect = rect;
        if outer {
            panel_rect.w = rect.w.saturating_add(border);
            panel_rect.h = rect.h.saturating_add(border);
        }
        Self {
            panel: Panel::new(panel_rect, background),
            mirror: Bitmap::new(rect.w, rect.h, background),
            border,
            border_color,
            outer,
        }
    }

    pub fn rect(&self) -> Rect {
        self.panel.rect()
    }

    pub fn border(&self) -> u16 {
        self.border
    }

    /// The image shown inside the border as of the last update.
    pub fn mirror(&self) -> &Bitmap {
        &self.mirror
    }

    /// Where the mirrored image lands inside the icon.
    pub fn image_offset(&self) -> (i32, i32) {
        if self.outer {
            (self.border as i32, self.border as i32)
        } else {
            (0, 0)
        }
    }

    pub(crate) fn move_to(&mut self, origin: crate::types::Point) {
        self.panel.move_to(origin);
    }
}

impl Drawable for Icon {
    /// The bitmap to mirror, or `None` to show an empty icon.
    type Context<'a> = Option<&'a Bitmap>;

    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn update(&mut self, source: Option<&Bitmap>) {
        let background = self.panel.background();
        self.panel.clear();

        self.mirror.fill(background);
        self.mirror.set_color_key(None);
        if let Some(src) = source {
            self.mirror.copy_from(src);
            self.mirror.set_color_key(src.color_key());
        }

        let (ox, oy) = self.image_offset();
        let rect = self.panel.image().rect();
        let image = self.panel.image_mut();
        image.blit(&self.mirror, ox, oy);
        image.stroke_rect(rect, self.border, self.border_color);
    }
}
