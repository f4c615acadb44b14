//! Interface: the side panel showing the selected tile.
//!
//! The panel does not own tiles. It remembers the selection as a [`TileId`]
//! into the map and resolves it on every update, so a new selection shows up
//! on the next frame without rebuilding the icon.

use crate::icon::Icon;
use crate::map::{Map, TileId};
use crate::panel::{Drawable, Panel};
use crate::tile::Tile;
use crate::types::{Point, Rect, Rgb};

/// Icon placement and border inside the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    /// Icon centre as a fraction of the panel width.
    pub x_ratio: f32,
    /// Icon centre as a fraction of the panel height.
    pub y_ratio: f32,
    pub border: u16,
}

impl Default for IconLayout {
    fn default() -> Self {
        Self {
            x_ratio: 0.5,
            y_ratio: 0.1,
            border: 1,
        }
    }
}

/// Colors used by the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceColors {
    pub background: Rgb,
    pub border: Rgb,
    pub icon_border: Rgb,
}

/// Where the interface looks up what to show.
#[derive(Debug, Clone, Copy)]
pub struct TileSource<'a> {
    pub map: &'a Map,
    /// Shown when nothing is selected or the selection is stale.
    pub placeholder: &'a Tile,
}

impl<'a> TileSource<'a> {
    pub fn resolve(&self, selected: Option<TileId>) -> &'a Tile {
        selected
            .and_then(|id| self.map.tile(id))
            .unwrap_or(self.placeholder)
    }
}

#[derive(Debug, Clone)]
pub struct Interface {
    panel: Panel,
    icon: Icon,
    selected: Option<TileId>,
    /// Width of the frame around the whole panel.
    border: u16,
    border_color: Rgb,
}

impl Interface {
    /// `border` frames the whole panel; `layout.border` frames the icon.
    pub fn new(
        rect: Rect,
        tile_size: u16,
        border: u16,
        layout: IconLayout,
        colors: InterfaceColors,
    ) -> Self {
        let mut icon = Icon::new(
            Rect::new(0, 0, tile_size, tile_size),
            layout.border,
            colors.icon_border,
            true,
            colors.background,
        );
        let icon_rect = icon.rect();
        icon.move_to(Point::new(
            centred(rect.w, icon_rect.w, layout.x_ratio),
            centred(rect.h, icon_rect.h, layout.y_ratio),
        ));

        Self {
            panel: Panel::new(rect, colors.background),
            icon,
            selected: None,
            border,
            border_color: colors.border,
        }
    }

    pub fn rect(&self) -> Rect {
        self.panel.rect()
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<TileId>) {
        self.selected = id;
    }
}

impl Drawable for Interface {
    type Context<'a> = TileSource<'a>;

    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn update(&mut self, source: TileSource<'_>) {
        self.panel.clear();
        let rect = self.panel.image().rect();
        self.panel
            .image_mut()
            .stroke_rect(rect, self.border, self.border_color);

        let tile = source.resolve(self.selected);
        self.icon
            .draw(self.panel.image_mut(), Some(tile.image()), true);
    }
}

/// Top-left offset that puts an `inner`-sized box's centre at
/// `outer * ratio`, clamped so the box stays inside.
fn centred(outer: u16, inner: u16, ratio: f32) -> i32 {
    let centre = (outer as f32 * ratio.clamp(0.0, 1.0)).round() as i32;
    let max = outer.saturating_sub(inner) as i32;
    (centre - inner as i32 / 2).clamp(0, max)
}
