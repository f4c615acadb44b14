//! Map: a square grid of tiles drawn as one panel.
//!
//! Tiles are stored row-major. Tile `(row, col)` sits at
//! `(col * scale, row * scale)` in map-local space, so the map panel is
//! `size * scale` pixels on each side.
//!
//! # Hit-testing
//!
//! [`Map::pos_to_tile`] is a linear scan over the tiles in insertion order and
//! returns the first tile whose rect contains the point. Tiles never overlap
//! by construction; if they did, the first inserted would win. The scan is
//! O(size^2), which is fine for maps of a few hundred tiles queried once per
//! click.

use rand::Rng;

use crate::assets::AssetStore;
use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::panel::{Drawable, Panel};
use crate::tile::{Tile, TileArt, TileStyle};
use crate::types::{Point, Rect, TileVariant};

/// Index of a tile in its map's collection.
///
/// Ids stay valid until the map is rebuilt; they are not tied to a map
/// instance, so callers must not keep them across a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn row(self, size: u16) -> u16 {
        (self.0 / size.max(1) as usize) as u16
    }

    pub fn col(self, size: u16) -> u16 {
        (self.0 % size.max(1) as usize) as u16
    }
}

#[derive(Debug, Clone)]
pub struct Map {
    panel: Panel,
    tiles: Vec<Tile>,
    size: u16,
    scale: u16,
    /// Decoded art shared by every tile and by `paint`.
    art: TileArt,
}

impl Map {
    /// Build a map with every cell drawn uniformly from the four terrain
    /// variants.
    pub fn generate<R: Rng>(
        origin: Point,
        size: u16,
        scale: u16,
        style: TileStyle,
        assets: &dyn AssetStore,
        rng: &mut R,
    ) -> Result<Self> {
        let map = Self::build(origin, size, scale, style, assets, || {
            TileVariant::TERRAIN[rng.gen_range(0..TileVariant::TERRAIN.len())]
        })?;
        tracing::info!(size, scale, tiles = map.len(), "generated random map");
        Ok(map)
    }

    /// Build a map of blank tiles in the default style. Deterministic,
    /// useful for fixtures.
    pub fn blank(origin: Point, size: u16, scale: u16, assets: &dyn AssetStore) -> Result<Self> {
        Self::build(origin, size, scale, TileStyle::default(), assets, || {
            TileVariant::Blank
        })
    }

    /// Build a map whose variants come from `pick`, called once per cell in
    /// row-major order.
    pub fn build(
        origin: Point,
        size: u16,
        scale: u16,
        style: TileStyle,
        assets: &dyn AssetStore,
        mut pick: impl FnMut() -> TileVariant,
    ) -> Result<Self> {
        let side = size.saturating_mul(scale);
        let panel = Panel::new(Rect::at(origin, side, side), style.background);
        let mut art = TileArt::new(scale, style.color_key);

        let mut tiles = Vec::with_capacity(size as usize * size as usize);
        for row in 0..size {
            for col in 0..size {
                let mut tile = art.tile(pick(), assets)?;
                tile.rect.x = col as i32 * scale as i32;
                tile.rect.y = row as i32 * scale as i32;
                tiles.push(tile);
            }
        }

        Ok(Self {
            panel,
            tiles,
            size,
            scale,
            art,
        })
    }

    /// Tiles along one side.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Tile side in pixels.
    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Placement of the map in window space.
    pub fn rect(&self) -> Rect {
        self.panel.rect()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in insertion (row-major) order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.0)
    }

    pub fn id_at(&self, row: u16, col: u16) -> Option<TileId> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(TileId(row as usize * self.size as usize + col as usize))
    }

    pub fn tile_at(&self, row: u16, col: u16) -> Option<&Tile> {
        self.id_at(row, col).and_then(|id| self.tile(id))
    }

    /// Resolve a point in parent (window) coordinates to the tile under it.
    pub fn pos_to_tile(&self, x: i32, y: i32) -> Option<TileId> {
        let origin = self.panel.rect().origin();
        let (lx, ly) = (x - origin.x, y - origin.y);
        self.tiles
            .iter()
            .position(|tile| tile.rect.contains(lx, ly))
            .map(TileId)
    }

    /// Repaint one tile with a new variant. Returns `Ok(false)` for an id
    /// that is not in this map.
    pub fn paint(
        &mut self,
        id: TileId,
        variant: TileVariant,
        assets: &dyn AssetStore,
    ) -> Result<bool> {
        match self.tiles.get_mut(id.0) {
            Some(tile) => {
                self.art.repaint(tile, variant, assets)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Drawable for Map {
    type Context<'a> = ();

    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn update(&mut self, _ctx: ()) {
        self.panel.clear();
        let image: &mut Bitmap = self.panel.image_mut();
        for tile in &self.tiles {
            tile.draw(image);
        }
    }
}
