//! Tile: one grid cell's variant, art and placement.

use std::collections::hash_map::{Entry, HashMap};

use crate::assets::AssetStore;
use crate::bitmap::Bitmap;
use crate::error::{BuilderError, Result};
use crate::types::{color, Rect, Rgb, TileVariant, VariantTag};

/// Colours a map and its tiles are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    /// Map panel fill, visible through keyed art.
    pub background: Rgb,
    /// Art colour treated as transparent when a tile is blitted.
    pub color_key: Rgb,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            background: color::BLACK,
            color_key: color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    variant: TileVariant,
    size: u16,
    color_key: Rgb,
    image: Bitmap,
    /// Placement in the owner's local space. Width/height equal `size`.
    pub rect: Rect,
}

impl Tile {
    /// Build a tile of `variant`, loading its art and scaling it to
    /// `size x size`. The tile starts at the origin and uses the default
    /// white colour key.
    pub fn new(variant: TileVariant, size: u16, assets: &dyn AssetStore) -> Result<Self> {
        TileArt::new(size, TileStyle::default().color_key).tile(variant, assets)
    }

    /// A blank ("unlogiced") tile.
    pub fn blank(size: u16, assets: &dyn AssetStore) -> Result<Self> {
        Self::new(TileVariant::Blank, size, assets)
    }

    /// Tile factory keyed by tag: `0`/`"field"`, `1`/`"water"`,
    /// `2`/`"mountain"`, `3`/`"forest"`.
    pub fn variant<'a>(
        tag: impl Into<VariantTag<'a>>,
        size: u16,
        assets: &dyn AssetStore,
    ) -> Result<Self> {
        let tag = tag.into();
        let variant =
            TileVariant::from_tag(tag).ok_or_else(|| BuilderError::UnknownVariant(tag.to_string()))?;
        Self::new(variant, size, assets)
    }

    pub fn tile_variant(&self) -> TileVariant {
        self.variant
    }

    /// Resource name of the tile's art, e.g. `"water"`.
    pub fn kind(&self) -> &'static str {
        self.variant.as_str()
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn color_key(&self) -> Rgb {
        self.color_key
    }

    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    /// Swap the variant and art in place. The rect and colour key are kept.
    pub fn repaint(&mut self, variant: TileVariant, assets: &dyn AssetStore) -> Result<()> {
        let tile = TileArt::new(self.size, self.color_key).tile(variant, assets)?;
        self.set_art(variant, tile.image);
        Ok(())
    }

    fn set_art(&mut self, variant: TileVariant, image: Bitmap) {
        self.variant = variant;
        self.image = image;
    }

    /// Blit onto `surface` at the tile's rect.
    pub fn draw(&self, surface: &mut Bitmap) {
        surface.blit(&self.image, self.rect.x, self.rect.y);
    }
}

/// Tile art decoded once per variant, scaled to one size and keyed.
///
/// A map builds hundreds of tiles from five resources; the cache keeps each
/// resource to a single load.
#[derive(Debug, Clone)]
pub struct TileArt {
    size: u16,
    color_key: Rgb,
    cache: HashMap<TileVariant, Bitmap>,
}

impl TileArt {
    pub fn new(size: u16, color_key: Rgb) -> Self {
        Self {
            size,
            color_key,
            cache: HashMap::new(),
        }
    }

    /// Number of variants decoded so far.
    pub fn loaded(&self) -> usize {
        self.cache.len()
    }

    /// Scaled, keyed art for `variant`, loading it on first use.
    pub fn art(&mut self, variant: TileVariant, assets: &dyn AssetStore) -> Result<&Bitmap> {
        match self.cache.entry(variant) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut image = assets.load(variant.as_str())?.scaled(self.size, self.size);
                image.set_color_key(Some(self.color_key));
                Ok(entry.insert(image))
            }
        }
    }

    /// A new tile at the origin with cached art.
    pub fn tile(&mut self, variant: TileVariant, assets: &dyn AssetStore) -> Result<Tile> {
        let (size, color_key) = (self.size, self.color_key);
        let image = self.art(variant, assets)?.clone();
        Ok(Tile {
            variant,
            size,
            color_key,
            image,
            rect: Rect::new(0, 0, size, size),
        })
    }

    /// Repaint `tile` with cached art, keeping its rect.
    pub fn repaint(
        &mut self,
        tile: &mut Tile,
        variant: TileVariant,
        assets: &dyn AssetStore,
    ) -> Result<()> {
        let image = self.art(variant, assets)?.clone();
        tile.set_art(variant, image);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BuiltinAssets;

    #[test]
    fn factory_accepts_index_and_name() {
        let by_index = Tile::variant(1u32, 4, &BuiltinAssets).unwrap();
        let by_name = Tile::variant("water", 4, &BuiltinAssets).unwrap();
        assert_eq!(by_index.kind(), "water");
        assert_eq!(by_index, by_name);
    }

    #[test]
    fn factory_rejects_unknown_tags() {
        assert!(matches!(
            Tile::variant(7u32, 4, &BuiltinAssets),
            Err(BuilderError::UnknownVariant(ref t)) if t == "7"
        ));
        assert!(matches!(
            Tile::variant("lava", 4, &BuiltinAssets),
            Err(BuilderError::UnknownVariant(_))
        ));
    }

    #[test]
    fn art_is_scaled_to_tile_size() {
        let tile = Tile::variant("forest", 15, &BuiltinAssets).unwrap();
        assert_eq!(tile.image().width(), 15);
        assert_eq!(tile.image().height(), 15);
        assert_eq!(tile.rect, Rect::new(0, 0, 15, 15));
        assert_eq!(tile.image().color_key(), Some(color::WHITE));
    }

    #[test]
    fn keyed_pixels_show_the_surface_below() {
        // Mountain art has white sky in its top-left corner.
        let tile = Tile::variant("mountain", 8, &BuiltinAssets).unwrap();
        let mut surface = Bitmap::new(8, 8, color::RED);
        tile.draw(&mut surface);
        assert_eq!(surface.get(0, 0), Some(color::RED));
        assert_ne!(surface.get(0, 7), Some(color::RED));
    }

    #[test]
    fn repaint_keeps_rect() {
        let mut tile = Tile::blank(4, &BuiltinAssets).unwrap();
        tile.rect = Rect::new(8, 12, 4, 4);
        tile.repaint(TileVariant::Field, &BuiltinAssets).unwrap();
        assert_eq!(tile.tile_variant(), TileVariant::Field);
        assert_eq!(tile.rect, Rect::new(8, 12, 4, 4));
    }

    #[test]
    fn art_cache_decodes_each_variant_once() {
        struct Counting(std::cell::Cell<usize>);
        impl AssetStore for Counting {
            fn load(&self, name: &str) -> Result<Bitmap> {
                self.0.set(self.0.get() + 1);
                BuiltinAssets.load(name)
            }
        }

        let assets = Counting(std::cell::Cell::new(0));
        let mut art = TileArt::new(4, color::WHITE);
        for _ in 0..10 {
            art.tile(TileVariant::Water, &assets).unwrap();
            art.tile(TileVariant::Forest, &assets).unwrap();
        }
        assert_eq!(assets.0.get(), 2);
        assert_eq!(art.loaded(), 2);
    }

    #[test]
    fn custom_color_key_is_applied() {
        let key = Rgb::new(254, 254, 254);
        let mut art = TileArt::new(8, key);
        let mut tile = art.tile(TileVariant::Field, &BuiltinAssets).unwrap();
        assert_eq!(tile.image().color_key(), Some(key));

        tile.repaint(TileVariant::Mountain, &BuiltinAssets).unwrap();
        assert_eq!(tile.color_key(), key);
        assert_eq!(tile.image().color_key(), Some(key));
    }
}
