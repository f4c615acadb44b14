//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (tile map, panels, terminal presenter, input mapping).
//!
//! # Coordinates
//!
//! Everything is measured in window pixels. The origin is the top-left corner
//! of the window, `x` grows to the right and `y` grows downward. Points use
//! `i32` so that points left of or above a panel stay representable after a
//! panel origin is subtracted.
//!
//! The terminal front end shows two vertically stacked pixels per terminal
//! cell (see [`PIXELS_PER_ROW`]).
//!
//! # Default layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TILE_NUM` | 12 | Tiles per map side |
//! | `DEFAULT_TILE_SIZE` | 4 | Tile side in pixels |
//! | `DEFAULT_INTERFACE_WIDTH` | 24 | Side panel width in pixels |
//! | `DEFAULT_FPS` | 60 | Frame pacing target |
//!
//! # Examples
//!
//! ```
//! use tui_builder_types::{Rect, TileVariant, VariantTag};
//!
//! let rect = Rect::new(10, 10, 4, 4);
//! assert!(rect.contains(10, 13));
//! assert!(!rect.contains(14, 10));
//!
//! assert_eq!(TileVariant::from_tag(VariantTag::from("water")), Some(TileVariant::Water));
//! assert_eq!(TileVariant::from_tag(VariantTag::from(2u32)), Some(TileVariant::Mountain));
//! ```

use std::fmt;

/// Default number of tiles along one side of the map
pub const DEFAULT_TILE_NUM: u16 = 12;

/// Default tile side in pixels
pub const DEFAULT_TILE_SIZE: u16 = 4;

/// Default side panel width in pixels
pub const DEFAULT_INTERFACE_WIDTH: u16 = 24;

/// Default frame pacing target
pub const DEFAULT_FPS: u32 = 60;

/// Vertical pixels packed into one terminal row (half-block rendering)
pub const PIXELS_PER_ROW: u16 = 2;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    ///
    /// ```
    /// use tui_builder_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Palette colors
pub mod color {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const GREY: Rgb = Rgb::new(127, 127, 127);
    pub const LIGHT_GREY: Rgb = Rgb::new(191, 191, 191);

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const BROWN: Rgb = Rgb::new(80, 25, 0);
    pub const LIGHT_BROWN: Rgb = Rgb::new(180, 100, 0);
}

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
///
/// `contains` is half-open: the left/top edges are inside, the right/bottom
/// edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size placed at `origin`.
    pub const fn at(origin: Point, w: u16, h: u16) -> Self {
        Self::new(origin.x, origin.y, w, h)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Terrain variant of a tile.
///
/// `Blank` is the "unlogiced" tile: used for deterministic maps and as the
/// placeholder shown before anything is selected. It is not reachable through
/// [`VariantTag`] lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileVariant {
    #[default]
    Blank,
    Field,
    Water,
    Mountain,
    Forest,
}

impl TileVariant {
    /// The four terrain variants, in tag order (index == numeric tag).
    pub const TERRAIN: [TileVariant; 4] = [
        TileVariant::Field,
        TileVariant::Water,
        TileVariant::Mountain,
        TileVariant::Forest,
    ];

    /// Resolve a numeric or named tag to a terrain variant.
    ///
    /// Names are case-insensitive. Returns `None` for unmapped tags, including
    /// `"blank"`.
    pub fn from_tag(tag: VariantTag<'_>) -> Option<Self> {
        match tag {
            VariantTag::Index(i) => Self::TERRAIN.get(i as usize).copied(),
            VariantTag::Name(name) => Self::TERRAIN
                .iter()
                .copied()
                .find(|v| v.as_str().eq_ignore_ascii_case(name)),
        }
    }

    /// Resource name of the art for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileVariant::Blank => "blank",
            TileVariant::Field => "field",
            TileVariant::Water => "water",
            TileVariant::Mountain => "mountain",
            TileVariant::Forest => "forest",
        }
    }

    /// Numeric tag, `None` for `Blank`.
    pub fn index(&self) -> Option<u32> {
        Self::TERRAIN
            .iter()
            .position(|v| v == self)
            .map(|i| i as u32)
    }
}

impl fmt::Display for TileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key accepted by the tile factory: an integer or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantTag<'a> {
    Index(u32),
    Name(&'a str),
}

impl From<u32> for VariantTag<'_> {
    fn from(i: u32) -> Self {
        VariantTag::Index(i)
    }
}

impl<'a> From<&'a str> for VariantTag<'a> {
    fn from(name: &'a str) -> Self {
        VariantTag::Name(name)
    }
}

impl fmt::Display for VariantTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantTag::Index(i) => write!(f, "{i}"),
            VariantTag::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// Actions the game understands.
///
/// Coordinates are window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Stop the main loop
    Quit,
    /// Rebuild the map with fresh random tiles
    Reset,
    /// Primary click: select the tile under the point
    Select { x: i32, y: i32 },
    /// Secondary click: repaint the tile under the point with the brush
    Paint { x: i32, y: i32 },
    /// Choose the variant used by `Paint`
    SetBrush(TileVariant),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 15, 15);
        assert!(r.contains(0, 0));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 0));
        assert!(!r.contains(0, 15));
        assert!(!r.contains(-1, 3));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(&Rect::new(2, 2, 8, 8)));
        assert!(!outer.contains_rect(&Rect::new(2, 2, 9, 8)));
        assert!(outer.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!outer.intersects(&Rect::new(10, 0, 5, 5)));
    }

    #[test]
    fn variant_tags_map_both_ways() {
        for (i, v) in TileVariant::TERRAIN.iter().enumerate() {
            assert_eq!(TileVariant::from_tag(VariantTag::Index(i as u32)), Some(*v));
            assert_eq!(TileVariant::from_tag(VariantTag::Name(v.as_str())), Some(*v));
            assert_eq!(v.index(), Some(i as u32));
        }
        assert_eq!(TileVariant::from_tag("FOREST".into()), Some(TileVariant::Forest));
        assert_eq!(TileVariant::from_tag(4u32.into()), None);
        assert_eq!(TileVariant::from_tag("blank".into()), None);
        assert_eq!(TileVariant::Blank.index(), None);
    }

    #[test]
    fn hex_colors_round_trip_through_display() {
        let c = Rgb::new(191, 191, 191);
        assert_eq!(Rgb::from_hex(&c.to_string()), Some(c));
        assert_eq!(Rgb::from_hex("#zz0000"), None);
    }
}
