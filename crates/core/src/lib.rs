//! Tile map and panel compositing - pure and testable
//!
//! This crate holds everything that decides what the window looks like. It
//! has no terminal or event-loop dependencies: panels paint into owned
//! [`Bitmap`]s and the front end decides how to show the result.
//!
//! # Module Structure
//!
//! - [`bitmap`]: RGB pixel surface (fill, stroke, colour-keyed blit, scaling)
//! - [`sprite`]: TOML pixel-art decoding
//! - [`assets`]: [`AssetStore`] trait, built-in and directory stores
//! - [`tile`]: [`Tile`], one grid cell with its art
//! - [`panel`]: [`Panel`] and the [`Drawable`] update/draw contract
//! - [`map`]: [`Map`], the tile grid with point-to-tile lookup
//! - [`icon`]: [`Icon`], a bordered image widget
//! - [`interface`]: [`Interface`], the side panel showing the selected tile
//!
//! # Example
//!
//! ```
//! use tui_builder_core::types::{color, Point};
//! use tui_builder_core::{Bitmap, BuiltinAssets, Drawable, Map};
//!
//! let mut map = Map::blank(Point::new(0, 0), 30, 15, &BuiltinAssets).unwrap();
//! assert_eq!(map.len(), 900);
//!
//! // Clicks to the right of the map miss.
//! assert_eq!(map.pos_to_tile(460, 10), None);
//! assert_eq!(map.pos_to_tile(46, 31), map.id_at(2, 3));
//!
//! let mut window = Bitmap::new(600, 450, color::BLACK);
//! map.draw(&mut window, (), true);
//! ```

pub mod assets;
pub mod bitmap;
pub mod error;
pub mod icon;
pub mod interface;
pub mod map;
pub mod panel;
pub mod sprite;
pub mod tile;

pub use tui_builder_types as types;

// Re-export commonly used types for convenience
pub use assets::{AssetStore, BuiltinAssets, DirAssets, Overlay};
pub use bitmap::Bitmap;
pub use error::BuilderError;
pub use icon::Icon;
pub use interface::{IconLayout, Interface, InterfaceColors, TileSource};
pub use map::{Map, TileId};
pub use panel::{Drawable, Panel};
pub use tile::{Tile, TileArt, TileStyle};
