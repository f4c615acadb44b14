//! Pixel-art decoding.
//!
//! Tile art is a small TOML document: a list of equal-length rows where each
//! character is a palette key, and a palette mapping keys to `#rrggbb`.
//!
//! ```toml
//! pixels = [
//!   "gg",
//!   "gw",
//! ]
//!
//! [palette]
//! g = "#3f8f2f"
//! w = "#ffffff"
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::bitmap::Bitmap;
use crate::error::{BuilderError, Result};
use crate::types::Rgb;

#[derive(Debug, Deserialize)]
struct SpriteDoc {
    pixels: Vec<String>,
    #[serde(default)]
    palette: BTreeMap<String, String>,
}

/// Decode a sprite document into a bitmap. `name` is only used for errors.
pub fn decode(name: &str, text: &str) -> Result<Bitmap> {
    let malformed = |reason: String| BuilderError::AssetDecode {
        name: name.to_string(),
        reason,
    };

    let doc: SpriteDoc = toml::from_str(text).map_err(|e| malformed(e.message().to_string()))?;

    let mut palette = HashMap::with_capacity(doc.palette.len());
    for (key, hex) in &doc.palette {
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(malformed(format!("palette key {key:?} is not a single character")));
        };
        let color = Rgb::from_hex(hex)
            .ok_or_else(|| malformed(format!("palette entry {key:?} has bad color {hex:?}")))?;
        palette.insert(ch, color);
    }

    let height = doc.pixels.len();
    let width = doc.pixels.first().map_or(0, |row| row.chars().count());
    if width == 0 || height == 0 {
        return Err(malformed("sprite has no pixels".to_string()));
    }
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(malformed(format!("sprite is too large ({width}x{height})")));
    };

    let mut pixels = Vec::with_capacity(width * height);
    for (y, row) in doc.pixels.iter().enumerate() {
        if row.chars().count() != width {
            return Err(malformed(format!("row {y} is not {width} pixels wide")));
        }
        for (x, ch) in row.chars().enumerate() {
            let color = palette
                .get(&ch)
                .copied()
                .ok_or_else(|| malformed(format!("pixel ({x}, {y}) uses unknown key {ch:?}")))?;
            pixels.push(color);
        }
    }

    Bitmap::from_pixels(w, h, pixels).ok_or_else(|| malformed("pixel count mismatch".to_string()))
}
