//! Asset stores: named tile art.
//!
//! Tiles ask for art by resource name (`"field"`, `"water"`, `"mountain"`,
//! `"forest"`, `"blank"`). [`BuiltinAssets`] serves the art compiled into the
//! binary; [`DirAssets`] reads `<dir>/<name>.toml` from disk so art can be
//! swapped without rebuilding.

use std::io;
use std::path::{Path, PathBuf};

use crate::bitmap::Bitmap;
use crate::error::{BuilderError, Result};
use crate::sprite;

/// Resource lookup by name.
pub trait AssetStore {
    /// Load and decode the art named `name`.
    fn load(&self, name: &str) -> Result<Bitmap>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn load(&self, name: &str) -> Result<Bitmap> {
        (**self).load(name)
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Box<S> {
    fn load(&self, name: &str) -> Result<Bitmap> {
        (**self).load(name)
    }
}

const BUILTIN: [(&str, &str); 5] = [
    ("blank", include_str!("../resources/blank.toml")),
    ("field", include_str!("../resources/field.toml")),
    ("water", include_str!("../resources/water.toml")),
    ("mountain", include_str!("../resources/mountain.toml")),
    ("forest", include_str!("../resources/forest.toml")),
];

/// Art shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl BuiltinAssets {
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }
}

impl AssetStore for BuiltinAssets {
    fn load(&self, name: &str) -> Result<Bitmap> {
        let (_, text) = BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| BuilderError::AssetNotFound(name.to_string()))?;
        sprite::decode(name, text)
    }
}

/// Art read from a directory of `<name>.toml` files.
#[derive(Debug, Clone)]
pub struct DirAssets {
    dir: PathBuf,
}

impl DirAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        // Names are plain identifiers; anything path-like is simply missing.
        if name.is_empty() || name.contains(['/', '\\', '.']) {
            return None;
        }
        Some(self.dir.join(format!("{name}.toml")))
    }
}

impl AssetStore for DirAssets {
    fn load(&self, name: &str) -> Result<Bitmap> {
        let path = self
            .path_for(name)
            .ok_or_else(|| BuilderError::AssetNotFound(name.to_string()))?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BuilderError::AssetNotFound(name.to_string()));
            }
            Err(e) => {
                return Err(BuilderError::AssetDecode {
                    name: name.to_string(),
                    reason: format!("could not read {}: {e}", path.display()),
                });
            }
        };
        tracing::debug!(asset = name, path = %path.display(), "loaded asset from disk");
        sprite::decode(name, &text)
    }
}

/// Serves art from `primary`, falling back to `fallback` for names the
/// primary store does not have. Decode errors are not masked.
#[derive(Debug, Clone)]
pub struct Overlay<P, F> {
    primary: P,
    fallback: F,
}

impl<P: AssetStore, F: AssetStore> Overlay<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: AssetStore, F: AssetStore> AssetStore for Overlay<P, F> {
    fn load(&self, name: &str) -> Result<Bitmap> {
        match self.primary.load(name) {
            Err(BuilderError::AssetNotFound(_)) => {
                tracing::debug!(asset = name, "asset not overridden, using fallback");
                self.fallback.load(name)
            }
            other => other,
        }
    }
}
