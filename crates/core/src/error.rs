//! Error taxonomy for tile construction and asset loading.
//!
//! A point that misses every tile is not an error: `Map::pos_to_tile`
//! returns `None` for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuilderError {
    /// Tag passed to the tile factory has no variant.
    #[error("unknown tile variant: {0}")]
    UnknownVariant(String),

    /// The asset store has no art under this name.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// The art exists but cannot be decoded.
    #[error("asset `{name}` is malformed: {reason}")]
    AssetDecode { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BuilderError>;
