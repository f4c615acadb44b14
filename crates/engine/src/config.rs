//! External configuration loader.
//!
//! Reads `builder.toml` (or the file named by `$TUI_BUILDER_CONFIG`).
//! Missing keys fall back to defaults; a missing file means all defaults.
//! Values are checked once at load and are read-only afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::core::{IconLayout, InterfaceColors, TileStyle};
use crate::types::{
    color, Rgb, DEFAULT_FPS, DEFAULT_INTERFACE_WIDTH, DEFAULT_TILE_NUM, DEFAULT_TILE_SIZE,
};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TUI_BUILDER_CONFIG";

/// File searched for next to the executable and in the working directory.
pub const CONFIG_FILE_NAME: &str = "builder.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Window title (shown in the status line).
    pub caption: String,
    /// Tiles along one side of the map.
    pub tile_num: u16,
    /// Tile side in pixels.
    pub tile_size: u16,
    /// Side panel width in pixels.
    pub interface_width: u16,
    pub fps: u32,
    /// Fixed map seed; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Verbose logging.
    pub debug: bool,
    pub log_file: PathBuf,
    /// Directory of `<name>.toml` art overriding the built-in art.
    pub assets_dir: Option<PathBuf>,
    pub palette: Palette,
    pub interface: InterfaceConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub black: Rgb,
    pub white: Rgb,
    pub grey: Rgb,
    pub light_grey: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterfaceConfig {
    /// Frame around the side panel.
    pub border: u16,
    pub img_x_ratio: f32,
    pub img_y_ratio: f32,
    pub img_border: u16,
}

impl GameConfig {
    /// Map side in pixels.
    pub fn map_size(&self) -> u16 {
        self.tile_num.saturating_mul(self.tile_size)
    }

    /// Window width in pixels: map plus side panel.
    pub fn width(&self) -> u16 {
        self.map_size().saturating_add(self.interface_width)
    }

    pub fn height(&self) -> u16 {
        self.map_size()
    }

    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn icon_layout(&self) -> IconLayout {
        IconLayout {
            x_ratio: self.interface.img_x_ratio,
            y_ratio: self.interface.img_y_ratio,
            border: self.interface.img_border,
        }
    }

    /// Map background and tile colour key.
    pub fn tile_style(&self) -> TileStyle {
        TileStyle {
            background: self.palette.black,
            color_key: self.palette.white,
        }
    }

    pub fn interface_colors(&self) -> InterfaceColors {
        InterfaceColors {
            background: self.palette.light_grey,
            border: self.palette.grey,
            icon_border: self.palette.black,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // The TOML defaults are the single source of truth.
        TomlConfig::default().build()
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
    #[serde(default)]
    palette: TomlPalette,
    #[serde(default)]
    interface: TomlInterface,
}

#[derive(Deserialize, Debug)]
struct TomlGame {
    #[serde(default = "default_caption")]
    caption: String,
    #[serde(default = "default_tile_num")]
    tile_num: u16,
    #[serde(default = "default_tile_size")]
    tile_size: u16,
    #[serde(default = "default_interface_width")]
    interface_width: u16,
    #[serde(default = "default_fps")]
    fps: u32,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    debug: bool,
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
    #[serde(default)]
    assets_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
struct TomlPalette {
    #[serde(default = "default_black", deserialize_with = "de_rgb")]
    black: Rgb,
    #[serde(default = "default_white", deserialize_with = "de_rgb")]
    white: Rgb,
    #[serde(default = "default_grey", deserialize_with = "de_rgb")]
    grey: Rgb,
    #[serde(default = "default_light_grey", deserialize_with = "de_rgb")]
    light_grey: Rgb,
}

#[derive(Deserialize, Debug)]
struct TomlInterface {
    #[serde(default = "default_border")]
    border: u16,
    #[serde(default = "default_img_x_ratio")]
    img_x_ratio: f32,
    #[serde(default = "default_img_y_ratio")]
    img_y_ratio: f32,
    #[serde(default = "default_img_border")]
    img_border: u16,
}

// ── Defaults ──

fn default_caption() -> String { "Builder".into() }
fn default_tile_num() -> u16 { DEFAULT_TILE_NUM }
fn default_tile_size() -> u16 { DEFAULT_TILE_SIZE }
fn default_interface_width() -> u16 { DEFAULT_INTERFACE_WIDTH }
fn default_fps() -> u32 { DEFAULT_FPS }
fn default_log_file() -> PathBuf { "tui-builder.log".into() }
fn default_black() -> Rgb { color::BLACK }
fn default_white() -> Rgb { color::WHITE }
fn default_grey() -> Rgb { color::GREY }
fn default_light_grey() -> Rgb { color::LIGHT_GREY }
fn default_border() -> u16 { 1 }
fn default_img_x_ratio() -> f32 { 0.5 }
fn default_img_y_ratio() -> f32 { 0.1 }
fn default_img_border() -> u16 { 1 }

impl Default for TomlGame {
    fn default() -> Self {
        TomlGame {
            caption: default_caption(),
            tile_num: default_tile_num(),
            tile_size: default_tile_size(),
            interface_width: default_interface_width(),
            fps: default_fps(),
            seed: None,
            debug: false,
            log_file: default_log_file(),
            assets_dir: None,
        }
    }
}

impl Default for TomlPalette {
    fn default() -> Self {
        TomlPalette {
            black: default_black(),
            white: default_white(),
            grey: default_grey(),
            light_grey: default_light_grey(),
        }
    }
}

impl Default for TomlInterface {
    fn default() -> Self {
        TomlInterface {
            border: default_border(),
            img_x_ratio: default_img_x_ratio(),
            img_y_ratio: default_img_y_ratio(),
            img_border: default_img_border(),
        }
    }
}

fn de_rgb<'de, D: Deserializer<'de>>(d: D) -> Result<Rgb, D::Error> {
    let s = String::deserialize(d)?;
    Rgb::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("bad color {s:?}, expected #rrggbb")))
}

impl TomlConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let TomlConfig { game, interface, .. } = self;

        if game.tile_num == 0 || game.tile_size == 0 {
            return Err(ConfigError::Invalid(
                "tile_num and tile_size must be at least 1".into(),
            ));
        }
        if game.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".into()));
        }
        if (game.tile_num as u32) * (game.tile_size as u32) + game.interface_width as u32
            > u16::MAX as u32
        {
            return Err(ConfigError::Invalid("window is too large".into()));
        }
        for (key, ratio) in [
            ("img_x_ratio", interface.img_x_ratio),
            ("img_y_ratio", interface.img_y_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::Invalid(format!("{key} must be within 0..=1")));
            }
        }
        Ok(())
    }

    fn build(self) -> GameConfig {
        let TomlConfig {
            game,
            palette,
            interface,
        } = self;

        GameConfig {
            caption: game.caption,
            tile_num: game.tile_num,
            tile_size: game.tile_size,
            interface_width: game.interface_width,
            fps: game.fps,
            seed: game.seed,
            debug: game.debug,
            log_file: game.log_file,
            assets_dir: game.assets_dir,
            palette: Palette {
                black: palette.black,
                white: palette.white,
                grey: palette.grey,
                light_grey: palette.light_grey,
            },
            interface: InterfaceConfig {
                border: interface.border,
                img_x_ratio: interface.img_x_ratio,
                img_y_ratio: interface.img_y_ratio,
                img_border: interface.img_border,
            },
        }
    }
}

// ── Loading ──

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: TomlConfig = toml::from_str(text)?;
        raw.validate()?;
        Ok(raw.build())
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the config.
    ///
    /// Search order: (1) `$TUI_BUILDER_CONFIG`, which must exist,
    /// (2) `builder.toml` next to the executable, (3) `builder.toml` in the
    /// current directory. With no file, defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }
        match find_config(&candidate_dirs()) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Candidate directories to search: exe dir then CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    dirs
}

fn find_config(search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}
