//! Game: owns the window surface and the panels, applies actions, renders
//! frames.
//!
//! The orchestrator is headless. The binary feeds it [`GameAction`]s, calls
//! [`Game::render`] once per frame and hands the window bitmap to the
//! terminal front end.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::core::{
    AssetStore, Bitmap, Drawable, Interface, Map, Tile, TileArt, TileId, TileSource,
};
use crate::types::{GameAction, Point, Rect, TileVariant};

/// Main loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

pub struct Game {
    config: GameConfig,
    assets: Box<dyn AssetStore>,
    rng: ChaCha8Rng,
    window: Bitmap,
    map: Map,
    interface: Interface,
    /// Shown by the interface until a tile is selected.
    placeholder: Tile,
    brush: TileVariant,
    state: RunState,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("tiles", &self.map.len())
            .field("selected", &self.interface.selected())
            .field("brush", &self.brush)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(config: GameConfig, assets: Box<dyn AssetStore>) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let map = build_map(&config, assets.as_ref(), &mut rng)?;
        let interface = build_interface(&config);
        let placeholder = TileArt::new(config.tile_size, config.palette.white)
            .tile(TileVariant::Blank, assets.as_ref())
            .context("loading placeholder tile")?;
        let window = Bitmap::new(config.width(), config.height(), config.palette.black);

        tracing::info!(
            width = config.width(),
            height = config.height(),
            seed = ?config.seed,
            "game created"
        );

        Ok(Self {
            config,
            assets,
            rng,
            window,
            map,
            interface,
            placeholder,
            brush: TileVariant::Field,
            state: RunState::Running,
        })
    }

    /// Rebuild the map and side panel. The selection is cleared.
    pub fn reset(&mut self) -> Result<()> {
        self.map = build_map(&self.config, self.assets.as_ref(), &mut self.rng)?;
        self.interface = build_interface(&self.config);
        tracing::info!(tiles = self.map.len(), "game reset");
        Ok(())
    }

    pub fn apply_action(&mut self, action: GameAction) -> Result<()> {
        if self.state == RunState::Stopped {
            return Ok(());
        }
        match action {
            GameAction::Quit => {
                tracing::info!("quit requested");
                self.state = RunState::Stopped;
            }
            GameAction::Reset => self.reset()?,
            GameAction::Select { x, y } => {
                self.select_at(x, y);
            }
            GameAction::Paint { x, y } => {
                self.paint_at(x, y)?;
            }
            GameAction::SetBrush(variant) => {
                tracing::debug!(brush = %variant, "brush changed");
                self.brush = variant;
            }
        }
        Ok(())
    }

    /// Select the tile under a window point. A miss keeps the previous
    /// selection.
    pub fn select_at(&mut self, x: i32, y: i32) -> Option<TileId> {
        let id = self.map.pos_to_tile(x, y)?;
        if let Some(tile) = self.map.tile(id) {
            tracing::debug!(
                row = id.row(self.map.size()),
                col = id.col(self.map.size()),
                kind = tile.kind(),
                "tile selected"
            );
        }
        self.interface.select(Some(id));
        Some(id)
    }

    /// Repaint the tile under a window point with the current brush.
    pub fn paint_at(&mut self, x: i32, y: i32) -> Result<Option<TileId>> {
        let Some(id) = self.map.pos_to_tile(x, y) else {
            return Ok(None);
        };
        self.map
            .paint(id, self.brush, self.assets.as_ref())
            .with_context(|| format!("painting tile {} with {}", id.index(), self.brush))?;
        tracing::debug!(tile = id.index(), brush = %self.brush, "tile painted");
        Ok(Some(id))
    }

    /// Composite one frame: clear, then the map, then the side panel.
    pub fn render(&mut self) -> &Bitmap {
        self.window.fill(self.config.palette.black);
        self.map.draw(&mut self.window, (), true);
        let source = TileSource {
            map: &self.map,
            placeholder: &self.placeholder,
        };
        self.interface.draw(&mut self.window, source, true);
        &self.window
    }

    /// One-line summary of the selection and brush.
    pub fn status_line(&self) -> String {
        let selected = match self.selected_tile() {
            Some((id, tile)) => format!(
                "{} @ {},{}",
                tile.kind(),
                id.row(self.map.size()),
                id.col(self.map.size())
            ),
            None => "-".to_string(),
        };
        format!(
            "{}  sel: {}  brush: {}  [1-4] brush [r] new [q] quit",
            self.config.caption, selected, self.brush
        )
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    pub fn placeholder(&self) -> &Tile {
        &self.placeholder
    }

    pub fn window(&self) -> &Bitmap {
        &self.window
    }

    pub fn brush(&self) -> TileVariant {
        self.brush
    }

    pub fn selected_tile(&self) -> Option<(TileId, &Tile)> {
        let id = self.interface.selected()?;
        self.map.tile(id).map(|tile| (id, tile))
    }
}

fn build_map(config: &GameConfig, assets: &dyn AssetStore, rng: &mut ChaCha8Rng) -> Result<Map> {
    Map::generate(
        Point::new(0, 0),
        config.tile_num,
        config.tile_size,
        config.tile_style(),
        assets,
        rng,
    )
    .context("building map")
}

fn build_interface(config: &GameConfig) -> Interface {
    Interface::new(
        Rect::new(
            config.map_size() as i32,
            0,
            config.interface_width,
            config.height(),
        ),
        config.tile_size,
        config.interface.border,
        config.icon_layout(),
        config.interface_colors(),
    )
}
