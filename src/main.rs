//! Terminal tile-map builder (default binary).
//!
//! Left click selects a tile and shows it in the side panel. Right click
//! paints the tile with the current brush (keys 1-4). `r` builds a new map,
//! `q` quits.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use tui_builder::core::{AssetStore, BuiltinAssets, DirAssets, Overlay};
use tui_builder::engine::{FrameClock, Game, GameConfig};
use tui_builder::input::handle_event;
use tui_builder::term::{FrameBuffer, TerminalRenderer, Viewport, WindowView};

fn main() -> Result<()> {
    let config = GameConfig::load().context("loading configuration")?;
    init_logging(&config)?;

    let assets = asset_store(&config);
    let game = Game::new(config, assets)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn asset_store(config: &GameConfig) -> Box<dyn AssetStore> {
    match &config.assets_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "using art overrides");
            Box::new(Overlay::new(DirAssets::new(dir), BuiltinAssets))
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "assets_dir is not a directory, using built-in art");
            Box::new(BuiltinAssets)
        }
        None => Box::new(BuiltinAssets),
    }
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let view = WindowView::new(game.config().palette.black);
    let mut clock = FrameClock::new(game.config().fps);
    let mut fb = FrameBuffer::new(0, 0);

    while game.is_running() {
        // Drain pending input without blocking.
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            if let Some(action) = handle_event(&ev) {
                tracing::debug!(?action, "input");
                game.apply_action(action)?;
            }
        }
        if !game.is_running() {
            break;
        }

        let status = game.status_line();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.render(), &status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        clock.tick();
    }

    tracing::info!("main loop finished");
    Ok(())
}
