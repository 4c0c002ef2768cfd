//! Terminal snake runner.
//!
//! Crossterm input, a fixed-step game loop and the framebuffer renderer.
//! Logs go to a file because the terminal is the display.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

use tui_snake::config::GameConfig;
use tui_snake::core::{AudioSink, NullAudio, RandomSource};
use tui_snake::engine::GameLoop;
use tui_snake::input::{handle_key_event, should_quit, PixelScale, PointerTracker};
use tui_snake::term::{
    BellAudio, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};

/// Redraw a frame with nothing moving at least this often.
const STATIC_REDRAW_MS: u64 = 250;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tui-snake")]
#[command(version, about = "Snake in the terminal, with fireworks")]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Snake moves per second.
    #[arg(long, value_name = "HZ")]
    tick_rate: Option<u32>,

    /// Render frames per second.
    #[arg(long, value_name = "HZ")]
    frame_rate: Option<u32>,

    /// Virtual canvas width in pixels.
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Virtual canvas height in pixels.
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Virtual pixels per grid cell.
    #[arg(long, value_name = "PX")]
    cell_px: Option<u32>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u32>,

    #[arg(long, value_name = "PATH", default_value = "tui-snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Never ring the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Keyboard only; leave mouse events to the terminal.
    #[arg(long)]
    no_mouse: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(v) = self.tick_rate {
            config.tick_rate_hz = v;
        }
        if let Some(v) = self.frame_rate {
            config.frame_rate_hz = v;
        }
        if let Some(v) = self.width {
            config.canvas_width_px = v;
        }
        if let Some(v) = self.height {
            config.canvas_height_px = v;
        }
        if let Some(v) = self.cell_px {
            config.cell_px = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("initializing logger")?;

    let config = cli.resolve_config()?;
    info!("starting tui-snake: {config:?}");

    let mut term = TerminalRenderer::new();
    if cli.no_mouse {
        term = term.without_mouse();
    }
    term.enter()?;

    let result = launch(&mut term, &config, cli.mute);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

/// Pick the rng and audio sink, then run the loop.
///
/// `--seed` replays a game through the seeded generator; otherwise the thread rng is used.
fn launch(term: &mut TerminalRenderer, config: &GameConfig, mute: bool) -> Result<()> {
    let scheduler = config.scheduler();
    match (config.seed, mute) {
        (Some(seed), false) => {
            info!("seeded with {seed}");
            let game = GameLoop::new(config.new_game(seed), scheduler, BellAudio::new());
            run(term, game, config.cell_px)
        }
        (Some(seed), true) => {
            info!("seeded with {seed}, muted");
            let game = GameLoop::new(config.new_game(seed), scheduler, NullAudio);
            run(term, game, config.cell_px)
        }
        (None, false) => {
            let state = config.new_game_with_rng(rand::thread_rng());
            run(term, GameLoop::new(state, scheduler, BellAudio::new()), config.cell_px)
        }
        (None, true) => {
            info!("muted");
            let state = config.new_game_with_rng(rand::thread_rng());
            run(term, GameLoop::new(state, scheduler, NullAudio), config.cell_px)
        }
    }
}

fn run<R: RandomSource, A: AudioSink>(
    term: &mut TerminalRenderer,
    mut game: GameLoop<R, A>,
    cell_px: u32,
) -> Result<()> {
    let view = GameView::default();
    let (px_per_col, px_per_row) = view.pixel_scale(cell_px);
    let scale = PixelScale::new(px_per_col, px_per_row);
    let mut pointer = PointerTracker::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last = started;
    let mut dirty = true;

    loop {
        let timeout = Duration::from_millis(game.until_next_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit, final score {}", game.state().score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= game.handle(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = pointer.handle_mouse_event(mouse, scale) {
                        dirty |= game.handle(action);
                    }
                }
                Event::Resize(w, h) => {
                    log::debug!("resize {w}x{h}");
                    term.invalidate();
                    throttle.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Only whole milliseconds are consumed; the remainder carries over.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        let step = game.advance(elapsed_ms);

        if step.frame || dirty {
            let snap = game.snapshot();
            let now_ms = started.elapsed().as_millis() as u64;
            if dirty || throttle.should_render_snapshot(now_ms, &snap) {
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                view.render_into(&snap, Viewport::new(w, h), &mut fb);
                term.draw_swap(&mut fb)?;
                dirty = false;
            }
        }
    }
}
