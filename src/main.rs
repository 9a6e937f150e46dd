//! Terminal panel game runner (default binary).
//!
//! Parses options, validates them against the terminal size, then hands a
//! crossterm-backed input source and render sink to the session loop.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal;

use cursed_panels::core::session::{self, InputSource, RenderSink};
use cursed_panels::core::{GameConfig, GameSnapshot, GameState, SystemClock};
use cursed_panels::input::{command_for_key, is_press};
use cursed_panels::term::{TerminalRenderer, TerminalSink, Viewport};
use cursed_panels::types::{Command, DEFAULT_LENGTH, DEFAULT_SPEED, DEFAULT_SYMBOLS, DEFAULT_WIDTH};

/// Swap panels to line up matching symbols before the stack reaches the edge.
#[derive(Debug, Parser)]
#[command(name = "cursed-panels", version, about, long_about = None)]
struct Cli {
    /// Initial speed
    #[arg(short = 'r', long = "rate", value_name = "SPEED", default_value_t = DEFAULT_SPEED)]
    rate: u32,

    /// Panel symbols, one character each
    #[arg(
        short = 's',
        long = "symbols",
        value_name = "SYMBOL",
        num_args = 1..,
        default_values_t = DEFAULT_SYMBOLS.map(String::from)
    )]
    symbols: Vec<String>,

    /// Stack length (clamped to the terminal width)
    #[arg(short = 'l', long = "length", value_name = "CELLS", default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Stack width (clamped to the terminal height minus the header)
    #[arg(short = 'w', long = "width", value_name = "CELLS", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// RNG seed; derived from the clock when omitted
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let config = GameConfig::new(cli.rate, cli.symbols.as_slice(), cli.length, cli.width, seed)?
        .clamp_to(cols, rows)?;
    log::info!(
        "starting: speed {} length {} width {} seed {}",
        config.speed(),
        config.length(),
        config.width(),
        config.seed()
    );

    let mut renderer = TerminalRenderer::new();
    if let Err(err) = renderer.enter() {
        let _ = renderer.exit();
        return Err(err.into());
    }
    let viewport = Viewport::new(cols, rows);
    let mut sink = ResizingSink::new(TerminalSink::new(renderer, viewport), cols, rows);

    let mut game = GameState::new(&config, Instant::now());
    let result = session::run(&mut game, &mut TerminalInput, &mut sink, &SystemClock);

    // Always try to restore terminal state.
    let restored = sink.inner.renderer_mut().exit();
    let stats = result?;
    restored?;

    log::info!(
        "finished: score {} speed {} after {} advances",
        game.score(),
        game.speed(),
        stats.advances
    );
    Ok(())
}

fn init_logging(path: Option<&std::path::Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = path {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

/// Keyboard commands from crossterm events.
struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if is_press(&key) => Ok(command_for_key(key)),
            _ => Ok(None),
        }
    }
}

/// Follows terminal resizes before each frame.
struct ResizingSink {
    inner: TerminalSink,
    size: (u16, u16),
}

impl ResizingSink {
    fn new(inner: TerminalSink, cols: u16, rows: u16) -> Self {
        Self {
            inner,
            size: (cols, rows),
        }
    }
}

impl RenderSink for ResizingSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.size {
            self.size = size;
            self.inner.resize(Viewport::new(size.0, size.1));
        }
        self.inner.present(snapshot)
    }
}
