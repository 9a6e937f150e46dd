//! Session loop - the single cooperative control loop
//!
//! Each iteration presents a frame if anything changed, waits up to one tick for
//! at most one command, applies it, then lets the game advance. Prompts (pause,
//! game over) are just modes of the same loop, so a scripted input source and a
//! manual clock can drive a whole session deterministically.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crate::game_state::GameState;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Flow, TICK_MS};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The process's monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to, optionally by a fixed step per read.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self::stepping(start, Duration::ZERO)
    }

    /// Every call to `now` returns the current time, then moves it by `step`.
    pub fn stepping(start: Instant, step: Duration) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn peek(&self) -> Instant {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Yields at most one command per call, waiting no longer than `timeout`.
pub trait InputSource {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Receives a frame whenever the game state changed.
pub trait RenderSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;
}

/// Replays a fixed list of per-tick inputs (`None` = idle tick), then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: VecDeque<Option<Command>>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Option<Command>>>(steps: I) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// One command per tick, no idle ticks.
    pub fn commands<I: IntoIterator<Item = Command>>(commands: I) -> Self {
        Self::new(commands.into_iter().map(Some))
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self, _timeout: Duration) -> io::Result<Option<Command>> {
        Ok(self.steps.pop_front().unwrap_or(Some(Command::Quit)))
    }
}

/// Collects every presented frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<GameSnapshot>,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub iterations: u64,
    pub commands: u64,
    pub advances: u64,
    pub frames: u64,
}

/// Run the control loop until a command ends the session.
pub fn run<I, R, C>(
    state: &mut GameState,
    input: &mut I,
    sink: &mut R,
    clock: &C,
) -> io::Result<SessionStats>
where
    I: InputSource + ?Sized,
    R: RenderSink + ?Sized,
    C: Clock + ?Sized,
{
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut snapshot = GameSnapshot::default();
    let mut stats = SessionStats::default();

    loop {
        stats.iterations += 1;

        if state.take_redraw() {
            state.snapshot_into(&mut snapshot);
            sink.present(&snapshot)?;
            stats.frames += 1;
        }

        if let Some(command) = input.next_command(tick)? {
            stats.commands += 1;
            if state.apply_command(command, clock.now()) == Flow::Quit {
                break;
            }
        }

        if state.tick(clock.now()).is_some() {
            stats.advances += 1;
        }
    }

    log::debug!(
        "session ended after {} iterations, {} commands, {} advances",
        stats.iterations,
        stats.commands,
        stats.advances
    );
    Ok(stats)
}
