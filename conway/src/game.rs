// game.rs - Run/pause/clear lifecycle driving the board from a periodic ticker

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::board::Board;
use crate::error::BoardError;
use crate::grid::TICK_INTERVAL;
use crate::patterns::Pattern;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Paused,
}

impl State {
    pub fn can_start(self) -> bool {
        matches!(self, State::Idle | State::Paused)
    }

    pub fn can_pause(self) -> bool {
        self == State::Running
    }

    pub fn can_clear(self) -> bool {
        matches!(self, State::Running | State::Paused)
    }
}

/// Everything a tick touches, behind one lock.
struct Shared<const ROWS: usize, const COLS: usize> {
    board: Board<ROWS, COLS>,
    // Bumped whenever ticking is cancelled; a ticker from an older run never steps again.
    epoch: u64,
    // Only sent to while the lock is held, so subscribers never see a stale generation.
    generations: watch::Sender<u64>,
}

/// Owns a board and the ticker that advances it.
///
/// Toggles, ticks, and clears are serialised by a single mutex, so a
/// generation is always evaluated and committed as one unit.
pub struct Game<const ROWS: usize, const COLS: usize> {
    shared: Arc<Mutex<Shared<ROWS, COLS>>>,
    state: State,
    interval: Duration,
    runtime: Handle,
    ticker: Option<JoinHandle<()>>,
}

impl<const ROWS: usize, const COLS: usize> Game<ROWS, COLS> {
    /// A game that ticks every [`TICK_INTERVAL`] on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self::with_interval(runtime, TICK_INTERVAL)
    }

    pub fn with_interval(runtime: Handle, interval: Duration) -> Self {
        let (generations, _) = watch::channel(0);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                board: Board::new(),
                epoch: 0,
                generations,
            })),
            state: State::Idle,
            interval,
            runtime,
            ticker: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begins stepping: once right away, then every interval.
    pub fn start(&mut self) -> State {
        if !self.state.can_start() {
            debug!("start ignored while {:?}", self.state);
            return self.state;
        }

        let epoch = self.lock().epoch;
        self.ticker = Some(self.runtime.spawn(tick(Arc::clone(&self.shared), epoch, self.interval)));
        info!("started, one generation every {:?}", self.interval);
        self.state = State::Running;
        self.state
    }

    pub fn pause(&mut self) -> State {
        if !self.state.can_pause() {
            debug!("pause ignored while {:?}", self.state);
            return self.state;
        }

        let generation = {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared.board.generation()
        };
        self.abort_ticker();
        info!("paused at generation {generation}");
        self.state = State::Paused;
        self.state
    }

    /// Stops ticking and kills every cell.
    pub fn clear(&mut self) -> State {
        {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared.board.clear();
            shared.generations.send_replace(0);
        }
        self.abort_ticker();
        info!("cleared");
        self.state = State::Idle;
        self.state
    }

    /// Stops ticking and seeds the board with `pattern`.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), BoardError> {
        {
            let mut shared = self.lock();
            shared.board.apply_pattern(pattern)?;
            shared.epoch += 1;
            shared.generations.send_replace(0);
        }
        self.abort_ticker();
        info!("applied pattern {:?}", pattern.name);
        self.state = State::Idle;
        Ok(())
    }

    /// Flips one cell, whatever the state.
    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<(), BoardError> {
        self.lock().board.toggle(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.lock().board.is_alive(row, col)
    }

    pub fn generation(&self) -> u64 {
        self.lock().board.generation()
    }

    pub fn population(&self) -> usize {
        self.lock().board.population()
    }

    /// A copy of the board as of the last commit.
    pub fn snapshot(&self) -> Board<ROWS, COLS> {
        self.lock().board.clone()
    }

    /// Receives the generation number after every commit, and 0 after a clear
    /// or a new pattern. The front end redraws on each change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.lock().generations.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Shared<ROWS, COLS>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn abort_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Drop for Game<ROWS, COLS> {
    fn drop(&mut self) {
        self.abort_ticker();
    }
}

async fn tick<const ROWS: usize, const COLS: usize>(
    shared: Arc<Mutex<Shared<ROWS, COLS>>>,
    epoch: u64,
    period: Duration,
) {
    let mut ticks = time::interval(period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticks.tick().await;
        let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.epoch != epoch {
            debug!("ticker for run {epoch} stopped");
            return;
        }
        guard.board.step_generation();
        let generation = guard.board.generation();
        guard.generations.send_replace(generation);
        drop(guard);
    }
}
