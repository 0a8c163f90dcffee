//! Run/stop loop that keeps committing generations at a fixed interval.
//!
//! Each run gets its own worker thread and its own stop flag. The worker checks
//! the flag at the start of every tick while holding the grid lock, so a tick
//! that was already on its way when [`Scheduler::stop`] ran does nothing and
//! ends the loop instead of scheduling another one.

use std::{
    fmt,
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use tracing::{debug, info};

use super::{
    error::{LifeError, LifeResult},
    store::{self, GridStore, SharedStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl RunState {
    /// Label of the action that toggles out of this state.
    pub fn label(self) -> &'static str {
        match self {
            RunState::Stopped => "start",
            RunState::Running => "stop",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Stepped,
    Halted,
}

pub struct Scheduler {
    store: SharedStore,
    interval: Duration,
    running: Option<Arc<AtomicBool>>,
}

impl Scheduler {
    pub fn new(store: SharedStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            running: None,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> RunState {
        match &self.running {
            Some(running) if running.load(Ordering::Acquire) => RunState::Running,
            _ => RunState::Stopped,
        }
    }

    /// Starts a new run. Returns `false` if one is already going.
    pub fn start(&mut self) -> LifeResult<bool> {
        if self.state() == RunState::Running {
            return Ok(false);
        }

        let running = Arc::new(AtomicBool::new(true));

        let worker_store = self.store.clone();
        let worker_running = running.clone();
        let interval = self.interval;

        thread::Builder::new()
            .name("life-scheduler".to_owned())
            .spawn(move || {
                let mut ticks = 0u64;

                while tick(&worker_store, &worker_running) == TickOutcome::Stepped {
                    ticks += 1;
                    thread::sleep(interval);
                }

                debug!(ticks, "scheduler worker exited");
            })
            .map_err(LifeError::SpawnWorker)?;

        self.running = Some(running);
        info!(interval_ms = interval.as_millis() as u64, "simulation started");

        Ok(true)
    }

    /// Stops the current run. Returns `false` if nothing was running.
    ///
    /// Does not wait for the worker. Once this returns no further generation
    /// will be committed by the stopped run.
    pub fn stop(&mut self) -> bool {
        let Some(running) = self.running.take() else {
            return false;
        };

        // Taking the write lock means an in-flight tick either committed
        // before this point or will see the cleared flag.
        let _store = store::write(&self.store);
        let was_running = running.swap(false, Ordering::AcqRel);

        if was_running {
            info!("simulation stopped");
        }

        was_running
    }

    /// The start/stop button.
    pub fn toggle_running(&mut self) -> LifeResult<RunState> {
        match self.state() {
            RunState::Running => {
                self.stop();
            }
            RunState::Stopped => {
                self.start()?;
            }
        }

        Ok(self.state())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One cooperative tick: commit a generation unless `running` has been
/// cleared.
pub fn tick(store: &RwLock<GridStore>, running: &AtomicBool) -> TickOutcome {
    let mut store = store::write(store);

    if !running.load(Ordering::Acquire) {
        return TickOutcome::Halted;
    }

    store.advance();
    TickOutcome::Stepped
}
