use std::sync::{Mutex, MutexGuard, PoisonError, RwLockReadGuard, RwLockWriteGuard};

use liblife::{GridStore, LifeConfig, LifeResult, RunState, Scheduler, SharedStore, store};

/// Everything the window and the console share.
pub struct State {
    pub config: LifeConfig,
    store: SharedStore,
    scheduler: Mutex<Scheduler>,
}

impl State {
    pub fn new(config: LifeConfig) -> LifeResult<Self> {
        let store = GridStore::empty(config.rows, config.cols)?.shared();
        let scheduler = Scheduler::new(store.clone(), config.tick_interval());

        Ok(Self {
            config,
            store,
            scheduler: Mutex::new(scheduler),
        })
    }

    pub fn store(&self) -> RwLockReadGuard<'_, GridStore> {
        store::read(&self.store)
    }

    pub fn store_mut(&self) -> RwLockWriteGuard<'_, GridStore> {
        store::write(&self.store)
    }

    pub fn scheduler(&self) -> MutexGuard<'_, Scheduler> {
        self.scheduler.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn run_state(&self) -> RunState {
        self.scheduler().state()
    }
}
