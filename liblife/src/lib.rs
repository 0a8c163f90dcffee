pub use board::{CellState, Grid};
pub use config::LifeConfig;
pub use error::{LifeError, LifeResult};
pub use pos::Position;
pub use rule::step;
pub use scheduler::{RunState, Scheduler, TickOutcome};
pub use store::{GridStore, SharedStore};

pub mod board;
pub mod config;
pub mod error;
pub mod pos;
pub mod rule;
pub mod scheduler;
pub mod store;
