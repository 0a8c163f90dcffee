use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("could not spawn the scheduler worker: {0}")]
    SpawnWorker(#[source] std::io::Error),
}

pub type LifeResult<T> = Result<T, LifeError>;
