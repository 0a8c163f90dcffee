use liblife::{LifeResult, Position, RunState};
use tracing::debug;

use crate::state::State;

/// A user action, whether it came from the window or the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ToggleCell(Position),
    Randomize,
    Clear,
    Step(usize),
    Start,
    Stop,
    ToggleRunning,
}

impl Intent {
    /// Applies the intent and returns the run state afterwards.
    pub fn apply(self, state: &State) -> LifeResult<RunState> {
        debug!(intent = ?self, "applying intent");

        match self {
            Intent::ToggleCell(pos) => state.store_mut().toggle(pos)?,
            Intent::Randomize => state.store_mut().randomize(),
            Intent::Clear => state.store_mut().clear(),
            Intent::Step(times) => {
                let mut store = state.store_mut();
                for _ in 0..times {
                    store.advance();
                }
            }
            Intent::Start => {
                state.scheduler().start()?;
            }
            Intent::Stop => {
                state.scheduler().stop();
            }
            Intent::ToggleRunning => {
                state.scheduler().toggle_running()?;
            }
        }

        Ok(state.run_state())
    }
}

#[cfg(test)]
mod tests {
    use liblife::{CellState, LifeConfig, LifeError};

    use super::*;

    fn state() -> State {
        State::new(LifeConfig::default()).unwrap()
    }

    #[test]
    fn toggle_cell_then_clear() {
        let state = state();

        Intent::ToggleCell(Position::new(2, 3)).apply(&state).unwrap();
        assert_eq!(state.store().grid().cell((2, 3)), Some(CellState::Alive));

        Intent::Clear.apply(&state).unwrap();
        assert_eq!(state.store().grid().alive_count(), 0);
    }

    #[test]
    fn out_of_bounds_toggle_is_reported() {
        let state = state();

        let err = Intent::ToggleCell(Position::new(0, 20)).apply(&state).unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { .. }));
    }

    #[test]
    fn step_advances_generations() {
        let state = state();

        Intent::Step(3).apply(&state).unwrap();
        assert_eq!(state.store().generation(), 3);
    }

    #[test]
    fn start_stop_reports_run_state() {
        let state = state();

        assert_eq!(Intent::ToggleRunning.apply(&state).unwrap(), RunState::Running);
        assert_eq!(Intent::Start.apply(&state).unwrap(), RunState::Running);
        assert_eq!(Intent::Stop.apply(&state).unwrap(), RunState::Stopped);
        assert_eq!(Intent::Stop.apply(&state).unwrap(), RunState::Stopped);
    }
}
