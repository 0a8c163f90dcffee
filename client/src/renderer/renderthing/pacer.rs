use std::time::{Duration, Instant};

/// Holds the redraw loop to a target frame time.
pub struct FramePacer {
    pub target_frame_time: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_frame_time: Duration) -> Self {
        Self {
            target_frame_time,
            last_frame: None,
        }
    }

    /// Sleeps out the rest of the current frame. Returns whether it slept.
    pub fn wait(&mut self) -> bool {
        let slept = match self.last_frame {
            Some(last_frame) => {
                let elapsed = last_frame.elapsed();

                if elapsed < self.target_frame_time {
                    spin_sleep::sleep(self.target_frame_time - elapsed);
                    true
                } else {
                    false
                }
            }
            // Nothing to pace against on the first frame.
            None => false,
        };

        self.last_frame = Some(Instant::now());
        slept
    }
}
