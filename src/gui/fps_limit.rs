use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Weight of the newest frame in the smoothed frame time.
const SMOOTHING: f64 = 0.1;

/// Caps the repaint rate and keeps a smoothed FPS estimate for the tab bar.
pub struct FpsLimiter {
    frame_start: Instant,
    /// `None` means frames are not throttled.
    min_frame_time: Option<Duration>,
    smoothed_frame_secs: f64,
}

impl FpsLimiter {
    /// `max_fps` that is not a positive finite number disables throttling.
    pub fn new(max_fps: f64) -> Self {
        let min_frame_time = (max_fps.is_finite() && max_fps > 0.)
            .then(|| Duration::from_secs_f64(1. / max_fps));
        Self {
            frame_start: Instant::now(),
            min_frame_time,
            smoothed_frame_secs: 0.,
        }
    }

    /// 0 until the first frame is finished.
    pub fn fps(&self) -> f64 {
        if self.smoothed_frame_secs > 0. {
            self.smoothed_frame_secs.recip()
        } else {
            0.
        }
    }

    /// Ends the current frame: sleeps off what is left of its time budget and
    /// folds its length into the estimate.
    pub fn end_frame(&mut self) {
        if let Some(budget) = self.min_frame_time {
            if let Some(left) = budget.checked_sub(self.frame_start.elapsed()) {
                sleep(left);
            }
        }
        let frame_secs = self.frame_start.elapsed().as_secs_f64();
        self.smoothed_frame_secs = if self.smoothed_frame_secs > 0. {
            self.smoothed_frame_secs + (frame_secs - self.smoothed_frame_secs) * SMOOTHING
        } else {
            frame_secs
        };
        self.frame_start = Instant::now();
    }
}
