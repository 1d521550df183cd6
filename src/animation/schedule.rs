use std::time::Duration;

use crate::foundation::{
    core::Fps,
    error::{ChernoffError, ChernoffResult},
};

/// How the real-time driver waits between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Sleep one frame delay after every frame. Render cost accumulates as drift.
    FixedDelay,
    /// Sleep until `start + (index + 1) * frame_delay`, so render cost is absorbed.
    #[default]
    Deadline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub fps: Fps,
    pub pacing: Pacing,
}

/// One frame of a schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub index: u64,
    /// Interpolation parameter, always in `[0, 1)`.
    pub t: f64,
}

/// Frame timeline for one animation run.
///
/// Frame `i` sits at `t = i * frame_delay / duration` and frames continue while `t < 1`. The
/// parameter is derived from the index rather than accumulated, so FPS 10 over 1000 ms gives
/// exactly ten frames at `0.0, 0.1, ..., 0.9`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSchedule {
    fps: Fps,
    duration_ms: u64,
    next: u64,
}

impl FrameSchedule {
    pub fn new(fps: Fps, duration: Duration) -> ChernoffResult<Self> {
        let duration_ms = u64::try_from(duration.as_millis()).map_err(|_| {
            ChernoffError::invalid_timing(format!("duration {duration:?} is too long"))
        })?;
        if duration_ms == 0 {
            return Err(ChernoffError::invalid_timing(format!(
                "duration must be at least 1 ms, got {duration:?}"
            )));
        }
        Ok(Self {
            fps,
            duration_ms,
            next: 0,
        })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_delay(&self) -> Duration {
        self.fps.frame_delay()
    }

    /// Parameter step between consecutive frames.
    pub fn dt(&self) -> f64 {
        self.fps.frame_delay_ms() as f64 / self.duration_ms as f64
    }

    /// Total frames in the schedule.
    pub fn frame_count(&self) -> u64 {
        self.duration_ms.div_ceil(self.fps.frame_delay_ms())
    }

    /// Tick at `index`, or `None` once `t` would reach 1.
    pub fn tick(&self, index: u64) -> Option<FrameTick> {
        if index >= self.frame_count() {
            return None;
        }
        let elapsed_ms = index * self.fps.frame_delay_ms();
        Some(FrameTick {
            index,
            t: elapsed_ms as f64 / self.duration_ms as f64,
        })
    }
}

impl Iterator for FrameSchedule {
    type Item = FrameTick;

    fn next(&mut self) -> Option<FrameTick> {
        let tick = self.tick(self.next)?;
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.frame_count().saturating_sub(self.next)).ok();
        (left.unwrap_or(usize::MAX), left)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
