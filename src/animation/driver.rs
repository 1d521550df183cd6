use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread,
    time::{Duration, Instant},
};

use crate::{
    animation::{
        schedule::{AnimationSettings, FrameSchedule, Pacing},
        state::{AnimationState, Animator},
    },
    foundation::error::{ChernoffError, ChernoffResult},
};

/// Outcome of one animation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationReport {
    /// Frames delivered to the animator.
    pub frames: u64,
    /// Wall-clock time from the first frame to the end of the last wait.
    pub elapsed: Duration,
    /// True when the run stopped early because its token was cancelled.
    pub cancelled: bool,
}

/// Cooperative stop signal, checked between frames.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Marks the driver idle again when a run ends, including by panic.
struct CompletionGuard(Arc<AtomicBool>);

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Plays interpolated states into an [`Animator`] in real time.
///
/// A driver runs at most one animation at a time. [`AnimationDriver::is_complete`] is true while
/// idle and false for exactly the span of a run.
#[derive(Debug)]
pub struct AnimationDriver<A> {
    animator: Arc<Mutex<A>>,
    settings: AnimationSettings,
    complete: Arc<AtomicBool>,
}

impl<A> AnimationDriver<A> {
    pub fn new(animator: A) -> Self {
        Self::with_settings(animator, AnimationSettings::default())
    }

    pub fn with_settings(animator: A, settings: AnimationSettings) -> Self {
        Self {
            animator: Arc::new(Mutex::new(animator)),
            settings,
            complete: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn settings(&self) -> AnimationSettings {
        self.settings
    }

    /// Shared handle to the animator; locked by the driver only while a frame is delivered.
    pub fn animator(&self) -> Arc<Mutex<A>> {
        Arc::clone(&self.animator)
    }

    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    fn claim(&self) -> ChernoffResult<CompletionGuard> {
        self.complete
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                ChernoffError::animation("an animation is already running on this driver")
            })?;
        Ok(CompletionGuard(Arc::clone(&self.complete)))
    }

    /// Play `start -> end` over `duration`, blocking until the last frame's wait has elapsed.
    #[tracing::instrument(
        skip_all,
        fields(fps = self.settings.fps.get(), duration_ms = duration.as_millis() as u64)
    )]
    pub fn run_sync<S>(
        &self,
        start: &S,
        end: &S,
        duration: Duration,
    ) -> ChernoffResult<AnimationReport>
    where
        S: AnimationState,
        A: Animator<S>,
    {
        self.run_sync_until(start, end, duration, &CancelToken::new())
    }

    /// Like [`AnimationDriver::run_sync`], stopping early once `cancel` fires.
    pub fn run_sync_until<S>(
        &self,
        start: &S,
        end: &S,
        duration: Duration,
        cancel: &CancelToken,
    ) -> ChernoffResult<AnimationReport>
    where
        S: AnimationState,
        A: Animator<S>,
    {
        let schedule = FrameSchedule::new(self.settings.fps, duration)?;
        let _guard = self.claim()?;
        drive(&self.animator, start, end, schedule, self.settings.pacing, cancel)
    }

    /// Play `start -> end` on a background thread and return immediately.
    ///
    /// The driver reports incomplete from the moment this returns until the run ends.
    #[tracing::instrument(
        skip_all,
        fields(fps = self.settings.fps.get(), duration_ms = duration.as_millis() as u64)
    )]
    pub fn run_async<S>(
        &self,
        start: S,
        end: S,
        duration: Duration,
    ) -> ChernoffResult<AnimationHandle>
    where
        S: AnimationState + Send + 'static,
        A: Animator<S> + Send + 'static,
    {
        let schedule = FrameSchedule::new(self.settings.fps, duration)?;
        let guard = self.claim()?;

        let cancel = CancelToken::new();
        let (tx, rx) = mpsc::channel();
        let animator = Arc::clone(&self.animator);
        let pacing = self.settings.pacing;
        let token = cancel.clone();

        let thread = thread::Builder::new()
            .name("chernoff-animation".to_string())
            .spawn(move || {
                let result = {
                    let _guard = guard;
                    drive(&animator, &start, &end, schedule, pacing, &token)
                };
                // The handle may already be gone; the flag carries completion either way.
                let _ = tx.send(result);
            })
            .map_err(|e| {
                ChernoffError::animation(format!("failed to spawn animation thread: {e}"))
            })?;

        Ok(AnimationHandle {
            complete: Arc::clone(&self.complete),
            cancel,
            done: rx,
            thread: Some(thread),
        })
    }
}

/// Handle to a background run started by [`AnimationDriver::run_async`].
///
/// Dropping the handle detaches the run; it still finishes and flips the driver's completion
/// flag.
#[derive(Debug)]
pub struct AnimationHandle {
    complete: Arc<AtomicBool>,
    cancel: CancelToken,
    done: mpsc::Receiver<ChernoffResult<AnimationReport>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AnimationHandle {
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Ask the run to stop before its next frame.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Block until the run ends and return its report or the animator's error.
    pub fn wait(mut self) -> ChernoffResult<AnimationReport> {
        let result = self.done.recv();
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| ChernoffError::animation("animation thread panicked"))?;
        }
        result.map_err(|_| ChernoffError::animation("animation thread exited without a result"))?
    }
}

fn drive<S, A>(
    animator: &Mutex<A>,
    start: &S,
    end: &S,
    schedule: FrameSchedule,
    pacing: Pacing,
    cancel: &CancelToken,
) -> ChernoffResult<AnimationReport>
where
    S: AnimationState,
    A: Animator<S>,
{
    let delay = schedule.frame_delay();
    let delay_ms = schedule.fps().frame_delay_ms();
    let began = Instant::now();
    let mut frames = 0u64;

    for tick in schedule {
        if cancel.is_cancelled() {
            tracing::info!(frames, "animation cancelled");
            return Ok(AnimationReport {
                frames,
                elapsed: began.elapsed(),
                cancelled: true,
            });
        }

        let state = S::interpolate(start, end, tick.t);
        {
            let mut animator = animator
                .lock()
                .map_err(|_| ChernoffError::animation("animator lock poisoned"))?;
            animator.animate(&state)?;
        }
        frames += 1;
        tracing::debug!(index = tick.index, t = tick.t, "frame delivered");

        match pacing {
            Pacing::FixedDelay => thread::sleep(delay),
            Pacing::Deadline => {
                let deadline =
                    began + Duration::from_millis(delay_ms.saturating_mul(tick.index + 1));
                let now = Instant::now();
                if let Some(wait) = deadline.checked_duration_since(now) {
                    thread::sleep(wait);
                } else {
                    tracing::warn!(
                        index = tick.index,
                        behind_ms = now.duration_since(deadline).as_millis() as u64,
                        "animation fell behind schedule"
                    );
                }
            }
        }
    }

    let elapsed = began.elapsed();
    tracing::info!(frames, elapsed_ms = elapsed.as_millis() as u64, "animation complete");
    Ok(AnimationReport {
        frames,
        elapsed,
        cancelled: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
