use std::time::Duration;

use rayon::prelude::*;

use crate::{
    animation::schedule::FrameSchedule,
    face::descriptor::FaceDescriptor,
    foundation::{
        core::{Fps, TargetRect},
        error::{ChernoffError, ChernoffResult},
    },
    render::{
        cpu::{FaceStyle, FrameRGBA, PixmapSurface},
        painter::FacePainter,
    },
};

/// Offline rendering of an animation to pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub fps: Fps,
    pub width: u32,
    pub height: u32,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            width: 200,
            height: 200,
            threads: None,
        }
    }
}

/// Rasterize every frame of `start -> end` without wall-clock pacing.
///
/// Frames follow the same schedule as the real-time driver and are rendered in parallel; the
/// returned frames are in schedule order.
#[tracing::instrument(skip(painter, style, start, end))]
pub fn export_frames(
    painter: &FacePainter,
    style: &FaceStyle,
    start: &FaceDescriptor,
    end: &FaceDescriptor,
    duration: Duration,
    options: &ExportOptions,
) -> ChernoffResult<Vec<FrameRGBA>> {
    let schedule = FrameSchedule::new(options.fps, duration)?;
    style.validate()?;
    let rect = TargetRect::sized(to_i32(options.width)?, to_i32(options.height)?)?;

    let ticks: Vec<_> = schedule.collect();
    let pool = build_thread_pool(options.threads)?;
    let frames = pool.install(|| {
        ticks
            .par_iter()
            .map(|tick| -> ChernoffResult<FrameRGBA> {
                let face = FaceDescriptor::interpolate(start, end, tick.t);
                let mut surface = PixmapSurface::new(options.width, options.height, style)?;
                painter.draw(&mut surface, &face, rect)?;
                Ok(surface.finish())
            })
            .collect::<ChernoffResult<Vec<_>>>()
    })?;

    tracing::info!(frames = frames.len(), "export complete");
    Ok(frames)
}

fn to_i32(v: u32) -> ChernoffResult<i32> {
    i32::try_from(v).map_err(|_| ChernoffError::invalid_dimensions(format!("{v} is too large")))
}

fn build_thread_pool(threads: Option<usize>) -> ChernoffResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ChernoffError::config("export 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ChernoffError::animation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/export.rs"]
mod tests;
