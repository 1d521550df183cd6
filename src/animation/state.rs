use crate::{
    face::descriptor::FaceDescriptor,
    foundation::{
        core::{TargetRect, Vec2},
        error::ChernoffResult,
    },
    render::{command::DrawSurface, painter::FacePainter},
};

/// A value that can describe one frame of an animation.
pub trait AnimationState: Sized {
    /// Blend between `start` (t = 0) and `end` (t = 1). `t` is not clamped.
    fn interpolate(start: &Self, end: &Self, t: f64) -> Self;
}

impl AnimationState for f64 {
    fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        start + (end - start) * t
    }
}

impl AnimationState for Vec2 {
    fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Vec2::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        )
    }
}

/// Consumes animation frames, typically by rendering them.
///
/// Called once per frame with the interpolated state. An error aborts the run and is returned to
/// whoever started it.
pub trait Animator<S> {
    fn animate(&mut self, state: &S) -> ChernoffResult<()>;
}

impl<S, F> Animator<S> for F
where
    F: FnMut(&S) -> ChernoffResult<()>,
{
    fn animate(&mut self, state: &S) -> ChernoffResult<()> {
        self(state)
    }
}

/// Renders each animated face into a fixed rectangle of a surface.
#[derive(Debug)]
pub struct FaceAnimator<D> {
    painter: FacePainter,
    rect: TargetRect,
    surface: D,
    frames: u64,
}

impl<D: DrawSurface> FaceAnimator<D> {
    pub fn new(painter: FacePainter, rect: TargetRect, surface: D) -> ChernoffResult<Self> {
        rect.validate()?;
        Ok(Self {
            painter,
            rect,
            surface,
            frames: 0,
        })
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<D: DrawSurface> Animator<FaceDescriptor> for FaceAnimator<D> {
    fn animate(&mut self, state: &FaceDescriptor) -> ChernoffResult<()> {
        self.painter.draw(&mut self.surface, state, self.rect)?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
