use crate::{
    foundation::core::{Point, TargetRect},
    render::command::DrawSurface,
};

/// Side length of the logical design space faces are laid out in.
pub const LOGICAL_SIZE: f64 = 100.0;

/// Per-call mapping from the 100x100 logical face space to device pixels.
///
/// Built fresh for every `draw` and passed to every helper, so a painter can be shared between
/// threads without any of this state leaking across calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    pub x_factor: f64,
    pub y_factor: f64,
    pub x_origin: i32,
    pub y_origin: i32,
}

impl RenderContext {
    /// Callers validate `rect` first; see [`TargetRect::validate`].
    pub fn new(rect: TargetRect) -> Self {
        Self {
            x_factor: f64::from(rect.width) / LOGICAL_SIZE,
            y_factor: f64::from(rect.height) / LOGICAL_SIZE,
            x_origin: rect.x,
            y_origin: rect.y,
        }
    }

    /// Scaled length along x, truncated toward zero.
    pub fn scale_x(&self, v: f64) -> i32 {
        (v * self.x_factor) as i32
    }

    /// Scaled length along y, truncated toward zero.
    pub fn scale_y(&self, v: f64) -> i32 {
        (v * self.y_factor) as i32
    }

    pub fn to_device(&self, p: Point) -> (i32, i32) {
        (
            self.scale_x(p.x).saturating_add(self.x_origin),
            self.scale_y(p.y).saturating_add(self.y_origin),
        )
    }

    /// One device pixel along x, in logical units.
    pub fn logical_step_x(&self) -> f64 {
        1.0 / self.x_factor
    }

    /// Outlined oval centered on `center` with radii `rx`/`ry` (logical units).
    pub fn stroke_oval<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        center: Point,
        rx: f64,
        ry: f64,
    ) {
        let (x, y, w, h) = self.oval_box(center, rx, ry);
        surface.stroke_oval(x, y, w, h);
    }

    pub fn fill_oval<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        center: Point,
        rx: f64,
        ry: f64,
    ) {
        let (x, y, w, h) = self.oval_box(center, rx, ry);
        surface.fill_oval(x, y, w, h);
    }

    pub fn line<S: DrawSurface + ?Sized>(&self, surface: &mut S, from: Point, to: Point) {
        let (x1, y1) = self.to_device(from);
        let (x2, y2) = self.to_device(to);
        surface.line(x1, y1, x2, y2);
    }

    fn oval_box(&self, center: Point, rx: f64, ry: f64) -> (i32, i32, i32, i32) {
        let (x, y) = self.to_device(Point::new(center.x - rx, center.y - ry));
        (x, y, self.scale_x(rx * 2.0), self.scale_y(ry * 2.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
