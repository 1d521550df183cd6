use crate::{foundation::core::Point, render::context::RenderContext, render::command::DrawSurface};

/// `y = a*x^2 + b*x + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parabola {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Parabola {
    /// The unique parabola through three points, solved with Cramer's rule.
    ///
    /// Returns `None` unless the three x coordinates are pairwise distinct.
    pub fn through(p1: Point, p2: Point, p3: Point) -> Option<Self> {
        let (x1, y1) = (p1.x, p1.y);
        let (x2, y2) = (p2.x, p2.y);
        let (x3, y3) = (p3.x, p3.y);

        // Vandermonde determinant, (x1 - x2)(x2 - x3)(x3 - x1) expanded.
        let denom = x1 * x1 * (x2 - x3) + x1 * (x3 * x3 - x2 * x2) + x2 * x2 * x3 - x3 * x3 * x2;
        if denom == 0.0 || !denom.is_finite() {
            return None;
        }

        let a = (y1 * (x2 - x3) + x1 * (y3 - y2) + y2 * x3 - y3 * x2) / denom;
        let b = (x1 * x1 * (y2 - y3) + y1 * (x3 * x3 - x2 * x2) + x2 * x2 * y3 - x3 * x3 * y2)
            / denom;
        let c = (x1 * x1 * (x2 * y3 - x3 * y2)
            + x1 * (x3 * x3 * y2 - x2 * x2 * y3)
            + y1 * (x2 * x2 * x3 - x3 * x3 * x2))
            / denom;

        Some(Self { a, b, c })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

/// Piecewise-linear lip from `start.x` to `end_x`, one segment per device pixel in x.
///
/// The first segment runs from `start` to the curve's value at `start.x`, so the stroke is
/// anchored on the mouth corner even when rounding keeps the curve a hair off it.
pub(crate) fn stroke_parabola<S: DrawSurface + ?Sized>(
    surface: &mut S,
    ctx: &RenderContext,
    curve: &Parabola,
    start: Point,
    end_x: f64,
) {
    let step = ctx.logical_step_x();
    let mut last = start;
    let mut i = 0u32;
    loop {
        let x = start.x + f64::from(i) * step;
        if x > end_x {
            break;
        }
        let next = Point::new(x, curve.eval(x));
        ctx.line(surface, last, next);
        last = next;
        i += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/lip.rs"]
mod tests;
