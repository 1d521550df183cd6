use crate::{
    face::{
        descriptor::FaceDescriptor,
        layout::{FEATURE_SCALE, FaceLayout, MOUTH_SPREAD, eye_size_offset},
    },
    foundation::{
        core::{Point, TargetRect},
        error::{ChernoffError, ChernoffResult},
    },
    render::{
        command::{DrawList, DrawSurface, FaceFeature},
        context::RenderContext,
        lip::{Parabola, stroke_parabola},
    },
};

/// Logical units of radius added per unit of eccentricity away from 0.5.
const ECCENTRICITY_SCALE: f64 = 20.0;

/// Radius bonus `(horizontal, vertical)` that turns a circle into an oval.
///
/// Above 0.5 the shape widens, below 0.5 it grows taller, never both. Bonuses are truncated to
/// whole logical units, so the magnitude grows in steps of one as `p` moves away from 0.5.
pub fn eccentricity(p: f64) -> (f64, f64) {
    if p > 0.5 {
        (((p - 0.5) * ECCENTRICITY_SCALE).trunc(), 0.0)
    } else {
        (0.0, ((p - 0.5).abs() * ECCENTRICITY_SCALE).trunc())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oval {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// One lip curve between the two mouth corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lip {
    pub left: Point,
    pub right: Point,
    pub curve: Parabola,
}

/// Every shape of one face in logical coordinates, before scaling.
///
/// Computing this up front means a face either fails before any command is emitted or draws
/// completely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub head: Oval,
    pub eyes: [Oval; 2],
    pub pupils: [Oval; 2],
    pub eyebrows: [Segment; 2],
    pub nose: [Segment; 3],
    pub lips: [Lip; 2],
}

impl FaceGeometry {
    pub fn compute(layout: &FaceLayout, face: &FaceDescriptor) -> ChernoffResult<Self> {
        let head = {
            let (ex, ey) = eccentricity(face.head_eccentricity());
            Oval {
                center: layout.head_center,
                rx: layout.head_radius + ex,
                ry: layout.head_radius + ey,
            }
        };

        let spacing = ((face.eye_spacing() - 0.5) * FEATURE_SCALE).trunc();
        let left_eye = Point::new(layout.eye_left_x - spacing, layout.eye_y);
        let right_eye = Point::new(layout.eye_right_x + spacing, layout.eye_y);

        let eyes = {
            let size = eye_size_offset(face.eye_size());
            let (ex, ey) = eccentricity(face.eye_eccentricity());
            let rx = layout.eye_radius + size + ex;
            let ry = layout.eye_radius + size + ey;
            [left_eye, right_eye].map(|center| Oval { center, rx, ry })
        };

        let pupils = {
            let diameter = ((face.pupil_size() * layout.pupil_radius).max(1.0) * 2.0).trunc();
            let r = diameter / 2.0;
            [left_eye, right_eye].map(|center| Oval { center, rx: r, ry: r })
        };

        let eyebrows = {
            let tilt = ((face.eyebrow_tilt() - 0.5) * FEATURE_SCALE).trunc();
            let outer_y = layout.eyebrow_y + tilt;
            let inner_y = layout.eyebrow_y - tilt;
            [
                Segment::new(
                    Point::new(layout.eyebrow_left_outer_x, outer_y),
                    Point::new(layout.eyebrow_left_inner_x, inner_y),
                ),
                Segment::new(
                    Point::new(layout.eyebrow_right_inner_x, inner_y),
                    Point::new(layout.eyebrow_right_outer_x, outer_y),
                ),
            ]
        };

        let nose = {
            let base_y =
                layout.nose_base_y + ((face.nose_height() - 0.5) / 2.0 * FEATURE_SCALE).trunc();
            let apex = layout.nose_apex;
            let half = layout.nose_width / 2.0;
            let left = Point::new(apex.x - half, base_y);
            let right = Point::new(apex.x + half, base_y);
            [
                Segment::new(apex, left),
                Segment::new(left, right),
                Segment::new(right, apex),
            ]
        };

        let lips = {
            let spread = (face.mouth_width() - 0.5) * MOUTH_SPREAD;
            let left = Point::new(layout.mouth_left_x - spread, layout.mouth_y);
            let right = Point::new(layout.mouth_right_x + spread, layout.mouth_y);
            let mid_x = left.x + (right.x - left.x) / 2.0;
            let mid_y = (face.mouth_curve() - 0.5) * FEATURE_SCALE + layout.mouth_y;
            let fullness = face.mouth_fullness() / 2.0 * FEATURE_SCALE;

            let lip = |y: f64| -> ChernoffResult<Lip> {
                let curve = Parabola::through(left, right, Point::new(mid_x, y)).ok_or_else(
                    || {
                        ChernoffError::config(format!(
                            "mouth corners collapse ({} >= {})",
                            left.x, right.x
                        ))
                    },
                )?;
                Ok(Lip { left, right, curve })
            };
            [lip(mid_y)?, lip(mid_y + fullness)?]
        };

        Ok(Self {
            head,
            eyes,
            pupils,
            eyebrows,
            nose,
            lips,
        })
    }

    /// Emit the six feature groups in paint order.
    pub fn emit<S: DrawSurface + ?Sized>(&self, ctx: &RenderContext, surface: &mut S) {
        for feature in FaceFeature::DRAW_ORDER {
            surface.begin_feature(feature);
            match feature {
                FaceFeature::Head => {
                    ctx.stroke_oval(surface, self.head.center, self.head.rx, self.head.ry);
                }
                FaceFeature::Eyes => {
                    for eye in &self.eyes {
                        ctx.stroke_oval(surface, eye.center, eye.rx, eye.ry);
                    }
                }
                FaceFeature::Pupils => {
                    for pupil in &self.pupils {
                        ctx.fill_oval(surface, pupil.center, pupil.rx, pupil.ry);
                    }
                }
                FaceFeature::Eyebrows => {
                    for brow in &self.eyebrows {
                        ctx.line(surface, brow.from, brow.to);
                    }
                }
                FaceFeature::Nose => {
                    for edge in &self.nose {
                        ctx.line(surface, edge.from, edge.to);
                    }
                }
                FaceFeature::Mouth => {
                    for lip in &self.lips {
                        stroke_parabola(surface, ctx, &lip.curve, lip.left, lip.right.x);
                    }
                }
            }
        }
    }
}

/// Draws Chernoff faces of any size at any position onto a [`DrawSurface`].
///
/// The painter holds only its (validated) layout. Each call builds its own [`RenderContext`],
/// so one painter can serve any number of threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacePainter {
    layout: FaceLayout,
}

impl FacePainter {
    pub fn new(layout: FaceLayout) -> ChernoffResult<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    /// Draw `face` scaled into `rect`.
    ///
    /// The descriptor is re-validated here because interpolation may extrapolate past `[0, 1]`.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        face: &FaceDescriptor,
        rect: TargetRect,
    ) -> ChernoffResult<()> {
        rect.validate()?;
        let face = FaceDescriptor::from_array(face.to_array())?;
        let geometry = FaceGeometry::compute(&self.layout, &face)?;
        geometry.emit(&RenderContext::new(rect), surface);
        Ok(())
    }

    /// Record the commands [`FacePainter::draw`] would issue.
    pub fn commands(&self, face: &FaceDescriptor, rect: TargetRect) -> ChernoffResult<DrawList> {
        let mut list = DrawList::new();
        self.draw(&mut list, face, rect)?;
        Ok(list)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
