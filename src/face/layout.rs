use crate::foundation::{
    core::Point,
    error::{ChernoffError, ChernoffResult},
};

/// Base geometry of the neutral face, in the 100x100 logical design space.
///
/// These values shape the face every descriptor distorts. The defaults draw a round head with
/// eyes in the upper half, a small triangular nose and a mouth in the lower third.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceLayout {
    pub head_center: Point,
    pub head_radius: f64,
    pub eye_radius: f64,
    pub eye_left_x: f64,
    pub eye_right_x: f64,
    pub eye_y: f64,
    /// Scale applied to `pupil_size` before the minimum pupil size kicks in.
    pub pupil_radius: f64,
    pub eyebrow_left_outer_x: f64,
    pub eyebrow_left_inner_x: f64,
    pub eyebrow_right_inner_x: f64,
    pub eyebrow_right_outer_x: f64,
    pub eyebrow_y: f64,
    pub nose_apex: Point,
    /// Base line of the nose triangle before `nose_height` moves it.
    pub nose_base_y: f64,
    pub nose_width: f64,
    pub mouth_left_x: f64,
    pub mouth_right_x: f64,
    pub mouth_y: f64,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            head_center: Point::new(50.0, 50.0),
            head_radius: 30.0,
            eye_radius: 5.0,
            eye_left_x: 40.0,
            eye_right_x: 60.0,
            eye_y: 40.0,
            pupil_radius: 0.2,
            eyebrow_left_outer_x: 35.0,
            eyebrow_left_inner_x: 45.0,
            eyebrow_right_inner_x: 55.0,
            eyebrow_right_outer_x: 65.0,
            eyebrow_y: 30.0,
            nose_apex: Point::new(50.0, 45.0),
            nose_base_y: 55.0,
            nose_width: 8.0,
            mouth_left_x: 40.0,
            mouth_right_x: 60.0,
            mouth_y: 65.0,
        }
    }
}

impl FaceLayout {
    pub fn validate(&self) -> ChernoffResult<()> {
        let scalars = [
            ("head_center.x", self.head_center.x),
            ("head_center.y", self.head_center.y),
            ("head_radius", self.head_radius),
            ("eye_radius", self.eye_radius),
            ("eye_left_x", self.eye_left_x),
            ("eye_right_x", self.eye_right_x),
            ("eye_y", self.eye_y),
            ("pupil_radius", self.pupil_radius),
            ("eyebrow_left_outer_x", self.eyebrow_left_outer_x),
            ("eyebrow_left_inner_x", self.eyebrow_left_inner_x),
            ("eyebrow_right_inner_x", self.eyebrow_right_inner_x),
            ("eyebrow_right_outer_x", self.eyebrow_right_outer_x),
            ("eyebrow_y", self.eyebrow_y),
            ("nose_apex.x", self.nose_apex.x),
            ("nose_apex.y", self.nose_apex.y),
            ("nose_base_y", self.nose_base_y),
            ("nose_width", self.nose_width),
            ("mouth_left_x", self.mouth_left_x),
            ("mouth_right_x", self.mouth_right_x),
            ("mouth_y", self.mouth_y),
        ];
        for (name, v) in scalars {
            if !v.is_finite() {
                return Err(ChernoffError::config(format!(
                    "layout.{name} must be finite, got {v}"
                )));
            }
        }

        for (name, v) in [
            ("head_radius", self.head_radius),
            ("nose_width", self.nose_width),
        ] {
            if v <= 0.0 {
                return Err(ChernoffError::config(format!(
                    "layout.{name} must be > 0, got {v}"
                )));
            }
        }
        // The smallest eyes shrink by this much; the radius must survive it.
        let min_eye_radius = -eye_size_offset(0.0);
        if self.eye_radius <= min_eye_radius {
            return Err(ChernoffError::config(format!(
                "layout.eye_radius must be > {min_eye_radius}, got {}",
                self.eye_radius
            )));
        }
        if self.pupil_radius < 0.0 {
            return Err(ChernoffError::config("layout.pupil_radius must be >= 0"));
        }

        // The narrowest mouth pulls each corner MOUTH_SPREAD / 2 units inwards; the corners must
        // stay apart or the lip parabola has no unique solution.
        if self.mouth_right_x - self.mouth_left_x <= MOUTH_SPREAD {
            return Err(ChernoffError::config(format!(
                "layout.mouth_right_x ({}) must exceed mouth_left_x ({}) by more than {}",
                self.mouth_right_x, self.mouth_left_x, MOUTH_SPREAD
            )));
        }
        Ok(())
    }
}

/// Logical units a feature moves per unit of parameter away from 0.5.
pub(crate) const FEATURE_SCALE: f64 = 10.0;

/// Logical units the mouth corners move per unit of `mouth_width` away from 0.5.
pub(crate) const MOUTH_SPREAD: f64 = 10.0;

/// Whole logical units added to both eye radii for an `eye_size` value.
pub(crate) fn eye_size_offset(eye_size: f64) -> f64 {
    ((eye_size - 0.5) / 2.0 * FEATURE_SCALE).trunc()
}

#[cfg(test)]
#[path = "../../tests/unit/face/layout.rs"]
mod tests;
