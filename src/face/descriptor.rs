use std::str::FromStr;

use rand::Rng;

use crate::{
    animation::state::AnimationState,
    foundation::error::{ChernoffError, ChernoffResult},
};

/// A complete description of one Chernoff face.
///
/// Each field is a scalar in `[0, 1]`; `0.5` is the neutral value for every feature. The array
/// views ([`FaceDescriptor::to_array`], [`FaceDescriptor::from_array`]) use the fixed order the
/// fields are declared in, which is the order the renderer maps features from.
///
/// Values are validated on construction and the fields are private, so a descriptor that exists
/// is always renderable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FaceDescriptor {
    head_eccentricity: f64,
    eye_eccentricity: f64,
    pupil_size: f64,
    eyebrow_tilt: f64,
    nose_height: f64,
    mouth_curve: f64,
    eye_spacing: f64,
    eye_size: f64,
    mouth_width: f64,
    mouth_fullness: f64,
}

/// Field names in array order.
pub const PARAM_NAMES: [&str; FaceDescriptor::PARAM_COUNT] = [
    "head_eccentricity",
    "eye_eccentricity",
    "pupil_size",
    "eyebrow_tilt",
    "nose_height",
    "mouth_curve",
    "eye_spacing",
    "eye_size",
    "mouth_width",
    "mouth_fullness",
];

impl FaceDescriptor {
    pub const PARAM_COUNT: usize = 10;

    pub fn from_array(p: [f64; Self::PARAM_COUNT]) -> ChernoffResult<Self> {
        for (name, v) in PARAM_NAMES.iter().zip(p) {
            if !v.is_finite() {
                return Err(ChernoffError::invalid_descriptor(format!(
                    "{name} must be finite, got {v}"
                )));
            }
            if !(0.0..=1.0).contains(&v) {
                return Err(ChernoffError::invalid_descriptor(format!(
                    "{name} must be within [0, 1], got {v}"
                )));
            }
        }

        Ok(Self::from_array_unchecked(p))
    }

    pub fn from_slice(p: &[f64]) -> ChernoffResult<Self> {
        let arr: [f64; Self::PARAM_COUNT] = p.try_into().map_err(|_| {
            ChernoffError::invalid_descriptor(format!(
                "expected {} parameters, got {}",
                Self::PARAM_COUNT,
                p.len()
            ))
        })?;
        Self::from_array(arr)
    }

    /// Every feature at its neutral value (0.5).
    pub fn neutral() -> Self {
        Self::from_array_unchecked([0.5; Self::PARAM_COUNT])
    }

    /// Uniformly random face from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Uniformly random face, each component drawn independently from `[0, 1)`.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let mut p = [0.0; Self::PARAM_COUNT];
        for v in &mut p {
            *v = rng.random::<f64>();
        }
        Self::from_array_unchecked(p)
    }

    pub fn to_array(&self) -> [f64; Self::PARAM_COUNT] {
        [
            self.head_eccentricity,
            self.eye_eccentricity,
            self.pupil_size,
            self.eyebrow_tilt,
            self.nose_height,
            self.mouth_curve,
            self.eye_spacing,
            self.eye_size,
            self.mouth_width,
            self.mouth_fullness,
        ]
    }

    /// Euclidean distance over all ten components.
    pub fn distance(&self, other: &Self) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Componentwise `start + t * (end - start)`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate. The result skips range
    /// validation for that reason; the animation driver only ever passes `t` in `[0, 1)`.
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        let a = start.to_array();
        let b = end.to_array();
        Self::from_array_unchecked(std::array::from_fn(|i| lerp(a[i], b[i], t)))
    }

    pub fn head_eccentricity(&self) -> f64 {
        self.head_eccentricity
    }

    pub fn eye_eccentricity(&self) -> f64 {
        self.eye_eccentricity
    }

    pub fn pupil_size(&self) -> f64 {
        self.pupil_size
    }

    pub fn eyebrow_tilt(&self) -> f64 {
        self.eyebrow_tilt
    }

    pub fn nose_height(&self) -> f64 {
        self.nose_height
    }

    pub fn mouth_curve(&self) -> f64 {
        self.mouth_curve
    }

    pub fn eye_spacing(&self) -> f64 {
        self.eye_spacing
    }

    pub fn eye_size(&self) -> f64 {
        self.eye_size
    }

    pub fn mouth_width(&self) -> f64 {
        self.mouth_width
    }

    pub fn mouth_fullness(&self) -> f64 {
        self.mouth_fullness
    }

    fn from_array_unchecked(p: [f64; Self::PARAM_COUNT]) -> Self {
        let [
            head_eccentricity,
            eye_eccentricity,
            pupil_size,
            eyebrow_tilt,
            nose_height,
            mouth_curve,
            eye_spacing,
            eye_size,
            mouth_width,
            mouth_fullness,
        ] = p;
        Self {
            head_eccentricity,
            eye_eccentricity,
            pupil_size,
            eyebrow_tilt,
            nose_height,
            mouth_curve,
            eye_spacing,
            eye_size,
            mouth_width,
            mouth_fullness,
        }
    }
}

impl Default for FaceDescriptor {
    fn default() -> Self {
        Self::neutral()
    }
}

impl AnimationState for FaceDescriptor {
    fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        FaceDescriptor::interpolate(start, end, t)
    }
}

impl TryFrom<&[f64]> for FaceDescriptor {
    type Error = ChernoffError;

    fn try_from(value: &[f64]) -> ChernoffResult<Self> {
        Self::from_slice(value)
    }
}

/// Ten comma separated numbers in array order, e.g. `0.5,0.5,0.1,...`.
impl FromStr for FaceDescriptor {
    type Err = ChernoffError;

    fn from_str(s: &str) -> ChernoffResult<Self> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|e| {
                    ChernoffError::invalid_descriptor(format!("parse '{part}' as number: {e}"))
                })
            })
            .collect::<ChernoffResult<Vec<_>>>()?;
        Self::from_slice(&values)
    }
}

/// Exact at both endpoints and never outside `[a, b]` for `t` in `[0, 1]`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        return b;
    }
    let v = a + t * (b - a);
    if (0.0..=1.0).contains(&t) {
        v.clamp(a.min(b), a.max(b))
    } else {
        v
    }
}

// Deserialization goes through the same validation as `from_array`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFaceDescriptor {
    head_eccentricity: f64,
    eye_eccentricity: f64,
    pupil_size: f64,
    eyebrow_tilt: f64,
    nose_height: f64,
    mouth_curve: f64,
    eye_spacing: f64,
    eye_size: f64,
    mouth_width: f64,
    mouth_fullness: f64,
}

impl<'de> serde::Deserialize<'de> for FaceDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFaceDescriptor::deserialize(deserializer)?;
        Self::from_array([
            raw.head_eccentricity,
            raw.eye_eccentricity,
            raw.pupil_size,
            raw.eyebrow_tilt,
            raw.nose_height,
            raw.mouth_curve,
            raw.eye_spacing,
            raw.eye_size,
            raw.mouth_width,
            raw.mouth_fullness,
        ])
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/descriptor.rs"]
mod tests;
