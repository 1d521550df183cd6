use std::time::Duration;

use crate::foundation::error::{ChernoffError, ChernoffResult};

pub use kurbo::{Point, Vec2};

/// Device-space rectangle a face is drawn into.
///
/// `x`/`y` are the top-left corner in device pixels. Width and height must be in
/// `1..=TargetRect::MAX_SIDE` and the far edges must fit in `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TargetRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TargetRect {
    /// Largest accepted width or height, the same limit as a raster surface.
    pub const MAX_SIDE: i32 = u16::MAX as i32;

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> ChernoffResult<Self> {
        let rect = Self {
            x,
            y,
            width,
            height,
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Rectangle anchored at the origin.
    pub fn sized(width: i32, height: i32) -> ChernoffResult<Self> {
        Self::new(0, 0, width, height)
    }

    pub fn validate(&self) -> ChernoffResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ChernoffError::invalid_dimensions(format!(
                "target rect must have positive width and height, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_SIDE || self.height > Self::MAX_SIDE {
            return Err(ChernoffError::invalid_dimensions(format!(
                "target rect sides must be <= {}, got {}x{}",
                Self::MAX_SIDE,
                self.width,
                self.height
            )));
        }
        if self.x.checked_add(self.width).is_none() || self.y.checked_add(self.height).is_none() {
            return Err(ChernoffError::invalid_dimensions(format!(
                "target rect at ({}, {}) with size {}x{} overflows device coordinates",
                self.x, self.y, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Integer animation frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    /// Highest rate whose integer frame delay is still at least one millisecond.
    pub const MAX: u32 = 1000;

    pub fn new(fps: u32) -> ChernoffResult<Self> {
        if fps == 0 {
            return Err(ChernoffError::invalid_timing("fps must be > 0"));
        }
        if fps > Self::MAX {
            return Err(ChernoffError::invalid_timing(format!(
                "fps must be <= {} (frame delay would round to 0 ms), got {fps}",
                Self::MAX
            )));
        }
        Ok(Self(fps))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whole milliseconds between frames (`1000 / fps`, truncated).
    pub fn frame_delay_ms(self) -> u64 {
        1000 / u64::from(self.0)
    }

    pub fn frame_delay(self) -> Duration {
        Duration::from_millis(self.frame_delay_ms())
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u32> for Fps {
    type Error = ChernoffError;

    fn try_from(value: u32) -> ChernoffResult<Self> {
        Self::new(value)
    }
}

impl From<Fps> for u32 {
    fn from(value: Fps) -> Self {
        value.0
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiplied channel bytes, `[r, g, b, a]`.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
