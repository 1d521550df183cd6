use vello_cpu::kurbo::{BezPath, Ellipse, Rect, Shape as _, Stroke};

use crate::{
    foundation::{
        core::Rgba8,
        error::{ChernoffError, ChernoffResult},
    },
    render::command::DrawSurface,
};

/// Rendered pixels, row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Colors and stroke width used when rasterizing faces.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceStyle {
    /// Must be fully opaque.
    pub background: Rgba8,
    pub ink: Rgba8,
    /// Outline and line width in device pixels.
    pub stroke_width: f64,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            ink: Rgba8::BLACK,
            stroke_width: 1.0,
        }
    }
}

impl FaceStyle {
    pub fn validate(&self) -> ChernoffResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChernoffError::config(format!(
                "style.stroke_width must be a positive number, got {}",
                self.stroke_width
            )));
        }
        if self.background.a != u8::MAX {
            return Err(ChernoffError::config(format!(
                "style.background must be opaque (a = 255), got a = {}",
                self.background.a
            )));
        }
        Ok(())
    }
}

/// CPU raster surface backed by `vello_cpu`.
///
/// Commands are recorded into a render context and rasterized by [`PixmapSurface::finish`].
/// Strokes are centered on pixel centers, so a 1px line at `x` lights column `x`.
pub struct PixmapSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    stroke_width: f64,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32, style: &FaceStyle) -> ChernoffResult<Self> {
        style.validate()?;
        let width_u16 = u16::try_from(width)
            .ok()
            .filter(|&w| w > 0)
            .ok_or_else(|| {
                ChernoffError::invalid_dimensions(format!("surface width {width} not in 1..=65535"))
            })?;
        let height_u16 = u16::try_from(height)
            .ok()
            .filter(|&h| h > 0)
            .ok_or_else(|| {
                ChernoffError::invalid_dimensions(format!(
                    "surface height {height} not in 1..=65535"
                ))
            })?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_paint(to_color(style.background));
        ctx.fill_rect(&Rect::new(0.0, 0.0, f64::from(width), f64::from(height)));
        ctx.set_paint(to_color(style.ink));
        ctx.set_stroke(Stroke::new(style.stroke_width));

        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx,
            stroke_width: style.stroke_width,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn so far.
    ///
    /// The background is opaque, so premultiplied and straight alpha bytes coincide.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn ellipse(x: i32, y: i32, width: i32, height: i32, inset: f64) -> Option<BezPath> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let rx = f64::from(width) / 2.0;
        let ry = f64::from(height) / 2.0;
        let center = (f64::from(x) + rx + inset, f64::from(y) + ry + inset);
        Some(Ellipse::new(center, (rx, ry), 0.0).to_path(0.1))
    }
}

impl DrawSurface for PixmapSurface {
    fn stroke_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if let Some(path) = Self::ellipse(x, y, width, height, 0.5) {
            self.ctx.stroke_path(&path);
        }
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if let Some(path) = Self::ellipse(x, y, width, height, 0.0) {
            self.ctx.fill_path(&path);
        }
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if x1 == x2 && y1 == y2 {
            // A zero-length stroke has no extent; paint the pixel instead.
            let half = self.stroke_width / 2.0;
            let (cx, cy) = (f64::from(x1) + 0.5, f64::from(y1) + 0.5);
            self.ctx
                .fill_rect(&Rect::new(cx - half, cy - half, cx + half, cy + half));
            return;
        }
        let mut path = BezPath::new();
        path.move_to((f64::from(x1) + 0.5, f64::from(y1) + 0.5));
        path.line_to((f64::from(x2) + 0.5, f64::from(y2) + 0.5));
        self.ctx.stroke_path(&path);
    }
}

fn to_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
