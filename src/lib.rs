//! Chernoff faces: cartoon faces whose features encode a ten-dimensional data point.
//!
//! The crate maps a [`FaceDescriptor`] onto primitive drawing commands inside any target
//! rectangle and animates smoothly between two descriptors:
//!
//! - Build descriptors from explicit values, text or a random generator
//! - Draw them with a [`FacePainter`] onto any [`DrawSurface`] (a [`DrawList`] recorder and a
//!   CPU raster [`PixmapSurface`] are included)
//! - Play transitions in real time with an [`AnimationDriver`], or render them offline with
//!   [`export_frames`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod face;
pub(crate) mod render;

pub use crate::foundation::core::{Fps, Point, Rgba8, TargetRect, Vec2};
pub use crate::foundation::error::{ChernoffError, ChernoffResult};

pub use crate::animation::driver::{AnimationDriver, AnimationHandle, AnimationReport, CancelToken};
pub use crate::animation::export::{ExportOptions, export_frames};
pub use crate::animation::schedule::{AnimationSettings, FrameSchedule, FrameTick, Pacing};
pub use crate::animation::state::{AnimationState, Animator, FaceAnimator};
pub use crate::config::ChernoffConfig;
pub use crate::face::descriptor::{FaceDescriptor, PARAM_NAMES};
pub use crate::face::layout::FaceLayout;
pub use crate::render::command::{DrawCommand, DrawItem, DrawList, DrawSurface, FaceFeature};
pub use crate::render::context::{LOGICAL_SIZE, RenderContext};
pub use crate::render::cpu::{FaceStyle, FrameRGBA, PixmapSurface};
pub use crate::render::lip::Parabola;
pub use crate::render::painter::{FaceGeometry, FacePainter, Lip, Oval, Segment, eccentricity};
