/// Convenience result type used across the crate.
pub type ChernoffResult<T> = Result<T, ChernoffError>;

/// Top-level error taxonomy used by face, render and animation APIs.
///
/// Every variant except [`ChernoffError::Other`] describes caller input that was rejected at an
/// API boundary. Nothing here is raised halfway through drawing a face.
#[derive(thiserror::Error, Debug)]
pub enum ChernoffError {
    /// A face description has the wrong parameter count or a non-finite/out-of-range value.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// A target rectangle or raster surface is non-positive, larger than 65535 pixels per side,
    /// or placed so its edges overflow `i32`.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// An animation duration or frame rate that cannot produce a frame schedule.
    #[error("invalid timing: {0}")]
    InvalidTiming(String),

    /// Errors raised while driving an animation (busy driver, poisoned animator, dead worker).
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid layout tunables or render style.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing configuration and descriptors.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChernoffError {
    /// Build a [`ChernoffError::InvalidDescriptor`] value.
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Build a [`ChernoffError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`ChernoffError::InvalidTiming`] value.
    pub fn invalid_timing(msg: impl Into<String>) -> Self {
        Self::InvalidTiming(msg.into())
    }

    /// Build a [`ChernoffError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ChernoffError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ChernoffError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
