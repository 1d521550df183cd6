use std::{fs, path::Path};

use anyhow::Context as _;

use crate::{
    animation::schedule::AnimationSettings,
    face::layout::FaceLayout,
    foundation::error::{ChernoffError, ChernoffResult},
    render::{cpu::FaceStyle, painter::FacePainter},
};

/// Everything tunable about drawing and animating faces, loadable from JSON.
///
/// Every section is optional; missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChernoffConfig {
    pub animation: AnimationSettings,
    pub layout: FaceLayout,
    pub style: FaceStyle,
}

impl ChernoffConfig {
    pub fn from_json_str(s: &str) -> ChernoffResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ChernoffError::serde(format!("config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> ChernoffResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> ChernoffResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChernoffError::serde(e.to_string()))
    }

    pub fn validate(&self) -> ChernoffResult<()> {
        self.layout.validate()?;
        self.style.validate()
    }

    pub fn painter(&self) -> ChernoffResult<FacePainter> {
        FacePainter::new(self.layout.clone())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
