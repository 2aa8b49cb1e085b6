//! Window configuration
//!
//! ```rust
//! use trellis_layout::WindowConfig;
//!
//! let config = WindowConfig::from_toml_str("animation_fps = 60").unwrap();
//! assert_eq!(config.animation_fps, 60);
//! assert_eq!(config.scale_factor, 1.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_core::Size;

/// Errors produced while loading a [`WindowConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid window config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("animation_fps must be at least 1")]
    ZeroAnimationFps,

    #[error("scale_factor must be positive, got {0}")]
    InvalidScaleFactor(f32),
}

/// Configuration for a root window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Fixed animation tick rate, independent of the display frame rate
    pub animation_fps: u32,
    /// Initial framebuffer size in physical pixels
    pub size: Size,
    /// Physical pixels per logical pixel
    pub scale_factor: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            animation_fps: 244,
            size: Size::new(800.0, 600.0),
            scale_factor: 1.0,
        }
    }
}

impl WindowConfig {
    /// Create a configuration with the given tick rate
    pub fn new(animation_fps: u32) -> Self {
        Self {
            animation_fps,
            ..Default::default()
        }
    }

    /// Set the initial framebuffer size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the physical-to-logical pixel ratio
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: WindowConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_fps == 0 {
            return Err(ConfigError::ZeroAnimationFps);
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::InvalidScaleFactor(self.scale_factor));
        }
        Ok(())
    }

    /// Replace invalid fields with their defaults
    ///
    /// Windows are created from the sanitized config, so the tick clock and
    /// seconds-to-ticks conversion always agree on the rate.
    pub fn sanitized(mut self) -> Self {
        if self.animation_fps == 0 {
            let fallback = Self::default().animation_fps;
            tracing::warn!("animation_fps is 0, using {}", fallback);
            self.animation_fps = fallback;
        }
        self.scale_factor = sanitize_scale(self.scale_factor);
        self
    }

    /// Length of one animation tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.animation_fps.max(1)))
    }
}

pub(crate) fn sanitize_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        tracing::warn!("ignoring invalid scale factor {}", scale_factor);
        1.0
    }
}
