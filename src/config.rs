//! Runtime configuration
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the stock app.

use crate::error::{Result, SignSpeakError};
use crate::settings::Settings;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Configuration for the whole application
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the mock sign recognizer produces its text
    pub recognition_delay_ms: u64,

    /// Length of the mock sign animation
    pub playback_delay_ms: u64,

    /// Delay before mock voice capture fills the input
    pub voice_capture_delay_ms: u64,

    /// How long a toast stays visible
    pub toast_duration_ms: u64,

    /// Preload the sample history entries
    pub seed_history: bool,

    /// Initial window size in logical points
    pub window_width: f32,
    pub window_height: f32,

    /// Settings in effect at startup
    pub initial_settings: Settings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recognition_delay_ms: 2000,
            playback_delay_ms: 3000,
            voice_capture_delay_ms: 2000,
            toast_duration_ms: 3000,
            seed_history: true,
            window_width: 420.0,
            window_height: 820.0,
            initial_settings: Settings::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SignSpeakError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| SignSpeakError::Config(format!("{} ({})", e, path.display())))
    }

    /// Parse and validate a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| SignSpeakError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the three mock delays
    pub fn with_delays(mut self, recognition_ms: u64, playback_ms: u64, voice_ms: u64) -> Self {
        self.recognition_delay_ms = recognition_ms;
        self.playback_delay_ms = playback_ms;
        self.voice_capture_delay_ms = voice_ms;
        self
    }

    /// Start with an empty history
    pub fn without_seed_history(mut self) -> Self {
        self.seed_history = false;
        self
    }

    pub fn recognition_delay(&self) -> Duration {
        Duration::from_millis(self.recognition_delay_ms)
    }

    pub fn playback_delay(&self) -> Duration {
        Duration::from_millis(self.playback_delay_ms)
    }

    pub fn voice_capture_delay(&self) -> Duration {
        Duration::from_millis(self.voice_capture_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let delays = [
            ("recognition_delay_ms", self.recognition_delay_ms),
            ("playback_delay_ms", self.playback_delay_ms),
            ("voice_capture_delay_ms", self.voice_capture_delay_ms),
            ("toast_duration_ms", self.toast_duration_ms),
        ];
        for (name, value) in delays {
            if value == 0 {
                return Err(SignSpeakError::Config(format!("{} must be positive", name)));
            }
        }

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SignSpeakError::Config(format!(
                "Window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        Ok(())
    }
}
