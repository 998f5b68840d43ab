//! Configuration management for pixelperfect.
//!
//! Settings are read from `<config dir>/pixelperfect/config.toml`. Every field
//! has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::notify::{DEFAULT_CAPACITY, DEFAULT_DISMISS_AFTER};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Toast notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Debounce waits and simulated latencies
    #[serde(default)]
    pub timing: TimingConfig,

    /// Scroll-effect thresholds, in page rows
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Config {
    /// Load configuration from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate();

        Ok(config)
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("pixelperfect").join("config.toml"))
    }

    /// Clamp values that would break the components using them
    pub fn validate(&mut self) {
        self.notifications.capacity = self.notifications.capacity.max(1);
        self.timing.counter_frame_ms = self.timing.counter_frame_ms.max(1);
    }
}

/// Toast notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Maximum notifications on screen at once
    pub capacity: usize,

    /// Auto-dismiss delay; 0 keeps notifications until dismissed
    pub dismiss_after_ms: u64,

    /// Screen corner for the toast stack
    pub position: ToastPosition,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            dismiss_after_ms: DEFAULT_DISMISS_AFTER.as_millis() as u64,
            position: ToastPosition::TopRight,
        }
    }
}

impl NotificationConfig {
    pub fn dismiss_after(&self) -> Option<Duration> {
        (self.dismiss_after_ms > 0).then(|| Duration::from_millis(self.dismiss_after_ms))
    }
}

/// Screen position of the toast stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    BottomRight,
    BottomLeft,
    #[default]
    TopRight,
    TopLeft,
    Center,
}

/// Debounce waits and simulated latencies, all in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub header_debounce_ms: u64,
    pub nav_debounce_ms: u64,
    pub scroll_top_debounce_ms: u64,
    pub form_submit_ms: u64,
    pub payment_ms: u64,
    pub loading_ms: u64,
    pub loading_fade_ms: u64,
    pub loading_fallback_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
    pub cta_scroll_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            header_debounce_ms: 10,
            nav_debounce_ms: 50,
            scroll_top_debounce_ms: 100,
            form_submit_ms: 2000,
            payment_ms: 2500,
            loading_ms: 1200,
            loading_fade_ms: 500,
            loading_fallback_ms: 4000,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            cta_scroll_delay_ms: 1500,
        }
    }
}

/// Scroll-effect thresholds, in terminal rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the header switches to its solid style
    pub header_solid_after: u16,
    /// Offset past which scrolling down hides the header
    pub header_hide_after: u16,
    /// Offset past which the scroll-to-top button shows
    pub scroll_top_after: u16,
    /// Lead distance for active-section highlighting
    pub nav_offset: u16,
    /// Gap left above a section when jumping to it
    pub section_gap: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_solid_after: 3,
            header_hide_after: 10,
            scroll_top_after: 20,
            nav_offset: 3,
            section_gap: 1,
        }
    }
}
