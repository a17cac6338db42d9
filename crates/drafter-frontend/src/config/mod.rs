//! Application configuration module
//!
//! Frontend-only preferences: the engine and model never read configuration
//! directly, the frontend applies it when constructing the session.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use serde::{Deserialize, Serialize};

use drafter_core::{DEFAULT_PRECISION_FACTOR, ViewBox};

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Start with ortho mode enabled
    pub ortho: bool,
    /// Scale factor between viewport height and pick precision
    pub cursor_precision_factor: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            ortho: false,
            cursor_precision_factor: DEFAULT_PRECISION_FACTOR,
        }
    }
}

/// Timeline display preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineConfig {
    /// Number of timeline lines kept on screen
    pub scrollback: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { scrollback: 6 }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Initial viewport rectangle
    #[serde(default)]
    pub viewport: ViewBox,
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// Timeline settings
    #[serde(default)]
    pub timeline: TimelineConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
