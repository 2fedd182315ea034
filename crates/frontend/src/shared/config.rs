//! Runtime configuration of the admin panel.
//!
//! The defaults are embedded in the bundle. An operator can override any key
//! by storing a TOML document in `localStorage` under [`CONFIG_STORAGE_KEY`].

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_STORAGE_KEY: &str = "orders_admin.config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub layout: LayoutConfig,
    pub polling: PollingConfig,
    pub animation: AnimationConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means same origin
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub mobile_breakpoint_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PollingConfig {
    pub new_orders_interval_ms: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            new_orders_interval_ms: 30_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub row_fade_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 500,
            counter_frame_ms: 16,
            row_fade_ms: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u32,
    pub fade_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 5_000,
            fade_ms: 300,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[layout]
mobile_breakpoint_px = 768

[polling]
new_orders_interval_ms = 30000

[animation]
counter_duration_ms = 500
counter_frame_ms = 16
row_fade_ms = 300

[notifications]
lifetime_ms = 5000
fade_ms = 300
"#;

/// Parse a TOML document; keys it does not name keep their defaults
pub fn parse_config(text: &str) -> Result<AdminConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Load configuration
///
/// Search order:
/// 1. TOML override in localStorage
/// 2. Embedded default config
pub fn load_config() -> AdminConfig {
    if let Some(text) = stored_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring config override: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is broken: {}", e);
        AdminConfig::default()
    })
}
