use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// App settings stored in settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Plan opened when no id is given on the command line
    #[serde(default)]
    pub default_plan: Option<Uuid>,
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_use_emoji() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_plan: None,
            use_emoji: true,
        }
    }
}

/// Load settings from settings.json file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        // If file doesn't exist, return default settings
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to settings.json file
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::store::atomic_write(path, &json)?;
    Ok(())
}
