use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tracing target of the MongoDB driver, quietened unless asked for.
const DRIVER_TARGET: &str = "mongodb";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default = "default_console_format")]
    pub console_format: String,

    #[serde(default)]
    pub file_enabled: bool,

    #[serde(
        default = "default_ext_level",
        deserialize_with = "deserialize_ext_level"
    )]
    pub ext_level: Option<HashMap<String, String>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: Some("./logs".to_string()),
            console_format: default_console_format(),
            file_enabled: false,
            ext_level: default_ext_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_console_format() -> String {
    "compact".to_string()
}

fn default_ext_level() -> Option<HashMap<String, String>> {
    let mut map = HashMap::new();
    map.insert(DRIVER_TARGET.to_string(), "warn".to_string());
    Some(map)
}

fn deserialize_ext_level<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;

    let mut map = HashMap::new();
    map.insert(DRIVER_TARGET.to_string(), "warn".to_string());

    if let Some(s) = s {
        if !s.is_empty() {
            for pair in s.split(',') {
                let pair = pair.trim();
                if let Some((key, value)) = pair.split_once(':') {
                    map.insert(key.trim().to_string(), value.trim().to_string());
                }
            }
        }
    }

    Ok(Some(map))
}
