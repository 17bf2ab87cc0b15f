use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::config::{LogConfig, MongoConfig};

/// Variable names of the original shell template, honoured as overrides.
const PLACEHOLDER_OVERRIDES: [(&str, &str); 5] = [
    ("MONGO_USER", "mongo.user"),
    ("MONGO_PASSWORD", "mongo.password"),
    ("MONGO_DB", "mongo.db"),
    ("MONGO_COLLECTION", "mongo.collection"),
    ("MONGO_AUTH_MECHANISM", "mongo.auth_mechanism"),
];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub mongo: MongoConfig,

    #[serde(default)]
    pub logs: LogConfig,
}

fn get_env_file_name() -> String {
    if let Ok(env_file) = std::env::var("MONGOSEED_ENV_FILE") {
        return env_file;
    }
    match std::env::var("MONGOSEED_ENV")
        .map(|v| v.to_lowercase())
        .as_deref()
    {
        Ok("dev") => ".env.dev".to_string(),
        Ok("test") => ".env.test".to_string(),
        _ => ".env".to_string(),
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::from_filename(get_env_file_name()).ok();

        let mut builder = Config::builder().add_source(
            Environment::with_prefix("MONGOSEED")
                .prefix_separator("__")
                .separator("__"),
        );

        for (var, key) in PLACEHOLDER_OVERRIDES {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn print_config(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Failed to serialize settings: {}", err),
        }
    }
}
