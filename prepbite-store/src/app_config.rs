use prepbite_catalog::PricingConfig;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub pricing: PricingConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// JSON document backing the `file` backend
    pub path: Option<PathBuf>,
    pub redis_url: Option<String>,
    pub cart_key: String,
    pub orders_key: String,
    /// Byte budget for the `memory` backend, like a browser storage quota
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            path: None,
            redis_url: None,
            cart_key: "prepbiteCart".to_string(),
            orders_key: "prepbiteOrders".to_string(),
            quota_bytes: None,
        }
    }
}

/// Toast timings: how long a message stays up, then how long it takes to slide out.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: u64,
    pub transition_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3500,
            transition_ms: 300,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Layer `{dir}/default`, `{dir}/{run_mode}` and `{dir}/local` (all
    /// optional, any format the `config` crate reads) under `PREPBITE__*`
    /// environment variables.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let layer = |name: &str| {
            let path = dir.join(name);
            config::File::with_name(&path.to_string_lossy()).required(false)
        };

        let settings = config::Config::builder()
            .add_source(layer("default"))
            .add_source(layer(run_mode))
            // Not checked in
            .add_source(layer("local"))
            // e.g. PREPBITE__STORAGE__BACKEND=file
            .add_source(config::Environment::with_prefix("PREPBITE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
