use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transport: TransportConfig,
    pub storage: StorageConfig,
    pub path_store: PathStoreConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub url: String,
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub directory: PathBuf,
    pub paths_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStoreConfig {
    /// Drop samples where x or y is exactly zero (the feed's "no reading yet" value).
    pub skip_zero_positions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub trajectory_width: u32,
    pub trajectory_height: u32,
    pub joystick_size: u32,
    pub output: PathBuf,
    /// Browser auto-refresh interval for the published page, 0 disables it.
    pub refresh_seconds: u32,
    pub robot_colors: HashMap<String, String>,
    pub default_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Layered load: defaults, then the optional TOML file, then
    /// `DASHBOARD__SECTION__KEY` environment variables.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = config::File::from(path.as_ref())
            .format(config::FileFormat::Toml)
            .required(false);

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("DASHBOARD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Config>()?;
        Ok(config)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:4001".to_string(),
            channel_capacity: 256,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            paths_key: "robotPaths".to_string(),
        }
    }
}

impl Default for PathStoreConfig {
    fn default() -> Self {
        Self {
            skip_zero_positions: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            trajectory_width: 600,
            trajectory_height: 600,
            joystick_size: 100,
            output: PathBuf::from("dashboard.html"),
            refresh_seconds: 1,
            robot_colors: HashMap::new(),
            default_color: "#000000".to_string(),
        }
    }
}
