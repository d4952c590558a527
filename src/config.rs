use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest usable tick interval; a zero period cannot drive the event loop.
pub const MIN_TICK_RATE_MS: u64 = 1;

/// A config file that exists but cannot be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tui: TuiConfig,
    pub log: LogConfig,
}

/// Catalog service endpoints and the fixed list page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root, e.g. `https://pokeapi.co/api/v2`.
    pub base_url: String,
    /// Collection path segment under the root.
    pub collection: String,
    /// Entries requested by the list loader.
    pub list_limit: u32,
    /// Offset of the list page. Only sent when non-zero.
    pub list_offset: u32,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Detail panels stack vertically when the detail area is narrower than this.
    pub stack_below_width: u16,
}

/// Log file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Override the log directory.
    pub dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            collection: "pokemon".to_string(),
            list_limit: 151,
            list_offset: 0,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            stack_below_width: 72,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            dir: None,
        }
    }
}

impl TuiConfig {
    /// Tick interval for the event loop, raised to [`MIN_TICK_RATE_MS`].
    pub fn tick_rate(&self) -> Duration {
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            log::warn!(
                "tick_rate_ms = {} is too small; using {MIN_TICK_RATE_MS}",
                self.tick_rate_ms
            );
        }
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/pokedex-explorer/config.toml`.
    ///
    /// A missing file yields defaults. A file that cannot be read or parsed
    /// is an error; callers fall back to defaults once logging is up.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Resolved log directory (override or XDG data dir).
    pub fn log_dir(&self) -> PathBuf {
        self.log.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("pokedex-explorer").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("pokedex-explorer").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
