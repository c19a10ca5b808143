use crate::core::formatting::DEFAULT_BYTE_PRECISION;
use crate::core::icon::DEFAULT_ICON_SIZE;
use crate::utils::get_data_dir;
use crate::validators::{validate_byte_precision, validate_icon_size};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Defaults applied by the CLI when a flag is not given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Decimal places for byte sizes (negative values behave like 0)
    #[serde(default = "default_byte_precision")]
    pub byte_precision: i32,
    /// Placeholder icon size in pixels
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
    /// Directory for saved SVG files (current directory when unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            byte_precision: default_byte_precision(),
            icon_size: default_icon_size(),
            output_dir: None,
        }
    }
}

impl FormatConfig {
    /// Replaces out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = validate_byte_precision(self.byte_precision) {
            tracing::warn!("{e}, using default");
            self.byte_precision = default_byte_precision();
        }
        if let Err(e) = validate_icon_size(self.icon_size) {
            tracing::warn!("{e}, using default");
            self.icon_size = default_icon_size();
        }
        self
    }

    /// Output directory for saved files, falling back to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_byte_precision() -> i32 {
    DEFAULT_BYTE_PRECISION
}

fn default_icon_size() -> u32 {
    DEFAULT_ICON_SIZE
}

/// Path of `config.json` in the data directory
pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|mut path| {
        path.push("config.json");
        path
    })
}

/// Saves the config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// Does nothing when no data directory can be determined.
pub async fn save_config(config: &FormatConfig) -> std::io::Result<()> {
    if let Some(path) = config_path() {
        save_config_to(config, &path).await?;
    }
    Ok(())
}

pub(crate) async fn save_config_to(
    config: &FormatConfig,
    path: &std::path::Path,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    // Create file with restrictive permissions from the start
    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })
}

/// Loads the config from disk, or returns default if not found.
///
/// A corrupt file is logged and ignored rather than treated as an error.
pub async fn load_config() -> FormatConfig {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => FormatConfig::default(),
    }
}

pub(crate) async fn load_config_from(path: &std::path::Path) -> FormatConfig {
    let Ok(json) = tokio::fs::read_to_string(path).await else {
        return FormatConfig::default();
    };

    match serde_json::from_str::<FormatConfig>(&json) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Ignoring unreadable config: {e}");
            FormatConfig::default()
        }
    }
}
