use std::io::Write;
use std::path::{Path, PathBuf};

use rand::TryRngCore;
use serde::de::Error as SerdeDeError;

use crate::app_dirs::{self, AppDirError};

use super::{ConfigError, DemoConfig};

/// Default filename used to store the demo configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load the configuration, writing a default file on first launch.
pub fn load_or_default() -> Result<DemoConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let config = DemoConfig::default();
    save_to_path(&config, &path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}

/// Parse and normalize the TOML config at `path`.
pub fn load_from_path(path: &Path) -> Result<DemoConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    let parsed: DemoConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parsed.clone().normalized();
    if config != parsed {
        tracing::warn!(
            "Config at {} had out-of-range values; using normalized settings",
            path.display()
        );
    }
    Ok(config)
}

/// Write the config as TOML, creating parent directories as needed.
pub fn save_to_path(config: &DemoConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write through a randomly named sibling and rename over the target.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let write_error = |path: &Path, source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(write_error(
            path,
            std::io::Error::other("config path has no parent directory or file name"),
        ));
    };

    let mut suffix = [0u8; 6];
    rand::rngs::OsRng
        .try_fill_bytes(&mut suffix)
        .map_err(|err| write_error(path, std::io::Error::other(err.to_string())))?;
    let suffix: String = suffix.iter().map(|b| format!("{b:02x}")).collect();
    let tmp_path = dir.join(format!("{}.tmp-{suffix}", file_name.to_string_lossy()));

    let written = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .and_then(|mut file| file.write_all(data).and_then(|_| file.sync_all()));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_error(&tmp_path, source));
    }
    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        write_error(path, source)
    })
}

fn map_app_dir_error(error: AppDirError) -> ConfigError {
    match error {
        AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
