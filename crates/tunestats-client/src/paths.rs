use std::path::PathBuf;

use tunestats_types::ConfigError;

const DATA_DIR: &str = ".tunestats";

/// Name of the key-value file inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Get data directory path.
///
/// Priority:
/// 1. `TUNESTATS_DATA_DIR` environment variable
/// 2. `~/.tunestats`
///
/// The directory is created lazily by the first write.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(custom_dir) = std::env::var("TUNESTATS_DATA_DIR") {
        if !custom_dir.is_empty() {
            return Ok(PathBuf::from(custom_dir));
        }
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(home.join(DATA_DIR))
}

/// Default storage file: `<data dir>/storage.json`.
pub fn storage_path() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join(STORAGE_FILE))
}
