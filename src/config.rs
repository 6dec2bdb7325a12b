use crate::error::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SNIPPETS_FILENAME: &str = "snippets.json";

/// Get the snipkit configuration directory.
///
/// This stands in for the host's per-installation plugin config folder.
pub fn get_config_dir() -> PathBuf {
    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".snipkit"))
        .unwrap_or_else(|_| PathBuf::from(".snipkit"))
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }
    Ok(config_dir)
}

/// Get the path to the snippets file
pub fn get_snippets_file_path() -> PathBuf {
    get_config_dir().join(SNIPPETS_FILENAME)
}
