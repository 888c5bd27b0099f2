use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".adoption_core";
const APPLICATIONS_DIR: &str = "applications";

/// Application data directory, defaulting to `~/.adoption_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ADOPTION_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding archived application snapshots.
pub fn applications_dir() -> PathBuf {
    app_data_dir().join(APPLICATIONS_DIR)
}
