// bark platform paths
// Per-OS directory lookup is delegated to the `dirs` crate.
//
// Data:   ~/.bark (same layout on every platform)
// Config: <config_dir>/bark, e.g. ~/.config/bark on Linux,
//         ~/Library/Application Support/bark on macOS, %APPDATA%\bark on Windows

use std::path::PathBuf;

const APP_DIR: &str = "bark";
const DATA_DIR: &str = ".bark";

/// Returns the directory that holds the bookmark database, `~/.bark`.
///
/// `None` when the home directory cannot be determined.
pub fn get_default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR))
}

/// Returns the platform-specific configuration directory for bark.
///
/// Falls back to the data directory when the platform reports no config dir,
/// and to the working directory when even the home directory is unknown.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .or_else(get_default_data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
