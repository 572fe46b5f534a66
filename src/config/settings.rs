//! Application settings and paths.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::DATA_FILE_NAME;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Option<Paths>> = OnceLock::new();

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/url-checker)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/url-checker)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance, if a home directory could be found.
    pub fn get() -> Option<&'static Paths> {
        PATHS.get_or_init(Self::discover).as_ref()
    }

    fn discover() -> Option<Self> {
        let project = ProjectDirs::from("com", "url-checker", "url-checker")?;

        Some(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the path to the fallback results file.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Results file to use instead of the one beside the executable.
    pub data_file: Option<PathBuf>,
    /// Enable verbose logging by default.
    pub verbose: bool,
    /// Draw a spinner while a request is in flight.
    pub show_progress: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_file: None,
            verbose: false,
            show_progress: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing file, or no resolvable config directory, yields defaults.
    pub fn load() -> ConfigResult<Self> {
        let Some(paths) = Paths::get() else {
            return Ok(Self::default());
        };

        let file = paths.settings_file();
        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}

/// Default results file: `url_checks.json` beside the running executable.
///
/// Falls back to the XDG data directory, then the working directory, when
/// the executable path cannot be determined.
pub fn default_data_file() -> PathBuf {
    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE_NAME)));

    beside_exe
        .or_else(|| Paths::get().map(Paths::data_file))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

/// Pick the results file: explicit override, then settings, then default.
pub fn resolve_data_file(cli_override: Option<&Path>, settings: &AppSettings) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| settings.data_file.clone())
        .unwrap_or_else(default_data_file)
}
