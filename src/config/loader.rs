use std::path::{Path, PathBuf};

use super::{Config, ConfigError, parse_config};

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "MASKFMT_CONFIG";

/// Local config file names, in order of preference.
const LOCAL_FILE_NAMES: &[&str] = &["maskfmt.yml", "maskfmt.yaml"];

/// Trait for loading and merging configuration files.
pub trait ConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError>;
}

/// Reads the global config and the working directory's local config.
///
/// Each file is parsed and validated on its own before merging, so every
/// error names the file it came from. The local file overrides the global one.
pub struct DefaultConfigLoader {
    global_config_path: Option<PathBuf>,
}

impl Default for DefaultConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultConfigLoader {
    pub fn new() -> Self {
        Self {
            global_config_path: global_path_from(
                std::env::var(CONFIG_ENV).ok(),
                std::env::var("HOME").ok(),
            ),
        }
    }

    /// Create a loader with an explicit global config path (for testing).
    pub fn with_global_path(path: PathBuf) -> Self {
        Self {
            global_config_path: Some(path),
        }
    }

    /// Read one config layer; a missing file is an empty layer.
    fn load_file(path: &Path) -> Result<Option<Config>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "loading config");

        let config = std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|yaml| parse_config(&yaml))
            .and_then(|config| config.validate().map(|()| config))
            .map_err(|e| e.in_file(path))?;
        Ok(Some(config))
    }
}

/// Resolve the global config path: `$MASKFMT_CONFIG` when set, otherwise
/// `$HOME/.config/maskfmt/maskfmt.yml`.
fn global_path_from(config_env: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(explicit) = config_env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".config/maskfmt/maskfmt.yml"))
}

impl ConfigLoader for DefaultConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let global = match &self.global_config_path {
            Some(path) => Self::load_file(path)?,
            None => None,
        };

        let local_path = LOCAL_FILE_NAMES
            .iter()
            .map(|name| cwd.join(name))
            .find(|path| path.exists());
        let local = match &local_path {
            Some(path) => Self::load_file(path)?,
            None => None,
        };

        let config = global.unwrap_or_default().merge(local.unwrap_or_default());
        tracing::debug!(
            masks = config.masks.as_ref().map_or(0, |m| m.len()),
            "config loaded"
        );
        Ok(config)
    }
}
