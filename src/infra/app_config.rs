use crate::application::candidates::SortKey;
use crate::application::candidates::listing::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Rows per page in candidate tables.
    pub page_size: u32,
    /// Sort applied when a candidate list is first opened.
    pub default_sort: SortKey,
    /// Overrides where the database lives.
    pub data_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::Score,
            data_dir: None,
        }
    }
}

impl PortalConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(app_data_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("portal.sqlite")
    }
}

pub fn load_config() -> PortalConfig {
    load_config_from(&config_path())
}

/// Missing or unreadable files fall back to defaults.
pub fn load_config_from(path: &Path) -> PortalConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return PortalConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            PortalConfig::default()
        }
    }
}

pub fn save_config(config: &PortalConfig) -> std::io::Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &PortalConfig, path: &Path) -> std::io::Result<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    match std::env::var_os("MANPOWER_CONFIG_PATH") {
        Some(path) => PathBuf::from(path),
        None => app_data_dir().join("config.toml"),
    }
}

const DATA_DIR_NAME: &str = "manpower-portal";

/// `$MANPOWER_DATA_HOME`, else `manpower-portal` under the platform data root.
fn app_data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("MANPOWER_DATA_HOME") {
        return PathBuf::from(path);
    }
    match platform_data_root() {
        Some(root) => root.join(DATA_DIR_NAME),
        None => PathBuf::from(".").join(DATA_DIR_NAME),
    }
}

fn platform_data_root() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        home::home_dir().map(|home| home.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|home| home.join(".local").join("share")))
    }
}
