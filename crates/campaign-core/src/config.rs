use crate::error::{CampaignError, Result};
use crate::paths;
use crate::translate::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Directory holding `messages.<locale>.yaml`, relative to the project root.
    #[serde(default = "default_translations_dir")]
    pub translations_dir: PathBuf,
    /// Directory holding plugin manifests, relative to the project root.
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_translations_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_TRANSLATIONS_DIR)
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PLUGINS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            locale: default_locale(),
            translations_dir: default_translations_dir(),
            plugins_dir: default_plugins_dir(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(CampaignError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn plugins_path(&self, root: &Path) -> PathBuf {
        root.join(&self.plugins_dir)
    }

    pub fn translations_path(&self, root: &Path) -> PathBuf {
        root.join(&self.translations_dir)
    }

    /// Message catalog for the configured locale.
    pub fn catalog(&self, root: &Path) -> Result<Catalog> {
        Catalog::load_locale(&self.translations_path(root), &self.locale)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != CONFIG_VERSION {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "unsupported config version {} (expected {CONFIG_VERSION})",
                    self.version
                ),
            });
        }

        if self.locale.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "locale is empty".to_string(),
            });
        } else {
            let messages = paths::message_file(&self.translations_path(root), &self.locale);
            if !messages.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "no message file for locale '{}' at {}; labels will not be translated",
                        self.locale,
                        messages.display()
                    ),
                });
            }
        }

        let plugins = self.plugins_path(root);
        if !plugins.is_dir() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("plugins directory {} does not exist", plugins.display()),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
