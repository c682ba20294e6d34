use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CAMPAIGN_DIR: &str = ".campaign";
pub const CONFIG_FILE: &str = ".campaign/config.yaml";
pub const DEFAULT_PLUGINS_DIR: &str = ".campaign/plugins";
pub const DEFAULT_TRANSLATIONS_DIR: &str = ".campaign/translations";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn campaign_dir(root: &Path) -> PathBuf {
    root.join(CAMPAIGN_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `messages.<locale>.yaml` inside a translations directory.
pub fn message_file(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("messages.{locale}.yaml"))
}

/// True for `*.yaml` / `*.yml` files.
pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
