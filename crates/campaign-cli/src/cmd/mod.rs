pub mod config;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;

use anyhow::Context;
use campaign_core::{
    config::Config,
    event::{self, CampaignBuilderListener},
    manifest::PluginManifest,
    ActionRegistry,
};
use std::path::Path;

/// A registry populated from every plugin manifest of the project.
pub struct Build {
    pub registry: ActionRegistry,
    pub plugins: Vec<String>,
}

pub fn build_registry(root: &Path) -> anyhow::Result<Build> {
    let config = Config::load(root).context("failed to load config")?;
    let catalog = config
        .catalog(root)
        .with_context(|| format!("failed to load messages for locale '{}'", config.locale))?;

    let plugins_dir = config.plugins_path(root);
    let manifests = PluginManifest::load_dir(&plugins_dir)
        .with_context(|| format!("failed to read plugin manifests in {}", plugins_dir.display()))?;
    let listeners: Vec<&dyn CampaignBuilderListener> = manifests
        .iter()
        .map(|m| m as &dyn CampaignBuilderListener)
        .collect();

    let registry = event::dispatch(catalog, &listeners)?;
    Ok(Build {
        registry,
        plugins: manifests.into_iter().map(|m| m.plugin).collect(),
    })
}
