//! YAML plugin manifests.
//!
//! A manifest lets a plugin declare its building blocks as data:
//!
//! ```yaml
//! plugin: page-tracking
//! lead_actions:
//!   page.hit:
//!     label: campaign.page.hit
//!     formType: pagehit
//!     callback: 'Acme\Page\Events::onHit'
//! outcomes:
//!   page.visited:
//!     label: campaign.page.visited
//!     callback: ['Acme\Page\Events', 'wasVisited']
//! ```

use crate::descriptor::ActionSpec;
use crate::error::Result;
use crate::event::CampaignBuilderListener;
use crate::paths;
use crate::registry::ActionRegistry;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Defaults to the file stem when loaded from disk.
    #[serde(default)]
    pub plugin: String,
    #[serde(default, with = "declared")]
    pub lead_actions: Vec<(String, ActionSpec)>,
    #[serde(default, with = "declared")]
    pub system_actions: Vec<(String, ActionSpec)>,
    #[serde(default, with = "declared")]
    pub outcomes: Vec<(String, ActionSpec)>,
}

/// Sections are read as ordered key/definition pairs rather than a map, so a
/// key declared twice reaches the registry and fails as a duplicate.
mod declared {
    use crate::descriptor::ActionSpec;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        entries: &[(String, ActionSpec)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, spec) in entries {
            map.serialize_entry(key, spec)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, ActionSpec)>, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, ActionSpec)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of action keys to definitions")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, spec)) = map.next_entry::<String, ActionSpec>()? {
                entries.push((key, spec));
            }
            Ok(entries)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }
}

impl PluginManifest {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut manifest = Self::from_yaml(&data)?;
        if manifest.plugin.is_empty() {
            manifest.plugin = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(manifest)
    }

    /// Load every `*.yaml` / `*.yml` manifest in `dir`, ordered by file name.
    /// A missing directory yields no manifests.
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>> {
        if !dir.is_dir() {
            return Ok(vec![]);
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && paths::is_yaml(&path) {
                files.push(path);
            }
        }
        files.sort();
        files.iter().map(|p| Self::load(p)).collect()
    }

    /// Every declared entry in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str, &ActionSpec)> {
        let lead = self
            .lead_actions
            .iter()
            .map(|(k, s)| (Category::LeadAction, k.as_str(), s));
        let system = self
            .system_actions
            .iter()
            .map(|(k, s)| (Category::SystemAction, k.as_str(), s));
        let outcomes = self
            .outcomes
            .iter()
            .map(|(k, s)| (Category::Outcome, k.as_str(), s));
        lead.chain(system).chain(outcomes)
    }

    pub fn len(&self) -> usize {
        self.lead_actions.len() + self.system_actions.len() + self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CampaignBuilderListener for PluginManifest {
    fn name(&self) -> &str {
        &self.plugin
    }

    fn on_campaign_build(&self, event: &mut ActionRegistry) -> Result<()> {
        for (category, key, spec) in self.entries() {
            event.register(category, key, spec.clone())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
