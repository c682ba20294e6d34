use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The three independent collections a plugin can register building blocks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LeadAction,
    SystemAction,
    Outcome,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::LeadAction,
            Category::SystemAction,
            Category::Outcome,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::LeadAction => "lead_action",
            Category::SystemAction => "system_action",
            Category::Outcome => "outcome",
        }
    }

    /// Human-readable name used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Category::LeadAction => "lead action",
            Category::SystemAction => "system action",
            Category::Outcome => "outcome",
        }
    }

    /// Fields a descriptor must carry to be accepted into this category.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Category::LeadAction | Category::SystemAction => &["label"],
            Category::Outcome => &["label", "callback"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "lead_action" | "lead_actions" | "lead" => Ok(Category::LeadAction),
            "system_action" | "system_actions" | "system" => Ok(Category::SystemAction),
            "outcome" | "outcomes" => Ok(Category::Outcome),
            _ => Err(crate::error::CampaignError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
