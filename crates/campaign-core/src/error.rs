use crate::types::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("not initialized: run 'campaign init'")]
    NotInitialized,

    #[error("the key '{key}' is already used by another {category}; use a different key")]
    DuplicateKey { category: Category, key: String },

    #[error("{category} '{key}' is missing required field '{field}'")]
    MissingField {
        category: Category,
        key: String,
        field: &'static str,
    },

    #[error("callback of '{key}' is not callable: {value}")]
    InvalidCallable { key: String, value: String },

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("listener '{listener}' failed")]
    ListenerFailed {
        listener: String,
        #[source]
        source: Box<CampaignError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CampaignError>;
