pub mod callback;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod io;
pub mod manifest;
pub mod natural;
pub mod paths;
pub mod registry;
pub mod translate;
pub mod types;

pub use descriptor::{ActionDescriptor, ActionSpec};
pub use error::{CampaignError, Result};
pub use registry::ActionRegistry;
pub use types::Category;
