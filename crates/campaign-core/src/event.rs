//! The campaign build event: one registry per dispatch, populated by every
//! listener in turn, then handed to the builder for reading.

use crate::error::{CampaignError, Result};
use crate::registry::ActionRegistry;
use crate::translate::Translator;
use crate::types::Category;

/// A plugin hook that contributes building blocks to the campaign builder.
pub trait CampaignBuilderListener {
    fn name(&self) -> &str;

    fn on_campaign_build(&self, event: &mut ActionRegistry) -> Result<()>;
}

/// Build a registry by running every listener in order.
///
/// The first listener error aborts the dispatch and is returned wrapped in
/// [`CampaignError::ListenerFailed`].
pub fn dispatch(
    translator: impl Translator + 'static,
    listeners: &[&dyn CampaignBuilderListener],
) -> Result<ActionRegistry> {
    let mut registry = ActionRegistry::new(translator);
    for listener in listeners {
        tracing::debug!(listener = listener.name(), "dispatching campaign build event");
        listener
            .on_campaign_build(&mut registry)
            .map_err(|e| CampaignError::ListenerFailed {
                listener: listener.name().to_string(),
                source: Box::new(e),
            })?;
    }
    tracing::info!(
        listeners = listeners.len(),
        lead_actions = registry.len(Category::LeadAction),
        system_actions = registry.len(Category::SystemAction),
        outcomes = registry.len(Category::Outcome),
        "campaign build event dispatched"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ActionSpec;
    use crate::translate::IdentityTranslator;

    struct EmailPlugin;

    impl CampaignBuilderListener for EmailPlugin {
        fn name(&self) -> &str {
            "email"
        }

        fn on_campaign_build(&self, event: &mut ActionRegistry) -> Result<()> {
            event.add_lead_action("email.open", ActionSpec::new("Opens email"))?;
            event.add_outcome(
                "email.opened",
                ActionSpec::new("Email opened").callback("Email::wasOpened"),
            )
        }
    }

    struct FormPlugin;

    impl CampaignBuilderListener for FormPlugin {
        fn name(&self) -> &str {
            "form"
        }

        fn on_campaign_build(&self, event: &mut ActionRegistry) -> Result<()> {
            event.add_lead_action("form.submit", ActionSpec::new("Submits form"))
        }
    }

    struct Clashing;

    impl CampaignBuilderListener for Clashing {
        fn name(&self) -> &str {
            "clashing"
        }

        fn on_campaign_build(&self, event: &mut ActionRegistry) -> Result<()> {
            event.add_lead_action("email.open", ActionSpec::new("Also opens email"))
        }
    }

    #[test]
    fn dispatch_collects_from_all_listeners() {
        let registry = dispatch(IdentityTranslator, &[&EmailPlugin, &FormPlugin]).unwrap();
        let keys: Vec<&str> = registry.lead_actions().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["email.open", "form.submit"]);
        assert_eq!(registry.outcomes().len(), 1);
    }

    #[test]
    fn dispatch_reports_failing_listener() {
        let err = dispatch(IdentityTranslator, &[&EmailPlugin, &Clashing]).unwrap_err();
        match err {
            CampaignError::ListenerFailed { listener, source } => {
                assert_eq!(listener, "clashing");
                assert!(matches!(*source, CampaignError::DuplicateKey { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dispatch_without_listeners_is_empty() {
        let registry = dispatch(IdentityTranslator, &[]).unwrap();
        assert!(registry.is_empty());
    }
}
