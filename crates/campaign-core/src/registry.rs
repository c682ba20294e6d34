//! The campaign builder's registry of lead actions, system actions and
//! outcomes.
//!
//! Each category is an independent, insertion-ordered `key → descriptor`
//! map. Reads go through a per-category sorted view that is computed on the
//! first [`ActionRegistry::list`] and dropped again by the next successful
//! [`ActionRegistry::register`] into that category.

use crate::callback::CallbackRef;
use crate::descriptor::{ActionDescriptor, ActionSpec};
use crate::error::{CampaignError, Result};
use crate::natural;
use crate::translate::Translator;
use crate::types::Category;
use indexmap::IndexMap;
use std::cell::OnceCell;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Collection {
    entries: IndexMap<String, ActionDescriptor>,
    /// Entry indices ordered by label.
    sorted: OnceCell<Vec<usize>>,
}

impl Collection {
    fn insert(&mut self, key: String, descriptor: ActionDescriptor) {
        self.entries.insert(key, descriptor);
        self.sorted.take();
    }

    fn sorted(&self) -> Vec<(&str, &ActionDescriptor)> {
        let order = self.sorted.get_or_init(|| {
            let mut labelled: Vec<(usize, &str)> = self
                .entries
                .values()
                .map(|d| d.label.as_str())
                .enumerate()
                .collect();
            // stable: equal labels keep registration order
            labelled.sort_by(|a, b| natural::compare_ci(a.1, b.1));
            labelled.into_iter().map(|(i, _)| i).collect()
        });
        order
            .iter()
            .filter_map(|&i| self.entries.get_index(i))
            .map(|(k, d)| (k.as_str(), d))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ActionRegistry
// ---------------------------------------------------------------------------

pub struct ActionRegistry {
    translator: Box<dyn Translator>,
    lead_actions: Collection,
    system_actions: Collection,
    outcomes: Collection,
}

impl ActionRegistry {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self {
            translator: Box::new(translator),
            lead_actions: Collection::default(),
            system_actions: Collection::default(),
            outcomes: Collection::default(),
        }
    }

    fn collection(&self, category: Category) -> &Collection {
        match category {
            Category::LeadAction => &self.lead_actions,
            Category::SystemAction => &self.system_actions,
            Category::Outcome => &self.outcomes,
        }
    }

    fn collection_mut(&mut self, category: Category) -> &mut Collection {
        match category {
            Category::LeadAction => &mut self.lead_actions,
            Category::SystemAction => &mut self.system_actions,
            Category::Outcome => &mut self.outcomes,
        }
    }

    /// Validate, translate and store a building block.
    ///
    /// Fails without touching the registry when `key` is already taken in
    /// `category`, a required field is missing, or `callback` does not have
    /// the shape of a callable reference.
    pub fn register(
        &mut self,
        category: Category,
        key: impl Into<String>,
        spec: ActionSpec,
    ) -> Result<()> {
        let key = key.into();
        if self.collection(category).entries.contains_key(&key) {
            return Err(CampaignError::DuplicateKey { category, key });
        }

        for &field in category.required_fields() {
            if !spec.has_field(field) {
                return Err(CampaignError::MissingField {
                    category,
                    key,
                    field,
                });
            }
        }

        let callback = match spec.callback_value() {
            Some(value) => Some(CallbackRef::parse(value).ok_or_else(|| {
                CampaignError::InvalidCallable {
                    key: key.clone(),
                    value: value.to_string(),
                }
            })?),
            None => None,
        };

        let label = self
            .translator
            .trans(spec.label.as_deref().unwrap_or_default());
        let description = match spec.description.as_deref() {
            Some(d) if !d.is_empty() => self.translator.trans(d),
            _ => String::new(),
        };

        tracing::debug!(category = category.as_str(), key = %key, label = %label, "registered building block");

        self.collection_mut(category).insert(
            key,
            ActionDescriptor {
                label,
                description,
                form_type: spec.form_type,
                callback,
            },
        );
        Ok(())
    }

    pub fn add_lead_action(&mut self, key: impl Into<String>, spec: ActionSpec) -> Result<()> {
        self.register(Category::LeadAction, key, spec)
    }

    pub fn add_system_action(&mut self, key: impl Into<String>, spec: ActionSpec) -> Result<()> {
        self.register(Category::SystemAction, key, spec)
    }

    pub fn add_outcome(&mut self, key: impl Into<String>, spec: ActionSpec) -> Result<()> {
        self.register(Category::Outcome, key, spec)
    }

    /// All entries of `category`, sorted by natural case-insensitive label order.
    pub fn list(&self, category: Category) -> Vec<(&str, &ActionDescriptor)> {
        self.collection(category).sorted()
    }

    pub fn lead_actions(&self) -> Vec<(&str, &ActionDescriptor)> {
        self.list(Category::LeadAction)
    }

    pub fn system_actions(&self) -> Vec<(&str, &ActionDescriptor)> {
        self.list(Category::SystemAction)
    }

    pub fn outcomes(&self) -> Vec<(&str, &ActionDescriptor)> {
        self.list(Category::Outcome)
    }

    pub fn get(&self, category: Category, key: &str) -> Option<&ActionDescriptor> {
        self.collection(category).entries.get(key)
    }

    pub fn contains(&self, category: Category, key: &str) -> bool {
        self.collection(category).entries.contains_key(key)
    }

    pub fn len(&self, category: Category) -> usize {
        self.collection(category).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        Category::all().iter().all(|&c| self.len(c) == 0)
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("lead_actions", &self.lead_actions.entries)
            .field("system_actions", &self.system_actions.entries)
            .field("outcomes", &self.outcomes.entries)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{Catalog, IdentityTranslator};
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::rc::Rc;

    fn registry() -> ActionRegistry {
        ActionRegistry::new(IdentityTranslator)
    }

    fn keys(entries: &[(&str, &ActionDescriptor)]) -> Vec<String> {
        entries.iter().map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn duplicate_key_in_same_category_fails() {
        let mut reg = registry();
        reg.add_lead_action("page.hit", ActionSpec::new("Page hit")).unwrap();
        let err = reg
            .add_lead_action("page.hit", ActionSpec::new("Other"))
            .unwrap_err();
        assert!(matches!(
            err,
            CampaignError::DuplicateKey { category: Category::LeadAction, ref key } if key == "page.hit"
        ));
        assert_eq!(reg.get(Category::LeadAction, "page.hit").unwrap().label, "Page hit");
    }

    #[test]
    fn duplicate_system_action_checked_against_system_actions() {
        let mut reg = registry();
        reg.add_system_action("sys.cron", ActionSpec::new("Cron")).unwrap();
        assert!(matches!(
            reg.add_system_action("sys.cron", ActionSpec::new("Cron again")),
            Err(CampaignError::DuplicateKey { category: Category::SystemAction, .. })
        ));
    }

    #[test]
    fn same_key_allowed_across_categories() {
        let mut reg = registry();
        reg.add_lead_action("shared", ActionSpec::new("Lead")).unwrap();
        reg.add_system_action("shared", ActionSpec::new("System")).unwrap();
        reg.add_outcome("shared", ActionSpec::new("Outcome").callback("check"))
            .unwrap();
        for &c in Category::all() {
            assert!(reg.contains(c, "shared"));
        }
    }

    #[test]
    fn missing_label_fails() {
        let mut reg = registry();
        for category in [Category::LeadAction, Category::SystemAction] {
            let err = reg
                .register(category, "nolabel", ActionSpec::default().description("d"))
                .unwrap_err();
            assert!(matches!(
                err,
                CampaignError::MissingField { field: "label", .. }
            ));
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn outcome_without_callback_fails() {
        let mut reg = registry();
        let err = reg.add_outcome("opened", ActionSpec::new("Opened")).unwrap_err();
        assert!(matches!(
            err,
            CampaignError::MissingField { category: Category::Outcome, field: "callback", .. }
        ));
        assert_eq!(reg.len(Category::Outcome), 0);
    }

    #[test]
    fn invalid_callback_fails_for_every_category() {
        let mut reg = registry();
        for &category in Category::all() {
            let err = reg
                .register(category, "bad", ActionSpec::new("Bad").callback(42))
                .unwrap_err();
            assert!(matches!(
                err,
                CampaignError::InvalidCallable { ref value, .. } if value == "42"
            ));
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn null_callback_is_treated_as_absent() {
        let mut reg = registry();
        reg.add_lead_action("hit", ActionSpec::new("Hit").callback(Value::Null))
            .unwrap();
        assert_eq!(reg.get(Category::LeadAction, "hit").unwrap().callback, None);

        let from_builder = reg
            .add_outcome("opened", ActionSpec::new("Opened").callback(Value::Null))
            .unwrap_err();
        let parsed: ActionSpec = serde_yaml::from_str("label: Opened\ncallback: ~\n").unwrap();
        let from_yaml = reg.add_outcome("opened", parsed).unwrap_err();
        for err in [from_builder, from_yaml] {
            assert!(matches!(
                err,
                CampaignError::MissingField { category: Category::Outcome, field: "callback", .. }
            ));
        }
    }

    #[test]
    fn translates_once_at_registration() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let mut reg = ActionRegistry::new(move |id: &str| {
            counter.set(counter.get() + 1);
            id.to_uppercase()
        });

        reg.add_lead_action("hit", ActionSpec::new("hit").description("hit.descr"))
            .unwrap();
        assert_eq!(calls.get(), 2);

        reg.add_system_action("cron", ActionSpec::new("cron")).unwrap();
        assert_eq!(calls.get(), 3);

        let _ = reg.lead_actions();
        let _ = reg.system_actions();
        let _ = reg.get(Category::LeadAction, "hit");
        assert_eq!(reg.get(Category::SystemAction, "cron").unwrap().label, "CRON");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn valid_callback_is_stored_typed() {
        let mut reg = registry();
        reg.add_outcome(
            "opened",
            ActionSpec::new("Opened").callback(json!([r"Acme\Email", "wasOpened"])),
        )
        .unwrap();
        let d = reg.get(Category::Outcome, "opened").unwrap();
        assert_eq!(
            d.callback,
            Some(CallbackRef::Method(r"Acme\Email".into(), "wasOpened".into()))
        );
    }

    #[test]
    fn list_sorts_case_insensitively_by_label() {
        let mut reg = registry();
        reg.add_lead_action("b", ActionSpec::new("Zebra")).unwrap();
        reg.add_lead_action("a", ActionSpec::new("apple")).unwrap();
        assert_eq!(keys(&reg.lead_actions()), vec!["a", "b"]);
    }

    #[test]
    fn list_uses_natural_order_and_keeps_ties_stable() {
        let mut reg = registry();
        reg.add_system_action("s10", ActionSpec::new("Step 10")).unwrap();
        reg.add_system_action("s2", ActionSpec::new("step 2")).unwrap();
        reg.add_system_action("x1", ActionSpec::new("Same")).unwrap();
        reg.add_system_action("x2", ActionSpec::new("same")).unwrap();
        assert_eq!(keys(&reg.system_actions()), vec!["x1", "x2", "s2", "s10"]);
    }

    #[test]
    fn list_reflects_registrations_after_first_read() {
        let mut reg = registry();
        reg.add_lead_action("m", ActionSpec::new("Middle")).unwrap();
        assert_eq!(keys(&reg.lead_actions()), vec!["m"]);

        reg.add_lead_action("a", ActionSpec::new("Alpha")).unwrap();
        reg.add_lead_action("z", ActionSpec::new("Zulu")).unwrap();
        assert_eq!(keys(&reg.lead_actions()), vec!["a", "m", "z"]);
        // memoized view is reused while nothing changes
        assert_eq!(keys(&reg.lead_actions()), vec!["a", "m", "z"]);
    }

    #[test]
    fn description_defaults_to_empty() {
        let mut reg = registry();
        reg.add_lead_action("hit", ActionSpec::new("Hit")).unwrap();
        assert_eq!(reg.get(Category::LeadAction, "hit").unwrap().description, "");
    }

    #[test]
    fn label_and_description_are_translated() {
        let mut catalog = Catalog::new("en");
        catalog.insert("campaign.page.hit", "Visits a page");
        catalog.insert("campaign.page.hit.descr", "Trigger when a contact visits a page");

        let mut reg = ActionRegistry::new(catalog);
        reg.add_lead_action(
            "page.hit",
            ActionSpec::new("campaign.page.hit")
                .description("campaign.page.hit.descr")
                .form_type("pagehit"),
        )
        .unwrap();

        let d = reg.get(Category::LeadAction, "page.hit").unwrap();
        assert_eq!(d.label, "Visits a page");
        assert_eq!(d.description, "Trigger when a contact visits a page");
        assert_eq!(d.form_type.as_deref(), Some("pagehit"));
    }

    #[test]
    fn empty_description_is_not_translated() {
        let mut reg = ActionRegistry::new(|id: &str| format!("<{id}>"));
        reg.add_lead_action("hit", ActionSpec::new("hit").description(""))
            .unwrap();
        let d = reg.get(Category::LeadAction, "hit").unwrap();
        assert_eq!(d.label, "<hit>");
        assert_eq!(d.description, "");
    }

    #[test]
    fn sorting_uses_translated_label() {
        let mut catalog = Catalog::new("en");
        catalog.insert("z.id", "Aardvark");
        catalog.insert("a.id", "Yak");

        let mut reg = ActionRegistry::new(catalog);
        reg.add_lead_action("first", ActionSpec::new("a.id")).unwrap();
        reg.add_lead_action("second", ActionSpec::new("z.id")).unwrap();
        assert_eq!(keys(&reg.lead_actions()), vec!["second", "first"]);
    }

    #[test]
    fn empty_category_lists_nothing() {
        let reg = registry();
        for &c in Category::all() {
            assert!(reg.list(c).is_empty());
        }
        assert!(reg.is_empty());
    }
}
