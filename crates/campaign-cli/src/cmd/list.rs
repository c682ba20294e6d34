use crate::output::{print_json, print_table};
use campaign_core::{ActionDescriptor, Category};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Entry<'a> {
    key: &'a str,
    #[serde(flatten)]
    descriptor: &'a ActionDescriptor,
}

pub fn run(root: &Path, category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c.parse()?],
        None => Category::all().to_vec(),
    };

    let build = super::build_registry(root)?;
    let registry = &build.registry;

    if json {
        let mut value = serde_json::Map::new();
        for &c in &categories {
            let entries: Vec<Entry> = registry
                .list(c)
                .into_iter()
                .map(|(key, descriptor)| Entry { key, descriptor })
                .collect();
            value.insert(c.as_str().to_string(), serde_json::to_value(entries)?);
        }
        print_json(&value)?;
        return Ok(());
    }

    for (i, &c) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let entries = registry.list(c);
        println!("{} ({})", heading(c), entries.len());
        if entries.is_empty() {
            println!("  (none)");
            continue;
        }
        let rows = entries
            .into_iter()
            .map(|(key, d)| vec![key.to_string(), d.label.clone(), d.description.clone()])
            .collect();
        print_table(&["KEY", "LABEL", "DESCRIPTION"], rows);
    }
    Ok(())
}

fn heading(category: Category) -> &'static str {
    match category {
        Category::LeadAction => "Lead actions",
        Category::SystemAction => "System actions",
        Category::Outcome => "Outcomes",
    }
}
