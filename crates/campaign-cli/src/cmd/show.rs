use crate::output::print_json;
use anyhow::Context;
use campaign_core::Category;
use std::path::Path;

pub fn run(root: &Path, category: &str, key: &str, json: bool) -> anyhow::Result<()> {
    let category: Category = category.parse()?;
    let build = super::build_registry(root)?;
    let descriptor = build
        .registry
        .get(category, key)
        .with_context(|| format!("{category} '{key}' not found"))?;

    if json {
        print_json(descriptor)?;
        return Ok(());
    }

    println!("Key:         {key}");
    println!("Category:    {category}");
    println!("Label:       {}", descriptor.label);
    if !descriptor.description.is_empty() {
        println!("Description: {}", descriptor.description);
    }
    if let Some(form_type) = &descriptor.form_type {
        println!("Form type:   {form_type}");
    }
    if let Some(callback) = &descriptor.callback {
        println!("Callback:    {callback}");
    }
    Ok(())
}
