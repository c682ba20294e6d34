use crate::output::print_json;
use campaign_core::Category;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let build = super::build_registry(root)?;
    let registry = &build.registry;

    if json {
        let mut counts = serde_json::Map::new();
        for &c in Category::all() {
            counts.insert(c.as_str().to_string(), registry.len(c).into());
        }
        let value = serde_json::json!({
            "ok": true,
            "plugins": build.plugins,
            "counts": counts,
        });
        print_json(&value)?;
        return Ok(());
    }

    println!(
        "{} plugin(s) registered cleanly: {} lead action(s), {} system action(s), {} outcome(s)",
        build.plugins.len(),
        registry.len(Category::LeadAction),
        registry.len(Category::SystemAction),
        registry.len(Category::Outcome),
    );
    Ok(())
}
