use anyhow::Context;
use campaign_core::{config::Config, io, paths};
use std::path::Path;

const EXAMPLE_PLUGIN: &str = r#"# Building blocks contributed by this plugin.
# label and description are message ids from translations/messages.<locale>.yaml.
plugin: email
lead_actions:
  email.open:
    label: campaign.email.open
    description: campaign.email.open.descr
    callback: 'Acme\Email\CampaignEvents::onOpen'
system_actions: {}
outcomes:
  email.opened:
    label: campaign.email.opened
    callback: ['Acme\Email\CampaignEvents', 'wasOpened']
"#;

const EXAMPLE_MESSAGES: &str = r#"campaign:
  email:
    open: Opens email
    open.descr: Trigger actions when a contact opens an email
    opened: Email was opened
"#;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing campaign builder project in: {}", root.display());

    let config_path = paths::config_path(root);
    let config = if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load config")?
    } else {
        let cfg = Config::default();
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        cfg
    };

    let plugin = config.plugins_path(root).join("email.yaml");
    report(root, &plugin, io::write_if_missing(&plugin, EXAMPLE_PLUGIN.as_bytes())?);

    let messages = paths::message_file(&config.translations_path(root), &config.locale);
    report(root, &messages, io::write_if_missing(&messages, EXAMPLE_MESSAGES.as_bytes())?);

    Ok(())
}

fn report(root: &Path, path: &Path, created: bool) {
    let shown = path.strip_prefix(root).unwrap_or(path).display();
    if created {
        println!("  created: {shown}");
    } else {
        println!("  exists:  {shown}");
    }
}
