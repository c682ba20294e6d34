mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "campaign",
    about = "Inspect the building blocks plugins contribute to the campaign builder",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .campaign/ or .git/)
    #[arg(long, global = true, env = "CAMPAIGN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold .campaign/ with a config, an example plugin and messages
    Init,

    /// List registered building blocks, sorted by label
    List {
        /// Only list one category (lead_action, system_action, outcome)
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Show a single building block
    Show { category: String, key: String },

    /// Register every plugin manifest and report the first failure
    Validate,

    /// Inspect the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List { category } => cmd::list::run(&root, category.as_deref(), cli.json),
        Commands::Show { category, key } => cmd::show::run(&root, &category, &key, cli.json),
        Commands::Validate => cmd::validate::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
