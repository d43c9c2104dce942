use anyhow::Context;
use clap::{CommandFactory, Parser};
use seeker_cli::{completions, display, interactive, oneshot, Settings};
use seeker_tools::{search_engine, ToolRegistry};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "seeker")]
#[command(about = "Query a configured search engine and print its raw JSON response")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Query (one-shot mode)
    query: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search endpoint base URL; overrides the config file and SEARCH_ENGINE_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a single search
    Search {
        query: String,
    },
    /// List available tools and their parameter schemas
    Tools,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        completions::generate(*shell, &mut Cli::command());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref(), cli.url, cli.timeout)?;
    seeker_common::logging::init_tracing(&settings.log_level)?;

    let registry =
        ToolRegistry::with_defaults(&settings.fields).context("Failed to initialize tools")?;
    info!("Loaded {} tool(s)", registry.definitions().len());

    match cli.command {
        Some(Commands::Search { query }) => {
            oneshot::execute(&registry, search_engine::NAME, &query).await?;
        }
        Some(Commands::Tools) => {
            for definition in registry.definitions() {
                println!("{}", display::format_definition(&definition));
            }
        }
        Some(Commands::Completions { .. }) => {}
        None => {
            if let Some(query) = cli.query {
                // One-shot mode
                oneshot::execute(&registry, search_engine::NAME, &query).await?;
            } else {
                // Interactive mode
                interactive::run(&registry, search_engine::NAME).await?;
            }
        }
    }

    Ok(())
}
