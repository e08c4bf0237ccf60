use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use yapup_core::config::{self, CONFIG_FILE_NAME, YapupConfig};
use yapup_core::enrich;
use yapup_core::import::ImportClient;

#[derive(Parser)]
#[command(
    name = "yapup",
    about = "Enrich generated swagger documents and import them into YApi",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a swagger document and import it into a YApi project
    Import {
        /// Path to the swagger JSON document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// YApi server base URL
        #[arg(long)]
        url: Option<String>,

        /// YApi project import token
        #[arg(long)]
        token: Option<String>,
    },

    /// Enrich a swagger document and print the result (dry run)
    Enrich {
        /// Path to the swagger JSON document
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Initialize a new yapup configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { input, url, token } => cmd_import(input, url, token),

        Commands::Enrich { input } => cmd_enrich(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "yapup", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<YapupConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let config = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    Ok(config.unwrap_or_default())
}

/// Read the document named by `input` (or the config default) and run the
/// enrichment pipeline, returning the pretty-serialized result.
fn load_enriched(input: Option<PathBuf>, cfg: &YapupConfig) -> Result<String> {
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let data =
        fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
    enrich::enrich_bytes(&data).with_context(|| format!("failed to enrich {}", input.display()))
}

fn cmd_import(input: Option<PathBuf>, url: Option<String>, token: Option<String>) -> Result<()> {
    let cfg = try_load_config()?;

    let url = url
        .or_else(|| cfg.url.clone())
        .context("no YApi server URL; pass --url or set `url` in .yapup.yaml")?;
    let token = token
        .or_else(|| cfg.token.clone())
        .context("no import token; pass --token or set `token` in .yapup.yaml")?;

    let document = load_enriched(input, &cfg)?;

    log::info!("importing into {}", url);
    let client = ImportClient::new(url.clone(), token)?;
    client.submit(&document)?;

    eprintln!("Imported into {}", url);
    Ok(())
}

fn cmd_enrich(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?;
    let document = load_enriched(input, &cfg)?;
    println!("{}", document);
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
