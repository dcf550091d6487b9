//! fontshelf - browse and search installed font families from the terminal
//!
//! With no subcommand the interactive browser opens. `fontshelf list` prints
//! the same sectioned catalog (or search results) for scripts.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use fontshelf_core::{
    Catalog, FilterState, FontRegistry, FontshelfConfig, StaticFontRegistry, SystemFontRegistry,
};
use fontshelf_tui::{listing, App};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fontshelf",
    author,
    version,
    about = "Browse installed font families by letter, or search them by name"
)]
struct Cli {
    /// Config file (defaults to ~/.fontshelf/config.toml)
    #[arg(long, global = true, env = "FONTSHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Read family names from a file (one per line) instead of the system
    #[arg(long, global = true)]
    fonts_file: Option<PathBuf>,

    /// Navigation title
    #[arg(long, global = true)]
    title: Option<String>,

    /// Search field placeholder
    #[arg(long, global = true)]
    placeholder: Option<String>,

    /// Put the title on the search field border instead of its own row
    #[arg(long, global = true)]
    no_large_title: bool,

    /// Point size for font previews
    #[arg(long, global = true)]
    preview_size: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive browser (default)
    Browse,
    /// Print the sectioned catalog, or search results, to stdout
    List {
        /// Case-insensitive substring to filter by
        #[arg(long, short)]
        query: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn load_config(&self) -> Result<FontshelfConfig> {
        let mut config = match &self.config {
            Some(path) => FontshelfConfig::load_from(path)?,
            None => FontshelfConfig::load()?,
        };

        if let Some(title) = &self.title {
            config.chrome.title = title.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            config.chrome.placeholder = placeholder.clone();
        }
        if self.no_large_title {
            config.chrome.large_title = false;
        }
        if let Some(size) = self.preview_size {
            config.preview.size = size;
        }

        Ok(config)
    }
}

fn env_filter(config: &FontshelfConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_level.as_deref().unwrap_or("info"))
    })
}

/// Log to stderr; used by the non-interactive commands.
fn init_tracing(config: &FontshelfConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Log to a file so output never lands on the alternate screen.
fn init_file_tracing(config: &FontshelfConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn load_registry(cli: &Cli, config: &FontshelfConfig) -> Result<Box<dyn FontRegistry>> {
    if let Some(path) = &cli.fonts_file {
        debug!(path = %path.display(), "reading family names from file");
        let registry = StaticFontRegistry::from_file(path)?;
        return Ok(Box::new(registry));
    }

    let registry = SystemFontRegistry::load(config.fonts.load_system, &config.fonts.extra_dirs)?;
    info!(faces = registry.face_count(), "font database loaded");
    Ok(Box::new(registry))
}

fn run_list(
    registry: &dyn FontRegistry,
    config: &FontshelfConfig,
    query: Option<&str>,
    json: bool,
) -> Result<()> {
    let fonts = registry.family_names();
    let catalog = Catalog::build_with_exclusions(&fonts, &config.catalog.excluded_families);
    let results = FilterState::from_query(query.unwrap_or(""))
        .apply(&fonts, &config.catalog.search_policy());

    let output = if json {
        let mut text = listing::render_json(&catalog, results.as_deref())
            .context("Failed to serialize font list")?;
        text.push('\n');
        text
    } else {
        listing::render_plain(&catalog, results.as_deref())
    };

    print!("{}", output);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command.as_ref().unwrap_or(&Commands::Browse) {
        Commands::Browse => {
            init_file_tracing(&config, &FontshelfConfig::log_path()).ok();
            let registry = load_registry(&cli, &config)?;
            fontshelf_tui::run(App::new(registry, &config))?;
        }
        Commands::List { query, json } => {
            init_tracing(&config).ok();
            let registry = load_registry(&cli, &config)?;
            run_list(registry.as_ref(), &config, query.as_deref(), *json)?;
        }
    }

    Ok(())
}
