//! Planwright - A guided product plan wizard
//!
//! Walks through eleven planning sections, generating ideas with Gemini,
//! keeping a version history per section and summarizing the finished plan
//! as a Lean Canvas.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use planwright_core::{
    constants, paths, Config, Database, GeminiGenerator, MemoryStore, PersistenceStore,
    PlanManager, Preferences,
};

mod commands;
mod render;
mod session;

/// Planwright - Product Plan Wizard
#[derive(Parser)]
#[command(name = "planwright")]
#[command(about = "A guided, step-by-step product plan wizard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data directory (defaults to ~/.planwright)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Config file (defaults to <data dir>/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Gemini model id, overrides the config file
    #[arg(short, long, global = true)]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive wizard (default)
    Wizard,

    /// Print the plan review and exit
    Show,

    /// Write the plan as Markdown
    Export { file: PathBuf },

    /// Clear the saved plan; the API key is kept
    Reset,

    /// Save the Gemini API key
    SetKey { value: String },
}

/// Log to a file so output never interleaves with the prompt
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let Ok(log_file) = std::fs::File::create(log_dir.join("planwright.log"))
        .or_else(|_| std::fs::File::create(null_device))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    if let Some(model) = &cli.model {
        if model.trim().is_empty() {
            bail!("--model must not be empty");
        }
        config.generation.model = model.clone();
    }
    Ok(config)
}

/// SQLite store, or a throwaway in-memory one if the database can't be opened
fn open_store(config: &Config) -> Box<dyn PersistenceStore> {
    let path = config.database_path();
    match Database::new(&path) {
        Ok(db) => Box::new(Preferences::new(db)),
        Err(e) => {
            tracing::error!("Failed to open database at {:?}: {:#}", path, e);
            eprintln!(
                "Warning: could not open {}; changes will not be saved.",
                path.display()
            );
            Box::new(MemoryStore::new())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(home) = &cli.home {
        std::env::set_var(constants::paths::HOME_ENV, home);
    }

    init_logging();

    let config = load_config(&cli)?;
    tracing::info!("Using model: {}", config.generation.model);

    let generator = Arc::new(GeminiGenerator::from_config(&config.generation));
    let mut manager = PlanManager::restore(open_store(&config), generator);

    match cli.command {
        Some(Commands::Show) => {
            println!("{}", render::plan_review(&manager));
        }
        Some(Commands::Export { file }) => {
            std::fs::write(&file, manager.plan_markdown())
                .with_context(|| format!("Failed to write {}", file.display()))?;
            println!("Plan written to {}", file.display());
        }
        Some(Commands::Reset) => {
            manager.reset();
            println!("Plan cleared. Your API key was kept.");
        }
        Some(Commands::SetKey { value }) => {
            if !manager.save_credential(&value) {
                bail!("The API key must not be empty");
            }
            println!("API key saved.");
        }
        Some(Commands::Wizard) | None => {
            session::run(manager).await?;
        }
    }

    Ok(())
}
