//! `orbitera`: terminal front end for the Orbitera agency site.

mod command;
mod helper;
mod logging;
mod render;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use orbitera_application::OrbiteraApp;
use orbitera_core::config::AppConfig;
use orbitera_core::storage::{KeyValueStore, MemoryKeyValueStore};
use orbitera_infrastructure::{ConfigService, FileKeyValueStore, OrbiteraPaths};

use crate::command::Command;
use crate::helper::ShellHelper;
use crate::repl::Shell;

#[derive(Parser, Debug)]
#[command(name = "orbitera")]
#[command(about = "Orbitera agency site and admin area in the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/orbitera/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Key-value storage file, overriding the config
    #[arg(long, conflicts_with = "in_memory")]
    storage: Option<PathBuf>,

    /// Keep everything in memory; nothing survives exit
    #[arg(long)]
    in_memory: bool,

    /// Log level or filter directive, overriding the config
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let paths = OrbiteraPaths::new(None);

    let config = load_config(&args, &paths)?;
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let logs_dir = paths.logs_dir().ok();
    let _log_guard = logging::init(&level, logs_dir.as_deref());

    let storage = open_storage(&args, &config, &paths)?;
    let app = OrbiteraApp::bootstrap(&config, storage)?;
    let mut shell = Shell::new(app);

    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    render::banner();

    loop {
        let readline = rl.readline(&shell.prompt_label());

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if !Command::is_sensitive(trimmed) {
                    let _ = rl.add_history_entry(trimmed);
                }

                let command = match Command::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        render::error(&e.to_string());
                        continue;
                    }
                };

                match shell.execute(command, &mut rl).await {
                    Ok(true) => {}
                    Ok(false) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Err(e) => {
                        tracing::error!("[Shell] Command failed: {:#}", e);
                        render::error(&format!("Error: {:#}", e));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                render::error(&format!("Error: {:?}", err));
                break;
            }
        }
    }

    Ok(())
}

fn load_config(args: &Args, paths: &OrbiteraPaths) -> Result<AppConfig> {
    let service = match &args.config {
        Some(path) => ConfigService::new(path.clone()),
        None => {
            let service = ConfigService::from_paths(paths)?;
            // First run: leave an editable default file behind.
            if let Err(e) = service.ensure_config_file() {
                tracing::warn!("[Shell] Could not write default config: {}", e);
            }
            service
        }
    };
    service
        .load()
        .with_context(|| format!("Failed to load config from {:?}", service.path()))
}

fn open_storage(
    args: &Args,
    config: &AppConfig,
    paths: &OrbiteraPaths,
) -> Result<Arc<dyn KeyValueStore>> {
    if args.in_memory {
        tracing::info!("[Shell] Using in-memory storage");
        return Ok(Arc::new(MemoryKeyValueStore::new()));
    }

    let path = match args.storage.clone().or_else(|| config.storage.path.clone()) {
        Some(path) => path,
        None => paths.storage_file()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let store = FileKeyValueStore::open(path.clone())
        .with_context(|| format!("Failed to open storage at {:?}", path))?;
    tracing::info!("[Shell] Using storage at {:?}", store.path());
    Ok(Arc::new(store))
}
