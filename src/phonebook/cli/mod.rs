//! # CLI Behavior
//!
//! This is **one possible UI client** for the phonebook, not the application itself.
//! It is the only place that knows about stdin, stdout, and exit codes.
//!
//! ## Session Flow
//!
//! 1. Parse flags, set up logging, resolve config and the backing file.
//! 2. Open the phonebook. A corrupt backing file stops here with exit code 1.
//! 3. Run the command loop until `exit` or end of input.
//! 4. If the cache differs from the file, ask whether to save (default yes).
//!
//! ## Module Structure
//!
//! - `args`: Argument parsing via clap
//! - `command`: The names the command loop understands
//! - `terminal`: Prompting over any reader/writer pair
//! - `controller`: The command loop itself
//! - `render`: Template rendering with the style filter
//! - `styles`: Theme and style names
//! - `templates`: Output templates

mod args;
mod command;
mod controller;
mod render;
mod styles;
mod templates;
mod terminal;

use args::Cli;
use clap::Parser;
use console::Term;
use controller::Controller;
use directories::ProjectDirs;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::store::fs::JsonFileStore;
use render::Renderer;
use std::io;
use std::path::PathBuf;
use terminal::Terminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config_dir.clone().or_else(default_config_dir) {
        Some(dir) => PhonebookConfig::load(&dir)?,
        None => PhonebookConfig::default(),
    }
    .with_storage_override(cli.file.clone());
    debug!(?config, "configuration resolved");

    let api = PhonebookApi::open(JsonFileStore::new(config.storage_file.clone()))?;
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(
        api,
        Terminal::new(stdin.lock(), stdout.lock()),
        Renderer::new(use_color),
    )
    .autosave_on_exit(config.autosave_on_exit);
    controller.run()
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "phonebook", "phonebook").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
