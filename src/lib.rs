// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::application::Session;
use crate::cli::args::Args;
use crate::infrastructure::{Config, FileDeckStore};

/// Startup settings after merging command line and config file.
/// Command line values win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub import: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn resolve(args: &Args, config: Config) -> Self {
        Self {
            import: args.import.clone().or(config.files.import),
            export: args.export.clone().or(config.files.export),
            seed: args.seed.or(config.study.seed),
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting flashdeck with arguments");

    let config = Config::discover(args.config.as_deref()).context("Failed to load config")?;
    let settings = Settings::resolve(&args, config);
    debug!(?settings, "Resolved settings");

    let rng = match settings.seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(FileDeckStore::new(), rng, stdin.lock(), io::stdout());
    if let Some(path) = settings.export {
        session = session.with_export_on_exit(path);
    }
    if let Some(path) = settings.import {
        session.import_file(&path)?;
    }

    session.run()
}
