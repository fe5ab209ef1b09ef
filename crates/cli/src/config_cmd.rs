//! `weldmap config`: validate, create and locate config files.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use weldmap_config::settings::{self, ConfigSource, PROJECT_CONFIG};

use crate::CliError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Check a config file (default: the one `compare` would use)
    #[command(after_help = "\
Examples:
  weldmap config validate
  weldmap config validate config/weldmap.toml")]
    Validate {
        path: Option<PathBuf>,
    },

    /// Write a commented default config
    #[command(after_help = "\
Examples:
  weldmap config init
  weldmap config init ~/.config/weldmap/config.toml --force")]
    Init {
        /// Target file (default: ./config/weldmap.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show where config files are looked up
    Path,
}

pub fn cmd_config(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Validate { path } => cmd_config_validate(path),
        ConfigCommands::Init { path, force } => cmd_config_init(path, force),
        ConfigCommands::Path => cmd_config_path(),
    }
}

fn cmd_config_validate(path: Option<PathBuf>) -> Result<(), CliError> {
    let (_, source) = settings::resolve(path.as_deref())?;
    println!("{source}: ok");
    Ok(())
}

fn cmd_config_init(path: Option<PathBuf>, force: bool) -> Result<(), CliError> {
    let path = path.unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG));
    settings::init(&path, force)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_config_path() -> Result<(), CliError> {
    // A broken config still shows the lookup order, with nothing marked
    let active = settings::resolve(None).map(|(_, source)| source).ok();
    let candidates = [
        ConfigSource::Project(Path::new(PROJECT_CONFIG).to_path_buf()),
        ConfigSource::User(settings::user_config_path()),
    ];

    for candidate in &candidates {
        let marker = match &active {
            Some(active) if same_source(candidate, active) => "*",
            _ => " ",
        };
        println!("{marker} {candidate}");
    }
    let marker = if active == Some(ConfigSource::Defaults) { "*" } else { " " };
    println!("{marker} {}", ConfigSource::Defaults);
    Ok(())
}

fn same_source(candidate: &ConfigSource, active: &ConfigSource) -> bool {
    match (candidate, active) {
        (ConfigSource::Project(_), ConfigSource::Project(_)) => true,
        (ConfigSource::User(a), ConfigSource::User(b)) => a == b,
        _ => false,
    }
}
