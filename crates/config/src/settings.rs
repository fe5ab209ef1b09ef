// Config file discovery, load and init
// Looked up in ./config/weldmap.toml, then ~/.config/weldmap/config.toml

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::comparator::ComparatorConfig;
use crate::error::ConfigError;

/// Project-local config, relative to the working directory.
pub const PROJECT_CONFIG: &str = "config/weldmap.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::User(p) => write!(f, "{}", p.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Per-user config file path.
pub fn user_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weldmap");
    config_dir.join("config.toml")
}

/// Load and validate one config file.
pub fn load(path: &Path) -> Result<ComparatorConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    ComparatorConfig::from_toml(&text)
}

/// Resolve the effective config for this process.
///
/// An explicit path must exist. Otherwise the first existing file of
/// `./config/weldmap.toml` and the per-user file wins, and built-in defaults
/// apply when neither exists.
pub fn resolve(explicit: Option<&Path>) -> Result<(ComparatorConfig, ConfigSource), ConfigError> {
    resolve_from(explicit, Path::new("."), Some(user_config_path()))
}

/// `resolve` against an explicit working directory and user path.
pub fn resolve_from(
    explicit: Option<&Path>,
    cwd: &Path,
    user: Option<PathBuf>,
) -> Result<(ComparatorConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = load(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let project = cwd.join(PROJECT_CONFIG);
    if project.is_file() {
        let config = load(&project)?;
        return Ok((config, ConfigSource::Project(project)));
    }

    if let Some(user) = user.filter(|p| p.is_file()) {
        let config = load(&user)?;
        return Ok((config, ConfigSource::User(user)));
    }

    log::debug!("no config file found, using built-in defaults");
    Ok((ComparatorConfig::default(), ConfigSource::Defaults))
}

/// Write the commented default config. Refuses to overwrite unless `force`.
pub fn init(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::Io(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    // Ensure directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))
}

/// Save a config value (no comments).
pub fn save(config: &ComparatorConfig, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;
    let text = config.to_toml()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
    }
    fs::write(path, text).map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))
}

pub const DEFAULT_CONFIG: &str = r#"# weldmap configuration
#
# Rows and worksheets are zero-based. Columns are spreadsheet letters.

# Inspector weld map
[inspector]
worksheet_index = 0
starting_row = 1

[inspector.columns]
or_number = "A"
pipe_number = "B"
heat_number = "C"

# Survey export
[survey]
worksheet_index = 0
starting_row = 1

[survey.columns]
or_number = "A"
pipe_number = "B"
heat_number = "C"

# Marked-up copy of the inspector workbook
[output]
# {{original-file-name}} is replaced by the inspector file name
name = "compared-{{original-file-name}}"
directory = "out"

[output.columns.pipe_number]
column = "T"
header_row = 0
header_text = "Survey Pipe Number"

[output.columns.heat_number]
column = "U"
header_row = 0
header_text = "Survey Heat Number"

# Fill colors, RRGGBB or AARRGGBB
[output.colors]
record_not_found = "FF9999"
no_reference_number = "FFFF99"
discrepancy = "FFCC66"
"#;
