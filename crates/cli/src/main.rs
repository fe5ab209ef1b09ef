// weldmap CLI - reconcile inspector weld maps against survey exports

mod compare;
mod config_cmd;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "weldmap")]
#[command(about = "Cross-check an inspector weld map against the survey export")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an inspector workbook against a survey workbook
    #[command(after_help = "\
Examples:
  weldmap compare \"Line 4 inspector.xlsx\" \"Line 4 survey.xlsx\"
  weldmap compare inspector.xlsx survey.csv --out-dir marked
  weldmap compare inspector.xlsx survey.xlsx --no-markup --json
  weldmap compare inspector.xlsx survey.xlsx --config weldmap.toml --strict-exit")]
    Compare {
        /// Full path to the inspector workbook (the sheet being checked)
        inspector: PathBuf,

        /// Full path to the survey workbook (the reference)
        survey: PathBuf,

        /// Config file (default: ./config/weldmap.toml, then the user config)
        #[arg(long, env = "WELDMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Directory for the marked-up copy (overrides output.directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip writing the marked-up workbook
        #[arg(long)]
        no_markup: bool,

        /// Print the JSON result to stdout
        #[arg(long)]
        json: bool,

        /// Write the JSON result to a file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit 3 when any discrepancy, missing record or ignored row is found
        #[arg(long)]
        strict_exit: bool,
    },

    /// Inspect and create configuration files
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  weldmap-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  weldmap-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
        )
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => {
            // No subcommand = show usage
            eprintln!("Usage: weldmap compare <INSPECTOR> <SURVEY> [options]");
            eprintln!("       weldmap --help for more information");
            Ok(())
        }
        Some(Commands::Compare {
            inspector,
            survey,
            config,
            out_dir,
            no_markup,
            json,
            output,
            strict_exit,
        }) => compare::cmd_compare(compare::CompareArgs {
            inspector,
            survey,
            config,
            out_dir,
            no_markup,
            json,
            output,
            strict_exit,
        }),
        Some(Commands::Config(cmd)) => config_cmd::cmd_config(cmd),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<weldmap_config::ConfigError> for CliError {
    fn from(err: weldmap_config::ConfigError) -> Self {
        use weldmap_config::ConfigError;
        let code = match err {
            ConfigError::Parse(_) | ConfigError::Validation(_) => exit_codes::EXIT_CONFIG_INVALID,
            ConfigError::Io(_) => exit_codes::EXIT_CONFIG_IO,
        };
        Self::new(code, err.to_string())
    }
}
