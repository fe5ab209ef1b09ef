//! `weldmap compare`: inspector vs survey reconciliation.

use std::path::{Path, PathBuf};

use weldmap_config::settings;
use weldmap_recon::model::ReconInput;
use weldmap_recon::SurveyStore;

use crate::exit_codes::{EXIT_RECON_INPUT, EXIT_RECON_MISMATCH, EXIT_RECON_OUTPUT};
use crate::CliError;

pub struct CompareArgs {
    pub inspector: PathBuf,
    pub survey: PathBuf,
    pub config: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub no_markup: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub strict_exit: bool,
}

fn recon_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError::new(code, msg)
}

fn require_file(path: &Path, role: &str) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::args(format!("{role} workbook not found: {}", path.display()))
            .with_hint(format!("pass the full path to the {role} workbook, in double quotes")));
    }
    Ok(())
}

pub fn cmd_compare(args: CompareArgs) -> Result<(), CliError> {
    require_file(&args.inspector, "inspector")?;
    require_file(&args.survey, "survey")?;

    let (config, source) = settings::resolve(args.config.as_deref())?;
    log::info!("config: {source}");

    // Load both sheets
    let inspector_wb = weldmap_io::load_workbook(&args.inspector).map_err(|e| {
        recon_err(EXIT_RECON_INPUT, format!("cannot read {}: {e}", args.inspector.display()))
    })?;
    let inspector = weldmap_io::load_records(&inspector_wb, &config.inspector)
        .map_err(|e| recon_err(EXIT_RECON_INPUT, format!("inspector: {e}")))?;

    let survey_wb = weldmap_io::load_workbook(&args.survey).map_err(|e| {
        recon_err(EXIT_RECON_INPUT, format!("cannot read {}: {e}", args.survey.display()))
    })?;
    let survey = weldmap_io::load_records(&survey_wb, &config.survey)
        .map_err(|e| recon_err(EXIT_RECON_INPUT, format!("survey: {e}")))?;

    let input = ReconInput {
        inspector,
        survey: SurveyStore::from(survey),
    };

    // Run engine
    let result = weldmap_recon::run(&input);

    // Marked-up copy
    if !args.no_markup {
        let out_dir = args
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));
        let written = weldmap_io::write_marked_up(
            &inspector_wb,
            &args.inspector,
            config.inspector.worksheet_index,
            &result.outcomes,
            &config.output,
            &out_dir,
        )
        .map_err(|e| recon_err(EXIT_RECON_OUTPUT, format!("cannot write marked-up workbook: {e}")))?;
        eprintln!("wrote {}", written.display());
    }

    // JSON output
    if let Some(ref path) = args.output {
        weldmap_io::json::export(&result, path)
            .map_err(|e| recon_err(EXIT_RECON_OUTPUT, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if args.json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::internal(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{} inspector rows: {} matched, {} pipe / {} heat discrepancies, {} not found, {} without OR number, {} invalid OR number",
        s.inspector_records,
        s.matched,
        s.pipe_discrepancies,
        s.heat_discrepancies,
        s.not_found,
        s.no_reference_number,
        s.invalid_format,
    );

    if args.strict_exit && s.has_findings() {
        return Err(recon_err(EXIT_RECON_MISMATCH, "findings present (strict exit)"));
    }

    Ok(())
}
