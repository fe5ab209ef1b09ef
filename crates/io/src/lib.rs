// File I/O operations

pub mod csv;
pub mod grid;
pub mod json;
pub mod markup;
pub mod xlsx;

use std::path::{Path, PathBuf};

use weldmap_config::{OutputConfig, SheetConfig};
use weldmap_recon::{ComparisonOutcome, WeldRecord};

pub use grid::{CellValue, SheetGrid, Workbook};
pub use markup::{output_file_name, render, CellWrite};

/// Open a workbook by extension: `.csv`/`.tsv` as delimited text,
/// anything else through calamine.
pub fn load_workbook(path: &Path) -> Result<Workbook, String> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let workbook = match ext.as_str() {
        "csv" => csv::import(path)?,
        "tsv" | "tab" => csv::import_tsv(path)?,
        _ => xlsx::import(path)?,
    };
    log::info!("loaded {} ({} sheet(s))", path.display(), workbook.sheets.len());
    Ok(workbook)
}

/// Records of the configured worksheet.
pub fn load_records(workbook: &Workbook, sheet: &SheetConfig) -> Result<Vec<WeldRecord>, String> {
    let grid = workbook.sheet(sheet.worksheet_index)?;
    let records = grid.records(sheet)?;
    log::info!("sheet '{}': {} record(s) from row {}", grid.name, records.len(), sheet.starting_row);
    Ok(records)
}

/// Render `outcomes` onto a copy of the inspector workbook and write it to
/// `<out_dir>/<output name>`. Returns the written path.
pub fn write_marked_up(
    inspector: &Workbook,
    inspector_path: &Path,
    inspector_sheet: usize,
    outcomes: &[ComparisonOutcome],
    output: &OutputConfig,
    out_dir: &Path,
) -> Result<PathBuf, String> {
    std::fs::create_dir_all(out_dir).map_err(|e| format!("{}: {}", out_dir.display(), e))?;
    let path = out_dir.join(output_file_name(&output.name, inspector_path));

    let writes = render(outcomes, output);
    let result = xlsx::export_marked_up(inspector, inspector_sheet, &writes, &path)?;
    log::info!(
        "wrote {} ({} cells, {} marks)",
        path.display(),
        result.cells_exported,
        result.marks_applied
    );
    Ok(path)
}
