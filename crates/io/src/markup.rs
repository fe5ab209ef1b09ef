// Comparison outcomes -> cell writes on the inspector worksheet

use std::path::Path;

use weldmap_config::comparator::ORIGINAL_FILE_NAME;
use weldmap_config::{Color, OutputColumn, OutputConfig};
use weldmap_recon::{ComparisonOutcome, FieldKind};

/// A value (and optional fill) to place at a zero-based cell position.
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    pub row: u32,
    pub col: u16,
    pub value: String,
    pub fill: Option<Color>,
}

/// Build the cell writes for one run: column headers first, then one or two
/// cells per outcome in outcome order.
pub fn render(outcomes: &[ComparisonOutcome], output: &OutputConfig) -> Vec<CellWrite> {
    let pipe_col = column_index(&output.columns.pipe_number);
    let heat_col = column_index(&output.columns.heat_number);
    let colors = &output.colors;

    let mut writes = Vec::with_capacity(outcomes.len() + 2);

    for (column, col) in [
        (&output.columns.pipe_number, pipe_col),
        (&output.columns.heat_number, heat_col),
    ] {
        if let Some(col) = col {
            push(&mut writes, column.header_row, col, &column.header_text, None);
        }
    }

    for outcome in outcomes {
        match outcome {
            ComparisonOutcome::FieldResult {
                inspector_row,
                field,
                discrepancy,
                value,
                ..
            } => {
                let col = match field {
                    FieldKind::PipeNumber => pipe_col,
                    FieldKind::HeatNumber => heat_col,
                };
                let fill = discrepancy.then_some(colors.discrepancy);
                if let Some(col) = col {
                    push(&mut writes, *inspector_row, col, value, fill);
                }
            }
            ComparisonOutcome::NotFound {
                inspector_row,
                pipe_number,
                heat_number,
            } => {
                let fill = Some(colors.record_not_found);
                echo(&mut writes, *inspector_row, pipe_col, pipe_number.as_deref(), fill);
                echo(&mut writes, *inspector_row, heat_col, heat_number.as_deref(), fill);
            }
            ComparisonOutcome::Ignored {
                inspector_row,
                pipe_number,
                heat_number,
                ..
            } => {
                let fill = Some(colors.no_reference_number);
                echo(&mut writes, *inspector_row, pipe_col, pipe_number.as_deref(), fill);
                echo(&mut writes, *inspector_row, heat_col, heat_number.as_deref(), fill);
            }
        }
    }

    writes
}

fn column_index(column: &OutputColumn) -> Option<u16> {
    let index = column.index();
    if index.is_none() {
        log::warn!("output column '{}' is not a column letter, skipping", column.column);
    }
    index
}

fn echo(writes: &mut Vec<CellWrite>, row: usize, col: Option<u16>, value: Option<&str>, fill: Option<Color>) {
    if let (Some(col), Some(value)) = (col, value) {
        push(writes, row, col, value, fill);
    }
}

/// Empty values are never written.
fn push(writes: &mut Vec<CellWrite>, row: usize, col: u16, value: &str, fill: Option<Color>) {
    if value.is_empty() {
        return;
    }
    let Ok(row) = u32::try_from(row) else {
        log::warn!("row {row} beyond worksheet limits, skipping");
        return;
    };
    writes.push(CellWrite {
        row,
        col,
        value: value.to_string(),
        fill,
    });
}

/// Marked-up file name for `inspector_path`.
///
/// `{{original-file-name}}` becomes the inspector's file name (extension
/// included); the result always ends in `.xlsx`.
pub fn output_file_name(template: &str, inspector_path: &Path) -> String {
    let original = inspector_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = template.replace(ORIGINAL_FILE_NAME, &original);
    Path::new(&name)
        .with_extension("xlsx")
        .to_string_lossy()
        .into_owned()
}
