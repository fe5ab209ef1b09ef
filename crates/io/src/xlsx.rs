// Excel import (xlsx, xls, xlsb, ods) and marked-up xlsx export

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};

use crate::grid::{CellValue, SheetGrid, Workbook};
use crate::markup::CellWrite;

/// Largest row/column rust_xlsxwriter will address.
const MAX_ROW: u32 = 1_048_575;
const MAX_COL: u16 = 16_383;

/// Import every sheet of an Excel/ODS file.
pub fn import(path: &Path) -> Result<Workbook, String> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| format!("Failed to open Excel file: {}", e))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("Excel file contains no sheets".to_string());
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| format!("Failed to read sheet '{}': {}", sheet_name, e))?;

        let mut sheet = SheetGrid::new(sheet_name.as_str());

        // Range start offset (data may not begin at A1)
        let (data_start_row, data_start_col) = range.start().unwrap_or((0, 0));

        for (row_idx, row) in range.rows().enumerate() {
            let target_row = data_start_row as usize + row_idx;
            if target_row > MAX_ROW as usize {
                break;
            }
            for (col_idx, cell) in row.iter().enumerate() {
                let target_col = data_start_col as usize + col_idx;
                if target_col > MAX_COL as usize {
                    break;
                }
                if let Some(value) = convert(cell) {
                    sheet.set(target_row as u32, target_col as u16, value);
                }
            }
        }

        log::debug!("sheet '{}': {} cells", sheet.name, sheet.cell_count());
        sheets.push(sheet);
    }

    Ok(Workbook { sheets })
}

fn convert(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::Error(e) => Some(CellValue::Text(format!("#{:?}", e))),
        // Serial number; formatting is not carried over
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}

#[derive(Debug, Default)]
pub struct ExportResult {
    pub sheets_exported: usize,
    pub cells_exported: usize,
    pub marks_applied: usize,
}

/// Write `workbook` to `path`, overlaying `writes` onto sheet `marked_sheet`.
///
/// Cell values are preserved; original styles are not.
pub fn export_marked_up(
    workbook: &Workbook,
    marked_sheet: usize,
    writes: &[CellWrite],
    path: &Path,
) -> Result<ExportResult, String> {
    workbook.sheet(marked_sheet)?;

    let mut result = ExportResult::default();
    let mut xlsx_workbook = XlsxWorkbook::new();

    for (sheet_idx, sheet) in workbook.sheets.iter().enumerate() {
        let worksheet = xlsx_workbook
            .add_worksheet()
            .set_name(&sheet.name)
            .map_err(|e| format!("Failed to create sheet '{}': {}", sheet.name, e))?;

        let overlay: &[CellWrite] = if sheet_idx == marked_sheet { writes } else { &[] };
        let covered: HashSet<(u32, u16)> = overlay.iter().map(|w| (w.row, w.col)).collect();

        for (row, col, value) in sheet.cells() {
            if covered.contains(&(row, col)) {
                continue;
            }
            write_value(worksheet, row, col, value)?;
            result.cells_exported += 1;
        }

        for write in overlay {
            write_mark(worksheet, write)?;
            result.marks_applied += 1;
        }

        result.sheets_exported += 1;
    }

    // Open on the marked sheet
    if let Ok(ws) = xlsx_workbook.worksheet_from_index(marked_sheet) {
        let _ = ws.set_active(true);
    }

    xlsx_workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))?;

    Ok(result)
}

fn write_value(worksheet: &mut Worksheet, row: u32, col: u16, value: &CellValue) -> Result<(), String> {
    match value {
        CellValue::Text(s) => worksheet.write_string(row, col, s).map(|_| ()),
        CellValue::Number(n) => worksheet.write_number(row, col, *n).map(|_| ()),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b).map(|_| ()),
    }
    .map_err(|e| format!("Failed to write {}: {}", cell_address(row, col), e))
}

fn write_mark(worksheet: &mut Worksheet, write: &CellWrite) -> Result<(), String> {
    let written = match write.fill {
        Some(color) => {
            let format = Format::new()
                .set_background_color(rust_xlsxwriter::Color::RGB(color.to_rgb_u32()));
            worksheet.write_string_with_format(write.row, write.col, &write.value, &format)
        }
        None => worksheet.write_string(write.row, write.col, &write.value),
    };
    written
        .map(|_| ())
        .map_err(|e| format!("Failed to mark {}: {}", cell_address(write.row, write.col), e))
}

fn cell_address(row: u32, col: u16) -> String {
    format!("{}{}", weldmap_config::column::col_to_letter(col), row + 1)
}
