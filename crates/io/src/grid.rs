// In-memory workbook: typed cell values keyed by (row, col)

use std::collections::BTreeMap;

use weldmap_config::column::letter_to_col;
use weldmap_config::SheetConfig;
use weldmap_recon::WeldRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Text as the spreadsheet would show it. Integers have no decimal point.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

/// One worksheet. Only non-empty cells are stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    cells: BTreeMap<(u32, u16), CellValue>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Store a value. Empty text clears the cell.
    pub fn set(&mut self, row: u32, col: u16, value: CellValue) {
        if matches!(&value, CellValue::Text(s) if s.is_empty()) {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Display text of a cell; `None` when the cell is empty.
    pub fn text(&self, row: u32, col: u16) -> Option<String> {
        self.get(row, col).map(CellValue::display)
    }

    /// Last row holding any value.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().map(|(row, _)| *row).max()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter().map(|((row, col), value)| (*row, *col, value))
    }

    /// One record per row from `starting_row` through the last used row.
    ///
    /// Rows are kept even when all three mapped cells are empty, so record
    /// position always tracks sheet position.
    pub fn records(&self, config: &SheetConfig) -> Result<Vec<WeldRecord>, String> {
        let column = |letters: &str| {
            letter_to_col(letters).ok_or_else(|| format!("invalid column letter '{letters}'"))
        };
        let or_col = column(config.columns.or_number.as_str())?;
        let pipe_col = column(config.columns.pipe_number.as_str())?;
        let heat_col = column(config.columns.heat_number.as_str())?;

        let Some(last) = self.last_row() else {
            return Ok(Vec::new());
        };
        let first = u32::try_from(config.starting_row)
            .map_err(|_| format!("starting row {} out of range", config.starting_row))?;

        Ok((first..=last)
            .map(|row| WeldRecord {
                row_number: row as usize,
                or_number: self.text(row, or_col),
                pipe_number: self.text(row, pipe_col),
                heat_number: self.text(row, heat_col),
            })
            .collect())
    }
}

/// All sheets of a workbook, in tab order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<SheetGrid>,
}

impl Workbook {
    pub fn sheet(&self, index: usize) -> Result<&SheetGrid, String> {
        self.sheets.get(index).ok_or_else(|| {
            format!(
                "worksheet index {} out of range (workbook has {} sheet{})",
                index,
                self.sheets.len(),
                if self.sheets.len() == 1 { "" } else { "s" }
            )
        })
    }
}
