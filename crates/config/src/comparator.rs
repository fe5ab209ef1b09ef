use serde::{Deserialize, Serialize};

use crate::column::letter_to_col;
use crate::error::ConfigError;
use crate::Color;

/// Placeholder replaced by the inspector workbook's file name.
pub const ORIGINAL_FILE_NAME: &str = "{{original-file-name}}";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    pub inspector: SheetConfig,
    pub survey: SheetConfig,
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Input sheets
// ---------------------------------------------------------------------------

/// Where the records live in one workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Zero-based worksheet position.
    pub worksheet_index: usize,
    /// Zero-based row of the first record (rows above are headers).
    pub starting_row: usize,
    pub columns: ColumnMapping,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            worksheet_index: 0,
            starting_row: 1,
            columns: ColumnMapping::default(),
        }
    }
}

/// Column letters of the three record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub or_number: String,
    pub pipe_number: String,
    pub heat_number: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            or_number: "A".into(),
            pipe_number: "B".into(),
            heat_number: "C".into(),
        }
    }
}

impl ColumnMapping {
    /// `(field name, column letters)` in field order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("or_number", self.or_number.as_str()),
            ("pipe_number", self.pipe_number.as_str()),
            ("heat_number", self.heat_number.as_str()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Output workbook
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name template; `{{original-file-name}}` is substituted.
    pub name: String,
    /// Directory the marked-up copy is written to.
    pub directory: String,
    pub columns: OutputColumns,
    pub colors: ColorCodes,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: format!("compared-{ORIGINAL_FILE_NAME}"),
            directory: "out".into(),
            columns: OutputColumns::default(),
            colors: ColorCodes::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputColumns {
    pub pipe_number: OutputColumn,
    pub heat_number: OutputColumn,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            pipe_number: OutputColumn {
                column: "T".into(),
                header_row: 0,
                header_text: "Survey Pipe Number".into(),
            },
            heat_number: OutputColumn {
                column: "U".into(),
                header_row: 0,
                header_text: "Survey Heat Number".into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputColumn {
    pub column: String,
    #[serde(default)]
    pub header_row: usize,
    #[serde(default)]
    pub header_text: String,
}

impl OutputColumn {
    /// Zero-based column index. Only valid after `ComparatorConfig::validate`.
    pub fn index(&self) -> Option<u16> {
        letter_to_col(&self.column)
    }
}

/// Fill colors applied to result cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorCodes {
    pub record_not_found: Color,
    pub no_reference_number: Color,
    pub discrepancy: Color,
}

impl Default for ColorCodes {
    fn default() -> Self {
        Self {
            record_not_found: Color::from_hex(0xFF9999),
            no_reference_number: Color::from_hex(0xFFFF99),
            discrepancy: Color::from_hex(0xFFCC66),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ComparatorConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: ComparatorConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (sheet, cfg) in [("inspector", &self.inspector), ("survey", &self.survey)] {
            for (field, letters) in cfg.columns.entries() {
                check_column(&format!("{sheet}.columns.{field}"), letters)?;
            }
        }

        let out = &self.output.columns;
        check_column("output.columns.pipe_number.column", &out.pipe_number.column)?;
        check_column("output.columns.heat_number.column", &out.heat_number.column)?;
        if out.pipe_number.index() == out.heat_number.index() {
            return Err(ConfigError::Validation(format!(
                "output pipe and heat numbers share column {}",
                out.pipe_number.column
            )));
        }

        if self.output.name.trim().is_empty() {
            return Err(ConfigError::Validation("output.name must not be empty".into()));
        }
        if self.output.name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "output.name must be a file name, not a path: '{}'",
                self.output.name
            )));
        }

        Ok(())
    }
}

fn check_column(key: &str, letters: &str) -> Result<(), ConfigError> {
    if letter_to_col(letters).is_none() {
        return Err(ConfigError::Validation(format!(
            "{key}: '{letters}' is not a column letter (A..XFD)"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
