// CSV/TSV import

use std::io::Read;
use std::path::Path;

use crate::grid::{CellValue, SheetGrid, Workbook};

/// Sheet name given to delimited-text imports.
pub const CSV_SHEET_NAME: &str = "Sheet1";

pub fn import(path: &Path) -> Result<Workbook, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

pub fn import_tsv(path: &Path) -> Result<Workbook, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, b'\t')
}

/// Detect the most likely field delimiter by checking consistency across the first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line. The delimiter
/// that produces the most consistent field count (>1 field) wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (Excel CSV exports are often Windows-1252)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            log::debug!("{} is not UTF-8, decoding as Windows-1252", path.display());
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Every field is kept as text, so codes like `007` survive untouched.
fn import_from_string(content: &str, delimiter: u8) -> Result<Workbook, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut sheet = SheetGrid::new(CSV_SHEET_NAME);

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| e.to_string())?;
        let row = u32::try_from(row_idx).map_err(|_| "CSV file has too many rows".to_string())?;
        for (col_idx, field) in record.iter().enumerate() {
            let col = u16::try_from(col_idx).map_err(|_| "CSV file has too many columns".to_string())?;
            sheet.set(row, col, CellValue::Text(field.to_string()));
        }
    }

    Ok(Workbook {
        sheets: vec![sheet],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sniffs_semicolons() {
        let content = "OR;Pipe;Heat\nOR1;P1;H1\nOR2;P2;H2\n";
        assert_eq!(sniff_delimiter(content), b';');
        assert_eq!(sniff_delimiter("OR,Pipe\n1,2\n"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn import_keeps_text_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("survey.csv");
        fs::write(&path, "OR,Pipe,Heat\n007,P-1,\n8,\"P,2\",H2\n").unwrap();

        let wb = import(&path).unwrap();
        let sheet = wb.sheet(0).unwrap();
        assert_eq!(sheet.name, CSV_SHEET_NAME);
        assert_eq!(sheet.text(1, 0).as_deref(), Some("007"));
        assert_eq!(sheet.text(1, 2), None);
        assert_eq!(sheet.text(2, 1).as_deref(), Some("P,2"));
        assert_eq!(sheet.last_row(), Some(2));
    }

    #[test]
    fn windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // 0xE9 is é in Windows-1252 and invalid as UTF-8
        fs::write(&path, b"OR\tNote\nOR1\tCaf\xe9\n").unwrap();

        let wb = import_tsv(&path).unwrap();
        assert_eq!(wb.sheets[0].text(1, 1).as_deref(), Some("Café"));
    }
}
