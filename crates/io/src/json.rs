// JSON result export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use weldmap_recon::ReconResult;

/// Write a reconciliation result as pretty JSON.
pub fn export(result: &ReconResult, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, result).map_err(|e| e.to_string())?;
    Ok(())
}
