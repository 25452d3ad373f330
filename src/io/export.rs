//! Export the statistics section to CSV or JSON.
//!
//! CSV leaves undefined statistics empty; JSON writes them as `null`.

use std::fs::File;
use std::path::Path;

use crate::domain::SummaryRow;
use crate::error::AppError;

/// Write summary rows; the format follows the extension (`.json`, else CSV).
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<(), AppError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        write_summary_json(path, rows)
    } else {
        write_summary_csv(path, rows)
    }
}

pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::new(4, format!("Failed to create stats CSV '{}': {e}", path.display()))
    })?;

    // `serialize` only emits a header for the first row; write it explicitly so an
    // empty selection still produces a well-formed file.
    if rows.is_empty() {
        writer
            .write_record(["product", "p25", "median", "p75", "mean"])
            .map_err(|e| AppError::new(4, format!("Failed to write stats CSV header: {e}")))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::new(4, format!("Failed to write stats CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush stats CSV: {e}")))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "exported statistics (csv)");
    Ok(())
}

pub fn write_summary_json(path: &Path, rows: &[SummaryRow]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(4, format!("Failed to create stats JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, rows)
        .map_err(|e| AppError::new(4, format!("Failed to write stats JSON: {e}")))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "exported statistics (json)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                product: "cabbage".to_string(),
                p25: Some(1.0),
                median: Some(2.0),
                p75: Some(3.0),
                mean: Some(2.5),
            },
            SummaryRow {
                product: "cilantro".to_string(),
                p25: None,
                median: None,
                p75: None,
                mean: None,
            },
        ]
    }

    #[test]
    fn csv_leaves_undefined_cells_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        write_summary(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "product,p25,median,p75,mean");
        assert_eq!(lines[1], "cabbage,1.0,2.0,3.0,2.5");
        assert_eq!(lines[2], "cilantro,,,,");
    }

    #[test]
    fn empty_selection_still_has_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        write_summary(&path, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap().trim(),
            "product,p25,median,p75,mean"
        );
    }

    #[test]
    fn json_uses_null_for_undefined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.JSON");
        write_summary(&path, &rows()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["product"], "cabbage");
        assert_eq!(value[0]["mean"], 2.5);
        assert!(value[1]["median"].is_null());
    }
}
