//! Metric summary CSV ingest.
//!
//! The metric file is produced elsewhere; we only index it by `product` and keep
//! every other cell exactly as written.

use std::fs::File;
use std::path::Path;

use crate::domain::{MetricRow, MetricTable};
use crate::error::LoadError;
use crate::io::ingest::{clean_header, find_column, list_headers};

/// Name of the index column in the metric CSV.
pub const PRODUCT_COLUMN: &str = "product";

pub fn load_metric_table(path: &Path) -> Result<MetricTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_metric_table(file, path)
}

pub fn read_metric_table<R: std::io::Read>(input: R, path: &Path) -> Result<MetricTable, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let product_idx =
        find_column(&headers, PRODUCT_COLUMN).ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: PRODUCT_COLUMN,
            found: list_headers(&headers),
        })?;

    let metric_columns: Vec<usize> = (0..headers.len()).filter(|i| *i != product_idx).collect();
    let columns = metric_columns
        .iter()
        .map(|i| clean_header(&headers[*i]).to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        rows.push(MetricRow {
            product: record.get(product_idx).unwrap_or("").to_string(),
            values: metric_columns
                .iter()
                .map(|i| record.get(*i).unwrap_or("").to_string())
                .collect(),
        });
    }

    Ok(MetricTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_kept_verbatim() {
        let table = read_metric_table(
            "model,product,mape,rmse\nlgbm,cabbage,0.1230,45\nlgbm,radish,,n/a\n".as_bytes(),
            Path::new("metric_summary.csv"),
        )
        .unwrap();

        assert_eq!(table.columns, vec!["model", "mape", "rmse"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.row("cabbage").unwrap().values, vec!["lgbm", "0.1230", "45"]);
        assert_eq!(table.row("radish").unwrap().values, vec!["lgbm", "", "n/a"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let table =
            read_metric_table("product,mape\nonion\n".as_bytes(), Path::new("m.csv")).unwrap();
        assert_eq!(table.rows[0].values, vec![""]);
    }

    #[test]
    fn missing_product_column_is_reported() {
        let err = read_metric_table("item,mape\nonion,1\n".as_bytes(), Path::new("m.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("no `product` column"), "{err}");
    }
}
