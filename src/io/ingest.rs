//! Price CSV ingest.
//!
//! Turns `date,<item>,<item>,...` rows into a `PriceTable`:
//! - the `date` column is required (clear error when absent)
//! - rows may come in any order; they are sorted by date and duplicates rejected
//! - every other column is an item; unparsable cells become missing values

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{PriceSeries, PriceTable};
use crate::error::LoadError;

/// Name of the index column in the price CSV.
pub const DATE_COLUMN: &str = "date";

/// Human-readable list of the formats `parse_date` accepts.
pub const DATE_FORMATS: &str = "YYYY-MM-DD, YYYY/MM/DD, MM/DD/YYYY or MM-DD-YYYY";

/// Cell spellings treated as "no observation".
const MISSING_MARKERS: [&str; 6] = ["na", "n/a", "nan", "null", "none", "-"];

/// Load the price CSV at `path` (no quality mask applied).
pub fn load_price_table(path: &Path) -> Result<PriceTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_price_table(file, path)
}

/// Parse price CSV content from any reader. `path` is only used in errors.
pub fn read_price_table<R: std::io::Read>(input: R, path: &Path) -> Result<PriceTable, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Short rows are allowed; their trailing cells are missing.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let date_idx = find_column(&headers, DATE_COLUMN).ok_or_else(|| LoadError::MissingColumn {
        path: path.to_path_buf(),
        column: DATE_COLUMN,
        found: list_headers(&headers),
    })?;

    let item_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != date_idx)
        .map(|(idx, name)| (idx, clean_header(name).to_string()))
        .collect();
    if item_columns.is_empty() {
        return Err(LoadError::NoItems {
            path: path.to_path_buf(),
        });
    }

    let mut rows: Vec<(NaiveDate, Vec<Option<f64>>)> = Vec::new();
    let mut unparsable = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = result.map_err(csv_err)?;

        let raw_date = record.get(date_idx).unwrap_or("");
        let date = parse_date(raw_date).ok_or_else(|| LoadError::InvalidDate {
            path: path.to_path_buf(),
            line,
            value: raw_date.to_string(),
        })?;

        let cells = item_columns
            .iter()
            .map(|(col, _)| {
                let raw = record.get(*col).unwrap_or("");
                let cell = parse_price(raw);
                if cell.is_none() && !is_missing_marker(raw) {
                    unparsable += 1;
                }
                cell
            })
            .collect();
        rows.push((date, cells));
    }

    if unparsable > 0 {
        tracing::warn!(
            path = %path.display(),
            cells = unparsable,
            "non-numeric price cells treated as missing"
        );
    }

    // Stable sort keeps duplicates adjacent for the check below.
    rows.sort_by_key(|(date, _)| *date);
    if let Some(w) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(LoadError::DuplicateDate {
            path: path.to_path_buf(),
            date: w[0].0,
        });
    }

    let mut dates = Vec::with_capacity(rows.len());
    let mut items: Vec<PriceSeries> = item_columns
        .into_iter()
        .map(|(_, name)| PriceSeries {
            name,
            values: Vec::with_capacity(rows.len()),
        })
        .collect();

    for (date, cells) in rows {
        dates.push(date);
        for (series, cell) in items.iter_mut().zip(cells) {
            series.values.push(cell);
        }
    }

    Ok(PriceTable::new(dates, items))
}

/// Index of the header matching `name` (case-insensitive, BOM/whitespace ignored).
pub(crate) fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| clean_header(h).eq_ignore_ascii_case(name))
}

pub(crate) fn clean_header(name: &str) -> &str {
    // Excel likes to prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}')
}

pub(crate) fn list_headers(headers: &StringRecord) -> String {
    headers
        .iter()
        .map(clean_header)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse the date column. A trailing time of day is accepted and dropped.
///
/// Slash and dash dates with the year last are read month first (`01/02/2020` is
/// January 2nd).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y"];
    let s = s.trim();
    let day_part = s.split([' ', 'T']).next().unwrap_or(s);
    FMTS.iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day_part, fmt).ok())
}

fn parse_price(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn is_missing_marker(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str) -> Result<PriceTable, LoadError> {
        read_price_table(csv.as_bytes(), Path::new("prices.csv"))
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn rows_are_sorted_and_columns_kept_in_file_order() {
        let table = read(
            "date,radish,cabbage\n\
             2020-01-03,3,30\n\
             2020-01-01,1,10\n\
             2020-01-02,,20\n",
        )
        .unwrap();

        assert_eq!(table.dates(), &[d(2020, 1, 1), d(2020, 1, 2), d(2020, 1, 3)]);
        let names: Vec<_> = table.items().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["radish", "cabbage"]);
        assert_eq!(
            table.series("radish").unwrap().values,
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn date_column_may_be_anywhere_and_any_case() {
        let table = read("\u{feff}onion, Date \n1.5,2020-02-01\n").unwrap();
        assert_eq!(table.dates(), &[d(2020, 2, 1)]);
        assert_eq!(table.series("onion").unwrap().values, vec![Some(1.5)]);
    }

    #[test]
    fn missing_date_column_is_reported() {
        let err = read("day,cabbage\n2020-01-01,1\n").unwrap_err();
        match err {
            LoadError::MissingColumn { column, found, .. } => {
                assert_eq!(column, "date");
                assert_eq!(found, "day, cabbage");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_dates_report_the_line() {
        let err = read("date,garlic\n2020-01-01,1\nyesterday,2\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 3, .. }), "{err}");
    }

    #[test]
    fn bad_date_message_lists_accepted_formats() {
        let err = read("date,garlic\n2020.01.01,1\n").unwrap_err();
        assert!(err.to_string().contains(DATE_FORMATS), "{err}");
    }

    #[test]
    fn us_style_dates_load() {
        let table = read("date,cabbage\n09/29/2020,2\n09/28/2020,1\n").unwrap();
        assert_eq!(table.dates(), &[d(2020, 9, 28), d(2020, 9, 29)]);
        assert_eq!(table.series("cabbage").unwrap().values, vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn short_rows_leave_trailing_cells_missing() {
        let table = read("date,cabbage,radish\n2020-01-01,1\n2020-01-02,2,3\n").unwrap();
        assert_eq!(table.series("cabbage").unwrap().values, vec![Some(1.0), Some(2.0)]);
        assert_eq!(table.series("radish").unwrap().values, vec![None, Some(3.0)]);
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let err = read("date,garlic\n2020-01-01,1\n2020-01-01,2\n").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateDate { .. }), "{err}");
    }

    #[test]
    fn table_without_items_is_rejected() {
        let err = read("date\n2020-01-01\n").unwrap_err();
        assert!(matches!(err, LoadError::NoItems { .. }));
    }

    #[test]
    fn missing_markers_and_garbage_become_none() {
        let table = read("date,garlic,onion,leek\n2020-01-01,NaN,n/a,abc\n").unwrap();
        assert!(table.items().iter().all(|s| s.values == vec![None]));
    }

    #[test]
    fn accepted_date_formats() {
        assert_eq!(parse_date("2020-09-28"), Some(d(2020, 9, 28)));
        assert_eq!(parse_date("2020/09/28"), Some(d(2020, 9, 28)));
        assert_eq!(parse_date("09/28/2020"), Some(d(2020, 9, 28)));
        assert_eq!(parse_date("09-28-2020"), Some(d(2020, 9, 28)));
        // Month first, never day first.
        assert_eq!(parse_date("01/02/2020"), Some(d(2020, 1, 2)));
        assert_eq!(parse_date("28/09/2020"), None);
        assert_eq!(parse_date("2020-09-28 00:00:00"), Some(d(2020, 9, 28)));
        assert_eq!(parse_date("2020-09-28T00:00:00"), Some(d(2020, 9, 28)));
        assert_eq!(parse_date("Sep 28"), None);
    }
}
