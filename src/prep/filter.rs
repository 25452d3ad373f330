//! Inclusive date-range filter.

use crate::domain::{DateRange, PriceTable, TableView};

/// Rows with `range.start <= date <= range.end`, in table order.
///
/// An inverted range (`start > end`) selects nothing. Item selection is left to
/// the consumers of the view.
pub fn filter_by_date<'a>(table: &'a PriceTable, range: DateRange) -> TableView<'a> {
    let dates = table.dates();
    let lo = dates.partition_point(|d| *d < range.start);
    let hi = dates.partition_point(|d| *d <= range.end);
    TableView::new(table, lo..hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceSeries;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, day).unwrap()
    }

    fn table() -> PriceTable {
        let dates = vec![d(1, 1), d(1, 3), d(1, 5), d(1, 7), d(1, 9)];
        let values = (0..dates.len()).map(|i| Some(i as f64)).collect();
        PriceTable::new(
            dates,
            vec![PriceSeries {
                name: "garlic".to_string(),
                values,
            }],
        )
    }

    #[test]
    fn bounds_are_inclusive() {
        let t = table();
        let view = filter_by_date(&t, DateRange::new(d(1, 3), d(1, 7)));
        assert_eq!(view.dates(), &[d(1, 3), d(1, 5), d(1, 7)]);
        assert_eq!(
            view.column("garlic").unwrap(),
            &[Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn bounds_between_observations() {
        let t = table();
        let view = filter_by_date(&t, DateRange::new(d(1, 2), d(1, 6)));
        assert_eq!(view.dates(), &[d(1, 3), d(1, 5)]);
    }

    #[test]
    fn full_observed_range_returns_everything() {
        let t = table();
        let range = DateRange::new(t.first_date().unwrap(), t.last_date().unwrap());
        let view = filter_by_date(&t, range);
        assert_eq!(view.dates(), t.dates());
        assert_eq!(view.column("garlic").unwrap(), &t.items()[0].values[..]);
    }

    #[test]
    fn view_matches_a_row_by_row_scan() {
        let t = table();
        for (start, end) in [(d(1, 1), d(1, 9)), (d(1, 4), d(1, 8)), (d(1, 9), d(1, 9)), (d(1, 6), d(1, 2))] {
            let range = DateRange::new(start, end);
            let expected: Vec<NaiveDate> = t.dates().iter().copied().filter(|x| range.contains(*x)).collect();
            assert_eq!(filter_by_date(&t, range).dates(), &expected[..], "{start}..{end}");
        }
    }

    #[test]
    fn inverted_or_disjoint_ranges_are_empty() {
        let t = table();
        assert!(filter_by_date(&t, DateRange::new(d(1, 7), d(1, 3))).is_empty());
        assert!(filter_by_date(&t, DateRange::new(d(2, 1), d(3, 1))).is_empty());
    }
}
