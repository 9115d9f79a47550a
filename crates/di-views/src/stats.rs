//! Descriptive statistics over a table

use ahash::AHashMap;
use arrow::array::Array;

use di_core::DataTable;

use crate::extract;

/// Summary of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// Non-null cell count.
    pub count: usize,
    pub numeric: Option<NumericSummary>,
    pub categorical: Option<CategoricalSummary>,
}

/// Descriptive statistics for a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Frequency statistics for a non-numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalSummary {
    pub unique: usize,
    /// Most frequent value; ties break toward the first-seen value.
    pub top: String,
    pub freq: usize,
}

/// Describe every column of the table.
///
/// Numeric columns get count/mean/std/min/quartiles/max; all other columns
/// get count/unique/top/freq. Columns with no non-null values report only
/// their count.
pub fn describe(table: &DataTable) -> Vec<ColumnSummary> {
    table
        .all_columns()
        .iter()
        .filter_map(|name| {
            let array = table.column_by_name(name)?;
            Some(summarize(table, name, array.as_ref()))
        })
        .collect()
}

fn summarize(table: &DataTable, name: &str, array: &dyn Array) -> ColumnSummary {
    let count = array.len() - array.null_count();

    if table.is_numeric_column(name) {
        let values: Vec<f64> = extract::numeric_values(table, name)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        ColumnSummary {
            name: name.to_string(),
            count,
            numeric: numeric_summary(&values),
            categorical: None,
        }
    } else {
        ColumnSummary {
            name: name.to_string(),
            count,
            numeric: None,
            categorical: categorical_summary(array),
        }
    }
}

fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let (q1, median, q3) = quartiles(&sorted);

    Some(NumericSummary {
        mean,
        std_dev: variance.sqrt(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
    })
}

/// Quartiles by linear interpolation over a sorted slice.
fn quartiles(sorted: &[f64]) -> (f64, f64, f64) {
    let last = (sorted.len() - 1) as f64;
    (
        interpolate(sorted, last * 0.25),
        interpolate(sorted, last * 0.5),
        interpolate(sorted, last * 0.75),
    )
}

fn interpolate(sorted: &[f64], idx: f64) -> f64 {
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper || upper >= sorted.len() {
        sorted[lower]
    } else {
        let fraction = idx - lower as f64;
        sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
    }
}

fn categorical_summary(array: &dyn Array) -> Option<CategoricalSummary> {
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for row in 0..array.len() {
        if array.is_null(row) {
            continue;
        }
        let value = extract::display_value(array, row);
        if !counts.contains_key(&value) {
            first_seen.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    if first_seen.is_empty() {
        return None;
    }

    let mut top = first_seen[0].clone();
    let mut freq = counts[&top];
    for value in &first_seen {
        let count = counts[value];
        if count > freq {
            top = value.clone();
            freq = count;
        }
    }

    Some(CategoricalSummary {
        unique: first_seen.len(),
        top,
        freq,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Float64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    fn table() -> DataTable {
        let schema = Arc::new(Schema::new(vec![
            Field::new("v", DataType::Float64, true),
            Field::new("s", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![
                    Some(1.0),
                    Some(2.0),
                    Some(3.0),
                    Some(4.0),
                    None,
                ])) as _,
                Arc::new(StringArray::from(vec![
                    Some("a"),
                    Some("b"),
                    Some("a"),
                    None,
                    Some("c"),
                ])) as _,
            ],
        )
        .unwrap();
        DataTable::new(batch)
    }

    #[test]
    fn numeric_columns_get_full_descriptive_stats() {
        let summaries = describe(&table());
        let v = &summaries[0];
        assert_eq!(v.name, "v");
        assert_eq!(v.count, 4);
        let numeric = v.numeric.as_ref().unwrap();
        assert!((numeric.mean - 2.5).abs() < 1e-12);
        assert!((numeric.min - 1.0).abs() < 1e-12);
        assert!((numeric.max - 4.0).abs() < 1e-12);
        assert!((numeric.median - 2.5).abs() < 1e-12);
        assert!((numeric.q1 - 1.75).abs() < 1e-12);
        assert!((numeric.q3 - 3.25).abs() < 1e-12);
        // Population standard deviation of 1..4.
        assert!((numeric.std_dev - (1.25f64).sqrt()).abs() < 1e-12);
        assert!(v.categorical.is_none());
    }

    #[test]
    fn text_columns_get_frequency_stats() {
        let summaries = describe(&table());
        let s = &summaries[1];
        assert_eq!(s.count, 4);
        let categorical = s.categorical.as_ref().unwrap();
        assert_eq!(categorical.unique, 3);
        assert_eq!(categorical.top, "a");
        assert_eq!(categorical.freq, 2);
        assert!(s.numeric.is_none());
    }

    #[test]
    fn frequency_ties_break_toward_first_seen() {
        let schema = Arc::new(Schema::new(vec![Field::new("s", DataType::Utf8, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["b", "a", "b", "a"])) as _],
        )
        .unwrap();
        let summaries = describe(&DataTable::new(batch));
        let categorical = summaries[0].categorical.as_ref().unwrap();
        assert_eq!(categorical.top, "b");
        assert_eq!(categorical.freq, 2);
    }

    #[test]
    fn all_null_column_reports_count_only() {
        let schema = Arc::new(Schema::new(vec![Field::new("v", DataType::Float64, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Float64Array::from(vec![None::<f64>, None])) as _],
        )
        .unwrap();
        let summaries = describe(&DataTable::new(batch));
        assert_eq!(summaries[0].count, 0);
        assert!(summaries[0].numeric.is_none());
    }
}
