//! CSV ingestion adapter
//!
//! Parses uploaded bytes into a [`DataTable`]: header dedup, sample-based
//! column typing, then typed arrow arrays. Runs once per upload; nothing is
//! retained beyond the in-memory table.

use std::sync::Arc;

use ahash::AHashSet;
use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, Int64Builder, StringBuilder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use csv::ReaderBuilder;

use di_core::DataTable;

use crate::IngestError;

/// Rows inspected for type detection.
const MAX_SAMPLE_ROWS: usize = 5000;

/// Parse uploaded bytes into a classified table.
///
/// Duplicate header names are renamed (`x`, `x_2`, `x_3`, …) rather than
/// dropped, so no data is lost. Column types are detected from a sample of
/// rows; cells that do not parse under the detected type become nulls.
pub fn ingest(bytes: &[u8]) -> Result<DataTable, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers = dedup_headers(reader.headers()?);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    let sample = &rows[..rows.len().min(MAX_SAMPLE_ROWS)];
    let fields: Vec<Field> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| Field::new(name.as_str(), detect_column_type(sample, idx), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let columns = build_columns(&schema, &rows);
    let batch = RecordBatch::try_new(schema, columns)?;

    tracing::info!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "ingested uploaded table"
    );

    Ok(DataTable::new(batch))
}

/// Make header names pairwise unique by renaming repeats.
///
/// The second occurrence of `x` becomes `x_2`; the counter keeps advancing
/// past any suffixed name that already exists as a real header.
fn dedup_headers(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut out = Vec::with_capacity(headers.len());

    for name in headers {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{name}_{suffix}");
        }
        if candidate != name {
            tracing::warn!(original = name, renamed = %candidate, "duplicate column name renamed");
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }

    out
}

/// Detect a column type from sample rows.
///
/// Every non-empty cell must agree; empty cells are nulls and do not veto.
/// Integers are checked before booleans so 0/1 columns stay numeric.
fn detect_column_type(samples: &[Vec<String>], col_idx: usize) -> DataType {
    let mut is_int = true;
    let mut is_float = true;
    let mut is_bool = true;
    let mut saw_value = false;

    for row in samples {
        if let Some(value) = row.get(col_idx) {
            if value.is_empty() {
                continue;
            }
            saw_value = true;

            if is_int && value.parse::<i64>().is_err() {
                is_int = false;
            }
            if is_float && value.parse::<f64>().is_err() {
                is_float = false;
            }
            if is_bool && !matches!(value.to_lowercase().as_str(), "true" | "false") {
                is_bool = false;
            }
        }
    }

    if !saw_value {
        DataType::Utf8
    } else if is_int {
        DataType::Int64
    } else if is_float {
        DataType::Float64
    } else if is_bool {
        DataType::Boolean
    } else {
        DataType::Utf8
    }
}

/// Build one typed arrow array per schema field.
fn build_columns(schema: &Schema, rows: &[Vec<String>]) -> Vec<ArrayRef> {
    schema
        .fields()
        .iter()
        .enumerate()
        .map(|(col_idx, field)| build_column(field.data_type(), rows, col_idx))
        .collect()
}

fn build_column(data_type: &DataType, rows: &[Vec<String>], col_idx: usize) -> ArrayRef {
    match data_type {
        DataType::Int64 => {
            let mut builder = Int64Builder::new();
            for row in rows {
                match row.get(col_idx).filter(|v| !v.is_empty()) {
                    Some(value) => match value.parse::<i64>() {
                        Ok(v) => builder.append_value(v),
                        Err(_) => builder.append_null(),
                    },
                    None => builder.append_null(),
                }
            }
            Arc::new(builder.finish())
        }
        DataType::Float64 => {
            let mut builder = Float64Builder::new();
            for row in rows {
                match row.get(col_idx).filter(|v| !v.is_empty()) {
                    Some(value) => match value.parse::<f64>() {
                        Ok(v) => builder.append_value(v),
                        Err(_) => builder.append_null(),
                    },
                    None => builder.append_null(),
                }
            }
            Arc::new(builder.finish())
        }
        DataType::Boolean => {
            let mut builder = BooleanBuilder::new();
            for row in rows {
                match row.get(col_idx).filter(|v| !v.is_empty()) {
                    Some(value) => match value.to_lowercase().as_str() {
                        "true" => builder.append_value(true),
                        "false" => builder.append_value(false),
                        _ => builder.append_null(),
                    },
                    None => builder.append_null(),
                }
            }
            Arc::new(builder.finish())
        }
        _ => {
            let mut builder = StringBuilder::new();
            for row in rows {
                match row.get(col_idx).filter(|v| !v.is_empty()) {
                    Some(value) => builder.append_value(value),
                    None => builder.append_null(),
                }
            }
            Arc::new(builder.finish())
        }
    }
}
