//! In-memory table model with cached column classification

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;

/// Table produced by one successful upload.
///
/// Wraps the parsed record batch together with its column classification.
/// Immutable for the lifetime of a session; the next upload replaces it
/// wholesale. Classification is computed here, at construction, so no
/// consumer can observe a table without it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    batch: RecordBatch,
    numeric_columns: Vec<String>,
    all_columns: Vec<String>,
}

impl DataTable {
    /// Wrap a record batch, classifying its columns.
    ///
    /// Assumes column names are already unique (the ingestion adapter
    /// guarantees this).
    pub fn new(batch: RecordBatch) -> Self {
        let mut numeric_columns = Vec::new();
        let mut all_columns = Vec::new();

        for field in batch.schema().fields() {
            all_columns.push(field.name().clone());
            if is_numeric(field.data_type()) {
                numeric_columns.push(field.name().clone());
            }
        }

        Self {
            batch,
            numeric_columns,
            all_columns,
        }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn schema(&self) -> Arc<Schema> {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Ordered names of the columns whose values are numeric.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    /// Ordered names of all columns.
    pub fn all_columns(&self) -> &[String] {
        &self.all_columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.all_columns.iter().any(|c| c == name)
    }

    pub fn is_numeric_column(&self, name: &str) -> bool {
        self.numeric_columns.iter().any(|c| c == name)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// First `n` rows as a zero-copy slice of the underlying batch.
    pub fn head(&self, n: usize) -> RecordBatch {
        self.batch.slice(0, n.min(self.batch.num_rows()))
    }
}

fn is_numeric(data_type: &DataType) -> bool {
    matches!(data_type, DataType::Int64 | DataType::Float64)
}
