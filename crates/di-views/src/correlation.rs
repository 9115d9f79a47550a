//! Pairwise Pearson correlation over the numeric columns

use itertools::Itertools;

use di_core::DataTable;

use crate::extract;

/// Pearson correlation matrix over all numeric columns of the table.
///
/// Returns the column names and a square matrix in the same order. The
/// matrix is symmetric; an undefined correlation (constant column, fewer
/// than two complete pairs) is NaN rather than a made-up zero, so the
/// boundary is surfaced instead of masked.
pub fn correlation_matrix(table: &DataTable) -> (Vec<String>, Vec<Vec<f64>>) {
    let names: Vec<String> = table.numeric_columns().to_vec();
    let series: Vec<Vec<Option<f64>>> = names
        .iter()
        .filter_map(|name| extract::numeric_values(table, name))
        .collect();

    let n = series.len();
    let mut matrix = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        matrix[i][i] = pearson(&series[i], &series[i]);
    }
    for (i, j) in (0..n).tuple_combinations() {
        let r = pearson(&series[i], &series[j]);
        matrix[i][j] = r;
        matrix[j][i] = r;
    }

    (names, matrix)
}

/// Pearson correlation over pairwise-complete observations.
fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Float64Array;
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    fn table(columns: Vec<(&str, Vec<f64>)>) -> DataTable {
        let schema = Arc::new(Schema::new(
            columns
                .iter()
                .map(|(name, _)| Field::new(*name, DataType::Float64, true))
                .collect::<Vec<_>>(),
        ));
        let arrays = columns
            .into_iter()
            .map(|(_, values)| Arc::new(Float64Array::from(values)) as _)
            .collect();
        DataTable::new(RecordBatch::try_new(schema, arrays).unwrap())
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let table = table(vec![
            ("a", vec![1.0, 2.0, 3.0, 4.0]),
            ("b", vec![2.0, 1.0, 4.0, 3.0]),
            ("c", vec![4.0, 3.0, 2.0, 1.0]),
        ]);
        let (names, matrix) = correlation_matrix(&table);
        assert_eq!(names, ["a", "b", "c"]);

        for i in 0..3 {
            assert!((matrix[i][i] - 1.0).abs() < 1e-12);
            for j in 0..3 {
                assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-12);
                assert!(matrix[i][j].abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn perfectly_correlated_columns_hit_one() {
        let table = table(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![2.0, 4.0, 6.0]),
        ]);
        let (_, matrix) = correlation_matrix(&table);
        assert!((matrix[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn anti_correlated_columns_hit_minus_one() {
        let table = table(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![3.0, 2.0, 1.0]),
        ]);
        let (_, matrix) = correlation_matrix(&table);
        assert!((matrix[0][1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_is_surfaced_as_nan() {
        let table = table(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("k", vec![5.0, 5.0, 5.0]),
        ]);
        let (_, matrix) = correlation_matrix(&table);
        assert!(matrix[0][1].is_nan());
        assert!(matrix[1][0].is_nan());
        assert!(matrix[1][1].is_nan());
        assert!((matrix[0][0] - 1.0).abs() < 1e-12);
    }
}
