//! Column value extraction from arrow arrays

use arrow::array::{Array, BooleanArray, Float64Array, Int64Array, StringArray};

use di_core::DataTable;

/// Values of a numeric column, nulls preserved for row alignment.
///
/// Returns `None` when the column is missing or not numeric.
pub fn numeric_values(table: &DataTable, name: &str) -> Option<Vec<Option<f64>>> {
    let array = table.column_by_name(name)?;

    if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
        Some(
            (0..floats.len())
                .map(|i| (!floats.is_null(i)).then(|| floats.value(i)))
                .collect(),
        )
    } else if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        Some(
            (0..ints.len())
                .map(|i| (!ints.is_null(i)).then(|| ints.value(i) as f64))
                .collect(),
        )
    } else {
        None
    }
}

/// Row-aligned (x, y) pairs; rows where either side is null are dropped.
pub fn paired_points(xs: &[Option<f64>], ys: &[Option<f64>]) -> Vec<[f64; 2]> {
    xs.iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some([*x, *y]),
            _ => None,
        })
        .collect()
}

/// Display representation of one cell; nulls render as an empty string.
pub fn display_value(array: &dyn Array, row: usize) -> String {
    if array.is_null(row) {
        return String::new();
    }

    if let Some(strings) = array.as_any().downcast_ref::<StringArray>() {
        strings.value(row).to_string()
    } else if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        ints.value(row).to_string()
    } else if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
        format!("{}", floats.value(row))
    } else if let Some(bools) = array.as_any().downcast_ref::<BooleanArray>() {
        bools.value(row).to_string()
    } else {
        String::new()
    }
}
