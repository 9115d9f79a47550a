//! Per-kind panel resolvers
//!
//! Each panel kind has a precondition check plus a spec constructor,
//! selected through a function table over the tagged [`PanelKind`] enum.
//! Resolution never fails the pass: an unmet precondition becomes a
//! [`SkipReason`] for that panel alone.

pub mod bar;
pub mod heatmap;
pub mod line;
pub mod pie;
pub mod preview;
pub mod scatter;
pub mod stats_panel;

use di_core::{DataTable, PanelKind, PanelRequest, Role};

use crate::spec::{PanelResolution, SkipReason};

type ResolveFn = fn(&DataTable, &PanelRequest) -> Result<crate::spec::ChartSpec, SkipReason>;

/// Precondition check + constructor for one panel kind.
fn resolver(kind: PanelKind) -> ResolveFn {
    match kind {
        PanelKind::Preview => preview::resolve,
        PanelKind::Stats => stats_panel::resolve,
        PanelKind::Scatter => scatter::resolve,
        PanelKind::Line => line::resolve,
        PanelKind::Bar => bar::resolve,
        PanelKind::Pie => pie::resolve,
        PanelKind::Heatmap => heatmap::resolve,
    }
}

/// Resolve one request against the table.
pub fn resolve(table: &DataTable, request: &PanelRequest) -> PanelResolution {
    match resolver(request.kind)(table, request) {
        Ok(spec) => PanelResolution::Chart(spec),
        Err(reason) => {
            tracing::debug!(kind = ?request.kind, %reason, "panel skipped");
            PanelResolution::Skipped {
                kind: request.kind,
                reason,
            }
        }
    }
}

/// The column bound to `role`, which must exist in the table.
fn require_bound<'a>(
    table: &DataTable,
    request: &'a PanelRequest,
    role: Role,
) -> Result<&'a str, SkipReason> {
    let column = request
        .bindings
        .get(role)
        .ok_or(SkipReason::MissingBinding(role))?;
    if !table.has_column(column) {
        return Err(SkipReason::UnknownColumn {
            role,
            column: column.to_string(),
        });
    }
    Ok(column)
}

/// Like [`require_bound`], but the column must also be numeric.
fn require_numeric<'a>(
    table: &DataTable,
    request: &'a PanelRequest,
    role: Role,
) -> Result<&'a str, SkipReason> {
    let column = require_bound(table, request, role)?;
    if !table.is_numeric_column(column) {
        return Err(SkipReason::NotNumeric {
            role,
            column: column.to_string(),
        });
    }
    Ok(column)
}

/// Axis binding lookup for the x/y charts.
///
/// An unbound axis on a table with fewer than two numeric columns reports
/// the underlying shortage rather than the unset binding it causes (the
/// defaults could never have been seeded).
fn require_axis<'a>(
    table: &DataTable,
    request: &'a PanelRequest,
    role: Role,
    numeric_only: bool,
) -> Result<&'a str, SkipReason> {
    let result = if numeric_only {
        require_numeric(table, request, role)
    } else {
        require_bound(table, request, role)
    };
    match result {
        Err(SkipReason::MissingBinding(_)) if table.numeric_columns().len() < 2 => {
            Err(SkipReason::InsufficientNumericColumns {
                needed: 2,
                available: table.numeric_columns().len(),
            })
        }
        other => other,
    }
}

/// Sum `value_column` per distinct value of `category_column`, categories
/// in first-seen row order. Rows with a null on either side are dropped.
fn aggregate_by_category(
    table: &DataTable,
    category_column: &str,
    value_column: &str,
) -> (Vec<String>, Vec<f64>) {
    use ahash::AHashMap;

    let values = crate::extract::numeric_values(table, value_column).unwrap_or_default();
    let mut categories: Vec<String> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();

    if let Some(array) = table.column_by_name(category_column) {
        for (row, value) in values.iter().enumerate() {
            let Some(value) = value else { continue };
            if array.is_null(row) {
                continue;
            }
            let category = crate::extract::display_value(array.as_ref(), row);
            match index.get(&category) {
                Some(&i) => totals[i] += value,
                None => {
                    index.insert(category.clone(), categories.len());
                    categories.push(category);
                    totals.push(*value);
                }
            }
        }
    }

    (categories, totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{PanelData, SkipReason};
    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use di_core::RoleBindings;
    use std::sync::Arc;

    fn table_abc() -> DataTable {
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Int64, true),
            Field::new("b", DataType::Float64, true),
            Field::new("c", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3, 4])) as _,
                Arc::new(Float64Array::from(vec![10.0, 20.0, 30.0, 40.0])) as _,
                Arc::new(StringArray::from(vec!["u", "v", "u", "v"])) as _,
            ],
        )
        .unwrap();
        DataTable::new(batch)
    }

    fn request(kind: PanelKind, bindings: RoleBindings) -> PanelRequest {
        PanelRequest {
            kind,
            bindings,
            fit_line: false,
        }
    }

    fn xy(x: &str, y: &str) -> RoleBindings {
        RoleBindings {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
            ..RoleBindings::default()
        }
    }

    #[test]
    fn scatter_requires_both_axis_bindings() {
        let table = table_abc();
        let outcome = resolve(
            &table,
            &request(PanelKind::Scatter, RoleBindings::default()),
        );
        assert!(matches!(
            outcome,
            PanelResolution::Skipped {
                reason: SkipReason::MissingBinding(Role::X),
                ..
            }
        ));
    }

    #[test]
    fn scatter_rejects_a_non_numeric_axis() {
        let table = table_abc();
        let outcome = resolve(&table, &request(PanelKind::Scatter, xy("a", "c")));
        assert!(matches!(
            outcome,
            PanelResolution::Skipped {
                reason: SkipReason::NotNumeric { role: Role::Y, .. },
                ..
            }
        ));
    }

    #[test]
    fn scatter_rejects_an_unknown_column() {
        let table = table_abc();
        let outcome = resolve(&table, &request(PanelKind::Scatter, xy("a", "gone")));
        assert!(matches!(
            outcome,
            PanelResolution::Skipped {
                reason: SkipReason::UnknownColumn { role: Role::Y, .. },
                ..
            }
        ));
    }

    #[test]
    fn scatter_resolves_row_aligned_points() {
        let table = table_abc();
        match resolve(&table, &request(PanelKind::Scatter, xy("a", "b"))) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Points { points, trend, .. } => {
                    assert_eq!(points, vec![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]]);
                    assert!(trend.is_none());
                }
                other => panic!("expected points, got {other:?}"),
            },
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn bar_accepts_a_non_numeric_x_and_aggregates() {
        let table = table_abc();
        match resolve(&table, &request(PanelKind::Bar, xy("c", "b"))) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Bars { categories, values } => {
                    assert_eq!(categories, ["u", "v"]);
                    assert_eq!(values, [40.0, 60.0]);
                }
                other => panic!("expected bars, got {other:?}"),
            },
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn line_rejects_a_non_numeric_x() {
        let table = table_abc();
        let outcome = resolve(&table, &request(PanelKind::Line, xy("c", "b")));
        assert!(matches!(
            outcome,
            PanelResolution::Skipped {
                reason: SkipReason::NotNumeric { role: Role::X, .. },
                ..
            }
        ));
    }

    #[test]
    fn pie_aggregates_values_per_category() {
        let table = table_abc();
        let bindings = RoleBindings {
            category: Some("c".to_string()),
            value: Some("a".to_string()),
            ..RoleBindings::default()
        };
        match resolve(&table, &request(PanelKind::Pie, bindings)) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Slices { labels, values } => {
                    assert_eq!(labels, ["u", "v"]);
                    assert_eq!(values, [4.0, 6.0]);
                }
                other => panic!("expected slices, got {other:?}"),
            },
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn heatmap_requires_two_numeric_columns() {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int64, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int64Array::from(vec![1, 2])) as _],
        )
        .unwrap();
        let table = DataTable::new(batch);
        let outcome = resolve(
            &table,
            &request(PanelKind::Heatmap, RoleBindings::default()),
        );
        assert!(matches!(
            outcome,
            PanelResolution::Skipped {
                reason: SkipReason::InsufficientNumericColumns {
                    needed: 2,
                    available: 1
                },
                ..
            }
        ));
    }

    #[test]
    fn heatmap_ignores_bindings_and_uses_all_numeric_columns() {
        let table = table_abc();
        match resolve(&table, &request(PanelKind::Heatmap, xy("c", "c"))) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Matrix { columns, values } => {
                    assert_eq!(columns, ["a", "b"]);
                    assert_eq!(values.len(), 2);
                    assert_eq!(values[0].len(), 2);
                }
                other => panic!("expected matrix, got {other:?}"),
            },
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn preview_is_bounded_to_five_rows() {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int64, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int64Array::from((0..10).collect::<Vec<i64>>())) as _],
        )
        .unwrap();
        let table = DataTable::new(batch);
        match resolve(
            &table,
            &request(PanelKind::Preview, RoleBindings::default()),
        ) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Rows { head } => assert_eq!(head.num_rows(), 5),
                other => panic!("expected rows, got {other:?}"),
            },
            other => panic!("expected chart, got {other:?}"),
        }
    }

    #[test]
    fn preview_and_stats_skip_on_an_empty_table() {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int64, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int64Array::from(Vec::<i64>::new())) as _],
        )
        .unwrap();
        let table = DataTable::new(batch);

        for kind in [PanelKind::Preview, PanelKind::Stats] {
            let outcome = resolve(&table, &request(kind, RoleBindings::default()));
            assert!(matches!(
                outcome,
                PanelResolution::Skipped {
                    reason: SkipReason::EmptyTable,
                    ..
                }
            ));
        }
    }

    #[test]
    fn trend_overlay_is_fail_soft_on_constant_x() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("x", DataType::Float64, true),
            Field::new("y", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![2.0, 2.0, 2.0])) as _,
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])) as _,
            ],
        )
        .unwrap();
        let table = DataTable::new(batch);
        let mut req = request(PanelKind::Scatter, xy("x", "y"));
        req.fit_line = true;

        match resolve(&table, &req) {
            PanelResolution::Chart(spec) => match spec.data {
                PanelData::Points {
                    points,
                    trend,
                    trend_note,
                } => {
                    assert_eq!(points.len(), 3);
                    assert!(trend.is_none());
                    assert!(trend_note.is_some());
                }
                other => panic!("expected points, got {other:?}"),
            },
            other => panic!("expected chart (fit is fail-soft), got {other:?}"),
        }
    }
}
