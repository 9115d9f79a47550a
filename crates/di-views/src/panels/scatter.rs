//! Scatter plot panel

use di_core::{DataTable, PanelRequest, Role};

use crate::extract;
use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};
use crate::trend::{self, FitOutcome};

use super::require_axis;

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    let x = require_axis(table, request, Role::X, true)?;
    let y = require_axis(table, request, Role::Y, true)?;

    let xs = extract::numeric_values(table, x).unwrap_or_default();
    let ys = extract::numeric_values(table, y).unwrap_or_default();
    let points = extract::paired_points(&xs, &ys);

    // Fail-soft fit: a degenerate fit drops the overlay and records why,
    // the scatter itself still renders.
    let (fit, note) = if request.fit_line {
        match trend::fit_line(&points) {
            FitOutcome::Fitted(line) => (Some(line), None),
            FitOutcome::Degenerate { reason } => {
                tracing::debug!(%reason, "trend overlay dropped");
                (None, Some(reason))
            }
        }
    } else {
        (None, None)
    };

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Points {
            points,
            trend: fit,
            trend_note: note,
        },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
