//! Line chart panel

use di_core::{DataTable, PanelRequest, Role};

use crate::extract;
use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};

use super::require_axis;

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    let x = require_axis(table, request, Role::X, true)?;
    let y = require_axis(table, request, Role::Y, true)?;

    let xs = extract::numeric_values(table, x).unwrap_or_default();
    let ys = extract::numeric_values(table, y).unwrap_or_default();

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Series {
            points: extract::paired_points(&xs, &ys),
        },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
