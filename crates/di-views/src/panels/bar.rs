//! Bar chart panel
//!
//! Accepts a non-numeric x column: y values are summed per x category in
//! first-seen order.

use di_core::{DataTable, PanelRequest, Role};

use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};

use super::{aggregate_by_category, require_axis};

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    let x = require_axis(table, request, Role::X, false)?;
    let y = require_axis(table, request, Role::Y, true)?;

    let (categories, values) = aggregate_by_category(table, x, y);

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Bars { categories, values },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
