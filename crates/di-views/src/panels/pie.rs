//! Pie chart panel

use di_core::{DataTable, PanelRequest, Role};

use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};

use super::{aggregate_by_category, require_bound, require_numeric};

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    let category = require_bound(table, request, Role::Category)?;
    let value = require_numeric(table, request, Role::Value)?;

    let (labels, values) = aggregate_by_category(table, category, value);

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Slices { labels, values },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
