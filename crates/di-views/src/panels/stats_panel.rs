//! Summary statistics panel

use di_core::{DataTable, PanelRequest};

use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};
use crate::stats;

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    if table.num_rows() == 0 {
        return Err(SkipReason::EmptyTable);
    }

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Summary {
            columns: stats::describe(table),
        },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
