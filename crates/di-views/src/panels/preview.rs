//! Bounded head-of-table preview panel

use di_core::{DataTable, PanelRequest};

use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};

/// Rows shown in the preview.
pub const PREVIEW_ROWS: usize = 5;

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    if table.num_rows() == 0 {
        return Err(SkipReason::EmptyTable);
    }

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Rows {
            head: table.head(PREVIEW_ROWS),
        },
        bindings: request.bindings.clone(),
        palette: Palette::Categorical,
    })
}
