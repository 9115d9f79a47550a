//! Correlation heatmap panel
//!
//! Operates over all numeric columns jointly, independent of the x/y
//! bindings.

use di_core::{DataTable, PanelRequest};

use crate::correlation;
use crate::palette::Palette;
use crate::spec::{ChartSpec, PanelData, SkipReason};

pub(crate) fn resolve(table: &DataTable, request: &PanelRequest) -> Result<ChartSpec, SkipReason> {
    let available = table.numeric_columns().len();
    if available < 2 {
        return Err(SkipReason::InsufficientNumericColumns {
            needed: 2,
            available,
        });
    }

    let (columns, values) = correlation::correlation_matrix(table);

    Ok(ChartSpec {
        kind: request.kind,
        data: PanelData::Matrix { columns, values },
        bindings: request.bindings.clone(),
        palette: Palette::Diverging,
    })
}
