//! Resolved panel specifications

use std::fmt;

use arrow::record_batch::RecordBatch;

use di_core::{PanelKind, Role, RoleBindings};

use crate::palette::Palette;
use crate::stats::ColumnSummary;
use crate::trend::TrendLine;

/// Outcome of resolving one panel request against a table.
///
/// Ephemeral: recomputed on every render pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelResolution {
    Chart(ChartSpec),
    Skipped { kind: PanelKind, reason: SkipReason },
}

/// Fully bound description of a panel, ready to hand to the rendering
/// collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: PanelKind,
    pub data: PanelData,
    pub bindings: RoleBindings,
    pub palette: Palette,
}

/// The extracted data slice for one panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    /// Scatter points, with an optional least-squares overlay. When the fit
    /// was requested but degenerate, `trend` is absent and `trend_note`
    /// records why.
    Points {
        points: Vec<[f64; 2]>,
        trend: Option<TrendLine>,
        trend_note: Option<String>,
    },
    /// Line chart points in row order.
    Series { points: Vec<[f64; 2]> },
    /// Aggregated bar heights, one per category in first-seen order.
    Bars {
        categories: Vec<String>,
        values: Vec<f64>,
    },
    /// Aggregated pie slice values, one per category in first-seen order.
    Slices {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// Pairwise Pearson correlation over all numeric columns. Entries may
    /// be NaN when a correlation is undefined (e.g. a constant column).
    Matrix {
        columns: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    /// Bounded head of the table.
    Rows { head: RecordBatch },
    /// Descriptive statistics over all columns.
    Summary { columns: Vec<ColumnSummary> },
}

/// Why a requested panel did not produce a chart.
///
/// Expected, non-fatal outcomes: each is surfaced inline in place of the
/// panel and never affects sibling panels.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    EmptyTable,
    InsufficientNumericColumns { needed: usize, available: usize },
    MissingBinding(Role),
    UnknownColumn { role: Role, column: String },
    NotNumeric { role: Role, column: String },
    RenderFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyTable => write!(f, "table has no rows"),
            SkipReason::InsufficientNumericColumns { needed, available } => write!(
                f,
                "insufficient numeric columns (need {needed}, found {available})"
            ),
            SkipReason::MissingBinding(role) => {
                write!(f, "missing {} binding", role.label())
            }
            SkipReason::UnknownColumn { role, column } => {
                write!(f, "column '{column}' bound to {} does not exist", role.label())
            }
            SkipReason::NotNumeric { role, column } => {
                write!(f, "column '{column}' bound to {} is not numeric", role.label())
            }
            SkipReason::RenderFailed(message) => write!(f, "render error: {message}"),
        }
    }
}
