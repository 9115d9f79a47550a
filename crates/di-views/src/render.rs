//! The resolve-and-render pass
//!
//! `run_pass` is a pure function from (table, selection) to an ordered panel
//! list: it re-resolves every enabled panel on each call, dispatches the
//! resolved specs to the rendering collaborator, and isolates per-panel
//! failures so one broken panel never takes its siblings down.

use egui::Color32;
use thiserror::Error;

use di_core::{DataTable, PanelKind, SelectionState};

use crate::panels;
use crate::spec::{ChartSpec, PanelData, PanelResolution, SkipReason};
use crate::stats::ColumnSummary;

/// Rendering collaborator: turns a fully bound chart spec into a drawable
/// artifact.
pub trait PanelRenderer {
    type Artifact;

    fn render(&mut self, spec: &ChartSpec) -> Result<Self::Artifact, RenderError>;
}

/// Failure inside the rendering collaborator. Caught per panel and
/// converted to a skip, never propagated across the pass.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct RenderError(pub String);

/// One slot of the pass output, in the user's configured order.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutcome<A> {
    Rendered { kind: PanelKind, artifact: A },
    Skipped { kind: PanelKind, reason: SkipReason },
}

impl<A> PanelOutcome<A> {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelOutcome::Rendered { kind, .. } | PanelOutcome::Skipped { kind, .. } => *kind,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, PanelOutcome::Rendered { .. })
    }
}

/// Resolve every enabled panel in the user's order and render the results.
///
/// Full re-evaluation every call: deterministic given identical inputs, no
/// caching, no cross-panel state.
pub fn run_pass<R: PanelRenderer>(
    table: &DataTable,
    selection: &SelectionState,
    renderer: &mut R,
) -> Vec<PanelOutcome<R::Artifact>> {
    selection
        .requests()
        .iter()
        .map(|request| match panels::resolve(table, request) {
            PanelResolution::Chart(spec) => match renderer.render(&spec) {
                Ok(artifact) => PanelOutcome::Rendered {
                    kind: request.kind,
                    artifact,
                },
                Err(error) => {
                    tracing::warn!(kind = ?request.kind, %error, "render collaborator failed");
                    PanelOutcome::Skipped {
                        kind: request.kind,
                        reason: SkipReason::RenderFailed(error.to_string()),
                    }
                }
            },
            PanelResolution::Skipped { kind, reason } => PanelOutcome::Skipped { kind, reason },
        })
        .collect()
}

/// One aggregated bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// One pie slice with its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: Color32,
}

/// One heatmap cell. `color` is absent when the correlation is undefined;
/// the cell is drawn blank instead of pretending a value.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub value: f64,
    pub color: Option<Color32>,
}

/// Draw-ready panel content produced by [`ArtifactRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum PanelArtifact {
    Points {
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
        color: Color32,
        /// Trend overlay as two endpoints spanning the x range.
        trend: Option<[[f64; 2]; 2]>,
        trend_note: Option<String>,
    },
    Series {
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
        color: Color32,
    },
    Bars {
        x_label: String,
        y_label: String,
        bars: Vec<BarEntry>,
    },
    Slices { slices: Vec<PieSlice> },
    Heatmap {
        columns: Vec<String>,
        cells: Vec<Vec<HeatCell>>,
    },
    Rows { head: arrow::record_batch::RecordBatch },
    Summary { columns: Vec<ColumnSummary> },
}

/// Default rendering collaborator: maps chart specs to draw-ready
/// artifacts, assigning palette colors. Degenerate specs (an empty pie,
/// a malformed matrix) fail here, per panel.
#[derive(Debug, Default)]
pub struct ArtifactRenderer;

impl PanelRenderer for ArtifactRenderer {
    type Artifact = PanelArtifact;

    fn render(&mut self, spec: &ChartSpec) -> Result<PanelArtifact, RenderError> {
        let x_label = spec.bindings.x.clone().unwrap_or_default();
        let y_label = spec.bindings.y.clone().unwrap_or_default();

        match &spec.data {
            PanelData::Points {
                points,
                trend,
                trend_note,
            } => {
                let trend = trend.map(|line| {
                    let (min_x, max_x) = points.iter().fold(
                        (f64::INFINITY, f64::NEG_INFINITY),
                        |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])),
                    );
                    [[min_x, line.y_at(min_x)], [max_x, line.y_at(max_x)]]
                });
                Ok(PanelArtifact::Points {
                    x_label,
                    y_label,
                    points: points.clone(),
                    color: spec.palette.series_color(0),
                    trend,
                    trend_note: trend_note.clone(),
                })
            }
            PanelData::Series { points } => Ok(PanelArtifact::Series {
                x_label,
                y_label,
                points: points.clone(),
                color: spec.palette.series_color(1),
            }),
            PanelData::Bars { categories, values } => Ok(PanelArtifact::Bars {
                x_label,
                y_label,
                bars: categories
                    .iter()
                    .zip(values.iter())
                    .enumerate()
                    .map(|(i, (label, value))| BarEntry {
                        label: label.clone(),
                        value: *value,
                        color: spec.palette.series_color(i),
                    })
                    .collect(),
            }),
            PanelData::Slices { labels, values } => {
                let total: f64 = values.iter().sum();
                if !(total > 0.0) {
                    return Err(RenderError(format!(
                        "pie slice values sum to {total}, nothing to draw"
                    )));
                }
                Ok(PanelArtifact::Slices {
                    slices: labels
                        .iter()
                        .zip(values.iter())
                        .enumerate()
                        .map(|(i, (label, value))| PieSlice {
                            label: label.clone(),
                            value: *value,
                            fraction: value / total,
                            color: spec.palette.series_color(i),
                        })
                        .collect(),
                })
            }
            PanelData::Matrix { columns, values } => {
                if values.len() != columns.len()
                    || values.iter().any(|row| row.len() != columns.len())
                {
                    return Err(RenderError("correlation matrix is not square".to_string()));
                }
                Ok(PanelArtifact::Heatmap {
                    columns: columns.clone(),
                    cells: values
                        .iter()
                        .map(|row| {
                            row.iter()
                                .map(|&value| HeatCell {
                                    value,
                                    color: value.is_finite().then(|| {
                                        spec.palette.scale_color(((value + 1.0) / 2.0) as f32)
                                    }),
                                })
                                .collect()
                        })
                        .collect(),
                })
            }
            PanelData::Rows { head } => Ok(PanelArtifact::Rows { head: head.clone() }),
            PanelData::Summary { columns } => Ok(PanelArtifact::Summary {
                columns: columns.clone(),
            }),
        }
    }
}
