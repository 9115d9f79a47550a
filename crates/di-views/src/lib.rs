//! Panel resolution and rendering for the dashboard
//!
//! Given an ingested table and the user's selection, this crate decides
//! which panels to construct, in what order, and with what fallback when a
//! panel's preconditions are not met. Chart construction itself is behind
//! the [`PanelRenderer`] collaborator seam.

pub mod correlation;
pub mod extract;
pub mod palette;
pub mod panels;
pub mod render;
pub mod spec;
pub mod stats;
pub mod trend;

pub use palette::Palette;
pub use render::{
    run_pass, ArtifactRenderer, BarEntry, HeatCell, PanelArtifact, PanelOutcome, PanelRenderer,
    PieSlice, RenderError,
};
pub use spec::{ChartSpec, PanelData, PanelResolution, SkipReason};
pub use stats::{CategoricalSummary, ColumnSummary, NumericSummary};
pub use trend::{FitOutcome, TrendLine};
